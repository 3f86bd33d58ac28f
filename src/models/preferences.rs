use serde::{Deserialize, Serialize};

use super::location::Location;

/// A dietary preference tag.
///
/// The named tags get dedicated rules in the analysis filter; anything
/// else is carried as [`DietaryTag::Other`] and checked against a food's
/// dietary info, passing when the food makes no claim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryTag {
    None,
    Vegetarian,
    Vegan,
    Pescatarian,
    GlutenFree,
    DairyFree,
    Other(String),
}

impl DietaryTag {
    /// Tags offered in the restrictions prompt, in display order.
    pub const SELECTABLE: [DietaryTag; 5] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::Pescatarian,
        DietaryTag::GlutenFree,
        DietaryTag::DairyFree,
    ];

    /// Canonical lowercase form used in data files.
    pub fn as_str(&self) -> &str {
        match self {
            DietaryTag::None => "none",
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::Pescatarian => "pescatarian",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::DairyFree => "dairy-free",
            DietaryTag::Other(s) => s,
        }
    }
}

impl From<String> for DietaryTag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "none" => DietaryTag::None,
            "vegetarian" => DietaryTag::Vegetarian,
            "vegan" => DietaryTag::Vegan,
            "pescatarian" => DietaryTag::Pescatarian,
            "gluten-free" => DietaryTag::GlutenFree,
            "dairy-free" => DietaryTag::DairyFree,
            _ => DietaryTag::Other(s),
        }
    }
}

impl From<DietaryTag> for String {
    fn from(tag: DietaryTag) -> Self {
        match tag {
            DietaryTag::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit system for weight display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// User constraints driving a single planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Daily protein goal in grams.
    pub protein_goal: f64,

    /// Daily budget in the active location's currency.
    pub budget: f64,

    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryTag>,

    pub location: Location,

    /// Accepted and round-tripped; selection never consults it.
    pub unit_system: UnitSystem,

    /// Accepted and round-tripped; selection never consults it.
    pub seasonal_preference: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            protein_goal: 150.0,
            budget: 50.0,
            dietary_restrictions: Vec::new(),
            location: Location::US,
            unit_system: UnitSystem::Metric,
            seasonal_preference: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for raw in ["none", "vegetarian", "vegan", "pescatarian", "gluten-free", "dairy-free"] {
            let tag = DietaryTag::from(raw.to_string());
            assert!(!matches!(tag, DietaryTag::Other(_)), "{} parsed as Other", raw);
            assert_eq!(tag.as_str(), raw);
        }
    }

    #[test]
    fn test_unknown_tag_is_other() {
        let tag = DietaryTag::from("keto".to_string());
        assert_eq!(tag, DietaryTag::Other("keto".to_string()));
        assert_eq!(String::from(tag), "keto");
    }

    #[test]
    fn test_tag_serde_as_string() {
        let json = serde_json::to_string(&DietaryTag::GlutenFree).unwrap();
        assert_eq!(json, "\"gluten-free\"");
        let back: DietaryTag = serde_json::from_str("\"vegan\"").unwrap();
        assert_eq!(back, DietaryTag::Vegan);
    }

    #[test]
    fn test_default_preferences() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.protein_goal, 150.0);
        assert_eq!(prefs.budget, 50.0);
        assert!(prefs.dietary_restrictions.is_empty());
        assert_eq!(prefs.location, Location::US);
        assert!(prefs.seasonal_preference);
    }
}
