use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::preferences::DietaryTag;

/// Food category taxonomy used across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    Meats,
    Legumes,
    Eggs,
    Milks,
    Seeds,
    Seafoods,
    Nuts,
    Vegetables,
    Grains,
}

impl FoodCategory {
    /// All categories, in chart order.
    pub const ALL: [FoodCategory; 9] = [
        FoodCategory::Meats,
        FoodCategory::Legumes,
        FoodCategory::Eggs,
        FoodCategory::Milks,
        FoodCategory::Seeds,
        FoodCategory::Seafoods,
        FoodCategory::Nuts,
        FoodCategory::Vegetables,
        FoodCategory::Grains,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FoodCategory::Meats => "Meats",
            FoodCategory::Legumes => "Legumes",
            FoodCategory::Eggs => "Eggs",
            FoodCategory::Milks => "Milks",
            FoodCategory::Seeds => "Seeds",
            FoodCategory::Seafoods => "Seafoods",
            FoodCategory::Nuts => "Nuts",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Grains => "Grains",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Location-specific protein, cost, and availability for a food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalOverride {
    pub protein: f64,
    pub cost: f64,

    /// Absent in data means available.
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

/// Sourcing and seasonality details for a food.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub in_season: bool,
    pub locally_sourced: bool,
    pub estimated_delivery: String,

    /// Score in [0, 1].
    pub sustainability_score: f64,
}

/// A purchasable protein source with pricing, dietary, and sourcing data.
///
/// `sustainability_score` is duplicated at the top level and inside
/// `availability`; the two copies are not required to agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,

    /// Protein in grams per reference unit.
    pub protein: f64,

    /// Cost per reference unit in the active currency.
    pub cost: f64,

    /// Per-tag claims; a missing map means no claims either way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_info: Option<HashMap<DietaryTag, bool>>,

    /// Tags this food violates. Drives the shortlist filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<DietaryTag>>,

    /// Per-location overrides for protein, cost, and availability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_data: Option<HashMap<Location, RegionalOverride>>,

    /// Home region. Absent means available everywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Source position as (longitude, latitude).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,

    pub availability: Availability,
    pub sustainability_score: f64,
}

impl FoodItem {
    /// Base protein per unit cost. Zero-cost foods rank last.
    #[inline]
    pub fn protein_per_cost(&self) -> f64 {
        if self.cost > 0.0 {
            self.protein / self.cost
        } else {
            0.0
        }
    }

    /// Whether the base numbers are usable for ranking.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.protein > 0.0 && self.cost > 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Regional override for a location, if one exists.
    pub fn override_for(&self, location: Location) -> Option<&RegionalOverride> {
        self.regional_data.as_ref().and_then(|m| m.get(&location))
    }

    /// Whether this food's home region is `location`.
    #[inline]
    pub fn is_local_to(&self, location: Location) -> bool {
        self.location == Some(location)
    }

    /// Whether this food has no home region.
    #[inline]
    pub fn is_global(&self) -> bool {
        self.location.is_none()
    }

    /// The raw dietary claim for a tag, if the food makes one.
    pub fn dietary_flag(&self, tag: &DietaryTag) -> Option<bool> {
        self.dietary_info.as_ref().and_then(|m| m.get(tag)).copied()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
