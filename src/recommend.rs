use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Datelike, Local};

use crate::models::{DietaryTag, Location};

/// Calendar season, northern-hemisphere months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Season for a 1-based calendar month.
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Season for the local clock.
    pub fn current() -> Season {
        Season::from_month(Local::now().month())
    }

    pub fn parse(input: &str) -> Option<Season> {
        match input.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Typical meal composition for a region.
#[derive(Debug, Clone, Copy)]
pub struct MealPatterns {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
}

/// Produce in season per quarter for a region.
#[derive(Debug, Clone, Copy)]
pub struct SeasonalProduce {
    pub spring: &'static [&'static str],
    pub summer: &'static [&'static str],
    pub fall: &'static [&'static str],
    pub winter: &'static [&'static str],
}

impl SeasonalProduce {
    pub fn for_season(&self, season: Season) -> &'static [&'static str] {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
            Season::Winter => self.winter,
        }
    }
}

/// Eating habits and produce calendar for one region.
#[derive(Debug, Clone, Copy)]
pub struct RegionalProfile {
    pub common_proteins: &'static [&'static str],
    pub dietary_trends: &'static [&'static str],
    pub meal_patterns: MealPatterns,
    pub seasonal: SeasonalProduce,
}

static US_PROFILE: RegionalProfile = RegionalProfile {
    common_proteins: &["Chicken Breast", "Ground Beef", "Whey Protein"],
    dietary_trends: &["Keto", "Paleo", "Plant-based"],
    meal_patterns: MealPatterns {
        breakfast: &["Eggs", "Oatmeal", "Protein Shake"],
        lunch: &["Sandwich", "Salad", "Bowl"],
        dinner: &["Grilled Protein", "Vegetables", "Grain"],
    },
    seasonal: SeasonalProduce {
        spring: &["Asparagus", "Peas"],
        summer: &["Berries", "Tomatoes"],
        fall: &["Pumpkin", "Sweet Potato"],
        winter: &["Citrus", "Root Vegetables"],
    },
};

/// Profiles by region. Regions without one borrow the US profile.
static PROFILES: LazyLock<HashMap<Location, RegionalProfile>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Location::US, US_PROFILE);
    m.insert(
        Location::UK,
        RegionalProfile {
            common_proteins: &["Scottish Salmon", "Chicken Breast", "Baked Beans"],
            dietary_trends: &["Plant-based", "Flexitarian", "High-protein"],
            meal_patterns: MealPatterns {
                breakfast: &["Porridge", "Eggs", "Toast"],
                lunch: &["Sandwich", "Soup", "Jacket Potato"],
                dinner: &["Roast", "Fish", "Vegetables"],
            },
            seasonal: SeasonalProduce {
                spring: &["Asparagus", "Rhubarb"],
                summer: &["Strawberries", "Broad Beans"],
                fall: &["Apples", "Squash"],
                winter: &["Parsnips", "Kale"],
            },
        },
    );
    m.insert(
        Location::JP,
        RegionalProfile {
            common_proteins: &["Tofu", "Natto", "Grilled Fish"],
            dietary_trends: &["Washoku", "Plant-forward", "Low-sugar"],
            meal_patterns: MealPatterns {
                breakfast: &["Rice", "Miso Soup", "Grilled Fish"],
                lunch: &["Bento", "Noodles", "Donburi"],
                dinner: &["Rice", "Pickles", "Simmered Dish"],
            },
            seasonal: SeasonalProduce {
                spring: &["Bamboo Shoots", "Strawberries"],
                summer: &["Edamame", "Eggplant"],
                fall: &["Matsutake", "Persimmon"],
                winter: &["Daikon", "Mikan"],
            },
        },
    );
    m.insert(
        Location::IN,
        RegionalProfile {
            common_proteins: &["Paneer", "Lentils", "Chickpeas"],
            dietary_trends: &["Vegetarian", "Ayurvedic", "High-pulse"],
            meal_patterns: MealPatterns {
                breakfast: &["Idli", "Paratha", "Poha"],
                lunch: &["Dal", "Rice", "Roti"],
                dinner: &["Curry", "Sabzi", "Curd"],
            },
            seasonal: SeasonalProduce {
                spring: &["Green Chickpeas", "Spinach"],
                summer: &["Mango", "Okra"],
                fall: &["Guava", "Cauliflower"],
                winter: &["Carrots", "Mustard Greens"],
            },
        },
    );
    m.insert(
        Location::ES,
        RegionalProfile {
            common_proteins: &["Jamón Ibérico", "Merluza", "Chickpeas"],
            dietary_trends: &["Mediterranean", "Plant-based", "Flexitarian"],
            meal_patterns: MealPatterns {
                breakfast: &["Tostada", "Tortilla", "Fruit"],
                lunch: &["Cocido", "Paella", "Ensalada"],
                dinner: &["Tapas", "Pescado", "Verduras"],
            },
            seasonal: SeasonalProduce {
                spring: &["Artichokes", "Strawberries"],
                summer: &["Tomatoes", "Melon"],
                fall: &["Mushrooms", "Chestnuts"],
                winter: &["Oranges", "Cabbage"],
            },
        },
    );
    m
});

/// Keywords that mark a protein as animal-derived.
const ANIMAL_KEYWORDS: [&str; 5] = ["Chicken", "Beef", "Fish", "Eggs", "Whey"];

/// Get the regional profile for a location.
pub fn profile_for(location: Location) -> &'static RegionalProfile {
    PROFILES.get(&location).unwrap_or(&US_PROFILE)
}

/// Region- and season-aware food suggestions.
///
/// Starts from the region's common proteins, drops animal-keyword
/// matches for vegans, then appends the season's produce. The keyword
/// screen is a name check only; a fish not named as one passes.
pub fn recommendations(
    location: Location,
    season: Season,
    restrictions: &[DietaryTag],
) -> Vec<String> {
    let profile = profile_for(location);
    let vegan = restrictions.contains(&DietaryTag::Vegan);

    let mut picks: Vec<String> = profile
        .common_proteins
        .iter()
        .filter(|protein| !vegan || !ANIMAL_KEYWORDS.iter().any(|kw| protein.contains(kw)))
        .map(|s| s.to_string())
        .collect();

    picks.extend(
        profile
            .seasonal
            .for_season(season)
            .iter()
            .map(|s| s.to_string()),
    );
    picks
}
