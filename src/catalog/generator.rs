use std::collections::HashMap;

use crate::models::{Availability, DietaryTag, FoodCategory, FoodItem, Location, RegionalOverride};

// Seed entries ship marked locally sourced; only file rows get the
// flag recomputed for the active location.
fn availability(in_season: bool, delivery: &str, score: f64) -> Availability {
    Availability {
        in_season,
        locally_sourced: true,
        estimated_delivery: delivery.to_string(),
        sustainability_score: score,
    }
}

/// The built-in seed catalog.
///
/// Used as-is when no catalog file exists and appended to one when it
/// does. Base costs are in US dollars; regional override costs are in
/// the override's local currency, normalized later by the location
/// multiplier.
pub fn builtin_catalog() -> Vec<FoodItem> {
    vec![
        // US foods
        FoodItem {
            id: "us_chicken_1".to_string(),
            name: "Chicken Breast".to_string(),
            category: FoodCategory::Meats,
            protein: 31.0,
            cost: 3.99,
            dietary_info: None,
            restrictions: Some(vec![
                DietaryTag::Vegetarian,
                DietaryTag::Vegan,
                DietaryTag::Pescatarian,
            ]),
            regional_data: Some(HashMap::from([(
                Location::JP,
                RegionalOverride {
                    protein: 29.0,
                    cost: 650.0,
                    availability: true,
                },
            )])),
            location: Some(Location::US),
            coordinates: Some([-93.2650, 44.9778]), // Minneapolis
            availability: availability(true, "1-2 days", 0.7),
            sustainability_score: 0.7,
        },
        FoodItem {
            id: "us_eggs_1".to_string(),
            name: "Free-Range Eggs".to_string(),
            category: FoodCategory::Eggs,
            protein: 13.0,
            cost: 4.50,
            dietary_info: None,
            restrictions: Some(vec![DietaryTag::Vegan]),
            regional_data: None,
            location: Some(Location::US),
            coordinates: Some([-95.3698, 29.7604]), // Houston
            availability: availability(true, "1-2 days", 0.75),
            sustainability_score: 0.75,
        },
        FoodItem {
            id: "us_almonds_1".to_string(),
            name: "Almonds".to_string(),
            category: FoodCategory::Nuts,
            protein: 21.0,
            cost: 9.99,
            dietary_info: Some(HashMap::from([(DietaryTag::GlutenFree, true)])),
            restrictions: None,
            regional_data: None,
            location: Some(Location::US),
            coordinates: Some([-122.4194, 37.7749]), // San Francisco
            availability: availability(true, "2-3 days", 0.55),
            sustainability_score: 0.55,
        },
        FoodItem {
            id: "us_broccoli_1".to_string(),
            name: "Broccoli".to_string(),
            category: FoodCategory::Vegetables,
            protein: 2.8,
            cost: 1.99,
            dietary_info: None,
            restrictions: None,
            regional_data: None,
            location: Some(Location::US),
            coordinates: Some([-122.4194, 37.7749]), // San Francisco
            availability: availability(false, "1-2 days", 0.9),
            sustainability_score: 0.9,
        },
        // Spanish foods
        FoodItem {
            id: "es_jamon_1".to_string(),
            name: "Jamón Ibérico".to_string(),
            category: FoodCategory::Meats,
            protein: 43.0,
            cost: 15.00,
            dietary_info: None,
            restrictions: Some(vec![
                DietaryTag::Vegetarian,
                DietaryTag::Vegan,
                DietaryTag::Pescatarian,
            ]),
            regional_data: Some(HashMap::from([(
                Location::UK,
                RegionalOverride {
                    protein: 43.0,
                    cost: 12.0,
                    availability: false,
                },
            )])),
            location: Some(Location::ES),
            coordinates: Some([-3.7038, 40.4168]), // Madrid
            availability: availability(true, "1-2 days", 0.8),
            sustainability_score: 0.8,
        },
        FoodItem {
            id: "es_merluza_1".to_string(),
            name: "Merluza".to_string(),
            category: FoodCategory::Seafoods,
            protein: 24.0,
            cost: 8.50,
            dietary_info: None,
            restrictions: Some(vec![DietaryTag::Vegetarian, DietaryTag::Vegan]),
            regional_data: None,
            location: Some(Location::ES),
            coordinates: Some([2.1734, 41.3851]), // Barcelona
            availability: availability(true, "1 day", 0.9),
            sustainability_score: 0.9,
        },
        // UK foods
        FoodItem {
            id: "uk_salmon_1".to_string(),
            name: "Scottish Salmon".to_string(),
            category: FoodCategory::Seafoods,
            protein: 25.0,
            cost: 7.99,
            dietary_info: None,
            restrictions: Some(vec![DietaryTag::Vegetarian, DietaryTag::Vegan]),
            regional_data: None,
            location: Some(Location::UK),
            coordinates: Some([-3.1883, 55.9533]), // Edinburgh
            availability: availability(true, "1-2 days", 0.85),
            sustainability_score: 0.85,
        },
        // Japanese foods
        FoodItem {
            id: "jp_tofu_1".to_string(),
            name: "Tofu".to_string(),
            category: FoodCategory::Legumes,
            protein: 8.0,
            cost: 2.50,
            dietary_info: Some(HashMap::from([(DietaryTag::GlutenFree, true)])),
            restrictions: None,
            regional_data: None,
            location: Some(Location::JP),
            coordinates: Some([139.6503, 35.6762]), // Tokyo
            availability: availability(true, "1 day", 0.95),
            sustainability_score: 0.95,
        },
        FoodItem {
            id: "jp_natto_1".to_string(),
            name: "Natto".to_string(),
            category: FoodCategory::Legumes,
            protein: 19.0,
            cost: 3.00,
            dietary_info: None,
            restrictions: None,
            regional_data: None,
            location: Some(Location::JP),
            coordinates: Some([135.5023, 34.6937]), // Osaka
            availability: availability(true, "1 day", 0.95),
            sustainability_score: 0.95,
        },
        // Indian foods
        FoodItem {
            id: "in_lentils_1".to_string(),
            name: "Red Lentils".to_string(),
            category: FoodCategory::Legumes,
            protein: 9.0,
            cost: 1.50,
            dietary_info: Some(HashMap::from([(DietaryTag::GlutenFree, true)])),
            restrictions: None,
            regional_data: Some(HashMap::from([(
                Location::IN,
                RegionalOverride {
                    protein: 9.5,
                    cost: 120.0,
                    availability: true,
                },
            )])),
            location: Some(Location::IN),
            coordinates: Some([77.2090, 28.6139]), // New Delhi
            availability: availability(true, "1 day", 0.9),
            sustainability_score: 0.9,
        },
        FoodItem {
            id: "in_paneer_1".to_string(),
            name: "Paneer".to_string(),
            category: FoodCategory::Milks,
            protein: 18.0,
            cost: 4.00,
            dietary_info: None,
            restrictions: Some(vec![DietaryTag::Vegan, DietaryTag::DairyFree]),
            regional_data: Some(HashMap::from([(
                Location::IN,
                RegionalOverride {
                    protein: 18.0,
                    cost: 320.0,
                    availability: true,
                },
            )])),
            location: Some(Location::IN),
            coordinates: Some([72.8777, 19.0760]), // Mumbai
            availability: availability(true, "1-2 days", 0.65),
            sustainability_score: 0.65,
        },
        // Global staples
        FoodItem {
            id: "yogurt_1".to_string(),
            name: "Greek Yogurt".to_string(),
            category: FoodCategory::Milks,
            protein: 10.0,
            cost: 1.25,
            dietary_info: None,
            restrictions: Some(vec![DietaryTag::Vegan, DietaryTag::DairyFree]),
            regional_data: None,
            location: None,
            coordinates: None,
            availability: availability(true, "1-2 days", 0.6),
            sustainability_score: 0.6,
        },
        FoodItem {
            id: "quinoa_1".to_string(),
            name: "Quinoa".to_string(),
            category: FoodCategory::Grains,
            protein: 14.0,
            cost: 4.25,
            dietary_info: Some(HashMap::from([(DietaryTag::GlutenFree, true)])),
            restrictions: None,
            regional_data: None,
            location: None,
            coordinates: None,
            availability: availability(true, "3-5 days", 0.8),
            sustainability_score: 0.8,
        },
        FoodItem {
            id: "seeds_1".to_string(),
            name: "Pumpkin Seeds".to_string(),
            category: FoodCategory::Seeds,
            protein: 19.0,
            cost: 5.50,
            dietary_info: Some(HashMap::from([(DietaryTag::GlutenFree, true)])),
            restrictions: None,
            regional_data: None,
            location: None,
            coordinates: None,
            availability: availability(false, "3-5 days", 0.7),
            sustainability_score: 0.7,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let catalog = builtin_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_all_entries_rankable() {
        for food in builtin_catalog() {
            assert!(food.is_valid(), "{} has unusable numbers", food.name);
            let score = food.availability.sustainability_score;
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_jamon_blocked_in_uk() {
        let catalog = builtin_catalog();
        let jamon = catalog.iter().find(|f| f.id == "es_jamon_1").unwrap();
        let record = jamon.override_for(Location::UK).unwrap();
        assert!(!record.availability);
    }

    #[test]
    fn test_quinoa_claims_gluten_free() {
        let catalog = builtin_catalog();
        let quinoa = catalog.iter().find(|f| f.id == "quinoa_1").unwrap();
        assert_eq!(quinoa.dietary_flag(&DietaryTag::GlutenFree), Some(true));
    }
}
