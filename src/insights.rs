use crate::localize::{format_currency, format_weight};
use crate::models::{FoodItem, Location};

/// One ranked line on an insight card.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightEntry {
    pub label: String,
    pub value: String,
    pub detail: String,
}

/// A titled group of up to three highlighted foods.
#[derive(Debug, Clone)]
pub struct InsightCard {
    pub title: &'static str,
    pub entries: Vec<InsightEntry>,
}

/// Protein for a food as seen from a location, without the cost multiplier.
fn regional_protein(food: &FoodItem, location: Location) -> f64 {
    food.override_for(location)
        .map(|r| r.protein)
        .unwrap_or(food.protein)
}

/// Cost for a food as seen from a location, without the cost multiplier.
fn regional_cost(food: &FoodItem, location: Location) -> f64 {
    food.override_for(location)
        .map(|r| r.cost)
        .unwrap_or(food.cost)
}

/// Build the four insight cards for a location.
///
/// All cards read from one list pre-sorted by regional protein, so
/// the seasonal and local cards surface the highest-protein matches.
/// Every card shows at most three entries.
pub fn build_insights(foods: &[FoodItem], location: Location) -> Vec<InsightCard> {
    let mut ordered: Vec<&FoodItem> = foods.iter().collect();
    ordered.sort_by(|a, b| {
        regional_protein(b, location)
            .partial_cmp(&regional_protein(a, location))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    vec![
        InsightCard {
            title: "Top Protein",
            entries: top_protein_sources(&ordered, location),
        },
        InsightCard {
            title: "Seasonal Picks",
            entries: seasonal_picks(&ordered, location),
        },
        InsightCard {
            title: "Best Value",
            entries: best_value(&ordered, location),
        },
        InsightCard {
            title: "Local Options",
            entries: local_options(&ordered, location),
        },
    ]
}

fn top_protein_sources(ordered: &[&FoodItem], location: Location) -> Vec<InsightEntry> {
    ordered
        .iter()
        .take(3)
        .map(|food| {
            let protein = regional_protein(food, location);
            let cost = regional_cost(food, location);
            InsightEntry {
                label: food.name.clone(),
                value: format_weight(protein, location),
                detail: format!("{:.1}g/$", protein / cost),
            }
        })
        .collect()
}

fn seasonal_picks(ordered: &[&FoodItem], location: Location) -> Vec<InsightEntry> {
    ordered
        .iter()
        .filter(|food| food.availability.in_season)
        .take(3)
        .map(|food| InsightEntry {
            label: food.name.clone(),
            value: format_currency(food.cost, location),
            detail: format!("{:.0}% eco", food.sustainability_score * 100.0),
        })
        .collect()
}

fn best_value(ordered: &[&FoodItem], location: Location) -> Vec<InsightEntry> {
    let mut local: Vec<&FoodItem> = ordered
        .iter()
        .copied()
        .filter(|food| food.availability.locally_sourced)
        .collect();
    local.sort_by(|a, b| {
        b.protein_per_cost()
            .partial_cmp(&a.protein_per_cost())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    local
        .into_iter()
        .take(3)
        .map(|food| InsightEntry {
            label: food.name.clone(),
            value: format!("{:.1}g/$", food.protein_per_cost()),
            detail: format_currency(food.cost, location),
        })
        .collect()
}

fn local_options(ordered: &[&FoodItem], location: Location) -> Vec<InsightEntry> {
    ordered
        .iter()
        .filter(|food| food.availability.locally_sourced)
        .take(3)
        .map(|food| InsightEntry {
            label: food.name.clone(),
            value: format_currency(food.cost, location),
            detail: food.availability.estimated_delivery.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::models::{Availability, FoodCategory, RegionalOverride};

    use super::*;

    fn make_food(name: &str, protein: f64, cost: f64, in_season: bool, local: bool) -> FoodItem {
        FoodItem {
            id: name.to_lowercase().replace(' ', "_"),
            name: name.to_string(),
            category: FoodCategory::Legumes,
            protein,
            cost,
            dietary_info: None,
            restrictions: None,
            regional_data: None,
            location: None,
            coordinates: None,
            availability: Availability {
                in_season,
                locally_sourced: local,
                estimated_delivery: "1-2 days".to_string(),
                sustainability_score: 0.5,
            },
            sustainability_score: 0.6,
        }
    }

    #[test]
    fn test_top_protein_uses_regional_values_without_multiplier() {
        let mut imported = make_food("Imported", 10.0, 5.0, true, false);
        let mut overrides = HashMap::new();
        overrides.insert(
            Location::JP,
            RegionalOverride {
                protein: 40.0,
                cost: 800.0,
                availability: true,
            },
        );
        imported.regional_data = Some(overrides);

        let plain = make_food("Plain", 30.0, 3.0, true, false);
        let cards = build_insights(&[imported, plain], Location::JP);

        let top = &cards[0];
        assert_eq!(top.title, "Top Protein");
        assert_eq!(top.entries[0].label, "Imported");
        assert_eq!(top.entries[0].value, "40.0g");
        // 40 / 800, the raw override cost with no multiplier applied.
        assert_eq!(top.entries[0].detail, "0.1g/$");
        assert_eq!(top.entries[1].label, "Plain");
    }

    #[test]
    fn test_seasonal_picks_follow_protein_order_and_top_level_score() {
        let mut a = make_food("High", 30.0, 3.0, true, false);
        a.sustainability_score = 0.91;
        a.availability.sustainability_score = 0.12;
        let b = make_food("Low", 5.0, 1.0, true, false);
        let c = make_food("Hidden", 50.0, 9.0, false, false);

        let cards = build_insights(&[b.clone(), a, c], Location::US);
        let seasonal = &cards[1];

        assert_eq!(seasonal.title, "Seasonal Picks");
        assert_eq!(seasonal.entries.len(), 2);
        assert_eq!(seasonal.entries[0].label, "High");
        assert_eq!(seasonal.entries[0].detail, "91% eco");
        assert_eq!(seasonal.entries[1].label, "Low");
    }

    #[test]
    fn test_best_value_ranks_local_foods_by_base_ratio() {
        let cheap = make_food("Cheap Local", 12.0, 1.0, true, true);
        let rich = make_food("Rich Local", 40.0, 8.0, true, true);
        let foreign = make_food("Foreign", 50.0, 1.0, true, false);

        let cards = build_insights(&[rich, cheap, foreign], Location::US);
        let value = &cards[2];

        assert_eq!(value.title, "Best Value");
        assert_eq!(value.entries.len(), 2);
        assert_eq!(value.entries[0].label, "Cheap Local");
        assert_eq!(value.entries[0].value, "12.0g/$");
        assert_eq!(value.entries[1].label, "Rich Local");
    }

    #[test]
    fn test_local_options_show_delivery() {
        let mut farm = make_food("Farm Eggs", 13.0, 4.0, true, true);
        farm.availability.estimated_delivery = "Same day".to_string();

        let cards = build_insights(&[farm], Location::US);
        let local = &cards[3];

        assert_eq!(local.title, "Local Options");
        assert_eq!(local.entries[0].detail, "Same day");
        assert_eq!(local.entries[0].value, "$4.00");
    }

    #[test]
    fn test_cards_cap_at_three_entries() {
        let foods: Vec<FoodItem> = (0..5)
            .map(|i| make_food(&format!("Food {i}"), 10.0 + i as f64, 2.0, true, true))
            .collect();

        for card in build_insights(&foods, Location::US) {
            assert!(card.entries.len() <= 3);
        }
    }
}
