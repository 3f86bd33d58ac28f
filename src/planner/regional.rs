use crate::models::{FoodItem, Location};

use super::constants::cost_multiplier;

/// Protein and cost for a food as seen from one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalPricing {
    pub protein: f64,
    pub cost: f64,
}

impl RegionalPricing {
    /// Whether the numbers are usable for efficiency ranking.
    #[inline]
    pub fn is_viable(&self) -> bool {
        self.protein > 0.0 && self.cost > 0.0
    }
}

/// Resolve a food's protein and cost for a location.
///
/// A regional override replaces both numbers when one exists for the
/// location; otherwise the base numbers apply. The location's cost
/// multiplier is applied on top either way.
pub fn resolve_regional(food: &FoodItem, location: Location) -> RegionalPricing {
    let (protein, cost) = match food.override_for(location) {
        Some(record) => (record.protein, record.cost),
        None => (food.protein, food.cost),
    };

    RegionalPricing {
        protein,
        cost: cost * cost_multiplier(location),
    }
}
