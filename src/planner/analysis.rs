use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::models::{FoodCategory, FoodItem, UserPreferences};

use super::filter::filter_for_analysis;
use super::regional::resolve_regional;

/// One food positioned by regional protein and price efficiency.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyPoint {
    pub name: String,

    /// Regional protein in grams.
    pub protein: f64,

    /// Regional cost after the location multiplier.
    pub cost: f64,

    /// Cost per gram of protein, rounded to two decimals.
    pub cost_per_gram: f64,

    /// Grams of protein per unit cost, rounded to two decimals.
    pub efficiency: f64,

    /// Whether a regional record supplied the numbers.
    pub regional_pricing: bool,
}

/// All viable foods in one category, best efficiency first.
#[derive(Debug, Clone)]
pub struct CategorySeries {
    pub category: FoodCategory,
    pub points: Vec<EfficiencyPoint>,
}

/// Round a value to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the market analysis: regionally priced efficiency points
/// grouped by category.
///
/// Foods unavailable in the region or failing the category-level
/// dietary rules are dropped, as are foods whose regional numbers are
/// not both positive. Points within a category are ordered by rounded
/// efficiency, so near-ties keep input order. Categories with no
/// points are omitted.
pub fn build_analysis(foods: &[FoodItem], prefs: &UserPreferences) -> Vec<CategorySeries> {
    let mut grouped: HashMap<FoodCategory, Vec<EfficiencyPoint>> = HashMap::new();

    for food in filter_for_analysis(foods, prefs) {
        let pricing = resolve_regional(food, prefs.location);
        if !pricing.is_viable() {
            continue;
        }

        grouped
            .entry(food.category)
            .or_default()
            .push(EfficiencyPoint {
                name: food.name.clone(),
                protein: pricing.protein,
                cost: pricing.cost,
                cost_per_gram: round2(pricing.cost / pricing.protein),
                efficiency: round2(pricing.protein / pricing.cost),
                regional_pricing: food.override_for(prefs.location).is_some(),
            });
    }

    FoodCategory::ALL
        .into_iter()
        .filter_map(|category| {
            grouped.remove(&category).map(|mut points| {
                points.sort_by(|a, b| {
                    b.efficiency
                        .partial_cmp(&a.efficiency)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                CategorySeries { category, points }
            })
        })
        .collect()
}

/// Write the analysis as CSV, one row per point.
pub fn write_analysis_csv(series: &[CategorySeries], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record([
        "category",
        "name",
        "protein_g",
        "cost",
        "cost_per_gram",
        "efficiency",
    ])?;

    for group in series {
        for point in &group.points {
            wtr.write_record([
                group.category.name().to_string(),
                point.name.clone(),
                format!("{:.1}", point.protein),
                format!("{:.2}", point.cost),
                format!("{:.2}", point.cost_per_gram),
                format!("{:.2}", point.efficiency),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
