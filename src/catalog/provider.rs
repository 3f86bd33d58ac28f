use std::collections::HashMap;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::models::{
    Availability, DietaryTag, FoodCategory, FoodItem, Location, RegionalOverride,
};

use super::generator::builtin_catalog;
use super::persistence::{dedup_by_id, load_entries};

/// Availability block as it appears in a catalog file. Every field is
/// optional; normalization fills the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailability {
    pub in_season: Option<bool>,
    pub estimated_delivery: Option<String>,
    pub sustainability_score: Option<f64>,
}

/// One catalog file entry before normalization.
///
/// Rows are deliberately loose so hand-edited files with partial
/// entries still load. Rows missing name, category, protein, or cost
/// are dropped during normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFoodRow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<FoodCategory>,
    pub protein: Option<f64>,
    pub cost: Option<f64>,

    #[serde(default)]
    pub dietary_info: Option<HashMap<DietaryTag, bool>>,

    #[serde(default)]
    pub restrictions: Option<Vec<DietaryTag>>,

    #[serde(default)]
    pub regional_data: Option<HashMap<Location, RegionalOverride>>,

    pub location: Option<String>,
    pub coordinates: Option<[f64; 2]>,

    #[serde(default)]
    pub availability: Option<RawAvailability>,

    pub sustainability_score: Option<f64>,
}

/// Turn a raw file row into a fully populated food.
///
/// Missing identity or nutrition fields drop the row. A missing
/// location code means US. `locallySourced` is always recomputed
/// against the active location from the raw code, so an unknown code
/// is never local. Absent seasonality and sustainability values are
/// drawn at random, one draw per missing copy.
pub fn normalize_row(row: RawFoodRow, active: Location, rng: &mut impl Rng) -> Option<FoodItem> {
    let name = row.name?;
    let category = row.category?;
    let protein = row.protein?;
    let cost = row.cost?;

    let id = row
        .id
        .unwrap_or_else(|| name.to_lowercase().replace(' ', "_"));
    let raw_is_local = row.location.as_deref() == Some(active.code());
    let location = Location::parse_or_default(row.location.as_deref().unwrap_or("US"));

    let block = row.availability.unwrap_or_default();
    let top_score = row
        .sustainability_score
        .unwrap_or_else(|| rng.gen_range(0.0..1.0));
    let block_score = block
        .sustainability_score
        .or(row.sustainability_score)
        .unwrap_or_else(|| rng.gen_range(0.0..1.0));

    Some(FoodItem {
        id,
        name,
        category,
        protein,
        cost,
        dietary_info: row.dietary_info,
        restrictions: Some(row.restrictions.unwrap_or_default()),
        regional_data: row.regional_data,
        location: Some(location),
        coordinates: row.coordinates,
        availability: Availability {
            in_season: block.in_season.unwrap_or_else(|| rng.gen_bool(0.5)),
            locally_sourced: raw_is_local,
            estimated_delivery: block
                .estimated_delivery
                .unwrap_or_else(|| "1-2 days".to_string()),
            sustainability_score: block_score,
        },
        sustainability_score: top_score,
    })
}

/// Load the catalog for a location, falling back to the built-in data.
///
/// A readable file contributes its normalized rows with the built-in
/// catalog appended behind them; duplicates collapse by id. A missing
/// file means the built-in catalog alone. An unreadable or malformed
/// file is reported and the built-in catalog used instead.
pub fn load_or_builtin<P: AsRef<Path>>(path: P, location: Location) -> Vec<FoodItem> {
    let path = path.as_ref();
    if !path.exists() {
        return builtin_catalog();
    }

    match load_entries(path) {
        Ok(entries) => {
            let mut rng = rand::thread_rng();
            let total = entries.len();

            let mut foods: Vec<FoodItem> = entries
                .into_iter()
                .filter_map(|value| serde_json::from_value::<RawFoodRow>(value).ok())
                .filter_map(|row| normalize_row(row, location, &mut rng))
                .collect();

            let skipped = total - foods.len();
            if skipped > 0 {
                eprintln!("Warning: skipped {skipped} malformed catalog entries");
            }

            foods.extend(builtin_catalog());
            dedup_by_id(foods)
        }
        Err(e) => {
            eprintln!("Error loading catalog: {e}, using built-in data");
            builtin_catalog()
        }
    }
}
