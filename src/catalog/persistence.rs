use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodItem;

/// Load raw catalog entries from a JSON file.
///
/// Entries come back untyped so malformed rows can be skipped
/// individually instead of failing the whole file.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<serde_json::Value>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;
    Ok(entries)
}

/// Save a catalog to a JSON file.
///
/// Deduplicates by id before saving.
pub fn save_catalog<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let deduped = dedup_by_id(foods.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Deduplicate foods by id, keeping the first occurrence.
///
/// Load order puts file rows ahead of the built-in catalog, so a file
/// row reusing a built-in id shadows it.
pub fn dedup_by_id(foods: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut deduped = Vec::with_capacity(foods.len());

    for food in foods {
        if seen.insert(food.id.clone()) {
            deduped.push(food);
        }
    }

    deduped
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::catalog::builtin_catalog;

    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let catalog = builtin_catalog();

        let file = NamedTempFile::new().unwrap();
        save_catalog(file.path(), &catalog).unwrap();

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), catalog.len());

        let first: FoodItem = serde_json::from_value(entries[0].clone()).unwrap();
        assert_eq!(first.id, catalog[0].id);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();

        assert!(load_entries(file.path()).is_err());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut a = builtin_catalog()[0].clone();
        a.id = "dup".to_string();
        a.protein = 1.0;

        let other = builtin_catalog()[1].clone();

        let mut b = a.clone();
        b.protein = 2.0;

        let deduped = dedup_by_id(vec![a, other.clone(), b]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id, "dup");
        assert_eq!(deduped[0].protein, 1.0);
        assert_eq!(deduped[1].id, other.id);
    }
}
