mod generator;
mod persistence;
mod provider;

pub use generator::builtin_catalog;
pub use persistence::{dedup_by_id, load_entries, save_catalog};
pub use provider::{load_or_builtin, normalize_row, RawAvailability, RawFoodRow};
