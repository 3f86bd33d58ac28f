pub mod catalog;
pub mod cli;
pub mod error;
pub mod insights;
pub mod interface;
pub mod localize;
pub mod models;
pub mod planner;
pub mod recommend;

pub use error::{NutriError, Result};
pub use models::{FoodItem, UserPreferences};
