mod food;
mod location;
mod plan;
mod preferences;

pub use food::{Availability, FoodCategory, FoodItem, RegionalOverride};
pub use location::Location;
pub use plan::{Allocation, PlanSummary};
pub use preferences::{DietaryTag, UnitSystem, UserPreferences};
