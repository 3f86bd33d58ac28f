pub mod allocator;
pub mod analysis;
pub mod constants;
pub mod filter;
pub mod regional;
pub mod summary;

pub use allocator::allocate;
pub use analysis::{build_analysis, write_analysis_csv, CategorySeries, EfficiencyPoint};
pub use constants::*;
pub use filter::{filter_eligible, filter_for_analysis, meets_restrictions, regionally_available};
pub use regional::{resolve_regional, RegionalPricing};
pub use summary::summarize;
