use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Location;

/// Map from location to the factor applied to base costs when pricing
/// foods for that market. Covers currency scale and market level.
pub static COST_MULTIPLIERS: LazyLock<HashMap<Location, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Location::US, 1.0);
    m.insert(Location::UK, 0.8);
    m.insert(Location::CA, 0.75);
    m.insert(Location::AU, 0.7);
    m.insert(Location::JP, 0.009);
    m.insert(Location::ES, 1.1);
    m.insert(Location::DE, 1.1);
    m.insert(Location::FR, 1.1);
    m.insert(Location::IT, 1.1);
    m.insert(Location::IN, 0.012);
    m
});

/// Get the cost multiplier for a location. Unlisted locations are neutral.
pub fn cost_multiplier(location: Location) -> f64 {
    COST_MULTIPLIERS.get(&location).copied().unwrap_or(1.0)
}
