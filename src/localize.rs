use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{FoodItem, Location};

/// Grams to ounces.
const OZ_PER_GRAM: f64 = 0.035274;

/// Mock exchange rates against the US dollar.
static CURRENCY_RATES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("USD", 1.0);
    m.insert("GBP", 0.79);
    m.insert("CAD", 1.35);
    m.insert("AUD", 1.52);
    m.insert("INR", 83.12);
    m.insert("JPY", 149.42);
    m.insert("EUR", 0.92);
    m
});

/// Get the dollar rate for a currency code. Unknown codes are neutral.
fn rate_for(currency: &str) -> f64 {
    CURRENCY_RATES.get(currency).copied().unwrap_or(1.0)
}

/// Format an amount in the location's currency, always with cents.
pub fn format_currency(amount: f64, location: Location) -> String {
    format!("{}{:.2}", location.currency_symbol(), amount)
}

/// Format a weight in the location's customary unit.
pub fn format_weight(grams: f64, location: Location) -> String {
    match location {
        Location::US => format!("{:.1}oz", grams * OZ_PER_GRAM),
        _ => format!("{grams:.1}g"),
    }
}

/// Convert an amount between two locations' currencies via the dollar.
pub fn convert_currency(amount: f64, from: Location, to: Location) -> f64 {
    let in_usd = amount / rate_for(from.currency_code());
    in_usd * rate_for(to.currency_code())
}

/// Reprice every food in place from one location's currency to another's.
///
/// Touches base costs only; regional override costs stay in their own
/// local currency.
pub fn reprice_catalog(foods: &mut [FoodItem], from: Location, to: Location) {
    for food in foods {
        food.cost = convert_currency(food.cost, from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight_by_location() {
        assert_eq!(format_weight(100.0, Location::US), "3.5oz");
        assert_eq!(format_weight(100.0, Location::UK), "100.0g");
        assert_eq!(format_weight(31.0, Location::JP), "31.0g");
    }

    #[test]
    fn test_format_currency_symbols() {
        assert_eq!(format_currency(3.99, Location::US), "$3.99");
        assert_eq!(format_currency(3.99, Location::UK), "£3.99");
        assert_eq!(format_currency(650.0, Location::JP), "¥650.00");
        assert_eq!(format_currency(120.0, Location::IN), "₹120.00");
        assert_eq!(format_currency(8.5, Location::DE), "€8.50");
    }

    #[test]
    fn test_convert_goes_through_the_dollar() {
        assert!((convert_currency(10.0, Location::US, Location::UK) - 7.9).abs() < 1e-9);

        let there = convert_currency(100.0, Location::US, Location::JP);
        let back = convert_currency(there, Location::JP, Location::US);
        assert!((back - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_eurozone_locations_share_a_rate() {
        let de = convert_currency(10.0, Location::US, Location::DE);
        let fr = convert_currency(10.0, Location::US, Location::FR);
        assert_eq!(de, fr);
    }

    #[test]
    fn test_reprice_touches_only_base_cost() {
        let mut catalog = crate::catalog::builtin_catalog();
        let original_cost = catalog[0].cost;
        let override_cost = catalog[0]
            .override_for(Location::JP)
            .map(|r| r.cost)
            .unwrap();

        reprice_catalog(&mut catalog, Location::US, Location::UK);

        assert!((catalog[0].cost - original_cost * 0.79).abs() < 1e-9);
        assert_eq!(
            catalog[0].override_for(Location::JP).map(|r| r.cost),
            Some(override_cost)
        );
    }
}
