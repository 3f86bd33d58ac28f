use serde::{Deserialize, Serialize};

/// A supported market region.
///
/// Codes follow ISO 3166-1 alpha-2, except `UK` which the food data uses
/// in place of `GB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    US,
    CA,
    UK,
    AU,
    IN,
    JP,
    DE,
    FR,
    IT,
    ES,
}

impl Location {
    /// All supported locations, in selector order.
    pub const ALL: [Location; 10] = [
        Location::US,
        Location::CA,
        Location::UK,
        Location::AU,
        Location::IN,
        Location::JP,
        Location::DE,
        Location::FR,
        Location::IT,
        Location::ES,
    ];

    /// Parse a location code. Returns `None` for unsupported codes.
    pub fn parse(code: &str) -> Option<Location> {
        match code.trim().to_ascii_uppercase().as_str() {
            "US" => Some(Location::US),
            "CA" => Some(Location::CA),
            "UK" => Some(Location::UK),
            "AU" => Some(Location::AU),
            "IN" => Some(Location::IN),
            "JP" => Some(Location::JP),
            "DE" => Some(Location::DE),
            "FR" => Some(Location::FR),
            "IT" => Some(Location::IT),
            "ES" => Some(Location::ES),
            _ => None,
        }
    }

    /// Parse a location code, treating unsupported codes as `US`.
    pub fn parse_or_default(code: &str) -> Location {
        Location::parse(code).unwrap_or(Location::US)
    }

    /// Two-letter code as it appears in data files.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Location::US => "US",
            Location::CA => "CA",
            Location::UK => "UK",
            Location::AU => "AU",
            Location::IN => "IN",
            Location::JP => "JP",
            Location::DE => "DE",
            Location::FR => "FR",
            Location::IT => "IT",
            Location::ES => "ES",
        }
    }

    /// Country name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Location::US => "United States",
            Location::CA => "Canada",
            Location::UK => "United Kingdom",
            Location::AU => "Australia",
            Location::IN => "India",
            Location::JP => "Japan",
            Location::DE => "Germany",
            Location::FR => "France",
            Location::IT => "Italy",
            Location::ES => "Spain",
        }
    }

    /// ISO code of the currency used at this location.
    pub fn currency_code(&self) -> &'static str {
        match self {
            Location::US => "USD",
            Location::CA => "CAD",
            Location::UK => "GBP",
            Location::AU => "AUD",
            Location::IN => "INR",
            Location::JP => "JPY",
            Location::DE | Location::FR | Location::IT | Location::ES => "EUR",
        }
    }

    /// Symbol used when rendering prices.
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Location::US => "$",
            Location::CA => "C$",
            Location::UK => "£",
            Location::AU => "A$",
            Location::IN => "₹",
            Location::JP => "¥",
            Location::DE | Location::FR | Location::IT | Location::ES => "€",
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::US
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        for location in Location::ALL {
            assert_eq!(Location::parse(location.code()), Some(location));
        }
        assert_eq!(Location::parse("jp"), Some(Location::JP));
        assert_eq!(Location::parse(" us "), Some(Location::US));
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(Location::parse("ZZ"), None);
        assert_eq!(Location::parse_or_default("ZZ"), Location::US);
        assert_eq!(Location::parse_or_default(""), Location::US);
    }

    #[test]
    fn test_eurozone_currency() {
        for location in [Location::DE, Location::FR, Location::IT, Location::ES] {
            assert_eq!(location.currency_code(), "EUR");
            assert_eq!(location.currency_symbol(), "€");
        }
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&Location::UK).unwrap();
        assert_eq!(json, "\"UK\"");
        let back: Location = serde_json::from_str("\"IN\"").unwrap();
        assert_eq!(back, Location::IN);
    }
}
