//! Lenient numeric coercion for material quantity maps.
//!
//! The backend stores material quantities as free-form JSON (numbers or
//! user-entered strings). Anything that does not parse is treated as zero;
//! quantities degrade, they never error.

use serde_json::Value;
use std::collections::BTreeMap;

/// Coerce a JSON value to a quantity. Numbers pass through, numeric strings
/// are parsed, everything else (null, blank, garbage) is 0.
pub fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parse a user-entered quantity string the same way. Used by input forms
/// before a value ever reaches a payload.
pub fn parse_quantity(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

/// Sum every coercible value in a quantity map.
pub fn sum_numeric(map: &BTreeMap<String, Value>) -> f64 {
    map.values().map(numeric).sum()
}

/// Round to one decimal place, the display precision used across the app.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_pass_through() {
        assert_eq!(numeric(&json!(12.5)), 12.5);
        assert_eq!(numeric(&json!("12.5")), 12.5);
        assert_eq!(numeric(&json!(" 7 ")), 7.0);
    }

    #[test]
    fn garbage_coerces_to_zero() {
        assert_eq!(numeric(&json!(null)), 0.0);
        assert_eq!(numeric(&json!("")), 0.0);
        assert_eq!(numeric(&json!("abc")), 0.0);
        assert_eq!(numeric(&json!([1, 2])), 0.0);
        assert_eq!(parse_quantity("12,5"), 0.0);
    }

    #[test]
    fn sums_skip_unparseable_entries() {
        let mut map = BTreeMap::new();
        map.insert("quantity_steel_tons".to_string(), json!(10.0));
        map.insert("quantity_copper_tons".to_string(), json!("2.5"));
        map.insert("quantity_oil_tons".to_string(), json!("n/a"));
        assert_eq!(sum_numeric(&map), 12.5);
    }

    #[test]
    fn round1_matches_display_precision() {
        assert_eq!(round1(96.6499), 96.6);
        assert_eq!(round1(96.65), 96.7);
        assert_eq!(round1(-3.14), -3.1);
    }
}
