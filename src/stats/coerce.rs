use serde_json::Value;

use crate::domain::StatRecord;

/// Value used for anything that cannot be read as a number.
pub const COERCE_DEFAULT: f64 = 0.0;

/// Reads a JSON value as a number.
///
/// Numbers pass through and strings are parsed after trimming. Everything
/// else (unparsable text, null, booleans, containers, non-finite values)
/// becomes [`COERCE_DEFAULT`].
pub fn coerce_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite()).unwrap_or(COERCE_DEFAULT)
}

/// Reads `field` from an optional record, defaulting when either is absent.
pub fn coerce_field(record: Option<&StatRecord>, field: &str) -> f64 {
    record
        .and_then(|r| r.get(field))
        .map(coerce_number)
        .unwrap_or(COERCE_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number_variants() {
        assert_eq!(coerce_number(&json!(3.25)), 3.25);
        assert_eq!(coerce_number(&json!(" 0.812 ")), 0.812);
        assert_eq!(coerce_number(&json!("n/a")), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 0.0);
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
        assert_eq!(coerce_number(&json!([1, 2])), 0.0);
    }

    #[test]
    fn test_coerce_field_missing_record_or_field() {
        let record = json!({"Team": "Japan", "ERA": "2.10"});
        let record = record.as_object().unwrap();

        assert_eq!(coerce_field(Some(record), "ERA"), 2.1);
        assert_eq!(coerce_field(Some(record), "WHIP"), 0.0);
        assert_eq!(coerce_field(None, "ERA"), 0.0);
    }
}
