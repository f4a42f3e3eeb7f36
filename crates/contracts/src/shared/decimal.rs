//! Lenient decoding of SQL `DECIMAL` columns.
//!
//! Depending on the driver the backend emits decimals as JSON numbers or as
//! strings (`"50.00"`); `null` means "not set". All of them land in `f64`,
//! with `null` and a missing field read as zero.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Number(f64),
    Text(String),
}

pub fn de_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDecimal>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(RawDecimal::Number(v)) => Ok(v),
        Some(RawDecimal::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(RawDecimal::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| D::Error::custom(format!("invalid decimal '{}': {}", s, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "de_decimal")]
        price: f64,
    }

    fn price(json: &str) -> f64 {
        serde_json::from_str::<Row>(json).unwrap().price
    }

    #[test]
    fn accepts_numbers_strings_and_null() {
        assert_eq!(price(r#"{"price": 12.5}"#), 12.5);
        assert_eq!(price(r#"{"price": 7}"#), 7.0);
        assert_eq!(price(r#"{"price": "50.00"}"#), 50.0);
        assert_eq!(price(r#"{"price": null}"#), 0.0);
        assert_eq!(price(r#"{}"#), 0.0);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(serde_json::from_str::<Row>(r#"{"price": "abc"}"#).is_err());
    }
}
