//! Typed auxiliary annotations.
//!
//! Hexagrams carry an open key/value map for display and debugging data. Values are a
//! closed set of scalar kinds rather than arbitrary dynamic data.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single annotation value.
///
/// Serialized untagged, so JSON `true`, `3.5` and `"text"` map directly. Variant order
/// matters for deserialization: booleans and numbers are tried before strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuxValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Auxiliary data attached to a hexagram, ordered by key.
pub type AuxData = BTreeMap<String, AuxValue>;

impl AuxValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for AuxValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AuxValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AuxValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AuxValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for AuxValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Loose parsing for command-line input: `true`/`false`, then numbers, then text.
impl FromStr for AuxValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(flag) = s.parse::<bool>() {
            return Ok(Self::Flag(flag));
        }
        if let Ok(number) = s.parse::<f64>() {
            if number.is_finite() {
                return Ok(Self::Number(number));
            }
        }
        Ok(Self::Text(s.to_string()))
    }
}

impl fmt::Display for AuxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_shapes() {
        let values: Vec<AuxValue> = serde_json::from_str(r#"[true, 2.5, "south"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                AuxValue::Flag(true),
                AuxValue::Number(2.5),
                AuxValue::Text("south".into())
            ]
        );
        assert_eq!(serde_json::to_string(&AuxValue::from("v")).unwrap(), "\"v\"");
    }

    #[test]
    fn loose_parsing_prefers_flags_then_numbers() {
        assert_eq!("true".parse::<AuxValue>().unwrap(), AuxValue::Flag(true));
        assert_eq!("42".parse::<AuxValue>().unwrap(), AuxValue::Number(42.0));
        assert_eq!("v".parse::<AuxValue>().unwrap(), AuxValue::Text("v".into()));
        assert_eq!("NaN".parse::<AuxValue>().unwrap(), AuxValue::Text("NaN".into()));
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(AuxValue::from("x").as_text(), Some("x"));
        assert_eq!(AuxValue::from(3_i64).as_number(), Some(3.0));
        assert_eq!(AuxValue::from(false).as_flag(), Some(false));
        assert_eq!(AuxValue::from(false).as_text(), None);
    }

    #[test]
    fn aux_data_is_ordered_by_key() {
        let mut data = AuxData::new();
        data.insert("b".into(), AuxValue::from(1_i64));
        data.insert("a".into(), AuxValue::from(2_i64));
        let keys: Vec<_> = data.keys().cloned().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
