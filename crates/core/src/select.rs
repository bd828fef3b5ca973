//! Selectors: pure lookups over [`ParsedArguments`](crate::ParsedArguments).
//!
//! All selectors take their keys in priority order and concatenate results in
//! that order. Missing keys contribute nothing; no selector fails.

use std::fmt;

use serde::Serialize;

use crate::args::Params;

/// A param value with numeric text converted to a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue<'a> {
    /// The value parsed as a finite number.
    Number(f64),
    /// Any other value, verbatim.
    Text(&'a str),
}

impl<'a> ParamValue<'a> {
    /// Convert a raw value, preferring a number when it parses as one.
    pub fn from_raw(raw: &'a str) -> Self {
        match parse_number(raw) {
            Some(n) => ParamValue::Number(n),
            None => ParamValue::Text(raw),
        }
    }

    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    /// The text value, if this is not a number.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            ParamValue::Number(_) => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for ParamValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

/// Parse a value as a number.
///
/// A value is numeric when it is non-empty and parses as a finite `f64`.
/// Surrounding whitespace is not accepted, and neither are `inf` or `NaN`.
pub fn parse_number(value: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// True if at least one of `keys` is an exact, case-sensitive member of
/// `field` (`commands` or `modes`).
pub fn matches_any<K: AsRef<str>>(field: &[String], keys: &[K]) -> bool {
    keys.iter()
        .any(|k| field.iter().any(|item| item == k.as_ref()))
}

/// Values for every key present in `params`, in key order.
fn values_for<'p, K: AsRef<str>>(
    params: &'p Params,
    keys: &[K],
) -> impl Iterator<Item = &'p str> {
    keys.iter()
        .filter_map(|k| params.get(k.as_ref()))
        .flatten()
        .map(String::as_str)
}

/// Text values for `keys`, concatenated in key order.
pub fn select_string<'a, K: AsRef<str>>(params: &'a Params, keys: &[K]) -> Vec<&'a str> {
    values_for(params, keys).collect()
}

/// Values for `keys` with numeric text converted; mixed results are expected.
pub fn select<'a, K: AsRef<str>>(params: &'a Params, keys: &[K]) -> Vec<ParamValue<'a>> {
    values_for(params, keys).map(ParamValue::from_raw).collect()
}

/// Numeric values for `keys`; anything that is not a number is dropped.
pub fn select_number<K: AsRef<str>>(params: &Params, keys: &[K]) -> Vec<f64> {
    values_for(params, keys).filter_map(parse_number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_detection() {
        assert_eq!(parse_number("8080"), Some(8080.0));
        assert_eq!(parse_number("2.5"), Some(2.5));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("localhost"), None);
        assert_eq!(parse_number(" 42"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn param_value_accessors() {
        let n = ParamValue::from_raw("12");
        let t = ParamValue::from_raw("twelve");
        assert_eq!(n.as_number(), Some(12.0));
        assert_eq!(n.as_text(), None);
        assert_eq!(t.as_text(), Some("twelve"));
        assert_eq!(n.to_string(), "12");
        assert_eq!(t.to_string(), "twelve");
    }

    #[test]
    fn serializes_untagged() {
        let values = [ParamValue::Number(8080.0), ParamValue::Text("localhost")];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[8080.0,"localhost"]"#);
    }

    #[test]
    fn matches_any_is_case_sensitive() {
        let field = vec!["Serve".to_string()];
        assert!(matches_any(&field, &["Serve"]));
        assert!(!matches_any(&field, &["serve"]));
        assert!(!matches_any::<&str>(&field, &[]));
    }
}
