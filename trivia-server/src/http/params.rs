//! Lenient body fields
//!
//! Form-driven frontends send numeric fields as strings (`"category": "2"`),
//! so ids and difficulty accept either form.

use serde::Deserialize;
use serde_json::Value;
use trivia_core::ValidationError;

/// A JSON number or a string holding one
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    pub fn to_i64(&self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::Empty { field });
                }
                s.parse().map_err(|_| ValidationError::InvalidFormat {
                    field,
                    reason: "must be an integer",
                })
            }
        }
    }
}

/// Read an optional lenient integer field.
pub fn optional_i64(
    field: &'static str,
    value: Option<&NumberOrString>,
) -> Result<Option<i64>, ValidationError> {
    value.map(|v| v.to_i64(field)).transpose()
}

/// Read an integer from a number or numeric string; anything else is `None`.
pub fn lenient_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let n: NumberOrString = serde_json::from_str("4").unwrap();
        assert_eq!(n.to_i64("difficulty"), Ok(4));

        let s: NumberOrString = serde_json::from_str(r#"" 2 ""#).unwrap();
        assert_eq!(s.to_i64("category"), Ok(2));
    }

    #[test]
    fn rejects_junk() {
        let s = NumberOrString::Text("two".into());
        assert!(matches!(
            s.to_i64("category"),
            Err(ValidationError::InvalidFormat { field: "category", .. })
        ));

        let s = NumberOrString::Text("  ".into());
        assert_eq!(s.to_i64("category"), Err(ValidationError::Empty { field: "category" }));
    }

    #[test]
    fn optional_field() {
        assert_eq!(optional_i64("category", None), Ok(None));
        assert_eq!(
            optional_i64("category", Some(&NumberOrString::Number(3))),
            Ok(Some(3))
        );
    }

    #[test]
    fn lenient_values() {
        assert_eq!(lenient_i64(&serde_json::json!(7)), Some(7));
        assert_eq!(lenient_i64(&serde_json::json!(" 7 ")), Some(7));
        assert_eq!(lenient_i64(&serde_json::json!(1.5)), None);
        assert_eq!(lenient_i64(&serde_json::json!("science")), None);
        assert_eq!(lenient_i64(&serde_json::json!(null)), None);
        assert_eq!(lenient_i64(&serde_json::json!([1])), None);
    }
}
