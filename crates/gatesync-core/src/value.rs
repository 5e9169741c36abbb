// ── Value coercion ──
//
// Partial-update instructions carry their values as canonical strings.
// Every coercible value is one variant of `AttributeValue`, with exactly one
// canonicalization rule per variant; an unset value canonicalizes to `None`
// and never produces an instruction.

use chrono::{DateTime, Utc};

use crate::error::ReconcileError;

/// A heterogeneous attribute value awaiting canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A calendar date; canonical form is epoch milliseconds.
    Date(DateTime<Utc>),
    /// A point in time; canonical form is epoch seconds.
    Instant(DateTime<Utc>),
    /// An enumeration discriminant; canonical form is its symbolic name.
    Symbol(&'static str),
    /// Any other structured value; canonical form is its JSON encoding.
    Json(serde_json::Value),
}

impl AttributeValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Date(_) => "date",
            Self::Instant(_) => "instant",
            Self::Symbol(_) => "symbol",
            Self::Json(value) => json_type_name(value),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Convert a value into its canonical string representation.
///
/// `None` in, `None` out: unspecified values are never coerced to defaults,
/// so no instruction is emitted for them.
pub fn canonicalize(value: Option<AttributeValue>) -> Result<Option<String>, ReconcileError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let text = match value {
        AttributeValue::Str(s) => s,
        AttributeValue::Int(n) => n.to_string(),
        AttributeValue::Float(f) => f.to_string(),
        AttributeValue::Bool(b) => b.to_string(),
        AttributeValue::Date(d) => d.timestamp_millis().to_string(),
        AttributeValue::Instant(i) => i.timestamp().to_string(),
        AttributeValue::Symbol(name) => name.to_owned(),
        AttributeValue::Json(json) => {
            let type_name = json_type_name(&json);
            serde_json::to_string(&json)
                .map_err(|_| ReconcileError::Serialization { type_name })?
        }
    };
    Ok(Some(text))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_value_canonicalizes_to_none() {
        assert_eq!(canonicalize(None).expect("none is fine"), None);
    }

    #[test]
    fn scalar_forms() {
        let cases = [
            (AttributeValue::Str("hello".into()), "hello"),
            (AttributeValue::Int(1024), "1024"),
            (AttributeValue::Float(2.5), "2.5"),
            (AttributeValue::Bool(true), "true"),
            (AttributeValue::Symbol("REGIONAL"), "REGIONAL"),
        ];
        for (value, expected) in cases {
            let name = value.type_name();
            assert_eq!(
                canonicalize(Some(value)).expect("coercible").as_deref(),
                Some(expected),
                "{name}"
            );
        }
    }

    #[test]
    fn date_is_epoch_millis_and_instant_is_epoch_seconds() {
        let moment = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            canonicalize(Some(AttributeValue::Date(moment))).expect("date").as_deref(),
            Some("1704067200000")
        );
        assert_eq!(
            canonicalize(Some(AttributeValue::Instant(moment)))
                .expect("instant")
                .as_deref(),
            Some("1704067200")
        );
    }

    #[test]
    fn structured_values_encode_as_json() {
        let value = AttributeValue::Json(json!({ "Version": "2012-10-17", "Statement": [] }));
        let text = canonicalize(Some(value)).expect("encodable").expect("some");
        let round: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(round["Version"], "2012-10-17");
    }
}
