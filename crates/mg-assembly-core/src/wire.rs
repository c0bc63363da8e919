//! JSON wire helpers shared by all parameter/result records.
//!
//! Decoding is lenient: unknown keys land in the record's extras bag, missing
//! keys leave fields unset, and a declared field carrying the wrong JSON kind
//! is logged as a warning and left unset. Only a payload whose top level is
//! not an object fails, with [`SchemaError::SchemaViolation`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::SchemaError;

/// Open bag of properties outside a record's declared schema.
///
/// Keys are preserved in the order they appeared on the incoming payload and
/// re-emitted verbatim after the declared fields.
pub type ExtraProps = Map<String, Value>;

/// A parameter/result record with a fixed wire schema.
///
/// Records that renamed fields across schema revisions list the renames in
/// [`LEGACY_KEYS`](WireRecord::LEGACY_KEYS); the decode helpers accept the
/// old names and normalize them to the canonical ones.
pub trait WireRecord: Serialize + DeserializeOwned {
    /// Renamed keys from earlier schema revisions, as `(legacy, canonical)`
    /// pairs. A legacy key is only honored when the canonical key is absent.
    const LEGACY_KEYS: &'static [(&'static str, &'static str)] = &[];
}

/// Encode a record to a JSON value.
pub fn to_json_value<T: Serialize>(record: &T) -> Result<Value, SchemaError> {
    serde_json::to_value(record).map_err(|e| SchemaError::Serialization(e.to_string()))
}

/// Encode a record to a JSON string.
pub fn to_json_string<T: Serialize>(record: &T) -> Result<String, SchemaError> {
    serde_json::to_string(record).map_err(|e| SchemaError::Serialization(e.to_string()))
}

/// Decode a record from a JSON value.
///
/// Fails with [`SchemaError::SchemaViolation`] unless the value is an object.
pub fn from_json_value<T: WireRecord>(value: Value) -> Result<T, SchemaError> {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::SchemaViolation {
                found: kind_name(&other).to_string(),
            })
        }
    };

    for &(legacy, canonical) in T::LEGACY_KEYS {
        if !map.contains_key(canonical) {
            if let Some(value) = map.shift_remove(legacy) {
                map.insert(canonical.to_string(), value);
            }
        }
    }

    serde_json::from_value(Value::Object(map)).map_err(|e| SchemaError::SchemaViolation {
        found: e.to_string(),
    })
}

/// Decode a record from JSON text.
pub fn from_json_str<T: WireRecord>(input: &str) -> Result<T, SchemaError> {
    let value: Value = serde_json::from_str(input).map_err(|e| SchemaError::SchemaViolation {
        found: format!("unparseable JSON ({})", e),
    })?;
    from_json_value(value)
}

/// Name of a JSON value's kind, for diagnostics.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Lenient deserializer for optional string fields.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => {
            warn!(
                found = kind_name(&other),
                "ignoring non-string value for string field"
            );
            Ok(None)
        }
    }
}

/// Lenient deserializer for optional integer fields.
///
/// Integers encoded as strings (e.g. `"500"`) are accepted, matching what
/// narrative UIs have historically submitted for numeric parameters.
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => Ok(Some(v)),
            None => {
                warn!(value = %n, "ignoring non-integral number for integer field");
                Ok(None)
            }
        },
        Some(Value::String(s)) => match s.parse::<i64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                warn!(value = %s, "ignoring unparseable string for integer field");
                Ok(None)
            }
        },
        Some(other) => {
            warn!(
                found = kind_name(&other),
                "ignoring non-numeric value for integer field"
            );
            Ok(None)
        }
    }
}

/// Lenient deserializer for optional workspace reference fields.
pub(crate) fn lenient_upa<'de, D>(deserializer: D) -> Result<Option<crate::Upa>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.map(crate::Upa::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterContigsParams;
    use serde_json::json;

    #[test]
    fn test_top_level_array_is_a_schema_violation() {
        let err = from_json_value::<FilterContigsParams>(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SchemaViolation { ref found } if found == "array"
        ));
    }

    #[test]
    fn test_top_level_scalar_is_a_schema_violation() {
        for value in [json!(42), json!("ws1"), json!(true), json!(null)] {
            let result = from_json_value::<FilterContigsParams>(value);
            assert!(matches!(result, Err(SchemaError::SchemaViolation { .. })));
        }
    }

    #[test]
    fn test_unparseable_text_is_a_schema_violation() {
        let err = from_json_str::<FilterContigsParams>("{not json").unwrap_err();
        assert!(matches!(err, SchemaError::SchemaViolation { .. }));
    }

    #[test]
    fn test_wrong_typed_field_is_left_unset() {
        // min_length is an array here; the rest of the object still decodes.
        let params: FilterContigsParams = from_json_value(json!({
            "assembly_input_ref": "1/2/3",
            "workspace_name": "ws1",
            "min_length": [500],
        }))
        .unwrap();
        assert_eq!(params.workspace_name.as_deref(), Some("ws1"));
        assert_eq!(params.min_length, None);
    }

    #[test]
    fn test_stringified_integer_is_coerced() {
        let params: FilterContigsParams = from_json_value(json!({
            "min_length": "500",
        }))
        .unwrap();
        assert_eq!(params.min_length, Some(500));
    }

    #[test]
    fn test_extra_key_order_is_preserved() {
        let input = r#"{"workspace_name":"ws1","zeta":1,"alpha":2,"mid":3}"#;
        let params: FilterContigsParams = from_json_str(input).unwrap();
        let keys: Vec<&String> = params.extra.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);

        let encoded = to_json_string(&params).unwrap();
        assert_eq!(
            encoded,
            r#"{"workspace_name":"ws1","zeta":1,"alpha":2,"mid":3}"#
        );
    }
}
