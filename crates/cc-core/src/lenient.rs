//! Deserializers for template-authored config fields.
//!
//! Element configs come from an external authoring tool and are only
//! partially validated. A field of the wrong shape falls back to its default
//! instead of failing the whole element.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `T`, or `T::default()` when the value has the wrong shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a list, dropping entries that do not parse.
///
/// `None` when the value is not an array at all.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Read a number, or a string holding one.
///
/// Strings are trimmed before parsing; non-finite results and any other
/// shape give `None`.
pub(crate) fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Deserialize an optional number that may have been authored as a string.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_number(&value))
}

/// Like [`number`], with 0 standing in for anything unparseable.
pub(crate) fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(deserializer)?.unwrap_or_default())
}

/// Accept a string or a number as an identifier.
pub(crate) fn string_like<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(key_fragment(&value).unwrap_or_default())
}

/// Render a scalar JSON value the way it appears inside a composite form key.
pub(crate) fn key_fragment(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // Whole floats render without a fraction: `2.0` is keyed as `2`
        Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "or_default")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "number")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "number_or_zero")]
        min: f64,
        #[serde(default, deserialize_with = "list")]
        tags: Option<Vec<String>>,
        #[serde(default, deserialize_with = "string_like")]
        id: String,
    }

    #[test]
    fn test_wrong_type_falls_back() {
        let fields: Fields = serde_json::from_value(json!({ "flag": "yes" })).unwrap();
        assert_eq!(fields.flag, None);
    }

    #[test]
    fn test_numbers_accept_numeric_strings() {
        let fields: Fields = serde_json::from_value(json!({ "price": " 12.5 ", "min": "3" })).unwrap();
        assert_eq!(fields.price, Some(12.5));
        assert_eq!(fields.min, 3.0);

        let fields: Fields = serde_json::from_value(json!({ "price": "cheap", "min": [] })).unwrap();
        assert_eq!(fields.price, None);
        assert_eq!(fields.min, 0.0);

        let fields: Fields = serde_json::from_value(json!({ "price": "inf" })).unwrap();
        assert_eq!(fields.price, None);
    }

    #[test]
    fn test_list_drops_bad_entries() {
        let fields: Fields = serde_json::from_value(json!({ "tags": ["a", 1, "b"] })).unwrap();
        assert_eq!(fields.tags, Some(vec!["a".to_string(), "b".to_string()]));

        let fields: Fields = serde_json::from_value(json!({ "tags": "a" })).unwrap();
        assert_eq!(fields.tags, None);
    }

    #[test]
    fn test_numeric_id() {
        let fields: Fields = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(fields.id, "42");
    }

    #[test]
    fn test_key_fragment_of_whole_float() {
        assert_eq!(key_fragment(&json!(2.0)), Some("2".to_string()));
        assert_eq!(key_fragment(&json!(2.5)), Some("2.5".to_string()));
        assert_eq!(key_fragment(&json!(7)), Some("7".to_string()));
        assert_eq!(key_fragment(&json!(null)), None);
    }
}
