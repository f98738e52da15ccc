//! Reading submitted form values
//!
//! Form state arrives loosely typed: checkboxes may post `true`, `"on"` or a
//! package id, and number inputs may post numbers or numeric strings.

use cc_core::FormValues;
use serde_json::Value;

/// Whether a submitted value counts as "selected".
///
/// `false`, `null`, `0`, `NaN` and `""` are unselected; everything else is
/// selected.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interpret a submitted value as a positive, finite quantity.
pub fn positive_quantity(value: &Value) -> Option<f64> {
    let quantity = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (quantity.is_finite() && quantity > 0.0).then_some(quantity)
}

/// `form_values[key]` is present and truthy
pub fn is_selected(form_values: &FormValues, key: &str) -> bool {
    form_values.get(key).is_some_and(is_truthy)
}

/// `form_values.services[service_id]` is present and truthy
pub fn is_service_enabled(form_values: &FormValues, service_id: &str) -> bool {
    form_values
        .get("services")
        .and_then(Value::as_object)
        .and_then(|services| services.get(service_id))
        .is_some_and(is_truthy)
}

/// Form key of a selected package: `package.<id>`
pub fn package_key(package_id: &str) -> String {
    format!("package.{}", package_id)
}

/// Form key of a checkbox option: `<elementId>.<optionValue>`
pub fn checkbox_key(element_id: &str, option_value: &str) -> String {
    format!("{}.{}", element_id, option_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("on")));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }

    #[test]
    fn test_positive_quantity() {
        assert_eq!(positive_quantity(&json!(5)), Some(5.0));
        assert_eq!(positive_quantity(&json!(2.5)), Some(2.5));
        assert_eq!(positive_quantity(&json!(" 12 ")), Some(12.0));
        assert_eq!(positive_quantity(&json!(0)), None);
        assert_eq!(positive_quantity(&json!(-4)), None);
        assert_eq!(positive_quantity(&json!("many")), None);
        assert_eq!(positive_quantity(&json!("inf")), None);
        assert_eq!(positive_quantity(&json!(true)), None);
        assert_eq!(positive_quantity(&Value::Null), None);
    }

    #[test]
    fn test_service_lookup() {
        let values = json!({ "services": { "a": true, "b": false } });
        let values = values.as_object().unwrap();
        assert!(is_service_enabled(values, "a"));
        assert!(!is_service_enabled(values, "b"));
        assert!(!is_service_enabled(values, "c"));

        let flat = json!({ "services": "a" });
        assert!(!is_service_enabled(flat.as_object().unwrap(), "a"));
    }

    #[test]
    fn test_composite_keys() {
        assert_eq!(package_key("gold"), "package.gold");
        assert_eq!(checkbox_key("extras", "drone"), "extras.drone");
    }
}
