//! Pricing output types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Submitted form state, keyed by field name
pub type FormValues = Map<String, Value>;

/// One priced row of a proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    pub total: f64,
}

impl LineItem {
    /// Flat charge with no quantity
    pub fn flat(label: impl Into<String>, total: f64) -> Self {
        Self {
            label: label.into(),
            quantity: None,
            unit_price: None,
            total,
        }
    }

    /// `quantity × unit_price`
    pub fn per_unit(label: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            label: label.into(),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            total: quantity * unit_price,
        }
    }
}

/// Result of one pricing pass.
///
/// Recomputed from scratch on every evaluation; `total` is always
/// `subtotal + tax_amount - discount_amount` with no rounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub subtotal: f64,
    pub line_items: Vec<LineItem>,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total: f64,
}

/// Format an amount for display, e.g. `$1250.00`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(250.0, "$"), "$250.00");
        assert_eq!(format_currency(19.999, "€"), "€20.00");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
    }

    #[test]
    fn test_per_unit_total() {
        let item = LineItem::per_unit("Attendees", 15.0, 40.0);
        assert_eq!(item.total, 600.0);
        assert_eq!(item.quantity, Some(15.0));
    }

    #[test]
    fn test_flat_item_serialization() {
        let item = LineItem::flat("Drone", 300.0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "label": "Drone", "total": 300.0 }));
    }
}
