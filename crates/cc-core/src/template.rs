//! Proposal template documents

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::{ElementType, ProposalElement};
use crate::element_config::{ElementConfig, PricingSummaryConfig};
use crate::{CoreError, Result};

/// Visual theme of a published template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

/// Template configuration document (`configJson` of a stored template)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub elements: Vec<ProposalElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_config: Option<ThemeConfig>,
}

impl Template {
    pub fn new(elements: Vec<ProposalElement>) -> Self {
        Self {
            elements,
            theme_config: None,
        }
    }

    /// Parse and validate a template document.
    ///
    /// Only the envelope is validated (element ids, type tags, order);
    /// element configs are accepted in whatever shape they arrive.
    pub fn from_json(json: &str) -> Result<Self> {
        let template: Template =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidTemplate(e.to_string()))?;
        tracing::debug!(elements = template.elements.len(), "Loaded proposal template");
        Ok(template)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Elements sorted by display order (stable for equal orders)
    pub fn ordered_elements(&self) -> Vec<&ProposalElement> {
        let mut elements: Vec<&ProposalElement> = self.elements.iter().collect();
        elements.sort_by_key(|element| element.order);
        elements
    }

    /// The first pricing summary element, if any
    pub fn pricing_summary(&self) -> Option<&PricingSummaryConfig> {
        self.elements.iter().find_map(|element| match &element.config {
            ElementConfig::PricingSummary(summary) => Some(summary),
            _ => None,
        })
    }

    pub fn count_of(&self, element_type: ElementType) -> usize {
        self.elements
            .iter()
            .filter(|element| element.element_type == element_type)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEMPLATE: &str = r##"{
        "elements": [
            { "id": "summary", "type": "pricing_summary", "order": 3,
              "config": { "showTax": true, "taxRate": 0.08, "currencySymbol": "€" } },
            { "id": "hero", "type": "hero", "order": 0, "config": { "title": "Wedding Films" } },
            { "id": "guests", "type": "number_input", "order": 1,
              "config": { "label": "Guests", "pricingVariable": "guests" } },
            { "id": "tiers", "type": "pricing_tiers", "order": 1,
              "config": { "basedOn": "guests", "tiers": [{ "minQty": 1, "maxQty": null, "pricePerUnit": 10 }] } }
        ],
        "theme_config": { "primaryColor": "#1a1a1a" }
    }"##;

    #[test]
    fn test_parse_template() {
        let template = Template::from_json(TEMPLATE).unwrap();
        assert_eq!(template.elements.len(), 4);
        assert_eq!(
            template.theme_config.as_ref().and_then(|t| t.primary_color.as_deref()),
            Some("#1a1a1a")
        );
        assert_eq!(template.count_of(ElementType::PricingTiers), 1);
    }

    #[test]
    fn test_ordered_elements_is_stable() {
        let template = Template::from_json(TEMPLATE).unwrap();
        let ids: Vec<&str> = template
            .ordered_elements()
            .iter()
            .map(|element| element.id.as_str())
            .collect();
        assert_eq!(ids, vec!["hero", "guests", "tiers", "summary"]);
    }

    #[test]
    fn test_pricing_summary_lookup() {
        let template = Template::from_json(TEMPLATE).unwrap();
        let summary = template.pricing_summary().unwrap();
        assert_eq!(summary.effective_tax_rate(), Some(0.08));
        assert_eq!(summary.currency_symbol.as_deref(), Some("€"));
    }

    #[test]
    fn test_invalid_template() {
        let err = Template::from_json(r#"{ "elements": [{ "id": "x", "type": "banner", "order": 0 }] }"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTemplate(_)));

        let err = Template::from_json(r#"{ "theme_config": {} }"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTemplate(_)));
    }

    #[test]
    fn test_round_trip_keeps_unknown_keys() {
        let template = Template::from_json(TEMPLATE).unwrap();
        let json = template.to_json_pretty().unwrap();
        let reparsed = Template::from_json(&json).unwrap();
        assert_eq!(reparsed, template);
        assert!(json.contains("Wedding Films"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEMPLATE.as_bytes()).unwrap();

        let template = Template::from_path(file.path()).unwrap();
        assert_eq!(template.elements.len(), 4);

        let missing = Template::from_path(Path::new("/nonexistent/template.json"));
        assert!(matches!(missing, Err(CoreError::Io(_))));
    }
}
