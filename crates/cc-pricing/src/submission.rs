//! Proposal submission record

use cc_core::{FormValues, PricingResult};
use serde::{Deserialize, Serialize};

/// What gets recorded when a client submits a priced proposal.
///
/// Raw selections are stored next to the computed amounts so a submission
/// can be re-priced later against the same template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSubmission {
    pub template_id: String,
    pub selections_json: FormValues,
    pub subtotal_amount: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
}

impl ProposalSubmission {
    pub fn new(template_id: impl Into<String>, form_values: &FormValues, pricing: &PricingResult) -> Self {
        Self {
            template_id: template_id.into(),
            selections_json: form_values.clone(),
            subtotal_amount: pricing.subtotal,
            discount_amount: pricing.discount_amount,
            total_amount: pricing.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::LineItem;
    use serde_json::json;

    #[test]
    fn test_submission_from_pricing() {
        let pricing = PricingResult {
            subtotal: 250.0,
            line_items: vec![LineItem::per_unit("Attendees", 5.0, 50.0)],
            tax_amount: 25.0,
            discount_amount: 0.0,
            total: 275.0,
        };
        let form = json!({ "attendees": 5 }).as_object().cloned().unwrap();

        let submission = ProposalSubmission::new("tpl-1", &form, &pricing);
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["templateId"], json!("tpl-1"));
        assert_eq!(json["selectionsJson"], json!({ "attendees": 5 }));
        assert_eq!(json["subtotalAmount"], json!(250.0));
        assert_eq!(json["discountAmount"], json!(0.0));
        assert_eq!(json["totalAmount"], json!(275.0));
    }
}
