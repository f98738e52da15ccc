//! Single-pass pricing evaluator
//!
//! Elements are visited in list order and each pricing-relevant element
//! appends zero or more line items. Missing selections, absent prices and
//! malformed config never fail the pass; they contribute nothing.

use cc_core::{
    ChoiceConfig, ElementConfig, FormValues, LineItem, NumberInputConfig, PackageTiersConfig,
    PricingResult, ProposalElement, ServiceTogglesConfig,
};
use serde_json::Value;

use crate::form::{checkbox_key, is_selected, is_service_enabled, is_truthy, package_key, positive_quantity};
use crate::tier::find_matching_tier;

/// Price a proposal from its elements and the submitted form values.
pub fn calculate_proposal_pricing(
    elements: &[ProposalElement],
    form_values: &FormValues,
) -> PricingResult {
    let mut pass = PricingPass::default();

    for element in elements {
        match &element.config {
            ElementConfig::NumberInput(input) => {
                price_number_input(&mut pass, elements, input, form_values)
            }
            ElementConfig::ServiceToggles(toggles) => {
                price_services(&mut pass, toggles, form_values)
            }
            ElementConfig::Dropdown(choice) | ElementConfig::RadioGroup(choice) => {
                price_single_choice(&mut pass, &element.id, choice, form_values)
            }
            ElementConfig::PackageTiers(packages) => {
                price_packages(&mut pass, packages, form_values)
            }
            ElementConfig::CheckboxGroup(choice) => {
                price_checkboxes(&mut pass, &element.id, choice, form_values)
            }
            ElementConfig::PricingTiers(_)
            | ElementConfig::PricingSummary(_)
            | ElementConfig::Display => {}
        }
    }

    let summary = elements.iter().find_map(|element| match &element.config {
        ElementConfig::PricingSummary(summary) => Some(summary),
        _ => None,
    });
    let tax_amount = summary
        .and_then(|summary| summary.effective_tax_rate())
        .map_or(0.0, |rate| pass.subtotal * rate);

    // Discounts are not modeled yet
    let discount_amount = 0.0;

    let total = pass.subtotal + tax_amount - discount_amount;

    tracing::debug!(
        line_items = pass.line_items.len(),
        subtotal = pass.subtotal,
        tax_amount,
        total,
        "Priced proposal"
    );

    PricingResult {
        subtotal: pass.subtotal,
        line_items: pass.line_items,
        tax_amount,
        discount_amount,
        total,
    }
}

#[derive(Default)]
struct PricingPass {
    line_items: Vec<LineItem>,
    subtotal: f64,
}

impl PricingPass {
    fn push(&mut self, item: LineItem) {
        tracing::trace!(label = %item.label, total = item.total, "Line item");
        self.subtotal += item.total;
        self.line_items.push(item);
    }
}

fn price_number_input(
    pass: &mut PricingPass,
    elements: &[ProposalElement],
    input: &NumberInputConfig,
    form_values: &FormValues,
) {
    let Some(variable) = input.pricing_variable() else {
        return;
    };
    let Some(quantity) = form_values.get(variable).and_then(positive_quantity) else {
        return;
    };

    let tiers = elements.iter().find_map(|element| match &element.config {
        ElementConfig::PricingTiers(table) if table.based_on.as_deref() == Some(variable) => {
            Some(table.tiers.as_deref())
        }
        _ => None,
    });

    match tiers {
        Some(Some(tiers)) => {
            let unit_price = find_matching_tier(tiers, quantity).and_then(|tier| tier.price_per_unit);
            match unit_price {
                Some(unit_price) => pass.push(LineItem::per_unit(&input.label, quantity, unit_price)),
                None => tracing::debug!(variable, quantity, "No priced tier for quantity"),
            }
        }
        // No tier table, or one without a tier list: fall back to a flat unit price
        Some(None) | None => {
            if let Some(base_price) = input.base_price.filter(|price| *price != 0.0) {
                pass.push(LineItem::per_unit(&input.label, quantity, base_price));
            }
        }
    }
}

fn price_services(pass: &mut PricingPass, toggles: &ServiceTogglesConfig, form_values: &FormValues) {
    for service in toggles.services() {
        if !is_service_enabled(form_values, &service.id) {
            continue;
        }
        match service.base_price {
            Some(price) => pass.push(LineItem::flat(&service.name, price)),
            None => tracing::debug!(service = %service.id, "Selected service has no base price"),
        }
    }
}

fn price_single_choice(
    pass: &mut PricingPass,
    element_id: &str,
    choice: &ChoiceConfig,
    form_values: &FormValues,
) {
    let Some(selected) = form_values.get(element_id).filter(|value| is_truthy(value)) else {
        return;
    };
    let Some(option) = choice
        .options()
        .iter()
        .find(|option| same_value(&option.value, selected))
    else {
        tracing::debug!(element = element_id, "Selected value matches no option");
        return;
    };
    if let Some(modifier) = option.price_modifier.filter(|m| *m != 0.0) {
        pass.push(LineItem::flat(
            format!("{}: {}", choice.label, option.label),
            modifier,
        ));
    }
}

fn price_packages(pass: &mut PricingPass, packages: &PackageTiersConfig, form_values: &FormValues) {
    for package in packages.packages() {
        if !is_selected(form_values, &package_key(&package.id)) {
            continue;
        }
        match package.price {
            Some(price) => pass.push(LineItem::flat(&package.name, price)),
            None => tracing::debug!(package = %package.id, "Selected package has no price"),
        }
    }
}

fn price_checkboxes(
    pass: &mut PricingPass,
    element_id: &str,
    choice: &ChoiceConfig,
    form_values: &FormValues,
) {
    for option in choice.options() {
        let Some(value) = option.value_key() else {
            continue;
        };
        if !is_selected(form_values, &checkbox_key(element_id, &value)) {
            continue;
        }
        if let Some(modifier) = option.price_modifier.filter(|m| *m != 0.0) {
            pass.push(LineItem::flat(
                format!("{}: {}", choice.label, option.label),
                modifier,
            ));
        }
    }
}

/// Strict equality, except that numbers compare by value (`5` == `5.0`)
fn same_value(option: &Value, selected: &Value) -> bool {
    match (option, selected) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => option == selected,
    }
}
