use anyhow::Result;
use cc_core::{ElementConfig, ProposalElement, Template, TierMax};

use super::load_template;
use crate::cli::TemplateCommands;

pub fn handle(cmd: TemplateCommands) -> Result<()> {
    match cmd {
        TemplateCommands::Show { template } => {
            let template = load_template(&template)?;
            show(&template);
            Ok(())
        }
        TemplateCommands::Check { template } => {
            let template = load_template(&template)?;
            println!("{}", template.to_json_pretty()?);
            eprintln!("✓ Template is valid ({} elements)", template.elements.len());
            Ok(())
        }
    }
}

fn show(template: &Template) {
    if template.elements.is_empty() {
        println!("Template has no elements.");
        return;
    }

    println!("Elements ({}):", template.elements.len());
    for element in template.ordered_elements() {
        println!(
            "  [{}] {} ({})",
            element.order,
            element.id,
            element.element_type.label()
        );
        for line in details(element) {
            println!("      {}", line);
        }
    }
}

/// Pricing-relevant details of an element, one line each
fn details(element: &ProposalElement) -> Vec<String> {
    match &element.config {
        ElementConfig::NumberInput(input) => {
            let mut lines = Vec::new();
            if let Some(variable) = input.pricing_variable() {
                lines.push(format!("pricing variable: {}", variable));
            }
            if let Some(price) = input.base_price {
                lines.push(format!("base price: {}", price));
            }
            lines
        }
        ElementConfig::PricingTiers(table) => {
            let mut lines = vec![format!(
                "based on: {}",
                table.based_on.as_deref().unwrap_or("-")
            )];
            for tier in table.tiers.as_deref().unwrap_or_default() {
                let max = match tier.max_qty {
                    TierMax::Unbounded => "∞".to_string(),
                    TierMax::AtMost(max) => max.to_string(),
                    TierMax::Invalid => "?".to_string(),
                };
                let price = tier
                    .price_per_unit
                    .map_or("-".to_string(), |price| price.to_string());
                lines.push(format!("{}-{} units @ {}", tier.min_qty, max, price));
            }
            lines
        }
        ElementConfig::ServiceToggles(toggles) => toggles
            .services()
            .iter()
            .map(|service| format!("{} ({}): {}", service.name, service.id, price_or_dash(service.base_price)))
            .collect(),
        ElementConfig::Dropdown(choice)
        | ElementConfig::RadioGroup(choice)
        | ElementConfig::CheckboxGroup(choice) => choice
            .options()
            .iter()
            .map(|option| match option.price_modifier {
                Some(modifier) => format!("{} (+{})", option.label, modifier),
                None => option.label.clone(),
            })
            .collect(),
        ElementConfig::PackageTiers(packages) => packages
            .packages()
            .iter()
            .map(|package| {
                let marker = if package.recommended { " *" } else { "" };
                format!("{}{}: {}", package.name, marker, price_or_dash(package.price))
            })
            .collect(),
        ElementConfig::PricingSummary(summary) => match summary.effective_tax_rate() {
            Some(rate) => vec![format!("tax rate: {}", rate)],
            None => vec!["no tax".to_string()],
        },
        ElementConfig::Display => Vec::new(),
    }
}

fn price_or_dash(price: Option<f64>) -> String {
    price.map_or("-".to_string(), |price| price.to_string())
}
