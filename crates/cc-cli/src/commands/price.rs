use anyhow::Result;
use cc_config::{Config, OutputFormat};
use cc_core::{PricingResult, format_currency};
use cc_pricing::{PricingCache, ProposalSubmission};
use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::{load_form_values, load_template};

pub fn handle(
    template_path: &Path,
    value_paths: &[PathBuf],
    json: bool,
    submission: Option<String>,
    config: &Config,
) -> Result<()> {
    let template = load_template(template_path)?;

    // Currency symbol: template's pricing summary first, then user config
    let symbol = template
        .pricing_summary()
        .and_then(|summary| summary.currency_symbol.clone())
        .filter(|symbol| !symbol.is_empty())
        .unwrap_or_else(|| config.currency_symbol.clone());
    let json = json || config.output.format == OutputFormat::Json;

    let forms: Vec<Option<&Path>> = if value_paths.is_empty() {
        vec![None]
    } else {
        value_paths.iter().map(|path| Some(path.as_path())).collect()
    };

    let cache = PricingCache::with_capacity(config.cache.capacity);

    for source in forms {
        let form_values = load_form_values(source)?;
        let pricing = cache.price(&template.elements, &form_values);

        if let Some(template_id) = &submission {
            let record = ProposalSubmission::new(template_id.clone(), &form_values, &pricing);
            println!("{}", serde_json::to_string_pretty(&record)?);
            continue;
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&pricing)?);
            continue;
        }

        if let Some(path) = source
            && value_paths.len() > 1
        {
            println!("{}:", path.display());
        }
        print!("{}", render_text(&pricing, &symbol, config.output.show_breakdown));
    }

    tracing::debug!(cached = cache.len(), "Pricing complete");
    Ok(())
}

/// Human-readable breakdown of a pricing result
pub fn render_text(pricing: &PricingResult, symbol: &str, show_breakdown: bool) -> String {
    let mut out = String::new();

    if show_breakdown {
        if pricing.line_items.is_empty() {
            let _ = writeln!(out, "No priced selections.");
        }
        for item in &pricing.line_items {
            match (item.quantity, item.unit_price) {
                (Some(quantity), Some(unit_price)) => {
                    let _ = writeln!(
                        out,
                        "  {}  {} × {}  {}",
                        item.label,
                        quantity,
                        format_currency(unit_price, symbol),
                        format_currency(item.total, symbol)
                    );
                }
                _ => {
                    let _ = writeln!(out, "  {}  {}", item.label, format_currency(item.total, symbol));
                }
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Subtotal: {}", format_currency(pricing.subtotal, symbol));
    if pricing.tax_amount != 0.0 {
        let _ = writeln!(out, "Tax:      {}", format_currency(pricing.tax_amount, symbol));
    }
    if pricing.discount_amount != 0.0 {
        let _ = writeln!(out, "Discount: -{}", format_currency(pricing.discount_amount, symbol));
    }
    let _ = writeln!(out, "Total:    {}", format_currency(pricing.total, symbol));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::LineItem;

    fn sample() -> PricingResult {
        PricingResult {
            subtotal: 350.0,
            line_items: vec![
                LineItem::per_unit("Attendees", 5.0, 50.0),
                LineItem::flat("Highlight reel", 100.0),
            ],
            tax_amount: 35.0,
            discount_amount: 0.0,
            total: 385.0,
        }
    }

    #[test]
    fn test_render_breakdown() {
        let text = render_text(&sample(), "$", true);
        assert!(text.contains("Attendees  5 × $50.00  $250.00"));
        assert!(text.contains("Highlight reel  $100.00"));
        assert!(text.contains("Tax:      $35.00"));
        assert!(text.contains("Total:    $385.00"));
        assert!(!text.contains("Discount"));
    }

    #[test]
    fn test_render_totals_only() {
        let text = render_text(&sample(), "€", false);
        assert!(!text.contains("Attendees"));
        assert!(text.starts_with("Subtotal: €350.00"));
    }

    #[test]
    fn test_render_empty_result() {
        let text = render_text(&PricingResult::default(), "$", true);
        assert!(text.contains("No priced selections."));
        assert!(text.contains("Total:    $0.00"));
        assert!(!text.contains("Tax"));
    }
}
