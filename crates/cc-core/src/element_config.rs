//! Typed views over element configuration objects
//!
//! Every pricing-relevant element type gets its own config shape. Parsing is
//! total: missing or mistyped fields take their defaults, and broken entries
//! inside lists are dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::element::ElementType;
use crate::lenient;

#[derive(Debug, Clone, PartialEq)]
pub enum ElementConfig {
    NumberInput(NumberInputConfig),
    ServiceToggles(ServiceTogglesConfig),
    Dropdown(ChoiceConfig),
    RadioGroup(ChoiceConfig),
    CheckboxGroup(ChoiceConfig),
    PricingTiers(PricingTiersConfig),
    PackageTiers(PackageTiersConfig),
    PricingSummary(PricingSummaryConfig),
    /// Display-only and free-text elements; they never contribute to pricing
    Display,
}

impl ElementConfig {
    pub fn from_raw(element_type: ElementType, raw: &Map<String, Value>) -> Self {
        match element_type {
            ElementType::NumberInput => ElementConfig::NumberInput(parse(raw)),
            ElementType::ServiceToggles => ElementConfig::ServiceToggles(parse(raw)),
            ElementType::Dropdown => ElementConfig::Dropdown(parse(raw)),
            ElementType::RadioGroup => ElementConfig::RadioGroup(parse(raw)),
            ElementType::CheckboxGroup => ElementConfig::CheckboxGroup(parse(raw)),
            ElementType::PricingTiers => ElementConfig::PricingTiers(parse(raw)),
            ElementType::PackageTiers => ElementConfig::PackageTiers(parse(raw)),
            ElementType::PricingSummary => ElementConfig::PricingSummary(parse(raw)),
            ElementType::Hero
            | ElementType::RichText
            | ElementType::Image
            | ElementType::Video
            | ElementType::TextInput
            | ElementType::Textarea
            | ElementType::DatePicker
            | ElementType::SubmitButton
            | ElementType::Divider => ElementConfig::Display,
        }
    }
}

fn parse<T: DeserializeOwned + Default>(raw: &Map<String, Value>) -> T {
    serde_json::from_value(Value::Object(raw.clone())).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInputConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: String,
    /// Form field the submitted quantity is read from
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub pricing_variable: Option<String>,
    /// Flat per-unit price used when no tier table is attached
    #[serde(default, deserialize_with = "lenient::number")]
    pub base_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub max: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub step: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub default_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub required: bool,
}

impl NumberInputConfig {
    /// The pricing variable, if one is set and non-empty
    pub fn pricing_variable(&self) -> Option<&str> {
        self.pricing_variable.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, deserialize_with = "lenient::string_like")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub base_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub default_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTogglesConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub services: Option<Vec<Service>>,
}

impl ServiceTogglesConfig {
    pub fn services(&self) -> &[Service] {
        self.services.as_deref().unwrap_or_default()
    }
}

/// Option of a dropdown, radio group or checkbox group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    /// Submitted value; compared as-is against the form value
    #[serde(default)]
    pub value: Value,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_modifier: Option<f64>,
}

impl ChoiceOption {
    /// `value` as it appears in composite form keys (`<elementId>.<value>`)
    pub fn value_key(&self) -> Option<String> {
        lenient::key_fragment(&self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub options: Option<Vec<ChoiceOption>>,
}

impl ChoiceConfig {
    pub fn options(&self) -> &[ChoiceOption] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// One row of a quantity-based price table.
///
/// Numeric fields accept numbers or numeric strings. `min_qty` defaults to 0
/// when absent or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub min_qty: f64,
    #[serde(default)]
    pub max_qty: TierMax,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_per_unit: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: Option<String>,
}

impl PricingTier {
    pub fn new(min_qty: f64, max_qty: Option<f64>, price_per_unit: f64) -> Self {
        Self {
            min_qty,
            max_qty: max_qty.map_or(TierMax::Unbounded, TierMax::AtMost),
            price_per_unit: Some(price_per_unit),
            label: None,
        }
    }

    pub fn contains(&self, quantity: f64) -> bool {
        quantity >= self.min_qty && self.max_qty.admits(quantity)
    }
}

/// Upper bound of a [`PricingTier`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TierMax {
    /// `maxQty` absent or `null`
    #[default]
    Unbounded,
    AtMost(f64),
    /// `maxQty` present but not a number; the tier never matches
    Invalid,
}

impl TierMax {
    pub fn admits(self, quantity: f64) -> bool {
        match self {
            TierMax::Unbounded => true,
            TierMax::AtMost(max) => quantity <= max,
            TierMax::Invalid => false,
        }
    }
}

impl<'de> Deserialize<'de> for TierMax {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => TierMax::Unbounded,
            other => lenient::parse_number(&other).map_or(TierMax::Invalid, TierMax::AtMost),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTiersConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: String,
    /// Pricing variable of the number input this table prices
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub based_on: Option<String>,
    /// `None` when the table carries no tier list at all
    #[serde(default, deserialize_with = "lenient::list")]
    pub tiers: Option<Vec<PricingTier>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub show_calculation: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(default, deserialize_with = "lenient::string_like")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub recommended: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTiersConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub packages: Option<Vec<Package>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub allow_multiple: bool,
}

impl PackageTiersConfig {
    pub fn packages(&self) -> &[Package] {
        self.packages.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummaryConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub show_breakdown: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub show_tax: bool,
    /// Fraction, e.g. 0.08 for 8%
    #[serde(default, deserialize_with = "lenient::number")]
    pub tax_rate: Option<f64>,
    /// Display flag only; discounts are not computed
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub show_discount: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub currency_symbol: Option<String>,
}

impl PricingSummaryConfig {
    /// Tax rate to apply, if tax is shown and the rate is non-zero
    pub fn effective_tax_rate(&self) -> Option<f64> {
        if !self.show_tax {
            return None;
        }
        self.tax_rate.filter(|rate| *rate != 0.0)
    }
}
