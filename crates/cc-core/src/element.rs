//! Proposal element domain model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::element_config::ElementConfig;
use crate::{CoreError, Result};

/// Building block types available in the proposal builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Hero,
    RichText,
    Image,
    Video,
    NumberInput,
    TextInput,
    Textarea,
    DatePicker,
    Dropdown,
    ServiceToggles,
    CheckboxGroup,
    RadioGroup,
    PricingTiers,
    PackageTiers,
    PricingSummary,
    SubmitButton,
    Divider,
}

/// Palette grouping for element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Content,
    Inputs,
    Selections,
    Pricing,
    Actions,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 5] = [
        ElementCategory::Content,
        ElementCategory::Inputs,
        ElementCategory::Selections,
        ElementCategory::Pricing,
        ElementCategory::Actions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ElementCategory::Content => "Content",
            ElementCategory::Inputs => "Inputs",
            ElementCategory::Selections => "Selections",
            ElementCategory::Pricing => "Pricing",
            ElementCategory::Actions => "Actions",
        }
    }
}

impl ElementType {
    /// All element types in palette order
    pub const ALL: [ElementType; 17] = [
        ElementType::Hero,
        ElementType::RichText,
        ElementType::Image,
        ElementType::Video,
        ElementType::NumberInput,
        ElementType::TextInput,
        ElementType::Textarea,
        ElementType::DatePicker,
        ElementType::Dropdown,
        ElementType::ServiceToggles,
        ElementType::CheckboxGroup,
        ElementType::RadioGroup,
        ElementType::PricingTiers,
        ElementType::PackageTiers,
        ElementType::PricingSummary,
        ElementType::SubmitButton,
        ElementType::Divider,
    ];

    /// Wire tag (`number_input`, `pricing_tiers`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Hero => "hero",
            ElementType::RichText => "rich_text",
            ElementType::Image => "image",
            ElementType::Video => "video",
            ElementType::NumberInput => "number_input",
            ElementType::TextInput => "text_input",
            ElementType::Textarea => "textarea",
            ElementType::DatePicker => "date_picker",
            ElementType::Dropdown => "dropdown",
            ElementType::ServiceToggles => "service_toggles",
            ElementType::CheckboxGroup => "checkbox_group",
            ElementType::RadioGroup => "radio_group",
            ElementType::PricingTiers => "pricing_tiers",
            ElementType::PackageTiers => "package_tiers",
            ElementType::PricingSummary => "pricing_summary",
            ElementType::SubmitButton => "submit_button",
            ElementType::Divider => "divider",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ElementType::Hero => "Hero Section",
            ElementType::RichText => "Rich Text",
            ElementType::Image => "Image",
            ElementType::Video => "Video",
            ElementType::NumberInput => "Number Input",
            ElementType::TextInput => "Text Input",
            ElementType::Textarea => "Textarea",
            ElementType::DatePicker => "Date Picker",
            ElementType::Dropdown => "Dropdown",
            ElementType::ServiceToggles => "Service Toggles",
            ElementType::CheckboxGroup => "Checkbox Group",
            ElementType::RadioGroup => "Radio Group",
            ElementType::PricingTiers => "Pricing Tiers",
            ElementType::PackageTiers => "Package Tiers",
            ElementType::PricingSummary => "Pricing Summary",
            ElementType::SubmitButton => "Submit Button",
            ElementType::Divider => "Divider",
        }
    }

    pub fn category(self) -> ElementCategory {
        match self {
            ElementType::Hero | ElementType::RichText | ElementType::Image | ElementType::Video => {
                ElementCategory::Content
            }
            ElementType::NumberInput
            | ElementType::TextInput
            | ElementType::Textarea
            | ElementType::DatePicker
            | ElementType::Dropdown => ElementCategory::Inputs,
            ElementType::ServiceToggles | ElementType::CheckboxGroup | ElementType::RadioGroup => {
                ElementCategory::Selections
            }
            ElementType::PricingTiers | ElementType::PackageTiers | ElementType::PricingSummary => {
                ElementCategory::Pricing
            }
            ElementType::SubmitButton | ElementType::Divider => ElementCategory::Actions,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ElementType::Hero => "Header with title and subtitle",
            ElementType::RichText => "Formatted text content",
            ElementType::Image => "Standalone image",
            ElementType::Video => "Embedded video",
            ElementType::NumberInput => "Quantity selector",
            ElementType::TextInput => "Short text field",
            ElementType::Textarea => "Long text field",
            ElementType::DatePicker => "Date selection",
            ElementType::Dropdown => "Single choice dropdown",
            ElementType::ServiceToggles => "Enable/disable services",
            ElementType::CheckboxGroup => "Multi-select checkboxes",
            ElementType::RadioGroup => "Single-select radios",
            ElementType::PricingTiers => "Tiered pricing based on quantity",
            ElementType::PackageTiers => "Predefined packages",
            ElementType::PricingSummary => "Live-updating total",
            ElementType::SubmitButton => "Submit proposal form",
            ElementType::Divider => "Visual separator",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured building block of a proposal template.
///
/// The typed `config` is derived from `raw_config` when the element is
/// built; the raw object is kept so keys this crate does not model survive
/// a load/save cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElement", into = "RawElement")]
pub struct ProposalElement {
    pub id: String,
    pub element_type: ElementType,
    pub order: u32,
    pub config: ElementConfig,
    pub raw_config: Map<String, Value>,
}

impl ProposalElement {
    /// Build an element from an untyped config object.
    ///
    /// A `config` that is not a JSON object is treated as empty.
    pub fn new(id: impl Into<String>, element_type: ElementType, order: u32, config: Value) -> Self {
        let raw_config = match config {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: id.into(),
            element_type,
            order,
            config: ElementConfig::from_raw(element_type, &raw_config),
            raw_config,
        }
    }
}

/// Wire shape of an element: `{ id, type, order, config }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawElement {
    id: String,
    #[serde(rename = "type")]
    element_type: ElementType,
    order: Number,
    #[serde(default)]
    config: Option<Value>,
}

impl TryFrom<RawElement> for ProposalElement {
    type Error = CoreError;

    fn try_from(raw: RawElement) -> Result<Self> {
        let order = whole_order(&raw.order).ok_or_else(|| {
            CoreError::InvalidTemplate(format!(
                "element {}: order must be a non-negative integer, got {}",
                raw.id, raw.order
            ))
        })?;

        let config = match raw.config {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(config @ Value::Object(_)) => config,
            Some(_) => {
                return Err(CoreError::InvalidTemplate(format!(
                    "element {}: config must be an object",
                    raw.id
                )));
            }
        };

        Ok(ProposalElement::new(raw.id, raw.element_type, order, config))
    }
}

/// `order` as a `u32`; whole floats such as `2.0` are accepted
fn whole_order(order: &Number) -> Option<u32> {
    if let Some(order) = order.as_u64() {
        return u32::try_from(order).ok();
    }
    let order = order.as_f64()?;
    (order.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&order)).then_some(order as u32)
}

impl From<ProposalElement> for RawElement {
    fn from(element: ProposalElement) -> Self {
        RawElement {
            id: element.id,
            element_type: element.element_type,
            order: Number::from(element.order),
            config: Some(Value::Object(element.raw_config)),
        }
    }
}
