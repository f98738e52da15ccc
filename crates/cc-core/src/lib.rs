//! Core domain models for CommandCentered proposals
//!
//! This crate contains:
//! - Proposal elements and their typed configurations
//! - Template documents (loading and envelope validation)
//! - Pricing output types (line items, pricing result)

pub mod element;
pub mod element_config;
pub mod error;
mod lenient;
pub mod pricing;
pub mod template;

pub use element::{ElementCategory, ElementType, ProposalElement};
pub use element_config::{
    ChoiceConfig, ChoiceOption, ElementConfig, NumberInputConfig, Package, PackageTiersConfig,
    PricingSummaryConfig, PricingTier, PricingTiersConfig, Service, ServiceTogglesConfig,
    TierMax,
};
pub use error::{CoreError, Result};
pub use pricing::{FormValues, LineItem, PricingResult, format_currency};
pub use template::{Template, ThemeConfig};
