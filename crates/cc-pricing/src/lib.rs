//! Proposal pricing for CommandCentered
//!
//! Walks the elements of a proposal template against submitted form values
//! and produces a line-item breakdown with subtotal, tax and total.

pub mod cache;
pub mod evaluator;
pub mod form;
pub mod submission;
pub mod tier;

pub use cache::PricingCache;
pub use evaluator::calculate_proposal_pricing;
pub use submission::ProposalSubmission;
pub use tier::find_matching_tier;
