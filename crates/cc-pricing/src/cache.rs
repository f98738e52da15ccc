//! Memoized pricing
//!
//! Forms re-price on every change, often with inputs already seen (toggling a
//! service off and on again). Results are keyed by a blake3 digest of the
//! canonical JSON of the elements and form values.

use cc_core::{FormValues, PricingResult, ProposalElement};
use dashmap::DashMap;

use crate::evaluator::calculate_proposal_pricing;

const DEFAULT_CAPACITY: usize = 1024;

/// Concurrent memo over [`calculate_proposal_pricing`]
pub struct PricingCache {
    entries: DashMap<blake3::Hash, PricingResult>,
    capacity: usize,
}

impl PricingCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A cache holding at most `capacity` results; it is cleared when full
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Price the proposal, reusing an earlier result for identical inputs
    pub fn price(&self, elements: &[ProposalElement], form_values: &FormValues) -> PricingResult {
        let key = match Self::key(elements, form_values) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!("Could not hash pricing inputs, skipping cache: {}", e);
                return calculate_proposal_pricing(elements, form_values);
            }
        };

        if let Some(hit) = self.entries.get(&key) {
            return hit.value().clone();
        }

        let result = calculate_proposal_pricing(elements, form_values);
        if self.entries.len() >= self.capacity {
            tracing::debug!(capacity = self.capacity, "Pricing cache full, clearing");
            self.entries.clear();
        }
        self.entries.insert(key, result.clone());
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    fn key(elements: &[ProposalElement], form_values: &FormValues) -> serde_json::Result<blake3::Hash> {
        let bytes = serde_json::to_vec(&(elements, form_values))?;
        Ok(blake3::hash(&bytes))
    }
}

impl Default for PricingCache {
    fn default() -> Self {
        Self::new()
    }
}
