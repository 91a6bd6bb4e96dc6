//! Pricing-engine interface.
//!
//! Contracts hold their terms; engines turn those terms into
//! [`PricingResults`] on demand.

use dl_core::{errors::Result, Real};
use std::collections::BTreeMap;

/// Results of pricing a contract.
///
/// Contains the NPV and additional named diagnostics
/// (e.g. "steps", "probability").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Additional named results.
    pub additional_results: BTreeMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            additional_results: BTreeMap::new(),
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// Look up a named result.
    pub fn result(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }
}

/// Base trait for all pricing engines.
///
/// A pricing engine computes `PricingResults` for a specific contract type.
pub trait PricingEngine<Args>: std::fmt::Debug + Send + Sync {
    /// Price the contract described by `args`.
    fn calculate(&self, args: &Args) -> Result<PricingResults>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_results_builder() {
        let r = PricingResults::from_npv(14.15)
            .with_result("steps", 1.0)
            .with_result("probability", 0.5186);
        assert!((r.npv - 14.15).abs() < 1e-15);
        assert_eq!(r.result("steps"), Some(1.0));
        assert!((r.additional_results["probability"] - 0.5186).abs() < 1e-15);
        assert_eq!(r.result("delta"), None);
    }
}
