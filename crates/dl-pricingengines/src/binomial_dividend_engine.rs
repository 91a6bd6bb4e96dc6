//! Binomial engine for American options on dividend-paying underlyings.
//!
//! Wraps [`LatticePricer`] behind the [`PricingEngine`] interface. Besides
//! the NPV the results carry the lattice diagnostics under the keys
//! `"steps"`, `"up"`, `"down"`, `"probability"` and `"dividends_by_expiry"`.

use dl_core::errors::Result;
use dl_instruments::{ContractSpec, PricingEngine, PricingResults};
use dl_methods::{DegeneratePolicy, LatticeConfig, LatticePricer};

/// Cox-Ross-Rubinstein lattice engine with discrete cash dividends.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinomialDividendEngine {
    config: LatticeConfig,
}

impl BinomialDividendEngine {
    /// Create an engine with the given lattice settings.
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Create an engine with `steps` periods and the default policy.
    pub fn with_steps(steps: usize) -> Self {
        Self::new(LatticeConfig::new(steps))
    }

    /// Engine that refuses to price on a degenerate lattice.
    pub fn strict(steps: usize) -> Self {
        Self::new(LatticeConfig::new(steps).with_policy(DegeneratePolicy::Fail))
    }

    /// The lattice settings.
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }
}

impl PricingEngine<ContractSpec> for BinomialDividendEngine {
    fn calculate(&self, contract: &ContractSpec) -> Result<PricingResults> {
        let valuation = LatticePricer::new(contract, self.config).evaluate()?;
        let tree = valuation.tree();

        Ok(PricingResults::from_npv(valuation.value())
            .with_result("steps", tree.steps() as f64)
            .with_result("up", tree.up())
            .with_result("down", tree.down())
            .with_result("probability", tree.probability(1))
            .with_result("dividends_by_expiry", valuation.dividends_by_expiry()))
    }
}
