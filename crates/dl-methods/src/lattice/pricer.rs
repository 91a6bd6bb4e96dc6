//! Contract-level American option pricing on a dividend-adjusted lattice.
//!
//! [`LatticePricer`] derives the Cox-Ross-Rubinstein tree from a
//! [`ContractSpec`], subtracts the cumulative cash dividends paid by each
//! step from the node prices, and rolls the option value back from expiry
//! with an early-exercise check at every node:
//!
//! ```text
//! price(j,i)  = S0 · d^i · u^(j−i) − offset[j]
//! value(j,i)  = max( intrinsic(price(j,i)),
//!                    (p · value(j+1,i) + (1−p) · value(j+1,i+1)) · exp(−rΔt) )
//! ```
//!
//! Every call owns its buffers; nothing is shared between calls.

use super::{
    price_american, price_american_with_tree, BinomialTree, DegeneratePolicy, DividendSchedule,
    LatticeConfig, LatticeSnapshot, TimeGrid,
};
use dl_core::{errors::Error, errors::Result, Real};
use dl_instruments::ContractSpec;
use tracing::{debug, trace, warn};

/// Prices one contract with one lattice configuration.
#[derive(Debug, Clone, Copy)]
pub struct LatticePricer<'a> {
    contract: &'a ContractSpec,
    config: LatticeConfig,
}

impl<'a> LatticePricer<'a> {
    /// Create a pricer for `contract`.
    pub fn new(contract: &'a ContractSpec, config: LatticeConfig) -> Self {
        Self { contract, config }
    }

    /// The contract being priced.
    pub fn contract(&self) -> &'a ContractSpec {
        self.contract
    }

    /// The lattice settings.
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// The binomial tree for this contract, after the degenerate-probability
    /// check.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for zero steps;
    /// [`Error::DegenerateModel`] if the up-probability is outside `[0, 1]`
    /// and the policy is [`DegeneratePolicy::Fail`].
    pub fn tree(&self) -> Result<BinomialTree> {
        self.config.validate()?;
        self.build_tree()
    }

    /// Cumulative dividends paid by each of the `steps + 1` step dates.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for zero steps.
    pub fn dividend_offsets(&self) -> Result<Vec<Real>> {
        self.config.validate()?;
        Ok(self.offsets())
    }

    /// Build the tree and offsets and roll the lattice back once.
    ///
    /// # Errors
    /// See [`LatticePricer::tree`].
    pub fn evaluate(&self) -> Result<LatticeValuation> {
        let (tree, offsets) = self.setup()?;
        let value = price_american(&tree, &self.contract.payoff(), &offsets);
        trace!(value, "lattice root value");
        Ok(LatticeValuation {
            tree,
            offsets,
            value,
        })
    }

    /// Estimated value of the contract today.
    ///
    /// # Errors
    /// See [`LatticePricer::tree`].
    pub fn price(&self) -> Result<Real> {
        self.evaluate().map(|v| v.value())
    }

    /// Evaluate the lattice and keep every node.
    ///
    /// Memory grows with `steps²`; the root value is identical to
    /// [`LatticePricer::price`].
    ///
    /// # Errors
    /// See [`LatticePricer::tree`].
    pub fn price_with_tree(&self) -> Result<LatticeSnapshot> {
        let (tree, offsets) = self.setup()?;
        let snapshot = price_american_with_tree(&tree, &self.contract.payoff(), &offsets);
        trace!(value = snapshot.root_value(), "lattice root value");
        Ok(snapshot)
    }

    fn setup(&self) -> Result<(BinomialTree, Vec<Real>)> {
        self.config.validate()?;
        let tree = self.build_tree()?;
        let offsets = self.offsets();
        debug!(
            option_type = %self.contract.option_type(),
            steps = tree.steps(),
            up = tree.up(),
            down = tree.down(),
            probability = tree.probability(1),
            discount = tree.discount(),
            dividends_by_expiry = offsets[offsets.len() - 1],
            "building American option lattice"
        );
        Ok((tree, offsets))
    }

    fn build_tree(&self) -> Result<BinomialTree> {
        let c = self.contract;
        let tree = BinomialTree::cox_ross_rubinstein(
            c.spot(),
            c.volatility(),
            c.risk_free_rate(),
            c.maturity(),
            self.config.steps,
        )?;

        if tree.is_degenerate() {
            let probability = tree.probability(1);
            match self.config.policy {
                DegeneratePolicy::Warn => warn!(
                    probability,
                    up = tree.up(),
                    down = tree.down(),
                    steps = tree.steps(),
                    "up-probability outside [0, 1]; lattice value has no risk-neutral meaning"
                ),
                DegeneratePolicy::Fail => {
                    return Err(Error::DegenerateModel {
                        probability,
                        up: tree.up(),
                        down: tree.down(),
                        steps: tree.steps(),
                    })
                }
            }
        }
        Ok(tree)
    }

    // Caller has validated the step count.
    fn offsets(&self) -> Vec<Real> {
        let grid = TimeGrid::uniform(self.contract.maturity(), self.config.steps);
        DividendSchedule::new(self.contract.dividends()).offsets(&grid)
    }
}

/// Outcome of [`LatticePricer::evaluate`]: the tree, the dividend offsets
/// and the root value.
#[derive(Debug, Clone)]
pub struct LatticeValuation {
    tree: BinomialTree,
    offsets: Vec<Real>,
    value: Real,
}

impl LatticeValuation {
    /// The tree the value was computed on.
    pub fn tree(&self) -> &BinomialTree {
        &self.tree
    }

    /// Cumulative dividends paid by each step date.
    pub fn dividend_offsets(&self) -> &[Real] {
        &self.offsets
    }

    /// Dividends paid strictly before expiry.
    pub fn dividends_by_expiry(&self) -> Real {
        self.offsets[self.offsets.len() - 1]
    }

    /// Option value today.
    pub fn value(&self) -> Real {
        self.value
    }
}
