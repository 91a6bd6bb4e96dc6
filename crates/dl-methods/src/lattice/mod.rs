//! Lattice methods for American option pricing.
//!
//! # Overview
//!
//! * [`BinomialTree`] — recombining Cox-Ross-Rubinstein tree
//! * [`TimeGrid`] — uniform grid of step dates from today to expiry
//! * [`DividendSchedule`] — cumulative cash dividends paid by each step
//! * [`price_american`] / [`price_american_with_tree`] — backward induction
//! * [`LatticePricer`] — contract-level entry point tying the above together
//!
//! # Indexing
//!
//! Node `(j, i)` sits at step `j ∈ [0, steps]` after `i ∈ [0, j]` down-moves,
//! so a larger `i` means a lower price. From `(j, i)` the up branch leads to
//! `(j + 1, i)` and the down branch to `(j + 1, i + 1)`.

pub mod binomial_tree;
pub mod config;
pub mod dividend_schedule;
pub mod pricer;
pub mod snapshot;

pub use binomial_tree::BinomialTree;
pub use config::{DegeneratePolicy, LatticeConfig};
pub use dividend_schedule::DividendSchedule;
pub use pricer::{LatticePricer, LatticeValuation};
pub use snapshot::{LatticeNode, LatticeSnapshot};

use dl_core::{Real, Size, Time};
use dl_instruments::Payoff;

// ─── TimeGrid ─────────────────────────────────────────────────────────────────

/// A uniform grid of time points from `0` to `end` inclusive.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    times: Vec<Time>,
    dt: Time,
}

impl TimeGrid {
    /// Create a uniform time grid from 0 to `end` with `steps` intervals.
    ///
    /// Point `j` is `j · end / steps`; the last point is exactly `end`.
    ///
    /// # Panics
    /// Panics if `steps == 0`.
    pub fn uniform(end: Time, steps: Size) -> Self {
        assert!(steps > 0, "steps must be > 0");
        let dt = end / steps as Real;
        let mut times: Vec<Time> = (0..=steps).map(|j| j as Real * dt).collect();
        times[steps] = end;
        Self { times, dt }
    }

    /// Number of time points (= steps + 1).
    pub fn size(&self) -> Size {
        self.times.len()
    }

    /// Number of steps (= time points − 1).
    pub fn steps(&self) -> Size {
        self.times.len() - 1
    }

    /// Time at index `j`.
    pub fn time(&self, j: Size) -> Time {
        self.times[j]
    }

    /// Time step between consecutive points.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Final time.
    pub fn end(&self) -> Time {
        self.times[self.times.len() - 1]
    }

    /// All time points.
    pub fn times(&self) -> &[Time] {
        &self.times
    }
}

// ─── Backward-induction pricing ───────────────────────────────────────────────

/// Value of node `(j, i)` given the values of row `j + 1`.
#[inline]
fn node_value(
    tree: &BinomialTree,
    payoff: &dyn Payoff,
    offset: Real,
    j: Size,
    i: Size,
    next: &[Real],
) -> (Real, Real) {
    let price = tree.underlying(j, i) - offset;
    let intrinsic = payoff.value(price);
    let continuation = (next[tree.descendant(i, 1)] * tree.probability(1)
        + next[tree.descendant(i, 0)] * tree.probability(0))
        * tree.discount();
    (price, continuation.max(intrinsic))
}

/// Fill `current` (row `j`) from `next` (row `j + 1`).
#[cfg(not(feature = "parallel"))]
fn roll_back_row(
    tree: &BinomialTree,
    payoff: &dyn Payoff,
    offset: Real,
    j: Size,
    next: &[Real],
    current: &mut [Real],
) {
    for (i, v) in current.iter_mut().enumerate() {
        *v = node_value(tree, payoff, offset, j, i, next).1;
    }
}

/// Fill `current` (row `j`) from `next` (row `j + 1`) on the rayon pool.
#[cfg(feature = "parallel")]
fn roll_back_row(
    tree: &BinomialTree,
    payoff: &dyn Payoff,
    offset: Real,
    j: Size,
    next: &[Real],
    current: &mut [Real],
) {
    use rayon::prelude::*;

    current
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, v)| *v = node_value(tree, payoff, offset, j, i, next).1);
}

/// Price an American option by backward induction on a binomial tree.
///
/// # Arguments
/// * `tree` — the binomial tree (already constructed)
/// * `payoff` — exercise payoff, evaluated on dividend-adjusted node prices
/// * `offsets` — cumulative dividends paid by each step, `tree.steps() + 1`
///   entries (see [`DividendSchedule::offsets`])
///
/// Only two rows are alive at any time; they are swapped as the induction
/// moves toward the root.
///
/// # Panics
/// Panics if `offsets.len() != tree.steps() + 1`.
pub fn price_american(tree: &BinomialTree, payoff: &dyn Payoff, offsets: &[Real]) -> Real {
    let n = tree.steps();
    assert_eq!(offsets.len(), n + 1, "one dividend offset per time step");

    // Terminal values at expiry
    let mut next: Vec<Real> = (0..tree.size(n))
        .map(|i| payoff.value(tree.underlying(n, i) - offsets[n]))
        .collect();
    let mut current: Vec<Real> = vec![0.0; tree.size(n)];

    // Roll back through the tree
    for j in (0..n).rev() {
        let row = &mut current[..tree.size(j)];
        roll_back_row(tree, payoff, offsets[j], j, &next, row);
        std::mem::swap(&mut next, &mut current);
    }

    next[0]
}

/// Price an American option and keep every node of the lattice.
///
/// Same arithmetic as [`price_american`]; the returned snapshot's root value
/// is identical to its result.
///
/// # Panics
/// Panics if `offsets.len() != tree.steps() + 1`.
pub fn price_american_with_tree(
    tree: &BinomialTree,
    payoff: &dyn Payoff,
    offsets: &[Real],
) -> LatticeSnapshot {
    let n = tree.steps();
    assert_eq!(offsets.len(), n + 1, "one dividend offset per time step");

    let total = LatticeSnapshot::node_count(n);
    let mut prices = vec![0.0; total];
    let mut values = vec![0.0; total];

    let base = LatticeSnapshot::flat_index(n, 0);
    for i in 0..tree.size(n) {
        let price = tree.underlying(n, i) - offsets[n];
        prices[base + i] = price;
        values[base + i] = payoff.value(price);
    }

    for j in (0..n).rev() {
        let base = LatticeSnapshot::flat_index(j, 0);
        let (head, tail) = values.split_at_mut(base + tree.size(j));
        let next = &tail[..tree.size(j + 1)];
        for i in 0..tree.size(j) {
            let (price, value) = node_value(tree, payoff, offsets[j], j, i, next);
            prices[base + i] = price;
            head[base + i] = value;
        }
    }

    LatticeSnapshot::new(n, prices, values)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
