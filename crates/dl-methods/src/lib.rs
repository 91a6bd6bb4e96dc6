//! # dl-methods
//!
//! Numerical methods for divlattice: the uniform time grid, the
//! Cox-Ross-Rubinstein binomial tree, the discrete-dividend schedule, and
//! backward-induction pricing of American options on the resulting lattice.
//!
//! # Modules
//!
//! * [`lattice`] — binomial tree, dividend offsets, backward induction

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: binomial tree, dividend schedule, backward induction.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    price_american, BinomialTree, DegeneratePolicy, DividendSchedule, LatticeConfig,
    LatticeNode, LatticePricer, LatticeSnapshot, LatticeValuation, TimeGrid,
};
