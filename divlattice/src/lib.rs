//! # divlattice
//!
//! American option pricing on a Cox-Ross-Rubinstein binomial lattice with
//! known discrete cash dividends.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dl-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use divlattice::instruments::{ContractSpec, OptionType};
//! use divlattice::methods::{LatticeConfig, LatticePricer};
//!
//! let contract = ContractSpec::with_dividends(
//!     OptionType::Call, 100.0, 100.0, 1.0, 0.25, 0.04, [(2.0, 0.75)],
//! )?;
//! let value = LatticePricer::new(&contract, LatticeConfig::new(1000)).price()?;
//! assert!(value > 0.0);
//! # Ok::<(), divlattice::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use dl_core as core;

/// Contract terms, payoffs, and the pricing-engine interface.
pub use dl_instruments as instruments;

/// Binomial lattice, dividend schedule, and backward induction.
pub use dl_methods as methods;

/// Pricing engines.
pub use dl_pricingengines as pricingengines;

/// The most commonly used items.
pub mod prelude {
    pub use dl_core::{Error, Real, Result};
    pub use dl_instruments::{
        present_value, ContractSpec, Dividend, OptionType, Payoff, PricingEngine, PricingResults,
    };
    pub use dl_methods::{DegeneratePolicy, LatticeConfig, LatticePricer, LatticeSnapshot};
    pub use dl_pricingengines::BinomialDividendEngine;
}
