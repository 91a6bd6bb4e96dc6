//! # dl-pricingengines
//!
//! Pricing engines for divlattice contracts.
//!
//! ## Engines
//!
//! - [`BinomialDividendEngine`] — Cox-Ross-Rubinstein lattice for American
//!   options with discrete cash dividends

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod binomial_dividend_engine;

pub use binomial_dividend_engine::BinomialDividendEngine;
