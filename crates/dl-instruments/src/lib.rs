//! # dl-instruments
//!
//! Option contract terms, the vanilla payoff, and the pricing-engine
//! interface shared by every engine in the workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod contract;
pub mod instrument;
pub mod payoff;

pub use contract::{present_value, ContractSpec, Dividend};
pub use instrument::{PricingEngine, PricingResults};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
