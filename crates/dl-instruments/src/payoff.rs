//! Option payoffs.
//!
//! A payoff maps the underlying price at exercise to the cash amount the
//! holder receives. The lattice pricer evaluates it both as a scalar and on
//! whole rows of node prices.

use dl_core::{errors::Error, Real};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    /// Parses exactly `"call"` or `"put"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(Error::InvalidArgument(format!(
                "option type must be \"call\" or \"put\", got {s:?}"
            ))),
        }
    }
}

/// Base trait for option payoffs.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at exercise/expiry.
    fn value(&self, price: Real) -> Real;

    /// Payoff of every price in `prices`.
    fn values(&self, prices: &[Real]) -> Vec<Real> {
        prices.iter().map(|&s| self.value(s)).collect()
    }

    /// Write the payoff of `prices[k]` into `out[k]`.
    ///
    /// # Panics
    /// Panics if the slices differ in length.
    fn apply_row(&self, out: &mut [Real], prices: &[Real]) {
        assert_eq!(out.len(), prices.len(), "row length mismatch");
        for (o, &s) in out.iter_mut().zip(prices) {
            *o = self.value(s);
        }
    }
}

/// Standard "plain vanilla" option payoff.
///
/// Call: `max(S − K, 0)`. Put: `max(K − S, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        // Plain differences: exactly zero at the strike.
        match self.option_type {
            OptionType::Call => (price - self.strike).max(0.0),
            OptionType::Put => (self.strike - price).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_vanilla_call() {
        let p = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        assert!((p.value(110.0) - 10.0).abs() < 1e-15);
        assert!((p.value(90.0) - 0.0).abs() < 1e-15);
        assert_eq!(p.value(100.0), 0.0);
    }

    #[test]
    fn plain_vanilla_put() {
        let p = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        assert!((p.value(90.0) - 10.0).abs() < 1e-15);
        assert!((p.value(110.0) - 0.0).abs() < 1e-15);
        assert_eq!(p.value(100.0), 0.0);
    }

    #[test]
    fn negative_dividend_adjusted_price() {
        // Lattice prices can go below zero once dividends are subtracted.
        let put = PlainVanillaPayoff::new(OptionType::Put, 10.0);
        assert!((put.value(-1.5) - 11.5).abs() < 1e-15);
        let call = PlainVanillaPayoff::new(OptionType::Call, 10.0);
        assert_eq!(call.value(-1.5), 0.0);
    }

    #[test]
    fn row_forms_match_scalar() {
        let p = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let prices = [80.0, 100.0, 128.40254];
        let v = p.values(&prices);
        let mut row = [f64::NAN; 3];
        p.apply_row(&mut row, &prices);
        for k in 0..3 {
            assert_eq!(v[k], p.value(prices[k]));
            assert_eq!(row[k], v[k]);
        }
        approx::assert_abs_diff_eq!(v[2], 28.40254, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "row length mismatch")]
    fn apply_row_length_mismatch() {
        let p = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        let mut out = [0.0; 2];
        p.apply_row(&mut out, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn option_type_parsing() {
        assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!("put".parse::<OptionType>(), Ok(OptionType::Put));
        for bad in ["straddle", "Call", "PUT", " put", "call\n", ""] {
            assert!(
                matches!(bad.parse::<OptionType>(), Err(Error::InvalidArgument(_))),
                "{bad:?} accepted"
            );
        }
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[derive(Debug)]
    struct Digital(Real);

    impl Payoff for Digital {
        fn value(&self, price: Real) -> Real {
            if price > self.0 {
                1.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn value_is_the_only_required_method() {
        let p = Digital(100.0);
        assert_eq!(p.values(&[99.0, 101.0]), vec![0.0, 1.0]);
        let mut row = [f64::NAN; 2];
        p.apply_row(&mut row, &[101.0, 100.0]);
        assert_eq!(row, [1.0, 0.0]);
    }

    proptest! {
        #[test]
        fn payoff_is_zero_at_strike(strike in 1e-6f64..1e6) {
            let call = PlainVanillaPayoff::new(OptionType::Call, strike);
            let put = PlainVanillaPayoff::new(OptionType::Put, strike);
            prop_assert_eq!(call.value(strike), 0.0);
            prop_assert_eq!(put.value(strike), 0.0);
        }

        #[test]
        fn payoff_is_non_negative(strike in 1e-3f64..1e4, price in -1e3f64..1e5) {
            let call = PlainVanillaPayoff::new(OptionType::Call, strike);
            let put = PlainVanillaPayoff::new(OptionType::Put, strike);
            prop_assert!(call.value(price) >= 0.0);
            prop_assert!(put.value(price) >= 0.0);
            // Call minus put is the forward payoff.
            prop_assert!((call.value(price) - put.value(price) - (price - strike)).abs() < 1e-9 * (1.0 + price.abs() + strike));
        }
    }
}
