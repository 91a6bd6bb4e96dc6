//! American option contract terms.
//!
//! [`ContractSpec`] bundles the option terms with the market assumptions the
//! lattice needs: spot, strike, maturity, volatility, the continuously
//! compounded risk-free rate, and any known cash dividends paid before
//! expiry. Every field is checked once in the constructor; the value is
//! immutable afterwards.

use crate::instrument::{PricingEngine, PricingResults};
use crate::payoff::{OptionType, PlainVanillaPayoff};
use dl_core::{errors::Result, require_arg, Price, Rate, Real, Time, Volatility};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// Dividend
// ────────────────────────────────────────────────────────────────────────────

/// A known cash dividend paid by the underlying.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dividend {
    /// Cash amount per share.
    pub amount: Real,
    /// Pay time in years from today.
    pub time: Time,
}

impl Dividend {
    /// Create a dividend of `amount` paid at `time` years.
    pub fn new(amount: Real, time: Time) -> Self {
        Self { amount, time }
    }
}

impl From<(Real, Time)> for Dividend {
    fn from((amount, time): (Real, Time)) -> Self {
        Self::new(amount, time)
    }
}

impl fmt::Display for Dividend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} @ {}y", self.amount, self.time)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ContractSpec
// ────────────────────────────────────────────────────────────────────────────

/// Terms of an American vanilla option plus its market assumptions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawContractSpec"))]
pub struct ContractSpec {
    option_type: OptionType,
    spot: Price,
    strike: Price,
    maturity: Time,
    volatility: Volatility,
    risk_free_rate: Rate,
    dividends: Vec<Dividend>,
}

impl ContractSpec {
    /// Create a contract on a non-dividend-paying underlying.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](dl_core::Error::InvalidArgument) if `spot`,
    /// `strike` or `maturity` is not a positive finite number, if
    /// `volatility` is outside `[0, 1]`, or if `risk_free_rate` is not finite.
    pub fn new(
        option_type: OptionType,
        spot: Price,
        strike: Price,
        maturity: Time,
        volatility: Volatility,
        risk_free_rate: Rate,
    ) -> Result<Self> {
        Self::with_dividends(
            option_type,
            spot,
            strike,
            maturity,
            volatility,
            risk_free_rate,
            Vec::<Dividend>::new(),
        )
    }

    /// Create a contract whose underlying pays the given cash dividends.
    ///
    /// Dividends may be given in any order.
    ///
    /// # Errors
    /// As [`ContractSpec::new`], and additionally if any dividend has a
    /// non-positive amount or a pay time outside `(0, maturity]`.
    pub fn with_dividends<I, D>(
        option_type: OptionType,
        spot: Price,
        strike: Price,
        maturity: Time,
        volatility: Volatility,
        risk_free_rate: Rate,
        dividends: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<Dividend>,
    {
        require_arg!(
            spot.is_finite() && spot > 0.0,
            "initial price must be positive, got {spot}"
        );
        require_arg!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive, got {strike}"
        );
        require_arg!(
            maturity.is_finite() && maturity > 0.0,
            "time to maturity must be positive, got {maturity}"
        );
        require_arg!(
            (0.0..=1.0).contains(&volatility),
            "volatility must satisfy 0 <= volatility <= 1, got {volatility}"
        );
        require_arg!(
            risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {risk_free_rate}"
        );

        let dividends: Vec<Dividend> = dividends.into_iter().map(Into::into).collect();
        for (n, div) in dividends.iter().enumerate() {
            require_arg!(
                div.amount.is_finite() && div.amount > 0.0,
                "dividend #{n} amount must be positive, got {}",
                div.amount
            );
            require_arg!(
                div.time > 0.0 && div.time <= maturity,
                "dividend #{n} pay time must lie in (0, {maturity}], got {}",
                div.time
            );
        }

        Ok(Self {
            option_type,
            spot,
            strike,
            maturity,
            volatility,
            risk_free_rate,
            dividends,
        })
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Initial underlying price `S0`.
    pub fn spot(&self) -> Price {
        self.spot
    }

    /// Strike price `K`.
    pub fn strike(&self) -> Price {
        self.strike
    }

    /// Time to maturity `T` in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Annual volatility of the underlying.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Annual continuously compounded risk-free rate.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Known cash dividends, in the order supplied.
    pub fn dividends(&self) -> &[Dividend] {
        &self.dividends
    }

    /// The exercise payoff of this contract.
    pub fn payoff(&self) -> PlainVanillaPayoff {
        PlainVanillaPayoff::new(self.option_type, self.strike)
    }

    /// Price this contract with the given engine.
    pub fn price(&self, engine: &dyn PricingEngine<ContractSpec>) -> Result<PricingResults> {
        engine.calculate(self)
    }
}

impl fmt::Display for ContractSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contract Specifications")?;
        writeln!(f, "{}", "-".repeat(71))?;
        writeln!(f, "{:<32}{}", "Option type:", self.option_type)?;
        writeln!(f, "{:<32}{}", "Initial price:", self.spot)?;
        writeln!(f, "{:<32}{}", "Strike price:", self.strike)?;
        writeln!(f, "{:<32}{}", "Time to maturity (in years):", self.maturity)?;
        writeln!(f, "{:<32}{}", "Annual volatility:", self.volatility)?;
        writeln!(f, "{:<32}{}", "Annual risk free rate:", self.risk_free_rate)?;
        if self.dividends.is_empty() {
            write!(f, "{:<32}none", "Dividends:")
        } else {
            let list: Vec<String> = self.dividends.iter().map(ToString::to_string).collect();
            write!(f, "{:<32}[{}]", "Dividends:", list.join(", "))
        }
    }
}

/// Discount cash amounts received at the contract's expiry back to today.
///
/// Each value is multiplied by `exp(−r·T)`.
pub fn present_value(contract: &ContractSpec, values: &[Real]) -> Vec<Real> {
    let df = (-contract.risk_free_rate * contract.maturity).exp();
    values.iter().map(|v| v * df).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Deserialisation goes through the validating constructor
// ────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawContractSpec {
    option_type: OptionType,
    spot: Price,
    strike: Price,
    maturity: Time,
    volatility: Volatility,
    risk_free_rate: Rate,
    #[serde(default)]
    dividends: Vec<Dividend>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawContractSpec> for ContractSpec {
    type Error = dl_core::Error;

    fn try_from(raw: RawContractSpec) -> Result<Self> {
        Self::with_dividends(
            raw.option_type,
            raw.spot,
            raw.strike,
            raw.maturity,
            raw.volatility,
            raw.risk_free_rate,
            raw.dividends,
        )
    }
}
