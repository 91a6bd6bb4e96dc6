//! Recombining Cox-Ross-Rubinstein binomial tree.
//!
//! Equal and opposite log-jumps, `u = exp(σ√Δt)` and `d = 1/u`, with the
//! drift carried entirely by the risk-neutral probability
//! `p = (exp(rΔt) − d) / (u − d)`.
//!
//! The probability is not clamped. For extreme inputs (`rΔt` large compared
//! with `σ√Δt`) it leaves `[0, 1]`; [`BinomialTree::is_degenerate`] reports
//! that and the caller decides what to do with it.

use dl_core::{
    errors::Result, require_arg, DiscountFactor, Price, Probability, Rate, Real, Size, Time,
    Volatility,
};

/// A recombining binomial tree for a single underlying.
///
/// The tree has `steps + 1` time layers, with layer `j` having `j + 1` nodes.
/// Node `(j, i)` represents the state after `i` down-moves and `j − i`
/// up-moves.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialTree {
    x0: Price,
    dt: Time,
    steps: Size,
    up: Real,
    down: Real,
    pu: Probability,
    pd: Probability,
    discount: DiscountFactor,
}

impl BinomialTree {
    /// Cox-Ross-Rubinstein tree over `[0, end]` with `steps` periods.
    ///
    /// With zero volatility `u = d = 1` and both branches land on the same
    /// price; the up-probability is then taken as `1` so the induction
    /// follows the single deterministic path.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](dl_core::Error::InvalidArgument) if
    /// `steps == 0`, `end` or `spot` is not positive, `volatility` is
    /// negative or not finite, or `risk_free_rate` is not finite.
    pub fn cox_ross_rubinstein(
        spot: Price,
        volatility: Volatility,
        risk_free_rate: Rate,
        end: Time,
        steps: Size,
    ) -> Result<Self> {
        require_arg!(steps > 0, "lattice needs at least one step, got {steps}");
        require_arg!(
            end.is_finite() && end > 0.0,
            "lattice end time must be positive, got {end}"
        );
        require_arg!(
            spot.is_finite() && spot > 0.0,
            "initial price must be positive, got {spot}"
        );
        require_arg!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        require_arg!(
            risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {risk_free_rate}"
        );

        let dt = end / steps as Real;
        let up = (volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let pu = if up == down {
            1.0
        } else {
            ((risk_free_rate * dt).exp() - down) / (up - down)
        };
        Ok(Self {
            x0: spot,
            dt,
            steps,
            up,
            down,
            pu,
            pd: 1.0 - pu,
            discount: (-risk_free_rate * dt).exp(),
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Initial underlying value (spot price).
    pub fn x0(&self) -> Price {
        self.x0
    }

    /// Up multiplier per step.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down multiplier per step (`1 / up`).
    pub fn down(&self) -> Real {
        self.down
    }

    /// One-step discount factor `exp(−rΔt)`.
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }

    /// Number of nodes at time step `j` (always `j + 1`).
    pub fn size(&self, j: Size) -> Size {
        j + 1
    }

    /// Index of the descendant in the next row for a given `branch`.
    ///
    /// `branch = 1` → up (same down-count), `branch = 0` → down.
    pub fn descendant(&self, index: Size, branch: usize) -> Size {
        index + 1 - branch
    }

    /// Undiscounted, dividend-free underlying value at node `(j, i)`:
    /// `x0 · d^i · u^(j − i)`.
    pub fn underlying(&self, j: Size, i: Size) -> Price {
        self.x0 * self.down.powi(i as i32) * self.up.powi((j - i) as i32)
    }

    /// Transition probability for `branch` (0 = down, 1 = up).
    pub fn probability(&self, branch: usize) -> Probability {
        if branch == 1 {
            self.pu
        } else {
            self.pd
        }
    }

    /// Whether the up-probability falls outside `[0, 1]` (or is NaN).
    pub fn is_degenerate(&self) -> bool {
        !(0.0..=1.0).contains(&self.pu)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
