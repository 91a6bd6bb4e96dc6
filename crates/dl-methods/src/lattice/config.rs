//! Per-call lattice settings.

use dl_core::{errors::Result, require_arg, Size};

/// What to do when the risk-neutral up-probability leaves `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DegeneratePolicy {
    /// Log a warning and price anyway.
    #[default]
    Warn,
    /// Return [`Error::DegenerateModel`](dl_core::Error::DegenerateModel).
    Fail,
}

/// Settings for one lattice pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeConfig {
    /// Number of time steps; must be at least 1.
    pub steps: Size,
    /// Handling of a degenerate up-probability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: DegeneratePolicy,
}

impl LatticeConfig {
    /// Number of steps used by [`LatticeConfig::default`].
    pub const DEFAULT_STEPS: Size = 1000;

    /// `steps` periods with the default [`DegeneratePolicy`].
    pub fn new(steps: Size) -> Self {
        Self {
            steps,
            policy: DegeneratePolicy::default(),
        }
    }

    /// Replace the degenerate-probability policy.
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the settings before a pricing call.
    pub fn validate(&self) -> Result<()> {
        require_arg!(
            self.steps >= 1,
            "number of lattice steps must be at least 1, got {}",
            self.steps
        );
        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dl_core::Error;

    #[test]
    fn defaults() {
        let c = LatticeConfig::default();
        assert_eq!(c.steps, 1000);
        assert_eq!(c.policy, DegeneratePolicy::Warn);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_steps_rejected() {
        let c = LatticeConfig::new(0).with_policy(DegeneratePolicy::Fail);
        assert_eq!(c.policy, DegeneratePolicy::Fail);
        assert!(matches!(c.validate(), Err(Error::InvalidArgument(_))));
    }
}
