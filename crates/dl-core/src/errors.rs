//! Error types for divlattice.
//!
//! A single `thiserror`-derived enum covers every failure the pricer can
//! report. Argument checks go through the [`require_arg!`](crate::require_arg)
//! macro.

use thiserror::Error;

/// The top-level error type used throughout divlattice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument supplied by the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The risk-neutral up-probability of the lattice fell outside `[0, 1]`.
    ///
    /// Results computed from such a lattice have no probabilistic meaning.
    #[error("degenerate lattice: up-probability {probability} outside [0, 1] (up {up}, down {down}, {steps} steps)")]
    DegenerateModel {
        /// The computed up-probability.
        probability: f64,
        /// Up multiplier per step.
        up: f64,
        /// Down multiplier per step.
        down: f64,
        /// Number of lattice steps.
        steps: usize,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },
}

/// Shorthand `Result` type used throughout divlattice.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// Used for every check on caller-supplied inputs.
///
/// # Example
/// ```
/// use dl_core::{require_arg, errors::Error};
/// fn strike(k: f64) -> dl_core::errors::Result<f64> {
///     require_arg!(k > 0.0, "strike must be positive, got {k}");
///     Ok(k)
/// }
/// assert!(strike(100.0).is_ok());
/// assert!(matches!(strike(0.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! require_arg {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(x: f64) -> Result<f64> {
        require_arg!(x.is_finite(), "x must be finite, got {x}");
        Ok(x)
    }

    #[test]
    fn require_arg_maps_to_invalid_argument() {
        assert_eq!(checked(1.0), Ok(1.0));
        assert_eq!(
            checked(f64::NAN),
            Err(Error::InvalidArgument("x must be finite, got NaN".into()))
        );
        assert_eq!(
            checked(f64::INFINITY).unwrap_err().to_string(),
            "invalid argument: x must be finite, got inf"
        );
    }

    #[test]
    fn degenerate_model_message() {
        let e = Error::DegenerateModel {
            probability: 1.5,
            up: 1.01,
            down: 0.99,
            steps: 10,
        };
        let msg = e.to_string();
        assert!(msg.contains("1.5"), "{msg}");
        assert!(msg.contains("10 steps"), "{msg}");
    }

    #[test]
    fn index_out_of_range_message() {
        let e = Error::IndexOutOfRange { index: 7, size: 3 };
        assert_eq!(e.to_string(), "index (7) out of range [0, 3)");
    }
}
