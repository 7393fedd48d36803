//! Portfolio store errors.
//!
//! Two families share the enum: configuration errors raised at
//! construction (malformed holdings are rejected, never silently
//! renormalised) and input-validation errors raised when a caller-supplied
//! target allocation is unusable.

use advisor_core::types::AssetClass;
use thiserror::Error;

/// Portfolio construction and target-allocation errors.
///
/// # Examples
///
/// ```
/// use advisor_portfolio::PortfolioError;
///
/// let err = PortfolioError::AllocationSum { sum: 97.5 };
/// assert!(format!("{}", err).contains("97.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// The portfolio has no holdings.
    #[error("portfolio has no holdings")]
    Empty,

    /// Holding allocations do not sum to 100.
    #[error("holding allocations sum to {sum}, expected 100")]
    AllocationSum {
        /// The observed allocation sum.
        sum: f64,
    },

    /// A holding's allocation is outside [0, 100].
    #[error("allocation {value} for {symbol} is outside [0, 100]")]
    AllocationOutOfRange {
        /// Holding identifier.
        symbol: String,
        /// The offending allocation percentage.
        value: f64,
    },

    /// A holding's market value is inconsistent with its allocation share
    /// of total value.
    #[error("value {actual} for {symbol} is inconsistent with its allocation (expected {expected})")]
    ValueMismatch {
        /// Holding identifier.
        symbol: String,
        /// Value implied by `allocation * total / 100`.
        expected: f64,
        /// Value supplied.
        actual: f64,
    },

    /// A target allocation entry is outside [0, 100].
    #[error("target allocation {value} for {class} is outside [0, 100]")]
    TargetOutOfRange {
        /// Asset class of the offending entry.
        class: AssetClass,
        /// The offending target percentage.
        value: f64,
    },

    /// Target allocations do not sum to 100 (required by the apply step).
    #[error("target allocations sum to {sum}, expected 100")]
    TargetSum {
        /// The observed target sum.
        sum: f64,
    },

    /// A positive target was given for a class with no holdings; the store
    /// cannot invent positions, so the target cannot be applied.
    #[error("target allocates to {class} but the portfolio holds nothing in that class")]
    UnallocatableClass {
        /// The class with no holdings.
        class: AssetClass,
    },
}
