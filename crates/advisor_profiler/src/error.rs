//! Profiler errors.
//!
//! Configuration errors (malformed profile tables or question sets) fail
//! fast at load; the only runtime error is an answer set referencing a
//! question that does not exist.

use thiserror::Error;

/// Questionnaire and profile-table errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfilerError {
    /// The profile set has no profiles.
    #[error("profile set is empty")]
    EmptyProfileSet,

    /// A profile's score range has `min > max`.
    #[error("profile {name} has invalid score range [{min}, {max}]")]
    InvalidRange {
        /// Profile name.
        name: String,
        /// Range lower bound.
        min: u32,
        /// Range upper bound.
        max: u32,
    },

    /// Two profiles claim overlapping score ranges.
    #[error("score ranges of {first} and {second} overlap")]
    RangeOverlap {
        /// Profile with the lower range start.
        first: String,
        /// Profile whose range intrudes on the first.
        second: String,
    },

    /// Two adjacent profiles leave unclassifiable scores between them.
    #[error("score gap between {first} (ends at {end}) and {second} (starts at {start})")]
    RangeGap {
        /// Profile with the lower range.
        first: String,
        /// Profile with the higher range.
        second: String,
        /// Upper bound of the lower range.
        end: u32,
        /// Lower bound of the higher range.
        start: u32,
    },

    /// The configured default profile names no profile in the set.
    #[error("default profile {name} is not in the profile set")]
    UnknownDefaultProfile {
        /// The missing name.
        name: String,
    },

    /// Two questions share an id.
    #[error("duplicate question id {id}")]
    DuplicateQuestion {
        /// The duplicated id.
        id: u32,
    },

    /// An answer references a question id outside the questionnaire.
    #[error("answer references unknown question id {id}")]
    UnknownQuestion {
        /// The unknown id.
        id: u32,
    },
}
