//! # Advisor Profiler (L2: Holdings)
//!
//! Converts a fixed questionnaire into a risk tolerance classification and
//! a recommended target allocation.
//!
//! One linear pass: intake of the answer set → scoring → classification →
//! recommendation. No state persists between calls; the profiler is a
//! pure function of its configured tables and the answers.
//!
//! The profile table is configuration, not code: every profile carries its
//! own score range, target allocation, characteristics and recommendation
//! content, and the set is validated at load time (no gaps, no overlaps,
//! explicit default).
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use advisor_profiler::RiskProfiler;
//!
//! let profiler = RiskProfiler::with_defaults().unwrap();
//!
//! let answers: BTreeMap<u32, String> = [
//!     (1, "3"), (2, "3"), (3, "3"), (4, "3"), (5, "2"), (6, "3"),
//! ]
//! .into_iter()
//! .map(|(id, v)| (id, v.to_string()))
//! .collect();
//!
//! let score = profiler.score(&answers).unwrap();
//! assert_eq!(score, 17);
//! assert_eq!(profiler.classify(score).name, "Moderate");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod profiler;
pub mod profiles;
pub mod questions;

pub use error::ProfilerError;
pub use profiler::{Recommendation, RiskProfiler};
pub use profiles::{default_profiles, ProfileSet, RiskProfile, ScoreRange};
pub use questions::{default_questions, QuestionOption, RiskQuestion};
