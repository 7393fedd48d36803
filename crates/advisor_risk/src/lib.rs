//! # Advisor Risk (L4: Application)
//!
//! Tail-risk statistics over the simulation engine: Value-at-Risk at the
//! 95% and 99% confidence levels, Expected Shortfall beyond the 95%
//! boundary, and a bounded-sample maximum-drawdown estimate.
//!
//! The analyzer runs a short-horizon, high-iteration Monte Carlo
//! internally (defaults: 10,000 runs over a 21-day month) and reduces
//! the final-value distribution to a serialisable [`RiskReport`]. Like
//! everything in the engine, it is a pure, seedable function of the
//! snapshot and its configuration.
//!
//! ## Example
//!
//! ```
//! use advisor_portfolio::demo::demo_portfolio;
//! use advisor_risk::{RiskAnalyzer, RiskAnalyzerConfig};
//! use advisor_simulation::MarketAssumptions;
//!
//! let snapshot = demo_portfolio().unwrap().snapshot();
//!
//! let config = RiskAnalyzerConfig {
//!     iterations: 2_000,
//!     seed: Some(42),
//!     ..RiskAnalyzerConfig::default()
//! };
//! let analyzer = RiskAnalyzer::new(config, MarketAssumptions::default()).unwrap();
//!
//! let report = analyzer.analyze(&snapshot);
//! assert!(report.value_at_risk.var_99 >= report.value_at_risk.var_95);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analyzer;

pub use analyzer::{RiskAnalyzer, RiskAnalyzerConfig, RiskReport, ValueAtRisk};
