//! # Advisor Core (L1: Foundation)
//!
//! Foundation types and numeric kernels shared by every layer of the
//! portfolio advisor workspace.
//!
//! This crate provides:
//! - Closed asset-class and region enumerations with stable string codes
//! - Structured error types for code parsing
//! - Generic summary-statistics kernels (mean, population standard
//!   deviation, median, interpolated percentiles, running-peak drawdown)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            advisor_risk (L4)            │
//! │  VaR, Expected Shortfall, drawdown      │
//! ├─────────────────────────────────────────┤
//! │         advisor_simulation (L3)         │
//! │  Monte Carlo engine, rate scenarios     │
//! ├─────────────────────────────────────────┤
//! │  advisor_portfolio / advisor_profiler   │
//! │  Holdings, metrics, questionnaire (L2)  │
//! ├─────────────────────────────────────────┤
//! │            advisor_core (L1)            │
//! │  types/  - AssetClass, Region, errors   │
//! │  stats/  - summary-statistics kernels   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use advisor_core::types::{AssetClass, Region};
//! use advisor_core::stats;
//!
//! let class: AssetClass = "fixed_income".parse().unwrap();
//! assert_eq!(class, AssetClass::FixedIncome);
//! assert_eq!(Region::Global.code(), "global");
//!
//! let series = [1.8_f64, 2.4, -0.8, 0.0];
//! let mu = stats::mean(&series);
//! assert!((mu - 0.85).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod stats;
pub mod types;

pub use types::{AssetClass, AssetClassError, Region, RegionError};
