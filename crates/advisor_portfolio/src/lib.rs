//! # Advisor Portfolio (L2: Holdings)
//!
//! The portfolio store: the single owner of a client's holdings and the
//! source of every derived allocation and performance figure.
//!
//! This crate provides:
//! - [`Asset`] and [`PortfolioStore`] with fail-fast construction
//! - Allocation breakdowns by asset class and region (all keys always
//!   present)
//! - Portfolio metrics (weighted return, annualised volatility, Sharpe)
//! - Rebalance planning against a target allocation, and the explicit
//!   apply step that replaces the allocation set atomically
//! - [`PortfolioSnapshot`]: the serialisable view handed to every
//!   collaborator (simulation, risk, display layers)
//!
//! Collaborators never hold references into the store; [`snapshot()`]
//! returns an owned value copy.
//!
//! [`snapshot()`]: PortfolioStore::snapshot
//!
//! ## Example
//!
//! ```
//! use advisor_portfolio::demo::demo_portfolio;
//!
//! let store = demo_portfolio().unwrap();
//! let by_class = store.allocation_by_class();
//!
//! let total: f64 = by_class.values().sum();
//! assert!((total - 100.0).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod asset;
pub mod demo;
pub mod error;
pub mod rebalance;
pub mod store;

pub use asset::Asset;
pub use error::PortfolioError;
pub use rebalance::{Direction, RebalanceAction, RebalancePlan, ACTION_THRESHOLD};
pub use store::{PortfolioMetrics, PortfolioSnapshot, PortfolioStore, DEFAULT_RISK_FREE_RATE};
