//! Demo holdings set.
//!
//! A fixed eight-asset portfolio used by documentation and tests. A full
//! deployment would construct the store from an external holdings feed
//! instead.

use advisor_core::types::{AssetClass, Region};

use crate::asset::Asset;
use crate::error::PortfolioError;
use crate::store::PortfolioStore;

/// Builds the demo portfolio: a diversified moderate-profile book worth
/// about 125,750 currency units across equities, bonds, crypto and cash.
///
/// # Errors
///
/// Never fails in practice (the seed data satisfies the store
/// invariants), but the `Result` is kept so callers exercise the same
/// construction path as externally fed holdings.
///
/// # Examples
///
/// ```
/// use advisor_portfolio::demo::demo_portfolio;
///
/// let store = demo_portfolio().unwrap();
/// assert_eq!(store.assets().len(), 8);
/// assert_eq!(store.risk_profile(), "moderate");
/// ```
pub fn demo_portfolio() -> Result<PortfolioStore, PortfolioError> {
    PortfolioStore::new(
        vec![
            Asset::new(
                "AAPL",
                "Apple Inc.",
                AssetClass::Equity,
                Region::Us,
                15.0,
                18_862.58,
                185.50,
                1.8,
            ),
            Asset::new(
                "MSFT",
                "Microsoft Corp.",
                AssetClass::Equity,
                Region::Us,
                12.0,
                15_090.06,
                380.25,
                2.4,
            ),
            Asset::new(
                "GOOGL",
                "Alphabet Inc.",
                AssetClass::Equity,
                Region::Us,
                8.0,
                10_060.04,
                142.30,
                -0.8,
            ),
            Asset::new(
                "BTC",
                "Bitcoin",
                AssetClass::Crypto,
                Region::Global,
                5.0,
                6_287.53,
                45_200.00,
                12.1,
            ),
            Asset::new(
                "TLT",
                "20+ Year Treasury Bond ETF",
                AssetClass::FixedIncome,
                Region::Us,
                15.0,
                18_862.58,
                95.40,
                -0.3,
            ),
            Asset::new(
                "VEA",
                "Developed Markets ETF",
                AssetClass::Equity,
                Region::DevelopedExUs,
                20.0,
                25_150.10,
                48.75,
                1.5,
            ),
            Asset::new(
                "VWO",
                "Emerging Markets ETF",
                AssetClass::Equity,
                Region::Emerging,
                15.0,
                18_862.58,
                42.30,
                4.2,
            ),
            Asset::new(
                "CASH",
                "Cash & Equivalents",
                AssetClass::Cash,
                Region::Us,
                10.0,
                12_575.05,
                1.0,
                0.0,
            ),
        ],
        "moderate",
    )
}
