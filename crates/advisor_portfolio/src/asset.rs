//! Portfolio holding.

use advisor_core::types::{AssetClass, Region};

/// A single portfolio holding.
///
/// `allocation` is the percentage of total portfolio value attributed to
/// this holding (0–100); `value` is the same share in currency units.
/// Consistency between the two is enforced by
/// [`PortfolioStore::new`](crate::store::PortfolioStore::new), not here;
/// an `Asset` on its own is plain data.
///
/// # Examples
///
/// ```
/// use advisor_core::types::{AssetClass, Region};
/// use advisor_portfolio::Asset;
///
/// let asset = Asset::new(
///     "AAPL",
///     "Apple Inc.",
///     AssetClass::Equity,
///     Region::Us,
///     15.0,
///     18_862.58,
///     185.50,
///     1.8,
/// );
/// assert_eq!(asset.class, AssetClass::Equity);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Asset {
    /// Ticker or other unique identifier.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Asset class.
    pub class: AssetClass,
    /// Geographic region.
    pub region: Region,
    /// Percentage of total portfolio value (0–100).
    pub allocation: f64,
    /// Market value in currency units.
    pub value: f64,
    /// Unit price in currency units.
    pub price: f64,
    /// Percentage price change over the measurement period.
    pub change_percent: f64,
}

impl Asset {
    /// Creates a new holding.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        class: AssetClass,
        region: Region,
        allocation: f64,
        value: f64,
        price: f64,
        change_percent: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            class,
            region,
            allocation,
            value,
            price,
            change_percent,
        }
    }
}
