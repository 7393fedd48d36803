//! Portfolio store: holdings ownership, derived figures, and the
//! rebalance lifecycle.
//!
//! The store is the exclusive owner of the portfolio. Collaborators see it
//! only through [`PortfolioStore::snapshot`], an owned value copy rather
//! than a reference, so no concurrent-mutation hazard can reach the
//! simulation or risk layers.
//!
//! Construction is fail-fast: holdings whose allocations do not sum to
//! 100, or whose values contradict their allocations, are rejected rather
//! than silently renormalised.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use advisor_core::stats;
use advisor_core::types::{AssetClass, Region};

use crate::asset::Asset;
use crate::error::PortfolioError;
use crate::rebalance::{self, RebalancePlan};

/// Tolerance on the allocation sum, in percentage points.
pub const ALLOCATION_TOLERANCE: f64 = 1e-6;

/// Relative tolerance on per-holding value consistency, as a fraction of
/// total portfolio value. Loose enough to absorb currency rounding.
const VALUE_TOLERANCE: f64 = 1e-5;

/// Default annual risk-free rate, in the same percentage units as
/// holding returns.
pub const DEFAULT_RISK_FREE_RATE: f64 = 3.0;

/// Business days per year, used to annualise the volatility of the
/// per-period change series.
const TRADING_DAYS: f64 = 252.0;

/// Derived portfolio performance figures.
///
/// Pure function of the holdings: recomputing without mutation yields the
/// identical struct.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PortfolioMetrics {
    /// Allocation-weighted sum of per-holding percentage changes.
    pub portfolio_return: f64,
    /// Population standard deviation of the change series, annualised
    /// by √252.
    pub portfolio_volatility: f64,
    /// `(return × 252 − risk_free_rate) / volatility`, or 0 when
    /// volatility is 0 (explicit degeneracy fallback, no division fault).
    pub sharpe_ratio: f64,
    /// Total portfolio value in currency units.
    pub total_value: f64,
    /// Number of holdings.
    pub asset_count: usize,
}

/// Serialisable portfolio view: the sole data contract exposed to
/// collaborators.
///
/// Holds owned copies of everything: handing a snapshot to a simulator
/// or formatter shares no state with the store.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PortfolioSnapshot {
    /// Total portfolio value in currency units.
    pub total_value: f64,
    /// The holdings, in display order.
    pub assets: Vec<Asset>,
    /// Risk-profile label attached to the portfolio.
    pub risk_profile: String,
    /// When the holdings were last replaced.
    pub last_updated: DateTime<Utc>,
    /// Derived performance figures.
    pub metrics: PortfolioMetrics,
    /// Allocation percentages by asset class; every class key present.
    pub allocation_by_class: BTreeMap<AssetClass, f64>,
    /// Allocation percentages by region; every region key present.
    pub allocation_by_region: BTreeMap<Region, f64>,
}

/// Exclusive owner of a portfolio and its holdings.
///
/// # Lifecycle
///
/// Constructed once from a holdings set (validated fail-fast), then
/// mutated only through [`apply_target`](Self::apply_target), which
/// replaces the full allocation set atomically. There is no ambient
/// shared instance: every store is an explicitly constructed value.
///
/// # Examples
///
/// ```
/// use advisor_core::types::{AssetClass, Region};
/// use advisor_portfolio::{Asset, PortfolioStore};
///
/// let store = PortfolioStore::new(
///     vec![
///         Asset::new("SPY", "S&P 500 ETF", AssetClass::Equity, Region::Us,
///                    60.0, 600.0, 430.0, 1.0),
///         Asset::new("TLT", "Treasury ETF", AssetClass::FixedIncome, Region::Us,
///                    30.0, 300.0, 95.4, -0.3),
///         Asset::new("CASH", "Cash", AssetClass::Cash, Region::Us,
///                    10.0, 100.0, 1.0, 0.0),
///     ],
///     "moderate",
/// )
/// .unwrap();
///
/// let metrics = store.metrics();
/// assert!((metrics.portfolio_return - 0.51).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct PortfolioStore {
    total_value: f64,
    assets: Vec<Asset>,
    risk_profile: String,
    last_updated: DateTime<Utc>,
    risk_free_rate: f64,
}

impl PortfolioStore {
    /// Creates a store from a holdings set, validating invariants.
    ///
    /// # Errors
    ///
    /// - [`PortfolioError::Empty`] for an empty holdings list
    /// - [`PortfolioError::AllocationOutOfRange`] for an allocation
    ///   outside [0, 100]
    /// - [`PortfolioError::AllocationSum`] when allocations do not sum to
    ///   100 ± 1e-6
    /// - [`PortfolioError::ValueMismatch`] when a holding's value
    ///   contradicts `allocation × total / 100`
    pub fn new(
        assets: Vec<Asset>,
        risk_profile: impl Into<String>,
    ) -> Result<Self, PortfolioError> {
        if assets.is_empty() {
            return Err(PortfolioError::Empty);
        }

        for asset in &assets {
            if !(0.0..=100.0).contains(&asset.allocation) {
                return Err(PortfolioError::AllocationOutOfRange {
                    symbol: asset.symbol.clone(),
                    value: asset.allocation,
                });
            }
        }

        let sum: f64 = assets.iter().map(|a| a.allocation).sum();
        if (sum - 100.0).abs() > ALLOCATION_TOLERANCE {
            return Err(PortfolioError::AllocationSum { sum });
        }

        let total_value: f64 = assets.iter().map(|a| a.value).sum();
        for asset in &assets {
            let expected = asset.allocation * total_value / 100.0;
            if (asset.value - expected).abs() > total_value * VALUE_TOLERANCE {
                return Err(PortfolioError::ValueMismatch {
                    symbol: asset.symbol.clone(),
                    expected,
                    actual: asset.value,
                });
            }
        }

        Ok(Self {
            total_value,
            assets,
            risk_profile: risk_profile.into(),
            last_updated: Utc::now(),
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        })
    }

    /// Overrides the configured risk-free rate (percentage units,
    /// default 3.0).
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Returns the total portfolio value.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Returns the holdings.
    #[inline]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Returns the risk-profile label.
    #[inline]
    pub fn risk_profile(&self) -> &str {
        &self.risk_profile
    }

    /// Returns when the holdings were last replaced.
    #[inline]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Allocation percentages grouped by asset class.
    ///
    /// Every class key is present; classes with no holdings report 0.
    /// Over a valid store the values sum to 100 ± 1e-6.
    pub fn allocation_by_class(&self) -> BTreeMap<AssetClass, f64> {
        let mut allocation: BTreeMap<AssetClass, f64> =
            AssetClass::ALL.iter().map(|&c| (c, 0.0)).collect();
        for asset in &self.assets {
            if let Some(entry) = allocation.get_mut(&asset.class) {
                *entry += asset.allocation;
            }
        }
        allocation
    }

    /// Allocation percentages grouped by region.
    ///
    /// All four region keys are always present.
    pub fn allocation_by_region(&self) -> BTreeMap<Region, f64> {
        let mut allocation: BTreeMap<Region, f64> =
            Region::ALL.iter().map(|&r| (r, 0.0)).collect();
        for asset in &self.assets {
            if let Some(entry) = allocation.get_mut(&asset.region) {
                *entry += asset.allocation;
            }
        }
        allocation
    }

    /// Computes the derived performance figures.
    ///
    /// Pure function of current state: no side effects, invariant under
    /// holding reorder.
    pub fn metrics(&self) -> PortfolioMetrics {
        let changes: Vec<f64> = self.assets.iter().map(|a| a.change_percent).collect();

        let portfolio_return: f64 = self
            .assets
            .iter()
            .map(|a| (a.allocation / 100.0) * a.change_percent)
            .sum();

        let portfolio_volatility = stats::population_std_dev(&changes) * TRADING_DAYS.sqrt();

        let sharpe_ratio = if portfolio_volatility > 0.0 {
            (portfolio_return * TRADING_DAYS - self.risk_free_rate) / portfolio_volatility
        } else {
            0.0
        };

        PortfolioMetrics {
            portfolio_return,
            portfolio_volatility,
            sharpe_ratio,
            total_value: self.total_value,
            asset_count: self.assets.len(),
        }
    }

    /// Produces the serialisable view handed to collaborators.
    ///
    /// The snapshot is an owned copy; it stays valid and unchanged no
    /// matter what happens to the store afterwards.
    pub fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            total_value: self.total_value,
            assets: self.assets.clone(),
            risk_profile: self.risk_profile.clone(),
            last_updated: self.last_updated,
            metrics: self.metrics(),
            allocation_by_class: self.allocation_by_class(),
            allocation_by_region: self.allocation_by_region(),
        }
    }

    /// Plans a rebalance toward `target` without mutating anything.
    ///
    /// Mutation happens only through the separate
    /// [`apply_target`](Self::apply_target) step, so a confirmation gate
    /// can sit between planning and execution.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::TargetOutOfRange`] when a target entry is
    /// outside [0, 100].
    pub fn plan_rebalance(
        &self,
        target: &BTreeMap<AssetClass, f64>,
    ) -> Result<RebalancePlan, PortfolioError> {
        validate_target_range(target)?;
        Ok(rebalance::plan(&self.allocation_by_class(), target))
    }

    /// Applies a class-level target allocation: the explicit apply step.
    ///
    /// Each holding's allocation is scaled proportionally within its
    /// class; classes absent from `target` go to zero. Values are
    /// recomputed from the new allocations and the (unchanged) total
    /// value. The replacement is atomic: the new holdings set is built
    /// completely before being swapped in, and a failed apply leaves the
    /// store untouched.
    ///
    /// # Errors
    ///
    /// - [`PortfolioError::TargetOutOfRange`] for entries outside [0, 100]
    /// - [`PortfolioError::TargetSum`] when the target does not sum to
    ///   100 ± 1e-6
    /// - [`PortfolioError::UnallocatableClass`] for a positive target on a
    ///   class with no holdings
    pub fn apply_target(
        &mut self,
        target: &BTreeMap<AssetClass, f64>,
    ) -> Result<(), PortfolioError> {
        validate_target_range(target)?;

        let sum: f64 = target.values().sum();
        if (sum - 100.0).abs() > ALLOCATION_TOLERANCE {
            return Err(PortfolioError::TargetSum { sum });
        }

        let current = self.allocation_by_class();
        for (&class, &target_pct) in target {
            let current_pct = current.get(&class).copied().unwrap_or(0.0);
            if target_pct > 0.0 && current_pct <= 0.0 {
                return Err(PortfolioError::UnallocatableClass { class });
            }
        }

        let mut new_assets = self.assets.clone();
        for asset in &mut new_assets {
            let current_pct = current.get(&asset.class).copied().unwrap_or(0.0);
            let target_pct = target.get(&asset.class).copied().unwrap_or(0.0);
            asset.allocation = if current_pct > 0.0 {
                asset.allocation * target_pct / current_pct
            } else {
                0.0
            };
            asset.value = asset.allocation * self.total_value / 100.0;
        }

        self.assets = new_assets;
        self.last_updated = Utc::now();
        Ok(())
    }
}

fn validate_target_range(target: &BTreeMap<AssetClass, f64>) -> Result<(), PortfolioError> {
    for (&class, &value) in target {
        if !(0.0..=100.0).contains(&value) {
            return Err(PortfolioError::TargetOutOfRange { class, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn three_class_store() -> PortfolioStore {
        PortfolioStore::new(
            vec![
                Asset::new(
                    "SPY",
                    "S&P 500 ETF",
                    AssetClass::Equity,
                    Region::Us,
                    60.0,
                    600.0,
                    430.0,
                    1.0,
                ),
                Asset::new(
                    "TLT",
                    "Treasury ETF",
                    AssetClass::FixedIncome,
                    Region::Us,
                    30.0,
                    300.0,
                    95.4,
                    -0.3,
                ),
                Asset::new(
                    "CASH",
                    "Cash",
                    AssetClass::Cash,
                    Region::Us,
                    10.0,
                    100.0,
                    1.0,
                    0.0,
                ),
            ],
            "moderate",
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            PortfolioStore::new(vec![], "moderate").unwrap_err(),
            PortfolioError::Empty
        );
    }

    #[test]
    fn test_new_rejects_bad_allocation_sum() {
        let result = PortfolioStore::new(
            vec![Asset::new(
                "SPY",
                "S&P 500 ETF",
                AssetClass::Equity,
                Region::Us,
                90.0,
                900.0,
                430.0,
                1.0,
            )],
            "moderate",
        );
        assert!(matches!(
            result,
            Err(PortfolioError::AllocationSum { sum }) if (sum - 90.0).abs() < 1e-12
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range_allocation() {
        let result = PortfolioStore::new(
            vec![
                Asset::new(
                    "SPY",
                    "S&P 500 ETF",
                    AssetClass::Equity,
                    Region::Us,
                    110.0,
                    1100.0,
                    430.0,
                    1.0,
                ),
                Asset::new(
                    "X",
                    "Short",
                    AssetClass::Cash,
                    Region::Us,
                    -10.0,
                    -100.0,
                    1.0,
                    0.0,
                ),
            ],
            "moderate",
        );
        assert!(matches!(
            result,
            Err(PortfolioError::AllocationOutOfRange { .. })
        ));
    }

    #[test]
    fn test_new_rejects_inconsistent_value() {
        let result = PortfolioStore::new(
            vec![
                Asset::new(
                    "SPY",
                    "S&P 500 ETF",
                    AssetClass::Equity,
                    Region::Us,
                    50.0,
                    900.0,
                    430.0,
                    1.0,
                ),
                Asset::new(
                    "CASH",
                    "Cash",
                    AssetClass::Cash,
                    Region::Us,
                    50.0,
                    100.0,
                    1.0,
                    0.0,
                ),
            ],
            "moderate",
        );
        assert!(matches!(result, Err(PortfolioError::ValueMismatch { .. })));
    }

    #[test]
    fn test_allocation_by_class_has_all_keys() {
        let store = three_class_store();
        let by_class = store.allocation_by_class();

        assert_eq!(by_class.len(), AssetClass::ALL.len());
        assert_relative_eq!(by_class[&AssetClass::Equity], 60.0);
        assert_relative_eq!(by_class[&AssetClass::Crypto], 0.0);

        let total: f64 = by_class.values().sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_allocation_by_region_has_all_keys() {
        let store = three_class_store();
        let by_region = store.allocation_by_region();

        assert_eq!(by_region.len(), Region::ALL.len());
        assert_relative_eq!(by_region[&Region::Us], 100.0);
        assert_relative_eq!(by_region[&Region::Emerging], 0.0);
    }

    #[test]
    fn test_metrics_weighted_return() {
        // 0.6×1 + 0.3×(−0.3) + 0.1×0 = 0.51
        let metrics = three_class_store().metrics();
        assert_relative_eq!(metrics.portfolio_return, 0.51, epsilon = 1e-9);
        assert_eq!(metrics.asset_count, 3);
        assert_relative_eq!(metrics.total_value, 1000.0);
    }

    #[test]
    fn test_metrics_zero_volatility_sharpe_fallback() {
        let store = PortfolioStore::new(
            vec![
                Asset::new(
                    "A",
                    "A",
                    AssetClass::Equity,
                    Region::Us,
                    50.0,
                    500.0,
                    1.0,
                    2.0,
                ),
                Asset::new(
                    "B",
                    "B",
                    AssetClass::Cash,
                    Region::Us,
                    50.0,
                    500.0,
                    1.0,
                    2.0,
                ),
            ],
            "moderate",
        )
        .unwrap();

        let metrics = store.metrics();
        assert_eq!(metrics.portfolio_volatility, 0.0);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_snapshot_idempotent() {
        let store = three_class_store();
        let first = store.snapshot();
        let second = store.snapshot();

        assert_eq!(first.metrics, second.metrics);
        assert_eq!(first.allocation_by_class, second.allocation_by_class);
        assert_eq!(first.allocation_by_region, second.allocation_by_region);
        assert_eq!(first.assets, second.assets);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut store = three_class_store();
        let snapshot = store.snapshot();

        let target: BTreeMap<AssetClass, f64> = [
            (AssetClass::Equity, 40.0),
            (AssetClass::FixedIncome, 40.0),
            (AssetClass::Cash, 20.0),
        ]
        .into_iter()
        .collect();
        store.apply_target(&target).unwrap();

        // The snapshot still reflects the pre-apply allocations.
        assert_relative_eq!(snapshot.allocation_by_class[&AssetClass::Equity], 60.0);
        assert_relative_eq!(store.allocation_by_class()[&AssetClass::Equity], 40.0);
    }

    #[test]
    fn test_plan_rebalance_rejects_out_of_range_target() {
        let store = three_class_store();
        let target: BTreeMap<AssetClass, f64> =
            [(AssetClass::Equity, 130.0)].into_iter().collect();

        assert!(matches!(
            store.plan_rebalance(&target),
            Err(PortfolioError::TargetOutOfRange { .. })
        ));
    }

    #[test]
    fn test_apply_target_scales_within_class() {
        let mut store = three_class_store();
        let target: BTreeMap<AssetClass, f64> = [
            (AssetClass::Equity, 40.0),
            (AssetClass::FixedIncome, 40.0),
            (AssetClass::Cash, 20.0),
        ]
        .into_iter()
        .collect();

        store.apply_target(&target).unwrap();

        let by_class = store.allocation_by_class();
        assert_relative_eq!(by_class[&AssetClass::Equity], 40.0, epsilon = 1e-9);
        assert_relative_eq!(by_class[&AssetClass::FixedIncome], 40.0, epsilon = 1e-9);

        // Total value is a pure reallocation: unchanged.
        assert_relative_eq!(store.total_value(), 1000.0);
        let value_sum: f64 = store.assets().iter().map(|a| a.value).sum();
        assert_relative_eq!(value_sum, 1000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_apply_target_rejects_unallocatable_class() {
        let mut store = three_class_store();
        let target: BTreeMap<AssetClass, f64> = [
            (AssetClass::Equity, 50.0),
            (AssetClass::FixedIncome, 25.0),
            (AssetClass::Crypto, 15.0),
            (AssetClass::Cash, 10.0),
        ]
        .into_iter()
        .collect();

        let before = store.allocation_by_class();
        assert!(matches!(
            store.apply_target(&target),
            Err(PortfolioError::UnallocatableClass {
                class: AssetClass::Crypto
            })
        ));
        // Failed apply leaves the store untouched.
        assert_eq!(store.allocation_by_class(), before);
    }

    #[test]
    fn test_apply_target_rejects_bad_sum() {
        let mut store = three_class_store();
        let target: BTreeMap<AssetClass, f64> =
            [(AssetClass::Equity, 50.0)].into_iter().collect();

        assert!(matches!(
            store.apply_target(&target),
            Err(PortfolioError::TargetSum { .. })
        ));
    }
}
