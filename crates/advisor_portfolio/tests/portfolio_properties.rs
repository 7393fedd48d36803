//! Property and end-to-end tests for the portfolio store.

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use proptest::prelude::*;

use advisor_core::types::{AssetClass, Region};
use advisor_portfolio::{Asset, PortfolioStore};

/// Builds a consistent portfolio from raw weights: allocations are the
/// weights normalised to 100, values follow from a fixed total.
fn build_store(entries: &[(usize, usize, f64, f64)]) -> PortfolioStore {
    const TOTAL: f64 = 100_000.0;

    let weight_sum: f64 = entries.iter().map(|e| e.3).sum();
    let assets = entries
        .iter()
        .enumerate()
        .map(|(i, &(class_idx, region_idx, change, weight))| {
            let allocation = weight / weight_sum * 100.0;
            Asset::new(
                format!("SYM{i}"),
                format!("Holding {i}"),
                AssetClass::ALL[class_idx],
                Region::ALL[region_idx],
                allocation,
                allocation * TOTAL / 100.0,
                1.0,
                change,
            )
        })
        .collect();

    PortfolioStore::new(assets, "moderate").expect("normalised holdings are valid")
}

fn entries_strategy() -> impl Strategy<Value = Vec<(usize, usize, f64, f64)>> {
    prop::collection::vec((0usize..4, 0usize..4, -15.0..15.0f64, 1.0..100.0f64), 1..12)
}

proptest! {
    #[test]
    fn breakdowns_sum_to_100(entries in entries_strategy()) {
        let store = build_store(&entries);

        let class_total: f64 = store.allocation_by_class().values().sum();
        prop_assert!((class_total - 100.0).abs() < 1e-6);

        let region_total: f64 = store.allocation_by_region().values().sum();
        prop_assert!((region_total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn metrics_invariant_under_reorder(entries in entries_strategy()) {
        let store = build_store(&entries);

        let mut reversed = entries.clone();
        reversed.reverse();
        let reordered = build_store(&reversed);

        let a = store.metrics();
        let b = reordered.metrics();

        prop_assert!((a.portfolio_return - b.portfolio_return).abs() < 1e-9);
        prop_assert!((a.portfolio_volatility - b.portfolio_volatility).abs() < 1e-9);
        // Relative bound: near-zero volatility amplifies reorder rounding
        // in the Sharpe quotient.
        prop_assert!(
            (a.sharpe_ratio - b.sharpe_ratio).abs() <= 1e-9 * (1.0 + a.sharpe_ratio.abs())
        );
        prop_assert_eq!(a.asset_count, b.asset_count);
    }
}

#[test]
fn weighted_return_matches_hand_calculation() {
    // 60% equity at +1%, 30% fixed income at −0.3%, 10% cash at 0%:
    // 0.6×1 + 0.3×(−0.3) + 0.1×0 = 0.51.
    let store = PortfolioStore::new(
        vec![
            Asset::new(
                "SPY",
                "S&P 500 ETF",
                AssetClass::Equity,
                Region::Us,
                60.0,
                60_000.0,
                430.0,
                1.0,
            ),
            Asset::new(
                "TLT",
                "Treasury ETF",
                AssetClass::FixedIncome,
                Region::Us,
                30.0,
                30_000.0,
                95.4,
                -0.3,
            ),
            Asset::new(
                "CASH",
                "Cash",
                AssetClass::Cash,
                Region::Us,
                10.0,
                10_000.0,
                1.0,
                0.0,
            ),
        ],
        "moderate",
    )
    .unwrap();

    assert_relative_eq!(store.metrics().portfolio_return, 0.51, epsilon = 1e-9);
}

#[test]
fn identical_target_produces_empty_plan() {
    let store = build_store(&[(0, 0, 1.0, 60.0), (1, 0, -0.3, 30.0), (3, 0, 0.0, 10.0)]);

    let current = store.allocation_by_class();
    let plan = store.plan_rebalance(&current).unwrap();

    assert!(!plan.rebalancing_needed);
    assert!(plan.actions.is_empty());
}

#[test]
fn one_point_difference_is_not_actionable() {
    let store = build_store(&[(0, 0, 1.0, 60.0), (1, 0, -0.3, 30.0), (3, 0, 0.0, 10.0)]);

    let mut target: BTreeMap<AssetClass, f64> = store.allocation_by_class();
    // Shift exactly one percentage point from equity to cash.
    *target.get_mut(&AssetClass::Equity).unwrap() -= 1.0;
    *target.get_mut(&AssetClass::Cash).unwrap() += 1.0;

    let plan = store.plan_rebalance(&target).unwrap();
    assert!(!plan.rebalancing_needed);
}

#[test]
fn snapshot_serialises_to_json() {
    let store = build_store(&[(0, 0, 1.0, 50.0), (3, 0, 0.0, 50.0)]);
    let snapshot = store.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"allocation_by_class\""));
    assert!(json.contains("\"equity\""));

    let back: advisor_portfolio::PortfolioSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.metrics, snapshot.metrics);
}
