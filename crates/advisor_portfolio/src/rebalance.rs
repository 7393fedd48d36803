//! Rebalance planning.
//!
//! Diffs a current class allocation against a target and emits the
//! actionable moves. The planner works purely in allocation percentages:
//! it never consults prices or liquidity, and translating percentage
//! deltas into trade sizes belongs to a downstream execution collaborator.

use std::collections::BTreeMap;

use advisor_core::types::AssetClass;

/// Actionability threshold in percentage points.
///
/// Differences with absolute value at or below this bound are noise and
/// are omitted from the action list. The comparison is strict: a class
/// exactly 1.0 point away is not actioned.
pub const ACTION_THRESHOLD: f64 = 1.0;

/// Direction of a rebalancing action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The class is under target; buy into it.
    Increase,
    /// The class is over target; sell out of it.
    Decrease,
}

/// A single actionable allocation move.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RebalanceAction {
    /// Asset class to adjust.
    pub class: AssetClass,
    /// Whether to increase or decrease the class.
    pub direction: Direction,
    /// Current allocation percentage.
    pub current_allocation: f64,
    /// Target allocation percentage.
    pub target_allocation: f64,
    /// Raw difference `target - current` in percentage points.
    pub difference: f64,
}

/// The planner's output: actions plus both allocation maps for context.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use advisor_core::types::AssetClass;
/// use advisor_portfolio::rebalance::plan;
///
/// let current = BTreeMap::from([(AssetClass::Equity, 55.0), (AssetClass::Cash, 45.0)]);
/// let target = BTreeMap::from([(AssetClass::Equity, 60.0), (AssetClass::Cash, 40.0)]);
///
/// let plan = plan(&current, &target);
/// assert!(plan.rebalancing_needed);
/// assert_eq!(plan.actions.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RebalancePlan {
    /// True when at least one action cleared the threshold.
    pub rebalancing_needed: bool,
    /// Actionable moves, in class order.
    pub actions: Vec<RebalanceAction>,
    /// The current allocation the plan was computed from.
    pub current_allocation: BTreeMap<AssetClass, f64>,
    /// The target allocation the plan was computed against.
    pub target_allocation: BTreeMap<AssetClass, f64>,
}

/// Plans the moves from `current` to `target`.
///
/// For each class in `target`, the difference `target - current` is
/// computed (a class absent from `current` counts as 0). Only differences
/// strictly beyond [`ACTION_THRESHOLD`] become actions. The input maps are
/// echoed into the plan untouched.
pub fn plan(
    current: &BTreeMap<AssetClass, f64>,
    target: &BTreeMap<AssetClass, f64>,
) -> RebalancePlan {
    let mut actions = Vec::new();

    for (&class, &target_pct) in target {
        let current_pct = current.get(&class).copied().unwrap_or(0.0);
        let difference = target_pct - current_pct;

        if difference.abs() > ACTION_THRESHOLD {
            let direction = if difference > 0.0 {
                Direction::Increase
            } else {
                Direction::Decrease
            };
            actions.push(RebalanceAction {
                class,
                direction,
                current_allocation: current_pct,
                target_allocation: target_pct,
                difference,
            });
        }
    }

    RebalancePlan {
        rebalancing_needed: !actions.is_empty(),
        actions,
        current_allocation: current.clone(),
        target_allocation: target.clone(),
    }
}
