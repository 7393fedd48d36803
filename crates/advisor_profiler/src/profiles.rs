//! Risk profile definitions.
//!
//! A [`RiskProfile`] is pure configuration: its score range, target
//! allocation, characteristics and recommendation content all live on the
//! profile itself, never in code branches. [`ProfileSet`] owns the
//! profiles plus an explicit default and asserts completeness at load:
//! the score axis must be partitioned with no gaps and no overlaps.

use std::collections::BTreeMap;

use advisor_core::types::AssetClass;

use crate::error::ProfilerError;

/// Inclusive score range defining profile membership.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ScoreRange {
    /// Lowest score in the profile (inclusive).
    pub min: u32,
    /// Highest score in the profile (inclusive).
    pub max: u32,
}

impl ScoreRange {
    /// Creates a range.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns whether `score` falls inside the range.
    #[inline]
    pub fn contains(&self, score: u32) -> bool {
        self.min <= score && score <= self.max
    }
}

/// A risk tolerance classification with its recommendation tables.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RiskProfile {
    /// Profile name, also the key for default-profile selection.
    pub name: String,
    /// Inclusive score range defining membership.
    pub score_range: ScoreRange,
    /// One-line description.
    pub description: String,
    /// Recommended target allocation by asset class (percentages).
    pub target_allocation: BTreeMap<AssetClass, f64>,
    /// Qualitative characteristics of investors in this profile.
    pub characteristics: Vec<String>,
    /// Strategy guidance for the profile.
    pub strategy_notes: Vec<String>,
    /// Recommended rebalancing cadence.
    pub rebalance_cadence: String,
    /// Key considerations to monitor.
    pub considerations: Vec<String>,
}

/// A validated, gap-free set of risk profiles with an explicit default.
///
/// # Examples
///
/// ```
/// use advisor_profiler::default_profiles;
///
/// let profiles = default_profiles().unwrap();
/// assert_eq!(profiles.profile_for(15).name, "Moderate");
/// // Out-of-range scores resolve to the configured default, never panic.
/// assert_eq!(profiles.profile_for(99).name, "Moderate");
/// ```
#[derive(Clone, Debug)]
pub struct ProfileSet {
    profiles: Vec<RiskProfile>,
    default_index: usize,
}

impl ProfileSet {
    /// Builds a profile set, validating completeness.
    ///
    /// Profiles are sorted by range start. Validation rejects empty sets,
    /// inverted ranges, overlapping ranges, gapped ranges, and a default
    /// name that matches no profile.
    ///
    /// # Errors
    ///
    /// See [`ProfilerError`] configuration variants.
    pub fn new(
        mut profiles: Vec<RiskProfile>,
        default_name: &str,
    ) -> Result<Self, ProfilerError> {
        if profiles.is_empty() {
            return Err(ProfilerError::EmptyProfileSet);
        }

        for profile in &profiles {
            if profile.score_range.min > profile.score_range.max {
                return Err(ProfilerError::InvalidRange {
                    name: profile.name.clone(),
                    min: profile.score_range.min,
                    max: profile.score_range.max,
                });
            }
        }

        profiles.sort_by_key(|p| p.score_range.min);

        for pair in profiles.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.score_range.min <= lower.score_range.max {
                return Err(ProfilerError::RangeOverlap {
                    first: lower.name.clone(),
                    second: upper.name.clone(),
                });
            }
            if upper.score_range.min > lower.score_range.max + 1 {
                return Err(ProfilerError::RangeGap {
                    first: lower.name.clone(),
                    second: upper.name.clone(),
                    end: lower.score_range.max,
                    start: upper.score_range.min,
                });
            }
        }

        let default_index = profiles
            .iter()
            .position(|p| p.name == default_name)
            .ok_or_else(|| ProfilerError::UnknownDefaultProfile {
                name: default_name.to_string(),
            })?;

        Ok(Self {
            profiles,
            default_index,
        })
    }

    /// The profiles, sorted by range start.
    #[inline]
    pub fn profiles(&self) -> &[RiskProfile] {
        &self.profiles
    }

    /// The configured default profile.
    #[inline]
    pub fn default_profile(&self) -> &RiskProfile {
        &self.profiles[self.default_index]
    }

    /// Returns the profile whose range contains `score`, or the default
    /// profile when the score falls outside the covered span.
    pub fn profile_for(&self, score: u32) -> &RiskProfile {
        self.profiles
            .iter()
            .find(|p| p.score_range.contains(score))
            .unwrap_or_else(|| self.default_profile())
    }
}

/// The default three-profile table.
///
/// Conservative (6–12), Moderate (13–18, the default) and Aggressive
/// (19–24), matching the 6–24 span of the default questionnaire.
pub fn default_profiles() -> Result<ProfileSet, ProfilerError> {
    let conservative = RiskProfile {
        name: "Conservative".to_string(),
        score_range: ScoreRange::new(6, 12),
        description: "Focus on capital preservation with minimal volatility".to_string(),
        target_allocation: allocation(&[
            (AssetClass::Equity, 30.0),
            (AssetClass::FixedIncome, 60.0),
            (AssetClass::Crypto, 0.0),
            (AssetClass::Cash, 10.0),
        ]),
        characteristics: strings(&[
            "Low risk tolerance",
            "Capital preservation focused",
            "Stable income preference",
            "Short to medium time horizon",
        ]),
        strategy_notes: strings(&[
            "Focus on high-grade bonds and dividend-paying stocks",
            "Maintain significant cash reserves for stability",
            "Avoid volatile assets like crypto and growth stocks",
            "Consider Treasury Inflation-Protected Securities (TIPS)",
        ]),
        rebalance_cadence: "Quarterly - to maintain stability".to_string(),
        considerations: strings(&[
            "Monitor interest rate changes affecting bond values",
            "Ensure adequate emergency fund outside investments",
            "Consider inflation impact on fixed-income investments",
            "Review allocation if time horizon changes",
        ]),
    };

    let moderate = RiskProfile {
        name: "Moderate".to_string(),
        score_range: ScoreRange::new(13, 18),
        description: "Balanced approach seeking steady growth with moderate risk".to_string(),
        target_allocation: allocation(&[
            (AssetClass::Equity, 60.0),
            (AssetClass::FixedIncome, 30.0),
            (AssetClass::Crypto, 5.0),
            (AssetClass::Cash, 5.0),
        ]),
        characteristics: strings(&[
            "Moderate risk tolerance",
            "Balanced growth objective",
            "Medium to long time horizon",
            "Diversified approach",
        ]),
        strategy_notes: strings(&[
            "Diversify across asset classes and geographies",
            "Include both growth and value stocks",
            "Maintain moderate bond allocation for stability",
            "Small crypto allocation for growth potential",
        ]),
        rebalance_cadence: "Semi-annually - balanced approach".to_string(),
        considerations: strings(&[
            "Regularly review and rebalance portfolio",
            "Stay disciplined during market volatility",
            "Consider tax-efficient investment vehicles",
            "Monitor correlation between asset classes",
        ]),
    };

    let aggressive = RiskProfile {
        name: "Aggressive".to_string(),
        score_range: ScoreRange::new(19, 24),
        description: "Growth-focused with higher risk tolerance for maximum returns".to_string(),
        target_allocation: allocation(&[
            (AssetClass::Equity, 80.0),
            (AssetClass::FixedIncome, 10.0),
            (AssetClass::Crypto, 8.0),
            (AssetClass::Cash, 2.0),
        ]),
        characteristics: strings(&[
            "High risk tolerance",
            "Growth maximization focus",
            "Long time horizon",
            "Comfortable with volatility",
        ]),
        strategy_notes: strings(&[
            "Emphasize growth stocks and emerging markets",
            "Higher allocation to technology and innovation sectors",
            "Include alternative investments like crypto",
            "Minimize cash and low-yield bonds",
        ]),
        rebalance_cadence: "Annually - let winners run".to_string(),
        considerations: strings(&[
            "Be prepared for significant short-term volatility",
            "Don't panic during market downturns",
            "Consider dollar-cost averaging for new investments",
            "Monitor concentration risk in growth sectors",
        ]),
    };

    ProfileSet::new(vec![conservative, moderate, aggressive], "Moderate")
}

fn allocation(entries: &[(AssetClass, f64)]) -> BTreeMap<AssetClass, f64> {
    entries.iter().copied().collect()
}

fn strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}
