//! Questionnaire scoring and classification.

use std::collections::BTreeMap;

use advisor_core::types::AssetClass;

use crate::error::ProfilerError;
use crate::profiles::{default_profiles, ProfileSet, RiskProfile};
use crate::questions::{default_questions, RiskQuestion};

/// Personalised recommendation assembled from a profile's tables.
///
/// Deterministic for a given profile: the content is the profile's own
/// configuration, copied out for the caller.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Recommendation {
    /// Recommended target allocation by asset class (percentages).
    pub target_allocation: BTreeMap<AssetClass, f64>,
    /// Strategy guidance.
    pub strategy_notes: Vec<String>,
    /// Recommended rebalancing cadence.
    pub rebalance_cadence: String,
    /// Key considerations to monitor.
    pub considerations: Vec<String>,
}

/// Scores answer sets and classifies them into risk profiles.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use advisor_profiler::RiskProfiler;
///
/// let profiler = RiskProfiler::with_defaults().unwrap();
///
/// // All-maximum answers land in the Aggressive profile.
/// let answers: BTreeMap<u32, String> =
///     (1..=6).map(|id| (id, "4".to_string())).collect();
///
/// let score = profiler.score(&answers).unwrap();
/// let profile = profiler.classify(score);
/// assert_eq!(profile.name, "Aggressive");
///
/// let recommendation = profiler.recommend(profile);
/// assert!(!recommendation.strategy_notes.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RiskProfiler {
    questions: Vec<RiskQuestion>,
    profiles: ProfileSet,
}

impl RiskProfiler {
    /// Creates a profiler from a question set and a validated profile set.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilerError::DuplicateQuestion`] when two questions
    /// share an id.
    pub fn new(
        questions: Vec<RiskQuestion>,
        profiles: ProfileSet,
    ) -> Result<Self, ProfilerError> {
        let mut seen = std::collections::BTreeSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(ProfilerError::DuplicateQuestion { id: question.id });
            }
        }
        Ok(Self {
            questions,
            profiles,
        })
    }

    /// Creates a profiler with the default questionnaire and profile
    /// table.
    ///
    /// # Errors
    ///
    /// Propagates profile-table validation errors (the shipped defaults
    /// always pass).
    pub fn with_defaults() -> Result<Self, ProfilerError> {
        Self::new(default_questions(), default_profiles()?)
    }

    /// The configured questions.
    #[inline]
    pub fn questions(&self) -> &[RiskQuestion] {
        &self.questions
    }

    /// The configured profile set.
    #[inline]
    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// Scores an answer set.
    ///
    /// Scoring is deliberately non-strict: a question missing from the
    /// answer set, or an answer value matching none of a question's
    /// options, contributes 0. An answer keyed by an id that no question
    /// has is different: that is corrupted input and is rejected before
    /// any scoring happens.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilerError::UnknownQuestion`] for an answer id
    /// outside the questionnaire.
    pub fn score(&self, answers: &BTreeMap<u32, String>) -> Result<u32, ProfilerError> {
        for &id in answers.keys() {
            if !self.questions.iter().any(|q| q.id == id) {
                return Err(ProfilerError::UnknownQuestion { id });
            }
        }

        let total = self
            .questions
            .iter()
            .filter_map(|question| {
                answers
                    .get(&question.id)
                    .and_then(|value| question.score_for(value))
            })
            .sum();

        Ok(total)
    }

    /// Classifies a score into a risk profile.
    ///
    /// Scores outside every configured range resolve to the profile
    /// set's explicit default; this never fails.
    #[inline]
    pub fn classify(&self, score: u32) -> &RiskProfile {
        self.profiles.profile_for(score)
    }

    /// Assembles the recommendation for a profile.
    pub fn recommend(&self, profile: &RiskProfile) -> Recommendation {
        Recommendation {
            target_allocation: profile.target_allocation.clone(),
            strategy_notes: profile.strategy_notes.clone(),
            rebalance_cadence: profile.rebalance_cadence.clone(),
            considerations: profile.considerations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(entries: &[(u32, &str)]) -> BTreeMap<u32, String> {
        entries
            .iter()
            .map(|&(id, v)| (id, v.to_string()))
            .collect()
    }

    #[test]
    fn test_score_sums_option_weights() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        let score = profiler
            .score(&answers(&[
                (1, "3"),
                (2, "3"),
                (3, "3"),
                (4, "3"),
                (5, "2"),
                (6, "3"),
            ]))
            .unwrap();
        assert_eq!(score, 17);
    }

    #[test]
    fn test_score_missing_question_contributes_zero() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        let score = profiler.score(&answers(&[(1, "4"), (2, "4")])).unwrap();
        assert_eq!(score, 8);
    }

    #[test]
    fn test_score_unmatched_value_contributes_zero() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        let score = profiler
            .score(&answers(&[(1, "not-an-option"), (2, "4")]))
            .unwrap();
        assert_eq!(score, 4);
    }

    #[test]
    fn test_score_unknown_question_id_rejected() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        let result = profiler.score(&answers(&[(1, "4"), (42, "1")]));
        assert_eq!(
            result.unwrap_err(),
            ProfilerError::UnknownQuestion { id: 42 }
        );
    }

    #[test]
    fn test_score_empty_answers_is_zero() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        assert_eq!(profiler.score(&BTreeMap::new()).unwrap(), 0);
    }

    #[test]
    fn test_classify_boundaries() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        assert_eq!(profiler.classify(6).name, "Conservative");
        assert_eq!(profiler.classify(13).name, "Moderate");
        assert_eq!(profiler.classify(18).name, "Moderate");
        assert_eq!(profiler.classify(24).name, "Aggressive");
    }

    #[test]
    fn test_classify_out_of_range_falls_back_to_default() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        assert_eq!(profiler.classify(0).name, "Moderate");
        assert_eq!(profiler.classify(100).name, "Moderate");
    }

    #[test]
    fn test_recommend_copies_profile_tables() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        let profile = profiler.classify(20);
        let recommendation = profiler.recommend(profile);

        assert_eq!(recommendation.target_allocation, profile.target_allocation);
        assert_eq!(recommendation.rebalance_cadence, "Annually - let winners run");
        assert_eq!(recommendation.strategy_notes.len(), 4);
        assert_eq!(recommendation.considerations.len(), 4);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        let profile = profiler.classify(10);
        assert_eq!(profiler.recommend(profile), profiler.recommend(profile));
    }

    #[test]
    fn test_duplicate_question_ids_rejected() {
        let mut questions = crate::questions::default_questions();
        questions[1].id = 1;
        let result = RiskProfiler::new(questions, crate::profiles::default_profiles().unwrap());
        assert_eq!(
            result.unwrap_err(),
            ProfilerError::DuplicateQuestion { id: 1 }
        );
    }

    #[test]
    fn test_recommendation_serialises() {
        let profiler = RiskProfiler::with_defaults().unwrap();
        let recommendation = profiler.recommend(profiler.classify(15));
        let json = serde_json::to_string(&recommendation).unwrap();
        assert!(json.contains("\"target_allocation\""));
        assert!(json.contains("\"equity\":60.0"));
    }
}
