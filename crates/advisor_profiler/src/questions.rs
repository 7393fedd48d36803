//! Risk assessment questionnaire.
//!
//! Questions are immutable configuration defined once at load. Each
//! option pairs a selectable value with a label and the weight it
//! contributes to the risk score.

/// A selectable answer option.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct QuestionOption {
    /// The value a caller submits to select this option.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Weight added to the risk score when selected.
    pub score: u32,
}

impl QuestionOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>, score: u32) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            score,
        }
    }
}

/// A questionnaire entry: id, text, and its ordered options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RiskQuestion {
    /// Stable question identifier, referenced by answer sets.
    pub id: u32,
    /// Question text.
    pub text: String,
    /// Selectable options, in display order.
    pub options: Vec<QuestionOption>,
}

impl RiskQuestion {
    /// Creates a question.
    pub fn new(id: u32, text: impl Into<String>, options: Vec<QuestionOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
        }
    }

    /// Looks up the score for a submitted option value, if it matches one
    /// of this question's options.
    pub fn score_for(&self, value: &str) -> Option<u32> {
        self.options.iter().find(|o| o.value == value).map(|o| o.score)
    }
}

/// The default six-question risk assessment.
///
/// Each question scores 1–4, so totals span 6–24 and line up with the
/// ranges in [`default_profiles`](crate::profiles::default_profiles).
pub fn default_questions() -> Vec<RiskQuestion> {
    vec![
        RiskQuestion::new(
            1,
            "What is your investment time horizon?",
            vec![
                QuestionOption::new("1", "Less than 2 years", 1),
                QuestionOption::new("2", "2-5 years", 2),
                QuestionOption::new("3", "5-10 years", 3),
                QuestionOption::new("4", "More than 10 years", 4),
            ],
        ),
        RiskQuestion::new(
            2,
            "How would you react to a 20% portfolio decline?",
            vec![
                QuestionOption::new("1", "Sell everything immediately", 1),
                QuestionOption::new("2", "Sell some positions", 2),
                QuestionOption::new("3", "Hold and wait for recovery", 3),
                QuestionOption::new("4", "Buy more at lower prices", 4),
            ],
        ),
        RiskQuestion::new(
            3,
            "What percentage of your total wealth are you investing?",
            vec![
                QuestionOption::new("1", "More than 75%", 1),
                QuestionOption::new("2", "50-75%", 2),
                QuestionOption::new("3", "25-50%", 3),
                QuestionOption::new("4", "Less than 25%", 4),
            ],
        ),
        RiskQuestion::new(
            4,
            "What is your primary investment goal?",
            vec![
                QuestionOption::new("1", "Capital preservation", 1),
                QuestionOption::new("2", "Income generation", 2),
                QuestionOption::new("3", "Balanced growth", 3),
                QuestionOption::new("4", "Maximum growth", 4),
            ],
        ),
        RiskQuestion::new(
            5,
            "How familiar are you with investing?",
            vec![
                QuestionOption::new("1", "Complete beginner", 1),
                QuestionOption::new("2", "Some knowledge", 2),
                QuestionOption::new("3", "Experienced investor", 3),
                QuestionOption::new("4", "Professional/Expert", 4),
            ],
        ),
        RiskQuestion::new(
            6,
            "Which statement best describes your income?",
            vec![
                QuestionOption::new("1", "Unstable, need access to funds", 1),
                QuestionOption::new("2", "Stable, but limited savings", 2),
                QuestionOption::new("3", "Stable with good savings", 3),
                QuestionOption::new("4", "High income with substantial savings", 4),
            ],
        ),
    ]
}
