mod policy;
mod rules;

pub use policy::SCORE_CAP;

use super::domain::{AnswerKey, RiskTier};
use super::questions::QuestionBank;
use super::record::AssessmentRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer that applies the question weights to a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {
    bank: QuestionBank,
}

impl RiskScorer {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn score(&self, record: &AssessmentRecord) -> RiskResult {
        let components = rules::score_components(&self.bank, record);
        let raw_total = rules::raw_total(&components);
        let result = policy::classify(raw_total);

        debug!(
            raw_total,
            score = result.score,
            tier = result.tier.label(),
            answered = record.answered_count(),
            "scored assessment record"
        );

        result
    }

    pub fn bank(&self) -> QuestionBank {
        self.bank
    }

    /// Per-question contributions in question order, before the cap is applied.
    pub fn breakdown(&self, record: &AssessmentRecord) -> Vec<ScoreComponent> {
        rules::score_components(&self.bank, record)
    }
}

/// Scores `record` against the standard question bank.
pub fn score(record: &AssessmentRecord) -> RiskResult {
    RiskScorer::default().score(record)
}

/// Contribution of a single answer, kept for transparent result views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub key: AnswerKey,
    pub value: String,
    pub points: u8,
    /// False when the stored value is empty or outside the option set.
    pub recognized: bool,
}

/// Score, tier and the tier's recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub score: u8,
    pub tier: RiskTier,
    pub recommendations: Vec<String>,
}

impl RiskResult {
    pub fn description(&self) -> &'static str {
        self.tier.description()
    }
}
