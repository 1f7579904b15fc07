use super::domain::CarePathway;
use super::questions::QuestionBank;
use super::record::AssessmentRecord;
use super::scoring::{RiskResult, RiskScorer, ScoreComponent};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Typed message passed from the finished questionnaire to the results view
/// and, optionally, to the consultation booking form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentHandoff {
    pub record: AssessmentRecord,
    pub result: RiskResult,
    pub breakdown: Vec<ScoreComponent>,
    pub pathway: CarePathway,
    pub completed_at: DateTime<Utc>,
    /// Question bank the record was scored against.
    #[serde(skip)]
    bank: QuestionBank,
}

impl AssessmentHandoff {
    pub fn new(record: AssessmentRecord, scorer: &RiskScorer, completed_at: DateTime<Utc>) -> Self {
        let result = scorer.score(&record);
        let breakdown = scorer.breakdown(&record);
        let pathway = result.tier.pathway();

        Self {
            record,
            result,
            breakdown,
            pathway,
            completed_at,
            bank: scorer.bank(),
        }
    }

    pub fn bank(&self) -> QuestionBank {
        self.bank
    }

    /// Option label for a component's answer; `None` when it is unanswered or
    /// outside the option set.
    pub fn answer_label(&self, component: &ScoreComponent) -> Option<&'static str> {
        self.bank
            .question(component.key)
            .option(&component.value)
            .map(|option| option.label)
    }

    /// Questions that added points, highest contribution first.
    pub fn contributing_factors(&self) -> Vec<&ScoreComponent> {
        let mut factors: Vec<&ScoreComponent> = self
            .breakdown
            .iter()
            .filter(|component| component.points > 0)
            .collect();
        factors.sort_by(|a, b| b.points.cmp(&a.points).then(a.key.cmp(&b.key)));
        factors
    }

    /// Message used to pre-fill the consultation request form.
    pub fn consultation_note(&self) -> String {
        let mut note = format!(
            "HeartSafe assessment on {}: score {} ({} risk).",
            self.completed_at.format("%Y-%m-%d"),
            self.result.score,
            self.result.tier.label()
        );

        let factors = self.contributing_factors();
        if factors.is_empty() {
            note.push_str(" No elevated risk factors reported.");
        } else {
            let described: Vec<String> = factors
                .iter()
                .take(3)
                .map(|component| {
                    let answer = self
                        .answer_label(component)
                        .unwrap_or(component.value.as_str());
                    format!("{}: {}", component.key.label(), answer)
                })
                .collect();
            note.push_str(&format!(" Main factors: {}.", described.join("; ")));
        }

        note
    }
}
