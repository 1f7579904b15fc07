//! Guided cardiovascular risk questionnaire: the step controller, the static
//! question bank and the additive risk scorer.

pub mod domain;
pub mod flow;
pub mod handoff;
pub mod questions;
pub mod record;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{AnswerKey, CarePathway, RiskTier, UnknownAnswerKey};
pub use flow::{AssessmentFlow, FlowState, StepPointer, Transition, TOTAL_STEPS};
pub use handoff::AssessmentHandoff;
pub use questions::{AnswerOption, QuestionBank, QuestionSpec};
pub use record::AssessmentRecord;
pub use scoring::{score, RiskResult, RiskScorer, ScoreComponent, SCORE_CAP};
