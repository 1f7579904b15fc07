use super::domain::AnswerKey;
use super::handoff::AssessmentHandoff;
use super::questions::{QuestionBank, QuestionSpec};
use super::record::AssessmentRecord;
use super::scoring::RiskScorer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

pub const TOTAL_STEPS: u8 = AnswerKey::COUNT as u8;

/// 1-based position in the question sequence, always within `1..=TOTAL_STEPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StepPointer(u8);

impl StepPointer {
    pub const fn first() -> Self {
        Self(1)
    }

    pub const fn new(step: u8) -> Option<Self> {
        if step >= 1 && step <= TOTAL_STEPS {
            Some(Self(step))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn key(self) -> AnswerKey {
        AnswerKey::ordered()[(self.0 - 1) as usize]
    }

    pub const fn is_last(self) -> bool {
        self.0 == TOTAL_STEPS
    }

    fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    fn prev(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "step")]
pub enum FlowState {
    Step(StepPointer),
    Completed,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed: unanswered step, boundary reached, or flow already complete.
    Unchanged,
    Moved(StepPointer),
    Completed,
}

/// Drives one user through the fixed question sequence.
///
/// Every session owns its own flow. Invalid navigation never errors; it is
/// reported as [`Transition::Unchanged`] and leaves the flow untouched.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    bank: QuestionBank,
    record: AssessmentRecord,
    state: FlowState,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self {
            bank: QuestionBank::standard(),
            record: AssessmentRecord::new(),
            state: FlowState::Step(StepPointer::first()),
            completed_at: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn record(&self) -> &AssessmentRecord {
        &self.record
    }

    pub fn is_completed(&self) -> bool {
        self.state == FlowState::Completed
    }

    /// Current 1-based step; reports the last step once completed.
    pub fn current_step(&self) -> u8 {
        match self.state {
            FlowState::Step(step) => step.get(),
            FlowState::Completed => TOTAL_STEPS,
        }
    }

    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    pub fn current_question(&self) -> Option<&'static QuestionSpec> {
        match self.state {
            FlowState::Step(step) => Some(self.bank.question(step.key())),
            FlowState::Completed => None,
        }
    }

    /// Answer currently stored for the active question.
    pub fn current_answer(&self) -> Option<&str> {
        self.current_question()
            .map(|question| self.record.get(question.key))
    }

    pub fn is_current_step_complete(&self) -> bool {
        match self.state {
            FlowState::Step(step) => self.record.is_answered(step.key()),
            FlowState::Completed => true,
        }
    }

    /// Stores `value` for `key`. Any key and any string are accepted; only the
    /// current step's answer gates advancing. Ignored once the flow is complete.
    pub fn select_answer(&mut self, key: AnswerKey, value: impl Into<String>) {
        if self.is_completed() {
            debug!(key = key.as_str(), "ignoring answer for completed assessment");
            return;
        }

        let value = value.into();
        debug!(key = key.as_str(), value = %value, "answer selected");
        self.record.set(key, value);
    }

    pub fn advance(&mut self) -> Transition {
        let FlowState::Step(step) = self.state else {
            return Transition::Unchanged;
        };

        if !self.record.is_answered(step.key()) {
            debug!(step = step.get(), "advance blocked on unanswered step");
            return Transition::Unchanged;
        }

        match step.next() {
            Some(next) => {
                self.state = FlowState::Step(next);
                debug!(step = next.get(), "advanced to next question");
                Transition::Moved(next)
            }
            None => {
                self.state = FlowState::Completed;
                self.completed_at = Some(Utc::now());
                info!(
                    answered = self.record.answered_count(),
                    "assessment completed"
                );
                Transition::Completed
            }
        }
    }

    pub fn retreat(&mut self) -> Transition {
        let FlowState::Step(step) = self.state else {
            return Transition::Unchanged;
        };

        match step.prev() {
            Some(prev) => {
                self.state = FlowState::Step(prev);
                debug!(step = prev.get(), "returned to previous question");
                Transition::Moved(prev)
            }
            None => Transition::Unchanged,
        }
    }

    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.current_step()) / f32::from(TOTAL_STEPS)
    }

    /// Whole-percent progress as shown next to the progress bar.
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction() * 100.0).round() as u8
    }

    /// Caption for the forward button.
    pub fn advance_label(&self) -> &'static str {
        match self.state {
            FlowState::Step(step) if step.is_last() => "Get My Results",
            _ => "Next",
        }
    }

    /// Scored result package for the results view, available once completed.
    pub fn handoff(&self) -> Option<AssessmentHandoff> {
        let completed_at = self.completed_at?;
        Some(AssessmentHandoff::new(
            self.record.clone(),
            &RiskScorer::new(self.bank),
            completed_at,
        ))
    }

    /// Consumes the flow, handing the finalized record to the next stage.
    pub fn into_handoff(self) -> Result<AssessmentHandoff, Self> {
        match self.completed_at {
            Some(completed_at) => Ok(AssessmentHandoff::new(
                self.record,
                &RiskScorer::new(self.bank),
                completed_at,
            )),
            None => Err(self),
        }
    }
}
