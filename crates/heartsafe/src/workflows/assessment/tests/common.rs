use crate::workflows::assessment::domain::AnswerKey;
use crate::workflows::assessment::flow::{AssessmentFlow, Transition};
use crate::workflows::assessment::record::AssessmentRecord;

pub(super) fn scenario_answers() -> [(AnswerKey, &'static str); AnswerKey::COUNT] {
    [
        (AnswerKey::Age, "40-49"),
        (AnswerKey::Gender, "male"),
        (AnswerKey::BloodPressure, "stage1"),
        (AnswerKey::Cholesterol, "borderline"),
        (AnswerKey::Smoking, "never"),
        (AnswerKey::Diabetes, "no"),
        (AnswerKey::FamilyHistory, "close"),
        (AnswerKey::Exercise, "occasional"),
    ]
}

pub(super) fn max_weight_answers() -> [(AnswerKey, &'static str); AnswerKey::COUNT] {
    [
        (AnswerKey::Age, "60+"),
        (AnswerKey::Gender, "male"),
        (AnswerKey::BloodPressure, "stage2"),
        (AnswerKey::Cholesterol, "high"),
        (AnswerKey::Smoking, "current"),
        (AnswerKey::Diabetes, "type1"),
        (AnswerKey::FamilyHistory, "multiple"),
        (AnswerKey::Exercise, "rarely"),
    ]
}

pub(super) fn scenario_record() -> AssessmentRecord {
    scenario_answers().into_iter().collect()
}

pub(super) fn max_weight_record() -> AssessmentRecord {
    max_weight_answers().into_iter().collect()
}

/// Answers and advances through every step, asserting each move succeeds.
pub(super) fn complete_flow(answers: &[(AnswerKey, &str)]) -> AssessmentFlow {
    let mut flow = AssessmentFlow::new();
    for (index, (key, value)) in answers.iter().enumerate() {
        flow.select_answer(*key, *value);
        let transition = flow.advance();
        if index + 1 == answers.len() {
            assert_eq!(transition, Transition::Completed);
        } else {
            assert!(matches!(transition, Transition::Moved(_)));
        }
    }
    flow
}
