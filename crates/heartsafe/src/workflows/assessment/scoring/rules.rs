use super::super::questions::QuestionBank;
use super::super::record::AssessmentRecord;
use super::ScoreComponent;

pub(crate) fn score_components(
    bank: &QuestionBank,
    record: &AssessmentRecord,
) -> Vec<ScoreComponent> {
    bank.questions()
        .iter()
        .map(|question| {
            let value = record.get(question.key);
            let option = question.option(value);
            ScoreComponent {
                key: question.key,
                value: value.to_string(),
                points: option.map(|option| option.weight).unwrap_or(0),
                recognized: option.is_some(),
            }
        })
        .collect()
}

pub(crate) fn raw_total(components: &[ScoreComponent]) -> u32 {
    components
        .iter()
        .map(|component| u32::from(component.points))
        .sum()
}
