use super::domain::AnswerKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answers collected so far, one slot per [`AnswerKey`]. An empty string means
/// the question has not been answered. Values are stored verbatim; they are
/// never checked against the question's option set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<AnswerKey, String>",
    into = "BTreeMap<AnswerKey, String>"
)]
pub struct AssessmentRecord {
    answers: [String; AnswerKey::COUNT],
}

impl AssessmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AnswerKey) -> &str {
        &self.answers[key.index()]
    }

    pub fn set(&mut self, key: AnswerKey, value: impl Into<String>) {
        self.answers[key.index()] = value.into();
    }

    pub fn with(mut self, key: AnswerKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_answered(&self, key: AnswerKey) -> bool {
        !self.get(key).is_empty()
    }

    pub fn is_complete(&self) -> bool {
        AnswerKey::ordered()
            .into_iter()
            .all(|key| self.is_answered(key))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|value| !value.is_empty()).count()
    }
}

impl From<BTreeMap<AnswerKey, String>> for AssessmentRecord {
    fn from(map: BTreeMap<AnswerKey, String>) -> Self {
        map.into_iter()
            .fold(Self::default(), |record, (key, value)| record.with(key, value))
    }
}

impl From<AssessmentRecord> for BTreeMap<AnswerKey, String> {
    fn from(record: AssessmentRecord) -> Self {
        AnswerKey::ordered()
            .into_iter()
            .zip(record.answers)
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for AssessmentRecord
where
    K: Into<AnswerKey>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |record, (key, value)| {
                record.with(key.into(), value)
            })
    }
}
