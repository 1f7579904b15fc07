use super::domain::AnswerKey;
use serde::Serialize;

/// A selectable answer and the points it contributes to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    pub weight: u8,
}

/// Static definition of one questionnaire step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    pub key: AnswerKey,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl QuestionSpec {
    pub fn option(&self, value: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn max_weight(&self) -> u8 {
        self.options
            .iter()
            .map(|option| option.weight)
            .max()
            .unwrap_or(0)
    }
}

/// The fixed question sequence shared by the flow and the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBank {
    questions: &'static [QuestionSpec; AnswerKey::COUNT],
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: &STANDARD_QUESTIONS,
        }
    }

    pub fn questions(&self) -> &'static [QuestionSpec] {
        self.questions
    }

    pub fn question(&self, key: AnswerKey) -> &'static QuestionSpec {
        let questions = self.questions;
        &questions[key.index()]
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

const fn option(value: &'static str, label: &'static str, weight: u8) -> AnswerOption {
    AnswerOption {
        value,
        label,
        weight,
    }
}

static STANDARD_QUESTIONS: [QuestionSpec; AnswerKey::COUNT] = [
    QuestionSpec {
        key: AnswerKey::Age,
        prompt: "What is your age?",
        options: &[
            option("18-29", "18-29 years", 0),
            option("30-39", "30-39 years", 5),
            option("40-49", "40-49 years", 10),
            option("50-59", "50-59 years", 15),
            option("60+", "60+ years", 20),
        ],
    },
    QuestionSpec {
        key: AnswerKey::Gender,
        prompt: "What is your gender?",
        options: &[
            option("male", "Male", 5),
            option("female", "Female", 0),
            option("other", "Other", 0),
        ],
    },
    QuestionSpec {
        key: AnswerKey::BloodPressure,
        prompt: "What is your blood pressure status?",
        options: &[
            option("normal", "Normal (less than 120/80)", 0),
            option("elevated", "Elevated (120-129/less than 80)", 5),
            option("stage1", "Stage 1 High (130-139/80-89)", 10),
            option("stage2", "Stage 2 High (140/90 or higher)", 15),
            option("unknown", "I don't know", 8),
        ],
    },
    QuestionSpec {
        key: AnswerKey::Cholesterol,
        prompt: "What is your cholesterol level?",
        options: &[
            option("normal", "Normal (less than 200 mg/dL)", 0),
            option("borderline", "Borderline (200-239 mg/dL)", 5),
            option("high", "High (240 mg/dL or higher)", 10),
            option("unknown", "I don't know", 6),
        ],
    },
    QuestionSpec {
        key: AnswerKey::Smoking,
        prompt: "Do you smoke or have you smoked in the past?",
        options: &[
            option("never", "Never smoked", 0),
            option("former", "Former smoker (quit more than 1 year ago)", 3),
            option("recent", "Recent quitter (quit within 1 year)", 8),
            option("current", "Current smoker", 12),
        ],
    },
    QuestionSpec {
        key: AnswerKey::Diabetes,
        prompt: "Do you have diabetes?",
        options: &[
            option("no", "No", 0),
            option("prediabetes", "Pre-diabetes", 5),
            option("type1", "Type 1 diabetes", 10),
            option("type2", "Type 2 diabetes", 8),
        ],
    },
    QuestionSpec {
        key: AnswerKey::FamilyHistory,
        prompt: "Do you have a family history of heart disease?",
        options: &[
            option("no", "No family history", 0),
            option(
                "distant",
                "Distant relatives (grandparents, aunts, uncles)",
                3,
            ),
            option("close", "Close relatives (parents, siblings)", 8),
            option("multiple", "Multiple family members affected", 12),
        ],
    },
    QuestionSpec {
        key: AnswerKey::Exercise,
        prompt: "How often do you exercise?",
        options: &[
            option("daily", "Daily (30+ minutes)", 0),
            option("regular", "3-4 times per week", 2),
            option("occasional", "1-2 times per week", 5),
            option("rarely", "Rarely or never", 8),
        ],
    },
];
