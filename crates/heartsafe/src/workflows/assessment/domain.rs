use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the fixed risk-factor slots of the questionnaire, in question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerKey {
    Age,
    Gender,
    BloodPressure,
    Cholesterol,
    Smoking,
    Diabetes,
    FamilyHistory,
    Exercise,
}

impl AnswerKey {
    pub const COUNT: usize = 8;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Age,
            Self::Gender,
            Self::BloodPressure,
            Self::Cholesterol,
            Self::Smoking,
            Self::Diabetes,
            Self::FamilyHistory,
            Self::Exercise,
        ]
    }

    /// Zero-based position in the question sequence.
    pub const fn index(self) -> usize {
        match self {
            Self::Age => 0,
            Self::Gender => 1,
            Self::BloodPressure => 2,
            Self::Cholesterol => 3,
            Self::Smoking => 4,
            Self::Diabetes => 5,
            Self::FamilyHistory => 6,
            Self::Exercise => 7,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::BloodPressure => "bloodPressure",
            Self::Cholesterol => "cholesterol",
            Self::Smoking => "smoking",
            Self::Diabetes => "diabetes",
            Self::FamilyHistory => "familyHistory",
            Self::Exercise => "exercise",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::BloodPressure => "Blood Pressure",
            Self::Cholesterol => "Cholesterol",
            Self::Smoking => "Smoking",
            Self::Diabetes => "Diabetes",
            Self::FamilyHistory => "Family History",
            Self::Exercise => "Exercise",
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown answer key '{0}'")]
pub struct UnknownAnswerKey(pub String);

impl FromStr for AnswerKey {
    type Err = UnknownAnswerKey;

    /// Accepts the camelCase wire name as well as snake_case and kebab-case spellings.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ordered()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownAnswerKey(raw.to_string()))
    }
}

/// Ordered risk classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::High, Self::VeryHigh]
    }

    /// Inclusive upper score bounds: 20, 40, 60, everything above is very high.
    pub const fn classify(score: u8) -> Self {
        match score {
            0..=20 => Self::Low,
            21..=40 => Self::Moderate,
            41..=60 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Your heart disease risk is low",
            Self::Moderate => "Your heart disease risk is moderate",
            Self::High => "Your heart disease risk is elevated",
            Self::VeryHigh => "Your heart disease risk is very high",
        }
    }

    /// Badge tone used by renderers.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Moderate => "yellow",
            Self::High => "orange",
            Self::VeryHigh => "red",
        }
    }

    pub const fn encouragement(self) -> &'static str {
        match self {
            Self::Low => "Keep up the great work with your heart-healthy lifestyle!",
            _ => "Taking action now can significantly improve your heart health.",
        }
    }

    pub const fn recommendations(self) -> &'static [&'static str; 5] {
        match self {
            Self::Low => &[
                "Continue your healthy lifestyle habits",
                "Regular exercise (150 minutes per week)",
                "Maintain a balanced diet",
                "Annual health checkups",
                "Monitor blood pressure regularly",
            ],
            Self::Moderate => &[
                "Increase physical activity to 30 minutes daily",
                "Adopt a heart-healthy diet (Mediterranean style)",
                "Monitor blood pressure and cholesterol",
                "Consider stress management techniques",
                "Schedule bi-annual health checkups",
            ],
            Self::High => &[
                "Consult with a cardiologist within 30 days",
                "Start a supervised exercise program",
                "Work with a nutritionist for diet planning",
                "Monitor vital signs weekly",
                "Consider medication consultation",
            ],
            Self::VeryHigh => &[
                "Schedule immediate consultation with a cardiologist",
                "Begin comprehensive lifestyle modification program",
                "Daily monitoring of blood pressure",
                "Medication evaluation and management",
                "Consider cardiac stress testing",
            ],
        }
    }

    pub const fn pathway(self) -> CarePathway {
        match self {
            Self::Low => CarePathway::SelfCare,
            _ => CarePathway::Consultation,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the results view should send the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarePathway {
    SelfCare,
    Consultation,
}

impl CarePathway {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfCare => "Self-care guidance",
            Self::Consultation => "Book a cardiologist consultation",
        }
    }
}
