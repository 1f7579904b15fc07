use super::common::*;
use crate::workflows::assessment::domain::{AnswerKey, RiskTier};
use crate::workflows::assessment::questions::QuestionBank;
use crate::workflows::assessment::record::AssessmentRecord;
use crate::workflows::assessment::scoring::{score, RiskScorer};

#[test]
fn single_answer_scores_exactly_its_weight() {
    let expected: [(AnswerKey, &[(&str, u8)]); AnswerKey::COUNT] = [
        (
            AnswerKey::Age,
            &[("18-29", 0), ("30-39", 5), ("40-49", 10), ("50-59", 15), ("60+", 20)],
        ),
        (AnswerKey::Gender, &[("male", 5), ("female", 0), ("other", 0)]),
        (
            AnswerKey::BloodPressure,
            &[
                ("normal", 0),
                ("elevated", 5),
                ("stage1", 10),
                ("stage2", 15),
                ("unknown", 8),
            ],
        ),
        (
            AnswerKey::Cholesterol,
            &[("normal", 0), ("borderline", 5), ("high", 10), ("unknown", 6)],
        ),
        (
            AnswerKey::Smoking,
            &[("never", 0), ("former", 3), ("recent", 8), ("current", 12)],
        ),
        (
            AnswerKey::Diabetes,
            &[("no", 0), ("prediabetes", 5), ("type1", 10), ("type2", 8)],
        ),
        (
            AnswerKey::FamilyHistory,
            &[("no", 0), ("distant", 3), ("close", 8), ("multiple", 12)],
        ),
        (
            AnswerKey::Exercise,
            &[("daily", 0), ("regular", 2), ("occasional", 5), ("rarely", 8)],
        ),
    ];

    for (key, options) in expected {
        for (value, points) in options {
            let record = AssessmentRecord::new().with(key, *value);
            assert_eq!(
                score(&record).score,
                *points,
                "{key}={value} should contribute {points}"
            );
        }
    }
}

#[test]
fn question_bank_declares_exactly_the_scored_options() {
    let bank = QuestionBank::standard();
    let option_counts: Vec<usize> = bank
        .questions()
        .iter()
        .map(|question| question.options.len())
        .collect();

    assert_eq!(option_counts, vec![5, 3, 5, 4, 4, 4, 4, 4]);
    for (question, key) in bank.questions().iter().zip(AnswerKey::ordered()) {
        assert_eq!(question.key, key);
        assert_eq!(bank.question(key), question);
    }
}

#[test]
fn empty_record_scores_zero_and_low() {
    let result = score(&AssessmentRecord::new());

    assert_eq!(result.score, 0);
    assert_eq!(result.tier, RiskTier::Low);
    assert_eq!(result.recommendations.len(), 5);
}

#[test]
fn unknown_values_contribute_nothing_and_do_not_fail() {
    let record = scenario_record()
        .with(AnswerKey::Age, "unknown")
        .with(AnswerKey::Gender, "MALE")
        .with(AnswerKey::Diabetes, "");

    let scorer = RiskScorer::default();
    let result = scorer.score(&record);
    assert_eq!(result.score, 43 - 10 - 5);

    let breakdown = scorer.breakdown(&record);
    let age = &breakdown[AnswerKey::Age.index()];
    assert_eq!(age.points, 0);
    assert!(!age.recognized);
    assert!(!breakdown[AnswerKey::Diabetes.index()].recognized);
    assert!(breakdown[AnswerKey::Smoking.index()].recognized);
}

#[test]
fn scoring_is_deterministic() {
    let record = scenario_record();
    let scorer = RiskScorer::default();

    assert_eq!(scorer.score(&record), scorer.score(&record));
    assert_eq!(score(&record), scorer.score(&record));
}

#[test]
fn scenario_record_scores_forty_three_high() {
    let result = score(&scenario_record());

    assert_eq!(result.score, 43);
    assert_eq!(result.tier, RiskTier::High);
    assert_eq!(
        result.recommendations.first().map(String::as_str),
        Some("Consult with a cardiologist within 30 days")
    );
    assert_eq!(result.description(), "Your heart disease risk is elevated");
}

#[test]
fn maximum_weight_answers_reach_ninety_two() {
    let bank = QuestionBank::standard();
    let ceiling: u32 = bank
        .questions()
        .iter()
        .map(|question| u32::from(question.max_weight()))
        .sum();
    assert_eq!(ceiling, 92);

    let result = score(&max_weight_record());
    assert_eq!(result.score, 92);
    assert_eq!(result.tier, RiskTier::VeryHigh);
}

#[test]
fn breakdown_sums_to_raw_score() {
    let record = scenario_record();
    let scorer = RiskScorer::default();

    let breakdown = scorer.breakdown(&record);
    let total: u32 = breakdown.iter().map(|c| u32::from(c.points)).sum();

    assert_eq!(breakdown.len(), AnswerKey::COUNT);
    assert_eq!(total, u32::from(scorer.score(&record).score));
}

#[test]
fn tier_boundaries_are_inclusive_upper_bounds() {
    let cases = [
        (0, RiskTier::Low),
        (20, RiskTier::Low),
        (21, RiskTier::Moderate),
        (40, RiskTier::Moderate),
        (41, RiskTier::High),
        (60, RiskTier::High),
        (61, RiskTier::VeryHigh),
        (100, RiskTier::VeryHigh),
    ];

    for (score, tier) in cases {
        assert_eq!(RiskTier::classify(score), tier, "score {score}");
    }
}

#[test]
fn every_tier_has_five_recommendations_and_presentation() {
    for tier in RiskTier::ordered() {
        assert_eq!(tier.recommendations().len(), 5);
        assert!(!tier.description().is_empty());
        assert!(!tier.color().is_empty());
    }
    assert_eq!(RiskTier::VeryHigh.label(), "Very High");
    assert_eq!(
        RiskTier::Low.encouragement(),
        "Keep up the great work with your heart-healthy lifestyle!"
    );
}

#[test]
fn record_round_trips_through_wire_names() {
    let json = serde_json::to_value(scenario_record()).expect("record serializes");
    assert_eq!(json["bloodPressure"], "stage1");
    assert_eq!(json["familyHistory"], "close");

    let partial: AssessmentRecord =
        serde_json::from_str(r#"{"age":"60+","smoking":"current"}"#).expect("partial record");
    assert_eq!(partial.get(AnswerKey::Age), "60+");
    assert_eq!(partial.get(AnswerKey::Exercise), "");
    assert_eq!(score(&partial).score, 32);
}

#[test]
fn answer_keys_parse_from_common_spellings() {
    assert_eq!("bloodPressure".parse::<AnswerKey>(), Ok(AnswerKey::BloodPressure));
    assert_eq!("blood_pressure".parse::<AnswerKey>(), Ok(AnswerKey::BloodPressure));
    assert_eq!("family-history".parse::<AnswerKey>(), Ok(AnswerKey::FamilyHistory));
    assert_eq!(" AGE ".parse::<AnswerKey>(), Ok(AnswerKey::Age));
    assert!("weight".parse::<AnswerKey>().is_err());
}
