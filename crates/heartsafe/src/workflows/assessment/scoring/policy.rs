use super::super::domain::RiskTier;
use super::RiskResult;

/// Upper bound on the reported score. The standard weights top out at 92.
pub const SCORE_CAP: u8 = 100;

pub(crate) fn clamp_score(raw_total: u32) -> u8 {
    raw_total.min(u32::from(SCORE_CAP)) as u8
}

pub(crate) fn classify(raw_total: u32) -> RiskResult {
    let score = clamp_score(raw_total);
    let tier = RiskTier::classify(score);

    RiskResult {
        score,
        tier,
        recommendations: tier
            .recommendations()
            .iter()
            .map(|item| item.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_raw_totals_above_cap() {
        assert_eq!(clamp_score(92), 92);
        assert_eq!(clamp_score(100), 100);
        assert_eq!(clamp_score(101), 100);
        assert_eq!(clamp_score(u32::MAX), 100);
    }

    #[test]
    fn capped_result_is_very_high() {
        let result = classify(250);
        assert_eq!(result.score, SCORE_CAP);
        assert_eq!(result.tier, RiskTier::VeryHigh);
        assert_eq!(result.recommendations.len(), 5);
    }
}
