use serde::{Deserialize, Serialize};

/// Fixed factor weights: skills 0.5, role 0.3, experience 0.2.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub role: f64,
    pub experience: f64,
}

pub const WEIGHTS: ScoringWeights = ScoringWeights {
    skill: 0.5,
    role: 0.3,
    experience: 0.2,
};

/// Match quality band, assigned from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Partial Match")]
    Partial,
    #[serde(rename = "Low Match")]
    Low,
}

impl MatchLabel {
    /// Inclusive lower bounds on the 0–100 scale: 80, 60, 40.
    pub fn from_final_score(final_score: f64) -> Self {
        if final_score >= 80.0 {
            MatchLabel::Excellent
        } else if final_score >= 60.0 {
            MatchLabel::Good
        } else if final_score >= 40.0 {
            MatchLabel::Partial
        } else {
            MatchLabel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchLabel::Excellent => "Excellent Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Partial => "Partial Match",
            MatchLabel::Low => "Low Match",
        }
    }
}

/// Weighted final score as a percentage rounded to two decimals.
pub fn combine(skill: f64, role: f64, experience: f64) -> f64 {
    let raw = skill * WEIGHTS.skill + role * WEIGHTS.role + experience * WEIGHTS.experience;
    to_percent(raw)
}

/// Scales a `[0, 1]` score to 0–100 with two decimals.
pub fn to_percent(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_weight_isolation() {
        approx(combine(1.0, 0.0, 0.0), 50.0);
        approx(combine(0.0, 1.0, 0.0), 30.0);
        approx(combine(0.0, 0.0, 1.0), 20.0);
    }

    #[test]
    fn test_full_and_empty() {
        approx(combine(1.0, 1.0, 1.0), 100.0);
        approx(combine(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_mixed_scores() {
        // 0.5*0.5 + 0.3*0.5 + 0.2*0.5 = 0.5
        approx(combine(0.5, 0.5, 0.5), 50.0);
        // 0.5*(2/3) + 0.3*0 + 0.2*0.5 = 0.4333.. -> 43.33
        approx(combine(2.0 / 3.0, 0.0, 0.5), 43.33);
    }

    #[test]
    fn test_to_percent_rounds_two_decimals() {
        approx(to_percent(1.0 / 3.0), 33.33);
        approx(to_percent(0.66666), 66.67);
        approx(to_percent(0.5), 50.0);
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(MatchLabel::from_final_score(100.0), MatchLabel::Excellent);
        assert_eq!(MatchLabel::from_final_score(80.0), MatchLabel::Excellent);
        assert_eq!(MatchLabel::from_final_score(79.99), MatchLabel::Good);
        assert_eq!(MatchLabel::from_final_score(60.0), MatchLabel::Good);
        assert_eq!(MatchLabel::from_final_score(59.99), MatchLabel::Partial);
        assert_eq!(MatchLabel::from_final_score(40.0), MatchLabel::Partial);
        assert_eq!(MatchLabel::from_final_score(39.99), MatchLabel::Low);
        assert_eq!(MatchLabel::from_final_score(0.0), MatchLabel::Low);
    }

    #[test]
    fn test_label_serializes_as_text() {
        let json = serde_json::to_string(&MatchLabel::Good).unwrap();
        assert_eq!(json, r#""Good Match""#);
        assert_eq!(MatchLabel::Good.as_str(), "Good Match");
    }
}
