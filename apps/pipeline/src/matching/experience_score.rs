//! Factor 3: candidate years vs the job's free-form experience requirement.
//!
//! The requirement text is classified into an [`ExperienceRule`] first
//! (range, minimum, fresher, unparseable; first match wins), then the rule
//! scores the candidate. Unknown years and unparseable text are neutral.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Score used when there is nothing to compare against.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Penalty per year short of a range floor, a minimum, or the fresher cap.
const UNDER_PENALTY: f64 = 0.2;
/// Penalty per year beyond a range ceiling.
const OVER_PENALTY: f64 = 0.1;

// "2-4 years", "2 – 4 yrs", "3-5"
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*[-–]\s*([0-9]+)\s*(?:years?|yrs?)?").unwrap());

// "5+ years", "3+yrs"
static MINIMUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\+\s*(?:years?|yrs?)").unwrap());

const FRESHER_KEYWORDS: &[&str] = &["fresher", "entry level", "entry-level", "0 years", "0-1"];

/// Parsed shape of a job's experience requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceRule {
    Range { low: u32, high: u32 },
    Minimum(u32),
    Fresher,
    Unparseable,
}

type RuleMatcher = fn(&str) -> Option<ExperienceRule>;

/// Tried in order; the first matcher to recognise the text decides the rule.
const RULE_MATCHERS: [RuleMatcher; 3] = [match_range, match_minimum, match_fresher];

impl ExperienceRule {
    pub fn classify(requirement_text: &str) -> Self {
        let text = requirement_text.trim().to_lowercase();
        RULE_MATCHERS
            .iter()
            .find_map(|matcher| matcher(&text))
            .unwrap_or(ExperienceRule::Unparseable)
    }

    /// Linear decay capped at zero; no rounding.
    pub fn score(self, years: u32) -> f64 {
        match self {
            ExperienceRule::Range { low, high } => {
                if years < low {
                    decay(low - years, UNDER_PENALTY)
                } else if years > high {
                    decay(years - high, OVER_PENALTY)
                } else {
                    1.0
                }
            }
            ExperienceRule::Minimum(minimum) => {
                if years >= minimum {
                    1.0
                } else {
                    decay(minimum - years, UNDER_PENALTY)
                }
            }
            ExperienceRule::Fresher => {
                if years <= 1 {
                    1.0
                } else {
                    decay(years - 1, UNDER_PENALTY)
                }
            }
            ExperienceRule::Unparseable => NEUTRAL_SCORE,
        }
    }
}

/// Scores `years` against `requirement_text`; `None` years are neutral.
pub fn experience_score(years: Option<u32>, requirement_text: &str) -> f64 {
    let Some(years) = years else {
        debug!("experience_years is unknown, returning neutral score {NEUTRAL_SCORE}");
        return NEUTRAL_SCORE;
    };

    let rule = ExperienceRule::classify(requirement_text);
    let score = rule.score(years);
    debug!("Experience {rule:?} for '{requirement_text}': candidate={years} -> {score:.4}");
    score
}

fn decay(gap: u32, rate: f64) -> f64 {
    (1.0 - f64::from(gap) * rate).max(0.0)
}

/// Digit runs only overflow, never fail otherwise; saturate instead of dropping the rule.
fn parse_years(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn match_range(text: &str) -> Option<ExperienceRule> {
    let caps = RANGE_RE.captures(text)?;
    Some(ExperienceRule::Range {
        low: parse_years(&caps[1]),
        high: parse_years(&caps[2]),
    })
}

fn match_minimum(text: &str) -> Option<ExperienceRule> {
    let caps = MINIMUM_RE.captures(text)?;
    Some(ExperienceRule::Minimum(parse_years(&caps[1])))
}

fn match_fresher(text: &str) -> Option<ExperienceRule> {
    FRESHER_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
        .then_some(ExperienceRule::Fresher)
}
