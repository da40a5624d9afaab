//! Years-of-experience inference from cleaned resume text.
//!
//! An explicit statement ("3 years of experience") always wins. Otherwise
//! year ranges are summed; short spans are ignored as false positives such
//! as a lone graduation year written "2024 - 2024".

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use tracing::debug;

/// Spans shorter than this are not counted as work history.
const MIN_SPAN_MONTHS: i64 = 6;

const MONTH_NAMES: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

const OPEN_ENDS: &[&str] = &["present", "current", "till date", "now"];

// "3 years of experience", "5+ yrs experience", "7+ years of professional experience"
static EXPLICIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\+?\s*(?:years?|yrs?)\s*(?:of\s+)?(?:professional\s+)?experience")
        .unwrap()
});

// "experience of 4 years"
static EXPLICIT_REVERSED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)experience\s+of\s+([0-9]+)\+?\s*(?:years?|yrs?)").unwrap());

// "2019 - 2023", "jan 2019 – mar 2024", "2018–present", "2020 to present"
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:{MONTH_NAMES}\s+)?([0-9]{{4}})\s*[-–—to]+\s*(?:{MONTH_NAMES}\s+)?([0-9]{{4}}|present|current|till date|now)"
    ))
    .unwrap()
});

/// Total years of experience, or `None` when nothing in the text says so.
pub fn infer_years(text: &str) -> Option<u32> {
    infer_years_as_of(text, Utc::now().year())
}

/// [`infer_years`] with open-ended ranges closed at `current_year`.
pub fn infer_years_as_of(text: &str, current_year: i32) -> Option<u32> {
    let years = explicit_years(text).or_else(|| date_range_years(text, current_year));
    if years.is_none() {
        debug!("Could not extract experience years from resume text");
    }
    years
}

fn explicit_years(text: &str) -> Option<u32> {
    [&*EXPLICIT_RE, &*EXPLICIT_REVERSED_RE]
        .into_iter()
        .find_map(|pattern| pattern.captures(text))
        .map(|caps| {
            // Digit runs can only fail to parse by overflowing.
            let years = caps[1].parse().unwrap_or(u32::MAX);
            debug!("Experience extracted via explicit pattern: {years} years");
            years
        })
}

fn date_range_years(text: &str, current_year: i32) -> Option<u32> {
    let mut total_months: i64 = 0;

    for caps in DATE_RANGE_RE.captures_iter(text) {
        let Ok(start_year) = caps[1].parse::<i64>() else {
            continue;
        };
        let end_raw = caps[2].to_lowercase();
        let end_year = if OPEN_ENDS.contains(&end_raw.as_str()) {
            i64::from(current_year)
        } else {
            match end_raw.parse::<i64>() {
                Ok(year) => year,
                Err(_) => continue,
            }
        };

        if end_year < start_year {
            continue;
        }
        let months = (end_year - start_year) * 12;
        if months >= MIN_SPAN_MONTHS {
            total_months += months;
        }
    }

    if total_months <= 0 {
        return None;
    }
    let years = ((total_months as f64 / 12.0).round() as u32).max(1);
    debug!("Experience extracted via date ranges: {years} years (~{total_months} months)");
    Some(years)
}
