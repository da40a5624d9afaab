use tracing::debug;

use crate::errors::AppError;

/// Normalizes raw PDF text for the extractors.
///
/// Line breaks and every non-ASCII character become spaces (this drops PDF
/// artefacts such as box-drawing glyphs and ligatures), whitespace runs
/// collapse to one space, edges are trimmed and the result is lowercased.
pub fn clean_text(raw_text: &str) -> Result<String, AppError> {
    if raw_text.is_empty() {
        return Err(AppError::Validation(
            "raw text must be a non-empty string".to_string(),
        ));
    }

    debug!("Cleaning text. Input length: {} characters", raw_text.len());

    let ascii: String = raw_text
        .chars()
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect();
    let cleaned = ascii
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if cleaned.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Text became empty after cleaning. The source PDF may contain only non-ASCII or image-based content."
                .to_string(),
        ));
    }

    debug!("Cleaning complete. Output length: {} characters", cleaned.len());
    Ok(cleaned)
}
