use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("percentage `{0}` does not match `<number>%`")]
    BadPercent(String),

    #[error("ratio `{0}` does not match `<number> to 1`")]
    BadRatio(String),

    #[error("date `{0}` does not match MM/DD/YYYY")]
    BadDate(String),
}

/// Parse a percentage field like `"45%"` into `45.0`.
pub fn parse_percent(text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_suffix('%')
        .ok_or_else(|| FieldError::BadPercent(text.to_string()))?;
    body.trim()
        .parse()
        .map_err(|_| FieldError::BadPercent(text.to_string()))
}

/// Parse a ratio field like `"4 to 1"` into `4.0`.
pub fn parse_ratio(text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_suffix(" to 1")
        .ok_or_else(|| FieldError::BadRatio(text.to_string()))?;
    body.trim()
        .parse()
        .map_err(|_| FieldError::BadRatio(text.to_string()))
}

/// Parse an expiration date field, strictly `MM/DD/YYYY`.
pub fn parse_exp_date(text: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(text.trim(), "%m/%d/%Y")
        .map_err(|_| FieldError::BadDate(text.to_string()))
}
