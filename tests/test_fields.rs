use chrono::NaiveDate;

use condor_screen::data::fields::{FieldError, parse_exp_date, parse_percent, parse_ratio};

// ── Percentages ─────────────────────────────────────────────────────

#[test]
fn percent_parses_plain_and_fractional() {
    assert_eq!(parse_percent("45%"), Ok(45.0));
    assert_eq!(parse_percent("45.5%"), Ok(45.5));
    assert_eq!(parse_percent(" 62% "), Ok(62.0));
}

#[test]
fn percent_round_trips() {
    for x in [0.0, 31.4, 45.0, 99.9, 100.0] {
        let formatted = format!("{x}%");
        assert_eq!(parse_percent(&formatted), Ok(x));
    }
}

#[test]
fn percent_rejects_missing_or_bad_suffix() {
    assert_eq!(parse_percent("45"), Err(FieldError::BadPercent("45".into())));
    assert_eq!(
        parse_percent("abc%"),
        Err(FieldError::BadPercent("abc%".into()))
    );
    assert_eq!(parse_percent("%"), Err(FieldError::BadPercent("%".into())));
}

// ── Ratios ──────────────────────────────────────────────────────────

#[test]
fn ratio_parses_integral_and_fractional() {
    assert_eq!(parse_ratio("4 to 1"), Ok(4.0));
    assert_eq!(parse_ratio("2.5 to 1"), Ok(2.5));
    assert_eq!(parse_ratio("1 to 1"), Ok(1.0));
}

#[test]
fn ratio_rejects_other_shapes() {
    assert_eq!(parse_ratio("4:1"), Err(FieldError::BadRatio("4:1".into())));
    assert_eq!(
        parse_ratio("4 to 2"),
        Err(FieldError::BadRatio("4 to 2".into()))
    );
    assert_eq!(
        parse_ratio(" to 1"),
        Err(FieldError::BadRatio(" to 1".into()))
    );
}

// ── Dates ───────────────────────────────────────────────────────────

#[test]
fn exp_date_parses_month_day_year() {
    assert_eq!(
        parse_exp_date("12/19/2025"),
        Ok(NaiveDate::from_ymd_opt(2025, 12, 19).unwrap())
    );
    assert_eq!(
        parse_exp_date("1/5/2026"),
        Ok(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    );
}

#[test]
fn exp_date_rejects_other_formats_and_invalid_dates() {
    assert!(parse_exp_date("2025-12-19").is_err());
    assert!(parse_exp_date("13/01/2025").is_err());
    assert!(parse_exp_date("02/30/2025").is_err());
    assert!(parse_exp_date("").is_err());
}
