use chrono::NaiveDate;

use condor_screen::data;
use condor_screen::example::EXAMPLE_CSV;
use condor_screen::model::{GradeWeights, RawRecord};
use condor_screen::pipeline::cache::{CacheEntry, EnrichedCache, content_key};
use condor_screen::pipeline::clock::RunClock;
use condor_screen::pipeline::{PipelineError, enrich};

// ── Helpers ─────────────────────────────────────────────────────────

fn raw(symbol: &str, exp_date: &str, profit_prob: &str, risk_reward: &str) -> RawRecord {
    RawRecord {
        symbol: symbol.to_string(),
        market_price: "100.00".to_string(),
        exp_date: exp_date.to_string(),
        profit_prob: profit_prob.to_string(),
        risk_reward: risk_reward.to_string(),
    }
}

fn footer() -> RawRecord {
    raw("Total", "", "", "")
}

fn ref_clock() -> RunClock {
    RunClock::fixed(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap())
}

// ── Footer drop and row indices ─────────────────────────────────────

#[test]
fn footer_row_is_dropped_and_indices_are_original_positions() {
    let records = vec![
        raw("AAPL", "11/21/2025", "45%", "4 to 1"),
        raw("MSFT", "11/21/2025", "52%", "2 to 1"),
        footer(),
    ];
    let enriched = enrich(&records, &ref_clock(), GradeWeights::default()).unwrap();

    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].row_index, 0);
    assert_eq!(enriched[0].symbol, "AAPL");
    assert_eq!(enriched[1].row_index, 1);
    assert_eq!(enriched[1].symbol, "MSFT");
}

#[test]
fn empty_and_footer_only_tables_yield_no_rows() {
    let clock = ref_clock();
    assert!(enrich(&[], &clock, GradeWeights::default()).unwrap().is_empty());
    assert!(
        enrich(&[footer()], &clock, GradeWeights::default())
            .unwrap()
            .is_empty()
    );
}

// ── Derived fields ──────────────────────────────────────────────────

#[test]
fn duration_is_inclusive_of_the_expiration_day() {
    let records = vec![
        raw("TEN", "11/11/2025", "45%", "4 to 1"),
        raw("TODAY", "11/01/2025", "45%", "4 to 1"),
        footer(),
    ];
    let enriched = enrich(&records, &ref_clock(), GradeWeights::default()).unwrap();

    assert_eq!(enriched[0].duration, 11);
    assert_eq!(enriched[1].duration, 1);
}

#[test]
fn profitability_is_100_over_ratio_rounded() {
    let records = vec![
        raw("A", "11/21/2025", "45%", "4 to 1"),
        raw("B", "11/21/2025", "45%", "1 to 1"),
        raw("C", "11/21/2025", "45%", "3 to 1"),
        footer(),
    ];
    let enriched = enrich(&records, &ref_clock(), GradeWeights::default()).unwrap();

    assert_eq!(enriched[0].profitability, 25.0);
    assert_eq!(enriched[1].profitability, 100.0);
    assert_eq!(enriched[2].profitability, 33.3);
}

#[test]
fn grade_combines_both_step_functions() {
    // 45% -> 0.7 * 50, profitability 25 -> 0.1 * 50
    let records = vec![raw("A", "11/21/2025", "45%", "4 to 1"), footer()];
    let enriched = enrich(&records, &ref_clock(), GradeWeights::default()).unwrap();
    assert_eq!(enriched[0].grade, 40.0);
}

// ── Failure policy ──────────────────────────────────────────────────

#[test]
fn malformed_field_aborts_the_whole_run() {
    let records = vec![
        raw("GOOD", "11/21/2025", "45%", "4 to 1"),
        raw("BAD", "11/21/2025", "forty-five", "4 to 1"),
        footer(),
    ];
    let err = enrich(&records, &ref_clock(), GradeWeights::default()).unwrap_err();
    match err {
        PipelineError::Field {
            row_index, symbol, ..
        } => {
            assert_eq!(row_index, 1);
            assert_eq!(symbol, "BAD");
        }
        other => panic!("expected field error, got {other}"),
    }
}

#[test]
fn zero_duration_aborts_the_whole_run() {
    // expired yesterday relative to the reference date: duration 0
    let records = vec![raw("STALE", "10/31/2025", "45%", "4 to 1"), footer()];
    let err = enrich(&records, &ref_clock(), GradeWeights::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Grade { row_index: 0, .. }));
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn same_input_and_reference_date_is_idempotent() {
    let records: Vec<RawRecord> = data::read_records(EXAMPLE_CSV.as_bytes()).unwrap();
    let clock = ref_clock();
    let first = enrich(&records, &clock, GradeWeights::default()).unwrap();
    let second = enrich(&records, &clock, GradeWeights::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn example_csv_parses_with_extra_columns_ignored() {
    let records = data::read_records(EXAMPLE_CSV.as_bytes()).unwrap();
    assert_eq!(records.len(), 6);

    let enriched = enrich(&records, &ref_clock(), GradeWeights::default()).unwrap();
    assert_eq!(enriched.len(), 5);
    assert_eq!(enriched[3].symbol, "SPY");
    assert_eq!(enriched[3].profit_prob, 61.0);
}

// ── Recompute cache ─────────────────────────────────────────────────

#[test]
fn content_key_tracks_bytes_exactly() {
    assert_eq!(content_key(b"abc"), content_key(b"abc"));
    assert_ne!(content_key(b"abc"), content_key(b"abd"));
    assert_eq!(content_key(b"abc").len(), 64);
}

#[test]
fn cache_hits_only_on_matching_inputs() {
    let records = vec![raw("A", "11/21/2025", "45%", "4 to 1"), footer()];
    let clock = ref_clock();
    let weights = GradeWeights::default();
    let rows = enrich(&records, &clock, weights).unwrap();

    let mut cache = EnrichedCache::default();
    let key = content_key(b"upload-bytes");
    cache.insert(
        key.clone(),
        CacheEntry {
            as_of: clock.as_of(),
            weights,
            rows: rows.clone(),
        },
    );

    assert!(cache.get(&key, clock.as_of(), &weights).is_some());

    // different reference date or weights must miss
    let later = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    assert!(cache.get(&key, later, &weights).is_none());
    let other_weights = GradeWeights {
        duration: 1.0,
        ..GradeWeights::default()
    };
    assert!(cache.get(&key, clock.as_of(), &other_weights).is_none());

    // explicit invalidation drops the entry
    assert!(cache.invalidate(&key));
    assert!(cache.get(&key, clock.as_of(), &weights).is_none());
    assert!(!cache.invalidate(&key));
}
