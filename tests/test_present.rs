use serde_json::json;

use condor_screen::model::EnrichedRecord;
use condor_screen::present::{
    self, DEFAULT_COLUMNS, FilterThresholds, PresentError, padded_domain,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn rec(
    row_index: usize,
    symbol: &str,
    profit_prob: f64,
    profitability: f64,
    duration: i64,
) -> EnrichedRecord {
    EnrichedRecord {
        row_index,
        symbol: symbol.to_string(),
        market_price: "100.00".to_string(),
        exp_date: "12/19/2025".to_string(),
        profit_prob,
        profitability,
        duration,
        grade: 50.0,
    }
}

fn default_columns() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
}

// ── Filtering ───────────────────────────────────────────────────────

#[test]
fn thresholds_are_inclusive() {
    let rows = vec![rec(0, "EDGE", 50.0, 50.0, 10)];
    let filtered = present::filter_records(&rows, &FilterThresholds::default()).unwrap();
    assert_eq!(filtered.len(), 1);
}

#[test]
fn both_thresholds_must_hold() {
    let rows = vec![
        rec(0, "PROF_ONLY", 30.0, 80.0, 10),
        rec(1, "PROB_ONLY", 80.0, 30.0, 10),
        rec(2, "BOTH", 80.0, 80.0, 10),
    ];
    let filtered = present::filter_records(&rows, &FilterThresholds::default()).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].symbol, "BOTH");
}

#[test]
fn empty_result_is_a_signal_not_an_empty_plot() {
    let rows = vec![rec(0, "LOW", 10.0, 10.0, 10)];
    assert_eq!(
        present::filter_records(&rows, &FilterThresholds::default()),
        Err(PresentError::NoMatches)
    );
}

// ── Axis padding ────────────────────────────────────────────────────

#[test]
fn domains_are_padded_by_5_percent_of_the_range() {
    let rows = vec![rec(0, "A", 40.0, 20.0, 5), rec(1, "B", 60.0, 120.0, 50)];
    let spec = present::plot_spec(&rows);
    assert_eq!(spec.x.domain, [39.0, 61.0]);
    assert_eq!(spec.y.domain, [15.0, 125.0]);
}

#[test]
fn single_point_domain_collapses_to_the_point() {
    let rows = vec![rec(0, "ONLY", 55.0, 70.0, 5)];
    let spec = present::plot_spec(&rows);
    assert_eq!(spec.x.domain, [55.0, 55.0]);
    assert_eq!(spec.y.domain, [70.0, 70.0]);
}

#[test]
fn padded_domain_of_nothing_is_degenerate() {
    assert_eq!(padded_domain(std::iter::empty()), [0.0, 0.0]);
}

// ── Plot spec ───────────────────────────────────────────────────────

#[test]
fn plot_spec_carries_channels_and_selection_key() {
    let rows = vec![rec(3, "AAPL", 55.0, 70.0, 12)];
    let spec = present::plot_spec(&rows);

    assert_eq!(spec.x.field, "Profit Prob");
    assert_eq!(spec.y.field, "Profitability");
    assert_eq!(spec.color_field, "Duration");
    assert_eq!(spec.selection_field, "Row Index");
    assert_eq!(spec.tooltip.len(), 5);

    assert_eq!(spec.points.len(), 1);
    assert_eq!(spec.points[0].row_index, 3);
    assert_eq!(spec.points[0].duration, 12);
}

// ── Table projection ────────────────────────────────────────────────

#[test]
fn table_view_projects_selected_columns_in_order() {
    let rows = vec![rec(0, "AAPL", 55.0, 70.0, 12)];
    let view = present::table_view(&rows, &default_columns()).unwrap();

    assert_eq!(
        view.columns,
        vec![
            "Row Index",
            "Symbol",
            "Grade",
            "Profitability",
            "Profit Prob",
            "Duration"
        ]
    );
    assert_eq!(
        view.rows[0],
        vec![json!(0), json!("AAPL"), json!(50.0), json!(70.0), json!(55.0), json!(12)]
    );
}

#[test]
fn unknown_columns_are_rejected() {
    let rows = vec![rec(0, "AAPL", 55.0, 70.0, 12)];
    let err = present::table_view(&rows, &["Bogus".to_string()]).unwrap_err();
    assert_eq!(err, PresentError::UnknownColumn("Bogus".to_string()));
}
