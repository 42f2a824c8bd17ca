//! Integration tests for the validation and profiling engine.
//!
//! These tests exercise the public surface end to end: validate, score,
//! profile, recommend, and clean, over in-memory datasets.

use polars::prelude::*;
use pretty_assertions::assert_eq;
use sheet_audit::{
    AuditConfig, Cleaner, DataProfiler, OutlierDetector, QualityScorer, StructuralValidator,
    TypeAdvisor, duplicate_names,
};
use sheet_audit::types::{CleaningStrategy, ColumnStats, OutlierMethod, TypeSuggestion};

// ============================================================================
// Fixtures
// ============================================================================

/// A small sales sheet with the defects a real upload tends to have:
/// a sparse column, stringly-typed numbers, a date column stored as text,
/// and one duplicated row.
fn messy_sales() -> DataFrame {
    df![
        "order_id" => [Some(1i64), Some(2), Some(3), Some(4), Some(4), Some(6)],
        "amount" => ["10.50", "20.00", "3.25", "99.99", "99.99", "12.00"],
        "ordered_on" => ["2024-01-05", "2024-01-06", "2024-01-07", "2024-01-08", "2024-01-08", "2024-01-09"],
        "notes" => [Some("rush"), None, None, None, None, Some("gift wrap")],
        "region" => ["west", "west", "east", "east", "east", "west"],
    ]
    .unwrap()
}

fn clean_numeric() -> DataFrame {
    df![
        "id" => [1i64, 2, 3, 4, 5],
        "value" => [10.0f64, 20.0, 30.0, 40.0, 50.0],
    ]
    .unwrap()
}

// ============================================================================
// Structural Validation
// ============================================================================

#[test]
fn test_validate_clean_dataset() {
    let report = StructuralValidator::default().validate(Some(&clean_numeric()));

    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());

    let info = report.info.expect("info block expected");
    assert_eq!(info.shape, (5, 2));
    assert_eq!(info.quality_score, 100.0);
}

#[test]
fn test_validate_messy_dataset_stays_valid_with_findings() {
    let report = StructuralValidator::default().validate(Some(&messy_sales()));

    // Warnings and suggestions never invalidate a dataset by themselves.
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("'notes'") && w.contains("missing")),
        "sparse column should be flagged: {:?}",
        report.warnings
    );
    assert!(report.suggestions.iter().any(|s| s.contains("'amount'")
        && s.contains("numeric data but is stored as text")));
    assert!(
        report
            .suggestions
            .iter()
            .any(|s| s.contains("'ordered_on'") && s.contains("dates"))
    );
}

#[test]
fn test_validate_none_and_empty_agree() {
    let validator = StructuralValidator::default();
    let from_none = validator.validate(None);
    let from_empty = validator.validate(Some(&DataFrame::empty()));

    assert_eq!(from_none, from_empty);
    assert_eq!(from_none.errors, vec!["Dataset is empty or null".to_string()]);
}

#[test]
fn test_duplicate_header_detection() {
    // Polars refuses duplicate names at construction, so header rows are
    // checked before a frame exists.
    assert_eq!(
        duplicate_names(&["id", "amount", "id"]),
        vec!["id".to_string()]
    );
}

// ============================================================================
// Quality Scoring
// ============================================================================

#[test]
fn test_quality_score_bounds() {
    assert_eq!(QualityScorer::score(&clean_numeric()), 100.0);
    assert_eq!(QualityScorer::score(&DataFrame::empty()), 0.0);

    let messy = QualityScorer::score(&messy_sales());
    assert!(messy < 100.0);
    assert!(messy > 0.0);
}

#[test]
fn test_quality_score_penalizes_each_defect() {
    let base = QualityScorer::score(&clean_numeric());

    let with_missing = df![
        "id" => [Some(1i64), Some(2), None, Some(4), Some(5)],
        "value" => [10.0f64, 20.0, 30.0, 40.0, 50.0],
    ]
    .unwrap();
    assert!(QualityScorer::score(&with_missing) < base);

    let with_duplicates = df![
        "id" => [1i64, 1, 3, 4, 5],
        "value" => [10.0f64, 10.0, 30.0, 40.0, 50.0],
    ]
    .unwrap();
    assert!(QualityScorer::score(&with_duplicates) < base);

    let with_constant = df![
        "id" => [1i64, 2, 3, 4, 5],
        "value" => [7.0f64, 7.0, 7.0, 7.0, 7.0],
    ]
    .unwrap();
    assert!(QualityScorer::score(&with_constant) < base);
}

// ============================================================================
// Profiling
// ============================================================================

#[test]
fn test_profile_end_to_end() {
    let profile = DataProfiler::default().profile(&messy_sales());

    assert_eq!(profile.overview.rows, 6);
    assert_eq!(profile.overview.columns, 5);
    assert_eq!(profile.overview.duplicate_rows, 1);
    assert_eq!(profile.columns.len(), 5);

    let notes = &profile.columns["notes"];
    assert_eq!(notes.missing_count, 4);
    assert!((notes.missing_percentage - 4.0 / 6.0 * 100.0).abs() < 1e-9);

    let order_id = &profile.columns["order_id"];
    match order_id.stats.as_ref().expect("numeric stats expected") {
        ColumnStats::Numeric(stats) => {
            assert_eq!(stats.min, 1.0);
            assert_eq!(stats.max, 6.0);
            assert_eq!(stats.zeros_count, 0);
        }
        other => panic!("expected numeric stats, got {other:?}"),
    }

    let region = &profile.columns["region"];
    match region.stats.as_ref().expect("text stats expected") {
        ColumnStats::Text(stats) => assert_eq!(stats.max_length, 4),
        other => panic!("expected text stats, got {other:?}"),
    }
}

#[test]
fn test_profile_recommendations_cover_found_defects() {
    let profile = DataProfiler::default().profile(&messy_sales());

    assert!(
        profile
            .recommendations
            .contains(&"Remove 1 duplicate rows".to_string())
    );
    // "notes" is 66.7% missing, past the removal threshold.
    assert!(
        profile
            .recommendations
            .iter()
            .any(|r| r.starts_with("Consider removing column 'notes'"))
    );
    assert!(
        profile
            .recommendations
            .contains(&"Consider converting column 'amount' to float64".to_string())
    );
}

#[test]
fn test_profile_serializes_to_json() {
    let profile = DataProfiler::default().profile(&messy_sales());
    let json = serde_json::to_value(&profile).expect("profile must serialize");

    assert_eq!(json["overview"]["rows"], 6);
    assert!(json["columns"]["amount"].is_object());
    assert!(json["recommendations"].is_array());
}

// ============================================================================
// Outlier Detection
// ============================================================================

#[test]
fn test_outlier_detection_both_methods() {
    let series = Series::new(
        "revenue".into(),
        &[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0],
    );
    let detector = OutlierDetector::default();

    assert_eq!(detector.detect(&series, OutlierMethod::Iqr), vec![9]);
    // Ten points give the 100 a z-score just above 2.8; the default cutoff
    // of 3 keeps it, a tighter cutoff catches it.
    let tight = OutlierDetector::new(
        &AuditConfig::builder()
            .zscore_cutoff(2.5)
            .build()
            .unwrap(),
    );
    assert_eq!(tight.detect(&series, OutlierMethod::ZScore), vec![9]);
}

#[test]
fn test_outlier_indices_refer_to_original_positions() {
    let series = Series::new(
        "v".into(),
        &[
            None,
            Some(1.0f64),
            Some(2.0),
            Some(3.0),
            Some(4.0),
            Some(5.0),
            Some(6.0),
            Some(7.0),
            Some(8.0),
            Some(9.0),
            Some(100.0),
        ],
    );

    let outliers = OutlierDetector::default().detect(&series, OutlierMethod::Iqr);
    assert_eq!(outliers, vec![10]);
}

#[test]
fn test_outliers_on_text_column_empty() {
    let series = Series::new("names".into(), &["a", "b", "c", "d", "e"]);
    assert!(
        OutlierDetector::default()
            .detect(&series, OutlierMethod::Iqr)
            .is_empty()
    );
}

// ============================================================================
// Type Advice
// ============================================================================

#[test]
fn test_type_suggestions_across_shapes() {
    let df = df![
        "ints" => ["1", "2", "-3"],
        "floats" => ["1.5", "2.0", "3.25"],
        "dates" => ["2024-01-01", "2024-02-02", "2024-03-03"],
        "bools" => ["yes", "no", "true"],
        "words" => ["alpha", "beta", "gamma"],
        "native" => [1i64, 2, 3],
    ]
    .unwrap();

    let suggestions = TypeAdvisor::suggest_types(&df);

    assert_eq!(suggestions["ints"], TypeSuggestion::Integer);
    assert_eq!(suggestions["floats"], TypeSuggestion::Float);
    assert_eq!(suggestions["dates"], TypeSuggestion::Datetime);
    assert_eq!(suggestions["bools"], TypeSuggestion::Boolean);
    assert!(!suggestions["words"].is_conversion());
    assert!(!suggestions["native"].is_conversion());
}

// ============================================================================
// Cleaning
// ============================================================================

#[test]
fn test_cleaning_strategies_end_to_end() {
    let df = df![
        "a" => [Some(1i64), None, Some(3), None],
        "b" => [Some("x"), Some("y"), None, None],
        "void" => [None::<f64>, None, None, None],
    ]
    .unwrap();
    let cleaner = Cleaner::default();

    let basic = cleaner.clean(&df, CleaningStrategy::Basic);
    assert_eq!(basic.shape(), (3, 2));

    let aggressive = cleaner.clean(&df, CleaningStrategy::Aggressive);
    assert_eq!(aggressive.height(), 0);

    let smart = cleaner.clean(&df, CleaningStrategy::Smart);
    assert!(smart.column("void").is_err());
}

#[test]
fn test_basic_clean_idempotent_after_full_pipeline() {
    let cleaner = Cleaner::default();
    let once = cleaner.clean(&messy_sales(), CleaningStrategy::Basic);
    let twice = cleaner.clean(&once, CleaningStrategy::Basic);
    assert_eq!(once, twice);
}

#[test]
fn test_unknown_strategy_name_is_noop() {
    let df = messy_sales();
    assert_eq!(Cleaner::default().clean_named(&df, "bogus"), df);
}

// ============================================================================
// Validate -> Profile -> Clean round trip
// ============================================================================

#[test]
fn test_audit_pipeline_round_trip() {
    let df = messy_sales();

    let report = StructuralValidator::default().validate(Some(&df));
    assert!(report.is_valid);
    let score_before = report.info.expect("info expected").quality_score;

    let profile = DataProfiler::default().profile(&df);
    assert!(!profile.recommendations.is_empty());

    // Acting on the duplicate-row recommendation should raise the score.
    let deduped = df
        .unique::<&str, &str>(None, UniqueKeepStrategy::First, None)
        .unwrap();
    let cleaned = Cleaner::default().clean(&deduped, CleaningStrategy::Basic);
    let score_after = QualityScorer::score(&cleaned);

    assert!(
        score_after > score_before,
        "cleanup should improve the score: {score_before} -> {score_after}"
    );
}

#[test]
fn test_custom_config_flows_through() {
    let config = AuditConfig::builder()
        .high_missing_threshold(0.9)
        .build()
        .unwrap();

    // With a 90% threshold the 66.7%-missing notes column is acceptable.
    let report = StructuralValidator::new(config).validate(Some(&messy_sales()));
    assert!(!report.warnings.iter().any(|w| w.contains("'notes'")));
}
