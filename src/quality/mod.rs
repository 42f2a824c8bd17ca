//! Dataset quality scoring.
//!
//! Produces a single 0-100 score from three defect ratios: missing cells,
//! duplicate rows, and low-variance columns. The score feeds both the
//! structural validator's info block and the dashboard's quality widget.

use polars::prelude::*;
use tracing::warn;

use crate::error::{AuditError, Result};
use crate::utils::non_null_unique;

/// Weight applied to the missing-cell ratio.
const MISSING_WEIGHT: f64 = 30.0;
/// Weight applied to the duplicate-row ratio.
const DUPLICATE_WEIGHT: f64 = 20.0;
/// Weight applied to the low-variance-column ratio.
const LOW_VARIANCE_WEIGHT: f64 = 15.0;

/// Neutral score returned when the computation fails internally. Callers
/// render the score regardless, so a failure must not read as either a
/// perfect or a hopeless dataset.
const FALLBACK_SCORE: f64 = 50.0;

/// Computes the 0-100 dataset quality score.
pub struct QualityScorer;

impl QualityScorer {
    /// Score a dataset in `[0, 100]`.
    ///
    /// Starts at 100 and subtracts weighted penalties for missing cells,
    /// duplicate rows, and columns with at most one distinct non-missing
    /// value. Empty input scores 0; an internal failure yields the
    /// documented neutral fallback of 50.
    pub fn score(df: &DataFrame) -> f64 {
        if df.height() == 0 || df.width() == 0 {
            return 0.0;
        }

        match Self::score_inner(df) {
            Ok(score) => score,
            Err(e) => {
                let e = AuditError::ScoringFailed(e.to_string());
                warn!("{e}, using neutral fallback");
                FALLBACK_SCORE
            }
        }
    }

    fn score_inner(df: &DataFrame) -> Result<f64> {
        let rows = df.height();
        let cols = df.width();
        let total_cells = (rows * cols) as f64;

        let missing_cells: usize = df
            .get_columns()
            .iter()
            .map(|c| c.as_materialized_series().null_count())
            .sum();
        let missing_ratio = missing_cells as f64 / total_cells;

        let duplicate_rows = Self::duplicate_row_count(df)?;
        let duplicate_ratio = duplicate_rows as f64 / rows as f64;

        let low_variance_cols = df
            .get_columns()
            .iter()
            .map(|c| non_null_unique(c.as_materialized_series()))
            .collect::<PolarsResult<Vec<_>>>()?
            .into_iter()
            .filter(|&unique| unique <= 1)
            .count();
        let low_variance_ratio = low_variance_cols as f64 / cols as f64;

        let score = 100.0
            - missing_ratio * MISSING_WEIGHT
            - duplicate_ratio * DUPLICATE_WEIGHT
            - low_variance_ratio * LOW_VARIANCE_WEIGHT;

        Ok(score.clamp(0.0, 100.0))
    }

    /// Rows whose full value tuple equals an earlier row's.
    pub(crate) fn duplicate_row_count(df: &DataFrame) -> Result<usize> {
        let deduped = df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?;
        Ok(df.height() - deduped.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_dataset_scores_100() {
        let df = df![
            "a" => [1i64, 2, 3, 4],
            "b" => ["w", "x", "y", "z"],
        ]
        .unwrap();

        assert_eq!(QualityScorer::score(&df), 100.0);
    }

    #[test]
    fn test_empty_dataset_scores_0() {
        let df = DataFrame::empty();
        assert_eq!(QualityScorer::score(&df), 0.0);
    }

    #[test]
    fn test_missing_penalty() {
        // 2 missing of 8 cells: 100 - 30 * 0.25 = 92.5
        let df = df![
            "a" => [Some(1i64), None, Some(3), Some(4)],
            "b" => [Some("w"), Some("x"), None, Some("z")],
        ]
        .unwrap();

        let score = QualityScorer::score(&df);
        assert!((score - 92.5).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_penalty() {
        // 1 duplicate of 4 rows: 100 - 20 * 0.25 = 95
        let df = df![
            "a" => [1i64, 2, 3, 1],
            "b" => ["x", "y", "z", "x"],
        ]
        .unwrap();

        let score = QualityScorer::score(&df);
        assert!((score - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_variance_penalty() {
        // 1 constant column of 2: 100 - 15 * 0.5 = 92.5
        let df = df![
            "constant" => [7i64, 7, 7, 7],
            "varied" => [1i64, 2, 3, 4],
        ]
        .unwrap();

        let score = QualityScorer::score(&df);
        assert!((score - 92.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        // All defects at once still stays within [0, 100].
        let df = df![
            "a" => [None::<i64>, None, None, None],
            "b" => [Some(1i64), Some(1), Some(1), Some(1)],
        ]
        .unwrap();

        let score = QualityScorer::score(&df);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_all_null_column_counts_as_low_variance() {
        // The all-null column has zero distinct non-missing values.
        let df = df![
            "empty" => [None::<i64>, None],
            "full" => [1i64, 2],
        ]
        .unwrap();

        // missing: 2/4 cells -> -15; low variance: 1/2 cols -> -7.5
        let score = QualityScorer::score(&df);
        assert!((score - 77.5).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_row_count() {
        let df = df![
            "a" => [1i64, 1, 2, 1],
        ]
        .unwrap();
        assert_eq!(QualityScorer::duplicate_row_count(&df).unwrap(), 2);
    }
}
