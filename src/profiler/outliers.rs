//! Per-column outlier detection.

use polars::prelude::*;
use tracing::{debug, warn};

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::types::OutlierMethod;
use crate::utils::{DtypeKind, numeric_values_indexed, series_kind};

/// Minimum non-missing sample size for a meaningful detection.
const MIN_SAMPLE: usize = 4;

/// Detects statistical outliers in numeric columns.
pub struct OutlierDetector {
    iqr_multiplier: f64,
    zscore_cutoff: f64,
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self::new(&AuditConfig::default())
    }
}

impl OutlierDetector {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            iqr_multiplier: config.iqr_multiplier,
            zscore_cutoff: config.zscore_cutoff,
        }
    }

    /// Detect outliers in a column, returning the original row indices of
    /// flagged values in ascending order.
    ///
    /// Non-numeric columns and columns with fewer than four non-missing
    /// values yield an empty result. Missing rows are never flagged.
    /// Internal failure also degrades to an empty result.
    pub fn detect(&self, series: &Series, method: OutlierMethod) -> Vec<usize> {
        if !matches!(series_kind(series), DtypeKind::Integer | DtypeKind::Float) {
            return Vec::new();
        }

        match self.detect_inner(series, method) {
            Ok(indices) => indices,
            Err(e) => {
                warn!(
                    "Outlier detection failed for column '{}': {e}",
                    series.name()
                );
                Vec::new()
            }
        }
    }

    /// Detect outliers in a named column of a dataset.
    ///
    /// Same contract as [`detect`](Self::detect); a missing column degrades
    /// to an empty result with a log entry rather than an error.
    pub fn detect_column(
        &self,
        df: &DataFrame,
        column: &str,
        method: OutlierMethod,
    ) -> Vec<usize> {
        match self.lookup(df, column) {
            Ok(series) => self.detect(&series, method),
            Err(e) => {
                debug!("Outlier detection skipped: {e}");
                Vec::new()
            }
        }
    }

    fn lookup(&self, df: &DataFrame, column: &str) -> Result<Series> {
        df.column(column)
            .map(|c| c.as_materialized_series().clone())
            .map_err(|_| AuditError::ColumnNotFound(column.to_string()))
    }

    fn detect_inner(&self, series: &Series, method: OutlierMethod) -> Result<Vec<usize>> {
        let values = numeric_values_indexed(series)?;
        if values.len() < MIN_SAMPLE {
            return Ok(Vec::new());
        }

        Ok(match method {
            OutlierMethod::Iqr => self.detect_iqr(&values),
            OutlierMethod::ZScore => self.detect_zscore(&values),
        })
    }

    fn detect_iqr(&self, values: &[(usize, f64)]) -> Vec<usize> {
        let mut sorted: Vec<f64> = values.iter().map(|&(_, v)| v).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let q1 = sorted[(n as f64 * 0.25) as usize];
        let q3 = sorted[(n as f64 * 0.75) as usize];
        let iqr = q3 - q1;

        let lower_bound = q1 - self.iqr_multiplier * iqr;
        let upper_bound = q3 + self.iqr_multiplier * iqr;

        values
            .iter()
            .filter(|&&(_, v)| v < lower_bound || v > upper_bound)
            .map(|&(idx, _)| idx)
            .collect()
    }

    fn detect_zscore(&self, values: &[(usize, f64)]) -> Vec<usize> {
        let n = values.len() as f64;
        let mean = values.iter().map(|&(_, v)| v).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&(_, v)| (v - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        let std = variance.sqrt();

        // A constant column has no spread; flagging everything (or dividing
        // by zero) would be spurious.
        if std == 0.0 {
            return Vec::new();
        }

        values
            .iter()
            .filter(|&&(_, v)| ((v - mean) / std).abs() > self.zscore_cutoff)
            .map(|&(idx, _)| idx)
            .collect()
    }
}
