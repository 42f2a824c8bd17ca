//! Structural validation.
//!
//! Fast pre-flight checks run before any expensive profiling: duplicate
//! column names, all-null and mostly-missing columns, and text columns
//! whose contents look numeric or date-like. Each check is independent, so
//! one finding never masks another.

use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::config::AuditConfig;
use crate::error::Result;
use crate::quality::QualityScorer;
use crate::types::{DatasetInfo, ValidationReport};
use crate::utils::{DtypeKind, is_date_shaped, is_numeric_string, series_kind, text_values};

/// Returns the column names that appear more than once in `names`, in
/// first-seen order.
///
/// Polars rejects duplicate names at frame construction, so ingestion code
/// runs this over the raw header row before building a [`DataFrame`].
pub fn duplicate_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) && !duplicates.iter().any(|d| d == name) {
            duplicates.push(name.to_string());
        }
    }
    duplicates
}

/// Runs structural checks over a dataset and summarizes the findings.
pub struct StructuralValidator {
    config: AuditConfig,
}

impl Default for StructuralValidator {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

impl StructuralValidator {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Validate a dataset and produce a [`ValidationReport`].
    ///
    /// A missing or empty dataset yields the canonical empty-input report;
    /// an internal failure yields a degraded report carrying the error
    /// text. This method never fails outright.
    pub fn validate(&self, df: Option<&DataFrame>) -> ValidationReport {
        let Some(df) = df else {
            return ValidationReport::empty_input();
        };
        if df.height() == 0 || df.width() == 0 {
            return ValidationReport::empty_input();
        }

        match self.validate_inner(df) {
            Ok(report) => report,
            Err(e) => {
                warn!("Structural validation failed: {e}");
                ValidationReport::failed(e)
            }
        }
    }

    fn validate_inner(&self, df: &DataFrame) -> Result<ValidationReport> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        for name in duplicate_names(&names) {
            errors.push(format!("Duplicate column name: '{name}'"));
            suggestions.push(format!("Rename duplicate column '{name}'"));
        }

        let rows = df.height();
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let name = series.name();
            let null_count = series.null_count();

            if null_count == rows {
                warnings.push(format!("Column '{name}' is completely empty"));
                suggestions.push(format!("Consider removing empty column '{name}'"));
            } else if null_count as f64 / rows as f64 > self.config.high_missing_threshold {
                let pct = null_count as f64 / rows as f64 * 100.0;
                warnings.push(format!("Column '{name}' has {pct:.1}% missing values"));
                suggestions.push(format!(
                    "Review column '{name}' - consider removal or imputation"
                ));
            }

            if series_kind(series) == DtypeKind::Text {
                self.check_text_column(series, &mut suggestions);
            }
        }

        Ok(ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            info: Some(self.dataset_info(df)),
            suggestions,
        })
    }

    /// Flag text columns whose non-missing values all parse as numbers, or
    /// where any value matches a date shape. The two hints are independent.
    fn check_text_column(&self, series: &Series, suggestions: &mut Vec<String>) {
        let Some(values) = text_values(series) else {
            return;
        };
        if values.is_empty() {
            return;
        }
        let name = series.name();

        if values.iter().all(|v| is_numeric_string(v)) {
            suggestions.push(format!(
                "Column '{name}' appears to contain numeric data but is stored as text"
            ));
        }
        if values.iter().any(|v| is_date_shaped(v)) {
            suggestions.push(format!("Column '{name}' appears to contain dates"));
        }
    }

    fn dataset_info(&self, df: &DataFrame) -> DatasetInfo {
        let mut dtypes = HashMap::with_capacity(df.width());
        let mut missing_counts = HashMap::with_capacity(df.width());
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let name = series.name().to_string();
            dtypes.insert(name.clone(), format!("{:?}", series.dtype()));
            missing_counts.insert(name, series.null_count());
        }

        DatasetInfo {
            shape: (df.height(), df.width()),
            columns: df
                .get_column_names()
                .iter()
                .map(|n| n.to_string())
                .collect(),
            dtypes,
            memory_usage_bytes: df.estimated_size(),
            missing_counts,
            quality_score: QualityScorer::score(df),
        }
    }
}
