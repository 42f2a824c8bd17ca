//! Dataset profiling.
//!
//! The profiler is the expensive full pass: whole-dataset aggregates, a
//! per-column statistical profile branched on storage kind, outlier counts,
//! and derived recommendations. Callers usually run the cheap
//! [`crate::validator::StructuralValidator`] gate first.

pub mod outliers;
mod statistics;
mod type_inference;

pub use outliers::OutlierDetector;
pub use type_inference::TypeAdvisor;

use polars::prelude::*;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::config::AuditConfig;
use crate::error::{AuditError, Result, ResultExt};
use crate::quality::QualityScorer;
use crate::recommend::RecommendationEngine;
use crate::types::{ColumnProfile, ColumnStats, DataProfile, DatasetOverview};
use crate::utils::{DtypeKind, non_null_unique, series_kind};

/// Produces a full statistical profile of a dataset.
pub struct DataProfiler {
    config: AuditConfig,
    detector: OutlierDetector,
}

impl Default for DataProfiler {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

impl DataProfiler {
    pub fn new(config: AuditConfig) -> Self {
        let detector = OutlierDetector::new(&config);
        Self { config, detector }
    }

    /// Profile a dataset.
    ///
    /// Never fails: an internal error degrades to [`DataProfile::empty`]
    /// so the caller always receives the full report shape.
    pub fn profile(&self, df: &DataFrame) -> DataProfile {
        match self.profile_inner(df) {
            Ok(profile) => profile,
            Err(e) if e.is_input_error() => {
                debug!("Profiling skipped: {e}");
                DataProfile::empty()
            }
            Err(e) => {
                let e = AuditError::ProfilingFailed(e.to_string());
                warn!("{e}, returning empty profile");
                DataProfile::empty()
            }
        }
    }

    fn profile_inner(&self, df: &DataFrame) -> Result<DataProfile> {
        let rows = df.height();
        let cols = df.width();
        if rows == 0 || cols == 0 {
            return Err(AuditError::EmptyInput);
        }

        let missing_cells: usize = df
            .get_columns()
            .iter()
            .map(|c| c.as_materialized_series().null_count())
            .sum();
        let total_cells = (rows * cols) as f64;

        let overview = DatasetOverview {
            rows,
            columns: cols,
            missing_cells,
            missing_percentage: missing_cells as f64 / total_cells * 100.0,
            duplicate_rows: QualityScorer::duplicate_row_count(df)?,
            memory_usage_mb: df.estimated_size() as f64 / 1024.0 / 1024.0,
        };

        let mut columns = HashMap::with_capacity(cols);
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let name = series.name().to_string();
            let profile = self
                .profile_column(series, rows)
                .context(format!("While profiling column '{name}'"))?;
            columns.insert(name, profile);
        }

        let mut profile = DataProfile {
            overview,
            columns,
            correlations: HashMap::new(),
            recommendations: Vec::new(),
        };
        profile.recommendations =
            RecommendationEngine::new(&self.config).generate(df, &profile);

        Ok(profile)
    }

    fn profile_column(&self, series: &Series, rows: usize) -> Result<ColumnProfile> {
        let missing_count = series.null_count();
        let unique_count = non_null_unique(series)?;

        let stats = match series_kind(series) {
            DtypeKind::Integer | DtypeKind::Float => {
                statistics::numeric_stats(series, &self.detector)?.map(ColumnStats::Numeric)
            }
            DtypeKind::Text => statistics::text_stats(series)?.map(ColumnStats::Text),
            _ => None,
        };

        Ok(ColumnProfile {
            dtype: format!("{:?}", series.dtype()),
            missing_count,
            missing_percentage: missing_count as f64 / rows as f64 * 100.0,
            unique_count,
            unique_percentage: unique_count as f64 / rows as f64 * 100.0,
            stats,
        })
    }
}
