//! Dataset cleaning strategies.
//!
//! Three strategies over missing data: `basic` trims fully-empty rows and
//! columns, `aggressive` keeps only complete rows, and `smart` drops
//! columns and rows past configurable missing-ratio thresholds. Cleaning
//! never fails: on an internal error the input comes back unchanged.

use polars::prelude::*;
use tracing::warn;

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::types::CleaningStrategy;

/// Applies a [`CleaningStrategy`] to a dataset.
pub struct Cleaner {
    config: AuditConfig,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

impl Cleaner {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Clean a dataset with the given strategy.
    ///
    /// An empty input or an internal failure returns the input unchanged.
    pub fn clean(&self, df: &DataFrame, strategy: CleaningStrategy) -> DataFrame {
        if df.height() == 0 || df.width() == 0 {
            return df.clone();
        }

        let cleaned = match strategy {
            CleaningStrategy::Basic => self.clean_basic(df),
            CleaningStrategy::Aggressive => self.clean_aggressive(df),
            CleaningStrategy::Smart => self.clean_smart(df),
        };

        match cleaned {
            Ok(cleaned) => cleaned,
            Err(e) => {
                let e = AuditError::CleaningFailed(format!("strategy '{}': {e}", strategy.name()));
                warn!("{e}, returning data unchanged");
                df.clone()
            }
        }
    }

    /// Clean using a strategy named at runtime, e.g. from a request payload.
    ///
    /// An unrecognized name is not an error: the data comes back unchanged
    /// with a warning in the log.
    pub fn clean_named(&self, df: &DataFrame, strategy: &str) -> DataFrame {
        match strategy.parse::<CleaningStrategy>() {
            Ok(strategy) => self.clean(df, strategy),
            Err(_) => {
                warn!("Unknown cleaning strategy '{strategy}', returning data unchanged");
                df.clone()
            }
        }
    }

    /// Drop rows where every value is missing, then columns where every
    /// value is missing. Idempotent.
    fn clean_basic(&self, df: &DataFrame) -> Result<DataFrame> {
        let width = df.width();
        let keep: Vec<bool> = row_null_counts(df).iter().map(|&n| n < width).collect();
        let df = filter_rows(df, &keep)?;
        drop_columns_where(&df, |series| series.null_count() == df.height())
    }

    /// Keep only rows with no missing values.
    fn clean_aggressive(&self, df: &DataFrame) -> Result<DataFrame> {
        let keep: Vec<bool> = row_null_counts(df).iter().map(|&n| n == 0).collect();
        filter_rows(df, &keep)
    }

    /// Drop columns past the column missing-ratio threshold, then rows past
    /// the row threshold measured over the surviving columns.
    fn clean_smart(&self, df: &DataFrame) -> Result<DataFrame> {
        let rows = df.height() as f64;
        let df = drop_columns_where(df, |series| {
            series.null_count() as f64 / rows > self.config.smart_column_threshold
        })?;
        if df.width() == 0 {
            return Ok(df);
        }

        let width = df.width() as f64;
        let keep: Vec<bool> = row_null_counts(&df)
            .iter()
            .map(|&n| n as f64 / width <= self.config.smart_row_threshold)
            .collect();
        filter_rows(&df, &keep)
    }
}

/// Number of missing values in each row.
fn row_null_counts(df: &DataFrame) -> Vec<usize> {
    let mut counts = vec![0usize; df.height()];
    for col in df.get_columns() {
        let series = col.as_materialized_series();
        if series.null_count() == 0 {
            continue;
        }
        for (idx, is_null) in series.is_null().into_iter().enumerate() {
            if is_null == Some(true) {
                counts[idx] += 1;
            }
        }
    }
    counts
}

fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    if keep.iter().all(|&k| k) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}

fn drop_columns_where(df: &DataFrame, drop: impl Fn(&Series) -> bool) -> Result<DataFrame> {
    let kept: Vec<&str> = df
        .get_columns()
        .iter()
        .map(|c| c.as_materialized_series())
        .filter(|s| !drop(s))
        .map(|s| s.name().as_str())
        .collect();
    if kept.len() == df.width() {
        return Ok(df.clone());
    }
    Ok(df.select(kept)?)
}
