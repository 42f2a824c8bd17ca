//! Column statistics helpers for profiling.

use polars::prelude::*;

use crate::error::Result;
use crate::profiler::outliers::OutlierDetector;
use crate::types::{NumericStats, OutlierMethod, TextStats};
use crate::utils::numeric_values_indexed;

/// Compute the numeric statistics block for a column.
///
/// Returns `None` when the column has no non-missing values.
pub(crate) fn numeric_stats(
    series: &Series,
    detector: &OutlierDetector,
) -> Result<Option<NumericStats>> {
    let values: Vec<f64> = numeric_values_indexed(series)?
        .into_iter()
        .map(|(_, v)| v)
        .collect();
    if values.is_empty() {
        return Ok(None);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = sample_std(&values, mean);
    let median = median_of(&values);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let zeros_count = values.iter().filter(|&&v| v == 0.0).count();
    let outliers_count = detector.detect(series, OutlierMethod::Iqr).len();

    Ok(Some(NumericStats {
        mean,
        median,
        std,
        min,
        max,
        zeros_count,
        outliers_count,
    }))
}

/// Compute the text-length statistics block for a column.
///
/// Lengths are measured in characters over the string rendering of each
/// non-missing value. Returns `None` when the column has no non-missing
/// values.
pub(crate) fn text_stats(series: &Series) -> Result<Option<TextStats>> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Ok(None);
    }

    let strings = non_null.cast(&DataType::String)?;
    let ca = strings.str()?;

    let lengths: Vec<usize> = ca
        .into_iter()
        .flatten()
        .map(|s| s.chars().count())
        .collect();

    let avg_length = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    let max_length = lengths.iter().copied().max().unwrap_or(0);
    let min_length = lengths.iter().copied().min().unwrap_or(0);

    Ok(Some(TextStats {
        avg_length,
        max_length,
        min_length,
    }))
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than two values.
pub(crate) fn sample_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Median of a non-empty slice; even-length slices average the middle pair.
pub(crate) fn median_of(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
