//! Shared helpers for column inspection.
//!
//! The storage kind of a column is decided once from its polars dtype via
//! [`DtypeKind`]; heuristic content probing (numeric-in-text, date shapes,
//! boolean literals) only ever runs against [`DtypeKind::Text`] columns.

use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;

/// Storage kind of a column prior to semantic inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtypeKind {
    /// Integer storage (signed or unsigned)
    Integer,
    /// Floating point storage
    Float,
    /// Boolean storage
    Boolean,
    /// Date, datetime, or time storage
    Datetime,
    /// String or categorical storage; contents may need probing
    Text,
    /// Anything else (nested, binary, ...)
    Other,
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a datetime type.
#[inline]
pub fn is_datetime_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time
    )
}

/// Get the storage kind of a DataType.
pub fn dtype_kind(dtype: &DataType) -> DtypeKind {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => DtypeKind::Integer,
        DataType::Float32 | DataType::Float64 => DtypeKind::Float,
        DataType::Boolean => DtypeKind::Boolean,
        _ if is_datetime_dtype(dtype) => DtypeKind::Datetime,
        DataType::String | DataType::Categorical(_, _) => DtypeKind::Text,
        _ => DtypeKind::Other,
    }
}

/// Get the storage kind of a Series.
pub fn series_kind(series: &Series) -> DtypeKind {
    dtype_kind(series.dtype())
}

// Shape regexes, compiled once at startup.
static INTEGER_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+$").expect("Invalid regex: integer shape"));
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("Invalid regex: date shape"));

/// Check if a string parses as a number.
pub fn is_numeric_string(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Check if a string matches the integer-literal shape `^-?\d+$`.
pub fn is_integer_string(s: &str) -> bool {
    INTEGER_SHAPE.is_match(s.trim())
}

/// Check if a string starts with a `YYYY-MM-DD` date shape.
pub fn is_date_shaped(s: &str) -> bool {
    DATE_SHAPE.is_match(s.trim())
}

/// Boolean literals accepted by type suggestion.
pub const BOOLEAN_LITERALS: [&str; 6] = ["true", "false", "1", "0", "yes", "no"];

/// Check if a string is one of the accepted boolean literals (case-insensitive).
pub fn is_boolean_literal(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    BOOLEAN_LITERALS.iter().any(|&v| v == lower)
}

/// Non-null values of a Text-kind series as string slices, in row order.
///
/// Returns `None` when the series is not string-typed.
pub fn text_values(series: &Series) -> Option<Vec<&str>> {
    let ca = series.str().ok()?;
    Some(ca.into_iter().flatten().collect())
}

/// Non-null values of a numeric series as `(row_index, f64)` pairs.
pub fn numeric_values_indexed(series: &Series) -> PolarsResult<Vec<(usize, f64)>> {
    let float_series = series.cast(&DataType::Float64)?;
    let ca = float_series.f64()?;
    Ok(ca
        .into_iter()
        .enumerate()
        .filter_map(|(idx, v)| v.map(|val| (idx, val)))
        .collect())
}

/// Count non-null distinct values of a series.
///
/// Polars counts null as its own distinct value; callers here always want
/// nulls excluded, matching how unique counts are reported to the UI.
pub fn non_null_unique(series: &Series) -> PolarsResult<usize> {
    series.drop_nulls().n_unique()
}
