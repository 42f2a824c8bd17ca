//! Report value objects returned by the engine.
//!
//! Every type here is constructed fresh per call, owned by the caller, and
//! serializable for display or IPC. Nothing is cached between calls.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Result of a structural validation pass over a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff no errors were recorded. Warnings and suggestions never
    /// affect validity.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Dataset facts; `None` for null/empty input or on internal failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<DatasetInfo>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    /// Report for null or zero-row input: exactly one error, one suggestion.
    pub fn empty_input() -> Self {
        Self {
            is_valid: false,
            errors: vec!["Dataset is empty or null".to_string()],
            warnings: Vec::new(),
            info: None,
            suggestions: vec!["Provide a dataset with at least one row".to_string()],
        }
    }

    /// Degraded report for an internal validation failure.
    pub fn failed(message: impl fmt::Display) -> Self {
        Self {
            is_valid: false,
            errors: vec![format!("Validation error: {message}")],
            warnings: Vec::new(),
            info: None,
            suggestions: vec!["Check the dataset format".to_string()],
        }
    }
}

/// Dataset facts gathered during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// (rows, columns)
    pub shape: (usize, usize),
    pub columns: Vec<String>,
    /// Column name to storage dtype, as rendered by polars.
    pub dtypes: HashMap<String, String>,
    /// Approximate in-memory footprint in bytes.
    pub memory_usage_bytes: usize,
    /// Column name to missing-value count.
    pub missing_counts: HashMap<String, usize>,
    /// Overall quality score in [0, 100].
    pub quality_score: f64,
}

/// Full statistical profile of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataProfile {
    pub overview: DatasetOverview,
    pub columns: HashMap<String, ColumnProfile>,
    /// Reserved for cross-column analysis; always empty in this version.
    pub correlations: HashMap<String, serde_json::Value>,
    pub recommendations: Vec<String>,
}

impl DataProfile {
    /// Empty profile, used as the fallback when profiling fails internally.
    pub fn empty() -> Self {
        Self {
            overview: DatasetOverview::default(),
            columns: HashMap::new(),
            correlations: HashMap::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Whole-dataset aggregates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    pub missing_cells: usize,
    pub missing_percentage: f64,
    pub duplicate_rows: usize,
    pub memory_usage_mb: f64,
}

/// Per-column profile: shared fields plus a type-conditional extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Storage dtype as rendered by polars.
    pub dtype: String,
    pub missing_count: usize,
    pub missing_percentage: f64,
    /// Distinct non-missing values.
    pub unique_count: usize,
    pub unique_percentage: f64,
    /// Numeric or text statistics, depending on the column's storage kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ColumnStats>,
}

/// Type-conditional statistics block of a [`ColumnProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric(NumericStats),
    Text(TextStats),
}

/// Statistics for numeric-kind columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub zeros_count: usize,
    pub outliers_count: usize,
}

/// Length statistics over the string rendering of text-kind columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub avg_length: f64,
    pub max_length: usize,
    pub min_length: usize,
}

/// A suggested semantic type for a column.
///
/// The closed set of suggestions keeps the dashboard's conversion offers
/// predictable: a concrete target type, or the column's current dtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSuggestion {
    /// Integer-shaped values stored as text.
    Integer,
    /// Numeric values with a fractional part stored as text.
    Float,
    /// `YYYY-MM-DD`-shaped values stored as text.
    Datetime,
    /// Boolean literals stored as text.
    Boolean,
    /// Keep the current storage dtype (the contained string).
    Keep(String),
}

impl TypeSuggestion {
    /// Label used in reports and recommendations.
    pub fn label(&self) -> &str {
        match self {
            Self::Integer => "int64",
            Self::Float => "float64",
            Self::Datetime => "datetime64[ns]",
            Self::Boolean => "bool",
            Self::Keep(dtype) => dtype,
        }
    }

    /// True when the suggestion names a concrete conversion target.
    pub fn is_conversion(&self) -> bool {
        !matches!(self, Self::Keep(_))
    }
}

impl fmt::Display for TypeSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TypeSuggestion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TypeSuggestion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(match label.as_str() {
            "int64" => Self::Integer,
            "float64" => Self::Float,
            "datetime64[ns]" => Self::Datetime,
            "bool" => Self::Boolean,
            _ => Self::Keep(label),
        })
    }
}

/// Statistical method for outlier detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutlierMethod {
    /// Flag values outside `[Q1 - k*IQR, Q3 + k*IQR]`.
    #[default]
    Iqr,
    /// Flag values whose z-score exceeds the configured cutoff.
    ZScore,
}

/// Named cleaning strategy applied by [`crate::cleaner::Cleaner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStrategy {
    /// Drop all-missing rows, then all-missing columns.
    #[default]
    Basic,
    /// Drop any row containing at least one missing value.
    Aggressive,
    /// Drop high-missing columns, then high-missing rows.
    Smart,
}

impl CleaningStrategy {
    /// Strategy name as accepted by [`crate::cleaner::Cleaner::clean_named`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Aggressive => "aggressive",
            Self::Smart => "smart",
        }
    }
}

impl FromStr for CleaningStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "aggressive" => Ok(Self::Aggressive),
            "smart" => Ok(Self::Smart),
            _ => Err(()),
        }
    }
}
