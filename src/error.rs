//! Error types for the validation and profiling engine.
//!
//! Internal functions return `Result<T, AuditError>` so failures compose;
//! the public entry points convert any error into the component's documented
//! fallback value (degraded report, neutral score, empty list) instead of
//! propagating it. Errors are serializable as `{code, message}` so a caller
//! can forward them to a frontend unchanged.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for validation and profiling operations.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Dataset was null or had zero rows.
    #[error("Dataset is empty or null")]
    EmptyInput,

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Quality score computation failed.
    #[error("Failed to compute quality score: {0}")]
    ScoringFailed(String),

    /// Data profiling failed.
    #[error("Failed to profile dataset: {0}")]
    ProfilingFailed(String),

    /// Cleaning transform failed.
    #[error("Failed to clean data: {0}")]
    CleaningFailed(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AuditError>,
    },
}

impl AuditError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AuditError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::ScoringFailed(_) => "SCORING_FAILED",
            Self::ProfilingFailed(_) => "PROFILING_FAILED",
            Self::CleaningFailed(_) => "CLEANING_FAILED",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Whether this error describes the input rather than an internal fault.
    ///
    /// Empty or malformed input gets an explicit entry in the returned
    /// report; everything else degrades to the component's fallback value.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::ColumnNotFound(_) | Self::InvalidConfig(_)
        )
    }
}

/// Errors serialize as a struct with `code` and `message` fields.
impl Serialize for AuditError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AuditError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AuditError::Polars(e).with_context(context))
    }
}
