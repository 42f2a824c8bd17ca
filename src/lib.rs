//! Data Validation and Profiling Engine
//!
//! A Polars-backed audit layer for spreadsheet-style tabular data.
//!
//! # Overview
//!
//! This library provides the analysis stages a data dashboard runs after
//! ingesting a sheet:
//!
//! - **Structural Validation**: Duplicate headers, empty and mostly-missing
//!   columns, and text columns hiding numeric or date data
//! - **Quality Scoring**: A single 0-100 score from missing, duplicate, and
//!   low-variance ratios
//! - **Data Profiling**: Dataset overview plus per-column statistics with
//!   type-aware numeric and text blocks
//! - **Outlier Detection**: IQR and z-score methods over numeric columns
//! - **Type Advice**: Narrowing suggestions for text columns that parse as
//!   integers, floats, dates, or booleans
//! - **Recommendations**: Remediation hints derived from the profile
//! - **Cleaning**: Basic, aggressive, and smart missing-data strategies
//! - **Field Validators**: Email, phone, URL, and date format checks
//!
//! Every public entry point degrades instead of failing: a bad dataset
//! produces a report describing the problem, never an error the caller has
//! to unwind.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sheet_audit::{AuditConfig, Cleaner, DataProfiler, StructuralValidator};
//! use sheet_audit::types::CleaningStrategy;
//! use polars::prelude::*;
//!
//! let df = CsvReader::from_path("sheet.csv")?.finish()?;
//!
//! let report = StructuralValidator::default().validate(Some(&df));
//! if !report.is_valid {
//!     for error in &report.errors {
//!         eprintln!("error: {error}");
//!     }
//! }
//!
//! let profile = DataProfiler::default().profile(&df);
//! println!("quality issues: {:?}", profile.recommendations);
//!
//! let cleaned = Cleaner::default().clean(&df, CleaningStrategy::Smart);
//! ```
//!
//! # Configuration
//!
//! All thresholds live in [`AuditConfig`]:
//!
//! ```rust,ignore
//! use sheet_audit::AuditConfig;
//!
//! let config = AuditConfig::builder()
//!     .high_missing_threshold(0.4)    // Warn past 40% missing per column
//!     .iqr_multiplier(3.0)            // Wider outlier fences
//!     .smart_column_threshold(0.9)    // Smart clean drops >90% missing cols
//!     .build()?;
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod fields;
pub mod profiler;
pub mod quality;
pub mod recommend;
pub mod types;
pub mod utils;
pub mod validator;

pub use cleaner::Cleaner;
pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use fields::{validate_date, validate_date_with, validate_email, validate_phone, validate_url};
pub use profiler::{DataProfiler, OutlierDetector, TypeAdvisor};
pub use quality::QualityScorer;
pub use recommend::RecommendationEngine;
pub use types::{
    CleaningStrategy, ColumnProfile, ColumnStats, DataProfile, DatasetInfo, DatasetOverview,
    NumericStats, OutlierMethod, TextStats, TypeSuggestion, ValidationReport,
};
pub use validator::{StructuralValidator, duplicate_names};
