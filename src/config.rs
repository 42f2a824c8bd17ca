//! Configuration for the validation and profiling engine.
//!
//! All thresholds the engine applies are collected here with a builder
//! for ergonomic setup. The defaults reproduce the behavior existing
//! dashboard callers depend on.

use serde::{Deserialize, Serialize};

/// Default chrono format strings tried by [`crate::fields::validate_date`]
/// and by [`AuditConfig::date_formats`]: ISO, US, EU, and datetime variants.
pub const DEFAULT_DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d-%m-%Y",
    "%Y/%m/%d",
];

/// Thresholds and options for validation, profiling, and cleaning.
///
/// Use [`AuditConfig::builder()`] for fluent construction:
///
/// ```rust,ignore
/// use sheet_audit::AuditConfig;
///
/// let config = AuditConfig::builder()
///     .high_missing_threshold(0.4)
///     .memory_warning_mb(250.0)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Missing-value ratio above which a column gets a validation warning.
    /// Default: 0.5 (50%)
    pub high_missing_threshold: f64,

    /// Missing percentage above which the recommendation engine suggests
    /// removing a column. Default: 50.0
    pub recommend_remove_pct: f64,

    /// Missing percentage above which the recommendation engine suggests
    /// reviewing a column. Default: 20.0
    pub recommend_review_pct: f64,

    /// Unique percentage below which a column counts as low variance.
    /// Default: 1.0
    pub low_variance_pct: f64,

    /// Column missing ratio above which the `smart` cleaning strategy drops
    /// the column. Default: 0.8
    pub smart_column_threshold: f64,

    /// Row missing ratio above which the `smart` cleaning strategy drops
    /// the row. Default: 0.5
    pub smart_row_threshold: f64,

    /// IQR multiplier for outlier bounds. Default: 1.5
    pub iqr_multiplier: f64,

    /// Z-score above which a value is flagged as an outlier. Default: 3.0
    pub zscore_cutoff: f64,

    /// Memory footprint in MB above which the recommendation engine suggests
    /// type optimization. Default: 100.0
    pub memory_warning_mb: f64,

    /// Ordered list of chrono format strings for date field validation.
    /// First match wins. Default: [`DEFAULT_DATE_FORMATS`]
    pub date_formats: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            high_missing_threshold: 0.5,
            recommend_remove_pct: 50.0,
            recommend_review_pct: 20.0,
            low_variance_pct: 1.0,
            smart_column_threshold: 0.8,
            smart_row_threshold: 0.5,
            iqr_multiplier: 1.5,
            zscore_cutoff: 3.0,
            memory_warning_mb: 100.0,
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AuditConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("high_missing_threshold", self.high_missing_threshold),
            ("smart_column_threshold", self.smart_column_threshold),
            ("smart_row_threshold", self.smart_row_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidRatio {
                    field: field.to_string(),
                    value,
                });
            }
        }

        for (field, value) in [
            ("recommend_remove_pct", self.recommend_remove_pct),
            ("recommend_review_pct", self.recommend_review_pct),
            ("low_variance_pct", self.low_variance_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigValidationError::InvalidPercentage {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.recommend_review_pct > self.recommend_remove_pct {
            return Err(ConfigValidationError::ThresholdOrder {
                review: self.recommend_review_pct,
                remove: self.recommend_remove_pct,
            });
        }

        if self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::NonPositive {
                field: "iqr_multiplier".to_string(),
                value: self.iqr_multiplier,
            });
        }

        if self.zscore_cutoff <= 0.0 {
            return Err(ConfigValidationError::NonPositive {
                field: "zscore_cutoff".to_string(),
                value: self.zscore_cutoff,
            });
        }

        if self.date_formats.is_empty() {
            return Err(ConfigValidationError::EmptyDateFormats);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid ratio for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidRatio { field: String, value: f64 },

    #[error("Invalid percentage for '{field}': {value} (must be between 0.0 and 100.0)")]
    InvalidPercentage { field: String, value: f64 },

    #[error("Review threshold {review} must not exceed removal threshold {remove}")]
    ThresholdOrder { review: f64, remove: f64 },

    #[error("'{field}' must be positive, got {value}")]
    NonPositive { field: String, value: f64 },

    #[error("Date format list must not be empty")]
    EmptyDateFormats,
}

/// Builder for [`AuditConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AuditConfigBuilder {
    high_missing_threshold: Option<f64>,
    recommend_remove_pct: Option<f64>,
    recommend_review_pct: Option<f64>,
    low_variance_pct: Option<f64>,
    smart_column_threshold: Option<f64>,
    smart_row_threshold: Option<f64>,
    iqr_multiplier: Option<f64>,
    zscore_cutoff: Option<f64>,
    memory_warning_mb: Option<f64>,
    date_formats: Option<Vec<String>>,
}

impl AuditConfigBuilder {
    /// Missing ratio above which a column gets a validation warning.
    pub fn high_missing_threshold(mut self, threshold: f64) -> Self {
        self.high_missing_threshold = Some(threshold);
        self
    }

    /// Missing percentage above which column removal is recommended.
    pub fn recommend_remove_pct(mut self, pct: f64) -> Self {
        self.recommend_remove_pct = Some(pct);
        self
    }

    /// Missing percentage above which column review is recommended.
    pub fn recommend_review_pct(mut self, pct: f64) -> Self {
        self.recommend_review_pct = Some(pct);
        self
    }

    /// Unique percentage below which a column counts as low variance.
    pub fn low_variance_pct(mut self, pct: f64) -> Self {
        self.low_variance_pct = Some(pct);
        self
    }

    /// Column missing ratio for the `smart` cleaning strategy.
    pub fn smart_column_threshold(mut self, threshold: f64) -> Self {
        self.smart_column_threshold = Some(threshold);
        self
    }

    /// Row missing ratio for the `smart` cleaning strategy.
    pub fn smart_row_threshold(mut self, threshold: f64) -> Self {
        self.smart_row_threshold = Some(threshold);
        self
    }

    /// IQR multiplier for outlier bounds.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Z-score cutoff for outlier detection.
    pub fn zscore_cutoff(mut self, cutoff: f64) -> Self {
        self.zscore_cutoff = Some(cutoff);
        self
    }

    /// Memory footprint in MB that triggers an optimization recommendation.
    pub fn memory_warning_mb(mut self, mb: f64) -> Self {
        self.memory_warning_mb = Some(mb);
        self
    }

    /// Replace the date format list used by date field validation.
    pub fn date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_formats = Some(formats.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AuditConfig` or an error if validation fails.
    pub fn build(self) -> Result<AuditConfig, ConfigValidationError> {
        let defaults = AuditConfig::default();
        let config = AuditConfig {
            high_missing_threshold: self
                .high_missing_threshold
                .unwrap_or(defaults.high_missing_threshold),
            recommend_remove_pct: self
                .recommend_remove_pct
                .unwrap_or(defaults.recommend_remove_pct),
            recommend_review_pct: self
                .recommend_review_pct
                .unwrap_or(defaults.recommend_review_pct),
            low_variance_pct: self.low_variance_pct.unwrap_or(defaults.low_variance_pct),
            smart_column_threshold: self
                .smart_column_threshold
                .unwrap_or(defaults.smart_column_threshold),
            smart_row_threshold: self
                .smart_row_threshold
                .unwrap_or(defaults.smart_row_threshold),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            zscore_cutoff: self.zscore_cutoff.unwrap_or(defaults.zscore_cutoff),
            memory_warning_mb: self.memory_warning_mb.unwrap_or(defaults.memory_warning_mb),
            date_formats: self.date_formats.unwrap_or(defaults.date_formats),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuditConfig::default();
        assert_eq!(config.high_missing_threshold, 0.5);
        assert_eq!(config.recommend_remove_pct, 50.0);
        assert_eq!(config.recommend_review_pct, 20.0);
        assert_eq!(config.iqr_multiplier, 1.5);
        assert_eq!(config.zscore_cutoff, 3.0);
        assert_eq!(config.date_formats.len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults() {
        let config = AuditConfig::builder().build().unwrap();
        assert_eq!(config.smart_column_threshold, 0.8);
        assert_eq!(config.smart_row_threshold, 0.5);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = AuditConfig::builder()
            .high_missing_threshold(0.4)
            .recommend_remove_pct(60.0)
            .memory_warning_mb(250.0)
            .zscore_cutoff(2.5)
            .build()
            .unwrap();

        assert_eq!(config.high_missing_threshold, 0.4);
        assert_eq!(config.recommend_remove_pct, 60.0);
        assert_eq!(config.memory_warning_mb, 250.0);
        assert_eq!(config.zscore_cutoff, 2.5);
    }

    #[test]
    fn test_validation_invalid_ratio() {
        let result = AuditConfig::builder().high_missing_threshold(1.5).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidRatio { .. }
        ));
    }

    #[test]
    fn test_validation_threshold_order() {
        let result = AuditConfig::builder()
            .recommend_review_pct(70.0)
            .recommend_remove_pct(50.0)
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::ThresholdOrder { .. }
        ));
    }

    #[test]
    fn test_validation_empty_date_formats() {
        let result = AuditConfig::builder()
            .date_formats(Vec::<String>::new())
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyDateFormats
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = AuditConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AuditConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            config.high_missing_threshold,
            deserialized.high_missing_threshold
        );
        assert_eq!(config.date_formats, deserialized.date_formats);
    }
}
