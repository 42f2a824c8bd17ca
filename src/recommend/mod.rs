//! Remediation recommendations derived from a data profile.
//!
//! Turns profile numbers into the human-readable suggestions the dashboard
//! shows next to the profile: which columns to drop or review, which to
//! convert, and whether the dataset as a whole needs attention. Every rule
//! is additive; only the remove/review pair per column is exclusive.

use polars::prelude::*;

use crate::config::AuditConfig;
use crate::profiler::TypeAdvisor;
use crate::types::DataProfile;

/// Derives remediation suggestions from a [`DataProfile`].
pub struct RecommendationEngine {
    config: AuditConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(&AuditConfig::default())
    }
}

impl RecommendationEngine {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Generate recommendations for a dataset and its profile.
    ///
    /// Per-column checks run first, then dataset-level checks; ordering
    /// beyond that grouping is not significant.
    pub fn generate(&self, df: &DataFrame, profile: &DataProfile) -> Vec<String> {
        let mut recommendations = Vec::new();

        for (name, column) in &profile.columns {
            if column.missing_percentage > self.config.recommend_remove_pct {
                recommendations.push(format!(
                    "Consider removing column '{name}' - {:.1}% missing data",
                    column.missing_percentage
                ));
            } else if column.missing_percentage > self.config.recommend_review_pct {
                recommendations.push(format!(
                    "Review column '{name}' - {:.1}% missing data",
                    column.missing_percentage
                ));
            }

            if column.unique_percentage < self.config.low_variance_pct {
                recommendations.push(format!(
                    "Column '{name}' has very low variance - consider removing"
                ));
            }
        }

        if profile.overview.duplicate_rows > 0 {
            recommendations.push(format!(
                "Remove {} duplicate rows",
                profile.overview.duplicate_rows
            ));
        }

        for (name, suggestion) in TypeAdvisor::suggest_types(df) {
            if suggestion.is_conversion() {
                recommendations.push(format!(
                    "Consider converting column '{name}' to {suggestion}"
                ));
            }
        }

        if profile.overview.memory_usage_mb > self.config.memory_warning_mb {
            recommendations
                .push("Consider optimizing data types to reduce memory usage".to_string());
        }

        recommendations
    }
}
