//! Semantic type suggestion for text-stored columns.
//!
//! Spreadsheet imports arrive with most columns stored as text; this pass
//! inspects the contents of Text-kind columns and proposes a better-fitting
//! type. Advisory only: the dataset is never mutated here.

use polars::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;
use crate::types::TypeSuggestion;
use crate::utils::{
    DtypeKind, is_boolean_literal, is_date_shaped, is_integer_string, is_numeric_string,
    series_kind,
};

/// Suggests semantic types for dataset columns.
pub struct TypeAdvisor;

impl TypeAdvisor {
    /// Suggest a semantic type for every column.
    ///
    /// Columns already stored with a specific type pass through unchanged;
    /// only Text-kind columns are probed. A column whose probe fails keeps
    /// its current dtype.
    pub fn suggest_types(df: &DataFrame) -> HashMap<String, TypeSuggestion> {
        let mut suggestions = HashMap::with_capacity(df.width());

        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let name = series.name().to_string();
            let suggestion = match Self::suggest_column(series) {
                Ok(suggestion) => suggestion,
                Err(e) => {
                    debug!("Type probe failed for column '{name}', keeping dtype: {e}");
                    Self::keep(series)
                }
            };
            suggestions.insert(name, suggestion);
        }

        suggestions
    }

    fn suggest_column(series: &Series) -> Result<TypeSuggestion> {
        if series_kind(series) != DtypeKind::Text {
            return Ok(Self::keep(series));
        }

        let non_null = series.drop_nulls();
        if non_null.is_empty() {
            return Ok(Self::keep(series));
        }

        let strings = non_null.cast(&DataType::String)?;
        let ca = strings.str()?;

        let mut all_numeric = true;
        let mut all_integer = true;
        let mut any_date_shaped = false;
        let mut all_boolean = true;

        for value in ca.into_iter().flatten() {
            if all_numeric && !is_numeric_string(value) {
                all_numeric = false;
            }
            if all_integer && !is_integer_string(value) {
                all_integer = false;
            }
            if !any_date_shaped && is_date_shaped(value) {
                any_date_shaped = true;
            }
            if all_boolean && !is_boolean_literal(value) {
                all_boolean = false;
            }
        }

        // Checks ordered by specificity; the first match wins.
        let suggestion = if all_numeric {
            if all_integer {
                TypeSuggestion::Integer
            } else {
                TypeSuggestion::Float
            }
        } else if any_date_shaped {
            TypeSuggestion::Datetime
        } else if all_boolean {
            TypeSuggestion::Boolean
        } else {
            Self::keep(series)
        };

        Ok(suggestion)
    }

    fn keep(series: &Series) -> TypeSuggestion {
        TypeSuggestion::Keep(format!("{:?}", series.dtype()))
    }
}
