//! # Estimate Form State
//!
//! The state behind the dimensions form: three raw text fields and the
//! last result shown. Both front-ends drive the same holder so Calculate
//! and Clear behave identically everywhere.
//!
//! A rejected Calculate is a no-op. The previous result (or its absence)
//! stays exactly as it was and nothing is reported to the user.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::DimensionField;
//! use calc_core::form::EstimateForm;
//!
//! let mut form = EstimateForm::new();
//! form.set_field(DimensionField::Length, "10");
//! form.set_field(DimensionField::Width, "10");
//! assert!(!form.can_calculate());
//!
//! form.set_field(DimensionField::Depth, "0.5");
//! assert_eq!(form.calculate().map(|r| r.bags_60lb), Some(112));
//!
//! form.clear();
//! assert!(form.result().is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::concrete::{self, ConcreteInput, ConcreteResult, DimensionField};
use crate::errors::CalcResult;

/// Text fields and held result of the estimate form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateForm {
    length: String,
    width: String,
    depth: String,
    result: Option<ConcreteResult>,
}

impl EstimateForm {
    /// Empty form with no result
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field
    pub fn field(&self, field: DimensionField) -> &str {
        match field {
            DimensionField::Length => &self.length,
            DimensionField::Width => &self.width,
            DimensionField::Depth => &self.depth,
        }
    }

    /// Replace the text of a field. The held result is left alone.
    pub fn set_field(&mut self, field: DimensionField, text: impl Into<String>) {
        let slot = match field {
            DimensionField::Length => &mut self.length,
            DimensionField::Width => &mut self.width,
            DimensionField::Depth => &mut self.depth,
        };
        *slot = text.into();
    }

    /// Whether Calculate is enabled: every field has some text.
    pub fn can_calculate(&self) -> bool {
        DimensionField::ALL
            .iter()
            .all(|&f| !self.field(f).trim().is_empty())
    }

    /// Validated input built from the current text.
    pub fn input(&self) -> CalcResult<ConcreteInput> {
        ConcreteInput::from_text(&self.length, &self.width, &self.depth)
    }

    /// Run the estimate on the current text.
    ///
    /// On success the new result replaces the held one and is returned.
    /// On any failure nothing changes and `None` is returned.
    pub fn calculate(&mut self) -> Option<&ConcreteResult> {
        if !self.can_calculate() {
            tracing::debug!("calculate ignored: a dimension is empty");
            return None;
        }

        match self.input().and_then(|input| concrete::calculate(&input)) {
            Ok(result) => {
                self.result = Some(result);
                self.result.as_ref()
            }
            Err(e) => {
                tracing::debug!(code = e.error_code(), "calculate ignored: {}", e);
                None
            }
        }
    }

    /// Empty all three fields and drop the held result.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Result currently held, if any
    pub fn result(&self) -> Option<&ConcreteResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(l: &str, w: &str, d: &str) -> EstimateForm {
        let mut form = EstimateForm::new();
        form.set_field(DimensionField::Length, l);
        form.set_field(DimensionField::Width, w);
        form.set_field(DimensionField::Depth, d);
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = EstimateForm::new();
        for f in DimensionField::ALL {
            assert_eq!(form.field(f), "");
        }
        assert!(form.result().is_none());
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_calculate_stores_result() {
        let mut form = filled("10", "10", "0.5");
        let result = *form.calculate().unwrap();
        assert_eq!(result.cubic_feet, 50.0);
        assert_eq!(form.result(), Some(&result));
    }

    #[test]
    fn test_gate_requires_all_fields() {
        let mut form = filled("10", "", "0.5");
        assert!(!form.can_calculate());
        assert!(form.calculate().is_none());

        form.set_field(DimensionField::Width, "  ");
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_invalid_input_keeps_previous_result() {
        let mut form = filled("10", "10", "0.5");
        let previous = *form.calculate().unwrap();

        for bad in ["0", "-2", "abc", ""] {
            form.set_field(DimensionField::Length, bad);
            assert!(form.calculate().is_none());
            assert_eq!(form.result(), Some(&previous));
        }
    }

    #[test]
    fn test_uncountable_bags_keep_previous_result() {
        let mut form = filled("1", "1", "1");
        let previous = *form.calculate().unwrap();

        for field in DimensionField::ALL {
            form.set_field(field, "1e7");
        }
        assert!(form.calculate().is_none());
        assert_eq!(form.result(), Some(&previous));
    }

    #[test]
    fn test_invalid_input_on_empty_result_stays_empty() {
        let mut form = filled("0", "5", "5");
        assert!(form.calculate().is_none());
        assert!(form.result().is_none());
    }

    #[test]
    fn test_editing_fields_keeps_result() {
        let mut form = filled("1", "1", "1");
        form.calculate();
        form.set_field(DimensionField::Depth, "4");
        assert_eq!(form.result().unwrap().cubic_feet, 1.0);
    }

    #[test]
    fn test_recalculate_replaces_result() {
        let mut form = filled("1", "1", "1");
        form.calculate();
        form.set_field(DimensionField::Length, "27");
        let result = form.calculate().unwrap();
        assert_eq!(result.cubic_yards, 1.0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled("10", "10", "0.5");
        form.calculate();
        form.clear();
        assert_eq!(form, EstimateForm::new());
        assert!(form.result().is_none());
        assert_eq!(form.field(DimensionField::Depth), "");
    }

    #[test]
    fn test_idempotent_calculate() {
        let mut form = filled("3.3", "4.4", "0.25");
        let first = *form.calculate().unwrap();
        let second = *form.calculate().unwrap();
        assert_eq!(first, second);
    }
}
