//! # Concrete Volume Estimate
//!
//! Converts slab/footing dimensions into a pour volume and the number of
//! premixed bags needed to fill it.
//!
//! ## Formulas
//!
//! Evaluated in exactly this order so results are reproducible:
//!
//! ```text
//! cubic_feet  = length * width * depth
//! cubic_yards = cubic_feet / 27
//! bags_60lb   = ceil(cubic_yards * 60)
//! bags_80lb   = ceil(cubic_yards * 45)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::concrete::{calculate, ConcreteInput};
//!
//! let input = ConcreteInput {
//!     length_ft: 10.0,
//!     width_ft: 10.0,
//!     depth_ft: 0.5,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.cubic_feet, 50.0);
//! assert_eq!(result.bags_60lb, 112);
//! assert_eq!(result.bags_80lb, 84);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::ConcreteBag;
use crate::units::{CubicFeet, CubicYards, Feet};

/// One of the three dimensions on the estimate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionField {
    Length,
    Width,
    Depth,
}

impl DimensionField {
    /// All fields in form order
    pub const ALL: [DimensionField; 3] = [
        DimensionField::Length,
        DimensionField::Width,
        DimensionField::Depth,
    ];

    /// Field key as it appears in JSON and error messages
    pub fn key(&self) -> &'static str {
        match self {
            DimensionField::Length => "length_ft",
            DimensionField::Width => "width_ft",
            DimensionField::Depth => "depth_ft",
        }
    }

    /// Form label
    pub fn display_name(&self) -> &'static str {
        match self {
            DimensionField::Length => "Length (feet)",
            DimensionField::Width => "Width (feet)",
            DimensionField::Depth => "Depth (feet)",
        }
    }
}

impl std::fmt::Display for DimensionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parse one dimension typed by the user.
///
/// Surrounding whitespace is ignored. The remainder must be a complete
/// decimal number that is finite and strictly positive.
pub fn parse_dimension(field: DimensionField, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field.key()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field.key(), trimmed, "Not a number"))?;

    check_dimension(field, value)?;
    Ok(value)
}

fn check_dimension(field: DimensionField, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field.key(),
            value.to_string(),
            "Dimension must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field.key(),
            value.to_string(),
            format!("{} must be greater than zero", field_noun(field)),
        ));
    }
    Ok(())
}

fn field_noun(field: DimensionField) -> &'static str {
    match field {
        DimensionField::Length => "Length",
        DimensionField::Width => "Width",
        DimensionField::Depth => "Depth",
    }
}

/// Input dimensions for a rectangular pour.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_ft": 10.0,
///   "width_ft": 10.0,
///   "depth_ft": 0.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteInput {
    /// Length in feet
    pub length_ft: f64,

    /// Width in feet
    pub width_ft: f64,

    /// Depth (thickness) in feet
    pub depth_ft: f64,
}

impl ConcreteInput {
    /// Build an input from the raw text of the three form fields.
    ///
    /// Fields are checked in form order and the first bad one is reported.
    pub fn from_text(length: &str, width: &str, depth: &str) -> CalcResult<Self> {
        Ok(ConcreteInput {
            length_ft: parse_dimension(DimensionField::Length, length)?,
            width_ft: parse_dimension(DimensionField::Width, width)?,
            depth_ft: parse_dimension(DimensionField::Depth, depth)?,
        })
    }

    /// Value of a single dimension
    pub fn get(&self, field: DimensionField) -> f64 {
        match field {
            DimensionField::Length => self.length_ft,
            DimensionField::Width => self.width_ft,
            DimensionField::Depth => self.depth_ft,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for field in DimensionField::ALL {
            check_dimension(field, self.get(field))?;
        }
        Ok(())
    }

    /// Volume of the pour in cubic feet
    pub fn volume(&self) -> CubicFeet {
        Feet(self.length_ft).cube_with(Feet(self.width_ft), Feet(self.depth_ft))
    }
}

/// Results from a concrete estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cubic_feet": 50.0,
///   "cubic_yards": 1.8518518518518519,
///   "bags_60lb": 112,
///   "bags_80lb": 84
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteResult {
    /// Pour volume in cubic feet (full precision)
    pub cubic_feet: f64,

    /// Pour volume in cubic yards (full precision)
    pub cubic_yards: f64,

    /// 60 lb bags needed, rounded up
    pub bags_60lb: u64,

    /// 80 lb bags needed, rounded up
    pub bags_80lb: u64,
}

impl ConcreteResult {
    /// Bag count for a given bag size
    pub fn bags(&self, bag: ConcreteBag) -> u64 {
        match bag {
            ConcreteBag::Lb60 => self.bags_60lb,
            ConcreteBag::Lb80 => self.bags_80lb,
        }
    }
}

/// Calculate pour volume and bag counts.
///
/// # Arguments
///
/// * `input` - Pour dimensions in feet
///
/// # Returns
///
/// * `Ok(ConcreteResult)` - Calculation results
/// * `Err(CalcError)` - If a dimension is not a positive finite number,
///   or the volume overflows
pub fn calculate(input: &ConcreteInput) -> CalcResult<ConcreteResult> {
    input.validate()?;

    let cubic_feet = input.volume();
    if !cubic_feet.0.is_finite() {
        return Err(CalcError::calculation_failed(
            "Concrete",
            "Volume is too large to represent",
        ));
    }
    let cubic_yards: CubicYards = cubic_feet.into();

    let bag_count = |bag: ConcreteBag| {
        bag.bags_for(cubic_yards).ok_or_else(|| {
            CalcError::calculation_failed(
                "Concrete",
                format!("{} count is too large to represent", bag.display_name()),
            )
        })
    };

    let result = ConcreteResult {
        cubic_feet: cubic_feet.0,
        cubic_yards: cubic_yards.0,
        bags_60lb: bag_count(ConcreteBag::Lb60)?,
        bags_80lb: bag_count(ConcreteBag::Lb80)?,
    };

    tracing::trace!(?input, ?result, "concrete estimate calculated");
    Ok(result)
}

/// Parse the three form fields and calculate, discarding the reason on failure.
///
/// This is the "no result" contract: any missing, non-numeric, zero,
/// negative or non-finite value yields `None`.
///
/// ```rust
/// use calc_core::calculations::concrete::estimate;
///
/// assert!(estimate("0", "5", "5").is_none());
/// assert_eq!(estimate("1", "1", "1").unwrap().bags_60lb, 3);
/// ```
pub fn estimate(length: &str, width: &str, depth: &str) -> Option<ConcreteResult> {
    let outcome = ConcreteInput::from_text(length, width, depth).and_then(|input| calculate(&input));
    match outcome {
        Ok(result) => Some(result),
        Err(e) => {
            tracing::debug!(code = e.error_code(), "estimate declined: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(l: f64, w: f64, d: f64) -> ConcreteInput {
        ConcreteInput {
            length_ft: l,
            width_ft: w,
            depth_ft: d,
        }
    }

    #[test]
    fn test_slab_estimate() {
        let result = calculate(&input(10.0, 10.0, 0.5)).unwrap();
        assert_eq!(result.cubic_feet, 50.0);
        assert!((result.cubic_yards - 1.8519).abs() < 1e-4);
        // 111.11 -> 112, 83.33 -> 84
        assert_eq!(result.bags_60lb, 112);
        assert_eq!(result.bags_80lb, 84);
    }

    #[test]
    fn test_one_cubic_foot() {
        let result = calculate(&input(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(result.cubic_feet, 1.0);
        assert!((result.cubic_yards - 0.0370).abs() < 1e-4);
        assert_eq!(result.bags_60lb, 3);
        assert_eq!(result.bags_80lb, 2);
    }

    #[test]
    fn test_formulas_are_exact() {
        let cases = [(12.5, 3.25, 0.333), (0.1, 0.2, 0.3), (40.0, 22.0, 0.75), (7.0, 9.0, 3.0)];
        for (l, w, d) in cases {
            let result = calculate(&input(l, w, d)).unwrap();
            let cubic_feet = l * w * d;
            let cubic_yards = cubic_feet / 27.0;
            assert_eq!(result.cubic_feet, cubic_feet);
            assert_eq!(result.cubic_yards, cubic_yards);
            assert_eq!(result.bags_60lb as f64, (cubic_yards * 60.0).ceil());
            assert_eq!(result.bags_80lb as f64, (cubic_yards * 45.0).ceil());
        }
    }

    #[test]
    fn test_exact_yard_needs_no_extra_bag() {
        // 27 ft³ is exactly one yard
        let result = calculate(&input(3.0, 3.0, 3.0)).unwrap();
        assert_eq!(result.cubic_yards, 1.0);
        assert_eq!(result.bags_60lb, 60);
        assert_eq!(result.bags_80lb, 45);
    }

    #[test]
    fn test_idempotent() {
        let i = input(13.7, 8.2, 0.41);
        assert_eq!(calculate(&i).unwrap(), calculate(&i).unwrap());
    }

    #[test]
    fn test_sixty_pound_count_dominates() {
        let mut l = 0.05;
        while l < 60.0 {
            let result = calculate(&input(l, 1.3, 0.7)).unwrap();
            assert!(result.bags_60lb >= result.bags_80lb);
            l += 0.37;
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = calculate(&input(0.0, 5.0, 5.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "length_ft"));
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(calculate(&input(5.0, -1.0, 5.0)).is_err());
        assert!(calculate(&input(5.0, 5.0, f64::NAN)).is_err());
        assert!(calculate(&input(f64::INFINITY, 5.0, 5.0)).is_err());
    }

    #[test]
    fn test_overflowing_volume_rejected() {
        let err = calculate(&input(1e200, 1e200, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_bag_count_beyond_u64_rejected() {
        // 1e21 ft³ is finite, but ~2.2e21 bags do not fit in a u64
        let err = calculate(&input(1e7, 1e7, 1e7)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(estimate("1e7", "1e7", "1e7").is_none());
    }

    #[test]
    fn test_large_but_countable_volume() {
        let result = calculate(&input(1e5, 1e5, 1e5)).unwrap();
        assert_eq!(result.bags_60lb as f64, (result.cubic_yards * 60.0).ceil());
        assert_eq!(result.bags_80lb as f64, (result.cubic_yards * 45.0).ceil());
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension(DimensionField::Width, " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_dimension(DimensionField::Width, "1e1").unwrap(), 10.0);
        assert!(matches!(
            parse_dimension(DimensionField::Depth, "   "),
            Err(CalcError::MissingField { .. })
        ));
        assert!(parse_dimension(DimensionField::Depth, "12abc").is_err());
        assert!(parse_dimension(DimensionField::Depth, "inf").is_err());
        assert!(parse_dimension(DimensionField::Depth, "NaN").is_err());
        assert!(parse_dimension(DimensionField::Depth, "-3").is_err());
    }

    #[test]
    fn test_from_text_reports_first_bad_field() {
        let err = ConcreteInput::from_text("10", "abc", "").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "width_ft"));
    }

    #[test]
    fn test_estimate_declines_quietly() {
        assert!(estimate("0", "5", "5").is_none());
        assert!(estimate("", "5", "5").is_none());
        assert!(estimate("five", "5", "5").is_none());
        assert!(estimate("5", "5", "-0.5").is_none());
        assert_eq!(estimate("10", "10", "0.5").unwrap().bags_80lb, 84);
    }

    #[test]
    fn test_bags_by_size() {
        let result = calculate(&input(10.0, 10.0, 0.5)).unwrap();
        assert_eq!(result.bags(ConcreteBag::Lb60), 112);
        assert_eq!(result.bags(ConcreteBag::Lb80), 84);
    }

    #[test]
    fn test_serialization() {
        let i = input(10.0, 10.0, 0.5);
        let json = serde_json::to_string_pretty(&i).unwrap();
        assert!(json.contains("\"depth_ft\": 0.5"));
        let roundtrip: ConcreteInput = serde_json::from_str(&json).unwrap();
        assert_eq!(i, roundtrip);

        let result = calculate(&i).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"bags_60lb\":112"));
    }
}
