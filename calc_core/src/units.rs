//! # Unit Types
//!
//! Type-safe wrappers for the units the estimator deals in. They are plain
//! f64 newtypes so JSON stays clean (just numbers).
//!
//! ## US Customary Units
//!
//! - Length: feet (ft)
//! - Volume: cubic feet (ft³), cubic yards (yd³ = 27 ft³)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{CubicFeet, CubicYards, Feet};
//!
//! let volume = Feet(10.0).cube_with(Feet(10.0), Feet(0.5));
//! assert_eq!(volume, CubicFeet(50.0));
//!
//! let yards: CubicYards = CubicFeet(54.0).into();
//! assert_eq!(yards.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};

/// Cubic feet in one cubic yard
pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl Feet {
    /// Volume of a rectangular prism with this length and the given width and depth.
    ///
    /// Multiplies left to right: `(self * width) * depth`.
    pub fn cube_with(self, width: Feet, depth: Feet) -> CubicFeet {
        CubicFeet(self.0 * width.0 * depth.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

/// Volume in cubic yards (1 yd³ = 27 ft³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicYards(pub f64);

impl From<CubicFeet> for CubicYards {
    fn from(cf: CubicFeet) -> Self {
        CubicYards(cf.0 / CUBIC_FEET_PER_CUBIC_YARD)
    }
}
