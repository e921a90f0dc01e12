//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`concrete`] - Rectangular pour volume and premixed bag counts

pub mod concrete;

// Re-export commonly used types
pub use concrete::{calculate, estimate, ConcreteInput, ConcreteResult, DimensionField};
