//! # calc_core - Concrete Estimator Engine
//!
//! `calc_core` is the computational heart of the ConCrete Calculator: given
//! the length, width and depth of a pour in feet it works out the volume and
//! how many premixed bags to buy. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The estimate is a pure function of its input
//! - **Quiet failures at the form**: bad input is dropped, never shown as an error
//! - **Rich Errors underneath**: structured error types for logs and JSON consumers
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::concrete::{calculate, ConcreteInput};
//!
//! let input = ConcreteInput { length_ft: 1.0, width_ft: 1.0, depth_ft: 1.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!((result.bags_60lb, result.bags_80lb), (3, 2));
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The concrete estimate
//! - [`form`] - Form state: field text, Calculate gate, held result, Clear
//! - [`display`] - Result text shared by the front-ends
//! - [`materials`] - Premixed bag sizes and yields
//! - [`units`] - Type-safe unit wrappers
//! - [`settings`] / [`file_io`] - TOML preferences with atomic saves
//! - [`logging`] - tracing subscriber setup
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod display;
pub mod errors;
pub mod file_io;
pub mod form;
pub mod logging;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{ConcreteInput, ConcreteResult, DimensionField};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_settings, load_settings_or_default, save_settings};
pub use form::EstimateForm;
pub use settings::Settings;
