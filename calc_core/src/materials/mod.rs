//! # Materials
//!
//! Material definitions used by the estimator. Currently this is the
//! premixed bag catalogue: what sizes exist and how many of each make
//! up a cubic yard.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::ConcreteBag;
//! use calc_core::units::CubicYards;
//!
//! assert_eq!(ConcreteBag::Lb80.bags_for(CubicYards(1.0)), Some(45));
//! ```

pub mod concrete_bags;

pub use concrete_bags::ConcreteBag;
