//! # Voxel Value
//!
//! Dynamic value model and numeric coercion for the voxel generation
//! pipeline. A host interpreter marshals its own argument representation
//! into [`Value`], and the generators resolve numeric parameters through
//! [`coerce_to_reals`] before doing any geometry.
//!
//! ## Architecture
//!
//! ```text
//! Host arguments → voxel-value (Value, coercion) → voxel-gen (PointSequence)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use voxel_value::{coerce_to_reals, Value};
//!
//! let args = [Value::Int(4), Value::Real(0.5)];
//! let reals = coerce_to_reals(&args).unwrap();
//! assert_eq!(reals, vec![4.0, 0.5]);
//! ```

pub mod error;
pub mod value;

// Re-export public API
pub use error::ValueError;
pub use value::{coerce_to_reals, PointFn, Value};
