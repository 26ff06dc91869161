//! # Config Crate
//!
//! Centralized configuration constants for the voxel generation pipeline.
//! All magic numbers and fixed token spellings are defined here to ensure
//! consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, AXIS_Y};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Facing tokens are matched against the canonical spellings
//! assert_eq!(AXIS_Y, "y");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
