//! # Voxel Gen
//!
//! Procedural voxel shape generators: each generator enumerates the
//! integer-spaced grid points inside a target shape and returns them as
//! an ordered sequence the caller solely owns.
//!
//! ## Architecture
//!
//! ```text
//! Host arguments → voxel-value (Value, coercion) → voxel-gen
//!       ↓                                             ↓
//!  registry::BUILTINS (named entries)          PointSequence
//! ```
//!
//! All operations are synchronous pure computations: no I/O, no shared
//! state, no internal retries. The output order follows the nesting of
//! the generating sweeps and is part of the observable contract. The
//! core performs no guard against runaway allocation; bounding shape
//! parameters is the host's job.
//!
//! ## Example
//!
//! ```rust
//! use voxel_gen::{registry, PointSequence};
//! use voxel_value::Value;
//!
//! let sphere = registry::lookup("sphere").unwrap();
//! let points: PointSequence =
//!     (sphere.func)(&[Value::Int(3), Value::Int(0)]).unwrap();
//! assert!(!points.is_empty());
//! ```

pub mod axis;
pub mod compose;
pub mod error;
pub mod line;
pub mod registry;
pub mod shapes;
pub mod sweep;

// Re-export public API
pub use axis::Axis;
pub use compose::{composition, map_points};
pub use error::GenError;
pub use line::line;
pub use registry::{lookup, Builtin, BuiltinFn, BUILTINS};
pub use shapes::{disk, ellipse, sphere, torus};

/// A single voxel position. Multiple generators may emit numerically
/// identical points; value equality is the only identity.
pub type Point3 = glam::DVec3;

/// Ordered, append-only sequence of points. A multiset, not a set:
/// duplicates are never removed, and downstream consumers must tolerate
/// repeats.
pub type PointSequence = Vec<Point3>;

// =============================================================================
// TESTS
// =============================================================================
