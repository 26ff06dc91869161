//! # Shape Rasterizers
//!
//! Generators that enumerate the lattice points inside a target shape.
//!
//! - `disk` - annulus extruded along one axis (filled disk when the
//!   inner radius equals the radius)
//! - `sphere` - spherical shell, no facing parameter
//! - `ellipse` - elliptical cylinder
//! - `torus` - torus of major radius R and minor radius r
//!
//! Each generator returns its points in the deterministic order of its
//! nested sweeps; duplicates are never removed.

pub mod disk;
pub mod ellipse;
pub mod sphere;
pub mod torus;

pub use disk::disk;
pub use ellipse::ellipse;
pub use sphere::sphere;
pub use torus::torus;
