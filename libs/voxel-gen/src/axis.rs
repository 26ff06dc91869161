//! # Facing Axis
//!
//! The facing token selects which physical axis a shape's primary axis
//! (extrusion height, torus ring axis) maps onto, and consequently how
//! computed offsets are packed into output points.

use std::fmt;

use config::constants::{AXIS_X, AXIS_Y, AXIS_Z};

/// One of the three canonical facing axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parses a facing token.
    ///
    /// Returns `None` for anything but the canonical spellings; whether
    /// that is an error or an empty result is decided by each generator,
    /// since existing callers observe both behaviors.
    pub fn parse(token: &str) -> Option<Axis> {
        match token {
            AXIS_X => Some(Axis::X),
            AXIS_Y => Some(Axis::Y),
            AXIS_Z => Some(Axis::Z),
            _ => None,
        }
    }

    /// Canonical token spelling for this axis.
    pub fn token(&self) -> &'static str {
        match self {
            Axis::X => AXIS_X,
            Axis::Y => AXIS_Y,
            Axis::Z => AXIS_Z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// =============================================================================
// TESTS
// =============================================================================
