//! # Builtin Function Table
//!
//! A stable exported table of named generator entries. A host binds
//! these into its own dispatch mechanism instead of mutating a shared
//! registry; the table itself is immutable.
//!
//! ## Entries
//!
//! | Name      | Arity | Arguments                                   |
//! |-----------|-------|---------------------------------------------|
//! | `circle`  | 4     | radius, inner-radius, height, facing        |
//! | `sphere`  | 2     | radius, inner-radius                        |
//! | `ellipse` | 4     | half-width, half-length, height, facing     |
//! | `torus`   | 3     | major-radius, minor-radius, facing          |
//! | `line`    | 2     | begin point, end point                      |
//! | `comp`    | 2     | transform function, point list              |

use voxel_value::{coerce_to_reals, Value};

use crate::compose::composition;
use crate::error::GenError;
use crate::line::line;
use crate::shapes::{disk, ellipse, sphere, torus};
use crate::{Point3, PointSequence};

/// Signature shared by every builtin entry.
pub type BuiltinFn = fn(&[Value]) -> Result<PointSequence, GenError>;

/// A named generator a host can bind into its function table.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Host-facing name of the operation.
    pub name: &'static str,
    /// Exact number of arguments the entry expects.
    pub arity: usize,
    /// The wrapped generator.
    pub func: BuiltinFn,
}

/// The exported builtin table.
pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "circle",
        arity: 4,
        func: circle_builtin,
    },
    Builtin {
        name: "sphere",
        arity: 2,
        func: sphere_builtin,
    },
    Builtin {
        name: "ellipse",
        arity: 4,
        func: ellipse_builtin,
    },
    Builtin {
        name: "torus",
        arity: 3,
        func: torus_builtin,
    },
    Builtin {
        name: "line",
        arity: 2,
        func: line_builtin,
    },
    Builtin {
        name: "comp",
        arity: 2,
        func: comp_builtin,
    },
];

/// Looks up a builtin by its host-facing name.
///
/// # Example
///
/// ```rust
/// use voxel_gen::registry::lookup;
///
/// assert_eq!(lookup("sphere").map(|b| b.arity), Some(2));
/// assert!(lookup("cube").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

fn check_arity(name: &'static str, expected: usize, args: &[Value]) -> Result<(), GenError> {
    if args.len() != expected {
        return Err(GenError::WrongArgCount {
            name,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Facing tokens arrive as strings; anything else behaves as an
/// unrecognized token and takes the generator's own unknown-token path.
fn facing_token(value: &Value) -> &str {
    value.as_str().unwrap_or("")
}

fn point_arg(name: &'static str, index: usize, value: &Value) -> Result<Point3, GenError> {
    value.as_point3().ok_or_else(|| {
        GenError::InvalidOperands(format!(
            "{}: argument {} is not a point, got {}",
            name,
            index,
            value.type_name()
        ))
    })
}

fn circle_builtin(args: &[Value]) -> Result<PointSequence, GenError> {
    check_arity("circle", 4, args)?;
    let params = coerce_to_reals(&args[..3])?;
    disk(params[0], params[1], params[2], facing_token(&args[3]))
}

fn sphere_builtin(args: &[Value]) -> Result<PointSequence, GenError> {
    check_arity("sphere", 2, args)?;
    let params = coerce_to_reals(args)?;
    sphere(params[0], params[1])
}

fn ellipse_builtin(args: &[Value]) -> Result<PointSequence, GenError> {
    check_arity("ellipse", 4, args)?;
    let params = coerce_to_reals(&args[..3])?;
    ellipse(params[0], params[1], params[2], facing_token(&args[3]))
}

fn torus_builtin(args: &[Value]) -> Result<PointSequence, GenError> {
    check_arity("torus", 3, args)?;
    let params = coerce_to_reals(&args[..2])?;
    torus(params[0], params[1], facing_token(&args[2]))
}

fn line_builtin(args: &[Value]) -> Result<PointSequence, GenError> {
    check_arity("line", 2, args)?;
    let begin = point_arg("line", 0, &args[0])?;
    let end = point_arg("line", 1, &args[1])?;
    line(begin, end)
}

fn comp_builtin(args: &[Value]) -> Result<PointSequence, GenError> {
    check_arity("comp", 2, args)?;
    composition(&args[0], &args[1])
}

// =============================================================================
// TESTS
// =============================================================================
