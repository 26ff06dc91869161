use glam::DVec3;
use std::fmt;

use crate::error::ValueError;

/// A point-transforming function, as hosts hand one to the composition
/// combinator. A plain function pointer keeps [`Value`] comparable.
pub type PointFn = fn(DVec3) -> DVec3;

/// Represents a dynamic host value.
///
/// The host interpreter is dynamically typed; these are the variants it
/// can marshal into the generators. Only `Int` and `Real` survive numeric
/// coercion — everything else is rejected with a typed failure rather
/// than silently converted.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undef,
    Boolean(bool),
    Int(i64),
    Real(f64),
    Str(String),
    List(Vec<Value>),
    Func(PointFn),
}

impl Value {
    /// Converts the value to a float (f64).
    /// - Int -> widened
    /// - Real -> as-is
    /// - Otherwise -> None (numeric arguments are never coerced from
    ///   booleans or strings)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string contents for `Str` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Converts to a 3-D point if the value is a list of exactly three
    /// numeric elements. Strict: no zero-filling of missing coordinates.
    pub fn as_point3(&self) -> Option<DVec3> {
        match self {
            Value::List(items) if items.len() == 3 => {
                let x = items[0].as_f64()?;
                let y = items[1].as_f64()?;
                let z = items[2].as_f64()?;
                Some(DVec3::new(x, y, z))
            }
            _ => None,
        }
    }

    /// Static type label, used in failure payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undef => "undef",
            Value::Boolean(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Real(_) => "real",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Func(_) => "function",
        }
    }
}

/// Normalizes a heterogeneous numeric argument list into uniform reals.
///
/// Order and length are preserved: `Int` widens to `f64`, `Real` passes
/// through. Any other variant fails with
/// [`ValueError::InvalidParameterType`] carrying the zero-based index and
/// the actual type of the offending value. This is the sole validation
/// gate shared by all rasterizers; it performs no range checking.
///
/// # Example
///
/// ```rust
/// use voxel_value::{coerce_to_reals, Value, ValueError};
///
/// let ok = coerce_to_reals(&[Value::Int(3), Value::Real(1.5)]).unwrap();
/// assert_eq!(ok, vec![3.0, 1.5]);
///
/// let err = coerce_to_reals(&[Value::Int(3), Value::Str("oops".into())]);
/// assert_eq!(
///     err,
///     Err(ValueError::InvalidParameterType { index: 1, found: "string" })
/// );
/// ```
pub fn coerce_to_reals(values: &[Value]) -> Result<Vec<f64>, ValueError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_f64().ok_or(ValueError::InvalidParameterType {
                index,
                found: value.type_name(),
            })
        })
        .collect()
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Real(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<DVec3> for Value {
    fn from(p: DVec3) -> Self {
        Value::List(vec![Value::Real(p.x), Value::Real(p.y), Value::Real(p.z)])
    }
}

impl From<PointFn> for Value {
    fn from(f: PointFn) -> Self {
        Value::Func(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Real(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Func(_) => write!(f, "function"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
