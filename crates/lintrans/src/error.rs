use std::error::Error;
use std::fmt;

/// Errors raised by the planar transforms.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The point cloud does not have exactly two rows.
    NotPlanar(usize), // Number of rows found
    /// Reflection axis `(0, 0)` does not define a line.
    DegenerateAxis,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::NotPlanar(rows) => {
                write!(f, "Point cloud must have 2 rows (x and y), found {}", rows)
            }
            TransformError::DegenerateAxis => {
                write!(f, "Reflection axis (a, b) must not be the zero vector")
            }
        }
    }
}

impl Error for TransformError {}
