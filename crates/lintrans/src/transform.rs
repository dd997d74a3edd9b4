//! Elementary planar transforms over point clouds.
//!
//! A point cloud is a `(2, n)` array holding x-coordinates in row 0 and
//! y-coordinates in row 1, one point per column. Every transform except
//! [`translate`] is a left multiplication by a 2x2 matrix.
use ndarray::{arr2, Array2, Axis};

use crate::error::TransformError;

/// The transforms a point cloud can be put through, with their parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Stretch { a: f64, b: f64 },
    Shear { a: f64, b: f64 },
    Rotation { theta: f64 },
    Reflection { a: f64, b: f64 },
    Translation { a: f64, b: f64 },
}

impl Transform {
    /// Apply the transform to `points`.
    pub fn apply(&self, points: &Array2<f64>) -> Result<Array2<f64>, TransformError> {
        match *self {
            Transform::Stretch { a, b } => stretch(points, a, b),
            Transform::Shear { a, b } => shear(points, a, b),
            Transform::Rotation { theta } => rotation(points, theta),
            Transform::Reflection { a, b } => reflection(points, a, b),
            Transform::Translation { a, b } => translate(points, (a, b)),
        }
    }

    /// Human readable description, used as a plot title.
    pub fn describe(&self) -> String {
        match self {
            Transform::Stretch { a, b } => format!("Stretch (a = {}, b = {})", a, b),
            Transform::Shear { a, b } => format!("Shear (a = {}, b = {})", a, b),
            Transform::Rotation { theta } => format!("Rotation (θ = {:.4} rad)", theta),
            Transform::Reflection { a, b } => {
                format!("Reflection about the line through (0, 0) and ({}, {})", a, b)
            }
            Transform::Translation { a, b } => format!("Translation by ({}, {})", a, b),
        }
    }
}

fn ensure_planar(points: &Array2<f64>) -> Result<(), TransformError> {
    match points.nrows() {
        2 => Ok(()),
        rows => Err(TransformError::NotPlanar(rows)),
    }
}

/// The counter-clockwise rotation matrix for `theta` radians.
pub fn rotation_matrix(theta: f64) -> Array2<f64> {
    let (sin, cos) = theta.sin_cos();
    arr2(&[[cos, -sin], [sin, cos]])
}

/// Scale by `a` in the x direction and `b` in the y direction.
pub fn stretch(points: &Array2<f64>, a: f64, b: f64) -> Result<Array2<f64>, TransformError> {
    ensure_planar(points)?;
    Ok(arr2(&[[a, 0.0], [0.0, b]]).dot(points))
}

/// Slant by `a` in the x direction and `b` in the y direction.
pub fn shear(points: &Array2<f64>, a: f64, b: f64) -> Result<Array2<f64>, TransformError> {
    ensure_planar(points)?;
    Ok(arr2(&[[1.0, a], [b, 1.0]]).dot(points))
}

/// Rotate about the origin by `theta` radians.
pub fn rotation(points: &Array2<f64>, theta: f64) -> Result<Array2<f64>, TransformError> {
    ensure_planar(points)?;
    Ok(rotation_matrix(theta).dot(points))
}

/// Reflect about the line through the origin and `(a, b)`.
pub fn reflection(points: &Array2<f64>, a: f64, b: f64) -> Result<Array2<f64>, TransformError> {
    ensure_planar(points)?;
    let norm = a * a + b * b;
    if norm == 0.0 {
        return Err(TransformError::DegenerateAxis);
    }
    let reflector = arr2(&[[a * a - b * b, 2.0 * a * b], [2.0 * a * b, b * b - a * a]]) / norm;
    Ok(reflector.dot(points))
}

/// Shift every point by `offset.0` in x and `offset.1` in y.
pub fn translate(
    points: &Array2<f64>,
    offset: (f64, f64),
) -> Result<Array2<f64>, TransformError> {
    ensure_planar(points)?;
    let mut moved = points.clone();
    moved.row_mut(0).mapv_inplace(|x| x + offset.0);
    moved.row_mut(1).mapv_inplace(|y| y + offset.1);
    Ok(moved)
}

/// A closed outline of a house with a door, scaled to fit inside `[-1, 1]^2`.
///
/// Each edge is densified so transforms show up as a cloud rather than a
/// handful of corners.
pub fn sample_figure() -> Array2<f64> {
    const CORNERS: [(f64, f64); 11] = [
        (-0.6, -0.6),
        (0.6, -0.6),
        (0.6, 0.2),
        (0.0, 0.7),
        (-0.6, 0.2),
        (-0.6, -0.6),
        (-0.15, -0.6),
        (-0.15, -0.1),
        (0.15, -0.1),
        (0.15, -0.6),
        (0.6, -0.6),
    ];
    const STEPS_PER_EDGE: usize = 40;

    let mut columns = Vec::with_capacity(CORNERS.len() * STEPS_PER_EDGE);
    for pair in CORNERS.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        for step in 0..STEPS_PER_EDGE {
            let t = step as f64 / STEPS_PER_EDGE as f64;
            columns.push((x0 + t * (x1 - x0), y0 + t * (y1 - y0)));
        }
    }

    from_points(&columns)
}

/// Build a `(2, n)` point cloud from `(x, y)` pairs.
pub fn from_points(points: &[(f64, f64)]) -> Array2<f64> {
    let mut cloud = Array2::zeros((2, points.len()));
    for (mut column, &(x, y)) in cloud.axis_iter_mut(Axis(1)).zip(points) {
        column[0] = x;
        column[1] = y;
    }
    cloud
}
