use std::error::Error;
use std::fmt;

use ndarray::Array2;
use rand::Rng;

use crate::math::vector::{dot, Vector};

/// A matrix as a list of rows.
pub type Matrix = Vec<Vec<f64>>;

/// Generate a random `n x n` matrix with entries uniform in `[0, 1)`.
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Matrix {
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

/// The `n x n` identity matrix.
pub fn identity(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// Compute the matrix-vector product `Ax` by nested summation.
///
/// Every row of `a` must have as many entries as `x`.
pub fn matrix_vector_product(a: &[Vec<f64>], x: &[f64]) -> Result<Vector, ShapeError> {
    let n = x.len();
    for (row_idx, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(ShapeError::new(Operand::Row(row_idx), n, row.len()));
        }
    }

    Ok(a.iter().map(|row| dot(row, x)).collect())
}

/// Compute the matrix-matrix product `AB` by nested summation.
///
/// `a` is `m x n`, `b` is `n x p`; the result is `m x p`. An empty `b` yields
/// `m` empty rows.
pub fn matrix_matrix_product(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Matrix, ShapeError> {
    let n = b.len();
    let p = b.first().map_or(0, Vec::len);

    for (row_idx, row) in b.iter().enumerate() {
        if row.len() != p {
            return Err(ShapeError::new(Operand::RightRow(row_idx), p, row.len()));
        }
    }
    for (row_idx, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(ShapeError::new(Operand::Row(row_idx), n, row.len()));
        }
    }

    Ok(a.iter()
        .map(|row| {
            (0..p)
                .map(|j| (0..n).map(|k| row[k] * b[k][j]).sum())
                .collect()
        })
        .collect())
}

/// Copy a list-of-lists matrix into a contiguous `ndarray` matrix.
///
/// Rows must all have the length of the first row.
pub fn to_array2(a: &[Vec<f64>]) -> Result<Array2<f64>, ShapeError> {
    let rows = a.len();
    let cols = a.first().map_or(0, Vec::len);
    let mut data = Vec::with_capacity(rows * cols);
    for (row_idx, row) in a.iter().enumerate() {
        if row.len() != cols {
            return Err(ShapeError::new(Operand::Row(row_idx), cols, row.len()));
        }
        data.extend_from_slice(row);
    }
    Array2::from_shape_vec((rows, cols), data)
        .map_err(|_| ShapeError::new(Operand::Buffer, rows * cols, a.len() * cols))
}

/// Which operand failed a shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A row of the left-hand matrix.
    Row(usize),
    /// A row of the right-hand matrix.
    RightRow(usize),
    /// The flattened buffer handed to `ndarray`.
    Buffer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    operand: Operand,
    expected: usize,
    found: usize,
}

impl ShapeError {
    fn new(operand: Operand, expected: usize, found: usize) -> Self {
        Self {
            operand,
            expected,
            found,
        }
    }

    pub fn operand(&self) -> Operand {
        self.operand
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Operand::Row(idx) => write!(
                f,
                "row {} of the left operand has {} entries, expected {}",
                idx, self.found, self.expected
            ),
            Operand::RightRow(idx) => write!(
                f,
                "row {} of the right operand has {} entries, expected {}",
                idx, self.found, self.expected
            ),
            Operand::Buffer => write!(
                f,
                "buffer of length {} does not fill {} entries",
                self.found, self.expected
            ),
        }
    }
}

impl Error for ShapeError {}
