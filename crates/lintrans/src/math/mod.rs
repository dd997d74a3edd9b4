//! Naive linear algebra over nested `Vec`s.
//!
//! Matrices are `Vec<Vec<f64>>` (one inner `Vec` per row) and vectors are
//! plain `Vec<f64>`. Products are computed by explicit nested summation and
//! serve as the slow baseline the benchmark compares against `ndarray`.
pub mod matrix;
pub mod vector;

pub use matrix::{
    identity, matrix_matrix_product, matrix_vector_product, random_matrix, to_array2, Matrix,
    ShapeError,
};
pub use vector::{random_vector, to_array1, Vector};
