//! Integration tests for the naive list-of-lists products.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lintrans::math::{
    identity, matrix_matrix_product, matrix_vector_product, random_matrix, random_vector,
    to_array1, to_array2,
};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[test]
fn identity_times_vector_is_vector() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 1..=16 {
        let v = random_vector(&mut rng, n);
        let product = matrix_vector_product(&identity(n), &v).unwrap();
        assert_eq!(product, v, "n = {}", n);
    }
}

#[test]
fn identity_times_identity_is_identity() {
    for n in 1..=16 {
        let product = matrix_matrix_product(&identity(n), &identity(n)).unwrap();
        assert_eq!(product, identity(n), "n = {}", n);
    }
}

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn four_by_four_identity_example() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let product = matrix_vector_product(&identity(4), &x).unwrap();
    assert_eq!(product, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn two_by_two_matrix_product_example() {
    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
    let product = matrix_matrix_product(&a, &b).unwrap();
    assert_eq!(product, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
}

// ---------------------------------------------------------------------------
// Agreement with ndarray
// ---------------------------------------------------------------------------

#[test]
fn naive_matches_ndarray_dot() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in [1, 2, 7, 32, 64] {
        let a = random_matrix(&mut rng, n);
        let b = random_matrix(&mut rng, n);
        let x = random_vector(&mut rng, n);

        let naive_ax = matrix_vector_product(&a, &x).unwrap();
        let naive_ab = matrix_matrix_product(&a, &b).unwrap();

        let (nd_a, nd_b, nd_x) = (to_array2(&a).unwrap(), to_array2(&b).unwrap(), to_array1(&x));
        let nd_ax = nd_a.dot(&nd_x);
        let nd_ab = nd_a.dot(&nd_b);

        for i in 0..n {
            assert_abs_diff_eq!(naive_ax[i], nd_ax[i], epsilon = 1e-9);
            for j in 0..n {
                assert_abs_diff_eq!(naive_ab[i][j], nd_ab[(i, j)], epsilon = 1e-9);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Shape errors
// ---------------------------------------------------------------------------

#[test]
fn mismatched_vector_length_errors() {
    let a = identity(3);
    let err = matrix_vector_product(&a, &[1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("expected 2"));
}

#[test]
fn mismatched_inner_dimension_errors() {
    let a = vec![vec![1.0, 2.0, 3.0]];
    let b = vec![vec![1.0], vec![2.0]];
    assert!(matrix_matrix_product(&a, &b).is_err());
}

#[test]
fn empty_inputs_give_empty_products() {
    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matrix_vector_product(&empty, &[]).unwrap().is_empty());
    assert!(matrix_matrix_product(&empty, &empty).unwrap().is_empty());
}

#[test]
fn random_matrix_is_square_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_matrix(&mut rng, 9);
    assert_eq!(a.len(), 9);
    assert!(a.iter().all(|row| row.len() == 9));
    assert!(a.iter().flatten().all(|&v| (0.0..1.0).contains(&v)));
}
