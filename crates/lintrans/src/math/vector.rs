use ndarray::Array1;
use rand::Rng;

/// A vector as a plain list of floats.
pub type Vector = Vec<f64>;

/// Generate a random vector of length `n` with entries uniform in `[0, 1)`.
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vector {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

/// Sum of the element-wise products of two equal-length slices.
pub(crate) fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

/// Copy a list vector into an `ndarray` vector for the vectorized strategy.
pub fn to_array1(x: &[f64]) -> Array1<f64> {
    Array1::from_vec(x.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_vector_has_requested_length_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let v = random_vector(&mut rng, 64);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        assert_eq!(dot(&[1.0, 0.0], &[0.0, 5.0]), 0.0);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }
}
