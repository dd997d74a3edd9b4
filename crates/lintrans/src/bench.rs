//! Naive vs. vectorized multiplication benchmark.
//!
//! For every size `n` in the geometric domain `2^1 ..= 2^N` a fresh random
//! `n x n` matrix `A`, a second matrix `B` and a vector `x` are generated.
//! Only the products are timed, never the generation. Optionally the same
//! inputs are converted to `ndarray` arrays and multiplied with `dot`.
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize, Serializer};
use statrs::statistics::{Data, Median};

use crate::math::{
    matrix_matrix_product, matrix_vector_product, random_matrix, random_vector, to_array1,
    to_array2, ShapeError,
};

/// Parameters of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Largest exponent `N`; sizes run from `2^1` to `2^N`.
    pub max_exponent: i32,
    /// Also time `ndarray`'s `dot` on the same inputs.
    pub vectorized: bool,
    /// Number of timings per product and size; the median is kept.
    pub repeats: usize,
    /// Seed for input generation. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_exponent: 8,
            vectorized: false,
            repeats: 1,
            seed: None,
        }
    }
}

/// The four timed multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    ListMatrixVector,
    ListMatrixMatrix,
    NdarrayMatrixVector,
    NdarrayMatrixMatrix,
}

impl Product {
    pub const ALL: [Product; 4] = [
        Product::ListMatrixVector,
        Product::ListMatrixMatrix,
        Product::NdarrayMatrixVector,
        Product::NdarrayMatrixMatrix,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Product::ListMatrixVector => "Matrix-Vector with Lists",
            Product::ListMatrixMatrix => "Matrix-Matrix with Lists",
            Product::NdarrayMatrixVector => "Matrix-Vector with ndarray",
            Product::NdarrayMatrixMatrix => "Matrix-Matrix with ndarray",
        }
    }
}

/// One measured `(size, duration)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingSample {
    pub size: usize,
    #[serde(rename = "seconds", serialize_with = "as_seconds")]
    pub duration: Duration,
}

fn as_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Every sample of one strategy, as written to the timings dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTimings {
    pub product: Product,
    pub label: &'static str,
    pub samples: Vec<TimingSample>,
}

/// Durations per size, parallel to `domain`.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResults {
    pub domain: Vec<usize>,
    pub vector_times: Vec<Duration>,
    pub matrix_times: Vec<Duration>,
    /// Present only when the run was vectorized.
    pub ndarray_vector_times: Option<Vec<Duration>>,
    pub ndarray_matrix_times: Option<Vec<Duration>>,
}

impl BenchmarkResults {
    /// Timings recorded for `product`, or `None` if it was not measured.
    pub fn times(&self, product: Product) -> Option<&[Duration]> {
        match product {
            Product::ListMatrixVector => Some(&self.vector_times),
            Product::ListMatrixMatrix => Some(&self.matrix_times),
            Product::NdarrayMatrixVector => self.ndarray_vector_times.as_deref(),
            Product::NdarrayMatrixMatrix => self.ndarray_matrix_times.as_deref(),
        }
    }

    /// Timings for `product` in seconds, for plotting.
    pub fn seconds(&self, product: Product) -> Option<Vec<f64>> {
        self.times(product)
            .map(|times| times.iter().map(Duration::as_secs_f64).collect())
    }

    /// `(size, duration)` pairs for `product`; empty if it was not measured.
    pub fn samples(&self, product: Product) -> Vec<TimingSample> {
        self.times(product)
            .map(|times| {
                self.domain
                    .iter()
                    .zip(times)
                    .map(|(&size, &duration)| TimingSample { size, duration })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Samples of every measured strategy, in [`Product::ALL`] order.
    pub fn timings(&self) -> Vec<ProductTimings> {
        Product::ALL
            .into_iter()
            .filter(|product| self.times(*product).is_some())
            .map(|product| ProductTimings {
                product,
                label: product.label(),
                samples: self.samples(product),
            })
            .collect()
    }

    pub fn is_vectorized(&self) -> bool {
        self.ndarray_vector_times.is_some() && self.ndarray_matrix_times.is_some()
    }
}

/// The sizes `2^1, 2^2, ..., 2^N`. Empty when `N <= 0`.
pub fn geometric_domain(max_exponent: i32) -> Vec<usize> {
    let max_exponent = u32::try_from(max_exponent).unwrap_or(0);
    (1..=max_exponent)
        .map_while(|k| 1usize.checked_shl(k))
        .collect()
}

/// Time `f` `repeats` times (at least once) and return the median duration.
fn time_median<T, F>(repeats: usize, mut f: F) -> Duration
where
    F: FnMut() -> T,
{
    median((0..repeats.max(1)).map(|_| {
        let start = Instant::now();
        let out = f();
        let elapsed = start.elapsed();
        black_box(out);
        elapsed
    }))
}

fn median(durations: impl Iterator<Item = Duration>) -> Duration {
    let seconds: Vec<f64> = durations.map(|d| d.as_secs_f64()).collect();
    Duration::from_secs_f64(Data::new(seconds).median())
}

/// Run the benchmark described by `config`.
///
/// The generated inputs are always well-formed; a `ShapeError` here means the
/// generators and products disagree about layout.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResults, ShapeError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let domain = geometric_domain(config.max_exponent);
    let mut results = BenchmarkResults {
        domain: domain.clone(),
        vector_times: Vec::with_capacity(domain.len()),
        matrix_times: Vec::with_capacity(domain.len()),
        ndarray_vector_times: config.vectorized.then(|| Vec::with_capacity(domain.len())),
        ndarray_matrix_times: config.vectorized.then(|| Vec::with_capacity(domain.len())),
    };

    log::info!(
        "Benchmarking sizes {:?} ({} repeat(s), vectorized: {})",
        domain,
        config.repeats.max(1),
        config.vectorized
    );

    for &n in &domain {
        let a = random_matrix(&mut rng, n);
        let x = random_vector(&mut rng, n);
        let b = random_matrix(&mut rng, n);

        // Surface layout errors once, outside the timed region.
        matrix_vector_product(&a, &x)?;
        matrix_matrix_product(&a, &b)?;

        let vector_time = time_median(config.repeats, || matrix_vector_product(&a, &x));
        let matrix_time = time_median(config.repeats, || matrix_matrix_product(&a, &b));
        results.vector_times.push(vector_time);
        results.matrix_times.push(matrix_time);

        if let (Some(nd_vector_times), Some(nd_matrix_times)) = (
            results.ndarray_vector_times.as_mut(),
            results.ndarray_matrix_times.as_mut(),
        ) {
            let (a, b, x) = (to_array2(&a)?, to_array2(&b)?, to_array1(&x));
            let nd_vector_time = time_median(config.repeats, || a.dot(&x));
            let nd_matrix_time = time_median(config.repeats, || a.dot(&b));
            nd_vector_times.push(nd_vector_time);
            nd_matrix_times.push(nd_matrix_time);
            log::debug!(
                "n = {}: lists {:?} / {:?}, ndarray {:?} / {:?}",
                n,
                vector_time,
                matrix_time,
                nd_vector_time,
                nd_matrix_time
            );
        } else {
            log::debug!("n = {}: lists {:?} / {:?}", n, vector_time, matrix_time);
        }
    }

    log::info!("Benchmark finished over {} sizes", domain.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_is_powers_of_two() {
        assert_eq!(geometric_domain(4), vec![2, 4, 8, 16]);
        assert_eq!(geometric_domain(1), vec![2]);
    }

    #[test]
    fn non_positive_exponent_gives_empty_domain() {
        assert!(geometric_domain(0).is_empty());
        assert!(geometric_domain(-3).is_empty());
    }

    #[test]
    fn repeats_run_at_least_once() {
        let mut calls = 0;
        let _ = time_median(5, || calls += 1);
        assert_eq!(calls, 5);

        let mut calls = 0;
        let _ = time_median(0, || calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn median_ignores_outliers() {
        let ms = Duration::from_millis;
        assert_eq!(median([ms(30), ms(1), ms(2), ms(900), ms(3)].into_iter()), ms(3));
    }

    #[test]
    fn slow_repeat_does_not_dominate() {
        let mut call = 0;
        let recorded = time_median(3, || {
            call += 1;
            if call == 2 {
                std::thread::sleep(Duration::from_millis(200));
            }
        });
        assert!(recorded < Duration::from_millis(100), "{:?}", recorded);
    }

    #[test]
    fn timings_serialize_in_seconds() {
        let results = BenchmarkResults {
            domain: vec![2, 4],
            vector_times: vec![Duration::from_millis(500), Duration::from_secs(2)],
            matrix_times: vec![Duration::from_millis(1), Duration::from_millis(8)],
            ndarray_vector_times: None,
            ndarray_matrix_times: None,
        };
        let timings = results.timings();
        assert_eq!(timings.len(), 2);

        let json = serde_json::to_value(&timings).unwrap();
        assert_eq!(json[0]["product"], "list_matrix_vector");
        assert_eq!(json[0]["label"], "Matrix-Vector with Lists");
        assert_eq!(json[0]["samples"][1]["size"], 4);
        assert_eq!(json[0]["samples"][0]["seconds"], 0.5);
        assert_eq!(json[1]["samples"][1]["seconds"], 0.008);
    }
}
