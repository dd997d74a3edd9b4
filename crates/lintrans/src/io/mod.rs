//! File input for point clouds.
pub mod points;

pub use points::{read_points_csv, write_points_csv};
