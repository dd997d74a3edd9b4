//! lintrans: solutions for an introductory unit on linear transformations.
//!
//! This crate provides naive list-of-lists matrix products and a benchmark
//! harness comparing them against `ndarray`'s vectorized `dot`, elementary 2D
//! transforms over point clouds, an Earth/Moon orbit built from rotations,
//! and the reporting/animation helpers used by the `lintrans` CLI.
//!
//! Everything is single-threaded and synchronous; presentation is written to
//! self-contained HTML files rather than an interactive window.
pub mod animation;
pub mod bench;
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod orbit;
pub mod report;
pub mod transform;
