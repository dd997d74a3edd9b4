//! Plots and HTML reports for the lab problems.
pub mod plots;
pub mod report;

pub use report::{Report, ReportSection};
