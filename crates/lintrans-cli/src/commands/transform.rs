//! `lintrans transform`: apply a planar transform to a point cloud.
use std::path::Path;

use anyhow::{Context, Result};
use maud::html;
use ndarray::Array2;

use lintrans::config::LabConfig;
use lintrans::io::{read_points_csv, write_points_csv};
use lintrans::report::plots::plot_before_after;
use lintrans::report::{Report, ReportSection};
use lintrans::transform::sample_figure;

use crate::commands::{config_block, report_path};

pub const REPORT_FILE: &str = "lintrans_transform.html";

/// Transform the configured point cloud, write the before/after report to
/// `output_file` (or the default report file in the output directory) and,
/// when `save_points` is set, the transformed points as CSV.
pub fn run_transform(
    config: &LabConfig,
    output_file: Option<&Path>,
    save_points: Option<&Path>,
) -> Result<Array2<f64>> {
    let points = match &config.transform.points {
        Some(path) => read_points_csv(path)?,
        None => {
            log::info!("[lintrans] No point file given; using the built-in figure.");
            sample_figure()
        }
    };

    let transform = config.transform.to_transform();
    log::info!("Applying {} to {} points", transform.describe(), points.ncols());
    let transformed = transform
        .apply(&points)
        .with_context(|| format!("Failed to apply {}", transform.describe()))?;

    let report_file = report_path(config, output_file, REPORT_FILE)?;
    let mut report = Report::new("lintrans", &config.version, None, "Planar Transformations");
    {
        let mut section = ReportSection::new(&transform.describe());
        section.add_content(html! {
            p {
                (points.ncols()) " points, shown before and after the transform in the "
                "window [-1, 1] x [-1, 1]."
            }
        });
        let plot = plot_before_after(&points, &transformed, &transform.describe())
            .map_err(anyhow::Error::msg)?;
        section.add_plot(plot);
        report.add_section(section);
    }
    {
        let mut config_section = ReportSection::new("Configuration");
        config_section.add_content(config_block(&config.transform)?);
        report.add_section(config_section);
    }
    report.save_to_file(&report_file)?;

    if let Some(path) = save_points {
        write_points_csv(path, &transformed)?;
        log::info!("Transformed points saved to: {}", path.display());
    }

    Ok(transformed)
}
