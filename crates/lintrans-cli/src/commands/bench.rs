//! `lintrans bench`: naive vs. vectorized multiplication timings.
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use maud::html;

use lintrans::bench::{run_benchmark, BenchmarkResults, Product};
use lintrans::config::LabConfig;
use lintrans::report::plots::{plot_naive_timings, plot_strategy_comparison};
use lintrans::report::{Report, ReportSection};

use crate::commands::{config_block, report_path};
use crate::util::write_json;

pub const REPORT_FILE: &str = "lintrans_benchmark.html";
pub const CONFIG_FILE: &str = "lintrans_benchmark_config.json";
pub const TIMINGS_FILE: &str = "lintrans_benchmark_timings.json";

/// Run the benchmark and write the report to `output_file` (or the default
/// report file in the output directory). The configuration and the raw
/// timings are written as JSON next to the report.
pub fn run_bench(config: &LabConfig, output_file: Option<&Path>) -> Result<BenchmarkResults> {
    let start_time = Instant::now();
    let results = run_benchmark(&config.benchmark).context("Benchmark inputs were malformed")?;
    log::info!("Benchmark completed in {:?}", start_time.elapsed());

    let report_file = report_path(config, output_file, REPORT_FILE)?;
    let report = build_report(config, &results)?;
    report.save_to_file(&report_file)?;
    write_json(&report_file.with_file_name(CONFIG_FILE), config)?;
    write_json(&report_file.with_file_name(TIMINGS_FILE), &results.timings())?;

    Ok(results)
}

fn build_report(config: &LabConfig, results: &BenchmarkResults) -> Result<Report> {
    let mut report = Report::new(
        "lintrans",
        &config.version,
        None,
        "Matrix Multiplication Benchmark",
    );

    /* Section 1: Naive multiplication */
    {
        let mut naive_section = ReportSection::new("Naive Multiplication");
        naive_section.add_content(html! {
            "Wall-clock time of the list-of-lists products for n = 2^1 to 2^"
            (config.benchmark.max_exponent)
            ". Matrix-vector multiplication grows like n^2, matrix-matrix like n^3. \
             Only the products are timed, not the generation of the random inputs."
        });
        if results.domain.is_empty() {
            naive_section.add_content(html! { p { "The size domain is empty; nothing was timed." } });
        } else {
            let plot = plot_naive_timings(results, "Naive Matrix-Vector and Matrix-Matrix Times")
                .map_err(anyhow::Error::msg)?;
            naive_section.add_plot(plot);
        }
        report.add_section(naive_section);
    }

    /* Section 2: Lists vs. ndarray */
    if results.is_vectorized() && !results.domain.is_empty() {
        let mut comparison_section = ReportSection::new("Lists vs. ndarray");
        comparison_section.add_content(html! {
            "The same inputs multiplied with ndarray's dot. The log-log view shows the \
             growth rate of each strategy as the slope of its line."
        });
        for (title, log_scale) in [("Linear Scale", false), ("Log-Log Scale", true)] {
            let plot = plot_strategy_comparison(results, title, log_scale)
                .map_err(anyhow::Error::msg)?;
            comparison_section.add_plot(plot);
        }
        report.add_section(comparison_section);
    }

    /* Section 3: Raw timings */
    {
        let mut timings_section = ReportSection::new("Timings");
        let products: Vec<Product> = Product::ALL
            .into_iter()
            .filter(|product| results.times(*product).is_some())
            .collect();
        timings_section.add_content(html! {
            table {
                tr {
                    th { "n" }
                    @for product in &products {
                        th { (product.label()) " (s)" }
                    }
                }
                @for (row, size) in results.domain.iter().enumerate() {
                    tr {
                        td { (size) }
                        @for product in &products {
                            td {
                                @if let Some(times) = results.times(*product) {
                                    (format!("{:.3e}", times[row].as_secs_f64()))
                                }
                            }
                        }
                    }
                }
            }
        });
        report.add_section(timings_section);
    }

    /* Section 4: Configuration */
    {
        let mut config_section = ReportSection::new("Configuration");
        config_section.add_content(config_block(&config.benchmark)?);
        report.add_section(config_section);
    }

    Ok(report)
}
