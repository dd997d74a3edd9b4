use ndarray::Array2;
use plotly::common::{Line, Marker, Mode};
use plotly::layout::{Axis, AxisType, GridPattern, Layout, LayoutGrid, Legend};
use plotly::{Plot, Scatter};

use crate::bench::{BenchmarkResults, Product};
use crate::orbit::Trajectories;

const SERIES_COLORS: [&str; 4] = ["#1f77b4", "#2ca02c", "#ff7f0e", "#d62728"];

fn sizes(results: &BenchmarkResults) -> Vec<f64> {
    results.domain.iter().map(|&n| n as f64).collect()
}

fn timing_trace(
    results: &BenchmarkResults,
    product: Product,
    color: &str,
) -> Result<Box<Scatter<f64, f64>>, String> {
    let seconds = results
        .seconds(product)
        .ok_or_else(|| format!("No timings recorded for {}", product.label()))?;
    Ok(Scatter::new(sizes(results), seconds)
        .mode(Mode::LinesMarkers)
        .name(product.label())
        .line(Line::new().width(2.0).color(color.to_string()))
        .marker(Marker::new().size(10).color(color.to_string())))
}

/// Naive timings in two side-by-side panels: matrix-vector on the left,
/// matrix-matrix on the right.
pub fn plot_naive_timings(results: &BenchmarkResults, title: &str) -> Result<Plot, String> {
    if results.domain.is_empty() {
        return Err("Benchmark domain is empty, nothing to plot".to_string());
    }

    let vector_trace = timing_trace(results, Product::ListMatrixVector, "blue")?;
    let matrix_trace = timing_trace(results, Product::ListMatrixMatrix, "green")?
        .x_axis("x2")
        .y_axis("y2");

    let layout = Layout::new()
        .title(title)
        .grid(
            LayoutGrid::new()
                .rows(1)
                .columns(2)
                .pattern(GridPattern::Independent),
        )
        .x_axis(Axis::new().title("n"))
        .y_axis(Axis::new().title("Seconds"))
        .x_axis2(Axis::new().title("n"));

    let mut plot = Plot::new();
    plot.add_trace(vector_trace);
    plot.add_trace(matrix_trace);
    plot.set_layout(layout);

    Ok(plot)
}

/// All four strategies on one set of axes, linear or log-log.
pub fn plot_strategy_comparison(
    results: &BenchmarkResults,
    title: &str,
    log_scale: bool,
) -> Result<Plot, String> {
    if results.domain.is_empty() {
        return Err("Benchmark domain is empty, nothing to plot".to_string());
    }
    if !results.is_vectorized() {
        return Err("Strategy comparison requires a vectorized benchmark run".to_string());
    }

    let mut plot = Plot::new();
    for (product, color) in Product::ALL.iter().zip(SERIES_COLORS) {
        plot.add_trace(timing_trace(results, *product, color)?);
    }

    let (x_axis, y_axis) = if log_scale {
        (
            Axis::new().title("n").type_(AxisType::Log),
            Axis::new().title("Seconds").type_(AxisType::Log),
        )
    } else {
        (Axis::new().title("n"), Axis::new().title("Seconds"))
    };

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend(Legend::new().x(0.01).y(0.99)),
    );

    Ok(plot)
}

fn row_vec(points: &Array2<f64>, row: usize) -> Vec<f64> {
    points.row(row).to_vec()
}

/// Display a point cloud before (top) and after (bottom) a transform, both
/// in the `[-1, 1]` window with equal aspect.
pub fn plot_before_after(
    old: &Array2<f64>,
    new: &Array2<f64>,
    title: &str,
) -> Result<Plot, String> {
    if old.nrows() != 2 || new.nrows() != 2 {
        return Err("Point clouds must have 2 rows (x and y)".to_string());
    }

    let before = Scatter::new(row_vec(old, 0), row_vec(old, 1))
        .mode(Mode::Markers)
        .name("Before")
        .marker(Marker::new().size(3).color("black"));
    let after = Scatter::new(row_vec(new, 0), row_vec(new, 1))
        .mode(Mode::Markers)
        .name("After")
        .marker(Marker::new().size(3).color("black"))
        .x_axis("x2")
        .y_axis("y2");

    let window = || vec![-1.0, 1.0];
    let layout = Layout::new()
        .title(title)
        .height(900)
        .width(500)
        .grid(
            LayoutGrid::new()
                .rows(2)
                .columns(1)
                .pattern(GridPattern::Independent),
        )
        .x_axis(Axis::new().title("Before").range(window()))
        .y_axis(Axis::new().range(window()).scale_anchor("x"))
        .x_axis2(Axis::new().title("After").range(window()))
        .y_axis2(Axis::new().range(window()).scale_anchor("x2"));

    let mut plot = Plot::new();
    plot.add_trace(before);
    plot.add_trace(after);
    plot.set_layout(layout);

    Ok(plot)
}

/// The earth and moon orbits over the whole interval.
pub fn plot_trajectories(trajectories: &Trajectories, title: &str) -> Result<Plot, String> {
    if trajectories.is_empty() {
        return Err("Trajectories are empty, nothing to plot".to_string());
    }

    let earth = Scatter::new(
        row_vec(&trajectories.earth, 0),
        row_vec(&trajectories.earth, 1),
    )
    .mode(Mode::Lines)
    .name("Earth")
    .line(Line::new().color("blue"));
    let moon = Scatter::new(
        row_vec(&trajectories.moon, 0),
        row_vec(&trajectories.moon, 1),
    )
    .mode(Mode::Lines)
    .name("Moon")
    .line(Line::new().color("green"));

    let mut plot = Plot::new();
    plot.add_trace(earth);
    plot.add_trace(moon);
    plot.set_layout(
        Layout::new()
            .title(title)
            .height(700)
            .width(700)
            .x_axis(Axis::new().title("x"))
            .y_axis(Axis::new().title("y").scale_anchor("x"))
            .legend(Legend::new().x(0.01).y(0.99)),
    );

    Ok(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn results(vectorized: bool) -> BenchmarkResults {
        let times = vec![Duration::from_micros(1), Duration::from_micros(4)];
        BenchmarkResults {
            domain: vec![2, 4],
            vector_times: times.clone(),
            matrix_times: times.clone(),
            ndarray_vector_times: vectorized.then(|| times.clone()),
            ndarray_matrix_times: vectorized.then(|| times.clone()),
        }
    }

    #[test]
    fn comparison_requires_vectorized_run() {
        assert!(plot_strategy_comparison(&results(false), "t", true).is_err());
        assert!(plot_strategy_comparison(&results(true), "t", true).is_ok());
    }

    #[test]
    fn empty_domain_is_rejected() {
        let empty = BenchmarkResults::default();
        assert!(plot_naive_timings(&empty, "t").is_err());
    }

    #[test]
    fn naive_plot_has_two_panels() {
        let plot = plot_naive_timings(&results(false), "Naive").unwrap();
        let json = plot.to_json();
        assert!(json.contains("Matrix-Vector with Lists"));
        assert!(json.contains("\"xaxis\":\"x2\""));
    }
}
