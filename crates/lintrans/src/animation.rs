//! Frame-by-frame animation of the earth orbiting the sun and the moon
//! orbiting the earth.
//!
//! [`Animation::frame`] is the per-frame update: it returns the four visual
//! elements (earth dot, earth path, moon dot, moon path) for one time step.
//! The renderer calls it once per shown frame, in order, and lays the frames
//! out as an SVG whose groups are switched on one after another.
use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use ndarray::{s, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::orbit::Trajectories;

/// Half-width of the square viewing window centered at the sun.
const WINDOW: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time each frame stays on screen, in milliseconds.
    pub interval_ms: u64,
    /// Render every `stride`-th time step.
    pub stride: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 25,
            stride: 1,
        }
    }
}

/// The visual state at one time step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub earth_dot: (f64, f64),
    /// Earth positions strictly before `index`.
    pub earth_path: Vec<(f64, f64)>,
    pub moon_dot: (f64, f64),
    /// Moon positions strictly before `index`.
    pub moon_path: Vec<(f64, f64)>,
}

pub struct Animation {
    trajectories: Trajectories,
    config: AnimationConfig,
}

impl Animation {
    pub fn new(trajectories: Trajectories, config: AnimationConfig) -> Self {
        Self {
            trajectories,
            config,
        }
    }

    /// Number of time steps available as frames.
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.config.interval_ms)
    }

    /// Update the four earth and moon elements for time step `index`.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        if index >= self.len() {
            return None;
        }
        let earth = &self.trajectories.earth;
        let moon = &self.trajectories.moon;
        Some(Frame {
            index,
            earth_dot: (earth[(0, index)], earth[(1, index)]),
            earth_path: columns(earth, index),
            moon_dot: (moon[(0, index)], moon[(1, index)]),
            moon_path: columns(moon, index),
        })
    }

    /// Indices of the frames that are rendered, in display order.
    pub fn frame_indices(&self) -> impl Iterator<Item = usize> {
        (0..self.len()).step_by(self.config.stride.max(1))
    }

    /// All rendered frames, in display order.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.frame_indices().filter_map(move |index| self.frame(index))
    }

    /// The animation as an inline SVG element.
    pub fn render_svg(&self) -> Markup {
        let frames: Vec<Frame> = self.frames().collect();
        let total = frames.len();
        let duration_ms = total as u64 * self.config.interval_ms;
        let view_box = format!("{} {} {} {}", -WINDOW, -WINDOW, 2.0 * WINDOW, 2.0 * WINDOW);

        html! {
            svg xmlns="http://www.w3.org/2000/svg" viewBox=(view_box) width="600" height="600" {
                rect x=(fmt_coord(-WINDOW)) y=(fmt_coord(-WINDOW)) width=(fmt_coord(2.0 * WINDOW)) height=(fmt_coord(2.0 * WINDOW)) fill="white" {}
                // flip so +y points up
                g transform="scale(1,-1)" {
                    polygon points=(star_points(0.0, 0.0, 1.5, 0.6)) fill="gold" stroke="orange" stroke-width="0.05" {}
                    @for (slot, frame) in frames.iter().enumerate() {
                        g visibility=(if total == 1 { "visible" } else { "hidden" }) {
                            @if total > 1 {
                                animate attributeName="visibility"
                                    values=(visibility_values(slot == 0))
                                    keyTimes=(key_times(slot, total))
                                    dur=(format!("{}ms", duration_ms))
                                    calcMode="discrete"
                                    repeatCount="indefinite" {}
                            }
                            @if frame.earth_path.len() > 1 {
                                polyline points=(polyline_points(&frame.earth_path)) fill="none" stroke="blue" stroke-width="0.1" {}
                            }
                            @if frame.moon_path.len() > 1 {
                                polyline points=(polyline_points(&frame.moon_path)) fill="none" stroke="green" stroke-width="0.05" {}
                            }
                            circle cx=(fmt_coord(frame.earth_dot.0)) cy=(fmt_coord(frame.earth_dot.1)) r="0.5" fill="blue" {}
                            circle cx=(fmt_coord(frame.moon_dot.0)) cy=(fmt_coord(frame.moon_dot.1)) r="0.25" fill="green" {}
                        }
                    }
                }
            }
        }
    }

    /// A standalone HTML page holding the animation.
    pub fn render_html(&self, title: &str) -> String {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (title) }
                    style { (PreEscaped("body { font-family: sans-serif; text-align: center; }")) }
                }
                body {
                    h1 { (title) }
                    (self.render_svg())
                    p {
                        (format!(
                            "{} frames, {} ms per frame",
                            self.frame_indices().count(),
                            self.config.interval_ms
                        ))
                    }
                }
            }
        }
        .into_string()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, title: &str) -> Result<()> {
        std::fs::write(&path, self.render_html(title))
            .with_context(|| format!("Failed to write animation: {}", path.as_ref().display()))?;
        log::info!("Animation saved to: {}", path.as_ref().display());
        Ok(())
    }
}

fn columns(positions: &Array2<f64>, end: usize) -> Vec<(f64, f64)> {
    positions
        .slice(s![.., ..end])
        .axis_iter(Axis(1))
        .map(|column| (column[0], column[1]))
        .collect()
}

fn visibility_values(first: bool) -> &'static str {
    if first {
        "visible;hidden"
    } else {
        "hidden;visible;hidden"
    }
}

/// Discrete key times showing frame `slot` of `total` during
/// `[slot / total, (slot + 1) / total)` of the loop.
fn key_times(slot: usize, total: usize) -> String {
    let start = slot as f64 / total as f64;
    let end = (slot + 1) as f64 / total as f64;
    if slot == 0 {
        format!("0;{:.6}", end)
    } else {
        format!("0;{:.6};{:.6}", start, end)
    }
}

fn fmt_coord(value: f64) -> String {
    format!("{:.4}", value)
}

fn polyline_points(points: &[(f64, f64)]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (idx, (x, y)) in points.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.4},{:.4}", x, y);
    }
    out
}

/// Vertices of a five-pointed star centered at `(cx, cy)`.
fn star_points(cx: f64, cy: f64, outer: f64, inner: f64) -> String {
    let vertices: Vec<(f64, f64)> = (0..10)
        .map(|k| {
            let radius = if k % 2 == 0 { outer } else { inner };
            let angle = std::f64::consts::FRAC_PI_2 + k as f64 * std::f64::consts::PI / 5.0;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    polyline_points(&vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::{solar_system, OrbitConfig};

    fn small_animation(stride: usize) -> Animation {
        let traj = solar_system(&OrbitConfig {
            steps: 10,
            ..OrbitConfig::default()
        });
        Animation::new(
            traj,
            AnimationConfig {
                interval_ms: 25,
                stride,
            },
        )
    }

    #[test]
    fn key_times_cover_the_slot() {
        assert_eq!(key_times(0, 4), "0;0.250000");
        assert_eq!(key_times(3, 4), "0;0.750000;1.000000");
    }

    #[test]
    fn stride_skips_frames() {
        let anim = small_animation(3);
        let indices: Vec<usize> = anim.frame_indices().collect();
        assert_eq!(indices, vec![0, 3, 6, 9]);
        assert_eq!(anim.frames().count(), 4);
    }

    #[test]
    fn svg_contains_one_group_per_frame() {
        let anim = small_animation(1);
        let svg = anim.render_svg().into_string();
        assert_eq!(svg.matches("<animate ").count(), 10);
        assert!(svg.contains("viewBox=\"-15 -15 30 30\""));
    }
}
