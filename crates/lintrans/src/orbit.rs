//! Earth/Moon trajectories built from repeated rotations.
use std::f64::consts::TAU;

use itertools_num::linspace;
use ndarray::{arr1, Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::transform::rotation_matrix;

/// Distance from the sun to the earth.
pub const EARTH_ORBIT_RADIUS: f64 = 10.0;
/// Distance from the earth to the moon.
pub const MOON_ORBIT_RADIUS: f64 = 1.0;

/// Parameters of the simulated time interval `[0, t_final]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub t_final: f64,
    /// Angular velocity of the earth about the sun.
    pub omega_earth: f64,
    /// Angular velocity of the moon about the earth.
    pub omega_moon: f64,
    /// Number of time steps, including both endpoints.
    pub steps: usize,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            t_final: TAU,
            omega_earth: 1.0,
            omega_moon: 13.0,
            steps: 400,
        }
    }
}

/// Positions over time; column `k` is the position at time step `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectories {
    pub times: Array1<f64>,
    pub earth: Array2<f64>,
    pub moon: Array2<f64>,
}

impl Trajectories {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Compute the earth and moon trajectories for `config`.
///
/// The earth starts at `(10, 0)` and the moon at `(11, 0)`. At time `t` the
/// earth is `R(t * omega_earth) (10, 0)` and the moon is
/// `R(t * omega_moon) (1, 0)` offset by the earth.
pub fn solar_system(config: &OrbitConfig) -> Trajectories {
    let times: Array1<f64> = if config.steps == 0 {
        Array1::zeros(0)
    } else {
        linspace(0.0, config.t_final, config.steps).collect()
    };

    let earth_start = arr1(&[EARTH_ORBIT_RADIUS, 0.0]);
    let moon_offset = arr1(&[MOON_ORBIT_RADIUS, 0.0]);

    let mut earth = Array2::zeros((2, times.len()));
    let mut moon = Array2::zeros((2, times.len()));
    for (k, &t) in times.iter().enumerate() {
        let earth_pos = rotation_matrix(t * config.omega_earth).dot(&earth_start);
        let moon_pos = rotation_matrix(t * config.omega_moon).dot(&moon_offset) + &earth_pos;
        earth.column_mut(k).assign(&earth_pos);
        moon.column_mut(k).assign(&moon_pos);
    }

    log::debug!(
        "Computed {} orbit steps over [0, {:.3}]",
        times.len(),
        config.t_final
    );

    Trajectories { times, earth, moon }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn starts_on_the_x_axis() {
        let traj = solar_system(&OrbitConfig::default());
        assert_eq!(traj.len(), 400);
        assert_abs_diff_eq!(traj.earth[(0, 0)], 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(traj.earth[(1, 0)], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(traj.moon[(0, 0)], 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(traj.moon[(1, 0)], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_is_empty() {
        let traj = solar_system(&OrbitConfig {
            steps: 0,
            ..OrbitConfig::default()
        });
        assert!(traj.is_empty());
        assert_eq!(traj.earth.shape(), &[2, 0]);
    }
}
