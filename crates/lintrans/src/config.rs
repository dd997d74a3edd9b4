use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::bench::BenchmarkConfig;
use crate::orbit::OrbitConfig;
use crate::transform::Transform;

/// Central configuration for every lab problem.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LabConfig {
    pub version: String,
    /// Directory reports and animations are written to.
    pub output_dir: PathBuf,
    pub benchmark: BenchmarkConfig,
    pub transform: TransformConfig,
    pub orbit: OrbitConfig,
    pub animation: AnimationConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            output_dir: PathBuf::from("."),
            benchmark: BenchmarkConfig::default(),
            transform: TransformConfig::default(),
            orbit: OrbitConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl LabConfig {
    /// Load a configuration file, falling back to the default for every
    /// missing or invalid top-level field.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        Self::from_json_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    pub fn from_json_str(config_json: &str) -> Result<Self> {
        let partial: serde_json::Value = serde_json::from_str(config_json)?;
        let mut config = LabConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::debug!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(output_dir);
        load_or_default!(benchmark);
        load_or_default!(transform);
        load_or_default!(orbit);
        load_or_default!(animation);

        Ok(config)
    }

    /// `output_dir` joined with `file_name`.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Supported transform kinds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Stretch,
    Shear,
    #[serde(alias = "rotation")]
    Rotate,
    #[serde(alias = "reflection")]
    Reflect,
    #[serde(alias = "translation")]
    Translate,
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Stretch => "stretch",
            TransformKind::Shear => "shear",
            TransformKind::Rotate => "rotate",
            TransformKind::Reflect => "reflect",
            TransformKind::Translate => "translate",
        }
    }
}

impl FromStr for TransformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stretch" => Ok(TransformKind::Stretch),
            "shear" => Ok(TransformKind::Shear),
            "rotate" | "rotation" => Ok(TransformKind::Rotate),
            "reflect" | "reflection" => Ok(TransformKind::Reflect),
            "translate" | "translation" => Ok(TransformKind::Translate),
            _ => Err(format!(
                "Unknown transform: {}. Expected one of stretch, shear, rotate, reflect, translate",
                s
            )),
        }
    }
}

/// Which transform to apply and its parameters.
///
/// `a` and `b` are the x/y factors (stretch, shear), the reflection axis
/// direction, or the translation offset; `theta` is the rotation angle.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TransformConfig {
    pub kind: TransformKind,
    pub a: f64,
    pub b: f64,
    pub theta: f64,
    /// CSV file of `x,y` points; the built-in figure is used when unset.
    pub points: Option<PathBuf>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            kind: TransformKind::Rotate,
            a: 1.0,
            b: 1.0,
            theta: std::f64::consts::FRAC_PI_4,
            points: None,
        }
    }
}

impl TransformConfig {
    pub fn to_transform(&self) -> Transform {
        let (a, b) = (self.a, self.b);
        match self.kind {
            TransformKind::Stretch => Transform::Stretch { a, b },
            TransformKind::Shear => Transform::Shear { a, b },
            TransformKind::Rotate => Transform::Rotation { theta: self.theta },
            TransformKind::Reflect => Transform::Reflection { a, b },
            TransformKind::Translate => Transform::Translation { a, b },
        }
    }
}
