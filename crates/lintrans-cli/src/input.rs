//! Configuration loading and command-line overrides.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use lintrans::config::{LabConfig, TransformKind};

use crate::util::validate_csv_file;

/// Load the config file of a subcommand, or the defaults when none was given.
pub fn load_config(matches: &ArgMatches) -> Result<LabConfig> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[lintrans] Using config: {:?}", path);
            LabConfig::from_file(path)?
        }
        None => {
            eprintln!("[lintrans] No config file provided; using defaults.");
            LabConfig::default()
        }
    };

    Ok(config)
}

pub fn bench_config(matches: &ArgMatches) -> Result<LabConfig> {
    let mut config = load_config(matches)?;
    let bench = &mut config.benchmark;

    if let Some(&max_exponent) = matches.get_one::<i32>("max_exponent") {
        bench.max_exponent = max_exponent;
    }
    if matches.get_flag("vectorized") {
        bench.vectorized = true;
    }
    if let Some(&repeats) = matches.get_one::<usize>("repeats") {
        bench.repeats = repeats;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        bench.seed = Some(seed);
    }

    Ok(config)
}

pub fn transform_config(matches: &ArgMatches) -> Result<LabConfig> {
    let mut config = load_config(matches)?;
    let transform = &mut config.transform;

    if let Some(points) = matches.get_one::<PathBuf>("points") {
        transform.points = Some(points.clone());
    }
    if let Some(points) = &transform.points {
        validate_csv_file(points)?;
    }
    if let Some(kind) = matches.get_one::<String>("kind") {
        transform.kind = kind
            .parse::<TransformKind>()
            .map_err(anyhow::Error::msg)
            .context("Invalid --kind")?;
    }
    if let Some(&a) = matches.get_one::<f64>("a") {
        transform.a = a;
    }
    if let Some(&b) = matches.get_one::<f64>("b") {
        transform.b = b;
    }
    if let Some(&theta) = matches.get_one::<f64>("theta") {
        transform.theta = theta;
    }

    Ok(config)
}

pub fn orbit_config(matches: &ArgMatches) -> Result<LabConfig> {
    let mut config = load_config(matches)?;

    if let Some(output_dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = output_dir.clone();
    }

    if let Some(&t_final) = matches.get_one::<f64>("t_final") {
        config.orbit.t_final = t_final;
    }
    if let Some(&omega_earth) = matches.get_one::<f64>("omega_earth") {
        config.orbit.omega_earth = omega_earth;
    }
    if let Some(&omega_moon) = matches.get_one::<f64>("omega_moon") {
        config.orbit.omega_moon = omega_moon;
    }
    if let Some(&steps) = matches.get_one::<usize>("steps") {
        config.orbit.steps = steps;
    }
    if let Some(&interval_ms) = matches.get_one::<u64>("interval") {
        config.animation.interval_ms = interval_ms;
    }
    if let Some(&stride) = matches.get_one::<usize>("stride") {
        config.animation.stride = stride;
    }

    Ok(config)
}
