use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use lintrans::config::LabConfig;
use lintrans_cli::commands::bench::run_bench;
use lintrans_cli::commands::orbit::run_orbit;
use lintrans_cli::commands::transform::run_transform;
use lintrans_cli::input::{bench_config, orbit_config, transform_config};

const CONFIG_HELP: &str = "Path to a JSON configuration file. Missing fields fall back to defaults.";

fn config_arg() -> Arg {
    Arg::new("config")
        .help(CONFIG_HELP)
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn output_file_arg() -> Arg {
    Arg::new("output_file")
        .short('o')
        .long("output")
        .help(
            "File the HTML report is written to. \
             Overrides the directory specified in the configuration file.",
        )
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn float_arg(name: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(long)
        .help(help)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINTRANS_LOG", "error,lintrans=info"))
        .init();

    let matches = Command::new("lintrans")
        .version(clap::crate_version!())
        .about("Linear transformations lab: naive vs. vectorized products, planar transforms, orbit animation")
        .subcommand(
            Command::new("bench")
                .about("Time naive list-of-lists products (and optionally ndarray) for n = 2^1 ..= 2^N")
                .arg(config_arg())
                .arg(output_file_arg())
                .arg(
                    Arg::new("max_exponent")
                        .short('n')
                        .long("max-exponent")
                        .help("Largest exponent N of the size domain. N <= 0 runs nothing.")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("vectorized")
                        .long("vectorized")
                        .help("Also time ndarray's dot on the same inputs.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("repeats")
                        .long("repeats")
                        .help("Time each product this many times and keep the median.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the random inputs.")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("transform")
                .about("Apply a planar transform to a point cloud and plot it before and after")
                .arg(
                    Arg::new("points")
                        .help("CSV file of x,y points. Defaults to a built-in figure.")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(CONFIG_HELP)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_file_arg())
                .arg(
                    Arg::new("kind")
                        .short('k')
                        .long("kind")
                        .help("Transform to apply.")
                        .value_parser(["stretch", "shear", "rotate", "reflect", "translate"]),
                )
                .arg(float_arg("a", "a", "x factor, axis x-component or x offset."))
                .arg(float_arg("b", "b", "y factor, axis y-component or y offset."))
                .arg(float_arg("theta", "theta", "Rotation angle in radians."))
                .arg(
                    Arg::new("save_points")
                        .long("save-points")
                        .help("Write the transformed points to this CSV file.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("orbit")
                .about("Plot and animate the earth orbiting the sun and the moon orbiting the earth")
                .arg(config_arg())
                .arg(
                    Arg::new("output_dir")
                        .short('o')
                        .long("output-dir")
                        .help("Directory the report and animation are written to. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::DirPath),
                )
                .arg(float_arg("t_final", "t-final", "End of the time interval [0, T]."))
                .arg(float_arg("omega_earth", "omega-earth", "Angular velocity of the earth."))
                .arg(float_arg("omega_moon", "omega-moon", "Angular velocity of the moon."))
                .arg(
                    Arg::new("steps")
                        .long("steps")
                        .help("Number of time steps.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .help("Milliseconds per animation frame.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("stride")
                        .long("stride")
                        .help("Animate every stride-th time step.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("no_animation")
                        .long("no-animation")
                        .help("Skip writing the animation page.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .after_help("Without a subcommand the default orbit demo is written to the current directory.")
        .get_matches();

    match matches.subcommand() {
        Some(("bench", sub_m)) => handle_bench(sub_m),
        Some(("transform", sub_m)) => handle_transform(sub_m),
        Some(("orbit", sub_m)) => handle_orbit(sub_m),
        None => {
            log::info!("[lintrans] No subcommand; running the default orbit demo");
            exit_on_error("Orbit", run_orbit(&LabConfig::default(), true).map(|_| ()))
        }
        _ => unreachable!("Unknown subcommands are rejected by clap"),
    }
}

fn exit_on_error(what: &str, result: Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", what, e);
            std::process::exit(1)
        }
    }
}

fn handle_bench(matches: &ArgMatches) -> Result<()> {
    let config = bench_config(matches)?;
    let output_file = matches.get_one::<PathBuf>("output_file");
    log::info!(
        "[lintrans::bench] Sizes 2^1 ..= 2^{}",
        config.benchmark.max_exponent
    );
    exit_on_error(
        "Benchmark",
        run_bench(&config, output_file.map(PathBuf::as_path)).map(|_| ()),
    )
}

fn handle_transform(matches: &ArgMatches) -> Result<()> {
    let config = transform_config(matches)?;
    let output_file = matches.get_one::<PathBuf>("output_file");
    let save_points = matches.get_one::<PathBuf>("save_points");
    exit_on_error(
        "Transform",
        run_transform(
            &config,
            output_file.map(PathBuf::as_path),
            save_points.map(PathBuf::as_path),
        )
        .map(|_| ()),
    )
}

fn handle_orbit(matches: &ArgMatches) -> Result<()> {
    let config = orbit_config(matches)?;
    let animate = !matches.get_flag("no_animation");
    exit_on_error("Orbit", run_orbit(&config, animate).map(|_| ()))
}
