//! `lintrans orbit`: earth and moon trajectories and their animation.
use anyhow::Result;
use maud::html;

use lintrans::animation::Animation;
use lintrans::config::LabConfig;
use lintrans::orbit::{solar_system, Trajectories};
use lintrans::report::plots::plot_trajectories;
use lintrans::report::{Report, ReportSection};

use crate::commands::config_block;
use crate::util::ensure_dir;

pub const REPORT_FILE: &str = "lintrans_orbit.html";
pub const ANIMATION_FILE: &str = "lintrans_orbit_animation.html";

pub fn run_orbit(config: &LabConfig, animate: bool) -> Result<Trajectories> {
    let trajectories = solar_system(&config.orbit);
    log::info!(
        "Computed {} time steps over [0, {:.3}]",
        trajectories.len(),
        config.orbit.t_final
    );

    ensure_dir(&config.output_dir)?;

    let mut report = Report::new("lintrans", &config.version, None, "Earth and Moon Orbits");
    {
        let mut section = ReportSection::new("Trajectories");
        section.add_content(html! {
            p {
                "The earth orbits the sun at radius 10 with angular velocity "
                (config.orbit.omega_earth)
                "; the moon orbits the earth at radius 1 with angular velocity "
                (config.orbit.omega_moon) "."
            }
        });
        if trajectories.is_empty() {
            section.add_content(html! { p { "No time steps were requested." } });
        } else {
            let plot = plot_trajectories(&trajectories, "Earth and Moon")
                .map_err(anyhow::Error::msg)?;
            section.add_plot(plot);
        }
        report.add_section(section);
    }
    {
        let mut config_section = ReportSection::new("Configuration");
        config_section.add_content(config_block(&config.orbit)?);
        report.add_section(config_section);
    }
    report.save_to_file(config.output_path(REPORT_FILE))?;

    if animate {
        let animation = Animation::new(trajectories.clone(), config.animation.clone());
        animation.save_to_file(config.output_path(ANIMATION_FILE), "Earth and Moon")?;
    }

    Ok(trajectories)
}
