pub mod bench;
pub mod orbit;
pub mod transform;

use std::path::{Path, PathBuf};

use maud::{html, Markup};
use serde::Serialize;

use lintrans::config::LabConfig;

use crate::util::ensure_dir;

/// Where a subcommand writes its report: `output_file` when given, otherwise
/// `default_name` inside the configured output directory. The parent
/// directory is created.
pub(crate) fn report_path(
    config: &LabConfig,
    output_file: Option<&Path>,
    default_name: &str,
) -> anyhow::Result<PathBuf> {
    let path = match output_file {
        Some(path) => path.to_path_buf(),
        None => config.output_path(default_name),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    Ok(path)
}

/// A preformatted JSON dump of `value`, styled like a code block.
pub fn config_block<T: Serialize>(value: &T) -> anyhow::Result<Markup> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(html! {
        style {
            ".code-container {
                background-color: #f5f5f5;
                padding: 10px;
                border-radius: 5px;
                overflow-x: auto;
                font-family: monospace;
                white-space: pre-wrap;
            }"
        }
        div class="code-container" {
            pre {
                code { (json) }
            }
        }
    })
}
