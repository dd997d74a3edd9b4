//! A minimal self-contained HTML report: a header, titled sections holding
//! free-form content blocks and interactive plotly figures, and a footer.
use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const STYLE: &str = "
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 0 20px; }
header { border-bottom: 2px solid #ddd; margin-bottom: 20px; }
header img { height: 48px; vertical-align: middle; margin-right: 12px; }
section { margin-bottom: 40px; }
table { border-collapse: collapse; }
td, th { border: 1px solid #ccc; padding: 4px 10px; text-align: right; }
footer { color: #888; font-size: 0.8em; border-top: 1px solid #ddd; padding: 10px 0; }
";

pub struct Report {
    name: String,
    version: String,
    logo: Option<String>,
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(name: &str, version: &str, logo: Option<&str>, title: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            logo: logo.map(str::to_string),
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> String {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    header {
                        h1 {
                            @if let Some(logo) = &self.logo {
                                img src=(logo) alt=(self.name);
                            }
                            (self.title)
                        }
                    }
                    @for (idx, section) in self.sections.iter().enumerate() {
                        (section.render(idx))
                    }
                    footer {
                        (format!("{} v{} - generated {}", self.name, self.version, generated))
                    }
                }
            }
        }
        .into_string()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.render())
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
        log::info!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

enum Block {
    Content(Markup),
    Plot(Box<Plot>),
}

pub struct ReportSection {
    title: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(Box::new(plot)));
    }

    pub fn num_plots(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::Plot(_)))
            .count()
    }

    fn render(&self, section_idx: usize) -> Markup {
        html! {
            section {
                h2 { (self.title) }
                @for (block_idx, block) in self.blocks.iter().enumerate() {
                    @match block {
                        Block::Content(markup) => {
                            div class="content" { (markup) }
                        }
                        Block::Plot(plot) => {
                            div class="plot" {
                                (PreEscaped(plot.to_inline_html(Some(&format!(
                                    "plot-{}-{}",
                                    section_idx, block_idx
                                )))))
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotly::Scatter;

    #[test]
    fn renders_sections_and_unique_plot_ids() {
        let mut report = Report::new("lintrans", "0.1.0", None, "Test Report");
        let mut section = ReportSection::new("Overview");
        section.add_content(html! { p { "hello" } });
        for _ in 0..2 {
            let mut plot = Plot::new();
            plot.add_trace(Scatter::new(vec![1.0, 2.0], vec![3.0, 4.0]));
            section.add_plot(plot);
        }
        assert_eq!(section.num_plots(), 2);
        report.add_section(section);

        let page = report.render();
        assert!(page.contains("<h2>Overview</h2>"));
        assert!(page.contains("<p>hello</p>"));
        assert!(page.contains("plot-0-1"));
        assert!(page.contains("plot-0-2"));
        assert!(page.contains(PLOTLY_CDN));
    }
}
