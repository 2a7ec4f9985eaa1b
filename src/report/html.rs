//! Standalone HTML report bundling every chart of a run.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// One titled block of the report, holding one or more rendered plots.
pub struct ReportSection {
    title: String,
    description: Option<String>,
    plots: Vec<Plot>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        ReportSection {
            title: title.to_string(),
            description: None,
            plots: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn add_plot(mut self, plot: Plot) -> Self {
        self.plots.push(plot);
        self
    }
}

/// Collects report sections and renders them into one self-contained page
/// (plots inlined as plotly divs, library loaded from the CDN).
pub struct Report {
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str) -> Self {
        Report {
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn render(&self) -> String {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let markup: Markup = html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                }
                body {
                    h1 { (self.title) }
                    p { "Generated " (generated) }
                    @for (section_idx, block) in self.sections.iter().enumerate() {
                        section {
                            h2 { (block.title) }
                            @if let Some(description) = &block.description {
                                p { (description) }
                            }
                            @for (plot_idx, plot) in block.plots.iter().enumerate() {
                                (PreEscaped(plot.to_inline_html(Some(&format!(
                                    "plot-{}-{}",
                                    section_idx, plot_idx
                                )))))
                            }
                        }
                    }
                }
            }
        };

        markup.into_string()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        log::info!("report written to {}", path.display());
        Ok(())
    }
}
