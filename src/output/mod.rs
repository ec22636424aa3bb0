//! Output formatting for subnet reports.
//!
//! This module handles formatting and outputting analysis results:
//! - [`format`] - grouped counts
//! - [`labels`] - display labels and error messages per language
//! - [`terminal`] - labelled table with colored badges
//! - [`csv`] - CSV output
//! - [`json`] - JSON output

mod csv;
mod format;
mod json;
mod labels;
mod terminal;

use crate::config::{Config, OutputFormat};
use crate::Analysis;
use std::error::Error;

pub use csv::{csv_header, csv_row};
pub use format::group_digits;
pub use json::to_json;
pub use labels::{error_message, label, Label};
pub use terminal::{render_badges, render_error, render_report, table_rows};

/// Render all analyses in the configured output format.
pub fn render(analyses: &[Analysis], config: &Config) -> Result<String, Box<dyn Error>> {
    log::info!(
        "render() {} result(s) as {:?} ({})",
        analyses.len(),
        config.format,
        config.lang
    );
    let out = match config.format {
        OutputFormat::Table => analyses
            .iter()
            .map(|a| match &a.result {
                Ok(report) => render_report(&a.input, report, config.lang),
                Err(e) => render_error(&a.input, e, config.lang),
            })
            .collect::<Vec<String>>()
            .join("\n"),
        OutputFormat::Csv => {
            let mut lines = vec![csv_header()];
            lines.extend(analyses.iter().map(csv_row));
            lines.join("\n") + "\n"
        }
        OutputFormat::Json => to_json(analyses)? + "\n",
    };
    Ok(out)
}
