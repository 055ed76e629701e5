pub mod html;
pub mod text;

use crate::check::CheckOutcome;
use crate::config::OutputFormat;
use crate::error::OutputError;
use crate::parser::Report;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn render_report(report: &Report, format: OutputFormat) -> Result<String, OutputError> {
    Ok(match format {
        OutputFormat::Text => text::render_report(report),
        OutputFormat::Html => html::render_report(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

pub fn render_outcome(outcome: &CheckOutcome, format: OutputFormat) -> Result<String, OutputError> {
    Ok(match format {
        OutputFormat::Text => text::render_outcome(outcome),
        OutputFormat::Html => html::render_outcome(outcome),
        OutputFormat::Json => serde_json::to_string_pretty(outcome)?,
    })
}

/// Write rendered content to `path`, or to stdout when no path is given
pub fn write_rendered(path: Option<&Path>, content: &str) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| OutputError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            fs::write(path, content).map_err(|e| OutputError::Write {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| {
                    if content.ends_with('\n') {
                        Ok(())
                    } else {
                        stdout.write_all(b"\n")
                    }
                })
                .map_err(OutputError::Stdout)
        }
    }
}
