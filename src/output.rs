//! Output formatting for the navigator
//!
//! Handles formatting command responses for terminal display.
//! Supports human-readable, JSON and quiet output formats.

use std::io::Write;

use clap::ValueEnum;
use serde::de::DeserializeOwned;

use crate::error::{CliError, Result};
use crate::types::{CommandResponse, CommandType, HistoryData, NeighborsData, PageData};

// =============================================================================
// Output Format
// =============================================================================

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// One JSON object per command for scripting
    Json,
    /// Quiet mode - errors only
    Quiet,
}

// =============================================================================
// Output Formatter
// =============================================================================

/// Formats command responses for display
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a command response and write it to `out`
    pub fn write_response<W: Write>(&self, out: &mut W, response: &CommandResponse) -> Result<()> {
        let output = self.render(response)?;
        if !output.is_empty() {
            writeln!(out, "{}", output)?;
        }
        Ok(())
    }

    /// Render a response as it would be printed (empty string for nothing)
    pub fn render(&self, response: &CommandResponse) -> Result<String> {
        if response.success {
            self.format_success(response)
        } else {
            self.format_error(response)
        }
    }

    /// Render an error raised before a command could run
    pub fn render_error(&self, error: &CliError) -> String {
        match self.format {
            OutputFormat::Human => format!("Error: {}", error),
            OutputFormat::Json => {
                serde_json::json!({"success": false, "error": error.to_string()}).to_string()
            }
            OutputFormat::Quiet => error.to_string(),
        }
    }

    /// Render the command help
    ///
    /// `help` is a heading line followed by one indented line per command.
    /// JSON carries the command lines as a list; quiet prints nothing.
    pub fn render_help(&self, help: &str) -> String {
        match self.format {
            OutputFormat::Human => help.to_string(),
            OutputFormat::Json => {
                let commands: Vec<&str> = help.lines().skip(1).map(str::trim).collect();
                serde_json::json!({"success": true, "data": {"commands": commands}}).to_string()
            }
            OutputFormat::Quiet => String::new(),
        }
    }

    /// Format a success response
    fn format_success(&self, response: &CommandResponse) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Human => format_human(response),
            OutputFormat::Json => serde_json::to_string(response)?,
            OutputFormat::Quiet => String::new(),
        })
    }

    /// Format an error response
    fn format_error(&self, response: &CommandResponse) -> Result<String> {
        let error_msg = response.error.as_deref().unwrap_or("Unknown error");
        Ok(match self.format {
            OutputFormat::Human => format!("Error: {}", error_msg),
            OutputFormat::Json => serde_json::to_string(response)?,
            OutputFormat::Quiet => error_msg.to_string(),
        })
    }
}

fn format_human(response: &CommandResponse) -> String {
    match response.command {
        CommandType::Visit => data::<PageData>(response)
            .and_then(|page| page.current)
            .map(|url| format!("Visiting: {}", url))
            .unwrap_or_default(),
        CommandType::Back | CommandType::Forward | CommandType::Current => {
            data::<PageData>(response)
                .map(|page| format_page(response.command, &page))
                .unwrap_or_default()
        }
        CommandType::History => data::<HistoryData>(response)
            .map(|history| format_history(&history))
            .unwrap_or_default(),
        CommandType::Neighbors => data::<NeighborsData>(response)
            .map(|neighbors| format_neighbors(&neighbors))
            .unwrap_or_default(),
    }
}

fn data<T: DeserializeOwned>(response: &CommandResponse) -> Option<T> {
    response
        .data
        .clone()
        .and_then(|value| serde_json::from_value(value).ok())
}

// =============================================================================
// Specialized Formatters
// =============================================================================

/// Format the outcome of back, forward or current
pub fn format_page(command: CommandType, data: &PageData) -> String {
    match command {
        CommandType::Back if !data.moved => "no more back history".to_string(),
        CommandType::Forward if !data.moved => "no more forward history".to_string(),
        _ => format!("Current page: {}", data.current.as_deref().unwrap_or("none")),
    }
}

/// Format a history snapshot for human-readable output
pub fn format_history(data: &HistoryData) -> String {
    format!(
        "Back history: {}\nCurrent page: {}\nForward history: {}",
        format_list(&data.back),
        data.current.as_deref().unwrap_or("none"),
        format_list(&data.forward),
    )
}

/// Format the neighbors of a page for human-readable output
pub fn format_neighbors(data: &NeighborsData) -> String {
    if data.neighbors.is_empty() {
        format!("Neighbors of {}: none", data.url)
    } else {
        format!("Neighbors of {}: {}", data.url, format_list(&data.neighbors))
    }
}

fn format_list(pages: &[String]) -> String {
    format!("[{}]", pages.join(", "))
}

// =============================================================================
// Tests
// =============================================================================
