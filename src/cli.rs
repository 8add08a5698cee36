//! CLI argument parsing using clap
//!
//! Process-level options; the navigation commands themselves are read
//! line by line by the shell.

use crate::output::OutputFormat;
use clap::Parser;

/// Navigator - Browser Navigation History Simulator
#[derive(Debug, Parser)]
#[command(name = "navigator")]
#[command(
    author,
    version,
    about = "Navigator - Browser Navigation History Simulator",
    long_about = None,
    after_help = "COMMANDS (entered at the prompt):\n  visit <url>        Visit a new page\n  back               Go to the previous page\n  forward            Go to the next page\n  current            Show the current page\n  history            Show the navigation history\n  neighbors <url>    Show pages visited directly from a page\n  help               Show this command list\n  exit               End the session\n\nEXAMPLES:\n  navigator\n  navigator -c \"visit a.com\" -c \"visit b.com\" -c back -c history\n  navigator -o json --no-banner < commands.txt\n\nENVIRONMENT VARIABLES:\n  NAVIGATOR_PROMPT   Prompt shown before each command\n  NAVIGATOR_BANNER   Set to 0/false/off to hide the startup banner\n  NAVIGATOR_LOG      Log filter (e.g. debug, navigator=trace)"
)]
pub struct Cli {
    /// Output format: human (plain text), json (one JSON object per command), quiet (errors only)
    #[arg(short, long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Prompt shown before each command (overrides NAVIGATOR_PROMPT)
    #[arg(long)]
    pub prompt: Option<String>,

    /// Do not print the startup banner and command help
    #[arg(long)]
    pub no_banner: bool,

    /// Run this command line instead of reading stdin (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,
}

// =============================================================================
// Parse Function
// =============================================================================

/// Parse command line arguments from the process
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse command line arguments from iterator (for testing)
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
