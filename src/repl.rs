//! Interactive command loop
//!
//! Reads one command per line, runs it against the session and writes the
//! rendered result. Generic over reader and writer so it can be driven from
//! stdin/stdout or from in-memory buffers.

use std::io::{BufRead, Write};

use crate::commands::{Command, CommandContext};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{OutputFormat, OutputFormatter};
use crate::session::NavigationSession;

pub const BANNER: &str = "Navigator - browser navigation history simulator";

pub const HELP: &str = "Available commands:
  visit <url>        Visit a new page
  back               Go to the previous page
  forward            Go to the next page
  current            Show the current page
  history            Show the navigation history
  neighbors <url>    Show pages visited directly from a page
  help               Show this command list
  exit               End the session";

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    ctx: CommandContext,
    formatter: OutputFormatter,
    prompt: String,
    show_banner: bool,
    executed: usize,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, formatter: OutputFormatter, config: &Config) -> Self {
        Self {
            input,
            output,
            ctx: CommandContext::new(NavigationSession::new()),
            formatter,
            prompt: config.prompt.clone(),
            show_banner: config.show_banner,
            executed: 0,
        }
    }

    pub fn session(&self) -> &NavigationSession {
        &self.ctx.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and run lines until `exit` or end of input.
    /// Returns the number of commands executed against the session.
    pub fn run(&mut self) -> Result<usize> {
        if self.show_banner {
            writeln!(self.output, "{}", BANNER)?;
            writeln!(self.output, "{}", HELP)?;
        }

        let mut line = String::new();
        loop {
            if !self.prompt.is_empty() {
                write!(self.output, "{}", self.prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                if self.is_human() {
                    writeln!(self.output)?;
                }
                break;
            }

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        if self.is_human() {
            writeln!(self.output, "Exiting...")?;
        }
        Ok(self.executed)
    }

    /// Run the given lines in order, stopping early at `exit`
    pub fn run_script<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if self.handle_line(line.as_ref())? == Flow::Exit {
                break;
            }
        }
        Ok(self.executed)
    }

    /// Parse and run a single line
    ///
    /// Only write failures are returned as errors; bad input is reported to
    /// the user and the loop goes on.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                tracing::info!(error = %e, "rejected input");
                let rendered = self.formatter.render_error(&e);
                writeln!(self.output, "{}", rendered)?;
                return Ok(Flow::Continue);
            }
        };

        match &command {
            Command::Empty => return Ok(Flow::Continue),
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => {
                let rendered = self.formatter.render_help(HELP);
                if !rendered.is_empty() {
                    writeln!(self.output, "{}", rendered)?;
                }
                return Ok(Flow::Continue);
            }
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "unknown command");
                if self.is_human() {
                    writeln!(self.output, "Unknown command: {}", name)?;
                    writeln!(self.output, "{}", HELP)?;
                } else {
                    let rendered = self
                        .formatter
                        .render_error(&CliError::UnknownCommand(name.clone()));
                    writeln!(self.output, "{}", rendered)?;
                }
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        if let Some(result) = command.execute(&mut self.ctx) {
            let response = result?;
            self.executed += 1;
            tracing::debug!(
                command = ?response.command,
                success = response.success,
                "executed command"
            );
            if let Some(error) = &response.error {
                tracing::info!(command = ?response.command, error = %error, "command failed");
            }
            self.formatter.write_response(&mut self.output, &response)?;
        }
        Ok(Flow::Continue)
    }

    fn is_human(&self) -> bool {
        self.formatter.format() == OutputFormat::Human
    }
}

// =============================================================================
// Tests
// =============================================================================
