//! Command implementations for the navigator shell
//!
//! Each command module handles:
//! - Validating its argument
//! - Running the operation against the session
//! - Packing the outcome into a `CommandResponse`

pub mod current;
pub mod history;
pub mod neighbors;
pub mod utils;
pub mod visit;

pub use current::CurrentCommand;
pub use history::HistoryCommand;
pub use history::back::BackCommand;
pub use history::forward::ForwardCommand;
pub use neighbors::NeighborsCommand;
pub use visit::VisitCommand;

use serde::Serialize;

use crate::commands::utils::{current_timestamp, join_argument, new_command_id};
use crate::error::{CliError, Result};
use crate::session::NavigationSession;
use crate::types::{CommandResponse, CommandType};

pub trait Execute {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResponse>;
}

/// Execution context shared by all commands of one shell
pub struct CommandContext {
    pub session: NavigationSession,
}

impl CommandContext {
    pub fn new(session: NavigationSession) -> Self {
        Self { session }
    }

    /// Build a successful response carrying `data`
    pub fn respond<T: Serialize>(
        &self,
        command_type: CommandType,
        data: T,
    ) -> Result<CommandResponse> {
        Ok(CommandResponse {
            id: new_command_id(),
            command: command_type,
            success: true,
            data: Some(serde_json::to_value(data)?),
            error: None,
            timestamp: current_timestamp(),
        })
    }

    /// Build a failed response from an error the user should see
    pub fn reject(&self, command_type: CommandType, error: &CliError) -> CommandResponse {
        CommandResponse {
            id: new_command_id(),
            command: command_type,
            success: false,
            data: None,
            error: Some(error.to_string()),
            timestamp: current_timestamp(),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(NavigationSession::new())
    }
}

// =============================================================================
// Input Parsing
// =============================================================================

/// One line of shell input
pub enum Command {
    Visit(VisitCommand),
    Back(BackCommand),
    Forward(ForwardCommand),
    Current(CurrentCommand),
    History(HistoryCommand),
    Neighbors(NeighborsCommand),
    Help,
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse a line of input
    ///
    /// The first word selects the command (case-insensitive); the remaining
    /// words are joined with single spaces to form the argument.
    ///
    /// # Errors
    /// `CliError::InvalidArguments` if `visit` or `neighbors` has no argument.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Empty);
        };
        let argument = join_argument(words);

        let command = match name.to_lowercase().as_str() {
            "visit" => Command::Visit(VisitCommand::new(require(argument, "visit <url>")?)),
            "back" => Command::Back(BackCommand::default()),
            "forward" => Command::Forward(ForwardCommand::default()),
            "current" => Command::Current(CurrentCommand::default()),
            "history" => Command::History(HistoryCommand::default()),
            "neighbors" => {
                Command::Neighbors(NeighborsCommand::new(require(argument, "neighbors <url>")?))
            }
            "help" => Command::Help,
            "exit" => Command::Exit,
            _ => Command::Unknown(name.to_string()),
        };
        Ok(command)
    }

    /// Run the command if it touches the session
    pub fn execute(&self, ctx: &mut CommandContext) -> Option<Result<CommandResponse>> {
        let executable: &dyn Execute = match self {
            Command::Visit(cmd) => cmd,
            Command::Back(cmd) => cmd,
            Command::Forward(cmd) => cmd,
            Command::Current(cmd) => cmd,
            Command::History(cmd) => cmd,
            Command::Neighbors(cmd) => cmd,
            Command::Help | Command::Exit | Command::Empty | Command::Unknown(_) => return None,
        };
        Some(executable.execute(ctx))
    }
}

fn require(argument: String, usage: &str) -> Result<String> {
    if argument.is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "missing URL. Usage: {usage}"
        )));
    }
    Ok(argument)
}

// =============================================================================
// Tests
// =============================================================================
