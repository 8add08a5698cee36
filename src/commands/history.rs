//! Browser history navigation commands
//!
//! Commands for moving through and inspecting history:
//! - back: Go back in history
//! - forward: Go forward in history
//! - history: Show back pages, current page and forward pages

pub mod back;
pub mod forward;

use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::{CommandResponse, CommandType, HistoryData};

#[derive(Default)]
pub struct HistoryCommand {}

impl Execute for HistoryCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResponse> {
        let data: HistoryData = ctx.session.history_snapshot();
        ctx.respond(CommandType::History, data)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::back::BackCommand;
    use super::forward::ForwardCommand;
    use super::*;
    use crate::types::PageData;

    fn context_with(pages: &[&str]) -> CommandContext {
        let mut ctx = CommandContext::default();
        for page in pages {
            ctx.session.visit(page).unwrap();
        }
        ctx
    }

    fn page_data(response: CommandResponse) -> PageData {
        serde_json::from_value(response.data.unwrap()).unwrap()
    }

    #[test]
    fn back_reports_new_current_page() {
        let mut ctx = context_with(&["a", "b"]);
        let response = BackCommand::default().execute(&mut ctx).unwrap();

        assert!(response.success);
        assert_eq!(response.command, CommandType::Back);
        assert_eq!(
            page_data(response),
            PageData {
                moved: true,
                current: Some("a".to_string()),
            }
        );
    }

    #[test]
    fn back_without_history_succeeds_without_moving() {
        let mut ctx = context_with(&["a"]);
        let response = BackCommand::default().execute(&mut ctx).unwrap();

        assert!(response.success);
        let data = page_data(response);
        assert!(!data.moved);
        assert_eq!(data.current.as_deref(), Some("a"));
    }

    #[test]
    fn forward_without_history_succeeds_without_moving() {
        let mut ctx = CommandContext::default();
        let response = ForwardCommand::default().execute(&mut ctx).unwrap();

        assert!(response.success);
        let data = page_data(response);
        assert!(!data.moved);
        assert_eq!(data.current, None);
    }

    #[test]
    fn history_lists_forward_pages_next_first() {
        let mut ctx = context_with(&["a", "b", "c"]);
        ctx.session.back();
        ctx.session.back();

        let response = HistoryCommand::default().execute(&mut ctx).unwrap();
        let data: HistoryData = serde_json::from_value(response.data.unwrap()).unwrap();

        assert!(data.back.is_empty());
        assert_eq!(data.current.as_deref(), Some("a"));
        assert_eq!(data.forward, vec!["b", "c"]);
    }
}
