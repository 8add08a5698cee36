use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::{CommandResponse, CommandType, PageData};

#[derive(Default)]
pub struct BackCommand {}

impl Execute for BackCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResponse> {
        let moved = ctx.session.back();
        let data = PageData {
            moved,
            current: ctx.session.current_page().map(str::to_string),
        };
        ctx.respond(CommandType::Back, data)
    }
}
