use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::{CommandResponse, CommandType, PageData};

#[derive(Default)]
pub struct CurrentCommand {}

impl Execute for CurrentCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResponse> {
        let data = PageData {
            moved: false,
            current: ctx.session.current_page().map(str::to_string),
        };
        ctx.respond(CommandType::Current, data)
    }
}
