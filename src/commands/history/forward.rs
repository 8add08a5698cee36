use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::{CommandResponse, CommandType, PageData};

#[derive(Default)]
pub struct ForwardCommand {}

impl Execute for ForwardCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResponse> {
        let moved = ctx.session.forward();
        let data = PageData {
            moved,
            current: ctx.session.current_page().map(str::to_string),
        };
        ctx.respond(CommandType::Forward, data)
    }
}
