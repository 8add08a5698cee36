use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::{CommandResponse, CommandType, PageData};

pub struct VisitCommand {
    pub url: String,
}

impl VisitCommand {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl Execute for VisitCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResponse> {
        // A blank URL is reported to the user, not propagated
        if let Err(e) = ctx.session.visit(&self.url) {
            return Ok(ctx.reject(CommandType::Visit, &e));
        }

        let data = PageData {
            moved: true,
            current: ctx.session.current_page().map(str::to_string),
        };
        ctx.respond(CommandType::Visit, data)
    }
}
