use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::{CommandResponse, CommandType, NeighborsData};

pub struct NeighborsCommand {
    pub url: String,
}

impl NeighborsCommand {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl Execute for NeighborsCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResponse> {
        let url = self.url.trim();
        let mut neighbors: Vec<String> = ctx.session.neighbors(url).into_iter().collect();
        neighbors.sort();

        let data = NeighborsData {
            url: url.to_string(),
            neighbors,
        };
        ctx.respond(CommandType::Neighbors, data)
    }
}
