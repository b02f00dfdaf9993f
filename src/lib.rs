pub mod commands;
pub mod config;
pub mod gateway;
pub mod handlers;
pub mod roles;
pub mod rolls;
pub mod roster;
pub mod usage;

#[cfg(test)]
mod testing;

use commands::CommandTable;
use config::{Config, Resources};
use roster::Roster;
use usage::UsageCatalog;

/// Read-only state shared by every event, built once at start-up.
pub struct BotContext {
    pub config: Config,
    pub admins: Roster,
    pub roles: Roster,
    pub bans: Roster,
    pub commands: CommandTable,
    pub usage: UsageCatalog,
}

impl BotContext {
    pub fn new(resources: Resources) -> Self {
        let commands = CommandTable::standard();
        let usage = commands.usage_catalog();

        BotContext {
            config: resources.config,
            admins: resources.admins,
            roles: resources.roles,
            bans: resources.bans,
            commands,
            usage,
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
