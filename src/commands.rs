use std::collections::HashMap;

use crate::gateway::Gateway;
use crate::usage::UsageCatalog;
use crate::{roles, rolls, usage, BotContext, Error};

/// Character that marks a message as a command.
pub const TRIGGER: char = '!';

/// Everything a command handler may use while running.
pub struct Invocation<'a> {
    pub bot: &'a BotContext,
    pub gateway: &'a dyn Gateway,
    pub author_id: &'a str,
}

/// A text command. Handlers validate their own arguments and answer with
/// their usage line when the arguments do not fit.
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    fn usage(&self) -> &'static str;

    async fn execute(&self, args: &[&str], inv: &Invocation<'_>) -> Result<String, Error>;
}

/// Name-keyed command lookup. Built once at start-up.
#[derive(Default)]
pub struct CommandTable {
    commands: HashMap<&'static str, Box<dyn Command>>,
    usage: UsageCatalog,
}

impl CommandTable {
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.usage.register(command.name(), command.usage());
        self.commands.insert(command.name(), command);
    }

    /// The bot's full command set.
    pub fn standard() -> Self {
        let mut table = CommandTable::default();
        table.register(Box::new(usage::commands::Help));
        table.register(Box::new(rolls::commands::Roll));
        table.register(Box::new(roles::commands::ListMyRoles));
        table.register(Box::new(roles::commands::AddRole));
        table.register(Box::new(roles::commands::RemoveRole));
        table.register(Box::new(roles::commands::ListRoles));
        table
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Usage lines of every registered command, in registration order.
    pub fn usage_catalog(&self) -> UsageCatalog {
        self.usage.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// Splits a triggered line on single spaces. Consecutive spaces produce empty
/// arguments. Returns `None` for lines without the trigger.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let rest = line.strip_prefix(TRIGGER)?;
    let mut tokens = rest.split(' ');
    let name = tokens.next().unwrap_or_default();

    Some(ParsedLine {
        name,
        args: tokens.collect(),
    })
}

/// Runs the command in `line`, returning the reply text.
///
/// Unknown commands reply with the full usage catalog. A failing handler is
/// logged and yields no reply.
pub async fn dispatch(line: &str, inv: &Invocation<'_>) -> Option<String> {
    let parsed = parse_line(line)?;
    tracing::debug!(
        "Command called '{}' with parameters {:?}",
        parsed.name,
        parsed.args
    );

    let Some(command) = inv.bot.commands.get(parsed.name) else {
        return Some(inv.bot.usage.render_all());
    };

    match command.execute(&parsed.args, inv).await {
        Ok(reply) => Some(reply),
        Err(e) => {
            tracing::warn!("Error in command `{}`: {:?}", command.name(), e);
            None
        }
    }
}
