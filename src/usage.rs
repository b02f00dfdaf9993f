/// Canned one-line usage strings, kept in registration order so that
/// [`UsageCatalog::render_all`] is deterministic.
#[derive(Debug, Clone, Default)]
pub struct UsageCatalog {
    lines: Vec<(&'static str, &'static str)>,
}

impl UsageCatalog {
    pub fn register(&mut self, command: &'static str, usage: &'static str) {
        self.lines.push((command, usage));
    }

    pub fn lookup(&self, command: &str) -> Option<&'static str> {
        self.lines
            .iter()
            .find(|(name, _)| *name == command)
            .map(|(_, usage)| *usage)
    }

    /// Every usage line, each followed by a newline.
    pub fn render_all(&self) -> String {
        self.lines
            .iter()
            .map(|(_, usage)| format!("{usage}\n"))
            .collect()
    }

    /// Usage for one command, or an "unknown command" notice followed by the
    /// full catalog.
    pub fn render_one(&self, command: &str) -> String {
        match self.lookup(command) {
            Some(usage) => usage.to_string(),
            None => format!("Unknown command: {command}\n{}", self.render_all()),
        }
    }
}

pub mod commands {
    use crate::commands::{Command, Invocation};
    use crate::Error;

    pub struct Help;

    #[async_trait::async_trait]
    impl Command for Help {
        fn name(&self) -> &'static str {
            "help"
        }

        fn usage(&self) -> &'static str {
            "!help (command) - Print available commands or more details about a single command"
        }

        async fn execute(&self, args: &[&str], inv: &Invocation<'_>) -> Result<String, Error> {
            let usage = &inv.bot.usage;
            Ok(match args {
                [] => usage.render_all(),
                [command] => usage.render_one(command),
                _ => usage.render_one(self.name()),
            })
        }
    }
}
