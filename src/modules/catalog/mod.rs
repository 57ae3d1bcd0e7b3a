mod content;

use teloxide::prelude::*;
use teloxide::types::BotCommand;

use crate::{
    module_mgr::Module,
    types::{HandlerResult, TeloxideHandler},
    utils::dptree_ext::{self, CommandInvocation},
};

/// A command the bot answers with a fixed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommandEntry {
    pub name: &'static str,
    /// One-line summary shown in `/help` and the Telegram command menu.
    pub description: &'static str,
    pub response: &'static str,
}

/// Lookup table from command names to their replies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommandCatalog {
    entries: &'static [CommandEntry],
    unknown_reply: &'static str,
}

impl CommandCatalog {
    pub(crate) fn new(entries: &'static [CommandEntry], unknown_reply: &'static str) -> Self {
        Self {
            entries,
            unknown_reply,
        }
    }

    pub(crate) fn entries(&self) -> &'static [CommandEntry] {
        self.entries
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&'static CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// The reply for `name`, or the neutral "not recognized" text when no
    /// such command is registered.
    pub(crate) fn reply_for(&self, name: &str) -> &'static str {
        self.lookup(name)
            .map(|entry| entry.response)
            .unwrap_or(self.unknown_reply)
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::new(content::COMMANDS, content::UNKNOWN_COMMAND_TEXT)
    }
}

async fn reply_command(
    bot: Bot,
    msg: Message,
    command: CommandInvocation,
    catalog: CommandCatalog,
) -> HandlerResult {
    if catalog.lookup(&command.0).is_none() {
        warn!("Unknown command: /{}", command.0);
    }
    bot.send_message(msg.chat.id, catalog.reply_for(&command.0))
        .await?;
    Ok(())
}

pub(crate) struct Catalog {
    catalog: CommandCatalog,
}

impl Catalog {
    pub(crate) fn new(catalog: CommandCatalog) -> Self {
        Self { catalog }
    }
}

impl Module for Catalog {
    fn register_dependency(&mut self, dep_map: &mut DependencyMap) {
        dep_map.insert(self.catalog);
    }

    fn handler_chain(&self) -> TeloxideHandler {
        dptree::filter_map(dptree_ext::command_invocation).endpoint(reply_command)
    }

    fn commands(&self) -> Vec<BotCommand> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| BotCommand::new(entry.name, entry.description))
            .collect()
    }
}
