//! Running the bot in-process.
//!
//! ```no_run
//! use didibot_core::{app, config::{Config, SharedConfig}};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load(None)?;
//! app::run(SharedConfig::new(config)).await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Error};
use teloxide::{prelude::*, types::MenuButton};

use crate::{
    config::SharedConfig,
    dispatcher::build_dispatcher,
    listener,
    module_mgr::ModuleManager,
    modules::catalog::{Catalog, CommandCatalog},
    modules::keywords::{KeywordResponder, Keywords},
};

async fn update_menu(bot: &Bot, module_mgr: &mut ModuleManager) -> Result<(), Error> {
    let mut commands = vec![];
    module_mgr.with_all_modules(|m| commands.extend(m.commands()));
    bot.set_my_commands(commands).await?;
    Ok(())
}

async fn init_bot(config: &SharedConfig, module_mgr: &mut ModuleManager) -> Result<Bot, Error> {
    let bot = Bot::new(&config.telegram_bot_token);
    bot.set_chat_menu_button()
        .menu_button(MenuButton::Commands)
        .await
        .context("Failed to set the menu button")?;
    update_menu(&bot, module_mgr)
        .await
        .context("Failed to publish the command menu")?;
    Ok(bot)
}

/// Starts the bot and blocks until it is shut down (e.g. by Ctrl-C).
pub async fn run(config: SharedConfig) -> Result<(), Error> {
    debug!("Initializing modules...");
    let mut module_mgr = ModuleManager::new();
    // Commands go first so that command texts never reach the keyword matcher.
    module_mgr.register_module(Catalog::new(CommandCatalog::default()));
    module_mgr.register_module(Keywords::new(KeywordResponder::default()));

    info!("Initializing bot...");
    let bot = init_bot(&config, &mut module_mgr).await?;

    let dispatcher = build_dispatcher(bot.clone(), module_mgr);
    info!("Bot is started!");
    listener::serve(bot, dispatcher, &config).await
}
