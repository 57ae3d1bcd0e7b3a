//! A Telegram bot for the DiDi TOYS shop.
//!
//! The bot is built on the [`teloxide`](https://docs.rs/teloxide/latest/teloxide/)
//! framework. It answers a fixed set of commands (`/start`, `/help`,
//! `/products`, `/dolls`, `/cans`) with the shop's catalog, and replies to
//! free text by matching it against a few keyword groups.
//!
//! ## Getting Started
//!
//! ### Using via CLI
//!
//! The bot is a single-binary executable. Provide the token through the
//! environment (or a config file) and run it:
//!
//! ```shell
//! $ TELEGRAM_BOT_TOKEN=... WEBHOOK_URL=https://bot.example.com /path/to/didibot
//! $ /path/to/didibot -c your_config.json
//! ```
//!
//! The configuration is described in [`config`] module.
//!
//! ### Using via library
//!
//! The bot can also be run in-process, checkout the [`app`] module.

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod app;
pub mod config;
mod dispatcher;
mod listener;
mod module_mgr;
mod modules;
mod types;
mod utils;
