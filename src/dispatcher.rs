use std::fmt::Debug;

use teloxide::prelude::*;

use crate::{
    module_mgr::ModuleManager,
    types::{HandlerResult, TeloxideDispatcher, TeloxideHandler},
};

fn sender_name(msg: &Message) -> String {
    msg.from()
        .map(|u| {
            let full_name = u.full_name();
            if full_name.is_empty() {
                u.id.to_string()
            } else {
                full_name
            }
        })
        .unwrap_or_else(|| "<unknown>".to_owned())
}

/// The line logged for every incoming message, with or without text.
fn describe_message(from: &str, text: Option<&str>, kind: &dyn Debug) -> String {
    match text {
        Some(text) => format!("{} sent a message: {}", from, text),
        None => format!("{} sent a message: {:#?}", from, kind),
    }
}

fn message_filter(msg: Message) -> bool {
    let from = sender_name(&msg);
    info!("{}", describe_message(&from, msg.text(), &msg.kind));

    true
}

async fn default_handler(msg: Message) -> HandlerResult {
    warn!("Message ({}) is not handled!", msg.id.0);
    Ok(())
}

pub(crate) fn build_dispatcher(bot: Bot, mut module_mgr: ModuleManager) -> TeloxideDispatcher {
    // Load dependencies.
    let mut dep_map = DependencyMap::new();
    module_mgr.with_all_modules(|m| m.register_dependency(&mut dep_map));

    // Build handler chain.
    let mut chains: Vec<TeloxideHandler> = vec![];
    module_mgr.with_all_modules(|m| chains.push(m.handler_chain()));
    let biz_handler = chains
        .into_iter()
        .fold(dptree::entry(), |handler, chain| handler.branch(chain))
        .branch(dptree::endpoint(default_handler));

    let handler = Update::filter_message()
        .chain(dptree::filter(message_filter))
        .chain(biz_handler);

    Dispatcher::builder(bot, handler)
        .dependencies(dep_map)
        .enable_ctrlc_handler()
        .build()
}
