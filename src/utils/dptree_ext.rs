use teloxide::prelude::*;
use teloxide::types::Me;

/// The name of a command addressed to this bot, without the leading `/`,
/// the mention suffix and any arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandInvocation(pub String);

/// Plain (non-command) text of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlainText(pub String);

/// Splits a Telegram command into its name and optional mention suffix.
///
/// Like Telegram's `bot_command` entities, only `/` directly followed by
/// `A-Z`, `a-z`, `0-9` or `_` is a command. Anything else is plain text.
fn command_token(text: &str) -> Option<(&str, Option<&str>)> {
    let token = text.strip_prefix('/')?.split(char::is_whitespace).next()?;

    // When sending commands in a group, a mention suffix may be attached to
    // the text. For example: "/help@xxxx_bot".
    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (token, None),
    };
    if name.is_empty()
        || !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return None;
    }

    Some((name, mention))
}

/// Extracts the command name from `text` if it is a command meant for the
/// bot named `bot_username`.
pub(crate) fn parse_command<'t>(text: &'t str, bot_username: &str) -> Option<&'t str> {
    let (name, mention) = command_token(text)?;
    match mention {
        Some(mention) if !mention.eq_ignore_ascii_case(bot_username) => None,
        _ => Some(name),
    }
}

/// Whether `text` is a command for any bot.
pub(crate) fn is_command(text: &str) -> bool {
    command_token(text).is_some()
}

pub(crate) fn command_invocation(msg: Message, me: Me) -> Option<CommandInvocation> {
    let text = msg.text()?;
    parse_command(text, me.username()).map(|name| CommandInvocation(name.to_owned()))
}

pub(crate) fn plain_text(msg: Message) -> Option<PlainText> {
    msg.text()
        .filter(|text| !is_command(text))
        .map(|text| PlainText(text.to_owned()))
}
