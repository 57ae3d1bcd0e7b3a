mod content;

use teloxide::prelude::*;

use crate::{
    module_mgr::Module,
    types::{HandlerResult, TeloxideHandler},
    utils::dptree_ext::{self, PlainText},
};

/// Trigger substrings sharing one canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeywordGroup {
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

impl KeywordGroup {
    fn matches(&self, normalized: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| normalized.contains(trigger.to_lowercase().as_str()))
    }
}

/// Answers free text with the response of the first matching group.
///
/// Groups are tested in declaration order and the first group with any
/// trigger contained in the lower-cased text wins, even if a later group
/// matches more triggers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordResponder {
    groups: &'static [KeywordGroup],
    fallback: &'static str,
}

impl KeywordResponder {
    pub(crate) fn new(groups: &'static [KeywordGroup], fallback: &'static str) -> Self {
        Self { groups, fallback }
    }

    pub(crate) fn respond(&self, text: &str) -> &'static str {
        let normalized = text.to_lowercase();
        self.groups
            .iter()
            .find(|group| group.matches(&normalized))
            .map(|group| group.response)
            .unwrap_or(self.fallback)
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(content::KEYWORD_GROUPS, content::FALLBACK_TEXT)
    }
}

async fn reply_keywords(
    bot: Bot,
    msg: Message,
    text: PlainText,
    responder: KeywordResponder,
) -> HandlerResult {
    bot.send_message(msg.chat.id, responder.respond(&text.0))
        .await?;
    Ok(())
}

pub(crate) struct Keywords {
    responder: KeywordResponder,
}

impl Keywords {
    pub(crate) fn new(responder: KeywordResponder) -> Self {
        Self { responder }
    }
}

impl Module for Keywords {
    fn register_dependency(&mut self, dep_map: &mut DependencyMap) {
        dep_map.insert(self.responder);
    }

    fn handler_chain(&self) -> TeloxideHandler {
        dptree::filter_map(dptree_ext::plain_text).endpoint(reply_keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::content::{FALLBACK_TEXT, KEYWORD_GROUPS};
    use super::*;

    fn greeting() -> &'static str {
        KEYWORD_GROUPS[0].response
    }

    fn pricing() -> &'static str {
        KEYWORD_GROUPS[1].response
    }

    fn product() -> &'static str {
        KEYWORD_GROUPS[2].response
    }

    fn gratitude() -> &'static str {
        KEYWORD_GROUPS[3].response
    }

    #[test]
    fn test_each_group() {
        let responder = KeywordResponder::default();
        assert_eq!(responder.respond("سلام"), greeting());
        assert_eq!(responder.respond("درود بر شما"), greeting());
        assert_eq!(responder.respond("قیمت چنده؟"), pricing());
        assert_eq!(responder.respond("چطور سفارش بدم"), pricing());
        assert_eq!(responder.respond("کوسن دارید؟"), product());
        assert_eq!(responder.respond("یه بطری می‌خوام"), product());
        assert_eq!(responder.respond("ممنون"), gratitude());
        assert_eq!(responder.respond("مرسی از شما"), gratitude());
    }

    #[test]
    fn test_first_group_wins() {
        let responder = KeywordResponder::default();
        // Greeting and product.
        assert_eq!(responder.respond("سلام، کوسن عروسکی دارید؟"), greeting());
        // Pricing and product.
        assert_eq!(responder.respond("قیمت کوسن چنده؟"), pricing());
        // Product and gratitude.
        assert_eq!(responder.respond("ممنون بابت عروسک"), product());
        // The plural suffix "های" is a greeting trigger as well.
        assert_eq!(responder.respond("خرید بطری‌های فانتزی"), greeting());
    }

    #[test]
    fn test_fallback() {
        let responder = KeywordResponder::default();
        assert_eq!(responder.respond("xyz123"), FALLBACK_TEXT);
        assert_eq!(responder.respond(""), FALLBACK_TEXT);
        // Slash text that is not a command is matched like any other text.
        assert_eq!(responder.respond("/ hi"), FALLBACK_TEXT);
        assert_eq!(responder.respond("/"), FALLBACK_TEXT);
        assert_eq!(responder.respond("/سلام"), greeting());
        assert!(FALLBACK_TEXT.contains("/help"));
    }

    #[test]
    fn test_case_insensitive() {
        static GROUPS: &[KeywordGroup] = &[
            KeywordGroup {
                triggers: &["Hello", "hey"],
                response: "greeting",
            },
            KeywordGroup {
                triggers: &["price"],
                response: "pricing",
            },
        ];
        let responder = KeywordResponder::new(GROUPS, "fallback");
        assert_eq!(responder.respond("HELLO there"), "greeting");
        assert_eq!(responder.respond("Hey!"), "greeting");
        assert_eq!(responder.respond("What's the PRICE?"), "pricing");
        assert_eq!(responder.respond("hey, price?"), "greeting");
        assert_eq!(responder.respond("goodbye"), "fallback");
    }

    #[test]
    fn test_idempotent() {
        let responder = KeywordResponder::default();
        for text in ["سلام", "قیمت", "کوسن", "ممنون", "xyz123"] {
            assert_eq!(responder.respond(text), responder.respond(text));
        }
    }
}
