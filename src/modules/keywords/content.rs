//! Keyword groups for free-text messages, in priority order.

use super::KeywordGroup;

const GREETING_TRIGGERS: &[&str] = &["سلام", "درود", "های"];
const PRICING_TRIGGERS: &[&str] = &["قیمت", "هزینه", "خرید", "سفارش"];
const PRODUCT_TRIGGERS: &[&str] = &["محصول", "عروسک", "کوسن", "بطری"];
const GRATITUDE_TRIGGERS: &[&str] = &["ممنون", "متشکرم", "مرسی"];

pub(crate) static KEYWORD_GROUPS: &[KeywordGroup] = &[
    // Greetings.
    KeywordGroup {
        triggers: GREETING_TRIGGERS,
        response: "سلام! 👋 به DiDi TOYS خوش آمدید! چطور می‌تونم کمکتون کنم؟",
    },
    // Prices and ordering.
    KeywordGroup {
        triggers: PRICING_TRIGGERS,
        response: "برای اطلاعات قیمت و سفارش لطفاً با ما تماس بگیرید! 📞",
    },
    // Mentions of the products.
    KeywordGroup {
        triggers: PRODUCT_TRIGGERS,
        response: "محصولات زیبای ما را با دستور /products ببینید! 🧸",
    },
    // Thanks.
    KeywordGroup {
        triggers: GRATITUDE_TRIGGERS,
        response: "خواهش می‌کنم! 😊 خوشحالیم که به DiDi TOYS اعتماد کردید!",
    },
];

/// Replied when no keyword group matches.
pub(crate) const FALLBACK_TEXT: &str = "سلام! من ربات DiDi TOYS هستم 🤖\nبرای مشاهده دستورات /help را بزنید!";
