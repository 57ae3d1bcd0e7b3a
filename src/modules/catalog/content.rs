//! The static command table of the shop.

use super::CommandEntry;

const START_TEXT: &str = "🧸 به DiDi TOYS خوش آمدید! 🎉

📋 منوی ربات:
/products - مشاهده محصولات";

const HELP_TEXT: &str = "🔧 دستورات موجود:

/start - پیام خوش‌آمدگویی
/products - مشاهده محصولات
/dolls - کوسن‌های عروسکی
/cans - بطری‌های فانتزی
/help - نمایش این منو

🧸 DiDi TOYS در خدمت شماست! ✨";

const PRODUCTS_TEXT: &str = "🛍️ محصولات DiDi TOYS:

🧸 DiDi Dolls - کوسن‌های عروسکی
🍼 DiDi Cans - بطری‌های فانتزی

برای مشاهده زیرمجموعه‌ها:
/dolls - کوسن‌های عروسکی
/cans - بطری‌های فانتزی";

const DOLLS_TEXT: &str = "🧸 DiDi Dolls - کوسن‌های عروسکی:

• کوسن عروسک دختر
• کوسن عروسک پسر
• کوسن حیوانات
• کوسن شخصیت‌های کارتونی

برای سفارش با ما تماس بگیرید.";

const CANS_TEXT: &str = "🍼 DiDi Cans - بطری‌های فانتزی:

• بطری فانتزی دختر
• بطری فانتزی پسر
• بطری حیوانات
• بطری شخصیت‌های کارتونی

برای سفارش با ما تماس بگیرید.";

/// Replied to commands addressed to the bot that are not in [`COMMANDS`].
pub(crate) const UNKNOWN_COMMAND_TEXT: &str = "این دستور شناخته نشد. برای مشاهده دستورات /help را بزنید!";

/// Registered commands, in the order they appear in the Telegram menu.
pub(crate) static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "start",
        description: "پیام خوش‌آمدگویی",
        response: START_TEXT,
    },
    CommandEntry {
        name: "products",
        description: "مشاهده محصولات",
        response: PRODUCTS_TEXT,
    },
    CommandEntry {
        name: "dolls",
        description: "کوسن‌های عروسکی",
        response: DOLLS_TEXT,
    },
    CommandEntry {
        name: "cans",
        description: "بطری‌های فانتزی",
        response: CANS_TEXT,
    },
    CommandEntry {
        name: "help",
        description: "نمایش این منو",
        response: HELP_TEXT,
    },
];
