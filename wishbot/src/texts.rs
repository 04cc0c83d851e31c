//! User-facing message texts.

use storage::Language;
use teloxide::utils::markdown;

pub const JOIN_PROMPT: &str = "⚠️ অনুগ্রহ করে আমাদের চ্যানেলে join করুন:";
pub const NOT_JOINED: &str = "❌ আপনি এখনো join করেননি।";
pub const CHOOSE_LANGUAGE: &str = "আপনি কোন ভাষায় wish করতে চান?";
pub const JOINED_CHOOSE_LANGUAGE: &str =
    "✅ আপনি চ্যানেল join করেছেন!\n\nআপনি কোন ভাষায় wish করতে চান?";
pub const LANGUAGE_FIRST: &str = "⚠️ আগে ভাষা নির্বাচন করুন:";
pub const NAME_FIRST: &str = "প্রথমে নাম লিখুন। / Write a name first.";

pub fn name_prompt(language: Language) -> &'static str {
    match language {
        Language::Bn => "🎉 যাকে wish করতে চাও? তার নাম লিখো (বাংলায়):",
        Language::En => "🎉 Who do you want to wish? Please type their name:",
    }
}

pub fn link_ready(language: Language) -> &'static str {
    match language {
        Language::Bn => "🎂 তোমার উইশ লিঙ্ক তৈরি হয়েছে।",
        Language::En => "🎂 Your birthday wish link is ready.",
    }
}

/// MarkdownV2 text showing `link` as an inline code span, which clients copy on tap.
pub fn copyable_link(link: &str) -> String {
    format!("👉👉 {}", markdown::code_inline(link))
}
