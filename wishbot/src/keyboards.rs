//! Inline keyboards and the callback tokens their buttons carry.

use std::str::FromStr;

use storage::Language;
use wishbot_core::{HandlerError, InlineButton, InlineKeyboard};

pub const VERIFY_MEMBERSHIP: &str = "verify_membership";
pub const COPY_LINK: &str = "copy_link";

/// Parsed callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    VerifyMembership,
    ChooseLanguage(Language),
    CopyLink,
}

impl FromStr for CallbackAction {
    type Err = HandlerError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        match data {
            VERIFY_MEMBERSHIP => Ok(CallbackAction::VerifyMembership),
            COPY_LINK => Ok(CallbackAction::CopyLink),
            other => Language::parse(other)
                .map(CallbackAction::ChooseLanguage)
                .ok_or_else(|| HandlerError::UnknownCallback(other.to_string())),
        }
    }
}

/// Join the channel, then verify.
pub fn join_keyboard(channel_link: &str) -> InlineKeyboard {
    InlineKeyboard::default()
        .row(vec![InlineButton::url("📢 Join Our Channel", channel_link)])
        .row(vec![InlineButton::callback("✅ Verify", VERIFY_MEMBERSHIP)])
}

pub fn language_keyboard() -> InlineKeyboard {
    InlineKeyboard::default().row(vec![
        InlineButton::callback("🇧🇩 বাংলা", Language::Bn.as_str()),
        InlineButton::callback("🇬🇧 English", Language::En.as_str()),
    ])
}

/// Copy the link, or open the wish page.
pub fn result_keyboard(link: &str) -> InlineKeyboard {
    InlineKeyboard::default()
        .row(vec![InlineButton::callback("কপি লিঙ্ক", COPY_LINK)])
        .row(vec![InlineButton::url("Wish চেক", link)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishbot_core::ButtonAction;

    #[test]
    fn test_parse_callback_tokens() {
        assert_eq!(
            "verify_membership".parse::<CallbackAction>().unwrap(),
            CallbackAction::VerifyMembership
        );
        assert_eq!(
            "copy_link".parse::<CallbackAction>().unwrap(),
            CallbackAction::CopyLink
        );
        assert_eq!(
            "bn".parse::<CallbackAction>().unwrap(),
            CallbackAction::ChooseLanguage(Language::Bn)
        );
        assert!(matches!(
            "fr".parse::<CallbackAction>(),
            Err(HandlerError::UnknownCallback(data)) if data == "fr"
        ));
    }

    #[test]
    fn test_language_keyboard_tokens_parse() {
        for data in language_keyboard().callback_data() {
            assert!(matches!(
                data.parse::<CallbackAction>(),
                Ok(CallbackAction::ChooseLanguage(_))
            ));
        }
    }

    #[test]
    fn test_join_keyboard_layout() {
        let keyboard = join_keyboard("https://t.me/nextgentech_bd");
        assert_eq!(keyboard.rows.len(), 2);
        assert_eq!(
            keyboard.rows[0][0].action,
            ButtonAction::Url("https://t.me/nextgentech_bd".to_string())
        );
        assert_eq!(keyboard.callback_data(), vec![VERIFY_MEMBERSHIP]);
    }

    #[test]
    fn test_result_keyboard_opens_link() {
        let keyboard = result_keyboard("https://x/?nama=A");
        assert_eq!(keyboard.callback_data(), vec![COPY_LINK]);
        assert_eq!(
            keyboard.rows[1][0].action,
            ButtonAction::Url("https://x/?nama=A".to_string())
        );
    }
}
