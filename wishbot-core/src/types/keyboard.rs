//! Inline keyboards attached to outgoing messages.

use serde::{Deserialize, Serialize};

/// What pressing a button does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    /// Sends a callback query carrying this data back to the bot.
    Callback(String),
    /// Opens this URL in the client.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub label: String,
    pub action: ButtonAction,
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }
}

/// Rows of buttons, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    /// Appends a row.
    pub fn row(mut self, row: Vec<InlineButton>) -> Self {
        self.rows.push(row);
        self
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }

    /// Callback data of every callback button, in reading order.
    pub fn callback_data(&self) -> Vec<&str> {
        self.buttons()
            .filter_map(|b| match &b.action {
                ButtonAction::Callback(data) => Some(data.as_str()),
                ButtonAction::Url(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_builder_and_callback_data() {
        let keyboard = InlineKeyboard::default()
            .row(vec![InlineButton::url("Join", "https://t.me/x")])
            .row(vec![
                InlineButton::callback("A", "a"),
                InlineButton::callback("B", "b"),
            ]);

        assert_eq!(keyboard.rows.len(), 2);
        assert_eq!(keyboard.buttons().count(), 3);
        assert_eq!(keyboard.callback_data(), vec!["a", "b"]);
    }
}
