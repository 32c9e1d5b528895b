use teloxide::types::{KeyboardButton, KeyboardMarkup};

pub const PANEL_TITLE: &str = "LORD NEXUS V1 PANEL";
pub const BTN_START: &str = "Start";
pub const BTN_HELP: &str = "Help";
pub const BTN_BROADCAST: &str = "Broadcast";
pub const BTN_MESSAGE_OWNER: &str = "Message Owner";

/// The closed set of reply-keyboard labels the bot reacts to. Anything else
/// arriving as plain text is ignored by the text handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Help,
    Broadcast,
    MessageOwner,
}

impl MenuButton {
    /// Verbatim label match; no trimming, no case folding.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            BTN_START => Some(Self::Start),
            BTN_HELP => Some(Self::Help),
            BTN_BROADCAST => Some(Self::Broadcast),
            BTN_MESSAGE_OWNER => Some(Self::MessageOwner),
            _ => None,
        }
    }
}

/// Persistent main panel: a title row the dispatcher never matches, then the
/// four recognized buttons.
pub fn main_panel_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(PANEL_TITLE)],
        vec![KeyboardButton::new(BTN_START), KeyboardButton::new(BTN_HELP)],
        vec![
            KeyboardButton::new(BTN_BROADCAST),
            KeyboardButton::new(BTN_MESSAGE_OWNER),
        ],
    ])
    .resize_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_every_button_label() {
        assert_eq!(MenuButton::from_text(BTN_START), Some(MenuButton::Start));
        assert_eq!(MenuButton::from_text(BTN_HELP), Some(MenuButton::Help));
        assert_eq!(
            MenuButton::from_text(BTN_BROADCAST),
            Some(MenuButton::Broadcast)
        );
        assert_eq!(
            MenuButton::from_text(BTN_MESSAGE_OWNER),
            Some(MenuButton::MessageOwner)
        );
    }

    #[test]
    fn test_ignores_unrecognized_text() {
        assert_eq!(MenuButton::from_text("some other text"), None);
        assert_eq!(MenuButton::from_text("start"), None);
        assert_eq!(MenuButton::from_text(" Start"), None);
        // The title row is decorative, not a command
        assert_eq!(MenuButton::from_text(PANEL_TITLE), None);
    }

    #[test]
    fn test_panel_lists_every_recognized_button() {
        let keyboard = main_panel_keyboard();
        let labels: Vec<&str> = keyboard
            .keyboard
            .iter()
            .flatten()
            .map(|button| button.text.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![PANEL_TITLE, BTN_START, BTN_HELP, BTN_BROADCAST, BTN_MESSAGE_OWNER]
        );
    }

    #[test]
    fn test_panel_is_persistent() {
        let keyboard = main_panel_keyboard();
        assert!(keyboard.resize_keyboard);
        assert!(!keyboard.one_time_keyboard);
    }
}
