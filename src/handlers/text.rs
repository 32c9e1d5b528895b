use std::sync::Arc;

use teloxide::prelude::*;

use crate::config::Config;
use crate::registry::ChatRegistry;

use super::HandlerResult;
use super::broadcast::broadcast_handler;
use super::command::{help_handler, start_handler};
use super::owner::message_owner_handler;
use super::ui::MenuButton;

/// Routes reply-keyboard presses. The labels arrive as plain text and carry
/// no arguments; anything outside the recognized set is dropped silently.
pub async fn text_handler(
    bot: Bot,
    msg: Message,
    config: Arc<Config>,
    registry: Arc<ChatRegistry>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match MenuButton::from_text(text) {
        Some(MenuButton::Start) => start_handler(bot, msg, config, registry).await,
        Some(MenuButton::Help) => help_handler(bot, msg, config).await,
        Some(MenuButton::Broadcast) => {
            broadcast_handler(bot, msg, String::new(), config, registry).await
        }
        Some(MenuButton::MessageOwner) => {
            message_owner_handler(bot, msg, String::new(), config).await
        }
        None => Ok(()),
    }
}
