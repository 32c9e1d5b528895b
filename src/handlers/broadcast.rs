use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::config::Config;
use crate::registry::ChatRegistry;

use super::HandlerResult;

/// Why a guarded command was refused before anything was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    Unauthorized,
    MissingArgument,
}

/// Gate in front of the fan-out: only the owner may broadcast, and the
/// command needs a non-empty payload.
pub fn validate_broadcast(sender: ChatId, owner: ChatId, text: &str) -> Result<String, Refusal> {
    if sender != owner {
        return Err(Refusal::Unauthorized);
    }
    let text = text.trim();
    if text.is_empty() {
        return Err(Refusal::MissingArgument);
    }
    Ok(text.to_string())
}

pub async fn broadcast_handler(
    bot: Bot,
    msg: Message,
    text: String,
    config: Arc<Config>,
    registry: Arc<ChatRegistry>,
) -> HandlerResult {
    let message = match validate_broadcast(msg.chat.id, config.owner, &text) {
        Ok(message) => message,
        Err(Refusal::Unauthorized) => {
            bot.send_message(msg.chat.id, "Only the bot owner can send broadcast messages!")
                .await?;
            return Ok(());
        }
        Err(Refusal::MissingArgument) => {
            bot.send_message(
                msg.chat.id,
                "Please provide a message to broadcast, e.g., Broadcast Hello everyone!",
            )
            .await?;
            return Ok(());
        }
    };

    let recipients = registry.list_all()?;
    if recipients.is_empty() {
        bot.send_message(msg.chat.id, "No subscribers found.").await?;
        return Ok(());
    }

    let total = recipients.len();
    let mut sent = 0;
    let mut failed = 0;

    // Sequential fan-out; a failing recipient never stops the rest
    for chat_id in recipients {
        match bot.send_message(chat_id, &message).await {
            Ok(_) => sent += 1,
            Err(e) => {
                log::warn!("Failed to send to {}: {}", chat_id, e);
                failed += 1;
            }
        }
    }

    bot.send_message(
        msg.chat.id,
        format!(
            "Broadcast finished. Sent: {}/{}, failed: {}\nBot Uptime: {}",
            sent,
            total,
            failed,
            config.uptime()
        ),
    )
    .await?;

    Ok(())
}
