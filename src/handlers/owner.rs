use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::User;

use crate::config::Config;

use super::HandlerResult;
use super::broadcast::Refusal;

pub fn validate_owner_message(text: &str) -> Result<String, Refusal> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Refusal::MissingArgument);
    }
    Ok(text.to_string())
}

/// Relay line delivered to the owner chat.
pub fn owner_note(sender: Option<&User>, message: &str) -> String {
    let name = sender
        .map(|user| match &user.username {
            Some(username) => username.clone(),
            None => user.full_name(),
        })
        .unwrap_or_else(|| "unknown".to_string());
    format!("New message from {}: {}", name, message)
}

pub async fn message_owner_handler(
    bot: Bot,
    msg: Message,
    text: String,
    config: Arc<Config>,
) -> HandlerResult {
    let message = match validate_owner_message(&text) {
        Ok(message) => message,
        Err(_) => {
            bot.send_message(
                msg.chat.id,
                "Please provide a message, e.g., Message Owner Hello, I need help!",
            )
            .await?;
            return Ok(());
        }
    };

    match bot
        .send_message(config.owner, owner_note(msg.from.as_ref(), &message))
        .await
    {
        Ok(_) => {
            bot.send_message(
                msg.chat.id,
                format!(
                    "Your message has been sent to the owner!\nBot Uptime: {}",
                    config.uptime()
                ),
            )
            .await?;
        }
        Err(e) => {
            log::warn!("Failed to relay message to owner: {}", e);
            bot.send_message(msg.chat.id, "Failed to send message. Please try again later.")
                .await?;
        }
    }

    Ok(())
}
