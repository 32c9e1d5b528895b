use std::sync::Arc;

use teloxide::prelude::*;

use crate::commands::Command;
use crate::config::Config;
use crate::registry::ChatRegistry;

use super::HandlerResult;
use super::broadcast::broadcast_handler;
use super::owner::message_owner_handler;
use super::ui::main_panel_keyboard;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    config: Arc<Config>,
    registry: Arc<ChatRegistry>,
) -> HandlerResult {
    match cmd {
        Command::Start => start_handler(bot, msg, config, registry).await,
        Command::Help => help_handler(bot, msg, config).await,
        Command::Broadcast { text } => broadcast_handler(bot, msg, text, config, registry).await,
        Command::MessageOwner { text } => message_owner_handler(bot, msg, text, config).await,
    }
}

pub async fn start_handler(
    bot: Bot,
    msg: Message,
    config: Arc<Config>,
    registry: Arc<ChatRegistry>,
) -> HandlerResult {
    registry.record(msg.chat.id)?;

    bot.send_message(
        msg.chat.id,
        format!(
            "Welcome to LORD NEXUS V1! I am your personal assistant. \
             Select an option from the panel below:\nBot Uptime: {}",
            config.uptime()
        ),
    )
    .reply_markup(main_panel_keyboard())
    .await?;

    Ok(())
}

pub async fn help_handler(bot: Bot, msg: Message, config: Arc<Config>) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        format!(
            "Available commands:\n\
             Start - Welcome the user\n\
             Help - Get this help message\n\
             Broadcast - Send a message to all subscribers (owner only)\n\
             Message Owner - Send a message to the bot owner\n\
             Bot Uptime: {}",
            config.uptime()
        ),
    )
    .await?;

    Ok(())
}
