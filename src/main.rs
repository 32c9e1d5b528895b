use std::sync::Arc;

use anyhow::Error;
use teloxide::dptree;
use teloxide::prelude::*;

use crate::commands::Command;
use crate::config::Config;
use crate::handlers::{command_handler, text_handler};
use crate::registry::ChatRegistry;

mod commands;
mod config;
mod handlers;
mod registry;
mod uptime;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    // --- Logging Setup ---
    use log::LevelFilter;
    use std::env;
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::sync::Mutex;

    // 1. Get console log level from env
    let console_level_str = env::var("CONSOLE_LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let console_level = match console_level_str.to_uppercase().as_str() {
        "ERROR" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info
    };

    // 2. Get file log level from env
    let file_level_str = env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "OFF".to_string());
    let file_level_config = match file_level_str.to_uppercase().as_str() {
        "ERROR" => Some(LevelFilter::Error),
        "ALL" | "INFO" => Some(LevelFilter::Info),
        _ => None, // OFF
    };

    // 3. The logger itself runs at the most verbose level required
    let max_level = std::cmp::max(
        console_level,
        file_level_config.unwrap_or(LevelFilter::Off),
    );

    // 4. Setup file handle if needed
    let log_file = if file_level_config.is_some() {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(true)
            .open("bot_errors.log")?;
        Some(Arc::new(Mutex::new(file)))
    } else {
        None
    };

    // 5. Build the logger
    let mut builder = pretty_env_logger::formatted_builder();
    builder
        .filter(None, max_level)
        .format(move |buf, record| {
            let formatted_record = format!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );

            if record.level() <= console_level {
                writeln!(buf, "{}", formatted_record)?;
            }

            if let Some(file_level) = file_level_config {
                if record.level() <= file_level {
                    if let Some(file_handle) = &log_file {
                        if let Ok(mut guard) = file_handle.lock() {
                            let _ = writeln!(guard, "{}", formatted_record);
                        }
                    }
                }
            }
            Ok(())
        })
        .init();

    log::info!("Starting Lord Nexus bot...");

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            log::error!("Failed to load environment: {}", e);
            return Err(e);
        }
    };
    log::info!(
        "Owner chat: {}, registry file: {}",
        config.owner,
        config.registry_path.display()
    );

    let registry = Arc::new(ChatRegistry::new(config.registry_path.clone(), config.owner));
    let bot = Bot::from_env();

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(text_handler));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config, registry])
        .enable_ctrlc_handler()
        .build();

    log::info!("Starting to dispatch updates...");

    tokio::select! {
        _ = dispatcher.dispatch() => {},
        _ = tokio::signal::ctrl_c() => {
            log::info!("Received Ctrl+C, shutting down...");
        }
    }

    log::info!("Bot shutdown complete");
    Ok(())
}
