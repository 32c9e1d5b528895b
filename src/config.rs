use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use teloxide::types::ChatId;

pub const DEFAULT_REGISTRY_FILE: &str = "chat_ids.json";

/// Everything the handlers need, resolved once at startup and shared through
/// the dispatcher. The bot token stays in TELOXIDE_TOKEN and is consumed by
/// `Bot::from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// The only chat allowed to broadcast, and the relay target for
    /// "Message Owner".
    pub owner: ChatId,
    pub registry_path: PathBuf,
    pub started_at: DateTime<Utc>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let owner =
            parse_owner_id(&env::var("OWNER_CHAT_ID").context("OWNER_CHAT_ID must be set")?)?;
        let registry_path = env::var("CHAT_IDS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REGISTRY_FILE));
        Ok(Self {
            owner,
            registry_path,
            started_at: Utc::now(),
        })
    }

    /// Uptime recomputed at call time, ready to drop into a reply.
    pub fn uptime(&self) -> String {
        crate::uptime::since(self.started_at)
    }
}

fn parse_owner_id(raw: &str) -> Result<ChatId> {
    let id = raw
        .trim()
        .parse::<i64>()
        .context("OWNER_CHAT_ID must be a numeric chat id")?;
    Ok(ChatId(id))
}
