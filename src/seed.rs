//! Seed conversation shown when a session starts.
//!
//! Seed entries carry a relative age instead of an absolute timestamp so the
//! bundled example conversation always looks recent.

use crate::ids;
use crate::types::{Message, Sender};
use serde::Deserialize;
use std::collections::HashSet;
use time::{Duration, OffsetDateTime};

const BUNDLED_SEED: &str = include_str!("../assets/seed.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Malformed seed conversation: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Seed message {0:?} has no text")]
    EmptyText(String),

    #[error("Seed message id {0:?} appears more than once")]
    DuplicateId(String),

    #[error("Seed message id {0:?} uses the reserved generated-id prefix")]
    ReservedId(String),

    #[error("Seed message {0:?} has an out-of-range minutes_ago")]
    InvalidAge(String),

    #[error("Conversation has already been initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Deserialize)]
struct SeedEntry {
    id: String,
    sender: Sender,
    text: String,
    #[serde(default)]
    minutes_ago: i64,
}

/// The example conversation bundled with the app.
pub fn demo_conversation(now: OffsetDateTime) -> Result<Vec<Message>, SeedError> {
    parse_seed(BUNDLED_SEED, now)
}

/// Parse a JSON array of seed entries into messages stamped relative to `now`.
pub fn parse_seed(json: &str, now: OffsetDateTime) -> Result<Vec<Message>, SeedError> {
    let entries: Vec<SeedEntry> = serde_json::from_str(json)?;
    let messages = entries
        .into_iter()
        .map(|entry| {
            let timestamp = entry
                .minutes_ago
                .checked_mul(60)
                .filter(|secs| *secs >= 0)
                .and_then(|secs| now.checked_sub(Duration::seconds(secs)))
                .ok_or_else(|| SeedError::InvalidAge(entry.id.clone()))?;
            Ok(Message {
                id: entry.id,
                sender: entry.sender,
                text: entry.text.trim().to_string(),
                timestamp,
            })
        })
        .collect::<Result<Vec<_>, SeedError>>()?;
    validate_seed(&messages)?;
    Ok(messages)
}

pub fn validate_seed(messages: &[Message]) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for msg in messages {
        if msg.text.trim().is_empty() {
            return Err(SeedError::EmptyText(msg.id.clone()));
        }
        if ids::is_reserved(&msg.id) {
            return Err(SeedError::ReservedId(msg.id.clone()));
        }
        if !seen.insert(msg.id.as_str()) {
            return Err(SeedError::DuplicateId(msg.id.clone()));
        }
    }
    Ok(())
}
