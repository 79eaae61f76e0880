pub mod attachment;
pub mod clock;
pub mod composer;
pub mod config;
pub mod ids;
pub mod reply;
pub mod scroll;
pub mod seed;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;

pub use config::ChatConfig;
pub use store::{ConversationStore, LogSnapshot};
pub use types::{Message, Sender};

/// Everything a chat view needs for one session.
#[derive(Clone)]
pub struct ChatSession {
    pub config: ChatConfig,
    pub store: ConversationStore,
}

impl ChatSession {
    /// Build the store and load `seed` as the opening conversation.
    pub fn start(config: ChatConfig, seed: Vec<Message>) -> Result<Self, seed::SeedError> {
        let store = ConversationStore::new(config.reply_delay);
        store.initialize(seed)?;
        Ok(Self { config, store })
    }
}
