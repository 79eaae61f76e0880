use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One turn of the conversation. Immutable once appended to the log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Message {
    pub fn user(id: String, text: impl Into<String>, timestamp: OffsetDateTime) -> Self {
        Self {
            id,
            sender: Sender::User,
            text: text.into(),
            timestamp,
        }
    }

    pub fn bot(id: String, text: impl Into<String>, timestamp: OffsetDateTime) -> Self {
        Self {
            id,
            sender: Sender::Bot,
            text: text.into(),
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.sender, Sender::User)
    }
}
