//! The conversation log and the only code allowed to mutate it.
//!
//! The log lives inside a `watch` channel: each append happens in a single
//! `send_modify`, so subscribers never observe a half-applied change and are
//! woken once per append with a bumped `revision`.

use crate::clock::current_time;
use crate::ids::MessageIds;
use crate::reply::{ReplyHandle, ReplySimulator};
use crate::seed::{SeedError, validate_seed};
use crate::types::{Message, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogSnapshot {
    /// Incremented on every change to `messages`.
    pub revision: u64,
    pub messages: Vec<Message>,
}

#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<StoreInner>,
}

// Two handles are equal when they point at the same session.
impl PartialEq for ConversationStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

struct StoreInner {
    log: watch::Sender<LogSnapshot>,
    ids: MessageIds,
    simulator: ReplySimulator,
    session: Mutex<SessionState>,
}

#[derive(Default)]
struct SessionState {
    initialized: bool,
    torn_down: bool,
    replies: Vec<ReplyHandle>,
}

impl ConversationStore {
    pub fn new(reply_delay: Duration) -> Self {
        let ids = MessageIds::default();
        let (log, _) = watch::channel(LogSnapshot::default());
        Self {
            inner: Arc::new(StoreInner {
                log,
                simulator: ReplySimulator::new(reply_delay, ids.clone()),
                ids,
                session: Mutex::new(SessionState::default()),
            }),
        }
    }

    /// Set the starting log. Only the first call on an untouched store succeeds.
    pub fn initialize(&self, seed: Vec<Message>) -> Result<(), SeedError> {
        let mut session = self.session();
        if session.initialized || !self.inner.log.borrow().messages.is_empty() {
            return Err(SeedError::AlreadyInitialized);
        }
        validate_seed(&seed)?;

        let count = seed.len();
        self.inner.log.send_modify(|snapshot| {
            snapshot.messages = seed;
            snapshot.revision += 1;
        });
        session.initialized = true;
        tracing::info!(messages = count, "conversation initialized");
        Ok(())
    }

    /// Append a user message and schedule its echo.
    ///
    /// Blank input (after trimming) is ignored: nothing is appended and no
    /// reply is scheduled. Outside a tokio runtime the reply cannot be
    /// scheduled, so the message is refused as well.
    pub fn append_user_message(&self, text: &str) -> Option<Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring blank submission");
            return None;
        }
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("no tokio runtime to deliver the reply, refusing message");
            return None;
        };

        let message = Message::user(self.inner.ids.next_id(), trimmed, current_time());
        self.push(message.clone());
        self.schedule_reply(&runtime, trimmed.to_string());
        Some(message)
    }

    /// Append a bot message built by the reply simulator.
    pub fn append_bot_message(&self, message: Message) {
        if message.sender != Sender::Bot {
            tracing::warn!(id = %message.id, "dropping non-bot message passed as a bot reply");
            return;
        }
        // Held across the push so a concurrent teardown cannot slip in between.
        let session = self.session();
        if session.torn_down {
            tracing::debug!(id = %message.id, "session torn down, dropping late reply");
            return;
        }
        self.push(message);
        drop(session);
    }

    pub fn subscribe(&self) -> watch::Receiver<LogSnapshot> {
        self.inner.log.subscribe()
    }

    pub fn snapshot(&self) -> LogSnapshot {
        self.inner.log.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.log.borrow().messages.clone()
    }

    pub fn revision(&self) -> u64 {
        self.inner.log.borrow().revision
    }

    pub fn reply_delay(&self) -> Duration {
        self.inner.simulator.delay()
    }

    /// Replies scheduled but not yet delivered or cancelled.
    pub fn pending_replies(&self) -> usize {
        self.session()
            .replies
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Cancel every outstanding reply. Nothing is delivered afterwards.
    pub fn teardown(&self) {
        let mut session = self.session();
        if session.torn_down {
            return;
        }
        session.torn_down = true;
        let cancelled = session.replies.len();
        for handle in session.replies.drain(..) {
            handle.cancel();
        }
        tracing::debug!(cancelled, "conversation torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.session().torn_down
    }

    fn push(&self, message: Message) {
        tracing::debug!(id = %message.id, sender = message.sender.as_str(), "appending message");
        self.inner.log.send_modify(|snapshot| {
            snapshot.messages.push(message);
            snapshot.revision += 1;
        });
    }

    fn schedule_reply(&self, runtime: &Handle, original_text: String) {
        let mut session = self.session();
        if session.torn_down {
            return;
        }
        session.replies.retain(|handle| !handle.is_finished());
        let handle = self.inner.simulator.schedule(runtime, original_text, self.clone());
        session.replies.push(handle);
    }

    fn session(&self) -> MutexGuard<'_, SessionState> {
        // The guarded state stays consistent even if a holder panicked.
        self.inner
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn seed() -> Vec<Message> {
        vec![
            Message::bot("1".into(), "Hello!", OffsetDateTime::UNIX_EPOCH),
            Message::user("2".into(), "Hey", OffsetDateTime::UNIX_EPOCH),
        ]
    }

    #[test]
    fn test_initialize_sets_log_once() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        store.initialize(seed()).unwrap();
        assert_eq!(store.messages(), seed());
        assert_eq!(store.revision(), 1);

        let err = store.initialize(Vec::new()).unwrap_err();
        assert!(matches!(err, SeedError::AlreadyInitialized));
        assert_eq!(store.messages().len(), 2);
    }

    #[test]
    fn test_initialize_rejects_invalid_seed() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        let mut bad = seed();
        bad[1].id = "1".into();
        assert!(matches!(
            store.initialize(bad),
            Err(SeedError::DuplicateId(_))
        ));
        assert!(store.messages().is_empty());
        store.initialize(seed()).unwrap();
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        assert!(store.append_user_message("").is_none());
        assert!(store.append_user_message("  \n\t ").is_none());
        assert!(store.messages().is_empty());
        assert_eq!(store.revision(), 0);
        assert_eq!(store.pending_replies(), 0);
    }

    #[test]
    fn test_bot_append_rejects_user_sender() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        store.append_bot_message(Message::user("x".into(), "sneaky", OffsetDateTime::UNIX_EPOCH));
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_user_append_outside_runtime_is_refused() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        assert!(store.append_user_message("hi").is_none());
        assert!(store.messages().is_empty());
        assert_eq!(store.revision(), 0);
        assert_eq!(store.pending_replies(), 0);
    }

    #[test]
    fn test_no_bot_append_lands_after_teardown_returns() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..2000 {
                    store.append_bot_message(Message::bot(
                        format!("b{i}"),
                        "late",
                        OffsetDateTime::UNIX_EPOCH,
                    ));
                }
            })
        };

        std::thread::yield_now();
        store.teardown();
        let revision_at_teardown = store.revision();
        writer.join().unwrap();

        assert_eq!(store.revision(), revision_at_teardown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_append_trims_and_schedules() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        let msg = store.append_user_message("  hello  ").unwrap();
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(store.messages(), vec![msg]);
        assert_eq!(store.pending_replies(), 1);
    }
}
