use crate::clock::current_time;
use crate::ids::MessageIds;
use crate::store::ConversationStore;
use crate::types::Message;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// The scripted echo sent back for every user message.
pub fn echo_text(original: &str) -> String {
    format!("You said: \"{original}\". I am a simple bot and can only echo your messages.")
}

/// Delivers a bot echo for each user message after a fixed delay.
#[derive(Clone, Debug)]
pub struct ReplySimulator {
    delay: Duration,
    ids: MessageIds,
}

/// A scheduled reply. Dropping the handle does not cancel it.
#[derive(Debug)]
pub struct ReplyHandle {
    abort: AbortHandle,
}

impl ReplyHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

impl ReplySimulator {
    pub fn new(delay: Duration, ids: MessageIds) -> Self {
        Self { delay, ids }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spawn the delayed reply on `runtime`.
    ///
    /// The deadline is fixed here, so the reply never lands before
    /// `now + delay` however late the task is first polled. The reply's id
    /// and timestamp are taken at delivery.
    pub fn schedule(
        &self,
        runtime: &Handle,
        original_text: String,
        store: ConversationStore,
    ) -> ReplyHandle {
        let deadline = Instant::now() + self.delay;
        let ids = self.ids.clone();
        tracing::debug!(delay = ?self.delay, "scheduling bot reply");

        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let reply = Message::bot(ids.next_id(), echo_text(&original_text), current_time());
            store.append_bot_message(reply);
        });

        ReplyHandle {
            abort: task.abort_handle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_text_is_exact() {
        assert_eq!(
            echo_text("hello"),
            "You said: \"hello\". I am a simple bot and can only echo your messages."
        );
    }

    #[test]
    fn test_echo_keeps_inner_quotes() {
        assert_eq!(
            echo_text("say \"hi\""),
            "You said: \"say \"hi\"\". I am a simple bot and can only echo your messages."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_never_lands() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        let simulator = ReplySimulator::new(Duration::from_millis(1000), MessageIds::default());

        let handle = simulator.schedule(&Handle::current(), "hi".to_string(), store.clone());
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(5000)).await;

        assert!(store.messages().is_empty());
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_timestamp_is_taken_at_delivery() {
        let store = ConversationStore::new(Duration::from_millis(1000));
        let simulator = ReplySimulator::new(Duration::from_millis(1000), MessageIds::default());

        let scheduled_at = current_time();
        simulator.schedule(&Handle::current(), "hi".to_string(), store.clone());
        tokio::time::sleep(Duration::from_millis(1500)).await;

        let log = store.messages();
        assert_eq!(log.len(), 1);
        assert!(log[0].timestamp >= scheduled_at);
        assert_eq!(log[0].text, echo_text("hi"));
    }
}
