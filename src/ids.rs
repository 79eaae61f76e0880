use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of every generated id. Seed messages may not use it.
pub const GENERATED_ID_PREFIX: &str = "msg-";

/// Session-scoped id source shared by the store and the reply simulator.
///
/// Every id handed out is distinct, including ids drawn in the same
/// millisecond.
#[derive(Clone, Debug)]
pub struct MessageIds {
    counter: Arc<AtomicU64>,
}

impl Default for MessageIds {
    fn default() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl MessageIds {
    pub fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{GENERATED_ID_PREFIX}{n}")
    }
}

pub fn is_reserved(id: &str) -> bool {
    id.starts_with(GENERATED_ID_PREFIX)
}
