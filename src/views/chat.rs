use crate::clock::format_time_label;
use crate::scroll::{ScrollAnchor, scroll_to_bottom_script};
use crate::store::{ConversationStore, LogSnapshot};
use crate::types::Message;
use crate::views::MessageInput;
use dioxus::prelude::*;

pub const MESSAGE_LIST_ID: &str = "chat-list";

#[component]
pub fn ChatView(store: ConversationStore) -> Element {
    let snapshot = use_log_snapshot(store.clone());

    rsx! {
        div { class: "chat-body",
            MessageList { snapshot }
            MessageInput { store }
        }
    }
}

/// Mirror the store's log into a signal, one update per append.
fn use_log_snapshot(store: ConversationStore) -> Signal<LogSnapshot> {
    let initial = store.clone();
    let mut snapshot = use_signal(move || initial.snapshot());

    use_future(move || {
        let store = store.clone();
        async move {
            let mut updates = store.subscribe();
            snapshot.set(updates.borrow_and_update().clone());
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    snapshot
}

#[component]
fn MessageList(snapshot: Signal<LogSnapshot>) -> Element {
    let mut anchor = use_signal(ScrollAnchor::default);

    use_effect(move || {
        let revision = snapshot.read().revision;
        if anchor.write().observe(revision) {
            let _ = document::eval(&scroll_to_bottom_script(MESSAGE_LIST_ID));
        }
    });

    let messages = snapshot.read().messages.clone();

    rsx! {
        div { id: MESSAGE_LIST_ID, class: "chat-list",
            for message in messages {
                ChatBubble { key: "{message.id}", message: message.clone() }
            }
        }
    }
}

#[component]
fn ChatBubble(message: Message) -> Element {
    let side = message.sender.as_str();
    let time_label = format_time_label(message.timestamp);

    rsx! {
        div { class: "message-row {side}",
            if !message.is_user() {
                div { class: "avatar", title: "Bot", "B" }
            }
            div { class: "bubble {side}",
                p { class: "bubble-text", "{message.text}" }
                if let Some(label) = time_label {
                    p { class: "bubble-time", "{label}" }
                }
            }
        }
    }
}
