use crate::attachment::{ImageSource, load_preview};
use crate::composer::{AttachmentState, Composer};
use crate::scroll::reset_file_input_script;
use crate::store::ConversationStore;
use async_trait::async_trait;
use dioxus::html::FileEngine;
use dioxus::prelude::*;
use std::sync::Arc;

pub const FILE_INPUT_ID: &str = "composer-file";

/// A file chosen through the browser's file input.
struct SelectedFile {
    engine: Arc<dyn FileEngine>,
    name: String,
}

#[async_trait(?Send)]
impl ImageSource for SelectedFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> Option<Vec<u8>> {
        self.engine.read_file(&self.name).await
    }
}

#[component]
pub fn MessageInput(store: ConversationStore) -> Element {
    let mut composer = use_signal(Composer::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        composer.with_mut(|c| {
            c.submit(&store);
        });
    };

    let on_file_change = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let ticket = composer.write().begin_selection();
        spawn(async move {
            let source = SelectedFile { engine, name };
            let result = load_preview(&source).await;
            composer.write().finish_selection(ticket, result);
        });
    };

    let on_cancel = move |_| {
        composer.write().cancel_attachment();
        let _ = document::eval(&reset_file_input_script(FILE_INPUT_ID));
    };

    let state = composer.read().attachment().clone();
    let draft = composer.read().draft().to_string();
    let can_send = composer.read().can_submit();
    let has_attachment = !matches!(state, AttachmentState::Empty);

    let attach_face = match &state {
        AttachmentState::Ready(preview) => rsx! {
            img { src: "{preview.data_url}", alt: "Preview" }
        },
        AttachmentState::Loading => rsx! { "…" },
        AttachmentState::Empty | AttachmentState::Failed(_) => rsx! { "Img" },
    };

    rsx! {
        form { class: "composer", onsubmit: on_submit,
            div { class: "composer-inner",
                input {
                    r#type: "text",
                    placeholder: "Type a message...",
                    autocomplete: "off",
                    value: "{draft}",
                    oninput: move |ev| composer.write().update_text(ev.value()),
                }
                label { class: "btn btn-attach", title: "Upload image", aria_label: "Upload image",
                    input {
                        id: FILE_INPUT_ID,
                        class: "hidden",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_file_change,
                    }
                    {attach_face}
                }
                if has_attachment {
                    button { class: "btn attach-cancel", r#type: "button", onclick: on_cancel, "Remove" }
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    aria_label: "Send message",
                    disabled: !can_send,
                    "Send"
                }
            }
            if let AttachmentState::Failed(err) = &state {
                p { class: "attach-error", "Could not load image: {err}" }
            }
        }
    }
}
