use crate::ChatSession;
use crate::theme::theme_definition;
use crate::views::ChatView;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    let session = use_context::<ChatSession>();

    use_session_teardown(session.clone());

    rsx! {
        ThemeStyles {}
        div { class: "chat-shell",
            AppHeader { title: session.config.title.clone() }
            ChatView { store: session.store.clone() }
        }
    }
}

/// Cancel outstanding bot replies when the app unmounts.
fn use_session_teardown(session: ChatSession) {
    use_drop(move || {
        tracing::info!("chat view unmounted, tearing down session");
        session.store.teardown();
    });
}

#[component]
fn ThemeStyles() -> Element {
    let definition = theme_definition();
    rsx! {
        style { dangerous_inner_html: "{definition.palette}" }
        style { dangerous_inner_html: "{definition.layout}" }
    }
}

#[component]
fn AppHeader(title: String) -> Element {
    rsx! {
        header { class: "chat-header",
            h1 { "{title}" }
        }
    }
}
