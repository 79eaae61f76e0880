pub struct ThemeDefinition {
    pub palette: &'static str,
    pub layout: &'static str,
}

pub fn theme_definition() -> ThemeDefinition {
    ThemeDefinition {
        palette: PALETTE,
        layout: LAYOUT,
    }
}

const PALETTE: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-chat: #ffffff;
    --color-border: #cccccc;
    --color-text-primary: #222222;
    --color-text-muted: #666666;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #8644c6;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #eeddfd;
    --color-chat-bot-text: #221131;
    --color-accent: #653394;
    --color-error: #c0392b;
}
"#;

const LAYOUT: &str = r#"
body { margin: 0; background: var(--color-bg-primary); color: var(--color-text-primary); font-family: system-ui, sans-serif; }
.chat-shell { display: flex; flex-direction: column; width: 100%; max-width: 72rem; height: 100vh; margin: 0 auto; background: var(--color-bg-chat); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
.chat-header { display: flex; align-items: center; justify-content: space-between; padding: 1rem; border-bottom: 1px solid var(--color-border); }
.chat-header h1 { margin: 0; font-size: 1.5rem; font-weight: 700; }
.chat-body { display: flex; flex-direction: column; flex: 1; overflow: hidden; }
.chat-list { flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 1rem; }
.message-row { display: flex; align-items: flex-end; gap: 0.5rem; }
.message-row.user { justify-content: flex-end; }
.message-row.bot { justify-content: flex-start; }
.avatar { width: 2rem; height: 2rem; border-radius: 9999px; display: flex; align-items: center; justify-content: center; background: var(--color-accent); color: #fff; font-size: 0.875rem; flex-shrink: 0; }
.bubble { max-width: 32rem; border-radius: 0.5rem; padding: 0.5rem 1rem; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); border-bottom-right-radius: 0; }
.bubble.bot { background: var(--color-chat-bot-bg); color: var(--color-chat-bot-text); border-bottom-left-radius: 0; }
.bubble-text { margin: 0; font-size: 0.875rem; white-space: pre-wrap; }
.bubble-time { margin: 0.25rem 0 0; font-size: 0.75rem; text-align: right; opacity: 0.7; }
.composer { padding: 1rem; border-top: 1px solid var(--color-border); }
.composer-inner { display: flex; align-items: center; gap: 0.75rem; }
.composer input[type=text] { flex: 1; padding: 0.5rem 0.75rem; border-radius: 0.5rem; border: 1px solid var(--color-border); background: var(--color-input-bg); color: var(--color-text-primary); }
.btn { border: 1px solid var(--color-border); background: transparent; color: var(--color-text-primary); border-radius: 0.5rem; padding: 0.5rem 0.75rem; cursor: pointer; }
.btn:disabled { opacity: 0.5; cursor: default; }
.btn-attach { position: relative; overflow: hidden; width: 2.5rem; height: 2.5rem; padding: 0; border-radius: 13px; }
.btn-attach img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.attach-cancel { font-size: 0.75rem; color: var(--color-text-muted); }
.attach-error { font-size: 0.75rem; color: var(--color-error); }
.hidden { display: none; }
"#;
