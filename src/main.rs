use anyhow::Context;
use modernchat::{ChatConfig, ChatSession, clock, seed};

/// Bundled config for mobile and web builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for item in dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes()) {
        let Ok((key, value)) = item else {
            continue;
        };
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_seed(config: &ChatConfig) -> anyhow::Result<Vec<modernchat::Message>> {
    let now = clock::current_time();
    match &config.seed_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading seed conversation from {}", path.display()))?;
            seed::parse_seed(&json, now).context("parsing seed conversation")
        }
        None => seed::demo_conversation(now).context("parsing bundled seed conversation"),
    }
}

#[cfg(target_arch = "wasm32")]
fn load_seed(_config: &ChatConfig) -> anyhow::Result<Vec<modernchat::Message>> {
    seed::demo_conversation(clock::current_time()).context("parsing bundled seed conversation")
}

fn bootstrap() -> anyhow::Result<ChatSession> {
    load_dotenv();
    let config = ChatConfig::from_env().context("reading configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let seed = load_seed(&config)?;
    let session = ChatSession::start(config, seed)?;
    tracing::info!(
        title = %session.config.title,
        reply_delay = ?session.config.reply_delay,
        "starting chat"
    );
    Ok(session)
}

fn main() -> anyhow::Result<()> {
    let session = bootstrap()?;
    dioxus::LaunchBuilder::new()
        .with_context(session)
        .launch(modernchat::ui::App);
    Ok(())
}
