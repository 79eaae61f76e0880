/// Keeps the message list pinned to its newest entry.
///
/// Every new log revision asks for a scroll to the bottom, even if the user
/// had scrolled up to read older messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollAnchor {
    last_revision: Option<u64>,
    scrolls: u64,
}

impl ScrollAnchor {
    /// Record a rendered revision. Returns `true` when the viewport must jump
    /// to the bottom.
    pub fn observe(&mut self, revision: u64) -> bool {
        if self.last_revision == Some(revision) {
            return false;
        }
        self.last_revision = Some(revision);
        self.scrolls += 1;
        true
    }

    pub fn scrolls(&self) -> u64 {
        self.scrolls
    }
}

/// Script that moves `element_id` to its maximum scroll offset.
pub fn scroll_to_bottom_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
    const el = document.getElementById('{element_id}');
    if (el) {{ el.scrollTop = el.scrollHeight; }}
}})();"#
    )
}

/// Script that clears a file input so the same file can be chosen again.
pub fn reset_file_input_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
    const el = document.getElementById('{element_id}');
    if (el) {{ el.value = ''; }}
}})();"#
    )
}
