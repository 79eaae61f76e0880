use crate::attachment::{AttachmentError, AttachmentPreview};
use crate::store::ConversationStore;
use crate::types::Message;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AttachmentState {
    #[default]
    Empty,
    Loading,
    Ready(AttachmentPreview),
    Failed(AttachmentError),
}

/// Identifies one file selection. Only the newest ticket may apply a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// Draft text plus an optional staged image.
///
/// The staged image is display-only: `submit` sends the text alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composer {
    draft: String,
    attachment: AttachmentState,
    generation: u64,
    file_control_resets: u64,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn update_text(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Hand the trimmed draft to the store and clear it.
    pub fn submit(&mut self, store: &ConversationStore) -> Option<Message> {
        let sent = store.append_user_message(&self.draft)?;
        self.draft.clear();
        Some(sent)
    }

    pub fn attachment(&self) -> &AttachmentState {
        &self.attachment
    }

    pub fn preview(&self) -> Option<&AttachmentPreview> {
        match &self.attachment {
            AttachmentState::Ready(preview) => Some(preview),
            _ => None,
        }
    }

    /// Start a new selection, superseding any decode still in flight.
    pub fn begin_selection(&mut self) -> SelectionTicket {
        self.generation += 1;
        self.attachment = AttachmentState::Loading;
        SelectionTicket(self.generation)
    }

    /// Apply a decode result. Returns `false` when the ticket is stale.
    pub fn finish_selection(
        &mut self,
        ticket: SelectionTicket,
        result: Result<AttachmentPreview, AttachmentError>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale image decode"
            );
            return false;
        }
        self.attachment = match result {
            Ok(preview) => AttachmentState::Ready(preview),
            Err(err) => {
                tracing::warn!(error = %err, "image preview failed");
                AttachmentState::Failed(err)
            }
        };
        true
    }

    /// Drop the staged image and ask for the file control to be reset.
    pub fn cancel_attachment(&mut self) {
        self.generation += 1;
        self.attachment = AttachmentState::Empty;
        self.file_control_resets += 1;
    }

    /// Bumped on every cancel so the view can clear the file input, letting
    /// the same file be picked again.
    pub fn file_control_resets(&self) -> u64 {
        self.file_control_resets
    }
}
