use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute padding:zero] [period case:upper]");

pub fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Bubble time label in the local offset, e.g. `3:07 PM`.
pub fn format_time_label(timestamp: OffsetDateTime) -> Option<String> {
    match UtcOffset::current_local_offset() {
        Ok(offset) => format_time_label_at(timestamp, offset),
        Err(_) => format_time_label_at(timestamp, UtcOffset::UTC),
    }
}

pub fn format_time_label_at(timestamp: OffsetDateTime, offset: UtcOffset) -> Option<String> {
    timestamp.to_offset(offset).format(MESSAGE_TIME_FORMAT).ok()
}
