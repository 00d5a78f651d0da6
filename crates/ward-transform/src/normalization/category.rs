//! Missing-category detection for the weekly `event` column.

/// How an `event` cell is treated by the defaulting stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    /// Null or the empty string: replaced with the default category.
    Missing,
    /// Only whitespace: flagged but left untouched.
    WhitespaceOnly,
    /// A recorded event.
    Recorded,
}

pub fn classify_event(value: Option<&str>) -> EventState {
    match value {
        None => EventState::Missing,
        Some("") => EventState::Missing,
        Some(text) if text.trim().is_empty() => EventState::WhitespaceOnly,
        Some(_) => EventState::Recorded,
    }
}
