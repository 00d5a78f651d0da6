//! Value-level normalization used by the pipeline stages.
//!
//! - **text**: join-key whitespace trimming
//! - **category**: missing-category defaulting
//! - **datetime**: date parsing at day granularity
//! - **duration**: whole-day stay length

pub mod category;
pub mod datetime;
pub mod duration;
pub mod text;

pub use category::{EventState, classify_event};
pub use datetime::parse_date;
pub use duration::{is_inverted_stay, stay_duration_days};
pub use text::normalize_join_key;
