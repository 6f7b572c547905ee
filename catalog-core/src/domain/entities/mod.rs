mod cast_member;
mod category;
mod genre;
mod video;

pub use cast_member::CastMember;
pub use category::Category;
pub use genre::Genre;
pub use video::{Video, VideoFields};

use chrono::{DateTime, Utc};

/// Timestamp layout used when entities are rendered for callers.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at.format(CREATED_AT_FORMAT).to_string()
}
