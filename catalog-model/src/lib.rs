//! Core data model definitions shared across the catalog crates.
#![allow(missing_docs)]

pub mod cast_member_type;
pub mod error;
pub mod ids;
pub mod image;
pub mod media;
pub mod rating;

pub use cast_member_type::CastMemberType;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CastMemberID, CategoryID, GenreID, VideoID, parse_ids};
pub use image::{Image, ImageKind};
pub use media::{Media, MediaKind, MediaStatus};
pub use rating::Rating;
