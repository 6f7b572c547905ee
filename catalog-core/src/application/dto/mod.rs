//! Input / output payloads of the use cases. Outputs serialize with ids as
//! strings and `created_at` rendered as `%Y-%m-%d %H:%M:%S`.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod video;

use serde::{Deserialize, Serialize};

use crate::database::pagination::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, ListFilter, PageRequest, SortOrder,
};

pub use cast_member::{
    CastMemberOutput, CreateCastMemberInput, UpdateCastMemberInput,
};
pub use category::{CategoryOutput, CreateCategoryInput, UpdateCategoryInput};
pub use genre::{CreateGenreInput, GenreOutput, UpdateGenreInput};
pub use video::{
    ChangeEncodedPathInput, ChangeEncodedPathOutput, CreateVideoInput,
    VideoOutput, VideoFieldsInput, UpdateVideoInput,
};

/// Lookup / delete by id. The id is parsed inside the use case so a
/// malformed value surfaces as a `CatalogError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdInput {
    pub id: String,
}

impl IdInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutput {
    pub success: bool,
}

/// Paged list query shared by every `List*` use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInput {
    pub filter: Option<String>,
    pub order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListInput {
    fn default() -> Self {
        Self {
            filter: None,
            order: SortOrder::default(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl From<ListInput> for PageRequest {
    fn from(input: ListInput) -> Self {
        PageRequest::new(
            ListFilter::new(input.filter, input.order),
            input.page,
            input.per_page,
        )
    }
}
