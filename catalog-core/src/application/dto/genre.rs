use serde::{Deserialize, Serialize};

use crate::domain::Genre;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreInput {
    pub name: String,
    pub categories_id: Vec<String>,
    pub is_active: bool,
}

/// Replaces the name and the full category set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreInput {
    pub id: String,
    pub name: String,
    pub categories_id: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories_id: Vec<String>,
    pub created_at: String,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
            name: genre.name().to_owned(),
            is_active: genre.is_active(),
            categories_id: genre
                .categories_id()
                .iter()
                .map(ToString::to_string)
                .collect(),
            created_at: genre.created_at_formatted(),
        }
    }
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self::from(&genre)
    }
}
