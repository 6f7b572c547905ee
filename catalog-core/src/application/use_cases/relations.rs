use std::fmt::Display;

use crate::error::{CatalogError, Result};

/// Names used in the "not found" message for a kind of related entity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Noun {
    pub singular: &'static str,
    pub plural: &'static str,
}

pub(crate) const CATEGORY: Noun = Noun {
    singular: "Category",
    plural: "Categories",
};

pub(crate) const GENRE: Noun = Noun {
    singular: "Genre",
    plural: "Genres",
};

pub(crate) const CAST_MEMBER: Noun = Noun {
    singular: "Cast Member",
    plural: "Cast Members",
};

/// Fails with `NotFound` naming every requested id missing from `found`.
pub(crate) fn ensure_all_found<T>(
    noun: Noun,
    requested: &[T],
    found: &[T],
) -> Result<()>
where
    T: PartialEq + Display,
{
    let mut missing: Vec<String> = Vec::new();
    for id in requested {
        let label = id.to_string();
        if !found.contains(id) && !missing.contains(&label) {
            missing.push(label);
        }
    }

    if missing.is_empty() {
        return Ok(());
    }

    let word = if missing.len() > 1 {
        noun.plural
    } else {
        noun.singular
    };
    Err(CatalogError::NotFound(format!(
        "{word} {} not found",
        missing.join(", ")
    )))
}
