use catalog_model::CategoryID;
use chrono::{DateTime, Utc};

use crate::domain::validation::{DEFAULT_MAX_LENGTH, DomainValidation};
use crate::error::Result;

/// Category aggregate. Name is 3..=255 characters, the optional description
/// is capped at 255.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryID,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self> {
        Self::restore(CategoryID::new(), name, description, true, Utc::now())
    }

    /// Rebuild a category from stored state, re-checking its rules.
    pub fn restore(
        id: CategoryID,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let category = Self {
            id,
            name: name.into(),
            description,
            is_active,
            created_at,
        };
        category.validate()?;
        Ok(category)
    }

    pub fn id(&self) -> CategoryID {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_at_formatted(&self) -> String {
        super::format_created_at(self.created_at)
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn disable(&mut self) {
        self.is_active = false;
    }

    /// Rename and optionally replace the description. Leaves the category
    /// untouched when the new values are invalid.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<()> {
        let mut candidate = self.clone();
        candidate.name = name.into();
        if description.is_some() {
            candidate.description = description;
        }
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        DomainValidation::name(&self.name)?;
        DomainValidation::str_can_null_and_max_length(
            self.description.as_deref(),
            DEFAULT_MAX_LENGTH,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn new_category_defaults() {
        let category =
            Category::new("Movies", Some("feature films".into())).unwrap();

        assert_eq!(category.name(), "Movies");
        assert_eq!(category.description(), Some("feature films"));
        assert!(category.is_active());
    }

    #[test]
    fn restore_keeps_identity() {
        let id = CategoryID::new();
        let created_at = Utc::now();
        let category =
            Category::restore(id, "Movies", None, false, created_at).unwrap();

        assert_eq!(category.id(), id);
        assert_eq!(category.created_at(), created_at);
        assert!(!category.is_active());
    }

    #[test]
    fn activation_toggles() {
        let mut category = Category::new("Movies", None).unwrap();
        category.disable();
        assert!(!category.is_active());
        category.activate();
        assert!(category.is_active());
    }

    #[test]
    fn rejects_short_name_and_long_description() {
        assert!(matches!(
            Category::new("ab", None),
            Err(CatalogError::EntityValidation(_))
        ));
        assert!(Category::new("Movies", Some("d".repeat(256))).is_err());
    }

    #[test]
    fn update_keeps_description_when_absent() {
        let mut category =
            Category::new("Movies", Some("desc".into())).unwrap();
        category.update("Series", None).unwrap();

        assert_eq!(category.name(), "Series");
        assert_eq!(category.description(), Some("desc"));
    }

    #[test]
    fn failed_update_leaves_state() {
        let mut category = Category::new("Movies", None).unwrap();
        assert!(category.update("x", None).is_err());
        assert_eq!(category.name(), "Movies");
    }
}
