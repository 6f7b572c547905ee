use catalog_model::{CategoryID, GenreID};
use chrono::{DateTime, Utc};

use crate::domain::validation::DomainValidation;
use crate::error::Result;

/// Genre aggregate with the categories it is filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    id: GenreID,
    name: String,
    is_active: bool,
    categories_id: Vec<CategoryID>,
    created_at: DateTime<Utc>,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::restore(GenreID::new(), name, true, Vec::new(), Utc::now())
    }

    pub fn restore(
        id: GenreID,
        name: impl Into<String>,
        is_active: bool,
        categories_id: Vec<CategoryID>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let genre = Self {
            id,
            name: name.into(),
            is_active,
            categories_id,
            created_at,
        };
        genre.validate()?;
        Ok(genre)
    }

    pub fn id(&self) -> GenreID {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn categories_id(&self) -> &[CategoryID] {
        &self.categories_id
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

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn update(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        DomainValidation::name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn add_category(&mut self, category_id: CategoryID) {
        self.categories_id.push(category_id);
    }

    /// Drop the first occurrence of `category_id`, if any.
    pub fn remove_category(&mut self, category_id: CategoryID) {
        if let Some(index) =
            self.categories_id.iter().position(|id| *id == category_id)
        {
            self.categories_id.remove(index);
        }
    }

    fn validate(&self) -> Result<()> {
        DomainValidation::name(&self.name)
    }
}
