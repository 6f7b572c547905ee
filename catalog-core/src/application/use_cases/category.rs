use std::sync::Arc;

use async_trait::async_trait;
use catalog_model::CategoryID;
use tracing::info;

use super::UseCase;
use crate::application::dto::{
    CategoryOutput, CreateCategoryInput, DeleteOutput, IdInput, ListInput,
    UpdateCategoryInput,
};
use crate::database::pagination::{PageRequest, Paginated};
use crate::database::ports::CategoryRepository;
use crate::domain::Category;
use crate::error::Result;

#[derive(Clone)]
pub struct CreateCategory {
    repository: Arc<dyn CategoryRepository>,
}

debug_ports!(CreateCategory { repository });

impl CreateCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<CreateCategoryInput, CategoryOutput> for CreateCategory {
    async fn execute(&self, input: CreateCategoryInput) -> Result<CategoryOutput> {
        let mut category = Category::new(input.name, input.description)?;
        if !input.is_active {
            category.disable();
        }

        let stored = self.repository.insert(&category).await?;
        info!(category_id = %stored.id(), "category created");
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct ListCategory {
    repository: Arc<dyn CategoryRepository>,
}

debug_ports!(ListCategory { repository });

impl ListCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<IdInput, CategoryOutput> for ListCategory {
    async fn execute(&self, input: IdInput) -> Result<CategoryOutput> {
        let id = CategoryID::parse(&input.id)?;
        Ok(self.repository.find_by_id(id).await?.into())
    }
}

#[derive(Clone)]
pub struct ListCategories {
    repository: Arc<dyn CategoryRepository>,
}

debug_ports!(ListCategories { repository });

impl ListCategories {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<ListInput, Paginated<CategoryOutput>> for ListCategories {
    async fn execute(
        &self,
        input: ListInput,
    ) -> Result<Paginated<CategoryOutput>> {
        let request = PageRequest::from(input);
        let page = self.repository.paginate(&request).await?;
        Ok(page.map(CategoryOutput::from))
    }
}

#[derive(Clone)]
pub struct UpdateCategory {
    repository: Arc<dyn CategoryRepository>,
}

debug_ports!(UpdateCategory { repository });

impl UpdateCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<UpdateCategoryInput, CategoryOutput> for UpdateCategory {
    async fn execute(&self, input: UpdateCategoryInput) -> Result<CategoryOutput> {
        let id = CategoryID::parse(&input.id)?;
        let mut category = self.repository.find_by_id(id).await?;

        category.update(input.name, input.description)?;
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.disable(),
            None => {}
        }

        let stored = self.repository.update(&category).await?;
        info!(category_id = %id, "category updated");
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct DeleteCategory {
    repository: Arc<dyn CategoryRepository>,
}

debug_ports!(DeleteCategory { repository });

impl DeleteCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<IdInput, DeleteOutput> for DeleteCategory {
    async fn execute(&self, input: IdInput) -> Result<DeleteOutput> {
        let id = CategoryID::parse(&input.id)?;
        let success = self.repository.delete(id).await?;
        info!(category_id = %id, success, "category deleted");
        Ok(DeleteOutput { success })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ports::MockCategoryRepository;
    use crate::error::CatalogError;
    use mockall::predicate::eq;

    fn stored(name: &str) -> Category {
        Category::new(name, Some("desc".into())).unwrap()
    }

    #[tokio::test]
    async fn create_persists_and_maps_output() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|category| Ok(category.clone()));

        let output = CreateCategory::new(Arc::new(repo))
            .execute(CreateCategoryInput {
                name: "Movies".into(),
                description: Some("desc".into()),
                is_active: false,
            })
            .await
            .unwrap();

        assert_eq!(output.name, "Movies");
        assert_eq!(output.description.as_deref(), Some("desc"));
        assert!(!output.is_active);
        assert_eq!(output.created_at.len(), 19);
    }

    #[tokio::test]
    async fn create_rejects_short_name_without_touching_repository() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert().never();

        let err = CreateCategory::new(Arc::new(repo))
            .execute(CreateCategoryInput::new("ab"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn list_parses_id_and_fetches() {
        let category = stored("Drama");
        let id = category.id();
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(category.clone()));

        let output = ListCategory::new(Arc::new(repo))
            .execute(IdInput::new(id.to_string()))
            .await
            .unwrap();

        assert_eq!(output.id, id.to_string());
        assert_eq!(output.name, "Drama");
    }

    #[tokio::test]
    async fn list_rejects_malformed_id() {
        let repo = MockCategoryRepository::new();
        let err = ListCategory::new(Arc::new(repo))
            .execute(IdInput::new("not-a-uuid"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Model(_)));
    }

    #[tokio::test]
    async fn list_categories_maps_page() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_paginate().times(1).returning(|request| {
            Ok(Paginated::new(vec![stored("Action")], 1, request))
        });

        let page = ListCategories::new(Arc::new(repo))
            .execute(ListInput::default())
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Action");
        assert_eq!(page.per_page, 15);
    }

    #[tokio::test]
    async fn update_keeps_description_when_absent() {
        let category = stored("Before");
        let id = category.id();
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(category.clone()));
        repo.expect_update()
            .times(1)
            .returning(|category| Ok(category.clone()));

        let output = UpdateCategory::new(Arc::new(repo))
            .execute(UpdateCategoryInput {
                id: id.to_string(),
                name: "After".into(),
                description: None,
                is_active: Some(false),
            })
            .await
            .unwrap();

        assert_eq!(output.name, "After");
        assert_eq!(output.description.as_deref(), Some("desc"));
        assert!(!output.is_active);
    }

    #[tokio::test]
    async fn update_propagates_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Err(CatalogError::NotFound(format!("Category {id} not found")))
        });
        repo.expect_update().never();

        let err = UpdateCategory::new(Arc::new(repo))
            .execute(UpdateCategoryInput {
                id: CategoryID::new().to_string(),
                name: "After".into(),
                description: None,
                is_active: None,
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_reports_success() {
        let id = CategoryID::new();
        let mut repo = MockCategoryRepository::new();
        repo.expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(true));

        let output = DeleteCategory::new(Arc::new(repo))
            .execute(IdInput::new(id.to_string()))
            .await
            .unwrap();

        assert!(output.success);
    }
}
