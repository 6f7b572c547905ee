use catalog_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A single domain rule rejected an entity.
    #[error("Entity validation failed: {0}")]
    EntityValidation(String),

    /// Accumulated validation failures, rendered by the notification.
    #[error("{0}")]
    Notification(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::EntityValidation(_) | CatalogError::Notification(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
