//! # Catalog Core
//!
//! Domain model, persistence and use cases of the video catalog: categories,
//! genres, cast members and videos with their relations and media slots.
//!
//! ## Feature Flags
//!
//! - `database`: PostgreSQL repositories (SQLx) and the embedded migrations
//!
//! ## Layout
//!
//! - [`domain`]: self-validating entities and the notification pattern
//! - [`database`]: pagination, repository ports and the PostgreSQL adapter
//! - [`application`]: DTOs, use cases and [`CatalogRepositories`]
//!
//! ```no_run
//! use catalog_core::application::{dto::CreateCategoryInput, UseCase};
//! use catalog_core::database::{PoolSettings, PostgresDatabase};
//! use catalog_core::CatalogRepositories;
//!
//! async fn seed(url: &str) -> catalog_core::Result<()> {
//!     let db = PostgresDatabase::connect(url, PoolSettings::default()).await?;
//!     db.migrate().await?;
//!
//!     let repos = CatalogRepositories::postgres(&db);
//!     let created = repos
//!         .create_category()
//!         .execute(CreateCategoryInput::new("Documentaries"))
//!         .await?;
//!     println!("{}", created.id);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod application;
pub mod database;
pub mod domain;
pub mod error;

pub use application::CatalogRepositories;
pub use error::{CatalogError, Result};

#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
