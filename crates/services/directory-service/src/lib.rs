//! Directory Service Library
//!
//! Categories, subcategories and contacts: the sea-orm persistence gateway,
//! schema migrations and the three engines that keep the records consistent.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::DirectoryConfig;
use crate::infra::Database;
use crate::repository::{CategoryStore, ContactStore, SubcategoryStore};
use crate::service::{
    CategoryManager, CategoryService, ContactManager, ContactService, SubcategoryManager,
    SubcategoryService,
};

/// The three engines wired to one database connection.
#[derive(Clone)]
pub struct DirectoryServices {
    pub categories: Arc<dyn CategoryService>,
    pub subcategories: Arc<dyn SubcategoryService>,
    pub contacts: Arc<dyn ContactService>,
}

impl DirectoryServices {
    /// Build stores and engines on top of `db`.
    pub fn new(db: &Database) -> Self {
        let conn = db.get_connection();

        let category_repo = Arc::new(CategoryStore::new(conn.clone()));
        let subcategory_repo = Arc::new(SubcategoryStore::new(conn.clone()));
        let contact_repo = Arc::new(ContactStore::new(conn));

        let categories: Arc<dyn CategoryService> =
            Arc::new(CategoryManager::new(category_repo.clone()));
        let subcategories: Arc<dyn SubcategoryService> =
            Arc::new(SubcategoryManager::new(subcategory_repo, category_repo));
        let contacts: Arc<dyn ContactService> = Arc::new(ContactManager::new(
            contact_repo,
            categories.clone(),
            subcategories.clone(),
        ));

        Self {
            categories,
            subcategories,
            contacts,
        }
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = DirectoryConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
