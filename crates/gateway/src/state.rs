//! Application state for dependency injection.

use std::sync::Arc;

use directory_service_lib::infra::Database;
use directory_service_lib::service::{CategoryService, ContactService, SubcategoryService};
use directory_service_lib::DirectoryServices;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryService>,
    pub subcategories: Arc<dyn SubcategoryService>,
    pub contacts: Arc<dyn ContactService>,
    pub db: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(services: DirectoryServices, db: Database) -> Self {
        Self {
            categories: services.categories,
            subcategories: services.subcategories,
            contacts: services.contacts,
            db,
        }
    }
}
