//! Service layer - the directory engines.

mod category_service;
mod contact_service;
mod subcategory_service;

pub use category_service::{CategoryManager, CategoryService};
pub use contact_service::{ContactManager, ContactService};
pub use subcategory_service::{SubcategoryManager, SubcategoryService};

#[cfg(any(test, feature = "test-utils"))]
pub use category_service::MockCategoryService;
#[cfg(any(test, feature = "test-utils"))]
pub use contact_service::MockContactService;
#[cfg(any(test, feature = "test-utils"))]
pub use subcategory_service::MockSubcategoryService;
