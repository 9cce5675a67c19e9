//! Repository layer - Data access abstraction.
//!
//! Each trait is backed by a sea-orm store. Integrity between the tables is
//! checked by the services, not by the database.

pub mod category_repository;
pub mod contact_repository;
pub mod entities;
pub mod subcategory_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use contact_repository::{ContactRepository, ContactStore};
pub use subcategory_repository::{SubcategoryRepository, SubcategoryStore};

#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use contact_repository::MockContactRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use subcategory_repository::MockSubcategoryRepository;
