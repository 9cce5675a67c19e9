//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the directory entities, their request payloads and validation rules, the
//! subcategory assignment policy and page windowing.

pub mod category;
pub mod constants;
pub mod contact;
pub mod error;
pub mod pagination;
pub mod policy;
pub mod subcategory;
pub mod validation;

pub use category::{Category, CategoryRequest};
pub use constants::*;
pub use contact::{Contact, ContactDetails, ContactDraft, ContactRequest, ContactResponse};
pub use error::{DomainError, DomainResult};
pub use pagination::{PageQuery, PageWindow, Paginated};
pub use policy::CategoryPolicy;
pub use subcategory::{NewSubcategory, Subcategory, SubcategoryLink, SubcategoryRequest};

#[cfg(feature = "openapi")]
pub use pagination::{CategoryPage, ContactPage, SubcategoryPage};
