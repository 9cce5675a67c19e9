//! Subcategory domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::ENTITY_NAME_REGEX;

/// Second-level grouping, always linked to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    /// Unique subcategory identifier
    pub id: i32,
    /// Subcategory name
    pub name: String,
    /// Owning category
    pub category_id: i32,
}

impl Subcategory {
    pub fn new(id: i32, name: impl Into<String>, category_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}

/// Subcategory create/update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryRequest {
    /// Lowercase letters, digits and hyphens; at most 50 characters
    #[validate(
        custom(
            function = "crate::validation::not_blank",
            message = "Subcategory name is required."
        ),
        length(max = 50, message = "Subcategory name cannot exceed 50 characters."),
        regex(
            path = *ENTITY_NAME_REGEX,
            message = "Subcategory name can only contain lowercase letters, numbers, and hyphens."
        ),
        custom(
            function = "crate::validation::no_whitespace",
            message = "Subcategory name cannot contain spaces."
        )
    )]
    #[cfg_attr(feature = "openapi", schema(example = "boss"))]
    pub name: String,
    /// Existing category this subcategory belongs to
    #[validate(range(min = 1, message = "Category ID is required."))]
    pub category_id: i32,
}

impl SubcategoryRequest {
    pub fn new(name: impl Into<String>, category_id: i32) -> Self {
        Self {
            name: name.into(),
            category_id,
        }
    }
}

/// A subcategory built in code rather than received from a client.
///
/// Validated with the same structural rules as [`SubcategoryRequest`] before
/// it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewSubcategory {
    #[validate(
        custom(
            function = "crate::validation::not_blank",
            message = "Subcategory name is required."
        ),
        length(max = 50, message = "Subcategory name cannot exceed 50 characters."),
        regex(
            path = *ENTITY_NAME_REGEX,
            message = "Subcategory name can only contain lowercase letters, numbers, and hyphens."
        ),
        custom(
            function = "crate::validation::no_whitespace",
            message = "Subcategory name cannot contain spaces."
        )
    )]
    pub name: String,
    #[validate(range(min = 1, message = "Category ID is required."))]
    pub category_id: i32,
}

impl NewSubcategory {
    pub fn new(name: impl Into<String>, category_id: i32) -> Self {
        Self {
            name: name.into(),
            category_id,
        }
    }
}

impl From<SubcategoryRequest> for NewSubcategory {
    fn from(request: SubcategoryRequest) -> Self {
        Self::new(request.name, request.category_id)
    }
}

/// How a contact write links to a subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubcategoryLink {
    /// No subcategory
    #[default]
    Unset,
    /// An already-stored subcategory
    Existing(Subcategory),
    /// A subcategory to insert in the same transaction as the contact
    Create(NewSubcategory),
}

impl SubcategoryLink {
    /// Id of the linked subcategory when it is already stored.
    pub fn existing_id(&self) -> Option<i32> {
        match self {
            SubcategoryLink::Existing(subcategory) => Some(subcategory.id),
            _ => None,
        }
    }
}
