//! Category domain entity and request types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::ENTITY_NAME_REGEX;

/// Top-level grouping for contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier
    pub id: i32,
    /// Unique category name
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Category create/update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    /// Lowercase letters, digits and hyphens; at most 50 characters
    #[validate(
        custom(
            function = "crate::validation::not_blank",
            message = "Category name is required."
        ),
        length(max = 50, message = "Category name cannot exceed 50 characters."),
        regex(
            path = *ENTITY_NAME_REGEX,
            message = "Category name can only contain lowercase letters, numbers, and hyphens."
        ),
        custom(
            function = "crate::validation::no_whitespace",
            message = "Category name cannot contain spaces."
        )
    )]
    #[cfg_attr(feature = "openapi", schema(example = "family"))]
    pub name: String,
}

impl CategoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
