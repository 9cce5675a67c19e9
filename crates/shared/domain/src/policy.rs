//! Subcategory assignment policy keyed on a contact's category name.

use crate::constants::{CATEGORY_OTHER, CATEGORY_WORK};
use crate::error::{DomainError, DomainResult};

/// How a contact's subcategory is resolved for a given category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPolicy {
    /// Subcategory is required and must already exist under `work`.
    Work,
    /// Subcategory is required; reused by name or created under `other`.
    Other,
    /// Any other category; the contact carries no subcategory.
    Unrestricted,
}

impl CategoryPolicy {
    /// Pick the policy for a category name (exact, case-sensitive match).
    pub fn for_category(name: &str) -> Self {
        match name {
            CATEGORY_WORK => CategoryPolicy::Work,
            CATEGORY_OTHER => CategoryPolicy::Other,
            _ => CategoryPolicy::Unrestricted,
        }
    }

    /// Check the supplied subcategory name against the policy.
    ///
    /// Returns the name that must be resolved, or `None` when the policy
    /// ignores subcategories.
    pub fn required_subcategory<'a>(
        &self,
        subcategory_name: Option<&'a str>,
    ) -> DomainResult<Option<&'a str>> {
        let supplied = subcategory_name.filter(|name| !name.trim().is_empty());

        match (self, supplied) {
            (CategoryPolicy::Unrestricted, _) => Ok(None),
            (_, Some(name)) => Ok(Some(name)),
            (CategoryPolicy::Work, None) => Err(DomainError::validation(
                "For 'work' category, you must select a subcategory.",
            )),
            (CategoryPolicy::Other, None) => Err(DomainError::validation(
                "For 'other' category, you must provide a subcategory.",
            )),
        }
    }
}
