//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Category Policy
// =============================================================================

/// Category whose contacts must pick an existing subcategory
pub const CATEGORY_WORK: &str = "work";

/// Category whose contacts may introduce new subcategories
pub const CATEGORY_OTHER: &str = "other";

// =============================================================================
// Pagination
// =============================================================================

/// Hard ceiling on page size; larger requests are silently capped
pub const MAX_PAGE_SIZE: i64 = 10;

/// Page size used when the client does not send one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Allowed shape of category and subcategory names
pub const ENTITY_NAME_PATTERN: &str = "^[a-z0-9-]+$";

/// Allowed shape of phone numbers
pub const PHONE_NUMBER_PATTERN: &str = r"^\d+$";

// =============================================================================
// Messages
// =============================================================================

pub const MSG_CATEGORY_NOT_FOUND: &str = "Category not found.";
pub const MSG_SUBCATEGORY_NOT_FOUND: &str = "Subcategory not found.";
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const MSG_CATEGORY_IN_USE: &str =
    "Category is being used by one or more contacts and cannot be deleted.";
pub const MSG_SUBCATEGORY_IN_USE: &str =
    "Subcategory is being used by one or more contacts and cannot be deleted.";
pub const MSG_CATEGORY_NAME_TAKEN: &str = "Category name is not unique.";
pub const MSG_SUBCATEGORY_NAME_TAKEN: &str = "Subcategory name is not unique.";
pub const MSG_INVALID_CATEGORY_ID: &str = "Invalid CategoryId specified.";
pub const MSG_EMAIL_TAKEN: &str = "Email is not unique.";
pub const MSG_PHONE_TAKEN: &str = "Phone is not unique.";
pub const MSG_WORK_SUBCATEGORY_MISMATCH: &str =
    "Subcategory not found or doesn't belong to category 'work'.";
