//! Contact domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::category::Category;
use crate::subcategory::{Subcategory, SubcategoryLink};
use crate::validation::PHONE_NUMBER_REGEX;

/// Contact domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as received; credential handling lives in the auth subsystem
    pub password: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
}

/// Contact create/update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(
        custom(function = "crate::validation::not_blank", message = "FirstName is required."),
        length(max = 50, message = "FirstName must not exceed 50 characters.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: String,

    #[validate(
        custom(function = "crate::validation::not_blank", message = "LastName is required."),
        length(max = 50, message = "LastName must not exceed 50 characters.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,

    #[validate(
        email(message = "Invalid email format."),
        length(max = 50, message = "Email must not exceed 50 characters.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: String,

    #[validate(
        custom(function = "crate::validation::not_blank", message = "Password is required."),
        length(max = 50, message = "Password must not exceed 50 characters.")
    )]
    pub password: String,

    #[validate(
        regex(
            path = *PHONE_NUMBER_REGEX,
            message = "Invalid phone number format. It should contain only digits."
        ),
        length(max = 50, message = "PhoneNumber must not exceed 50 characters.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "48123456789"))]
    pub phone_number: String,

    pub date_of_birth: NaiveDate,

    #[validate(
        custom(function = "crate::validation::not_blank", message = "CategoryName is required."),
        length(max = 50, message = "CategoryName must not exceed 50 characters.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "work"))]
    pub category_name: String,

    #[validate(length(max = 50, message = "SubcategoryName must not exceed 50 characters."))]
    #[cfg_attr(feature = "openapi", schema(example = "boss"))]
    pub subcategory_name: Option<String>,
}

/// Fully resolved contact ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub category_id: i32,
    pub subcategory: SubcategoryLink,
}

impl ContactDraft {
    /// Combine a request with its resolved category and subcategory.
    pub fn from_request(
        request: ContactRequest,
        category_id: i32,
        subcategory: SubcategoryLink,
    ) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
            phone_number: request.phone_number,
            date_of_birth: request.date_of_birth,
            category_id,
            subcategory,
        }
    }
}

/// Contact together with the records it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub contact: Contact,
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
}

/// Contact response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub category_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Subcategory>,
}

impl From<ContactDetails> for ContactResponse {
    fn from(details: ContactDetails) -> Self {
        let ContactDetails {
            contact,
            category,
            subcategory,
        } = details;

        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone_number: contact.phone_number,
            date_of_birth: contact.date_of_birth,
            category_id: contact.category_id,
            category,
            subcategory_id: contact.subcategory_id,
            subcategory,
        }
    }
}
