//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use domain::{
    Category, CategoryPage, CategoryRequest, ContactPage, ContactRequest, ContactResponse,
    Subcategory, SubcategoryPage, SubcategoryRequest,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::category_handler::list_categories,
        crate::handlers::category_handler::get_category,
        crate::handlers::category_handler::create_category,
        crate::handlers::category_handler::update_category,
        crate::handlers::category_handler::delete_category,
        crate::handlers::subcategory_handler::list_subcategories,
        crate::handlers::subcategory_handler::get_subcategory,
        crate::handlers::subcategory_handler::create_subcategory,
        crate::handlers::subcategory_handler::update_subcategory,
        crate::handlers::subcategory_handler::delete_subcategory,
        crate::handlers::contact_handler::list_contacts,
        crate::handlers::contact_handler::get_contact,
        crate::handlers::contact_handler::create_contact,
        crate::handlers::contact_handler::update_contact,
        crate::handlers::contact_handler::delete_contact,
    ),
    components(
        schemas(
            Category,
            CategoryRequest,
            CategoryPage,
            Subcategory,
            SubcategoryRequest,
            SubcategoryPage,
            ContactRequest,
            ContactResponse,
            ContactPage,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Categories", description = "Top-level contact groups"),
        (name = "Subcategories", description = "Groups nested under a category"),
        (name = "Contacts", description = "Contact records"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
