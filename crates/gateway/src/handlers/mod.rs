//! HTTP handlers.

pub mod category_handler;
pub mod contact_handler;
pub mod health_handler;
pub mod subcategory_handler;

pub use category_handler::category_routes;
pub use contact_handler::contact_routes;
pub use health_handler::health_routes;
pub use subcategory_handler::subcategory_routes;
