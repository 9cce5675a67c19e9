//! SeaORM entities for the directory tables.

pub mod category;
pub mod contact;
pub mod subcategory;
