//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for the engines and HTTP
//! - Validation report flattening
//! - Configuration structures

pub mod config;
pub mod error;
pub mod validation;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
