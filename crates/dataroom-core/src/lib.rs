//! # dataroom-core
//!
//! Core crate for DataRoom. Contains the collaborator traits, configuration
//! schemas, logging initialization, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DataRoom crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
