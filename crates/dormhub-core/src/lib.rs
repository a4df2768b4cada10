//! # dormhub-core
//!
//! Core crate for the DormHub client. Contains configuration schemas,
//! typed identifiers, the backend error body, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DormHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
