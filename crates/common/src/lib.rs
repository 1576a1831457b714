//! Shared utilities, configuration, and error handling for Collabhub
//!
//! This crate provides common functionality used across the Collabhub services:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Repository error mapping
//! - Request extractors (validated JSON, page-based pagination)

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::{Config, StoreBackend};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{PageQuery, ValidatedJson};
pub use state::StateError;
