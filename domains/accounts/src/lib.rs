//! Accounts domain: users, brand and influencer profiles, categories

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::category_cache::CategoryCache;
pub use domain::entities::*;

// Re-export repository types
pub use repository::{AccountStore, InMemoryAccountStore, PgAccountStore};

pub use service::IdentityResolver;

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
