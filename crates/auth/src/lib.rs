//! Authentication middleware for Collabhub
//!
//! The identity provider owns credentials. This crate only verifies the
//! provider's signed bearer token and surfaces the caller's stable external
//! reference (`sub`) through axum extractors that work with any domain state
//! implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use backend::AuthBackend;
pub use claims::IdentityClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
