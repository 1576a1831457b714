//! Repository implementations for the Accounts domain
//!
//! `AccountStore` is the seam between the domain and the entity store.
//! `PgAccountStore` backs production; `InMemoryAccountStore` backs tests and
//! the `memory` store backend.

pub mod memory;
pub mod postgres;
pub mod transactions;

use async_trait::async_trait;
use collabhub_common::{RepositoryError, Result};
use uuid::Uuid;

use crate::domain::entities::{Brand, Category, Influencer, User};

pub use memory::InMemoryAccountStore;
pub use postgres::PgAccountStore;

/// Read and write access to users, role profiles and categories
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find the user registered for an identity provider reference
    async fn find_user_by_external_ref(&self, external_ref: &str) -> Result<Option<User>>;

    async fn find_brand(&self, id: Uuid) -> Result<Option<Brand>>;

    async fn find_brand_by_user(&self, user_id: Uuid) -> Result<Option<Brand>>;

    async fn find_influencer(&self, id: Uuid) -> Result<Option<Influencer>>;

    async fn find_influencer_by_user(&self, user_id: Uuid) -> Result<Option<Influencer>>;

    /// Fetch the categories among `ids` that exist; missing ids are simply absent
    async fn find_categories(&self, ids: &[Uuid]) -> Result<Vec<Category>>;

    /// All categories, ordered by name
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Persist a brand user and its profile atomically.
    ///
    /// Returns `RepositoryError::AlreadyExists` when the external reference
    /// is already registered.
    async fn create_user_with_brand(
        &self,
        user: &User,
        brand: &Brand,
    ) -> std::result::Result<(), RepositoryError>;

    /// Persist an influencer user and its profile atomically.
    ///
    /// Returns `RepositoryError::AlreadyExists` when the external reference
    /// is already registered.
    async fn create_user_with_influencer(
        &self,
        user: &User,
        influencer: &Influencer,
    ) -> std::result::Result<(), RepositoryError>;
}
