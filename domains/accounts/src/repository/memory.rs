//! In-memory account store
//!
//! Backs the `memory` store backend and the test suites. Every write takes
//! the single lock so a user and its profile become visible together.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use collabhub_common::{RepositoryError, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::AccountStore;
use crate::domain::entities::{Brand, Category, Influencer, User};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    brands: HashMap<Uuid, Brand>,
    influencers: HashMap<Uuid, Influencer>,
    categories: HashMap<Uuid, Category>,
}

impl Tables {
    fn external_ref_taken(&self, external_ref: &str) -> bool {
        self.users.values().any(|u| u.external_ref == external_ref)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category directly; categories are seeded, not created via the API
    pub async fn seed_category(&self, category: Category) {
        self.tables
            .write()
            .await
            .categories
            .insert(category.id, category);
    }

    /// Insert a user without a role profile (admin accounts, broken-data tests)
    pub async fn seed_user(&self, user: User) {
        self.tables.write().await.users.insert(user.id, user);
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_user_by_external_ref(&self, external_ref: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.external_ref == external_ref)
            .cloned())
    }

    async fn find_brand(&self, id: Uuid) -> Result<Option<Brand>> {
        Ok(self.tables.read().await.brands.get(&id).cloned())
    }

    async fn find_brand_by_user(&self, user_id: Uuid) -> Result<Option<Brand>> {
        let tables = self.tables.read().await;
        Ok(tables
            .brands
            .values()
            .find(|b| b.user_id == user_id)
            .cloned())
    }

    async fn find_influencer(&self, id: Uuid) -> Result<Option<Influencer>> {
        Ok(self.tables.read().await.influencers.get(&id).cloned())
    }

    async fn find_influencer_by_user(&self, user_id: Uuid) -> Result<Option<Influencer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .influencers
            .values()
            .find(|i| i.user_id == user_id)
            .cloned())
    }

    async fn find_categories(&self, ids: &[Uuid]) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.categories.get(id).cloned())
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create_user_with_brand(
        &self,
        user: &User,
        brand: &Brand,
    ) -> std::result::Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.external_ref_taken(&user.external_ref) {
            return Err(RepositoryError::AlreadyExists);
        }
        tables.users.insert(user.id, user.clone());
        tables.brands.insert(brand.id, brand.clone());
        Ok(())
    }

    async fn create_user_with_influencer(
        &self,
        user: &User,
        influencer: &Influencer,
    ) -> std::result::Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.external_ref_taken(&user.external_ref) {
            return Err(RepositoryError::AlreadyExists);
        }
        tables.users.insert(user.id, user.clone());
        tables.influencers.insert(influencer.id, influencer.clone());
        Ok(())
    }
}
