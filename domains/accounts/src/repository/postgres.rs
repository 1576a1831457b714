//! PostgreSQL account store
//!
//! Uses runtime `sqlx::query_as` (not macros) so the crate builds without a
//! live database.

use async_trait::async_trait;
use collabhub_common::{RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

use super::transactions::{insert_brand_tx, insert_influencer_tx, insert_user_tx};
use super::AccountStore;
use crate::domain::entities::{Brand, Category, Influencer, User};

const USER_COLUMNS: &str = "\
    id, external_ref, email, full_name, role, phone, \
    is_active, is_verified, created_at";

const BRAND_COLUMNS: &str = "\
    id, user_id, brand_name, industry, budget_min, budget_max, \
    categories, description";

const INFLUENCER_COLUMNS: &str = "id, user_id, bio, categories, price_min, price_max";

const CATEGORY_COLUMNS: &str = "id, name, description, parent_id";

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_user_by_external_ref(&self, external_ref: &str) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE external_ref = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(external_ref)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_brand(&self, id: Uuid) -> Result<Option<Brand>> {
        let query = format!("SELECT {BRAND_COLUMNS} FROM brands WHERE id = $1");
        let brand = sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    async fn find_brand_by_user(&self, user_id: Uuid) -> Result<Option<Brand>> {
        let query = format!("SELECT {BRAND_COLUMNS} FROM brands WHERE user_id = $1");
        let brand = sqlx::query_as::<_, Brand>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    async fn find_influencer(&self, id: Uuid) -> Result<Option<Influencer>> {
        let query = format!("SELECT {INFLUENCER_COLUMNS} FROM influencers WHERE id = $1");
        let influencer = sqlx::query_as::<_, Influencer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(influencer)
    }

    async fn find_influencer_by_user(&self, user_id: Uuid) -> Result<Option<Influencer>> {
        let query = format!("SELECT {INFLUENCER_COLUMNS} FROM influencers WHERE user_id = $1");
        let influencer = sqlx::query_as::<_, Influencer>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(influencer)
    }

    async fn find_categories(&self, ids: &[Uuid]) -> Result<Vec<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ANY($1)");
        let categories = sqlx::query_as::<_, Category>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name ASC");
        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn create_user_with_brand(
        &self,
        user: &User,
        brand: &Brand,
    ) -> std::result::Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        insert_user_tx(&mut tx, user)
            .await
            .map_err(RepositoryError::from_insert)?;
        insert_brand_tx(&mut tx, brand)
            .await
            .map_err(RepositoryError::from_insert)?;
        tx.commit().await?;
        Ok(())
    }

    async fn create_user_with_influencer(
        &self,
        user: &User,
        influencer: &Influencer,
    ) -> std::result::Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        insert_user_tx(&mut tx, user)
            .await
            .map_err(RepositoryError::from_insert)?;
        insert_influencer_tx(&mut tx, influencer)
            .await
            .map_err(RepositoryError::from_insert)?;
        tx.commit().await?;
        Ok(())
    }
}
