//! PostgreSQL campaign store
//!
//! Periods are stored as eight flat timestamp columns and reassembled in
//! `CampaignRow`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use collabhub_common::{RepositoryError, Result};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CampaignStore, StoreCapabilities};
use crate::domain::cursor::CursorPosition;
use crate::domain::entities::{
    Application, Campaign, CampaignPeriods, CampaignStatus, Period,
};

/// Unique index created by the initial migration
pub const UNIQUE_APPLICATION_INDEX: &str = "campaign_applications_campaign_influencer_key";

const CAMPAIGN_COLUMNS: &str = "\
    id, brand_id, title, categories, banner_url, \
    apply_start, apply_end, selective_start, selective_end, \
    active_start, active_end, review_start, review_end, \
    social_platforms, apply_limit, description, budget, reward, \
    policy_and_condition, guide, content_required, location, status, created_at";

const APPLICATION_COLUMNS: &str = "id, campaign_id, influencer_id, status, proposal, created_at";

#[derive(Debug, sqlx::FromRow)]
struct CampaignRow {
    id: Uuid,
    brand_id: Uuid,
    title: String,
    categories: Vec<Uuid>,
    banner_url: String,
    apply_start: DateTime<Utc>,
    apply_end: DateTime<Utc>,
    selective_start: DateTime<Utc>,
    selective_end: DateTime<Utc>,
    active_start: DateTime<Utc>,
    active_end: DateTime<Utc>,
    review_start: DateTime<Utc>,
    review_end: DateTime<Utc>,
    social_platforms: Vec<String>,
    apply_limit: Option<i64>,
    description: String,
    budget: Decimal,
    reward: String,
    policy_and_condition: String,
    guide: String,
    content_required: String,
    location: String,
    status: CampaignStatus,
    created_at: DateTime<Utc>,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        Campaign {
            id: row.id,
            brand_id: row.brand_id,
            title: row.title,
            categories: row.categories,
            banner_url: row.banner_url,
            periods: CampaignPeriods {
                apply: Period::new(row.apply_start, row.apply_end),
                selective: Period::new(row.selective_start, row.selective_end),
                active: Period::new(row.active_start, row.active_end),
                review: Period::new(row.review_start, row.review_end),
            },
            social_platforms: row.social_platforms,
            apply_limit: row.apply_limit,
            description: row.description,
            budget: row.budget,
            reward: row.reward,
            policy_and_condition: row.policy_and_condition,
            guide: row.guide,
            content_required: row.content_required,
            location: row.location,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct PgCampaignStore {
    pool: PgPool,
    capabilities: StoreCapabilities,
}

impl PgCampaignStore {
    /// Create a store, inspecting the schema once for the unique
    /// application index.
    pub async fn connect(pool: PgPool) -> Result<Self> {
        let unique_application_index: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM pg_indexes
                WHERE tablename = 'campaign_applications' AND indexname = $1
            )
            "#,
        )
        .bind(UNIQUE_APPLICATION_INDEX)
        .fetch_one(&pool)
        .await?;

        Ok(Self::with_capabilities(
            pool,
            StoreCapabilities {
                unique_application_index,
            },
        ))
    }

    pub fn with_capabilities(pool: PgPool, capabilities: StoreCapabilities) -> Self {
        Self { pool, capabilities }
    }
}

#[async_trait]
impl CampaignStore for PgCampaignStore {
    fn capabilities(&self) -> StoreCapabilities {
        self.capabilities
    }

    async fn insert_campaign(&self, campaign: &Campaign) -> Result<()> {
        let p = &campaign.periods;
        sqlx::query(
            r#"
            INSERT INTO campaigns (
                id, brand_id, title, categories, banner_url,
                apply_start, apply_end, selective_start, selective_end,
                active_start, active_end, review_start, review_end,
                social_platforms, apply_limit, description, budget, reward,
                policy_and_condition, guide, content_required, location, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
            "#,
        )
        .bind(campaign.id)
        .bind(campaign.brand_id)
        .bind(&campaign.title)
        .bind(&campaign.categories)
        .bind(&campaign.banner_url)
        .bind(p.apply.start)
        .bind(p.apply.end)
        .bind(p.selective.start)
        .bind(p.selective.end)
        .bind(p.active.start)
        .bind(p.active.end)
        .bind(p.review.start)
        .bind(p.review.end)
        .bind(&campaign.social_platforms)
        .bind(campaign.apply_limit)
        .bind(&campaign.description)
        .bind(campaign.budget)
        .bind(&campaign.reward)
        .bind(&campaign.policy_and_condition)
        .bind(&campaign.guide)
        .bind(&campaign.content_required)
        .bind(&campaign.location)
        .bind(campaign.status)
        .bind(campaign.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_campaign(&self, id: Uuid) -> Result<Option<Campaign>> {
        let query = format!("SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1");
        let row = sqlx::query_as::<_, CampaignRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Campaign::from))
    }

    async fn list_by_brand(
        &self,
        brand_id: Uuid,
        status: Option<CampaignStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Campaign>> {
        let query = format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns \
             WHERE brand_id = $1 AND ($2::campaign_status IS NULL OR status = $2) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, CampaignRow>(&query)
            .bind(brand_id)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    async fn count_by_brand(&self, brand_id: Uuid, status: Option<CampaignStatus>) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM campaigns
            WHERE brand_id = $1 AND ($2::campaign_status IS NULL OR status = $2)
            "#,
        )
        .bind(brand_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn list_open_after(
        &self,
        after: Option<CursorPosition>,
        limit: i64,
    ) -> Result<Vec<Campaign>> {
        let rows = match after {
            Some(position) => {
                let query = format!(
                    "SELECT {CAMPAIGN_COLUMNS} FROM campaigns \
                     WHERE status = 'open' AND (created_at, id) < ($1, $2) \
                     ORDER BY created_at DESC, id DESC \
                     LIMIT $3"
                );
                sqlx::query_as::<_, CampaignRow>(&query)
                    .bind(position.created_at)
                    .bind(position.id)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {CAMPAIGN_COLUMNS} FROM campaigns \
                     WHERE status = 'open' \
                     ORDER BY created_at DESC, id DESC \
                     LIMIT $1"
                );
                sqlx::query_as::<_, CampaignRow>(&query)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    async fn find_application(
        &self,
        campaign_id: Uuid,
        influencer_id: Uuid,
    ) -> Result<Option<Application>> {
        let query = format!(
            "SELECT {APPLICATION_COLUMNS} FROM campaign_applications \
             WHERE campaign_id = $1 AND influencer_id = $2 \
             LIMIT 1"
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(campaign_id)
            .bind(influencer_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(application)
    }

    async fn insert_application(
        &self,
        application: &Application,
    ) -> std::result::Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO campaign_applications
                (id, campaign_id, influencer_id, status, proposal, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(application.id)
        .bind(application.campaign_id)
        .bind(application.influencer_id)
        .bind(application.status)
        .bind(&application.proposal)
        .bind(application.created_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from_insert)?;

        Ok(())
    }

    async fn count_applications(&self, campaign_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM campaign_applications WHERE campaign_id = $1")
                .bind(campaign_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn count_applications_for(&self, campaign_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>> {
        if campaign_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = sqlx::query_as(
            r#"
            SELECT campaign_id, COUNT(*)
            FROM campaign_applications
            WHERE campaign_id = ANY($1)
            GROUP BY campaign_id
            "#,
        )
        .bind(campaign_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
