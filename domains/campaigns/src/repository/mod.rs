//! Repository implementations for the Campaigns domain

pub mod memory;
pub mod postgres;

use std::collections::HashMap;

use async_trait::async_trait;
use collabhub_common::{RepositoryError, Result};
use uuid::Uuid;

use crate::domain::cursor::CursorPosition;
use crate::domain::entities::{Application, Campaign, CampaignStatus};

pub use memory::InMemoryCampaignStore;
pub use postgres::PgCampaignStore;

/// Guarantees a store provides beyond plain reads and inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCapabilities {
    /// Inserts of a second application for the same (campaign, influencer)
    /// pair are rejected by the store itself
    pub unique_application_index: bool,
}

#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Capabilities fixed when the store was constructed
    fn capabilities(&self) -> StoreCapabilities;

    async fn insert_campaign(&self, campaign: &Campaign) -> Result<()>;

    async fn find_campaign(&self, id: Uuid) -> Result<Option<Campaign>>;

    /// One page of a brand's campaigns, newest first
    async fn list_by_brand(
        &self,
        brand_id: Uuid,
        status: Option<CampaignStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Campaign>>;

    async fn count_by_brand(&self, brand_id: Uuid, status: Option<CampaignStatus>) -> Result<i64>;

    /// Open campaigns strictly after `after`, newest first
    async fn list_open_after(
        &self,
        after: Option<CursorPosition>,
        limit: i64,
    ) -> Result<Vec<Campaign>>;

    async fn find_application(
        &self,
        campaign_id: Uuid,
        influencer_id: Uuid,
    ) -> Result<Option<Application>>;

    /// Returns `RepositoryError::AlreadyExists` only when the store has the
    /// unique application capability and the pair is taken.
    async fn insert_application(
        &self,
        application: &Application,
    ) -> std::result::Result<(), RepositoryError>;

    /// Applications referencing one campaign
    async fn count_applications(&self, campaign_id: Uuid) -> Result<i64>;

    /// Application counts for a set of campaigns in one pass. Campaigns
    /// without applications are absent from the map.
    async fn count_applications_for(&self, campaign_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>>;
}
