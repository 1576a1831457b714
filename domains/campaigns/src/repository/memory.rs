//! In-memory campaign store
//!
//! Without the unique application capability this store mirrors a database
//! lacking the (campaign, influencer) index: concurrent duplicate inserts
//! both land.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use collabhub_common::{RepositoryError, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CampaignStore, StoreCapabilities};
use crate::domain::cursor::CursorPosition;
use crate::domain::entities::{Application, Campaign, CampaignStatus};

#[derive(Debug, Default)]
struct Tables {
    campaigns: HashMap<Uuid, Campaign>,
    applications: Vec<Application>,
}

impl Tables {
    /// Campaigns matching `filter`, ordered created_at DESC, id DESC
    fn newest_first(&self, filter: impl Fn(&Campaign) -> bool) -> Vec<&Campaign> {
        let mut campaigns: Vec<&Campaign> =
            self.campaigns.values().filter(|c| filter(c)).collect();
        campaigns.sort_by_key(|c| Reverse((c.created_at, c.id)));
        campaigns
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCampaignStore {
    tables: Arc<RwLock<Tables>>,
    capabilities: StoreCapabilities,
}

impl InMemoryCampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capabilities(capabilities: StoreCapabilities) -> Self {
        Self {
            tables: Arc::default(),
            capabilities,
        }
    }

    /// All stored applications, in insertion order
    pub async fn applications(&self) -> Vec<Application> {
        self.tables.read().await.applications.clone()
    }

    /// Overwrite a campaign's status; lifecycle transitions are not exposed
    /// by the service, so tests move campaigns through states with this.
    pub async fn set_status(&self, campaign_id: Uuid, status: CampaignStatus) -> bool {
        match self.tables.write().await.campaigns.get_mut(&campaign_id) {
            Some(campaign) => {
                campaign.status = status;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl CampaignStore for InMemoryCampaignStore {
    fn capabilities(&self) -> StoreCapabilities {
        self.capabilities
    }

    async fn insert_campaign(&self, campaign: &Campaign) -> Result<()> {
        self.tables
            .write()
            .await
            .campaigns
            .insert(campaign.id, campaign.clone());
        Ok(())
    }

    async fn find_campaign(&self, id: Uuid) -> Result<Option<Campaign>> {
        Ok(self.tables.read().await.campaigns.get(&id).cloned())
    }

    async fn list_by_brand(
        &self,
        brand_id: Uuid,
        status: Option<CampaignStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Campaign>> {
        let tables = self.tables.read().await;
        Ok(tables
            .newest_first(|c| c.brand_id == brand_id && status.is_none_or(|s| c.status == s))
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn count_by_brand(&self, brand_id: Uuid, status: Option<CampaignStatus>) -> Result<i64> {
        let tables = self.tables.read().await;
        let count = tables
            .campaigns
            .values()
            .filter(|c| c.brand_id == brand_id && status.is_none_or(|s| c.status == s))
            .count();
        Ok(count as i64)
    }

    async fn list_open_after(
        &self,
        after: Option<CursorPosition>,
        limit: i64,
    ) -> Result<Vec<Campaign>> {
        let tables = self.tables.read().await;
        Ok(tables
            .newest_first(|c| c.is_open() && after.is_none_or(|pos| pos.precedes(c)))
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn find_application(
        &self,
        campaign_id: Uuid,
        influencer_id: Uuid,
    ) -> Result<Option<Application>> {
        let tables = self.tables.read().await;
        Ok(tables
            .applications
            .iter()
            .find(|a| a.campaign_id == campaign_id && a.influencer_id == influencer_id)
            .cloned())
    }

    async fn insert_application(
        &self,
        application: &Application,
    ) -> std::result::Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        if self.capabilities.unique_application_index
            && tables.applications.iter().any(|a| {
                a.campaign_id == application.campaign_id
                    && a.influencer_id == application.influencer_id
            })
        {
            return Err(RepositoryError::AlreadyExists);
        }
        tables.applications.push(application.clone());
        Ok(())
    }

    async fn count_applications(&self, campaign_id: Uuid) -> Result<i64> {
        let tables = self.tables.read().await;
        let count = tables
            .applications
            .iter()
            .filter(|a| a.campaign_id == campaign_id)
            .count();
        Ok(count as i64)
    }

    async fn count_applications_for(&self, campaign_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>> {
        let tables = self.tables.read().await;
        let mut counts = HashMap::new();
        for application in &tables.applications {
            if campaign_ids.contains(&application.campaign_id) {
                *counts.entry(application.campaign_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}
