//! Read side: brand listings, the general feed, single campaign lookup
//!
//! The general feed counts applications per page with one batched query over
//! the page's ids, while `get_campaign_by_id` counts globally for one
//! campaign. Both strategies are kept.

use std::sync::Arc;

use collabhub_common::PageQuery;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cursor::CursorPosition;
use crate::domain::entities::{Campaign, CampaignStatus, CampaignWithApplyCount};
use crate::domain::error::CampaignError;
use crate::repository::CampaignStore;

/// Default number of campaigns on a general feed page
const DEFAULT_FEED_LIMIT: i64 = 10;

/// Maximum number of campaigns on a general feed page
const MAX_FEED_LIMIT: i64 = 50;

/// Offset pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let total_pages = ((total + page_size - 1) / page_size).max(1);
        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedCampaigns {
    pub data: Vec<Campaign>,
    pub pagination: Pagination,
}

/// Ordering of the general feed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingAction {
    #[default]
    New,
    Trending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralListing {
    pub data: Vec<CampaignWithApplyCount>,
    pub cursor: Option<String>,
    pub is_done: bool,
}

#[derive(Clone)]
pub struct DiscoveryService {
    campaigns: Arc<dyn CampaignStore>,
}

impl DiscoveryService {
    pub fn new(campaigns: Arc<dyn CampaignStore>) -> Self {
        Self { campaigns }
    }

    /// Page through one brand's campaigns, newest first
    pub async fn list_campaigns_by_brand(
        &self,
        brand_id: Uuid,
        status: Option<CampaignStatus>,
        page: PageQuery,
    ) -> Result<PaginatedCampaigns, CampaignError> {
        let total = self.campaigns.count_by_brand(brand_id, status).await?;
        let data = self
            .campaigns
            .list_by_brand(brand_id, status, page.page_size(), page.offset())
            .await?;

        Ok(PaginatedCampaigns {
            data,
            pagination: Pagination::new(page.page(), page.page_size(), total),
        })
    }

    /// Walk open campaigns with an opaque cursor
    pub async fn list_campaigns_general(
        &self,
        action: ListingAction,
        cursor: Option<&str>,
        limit: Option<i64>,
    ) -> Result<GeneralListing, CampaignError> {
        let after = cursor.map(CursorPosition::decode).transpose()?;
        let limit = limit
            .unwrap_or(DEFAULT_FEED_LIMIT)
            .clamp(1, MAX_FEED_LIMIT);

        // One extra row tells whether anything lies past this page
        let mut page = self.campaigns.list_open_after(after, limit + 1).await?;
        let is_done = page.len() as i64 <= limit;
        page.truncate(limit as usize);

        let next_cursor = match page.last() {
            Some(last) => Some(CursorPosition::of(last).encode()),
            None => cursor.map(str::to_string),
        };

        let ids: Vec<Uuid> = page.iter().map(|c| c.id).collect();
        let counts = self.campaigns.count_applications_for(&ids).await?;

        let mut data: Vec<CampaignWithApplyCount> = page
            .into_iter()
            .map(|campaign| {
                let apply_count = counts.get(&campaign.id).copied().unwrap_or(0);
                CampaignWithApplyCount {
                    campaign,
                    apply_count,
                }
            })
            .collect();

        if action == ListingAction::Trending {
            data.sort_by(|a, b| b.apply_count.cmp(&a.apply_count));
        }

        Ok(GeneralListing {
            data,
            cursor: next_cursor,
            is_done,
        })
    }

    /// A campaign with its total application count, or `None`
    pub async fn get_campaign_by_id(
        &self,
        campaign_id: Uuid,
    ) -> Result<Option<CampaignWithApplyCount>, CampaignError> {
        let Some(campaign) = self.campaigns.find_campaign(campaign_id).await? else {
            return Ok(None);
        };

        let apply_count = self.campaigns.count_applications(campaign_id).await?;
        Ok(Some(CampaignWithApplyCount {
            campaign,
            apply_count,
        }))
    }
}
