//! Domain entities for the Campaigns domain
//!
//! A campaign runs through four consecutive stages (apply, selective, active,
//! review). Influencers apply while the campaign is `open`; each influencer
//! applies at most once per campaign.

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::CampaignError;
use crate::domain::validation::{validate_campaign_fields, validate_campaign_periods};

/// Platform tags the marketplace knows about. Other tags are stored verbatim.
pub const KNOWN_SOCIAL_PLATFORMS: [&str; 4] = ["facebook", "instagram", "tiktok", "youtube"];

/// Campaign status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "campaign_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Open,
    InProgress,
    Completed,
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::Open => write!(f, "open"),
            CampaignStatus::InProgress => write!(f, "inprogress"),
            CampaignStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Invited,
    Accepted,
    Rejected,
}

/// Campaign stage, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Apply,
    Selective,
    Active,
    Review,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Apply, Stage::Selective, Stage::Active, Stage::Review];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Apply => write!(f, "apply"),
            Stage::Selective => write!(f, "selective"),
            Stage::Active => write!(f, "active"),
            Stage::Review => write!(f, "review"),
        }
    }
}

/// Half-open time window of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPeriods {
    pub apply: Period,
    pub selective: Period,
    pub active: Period,
    pub review: Period,
}

impl CampaignPeriods {
    pub fn get(&self, stage: Stage) -> &Period {
        match stage {
            Stage::Apply => &self.apply,
            Stage::Selective => &self.selective,
            Stage::Active => &self.active,
            Stage::Review => &self.review,
        }
    }

    /// Stages with their periods, in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &Period)> + '_ {
        Stage::ALL.into_iter().map(move |stage| (stage, self.get(stage)))
    }
}

/// Campaign entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub title: String,
    pub categories: Vec<Uuid>,
    pub banner_url: String,
    pub periods: CampaignPeriods,
    pub social_platforms: Vec<String>,
    pub apply_limit: Option<i64>,
    pub description: String,
    pub budget: Decimal,
    pub reward: String,
    pub policy_and_condition: String,
    pub guide: String,
    pub content_required: String,
    pub location: String,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied campaign payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub title: String,
    pub categories: Vec<Uuid>,
    pub banner_url: String,
    pub periods: CampaignPeriods,
    #[serde(default)]
    pub social_platforms: Vec<String>,
    pub apply_limit: Option<i64>,
    pub description: String,
    pub budget: Decimal,
    pub reward: String,
    pub policy_and_condition: String,
    pub guide: String,
    pub content_required: String,
    pub location: String,
}

impl Campaign {
    /// Validate a payload and build an `open` campaign with trimmed text fields.
    ///
    /// `created_at` is truncated to microseconds so keyset cursors compare
    /// identically against every store.
    pub fn new(brand_id: Uuid, payload: NewCampaign) -> Result<Self, CampaignError> {
        validate_campaign_periods(&payload.periods)?;
        validate_campaign_fields(&payload)?;

        Ok(Campaign {
            id: Uuid::new_v4(),
            brand_id,
            title: payload.title.trim().to_string(),
            categories: dedupe(payload.categories),
            banner_url: payload.banner_url,
            periods: payload.periods,
            social_platforms: payload.social_platforms,
            apply_limit: payload.apply_limit,
            description: payload.description.trim().to_string(),
            budget: payload.budget,
            reward: payload.reward.trim().to_string(),
            policy_and_condition: payload.policy_and_condition.trim().to_string(),
            guide: payload.guide.trim().to_string(),
            content_required: payload.content_required.trim().to_string(),
            location: payload.location.trim().to_string(),
            status: CampaignStatus::Open,
            created_at: Utc::now().trunc_subsecs(6),
        })
    }

    pub fn is_open(&self) -> bool {
        self.status == CampaignStatus::Open
    }
}

/// Influencer application to a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub influencer_id: Uuid,
    pub status: ApplicationStatus,
    pub proposal: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Application {
    pub fn new(campaign_id: Uuid, influencer_id: Uuid, proposal: Option<String>) -> Self {
        Application {
            id: Uuid::new_v4(),
            campaign_id,
            influencer_id,
            status: ApplicationStatus::Applied,
            proposal: proposal
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Campaign together with a number of applications
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignWithApplyCount {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub apply_count: i64,
}

/// Order-preserving de-duplication of category references
pub(crate) fn dedupe(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
