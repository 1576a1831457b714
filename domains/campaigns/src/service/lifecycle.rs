//! Campaign creation and application intake
//!
//! Every precondition is read and checked before the single insert an
//! operation performs.

use std::collections::HashSet;
use std::sync::Arc;

use collabhub_accounts::AccountStore;
use collabhub_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::{dedupe, Application, Campaign, CampaignStatus, NewCampaign};
use crate::domain::error::CampaignError;
use crate::domain::state::CampaignStateMachine;
use crate::repository::CampaignStore;

#[derive(Clone)]
pub struct CampaignService {
    accounts: Arc<dyn AccountStore>,
    campaigns: Arc<dyn CampaignStore>,
}

impl CampaignService {
    pub fn new(accounts: Arc<dyn AccountStore>, campaigns: Arc<dyn CampaignStore>) -> Self {
        let capabilities = campaigns.capabilities();
        tracing::info!(
            unique_application_index = capabilities.unique_application_index,
            "Campaign store capabilities"
        );
        if !capabilities.unique_application_index {
            tracing::warn!(
                "Campaign store has no unique application index; concurrent duplicate applications are possible"
            );
        }

        Self {
            accounts,
            campaigns,
        }
    }

    /// Create an `open` campaign owned by `brand_id`. Not idempotent.
    pub async fn create_campaign(
        &self,
        brand_id: Uuid,
        payload: NewCampaign,
    ) -> Result<Uuid, CampaignError> {
        if self.accounts.find_brand(brand_id).await?.is_none() {
            return Err(CampaignError::BrandNotFound(brand_id));
        }

        if payload.categories.is_empty() {
            return Err(CampaignError::EmptyCategorySet);
        }
        let wanted = dedupe(payload.categories.clone());
        let found: HashSet<Uuid> = self
            .accounts
            .find_categories(&wanted)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        if let Some(missing) = wanted.iter().find(|id| !found.contains(id)) {
            return Err(CampaignError::CategoryNotFound(*missing));
        }

        let campaign = Campaign::new(brand_id, payload)?;
        self.campaigns.insert_campaign(&campaign).await?;

        tracing::info!(
            campaign_id = %campaign.id,
            brand_id = %brand_id,
            "Campaign created"
        );
        Ok(campaign.id)
    }

    /// Record an influencer's application to an open campaign
    pub async fn apply_to_campaign(
        &self,
        campaign_id: Uuid,
        influencer_id: Uuid,
        proposal: Option<String>,
    ) -> Result<Uuid, CampaignError> {
        let campaign = self
            .campaigns
            .find_campaign(campaign_id)
            .await?
            .ok_or(CampaignError::CampaignNotFound(campaign_id))?;

        if !campaign.is_open() {
            tracing::warn!(
                campaign_id = %campaign_id,
                status = %campaign.status,
                "Application to a campaign that is not open"
            );
            return Err(CampaignError::CampaignNotOpen {
                status: campaign.status,
            });
        }

        if self.accounts.find_influencer(influencer_id).await?.is_none() {
            return Err(CampaignError::InfluencerNotFound(influencer_id));
        }

        if self
            .campaigns
            .find_application(campaign_id, influencer_id)
            .await?
            .is_some()
        {
            tracing::warn!(
                campaign_id = %campaign_id,
                influencer_id = %influencer_id,
                "Duplicate application rejected"
            );
            return Err(CampaignError::DuplicateApplication);
        }

        let application = Application::new(campaign_id, influencer_id, proposal);
        self.campaigns
            .insert_application(&application)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists => {
                    tracing::warn!(
                        campaign_id = %campaign_id,
                        influencer_id = %influencer_id,
                        "Duplicate application rejected by store"
                    );
                    CampaignError::DuplicateApplication
                }
                other => CampaignError::Infrastructure(other.into()),
            })?;

        tracing::info!(
            application_id = %application.id,
            campaign_id = %campaign_id,
            influencer_id = %influencer_id,
            "Application submitted"
        );
        Ok(application.id)
    }

    /// Validate a status move. No transition is persisted yet, so a valid
    /// move still ends in `TransitionUnavailable`.
    pub async fn transition_status(
        &self,
        campaign_id: Uuid,
        new_status: CampaignStatus,
    ) -> Result<(), CampaignError> {
        let campaign = self
            .campaigns
            .find_campaign(campaign_id)
            .await?
            .ok_or(CampaignError::CampaignNotFound(campaign_id))?;

        CampaignStateMachine::transition_to(campaign.status, new_status)?;

        tracing::warn!(
            campaign_id = %campaign_id,
            from = %campaign.status,
            to = %new_status,
            "Campaign status transition requested but not available"
        );
        Err(CampaignError::TransitionUnavailable)
    }
}
