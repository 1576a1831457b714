//! Campaign handlers
//!
//! - POST /v1/campaigns - Create a campaign for the caller's brand
//! - GET /v1/campaigns - General feed of open campaigns
//! - GET /v1/campaigns/{id} - One campaign with its application count
//! - GET /v1/brands/{brand_id}/campaigns - A brand's campaigns, paged

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use collabhub_accounts::AccountStore;
use collabhub_auth::AuthUser;
use collabhub_common::{Error, PageQuery, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::error::ApiResult;
use crate::domain::error::CampaignError;
use crate::api::middleware::CampaignsState;
use crate::domain::entities::{CampaignStatus, CampaignWithApplyCount, NewCampaign};
use crate::service::{GeneralListing, ListingAction, PaginatedCampaigns};

/// Request for creating a campaign
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub brand_id: Uuid,

    #[serde(flatten)]
    pub campaign: NewCampaign,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignResponse {
    pub campaign_id: Uuid,
}

/// Query params for the general feed
#[derive(Debug, Default, Deserialize)]
pub struct GeneralListingQuery {
    #[serde(default)]
    pub action: ListingAction,
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

/// Query params for a brand's campaign listing
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandCampaignsQuery {
    pub status: Option<CampaignStatus>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// POST /v1/campaigns
pub async fn create_campaign(
    AuthUser(ctx): AuthUser,
    State(state): State<CampaignsState>,
    ValidatedJson(req): ValidatedJson<CreateCampaignRequest>,
) -> ApiResult<(StatusCode, Json<CreateCampaignResponse>)> {
    let caller = state.caller(&ctx).await?;
    // Unknown brands are reported as such before ownership is judged
    if state.identity.store().find_brand(req.brand_id).await?.is_none() {
        return Err(CampaignError::BrandNotFound(req.brand_id).into());
    }

    let owns_brand = caller.brand().is_some_and(|b| b.id == req.brand_id);
    if !owns_brand {
        return Err(Error::Authorization(
            "Only the brand's owner can create its campaigns".to_string(),
        )
        .into());
    }

    let campaign_id = state
        .campaigns
        .create_campaign(req.brand_id, req.campaign)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateCampaignResponse { campaign_id }),
    ))
}

/// GET /v1/campaigns
pub async fn list_campaigns(
    State(state): State<CampaignsState>,
    Query(query): Query<GeneralListingQuery>,
) -> ApiResult<Json<GeneralListing>> {
    let listing = state
        .discovery
        .list_campaigns_general(query.action, query.cursor.as_deref(), query.limit)
        .await?;
    Ok(Json(listing))
}

/// GET /v1/campaigns/{id}
pub async fn get_campaign(
    State(state): State<CampaignsState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Option<CampaignWithApplyCount>>> {
    let campaign = state.discovery.get_campaign_by_id(id).await?;
    Ok(Json(campaign))
}

/// GET /v1/brands/{brand_id}/campaigns
pub async fn list_brand_campaigns(
    State(state): State<CampaignsState>,
    Path(brand_id): Path<Uuid>,
    Query(query): Query<BrandCampaignsQuery>,
) -> ApiResult<Json<PaginatedCampaigns>> {
    let page = PageQuery {
        page: query.page,
        page_size: query.page_size,
    };
    let listing = state
        .discovery
        .list_campaigns_by_brand(brand_id, query.status, page)
        .await?;
    Ok(Json(listing))
}
