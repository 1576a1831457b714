//! POST /v1/campaigns/{id}/applications - Apply to a campaign as the caller
//!
//! The body is optional; without one the application carries no proposal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use collabhub_auth::AuthUser;
use collabhub_common::{Error, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::error::ApiResult;
use crate::api::middleware::CampaignsState;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ApplyRequest {
    #[validate(length(max = 5000))]
    pub proposal: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub application_id: Uuid,
}

pub async fn apply_to_campaign(
    AuthUser(ctx): AuthUser,
    State(state): State<CampaignsState>,
    Path(campaign_id): Path<Uuid>,
    body: Option<ValidatedJson<ApplyRequest>>,
) -> ApiResult<(StatusCode, Json<ApplyResponse>)> {
    let proposal = body.and_then(|ValidatedJson(req)| req.proposal);
    let caller = state.caller(&ctx).await?;
    let influencer_id = caller
        .influencer()
        .map(|i| i.id)
        .ok_or_else(|| Error::Authorization("Only influencers can apply".to_string()))?;

    let application_id = state
        .campaigns
        .apply_to_campaign(campaign_id, influencer_id, proposal)
        .await?;
    Ok((StatusCode::CREATED, Json(ApplyResponse { application_id })))
}
