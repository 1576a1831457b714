//! Route definitions for Campaigns domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{applications, campaigns};
use super::middleware::CampaignsState;

/// Create campaign routes
fn campaign_routes() -> Router<CampaignsState> {
    Router::new()
        .route(
            "/v1/campaigns",
            get(campaigns::list_campaigns).post(campaigns::create_campaign),
        )
        .route("/v1/campaigns/{id}", get(campaigns::get_campaign))
        .route(
            "/v1/campaigns/{id}/applications",
            post(applications::apply_to_campaign),
        )
        .route(
            "/v1/brands/{brand_id}/campaigns",
            get(campaigns::list_brand_campaigns),
        )
}

/// Create all Campaigns domain API routes
pub fn routes() -> Router<CampaignsState> {
    Router::new().merge(campaign_routes())
}
