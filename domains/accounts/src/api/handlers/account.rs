//! Account onboarding and identity resolution handlers
//!
//! - GET /v1/account - Resolve the caller (`null` before onboarding)
//! - POST /v1/account/brand - Onboard the caller as a brand
//! - POST /v1/account/influencer - Onboard the caller as an influencer
//! - GET /v1/users/{externalRef} - Resolve any user by external reference

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use collabhub_auth::{AuthContext, AuthUser};
use collabhub_common::{Error, Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::{BrandDetails, InfluencerDetails, NewAccount, ResolvedUser};

/// Request for onboarding a brand
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    /// Falls back to the token's email claim when omitted
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    #[validate(length(min = 1, max = 255))]
    pub brand_name: String,

    pub industry: Option<String>,
    pub budget_min: Decimal,
    pub budget_max: Decimal,

    #[serde(default)]
    pub categories: Vec<Uuid>,

    pub description: Option<String>,
}

/// Request for onboarding an influencer
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInfluencerRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    pub bio: Option<String>,

    #[serde(default)]
    pub categories: Vec<Uuid>,

    pub price_min: Decimal,
    pub price_max: Decimal,
}

fn new_account(
    ctx: AuthContext,
    email: Option<String>,
    full_name: String,
    phone: String,
) -> Result<NewAccount> {
    let email = email
        .or(ctx.email)
        .ok_or_else(|| Error::Validation("email is required".to_string()))?;

    Ok(NewAccount {
        external_ref: ctx.external_ref,
        email,
        full_name,
        phone,
    })
}

/// GET /v1/account
pub async fn get_account(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<Option<ResolvedUser>>> {
    let resolved = state
        .identity
        .resolve_user_by_external_id(&ctx.external_ref)
        .await?;
    Ok(Json(resolved))
}

/// POST /v1/account/brand
pub async fn create_brand_account(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<CreateBrandRequest>,
) -> Result<(StatusCode, Json<ResolvedUser>)> {
    let account = new_account(ctx, req.email, req.full_name, req.phone)?;
    let details = BrandDetails {
        brand_name: req.brand_name,
        industry: req.industry,
        budget_min: req.budget_min,
        budget_max: req.budget_max,
        categories: req.categories,
        description: req.description,
    };

    let resolved = state.identity.create_brand_profile(account, details).await?;
    Ok((StatusCode::CREATED, Json(resolved)))
}

/// POST /v1/account/influencer
pub async fn create_influencer_account(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<CreateInfluencerRequest>,
) -> Result<(StatusCode, Json<ResolvedUser>)> {
    let account = new_account(ctx, req.email, req.full_name, req.phone)?;
    let details = InfluencerDetails {
        bio: req.bio,
        categories: req.categories,
        price_min: req.price_min,
        price_max: req.price_max,
    };

    let resolved = state
        .identity
        .create_influencer_profile(account, details)
        .await?;
    Ok((StatusCode::CREATED, Json(resolved)))
}

/// GET /v1/users/{externalRef}
pub async fn get_user(
    AuthUser(_ctx): AuthUser,
    State(state): State<AccountsState>,
    Path(external_ref): Path<String>,
) -> Result<Json<Option<ResolvedUser>>> {
    let resolved = state
        .identity
        .resolve_user_by_external_id(&external_ref)
        .await?;
    Ok(Json(resolved))
}
