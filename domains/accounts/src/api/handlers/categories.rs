//! Category listing handlers, served from the read-through cache

use axum::{extract::State, Json};
use collabhub_auth::AuthUser;
use collabhub_common::Result;

use crate::api::middleware::AccountsState;
use crate::domain::entities::Category;

/// GET /v1/categories
pub async fn list_categories(State(state): State<AccountsState>) -> Result<Json<Vec<Category>>> {
    let categories = state.categories.get().await?;
    Ok(Json(categories.as_ref().clone()))
}

/// POST /v1/categories/refresh
pub async fn refresh_categories(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<Vec<Category>>> {
    let categories = state.categories.refresh().await?;
    tracing::info!(
        external_ref = %ctx.external_ref,
        count = categories.len(),
        "Category cache refreshed on request"
    );
    Ok(Json(categories.as_ref().clone()))
}
