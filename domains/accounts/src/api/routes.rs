//! Route definitions for Accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{account, categories};
use super::middleware::AccountsState;

/// Create account onboarding and lookup routes
fn account_routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/account", get(account::get_account))
        .route("/v1/account/brand", post(account::create_brand_account))
        .route(
            "/v1/account/influencer",
            post(account::create_influencer_account),
        )
        .route("/v1/users/{external_ref}", get(account::get_user))
}

/// Create category routes
fn category_routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/categories", get(categories::list_categories))
        .route(
            "/v1/categories/refresh",
            post(categories::refresh_categories),
        )
}

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .merge(account_routes())
        .merge(category_routes())
}
