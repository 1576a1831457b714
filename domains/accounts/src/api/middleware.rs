//! Accounts domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use collabhub_auth::AuthBackend;

use crate::domain::category_cache::CategoryCache;
use crate::service::IdentityResolver;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub identity: IdentityResolver,
    pub categories: Arc<CategoryCache>,
    pub auth: AuthBackend,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
