//! Campaigns domain state and auth backend integration

use axum::extract::FromRef;
use collabhub_accounts::{IdentityResolver, ResolvedUser};
use collabhub_auth::{AuthBackend, AuthContext};
use collabhub_common::{Error, Result};

use crate::service::{CampaignService, DiscoveryService};

/// Application state for the Campaigns domain
#[derive(Clone)]
pub struct CampaignsState {
    pub campaigns: CampaignService,
    pub discovery: DiscoveryService,
    pub identity: IdentityResolver,
    pub auth: AuthBackend,
}

impl CampaignsState {
    /// Resolve the authenticated caller; callers must have onboarded
    pub async fn caller(&self, ctx: &AuthContext) -> Result<ResolvedUser> {
        self.identity
            .resolve_user_by_external_id(&ctx.external_ref)
            .await?
            .ok_or_else(|| Error::Authorization("Account onboarding required".to_string()))
    }
}

impl FromRef<CampaignsState> for AuthBackend {
    fn from_ref(state: &CampaignsState) -> Self {
        state.auth.clone()
    }
}
