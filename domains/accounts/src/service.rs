//! Identity resolution: external identity reference to user and role profile

use std::collections::HashSet;
use std::sync::Arc;

use collabhub_common::{Error, RepositoryError, Result};
use uuid::Uuid;

use crate::domain::entities::{
    Brand, BrandDetails, Influencer, InfluencerDetails, NewAccount, ResolvedUser, User,
    UserProfile, UserRole,
};
use crate::repository::AccountStore;

#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn AccountStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    /// Resolve the user registered for `external_ref` together with its profile.
    ///
    /// Returns `Ok(None)` for references that have not onboarded yet.
    pub async fn resolve_user_by_external_id(
        &self,
        external_ref: &str,
    ) -> Result<Option<ResolvedUser>> {
        let Some(user) = self.store.find_user_by_external_ref(external_ref).await? else {
            return Ok(None);
        };

        let profile = match user.role {
            UserRole::Brand => {
                let brand = self
                    .store
                    .find_brand_by_user(user.id)
                    .await?
                    .ok_or_else(|| missing_profile(&user))?;
                UserProfile::Brand(brand)
            }
            UserRole::Influencer => {
                let influencer = self
                    .store
                    .find_influencer_by_user(user.id)
                    .await?
                    .ok_or_else(|| missing_profile(&user))?;
                UserProfile::Influencer(influencer)
            }
            UserRole::Admin => UserProfile::Admin,
        };

        Ok(Some(ResolvedUser { user, profile }))
    }

    /// Onboard a brand: user and brand profile are written together
    pub async fn create_brand_profile(
        &self,
        account: NewAccount,
        details: BrandDetails,
    ) -> Result<ResolvedUser> {
        let user = new_user(&account, UserRole::Brand)?;
        let brand = Brand::new(user.id, details)?;
        self.ensure_categories_exist(&brand.categories).await?;

        self.store
            .create_user_with_brand(&user, &brand)
            .await
            .map_err(|e| already_registered(e, &user))?;

        tracing::info!(
            user_id = %user.id,
            brand_id = %brand.id,
            external_ref = %user.external_ref,
            "Brand onboarded"
        );

        Ok(ResolvedUser {
            user,
            profile: UserProfile::Brand(brand),
        })
    }

    /// Onboard an influencer: user and influencer profile are written together
    pub async fn create_influencer_profile(
        &self,
        account: NewAccount,
        details: InfluencerDetails,
    ) -> Result<ResolvedUser> {
        let user = new_user(&account, UserRole::Influencer)?;
        let influencer = Influencer::new(user.id, details)?;
        self.ensure_categories_exist(&influencer.categories).await?;

        self.store
            .create_user_with_influencer(&user, &influencer)
            .await
            .map_err(|e| already_registered(e, &user))?;

        tracing::info!(
            user_id = %user.id,
            influencer_id = %influencer.id,
            external_ref = %user.external_ref,
            "Influencer onboarded"
        );

        Ok(ResolvedUser {
            user,
            profile: UserProfile::Influencer(influencer),
        })
    }

    async fn ensure_categories_exist(&self, ids: &[Uuid]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let found: HashSet<Uuid> = self
            .store
            .find_categories(ids)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        match ids.iter().find(|id| !found.contains(id)) {
            Some(missing) => Err(Error::NotFound(format!("Category {} not found", missing))),
            None => Ok(()),
        }
    }
}

fn new_user(account: &NewAccount, role: UserRole) -> Result<User> {
    User::new(
        &account.external_ref,
        &account.email,
        &account.full_name,
        &account.phone,
        role,
    )
}

fn missing_profile(user: &User) -> Error {
    tracing::error!(user_id = %user.id, role = %user.role, "User has no role profile");
    Error::Internal(format!("User {} has no {} profile", user.id, user.role))
}

fn already_registered(err: RepositoryError, user: &User) -> Error {
    match err {
        RepositoryError::AlreadyExists => {
            tracing::warn!(external_ref = %user.external_ref, "Duplicate onboarding rejected");
            Error::Conflict(format!(
                "Identity {} is already registered",
                user.external_ref
            ))
        }
        other => other.into(),
    }
}
