//! Concrete authentication backend
//!
//! Holds the identity provider verification settings. Domain states expose
//! this via `FromRef`:
//! ```ignore
//! impl FromRef<MyDomainState> for AuthBackend {
//!     fn from_ref(state: &MyDomainState) -> Self {
//!         state.auth.clone()
//!     }
//! }
//! ```

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;

#[derive(Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Verify a bearer token and build the caller context from its claims.
    pub(crate) fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        let external_ref = claims.sub.trim();
        if external_ref.is_empty() {
            return Err(AuthError::InvalidSubject);
        }

        Ok(AuthContext::new(external_ref.to_string(), claims.email))
    }
}
