//! Caller context for authenticated requests

/// Represents an authenticated caller as seen by the identity provider.
///
/// Only the external reference is trusted; mapping it to an internal user
/// and role profile is the accounts domain's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub external_ref: String,
    pub email: Option<String>,
}

impl AuthContext {
    pub fn new(external_ref: String, email: Option<String>) -> Self {
        Self {
            external_ref,
            email,
        }
    }
}
