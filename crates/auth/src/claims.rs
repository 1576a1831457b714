//! JWT claims types

use serde::{Deserialize, Serialize};

/// JWT claims issued by the identity provider
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject (stable external user reference)
    pub sub: String,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}
