//! Domain entities for the Accounts domain
//!
//! Users are keyed by the identity provider's external reference and own at
//! most one role profile (Brand or Influencer). Categories are seeded outside
//! this service and only read here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use collabhub_common::Result;

use crate::domain::validation::{
    normalize_optional, require_text, validate_email, validate_money_range,
};

/// Role a user holds on the marketplace, fixed at onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Brand,
    Influencer,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Brand => write!(f, "brand"),
            UserRole::Influencer => write!(f, "influencer"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub external_ref: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub phone: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a newly onboarded user. Onboarded users start active and verified.
    pub fn new(
        external_ref: &str,
        email: &str,
        full_name: &str,
        phone: &str,
        role: UserRole,
    ) -> Result<Self> {
        let external_ref = require_text("externalRef", external_ref)?;
        let email = validate_email(email)?;
        let full_name = require_text("fullName", full_name)?;
        let phone = require_text("phone", phone)?;

        Ok(User {
            id: Uuid::new_v4(),
            external_ref,
            email,
            full_name,
            role,
            phone,
            is_active: true,
            is_verified: true,
            created_at: Utc::now(),
        })
    }
}

/// Brand profile, owned 1:1 by a `brand` user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub user_id: Uuid,
    pub brand_name: String,
    pub industry: Option<String>,
    pub budget_min: Decimal,
    pub budget_max: Decimal,
    pub categories: Vec<Uuid>,
    pub description: Option<String>,
}

impl Brand {
    pub fn new(user_id: Uuid, details: BrandDetails) -> Result<Self> {
        let brand_name = require_text("brandName", &details.brand_name)?;
        validate_money_range("budget", details.budget_min, details.budget_max)?;

        Ok(Brand {
            id: Uuid::new_v4(),
            user_id,
            brand_name,
            industry: normalize_optional(details.industry),
            budget_min: details.budget_min,
            budget_max: details.budget_max,
            categories: dedupe(details.categories),
            description: normalize_optional(details.description),
        })
    }
}

/// Influencer profile, owned 1:1 by an `influencer` user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub categories: Vec<Uuid>,
    pub price_min: Decimal,
    pub price_max: Decimal,
}

impl Influencer {
    pub fn new(user_id: Uuid, details: InfluencerDetails) -> Result<Self> {
        validate_money_range("price", details.price_min, details.price_max)?;

        Ok(Influencer {
            id: Uuid::new_v4(),
            user_id,
            bio: normalize_optional(details.bio),
            categories: dedupe(details.categories),
            price_min: details.price_min,
            price_max: details.price_max,
        })
    }
}

/// Category node; `parent_id` forms an optional tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
}

impl Category {
    pub fn new(name: &str, description: Option<String>, parent_id: Option<Uuid>) -> Result<Self> {
        Ok(Category {
            id: Uuid::new_v4(),
            name: require_text("name", name)?,
            description: normalize_optional(description),
            parent_id,
        })
    }
}

/// Role-specific profile attached to a resolved user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", content = "profile", rename_all = "lowercase")]
pub enum UserProfile {
    Brand(Brand),
    Influencer(Influencer),
    Admin,
}

impl UserProfile {
    pub fn role(&self) -> UserRole {
        match self {
            UserProfile::Brand(_) => UserRole::Brand,
            UserProfile::Influencer(_) => UserRole::Influencer,
            UserProfile::Admin => UserRole::Admin,
        }
    }
}

/// A user together with its role profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedUser {
    pub user: User,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl ResolvedUser {
    pub fn brand(&self) -> Option<&Brand> {
        match &self.profile {
            UserProfile::Brand(brand) => Some(brand),
            _ => None,
        }
    }

    pub fn influencer(&self) -> Option<&Influencer> {
        match &self.profile {
            UserProfile::Influencer(influencer) => Some(influencer),
            _ => None,
        }
    }
}

/// Identity fields shared by every onboarding request
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub external_ref: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

/// Brand profile fields supplied at onboarding
#[derive(Debug, Clone)]
pub struct BrandDetails {
    pub brand_name: String,
    pub industry: Option<String>,
    pub budget_min: Decimal,
    pub budget_max: Decimal,
    pub categories: Vec<Uuid>,
    pub description: Option<String>,
}

/// Influencer profile fields supplied at onboarding
#[derive(Debug, Clone)]
pub struct InfluencerDetails {
    pub bio: Option<String>,
    pub categories: Vec<Uuid>,
    pub price_min: Decimal,
    pub price_max: Decimal,
}

/// Order-preserving de-duplication of category references
fn dedupe(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
