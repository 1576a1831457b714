//! Common test utilities and fixtures for integration tests
//!
//! - In-memory application setup
//! - Token minting for the identity provider
//! - Request builders and response parsing
//! - Onboarding and campaign payload fixtures

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use collabhub_accounts::{Category, InMemoryAccountStore};
use collabhub_app::{create_app, Stores};
use collabhub_campaigns::{InMemoryCampaignStore, StoreCapabilities};
use collabhub_common::Config;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test_secret_key_for_testing_only"; // pragma: allowlist secret

/// Application wired to in-memory stores the test keeps handles to
pub struct TestApp {
    pub router: Router,
    pub accounts: InMemoryAccountStore,
    pub campaigns: InMemoryCampaignStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_capabilities(StoreCapabilities::default())
    }

    pub fn with_capabilities(capabilities: StoreCapabilities) -> Self {
        let config = Config::from_lookup(|key| match key {
            "STORE_BACKEND" => Some("memory".to_string()),
            "JWT_SECRET" => Some(JWT_SECRET.to_string()),
            "CATEGORY_CACHE_TTL_SECS" => Some("600".to_string()),
            _ => None,
        })
        .unwrap();

        let accounts = InMemoryAccountStore::new();
        let campaigns = InMemoryCampaignStore::with_capabilities(capabilities);
        let stores = Stores {
            accounts: Arc::new(accounts.clone()),
            campaigns: Arc::new(campaigns.clone()),
        };

        Self {
            router: create_app(&config, stores),
            accounts,
            campaigns,
        }
    }

    pub async fn seed_category(&self, name: &str) -> Uuid {
        let category = Category::new(name, None, None).unwrap();
        let id = category.id;
        self.accounts.seed_category(category).await;
        id
    }

    /// Send a request and return status plus parsed JSON body (`Null` when empty)
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    /// Onboard `sub` as a brand; returns the brand profile id
    pub async fn onboard_brand(&self, sub: &str) -> Uuid {
        let (status, body) = self
            .send(authed_request(
                Method::POST,
                "/v1/account/brand",
                &create_test_jwt(sub),
                Some(brand_body(vec![])),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        profile_id(&body)
    }

    /// Onboard `sub` as an influencer; returns the influencer profile id
    pub async fn onboard_influencer(&self, sub: &str) -> Uuid {
        let (status, body) = self
            .send(authed_request(
                Method::POST,
                "/v1/account/influencer",
                &create_test_jwt(sub),
                Some(influencer_body(vec![])),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        profile_id(&body)
    }

    /// Create a campaign as `sub`; returns status and body
    pub async fn create_campaign(&self, sub: &str, body: Value) -> (StatusCode, Value) {
        self.send(authed_request(
            Method::POST,
            "/v1/campaigns",
            &create_test_jwt(sub),
            Some(body),
        ))
        .await
    }

    /// Create a valid campaign and return its id
    pub async fn create_valid_campaign(&self, sub: &str, brand_id: Uuid, category: Uuid) -> Uuid {
        let (status, body) = self
            .create_campaign(sub, campaign_body(brand_id, vec![category]))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["campaignId"].as_str().unwrap().parse().unwrap()
    }

    pub async fn apply(&self, sub: &str, campaign_id: Uuid) -> (StatusCode, Value) {
        self.send(authed_request(
            Method::POST,
            &format!("/v1/campaigns/{}/applications", campaign_id),
            &create_test_jwt(sub),
            Some(json!({ "proposal": "I make travel reels" })),
        ))
        .await
    }
}

pub fn profile_id(resolved: &Value) -> Uuid {
    resolved["profile"]["id"].as_str().unwrap().parse().unwrap()
}

/// Build an authenticated request
pub fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", jwt));
    with_body(builder, body)
}

/// Build an unauthenticated request
pub fn unauthed_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    with_body(Request::builder().method(method).uri(uri), body)
}

fn with_body(builder: axum::http::request::Builder, body: Option<Value>) -> Request<Body> {
    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Mint an identity provider token for `sub`
pub fn create_test_jwt(sub: &str) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: &'a str,
        email: String,
        iat: u64,
        exp: u64,
    }

    let now = chrono::Utc::now().timestamp() as u64;
    let claims = TestClaims {
        sub,
        email: format!("{}@collabhub.test", sub),
        iat: now,
        exp: now + 3600,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_ref()),
    )
    .unwrap()
}

pub fn brand_body(categories: Vec<Uuid>) -> Value {
    json!({
        "fullName": "Brand Owner",
        "phone": "+84 900 000 001",
        "brandName": "Acme Drinks",
        "industry": "Beverages",
        "budgetMin": 100,
        "budgetMax": 5000,
        "categories": categories,
        "description": "Cold drinks"
    })
}

pub fn influencer_body(categories: Vec<Uuid>) -> Value {
    json!({
        "fullName": "Creator",
        "phone": "+84 900 000 002",
        "bio": "Travel and food",
        "categories": categories,
        "priceMin": 50,
        "priceMax": 500
    })
}

pub fn campaign_body(brand_id: Uuid, categories: Vec<Uuid>) -> Value {
    json!({
        "brandId": brand_id,
        "title": "Summer Launch",
        "categories": categories,
        "bannerUrl": "banners/summer.png",
        "periods": {
            "apply": { "start": "2026-06-01T00:00:00Z", "end": "2026-06-08T00:00:00Z" },
            "selective": { "start": "2026-06-08T00:00:00Z", "end": "2026-06-10T00:00:00Z" },
            "active": { "start": "2026-06-10T00:00:00Z", "end": "2026-06-30T00:00:00Z" },
            "review": { "start": "2026-06-30T00:00:00Z", "end": "2026-07-07T00:00:00Z" }
        },
        "socialPlatforms": ["instagram", "tiktok"],
        "applyLimit": 20,
        "description": "Promote the summer line",
        "budget": 1500,
        "reward": "Free products",
        "policyAndCondition": "No competitor mentions",
        "guide": "Two posts and a story",
        "contentRequired": "Unboxing video",
        "location": "Ho Chi Minh City"
    })
}
