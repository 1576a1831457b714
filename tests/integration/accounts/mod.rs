//! Account onboarding, identity resolution and category endpoints

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::{
    authed_request, brand_body, create_test_jwt, influencer_body, unauthed_request, TestApp,
};

#[tokio::test]
async fn test_account_is_null_before_onboarding() {
    let app = TestApp::new();
    let (status, body) = app
        .send(authed_request(
            Method::GET,
            "/v1/account",
            &create_test_jwt("user_new"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_account_requires_token() {
    let app = TestApp::new();
    let (status, body) = app
        .send(unauthed_request(Method::GET, "/v1/account", None))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new();
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &json!({ "sub": "user_x", "iat": 0, "exp": 4_000_000_000u64 }),
        &jsonwebtoken::EncodingKey::from_secret(b"another-secret"),
    )
    .unwrap();

    let (status, body) = app
        .send(authed_request(Method::GET, "/v1/account", &forged, None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_brand_onboarding_resolves_tagged_profile() {
    let app = TestApp::new();
    let category = app.seed_category("Food").await;
    let jwt = create_test_jwt("user_brand");

    let (status, created) = app
        .send(authed_request(
            Method::POST,
            "/v1/account/brand",
            &jwt,
            Some(brand_body(vec![category])),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "brand");
    assert_eq!(created["user"]["email"], "user_brand@collabhub.test");
    assert_eq!(created["user"]["isActive"], true);
    assert_eq!(created["profile"]["brandName"], "Acme Drinks");

    let (status, resolved) = app
        .send(authed_request(Method::GET, "/v1/account", &jwt, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolved, created);
}

#[tokio::test]
async fn test_duplicate_onboarding_is_conflict() {
    let app = TestApp::new();
    app.onboard_brand("user_twice").await;

    let (status, body) = app
        .send(authed_request(
            Method::POST,
            "/v1/account/influencer",
            &create_test_jwt("user_twice"),
            Some(influencer_body(vec![])),
        ))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_onboarding_with_unknown_category_is_not_found() {
    let app = TestApp::new();
    let (status, _) = app
        .send(authed_request(
            Method::POST,
            "/v1/account/influencer",
            &create_test_jwt("user_cat"),
            Some(influencer_body(vec![uuid::Uuid::new_v4()])),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, account) = app
        .send(authed_request(
            Method::GET,
            "/v1/account",
            &create_test_jwt("user_cat"),
            None,
        ))
        .await;
    assert_eq!(account, Value::Null);
}

#[tokio::test]
async fn test_onboarding_rejects_inverted_price_range() {
    let app = TestApp::new();
    let mut body = influencer_body(vec![]);
    body["priceMin"] = json!(900);

    let (status, response) = app
        .send(authed_request(
            Method::POST,
            "/v1/account/influencer",
            &create_test_jwt("user_price"),
            Some(body),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_onboarding_rejects_invalid_email() {
    let app = TestApp::new();
    let mut body = brand_body(vec![]);
    body["email"] = json!("not-an-email");

    let (status, _) = app
        .send(authed_request(
            Method::POST,
            "/v1/account/brand",
            &create_test_jwt("user_email"),
            Some(body),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_users_lookup_by_external_ref() {
    let app = TestApp::new();
    app.onboard_influencer("user_creator").await;
    let viewer = create_test_jwt("user_viewer");

    let (status, body) = app
        .send(authed_request(
            Method::GET,
            "/v1/users/user_creator",
            &viewer,
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "influencer");
    assert_eq!(body["user"]["externalRef"], "user_creator");

    let (status, body) = app
        .send(authed_request(Method::GET, "/v1/users/nobody", &viewer, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_categories_are_cached_until_refresh() {
    let app = TestApp::new();
    app.seed_category("Travel").await;

    let (status, body) = app
        .send(unauthed_request(Method::GET, "/v1/categories", None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    app.seed_category("Beauty").await;
    let (_, stale) = app
        .send(unauthed_request(Method::GET, "/v1/categories", None))
        .await;
    assert_eq!(stale.as_array().unwrap().len(), 1);

    let (status, _) = app
        .send(unauthed_request(Method::POST, "/v1/categories/refresh", None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, refreshed) = app
        .send(authed_request(
            Method::POST,
            "/v1/categories/refresh",
            &create_test_jwt("user_admin"),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = refreshed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Beauty", "Travel"]);
}
