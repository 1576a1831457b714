//! Campaign creation and application intake over HTTP

use axum::http::{Method, StatusCode};
use collabhub_campaigns::{CampaignStatus, StoreCapabilities};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{authed_request, campaign_body, create_test_jwt, unauthed_request, TestApp};

#[tokio::test]
async fn test_end_to_end_brand_campaign_apply_twice() {
    let app = TestApp::new();
    let category = app.seed_category("Travel").await;
    let brand_id = app.onboard_brand("brand_owner").await;
    app.onboard_influencer("creator").await;

    let campaign_id = app
        .create_valid_campaign("brand_owner", brand_id, category)
        .await;

    let (status, body) = app.apply("creator", campaign_id).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["applicationId"].as_str().is_some());

    let (status, body) = app.apply("creator", campaign_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_APPLICATION");

    let (status, campaign) = app
        .send(unauthed_request(
            Method::GET,
            &format!("/v1/campaigns/{}", campaign_id),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(campaign["applyCount"], 1);
    assert_eq!(campaign["status"], "open");
    assert_eq!(campaign["brandId"], brand_id.to_string());

    let applications = app.campaigns.applications().await;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].proposal.as_deref(), Some("I make travel reels"));
}

#[tokio::test]
async fn test_only_the_owning_brand_can_create() {
    let app = TestApp::new();
    let category = app.seed_category("Food").await;
    let brand_id = app.onboard_brand("brand_a").await;
    app.onboard_brand("brand_b").await;
    app.onboard_influencer("creator").await;

    let (status, body) = app
        .create_campaign("brand_b", campaign_body(brand_id, vec![category]))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "AUTHORIZATION_ERROR");

    let (status, _) = app
        .create_campaign("creator", campaign_body(brand_id, vec![category]))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .create_campaign("never_onboarded", campaign_body(brand_id, vec![category]))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_brand_is_not_found() {
    let app = TestApp::new();
    let category = app.seed_category("Food").await;
    app.onboard_brand("brand_owner").await;

    let (status, body) = app
        .create_campaign("brand_owner", campaign_body(Uuid::new_v4(), vec![category]))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "BRAND_NOT_FOUND");
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = TestApp::new();
    let (status, _) = app
        .send(unauthed_request(
            Method::POST,
            "/v1/campaigns",
            Some(campaign_body(Uuid::new_v4(), vec![Uuid::new_v4()])),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_validation_errors_carry_their_codes() {
    let app = TestApp::new();
    let category = app.seed_category("Tech").await;
    let brand_id = app.onboard_brand("brand_owner").await;

    let cases: Vec<(Box<dyn Fn(&mut Value)>, &str)> = vec![
        (
            Box::new(|b: &mut Value| b["categories"] = json!([])),
            "EMPTY_CATEGORY_SET",
        ),
        (
            Box::new(|b: &mut Value| b["categories"] = json!([Uuid::new_v4()])),
            "CATEGORY_NOT_FOUND",
        ),
        (
            Box::new(|b: &mut Value| b["budget"] = json!(0)),
            "INVALID_BUDGET",
        ),
        (
            Box::new(|b: &mut Value| b["budget"] = json!("0.001")),
            "INVALID_BUDGET",
        ),
        (
            Box::new(|b: &mut Value| b["budget"] = json!("1000000000000")),
            "INVALID_BUDGET",
        ),
        (
            Box::new(|b: &mut Value| b["applyLimit"] = json!(-1)),
            "INVALID_APPLY_LIMIT",
        ),
        (
            Box::new(|b: &mut Value| b["location"] = json!("   ")),
            "MISSING_REQUIRED_FIELD",
        ),
        (
            Box::new(|b: &mut Value| {
                b["periods"]["active"]["end"] = b["periods"]["active"]["start"].clone()
            }),
            "INVALID_PERIOD_ORDER",
        ),
        (
            Box::new(|b: &mut Value| {
                b["periods"]["apply"]["end"] = json!("2026-06-09T00:00:00Z")
            }),
            "INVALID_PERIOD_SEQUENCE",
        ),
    ];

    for (mutate, code) in cases {
        let mut body = campaign_body(brand_id, vec![category]);
        mutate(&mut body);
        let (status, response) = app.create_campaign("brand_owner", body).await;
        let expected = if code == "CATEGORY_NOT_FOUND" {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };
        assert_eq!(status, expected, "{code}: {response}");
        assert_eq!(response["error"]["code"], code);
    }

    let (status, listing) = app
        .send(unauthed_request(
            Method::GET,
            &format!("/v1/brands/{}/campaigns", brand_id),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_smallest_budget_and_zero_apply_limit_are_accepted() {
    let app = TestApp::new();
    let category = app.seed_category("Tech").await;
    let brand_id = app.onboard_brand("brand_owner").await;

    let mut body = campaign_body(brand_id, vec![category]);
    body["budget"] = json!("0.01");
    body["applyLimit"] = json!(0);
    let (status, response) = app.create_campaign("brand_owner", body).await;
    assert_eq!(status, StatusCode::CREATED, "{response}");
}

#[tokio::test]
async fn test_apply_without_body_has_no_proposal() {
    let app = TestApp::new();
    let category = app.seed_category("Travel").await;
    let brand_id = app.onboard_brand("brand_owner").await;
    app.onboard_influencer("creator").await;
    let campaign_id = app
        .create_valid_campaign("brand_owner", brand_id, category)
        .await;

    let (status, body) = app
        .send(authed_request(
            Method::POST,
            &format!("/v1/campaigns/{}/applications", campaign_id),
            &create_test_jwt("creator"),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let applications = app.campaigns.applications().await;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].proposal, None);
}

#[tokio::test]
async fn test_apply_to_closed_campaign_is_conflict() {
    let app = TestApp::new();
    let category = app.seed_category("Travel").await;
    let brand_id = app.onboard_brand("brand_owner").await;
    app.onboard_influencer("creator").await;
    let campaign_id = app
        .create_valid_campaign("brand_owner", brand_id, category)
        .await;

    app.campaigns
        .set_status(campaign_id, CampaignStatus::InProgress)
        .await;

    let (status, body) = app.apply("creator", campaign_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CAMPAIGN_NOT_OPEN");
}

#[tokio::test]
async fn test_only_influencers_can_apply() {
    let app = TestApp::new();
    let category = app.seed_category("Travel").await;
    let brand_id = app.onboard_brand("brand_owner").await;
    let campaign_id = app
        .create_valid_campaign("brand_owner", brand_id, category)
        .await;

    let (status, _) = app.apply("brand_owner", campaign_id).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_apply_to_missing_campaign_is_not_found() {
    let app = TestApp::new();
    app.onboard_influencer("creator").await;

    let (status, body) = app.apply("creator", Uuid::new_v4()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "CAMPAIGN_NOT_FOUND");
}

#[tokio::test]
async fn test_concurrent_applies_with_unique_index_admit_one() {
    let app = TestApp::with_capabilities(StoreCapabilities {
        unique_application_index: true,
    });
    let category = app.seed_category("Travel").await;
    let brand_id = app.onboard_brand("brand_owner").await;
    app.onboard_influencer("creator").await;
    let campaign_id = app
        .create_valid_campaign("brand_owner", brand_id, category)
        .await;

    let (first, second) = tokio::join!(
        app.apply("creator", campaign_id),
        app.apply("creator", campaign_id)
    );
    let statuses = [first.0, second.0];
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::CREATED).count(),
        1
    );
    assert!(statuses.contains(&StatusCode::CONFLICT));
    assert_eq!(app.campaigns.applications().await.len(), 1);
}

#[tokio::test]
async fn test_missing_campaign_reads_as_null() {
    let app = TestApp::new();
    let (status, body) = app
        .send(unauthed_request(
            Method::GET,
            &format!("/v1/campaigns/{}", Uuid::new_v4()),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}
