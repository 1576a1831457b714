//! Brand listings and the general campaign feed over HTTP

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use collabhub_campaigns::CampaignStatus;
use serde_json::Value;
use uuid::Uuid;

use crate::common::{unauthed_request, TestApp};

/// Onboard one brand and create `n` campaigns for it
async fn brand_with_campaigns(app: &TestApp, sub: &str, n: usize) -> (Uuid, Vec<Uuid>) {
    let category = app.seed_category("Lifestyle").await;
    let brand_id = app.onboard_brand(sub).await;
    let mut ids = Vec::with_capacity(n);
    for _ in 0..n {
        ids.push(app.create_valid_campaign(sub, brand_id, category).await);
    }
    (brand_id, ids)
}

async fn get(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    app.send(unauthed_request(Method::GET, uri, None)).await
}

fn ids_of(data: &Value) -> Vec<String> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_brand_listing_pages_through_all_campaigns() {
    let app = TestApp::new();
    let (brand_id, created) = brand_with_campaigns(&app, "brand_owner", 25).await;

    let mut seen = HashSet::new();
    for page in 1..=3 {
        let (status, body) = get(
            &app,
            &format!("/v1/brands/{}/campaigns?page={}&pageSize=10", brand_id, page),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let pagination = &body["pagination"];
        assert_eq!(pagination["total"], 25);
        assert_eq!(pagination["totalPages"], 3);
        assert_eq!(pagination["hasPrev"], page > 1);
        assert_eq!(pagination["hasNext"], page < 3);

        let ids = ids_of(&body["data"]);
        assert_eq!(ids.len(), if page == 3 { 5 } else { 10 });
        seen.extend(ids);
    }

    assert_eq!(seen.len(), created.len());
}

#[tokio::test]
async fn test_brand_listing_filters_by_status() {
    let app = TestApp::new();
    let (brand_id, created) = brand_with_campaigns(&app, "brand_owner", 4).await;
    app.campaigns
        .set_status(created[0], CampaignStatus::Completed)
        .await;

    let (_, open) = get(&app, &format!("/v1/brands/{}/campaigns?status=open", brand_id)).await;
    assert_eq!(open["pagination"]["total"], 3);

    let (_, completed) = get(
        &app,
        &format!("/v1/brands/{}/campaigns?status=completed", brand_id),
    )
    .await;
    assert_eq!(completed["pagination"]["total"], 1);
    assert_eq!(ids_of(&completed["data"]), vec![created[0].to_string()]);
}

#[tokio::test]
async fn test_unknown_brand_lists_empty_page() {
    let app = TestApp::new();
    let (status, body) = get(&app, &format!("/v1/brands/{}/campaigns", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["pagination"]["totalPages"], 1);
    assert_eq!(body["pagination"]["hasNext"], false);
}

#[tokio::test]
async fn test_general_feed_cursor_walk_visits_each_open_campaign_once() {
    let app = TestApp::new();
    let (_, created) = brand_with_campaigns(&app, "brand_owner", 8).await;
    app.campaigns
        .set_status(created[3], CampaignStatus::InProgress)
        .await;

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    for _ in 0..10 {
        let uri = match &cursor {
            Some(c) => format!("/v1/campaigns?limit=3&cursor={}", c),
            None => "/v1/campaigns?limit=3".to_string(),
        };
        let (status, body) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::OK, "{body}");

        seen.extend(ids_of(&body["data"]));
        cursor = body["cursor"].as_str().map(str::to_string);
        if body["isDone"] == true {
            break;
        }
    }

    assert_eq!(seen.len(), 7);
    let unique: HashSet<&String> = seen.iter().collect();
    assert_eq!(unique.len(), 7);
    assert!(!seen.contains(&created[3].to_string()));
}

#[tokio::test]
async fn test_general_feed_rejects_malformed_cursor() {
    let app = TestApp::new();
    let (status, body) = get(&app, "/v1/campaigns?cursor=not-a-cursor").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_CURSOR");
}

#[tokio::test]
async fn test_trending_feed_orders_by_application_count() {
    let app = TestApp::new();
    let (_, created) = brand_with_campaigns(&app, "brand_owner", 3).await;
    for sub in ["creator_a", "creator_b"] {
        app.onboard_influencer(sub).await;
        let (status, _) = app.apply(sub, created[0]).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    app.apply("creator_a", created[1]).await;

    let (status, body) = get(&app, "/v1/campaigns?action=trending").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isDone"], true);

    let data = body["data"].as_array().unwrap();
    let counts: Vec<i64> = data.iter().map(|c| c["applyCount"].as_i64().unwrap()).collect();
    assert_eq!(counts, vec![2, 1, 0]);
    assert_eq!(data[0]["id"], created[0].to_string());
}

#[tokio::test]
async fn test_empty_feed_is_done() {
    let app = TestApp::new();
    let (status, body) = get(&app, "/v1/campaigns").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["isDone"], true);
    assert_eq!(body["cursor"], Value::Null);
}
