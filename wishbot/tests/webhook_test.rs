//! Webhook endpoint tests: requests go straight into the axum router via tower's `oneshot`.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use common::{BotCall, Harness};
use tower::ServiceExt;
use wishbot::{texts, webhook_router, Membership};

const START_UPDATE: &str = r#"{
    "update_id": 1001,
    "message": {
        "message_id": 5,
        "date": 1706529600,
        "chat": {"id": 42, "type": "private", "first_name": "Rahim"},
        "from": {"id": 42, "is_bot": false, "first_name": "Rahim"},
        "text": "/start"
    }
}"#;

fn post_webhook(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_webhook_acknowledges_and_processes_update() {
    let h = Harness::new(Membership::NotMember);
    let bot = h.bot.clone();
    let router = webhook_router(Arc::new(h.app));

    let response = router.oneshot(post_webhook(START_UPDATE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"ok": true}));

    let call = bot.wait_for_reply().await.expect("update was not processed");
    assert!(matches!(call, BotCall::Sent { chat_id: 42, .. }));
    assert_eq!(call.reply().unwrap().text, texts::JOIN_PROMPT);
}

#[tokio::test]
async fn test_webhook_acknowledges_updates_it_ignores() {
    let h = Harness::new(Membership::Member);
    let bot = h.bot.clone();
    let router = webhook_router(Arc::new(h.app));
    let location = r#"{
        "update_id": 1002,
        "message": {
            "message_id": 6,
            "date": 1706529600,
            "chat": {"id": 42, "type": "private", "first_name": "Rahim"},
            "from": {"id": 42, "is_bot": false, "first_name": "Rahim"},
            "location": {"latitude": 23.81, "longitude": 90.41}
        }
    }"#;

    let response = router.oneshot(post_webhook(location)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(bot.calls().is_empty());
}

#[tokio::test]
async fn test_webhook_rejects_malformed_body() {
    let h = Harness::new(Membership::Member);
    let router = webhook_router(Arc::new(h.app));

    let response = router.oneshot(post_webhook("not json")).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health() {
    let h = Harness::new(Membership::Member);
    let router = webhook_router(Arc::new(h.app));

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}
