//! Integration tests for `MarketClient` against a canned in-process backend.

use adgram_client::{MarketClient, MarketConfig, NewCampaign};
use adgram_proto::{ApiError, DealApi, TransitionOutcome};
use axum::extract::{Json, Path};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{Value, json};
use std::net::SocketAddr;

/// Serve the canned backend on an ephemeral port and return its address.
async fn spawn_backend() -> SocketAddr {
    let app = Router::new()
        .route("/api/deals", get(list_deals))
        .route("/api/deal/{id}/transition", post(transition_deal))
        .route("/api/auth", post(auth))
        .route("/api/campaign/create", post(create_campaign));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn list_deals() -> Json<Value> {
    Json(json!({
        "success": true,
        "deals": [
            {
                "id": 1,
                "status": "funded",
                "label": "Escrow Funded",
                "step": 3,
                "is_terminal": false,
                "allowed_transitions": ["scheduled", "posted", "refunded"],
                "title": "Spring launch",
                "channel": "@technews",
                "amount": 75.0,
                "type": "placement"
            },
            // Minimal record: optional fields must fill with defaults
            { "id": 2, "status": "pending" }
        ]
    }))
}

async fn transition_deal(Path(id): Path<i64>, Json(body): Json<Value>) -> (axum::http::StatusCode, Json<Value>) {
    assert_eq!(body["telegram_id"], json!(777));

    match (id, body["state"].as_str()) {
        (5, Some("accepted")) => (
            axum::http::StatusCode::OK,
            Json(json!({ "success": true, "transition": "pending → accepted" })),
        ),
        (9, _) => (
            axum::http::StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Deal already cancelled" })),
        ),
        _ => (
            axum::http::StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Deal not found" })),
        ),
    }
}

async fn auth(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "success": true,
        "user": { "id": 1, "telegram_id": body["telegram_id"], "role": "user" }
    }))
}

async fn create_campaign(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "success": true,
        "campaign": {
            "id": 11,
            "advertiser_id": 1,
            "title": body["title"],
            "text": body["text"],
            "budget": body["budget"],
            "status": "pending"
        }
    }))
}

fn client_for(addr: SocketAddr) -> MarketClient {
    MarketClient::new(MarketConfig::new(format!("http://{addr}"), 777)).unwrap()
}

#[tokio::test]
async fn fetch_deals_decodes_and_defaults() {
    let addr = spawn_backend().await;
    let deals = client_for(addr).fetch_deals().await.unwrap();

    assert_eq!(deals.len(), 2);
    assert_eq!(deals[0].title, "Spring launch");
    assert_eq!(deals[0].deal_type, "placement");
    assert_eq!(deals[0].step, 3);

    // Order preserved as delivered; minimal record filled with defaults
    assert_eq!(deals[1].id, 2);
    assert_eq!(deals[1].title, "Deal #2");
    assert_eq!(deals[1].label, "pending");
    assert_eq!(deals[1].amount, 0.0);
}

#[tokio::test]
async fn successful_transition_reports_description() {
    let addr = spawn_backend().await;
    let outcome = client_for(addr).request_transition(5, "accepted").await.unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Applied {
            description: Some("pending → accepted".to_string())
        }
    );
}

#[tokio::test]
async fn rejected_transition_surfaces_server_message() {
    let addr = spawn_backend().await;
    let outcome = client_for(addr).request_transition(9, "posted").await.unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Rejected {
            message: "Deal already cancelled".to_string()
        }
    );
}

#[tokio::test]
async fn unknown_deal_is_a_rejection_not_a_transport_error() {
    let addr = spawn_backend().await;
    let outcome = client_for(addr).request_transition(123, "accepted").await.unwrap();

    assert!(matches!(
        outcome,
        TransitionOutcome::Rejected { message } if message == "Deal not found"
    ));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Grab an ephemeral port and release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).fetch_deals().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn glue_auth_and_campaign_roundtrip() {
    let addr = spawn_backend().await;
    let client = client_for(addr);

    let user = client.auth().await.unwrap();
    assert_eq!(user.telegram_id, 777);

    let campaign = client
        .create_campaign(&NewCampaign {
            title: "Spring launch".to_string(),
            text: "Try adgram".to_string(),
            budget: 200.0,
            user_id: 777,
        })
        .await
        .unwrap();
    assert_eq!(campaign.id, 11);
    assert_eq!(campaign.status, "pending");
}
