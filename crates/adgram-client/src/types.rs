//! Wire shapes for the collaborator glue endpoints.
//!
//! Every backend response carries a `success` flag; `error` is populated on
//! logical rejection. Field aliases cover the backend's older key names.

use adgram_proto::DealWire;
use serde::{Deserialize, Serialize};

/// Minimal `{success, error}` envelope used to probe non-2xx bodies for a
/// logical rejection before classifying the failure as transport.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DealsResponse {
    pub success: bool,
    #[serde(default)]
    pub deals: Vec<DealWire>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransitionResponse {
    pub success: bool,
    #[serde(default)]
    pub transition: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequest {
    pub state: String,
    pub telegram_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub ton_wallet: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(alias = "username")]
    pub handle: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub subscribers: i64,
    #[serde(default, alias = "avg_views")]
    pub views: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelsResponse {
    pub success: bool,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelResponse {
    pub success: bool,
    #[serde(default)]
    pub channel: Option<Channel>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Channel registration payload. The backend prefixes `@` to the username
/// when missing.
#[derive(Debug, Clone, Serialize)]
pub struct NewChannel {
    pub username: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub subscribers: i64,
    pub avg_views: i64,
    /// Caller's telegram id; the backend auto-creates the owning user.
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    #[serde(default)]
    pub advertiser_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub budget: f64,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignResponse {
    pub success: bool,
    #[serde(default)]
    pub campaign: Option<Campaign>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCampaign {
    pub title: String,
    pub text: String,
    pub budget: f64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewDeal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    pub channel_id: i64,
    pub escrow_amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DealCreated {
    pub id: i64,
    #[serde(default)]
    pub campaign_id: Option<i64>,
    #[serde(default)]
    pub channel_id: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub escrow_amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DealCreateResponse {
    pub success: bool,
    #[serde(default)]
    pub deal: Option<DealCreated>,
    #[serde(default)]
    pub error: Option<String>,
}
