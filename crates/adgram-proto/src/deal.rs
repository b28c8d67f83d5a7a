//! Deal records as delivered by the remote deal store.
//!
//! The wire shape ([`DealWire`]) keeps every collaborator-optional field
//! optional; defaults are filled exactly once when converting into [`Deal`],
//! so rendering code never needs fallback checks.

use crate::status::status_step;
use serde::{Deserialize, Serialize};

/// Raw deal record as serialized by the marketplace backend.
///
/// Only `id` and `status` are required; everything else degrades to a
/// documented default during conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealWire {
    pub id: i64,
    pub status: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub step: Option<u8>,
    #[serde(default)]
    pub is_terminal: bool,
    #[serde(default)]
    pub allowed_transitions: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub escrow_amount: Option<f64>,
    #[serde(default, rename = "type")]
    pub deal_type: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<i64>,
    #[serde(default)]
    pub channel_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A fully-defaulted deal snapshot held by the client.
///
/// Deals are created and mutated exclusively by the remote store; the client
/// only ever holds disposable copies replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub id: i64,
    pub status: String,
    /// Human-readable status text; defaults to `status`.
    pub label: String,
    /// Position on the fixed 6-stage timeline; `0` means "terminal marker".
    pub step: u8,
    pub is_terminal: bool,
    /// Ordered target states the caller may request next.
    pub allowed_transitions: Vec<String>,
    /// Display title; defaults to `Deal #{id}`.
    pub title: String,
    pub channel: Option<String>,
    /// Escrow amount in TON; defaults to `0`.
    pub amount: f64,
    /// Category used for client-side filtering; defaults to `deal`.
    pub deal_type: String,
    pub campaign_id: Option<i64>,
    pub channel_id: Option<i64>,
    pub created_at: Option<String>,
}

impl From<DealWire> for Deal {
    fn from(wire: DealWire) -> Self {
        let title = wire
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("Deal #{}", wire.id));
        let label = wire
            .label
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| wire.status.clone());
        let step = wire.step.unwrap_or_else(|| status_step(&wire.status));
        let amount = wire.amount.or(wire.escrow_amount).unwrap_or(0.0);
        let deal_type = wire.deal_type.unwrap_or_else(|| "deal".to_string());

        Self {
            id: wire.id,
            status: wire.status,
            label,
            step,
            is_terminal: wire.is_terminal,
            allowed_transitions: wire.allowed_transitions,
            title,
            channel: wire.channel,
            amount,
            deal_type,
            campaign_id: wire.campaign_id,
            channel_id: wire.channel_id,
            created_at: wire.created_at,
        }
    }
}
