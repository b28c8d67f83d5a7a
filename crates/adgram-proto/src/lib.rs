//! # adgram-proto
//!
//! Shared types, error definitions, and traits for the Adgram client.
//!
//! This crate provides the foundational abstractions used across all Adgram
//! crates, including:
//! - The [`Deal`] record and its wire-format counterpart
//! - Render-instruction values produced by the deal state renderer
//! - The [`DealApi`] trait the sync engine polls through
//! - Common error types

mod api;
mod deal;
mod render;
mod status;

pub use api::{ApiError, ApiResult, DealApi, TransitionOutcome};
pub use deal::{Deal, DealWire};
pub use render::{
    ActionButton, ActionKind, BadgeStyle, DealCard, DealFilter, DealsView, StageMark, StatusBadge,
    TIMELINE_STAGES,
};
pub use status::{capitalize_first, status_label, status_step};
