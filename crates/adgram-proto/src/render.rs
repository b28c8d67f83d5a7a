//! Render-instruction values.
//!
//! The deal state renderer maps a deal snapshot to these presentation-neutral
//! values; a separate adapter (TUI, web) turns them into actual UI. Keeping
//! the state-machine logic out of the presentation layer keeps it testable
//! without a UI harness.

use crate::deal::Deal;
use serde::{Deserialize, Serialize};

/// Number of stages on the fixed deal timeline.
pub const TIMELINE_STAGES: usize = 6;

/// Visual class for one timeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageMark {
    /// Stage already passed.
    Done,
    /// Stage the deal currently sits on.
    Current,
    /// Stage not yet reached.
    Neutral,
    /// Terminal override: the deal ended off the timeline.
    Terminal,
}

/// Style family for a status badge, keyed on the raw status name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Pending,
    Active,
    Success,
    Danger,
    Neutral,
}

impl BadgeStyle {
    /// Map a status name onto the original UI palette.
    pub fn for_status(status: &str) -> Self {
        match status {
            "pending" | "scheduled" => Self::Pending,
            "accepted" | "funded" | "posted" => Self::Active,
            "verified" | "completed" => Self::Success,
            "cancelled" | "refunded" => Self::Danger,
            _ => Self::Neutral,
        }
    }
}

/// Status badge: escaped display text plus its style family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub text: String,
    pub style: BadgeStyle,
}

/// Visual weight of an action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Primary,
    /// Destructive targets (`cancelled`, `refunded`).
    Danger,
}

/// One permitted next-state control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    /// Raw target state name sent back on activation.
    pub target_state: String,
    /// Display label: target state with its first character upper-cased.
    pub label: String,
    pub kind: ActionKind,
}

/// Render instructions for a single deal card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealCard {
    pub id: i64,
    /// HTML-escaped display title.
    pub title: String,
    /// HTML-escaped channel handle, when known.
    pub channel: Option<String>,
    pub amount: f64,
    pub timeline: [StageMark; TIMELINE_STAGES],
    pub badge: StatusBadge,
    pub actions: Vec<ActionButton>,
}

/// Render instructions for the whole deals view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DealsView {
    /// No deals survived filtering: show the single placeholder, no list
    /// container.
    Empty,
    List(Vec<DealCard>),
}

impl DealsView {
    pub fn cards(&self) -> &[DealCard] {
        match self {
            Self::Empty => &[],
            Self::List(cards) => cards,
        }
    }
}

/// Global view filter over deal categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DealFilter {
    #[default]
    All,
    Kind(String),
}

impl DealFilter {
    /// Whether a deal survives this filter.
    pub fn matches(&self, deal: &Deal) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => {
                // Backward-compat branch carried over from the legacy UI:
                // 'placement' deals matched the 'placement' filter before the
                // general equality check existed. Redundant, kept verbatim.
                if deal.deal_type == "placement" && kind == "placement" {
                    return true;
                }
                deal.deal_type == *kind
            }
        }
    }
}
