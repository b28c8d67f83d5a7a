//! # adgram-core
//!
//! Deal-lifecycle synchronization and state-driven rendering engine.
//!
//! This crate provides:
//! - The change detector ([`Fingerprint`]) that decides whether a fetch
//!   warrants a re-render
//! - The pure deal state renderer ([`render_deals`])
//! - The [`SyncEngine`] owning the snapshot cache, reconciliation cycle, and
//!   transition dispatch
//! - The [`PollScheduler`] driving periodic reconciliation while a deals
//!   view is active
//!
//! Presentation adapters subscribe to the engine's [`UiEvent`] bus and never
//! touch the cache directly.

mod engine;
mod fingerprint;
mod render;
mod scheduler;
pub mod testing;

pub use engine::{Notice, NoticeKind, SyncEngine, UiEvent};
pub use fingerprint::Fingerprint;
pub use render::{escape_html, render_card, render_deals};
pub use scheduler::PollScheduler;
