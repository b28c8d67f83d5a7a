//! # adgram-tui
//!
//! Terminal presentation adapter for the Adgram sync engine.
//!
//! Built with `ratatui` and `crossterm`, this crate turns the engine's
//! render instructions into an interactive deals view:
//! - live timeline/badge/action cards driven by [`adgram_core::UiEvent`]s
//! - keyboard-driven refresh, filtering, and transition dispatch
//! - a persisted theme preference

mod app;
mod prefs;
mod state;
mod widgets;

pub use app::App;
pub use prefs::{Prefs, Theme};
pub use state::{FILTER_CYCLE, TuiState};
