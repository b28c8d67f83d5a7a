//! Observable state for the deals view.

use crate::prefs::Theme;
use adgram_core::Notice;
use adgram_proto::{DealFilter, DealsView};
use std::time::{Duration, Instant};

/// How long a notice flash stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Filter values reachable with the `f` key, in cycle order.
pub const FILTER_CYCLE: [&str; 2] = ["placement", "review"];

/// State rendered each tick, updated from engine events and key presses.
pub struct TuiState {
    /// Latest render instruction set from the engine.
    pub view: DealsView,
    /// Index of the selected card within the current view.
    pub selected: usize,
    /// Position of the active filter in the cycle: 0 = all, then
    /// `FILTER_CYCLE[i - 1]`.
    filter_index: usize,
    /// Transient notification, timestamped for expiry.
    notice: Option<(Notice, Instant)>,
    pub theme: Theme,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            view: DealsView::Empty,
            selected: 0,
            filter_index: 0,
            notice: None,
            theme,
        }
    }

    /// Apply a fresh view, keeping the selection in bounds.
    pub fn set_view(&mut self, view: DealsView) {
        self.view = view;
        let count = self.view.cards().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    pub fn select_next(&mut self) {
        let count = self.view.cards().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_card(&self) -> Option<&adgram_proto::DealCard> {
        self.view.cards().get(self.selected)
    }

    /// Advance the filter cycle and return the new filter to install.
    pub fn cycle_filter(&mut self) -> DealFilter {
        self.filter_index = (self.filter_index + 1) % (FILTER_CYCLE.len() + 1);
        self.current_filter()
    }

    pub fn current_filter(&self) -> DealFilter {
        match self.filter_index {
            0 => DealFilter::All,
            i => DealFilter::Kind(FILTER_CYCLE[i - 1].to_string()),
        }
    }

    pub fn filter_name(&self) -> &'static str {
        match self.filter_index {
            0 => "all",
            i => FILTER_CYCLE[i - 1],
        }
    }

    pub fn flash(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    /// Active notice, dropping it once expired.
    pub fn active_notice(&mut self) -> Option<&Notice> {
        if let Some((_, shown_at)) = self.notice {
            if shown_at.elapsed() > NOTICE_TTL {
                self.notice = None;
            }
        }
        self.notice.as_ref().map(|(notice, _)| notice)
    }
}
