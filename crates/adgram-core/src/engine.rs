//! The sync engine: snapshot cache, reconciliation cycle, transition
//! dispatch, and the UI event bus.

use crate::fingerprint::Fingerprint;
use crate::render::render_deals;
use adgram_proto::{ApiError, Deal, DealApi, DealFilter, DealsView, TransitionOutcome};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Events broadcast to presentation adapters.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A fresh render instruction set for the deals view.
    Render(DealsView),
    /// A transient user-facing notification.
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Cache shared by the scheduler, renderer, and dispatcher.
///
/// Single-owner by construction: only the engine touches it, and always
/// under the mutex.
#[derive(Debug, Default)]
struct SyncState {
    deals: Vec<Deal>,
    fingerprint: Option<Fingerprint>,
    filter: DealFilter,
}

/// Deal-lifecycle synchronization engine.
///
/// One reconciliation cycle is fetch → detect-change → (conditionally)
/// render; the snapshot is replaced wholesale on every successful fetch, so
/// overlapping cycles resolve by last-write-wins.
pub struct SyncEngine {
    api: Arc<dyn DealApi>,
    state: Mutex<SyncState>,
    events: broadcast::Sender<UiEvent>,
}

impl SyncEngine {
    pub fn new(api: Arc<dyn DealApi>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            api,
            state: Mutex::new(SyncState::default()),
            events,
        }
    }

    /// Subscribe to render and notice events.
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    /// Run one reconciliation cycle.
    ///
    /// `force` bypasses the change detector: the snapshot is re-rendered even
    /// when the fingerprint matches. Fetch failures surface as notices and
    /// leave the cache untouched; recovery is the next cycle.
    pub async fn reconcile(&self, force: bool) {
        let deals = match self.api.fetch_deals().await {
            Ok(deals) => deals,
            Err(ApiError::Rejected(message)) => {
                warn!("Deal fetch rejected: {message}");
                self.emit(UiEvent::Notice(Notice::error(message)));
                return;
            }
            Err(e) => {
                warn!("Deal fetch failed: {e}");
                self.emit(UiEvent::Notice(Notice::error("Failed to refresh deals")));
                return;
            }
        };

        let fingerprint = Fingerprint::of(&deals);
        let view = {
            let mut state = self.state.lock().unwrap();
            let changed = state.fingerprint.as_ref() != Some(&fingerprint);

            // Full replacement snapshot, never a partial merge
            state.deals = deals;
            state.fingerprint = Some(fingerprint);

            if force || changed {
                Some(render_deals(&state.deals, &state.filter))
            } else {
                None
            }
        };

        match view {
            Some(view) => {
                debug!("Deals changed, publishing render");
                self.emit(UiEvent::Render(view));
            }
            None => debug!("Deals unchanged, skipping render"),
        }
    }

    /// Manual refresh: always reconciles immediately, independent of any
    /// armed timer.
    pub async fn refresh(&self) {
        self.reconcile(true).await;
    }

    /// Replace the active view filter and re-render from the cached
    /// snapshot without a fetch.
    pub fn set_filter(&self, filter: DealFilter) {
        let view = {
            let mut state = self.state.lock().unwrap();
            state.filter = filter;
            render_deals(&state.deals, &state.filter)
        };
        self.emit(UiEvent::Render(view));
    }

    pub fn filter(&self) -> DealFilter {
        self.state.lock().unwrap().filter.clone()
    }

    /// Current cached snapshot (cloned; the cache itself never escapes the
    /// mutex).
    pub fn deals(&self) -> Vec<Deal> {
        self.state.lock().unwrap().deals.clone()
    }

    /// Render the current snapshot on demand, outside the event flow.
    pub fn current_view(&self) -> DealsView {
        let state = self.state.lock().unwrap();
        render_deals(&state.deals, &state.filter)
    }

    /// Dispatch a guarded transition request.
    ///
    /// Success surfaces the server-reported description and forces exactly
    /// one reconciliation so the authoritative state becomes visible without
    /// waiting for the next poll. Rejections and transport failures never
    /// touch the cache.
    pub async fn request_transition(&self, deal_id: i64, target_state: &str) {
        match self.api.request_transition(deal_id, target_state).await {
            Ok(TransitionOutcome::Applied { description }) => {
                let text = match description {
                    Some(description) => format!("Transition applied: {description}"),
                    None => "Transition applied".to_string(),
                };
                info!("Deal {deal_id}: {text}");
                self.emit(UiEvent::Notice(Notice::success(text)));
                // The fingerprint still matches the pre-transition snapshot,
                // so bypass the change detector
                self.reconcile(true).await;
            }
            Ok(TransitionOutcome::Rejected { message }) => {
                warn!("Deal {deal_id} transition rejected: {message}");
                self.emit(UiEvent::Notice(Notice::error(message)));
            }
            Err(e) => {
                warn!("Deal {deal_id} transition request failed: {e}");
                self.emit(UiEvent::Notice(Notice::error(
                    "Transition request failed, try again",
                )));
            }
        }
    }

    fn emit(&self, event: UiEvent) {
        // No subscribers is fine (headless one-shot commands)
        let _ = self.events.send(event);
    }
}
