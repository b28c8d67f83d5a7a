//! Scripted collaborator fakes for engine and scheduler tests.

use adgram_proto::{ApiError, ApiResult, Deal, DealApi, TransitionOutcome, status_label, status_step};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build a minimal deal with server-consistent `step`/`label`/terminal
/// fields for the given status.
pub fn deal(id: i64, status: &str) -> Deal {
    Deal {
        id,
        status: status.to_string(),
        label: status_label(status),
        step: status_step(status),
        is_terminal: matches!(status, "completed" | "refunded" | "cancelled"),
        allowed_transitions: Vec::new(),
        title: format!("Deal #{id}"),
        channel: None,
        amount: 0.0,
        deal_type: "deal".to_string(),
        campaign_id: None,
        channel_id: None,
        created_at: None,
    }
}

/// In-memory [`DealApi`] with scripted responses.
///
/// Fetches return the current deal set unless an explicit result was queued;
/// transitions replay queued outcomes and record every request.
#[derive(Default)]
pub struct ScriptedDealApi {
    deals: Mutex<Vec<Deal>>,
    fetch_queue: Mutex<VecDeque<ApiResult<Vec<Deal>>>>,
    transition_queue: Mutex<VecDeque<ApiResult<TransitionOutcome>>>,
    fetch_calls: AtomicUsize,
    transitions: Mutex<Vec<(i64, String)>>,
}

impl ScriptedDealApi {
    pub fn with_deals(deals: Vec<Deal>) -> Self {
        Self {
            deals: Mutex::new(deals),
            ..Self::default()
        }
    }

    /// Replace the deal set returned by subsequent fetches.
    pub fn set_deals(&self, deals: Vec<Deal>) {
        *self.deals.lock().unwrap() = deals;
    }

    /// Queue a one-shot fetch result consumed before the default deal set.
    pub fn push_fetch(&self, result: ApiResult<Vec<Deal>>) {
        self.fetch_queue.lock().unwrap().push_back(result);
    }

    /// Queue a one-shot transition outcome.
    pub fn push_transition(&self, result: ApiResult<TransitionOutcome>) {
        self.transition_queue.lock().unwrap().push_back(result);
    }

    /// Number of fetch requests observed.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Every `(deal_id, target_state)` transition request observed, in order.
    pub fn transitions(&self) -> Vec<(i64, String)> {
        self.transitions.lock().unwrap().clone()
    }
}

#[async_trait]
impl DealApi for ScriptedDealApi {
    async fn fetch_deals(&self) -> ApiResult<Vec<Deal>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(result) = self.fetch_queue.lock().unwrap().pop_front() {
            return result;
        }
        Ok(self.deals.lock().unwrap().clone())
    }

    async fn request_transition(
        &self,
        deal_id: i64,
        target_state: &str,
    ) -> ApiResult<TransitionOutcome> {
        self.transitions
            .lock()
            .unwrap()
            .push((deal_id, target_state.to_string()));

        if let Some(result) = self.transition_queue.lock().unwrap().pop_front() {
            return result;
        }
        Err(ApiError::Rejected(format!("no scripted outcome for deal {deal_id}")))
    }
}
