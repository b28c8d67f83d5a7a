//! End-to-end dispatcher scenarios over the public engine API.

use adgram_core::testing::{ScriptedDealApi, deal};
use adgram_core::{NoticeKind, SyncEngine, UiEvent};
use adgram_proto::{ApiError, DealApi, TransitionOutcome};
use std::sync::Arc;

fn engine_with(api: Arc<ScriptedDealApi>) -> SyncEngine {
    SyncEngine::new(api as Arc<dyn DealApi>)
}

fn collect_notices(rx: &mut tokio::sync::broadcast::Receiver<UiEvent>) -> Vec<adgram_core::Notice> {
    let mut notices = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let UiEvent::Notice(notice) = event {
            notices.push(notice);
        }
    }
    notices
}

#[tokio::test]
async fn successful_transition_notifies_and_forces_one_reconciliation() {
    let api = Arc::new(ScriptedDealApi::with_deals(vec![deal(5, "pending")]));
    api.push_transition(Ok(TransitionOutcome::Applied {
        description: Some("activated".to_string()),
    }));

    let engine = engine_with(Arc::clone(&api));
    let mut rx = engine.subscribe();

    engine.request_transition(5, "active").await;

    assert_eq!(api.transitions(), vec![(5, "active".to_string())]);
    // Exactly one unconditional reconciliation fetch follows success
    assert_eq!(api.fetch_calls(), 1);

    let notices = collect_notices(&mut rx);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert!(notices[0].text.contains("activated"), "got: {}", notices[0].text);
}

#[tokio::test]
async fn rejected_transition_surfaces_message_and_keeps_cache() {
    let api = Arc::new(ScriptedDealApi::with_deals(vec![deal(5, "cancelled")]));
    api.push_transition(Ok(TransitionOutcome::Rejected {
        message: "Deal already cancelled".to_string(),
    }));

    let engine = engine_with(Arc::clone(&api));
    engine.reconcile(false).await;
    let cached = engine.deals();

    let mut rx = engine.subscribe();
    engine.request_transition(5, "accepted").await;

    let notices = collect_notices(&mut rx);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].text, "Deal already cancelled");

    // No reconciliation was triggered and the cache is untouched
    assert_eq!(api.fetch_calls(), 1);
    assert_eq!(engine.deals(), cached);
}

#[tokio::test]
async fn transport_failure_yields_generic_error_without_retry() {
    let api = Arc::new(ScriptedDealApi::with_deals(vec![deal(5, "pending")]));
    api.push_transition(Err(ApiError::Transport("connection reset".to_string())));

    let engine = engine_with(Arc::clone(&api));
    let mut rx = engine.subscribe();

    engine.request_transition(5, "accepted").await;

    let notices = collect_notices(&mut rx);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].text, "Transition request failed, try again");

    // One transition attempt, no retries, no reconciliation
    assert_eq!(api.transitions().len(), 1);
    assert_eq!(api.fetch_calls(), 0);
}

#[tokio::test]
async fn success_without_description_still_notifies() {
    let api = Arc::new(ScriptedDealApi::with_deals(vec![deal(2, "accepted")]));
    api.push_transition(Ok(TransitionOutcome::Applied { description: None }));

    let engine = engine_with(Arc::clone(&api));
    let mut rx = engine.subscribe();

    engine.request_transition(2, "funded").await;

    let notices = collect_notices(&mut rx);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].text, "Transition applied");
    assert_eq!(api.fetch_calls(), 1);
}

#[tokio::test]
async fn forced_reconciliation_after_success_picks_up_new_state() {
    let api = Arc::new(ScriptedDealApi::with_deals(vec![deal(5, "pending")]));
    let engine = engine_with(Arc::clone(&api));

    engine.reconcile(false).await;
    assert_eq!(engine.deals()[0].status, "pending");

    api.push_transition(Ok(TransitionOutcome::Applied {
        description: Some("pending → accepted".to_string()),
    }));
    api.set_deals(vec![deal(5, "accepted")]);

    engine.request_transition(5, "accepted").await;

    assert_eq!(engine.deals()[0].status, "accepted");
}
