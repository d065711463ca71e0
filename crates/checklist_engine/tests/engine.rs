use std::sync::Arc;
use std::time::Duration;

use checklist_core::Check;
use checklist_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, StaticChecklistClient,
};

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn fetch_result_is_posted_as_event() {
    let client = StaticChecklistClient::new(vec![Check::new("one")]);
    let (engine, events) = EngineHandle::spawn(Arc::new(client));

    engine.fetch();

    let event = events.recv_timeout(WAIT).expect("event delivered");
    assert_eq!(
        event,
        EngineEvent::ChecklistFetched(Ok(vec![Check::new("one")]))
    );
    assert!(events.try_recv().is_none());
}

#[test]
fn failures_are_posted_as_events() {
    let error = FetchError::new(FailureKind::Timeout, "too slow");
    let (engine, events) =
        EngineHandle::spawn(Arc::new(StaticChecklistClient::failing(error.clone())));

    engine.fetch();

    let event = events.recv_timeout(WAIT).expect("event delivered");
    assert_eq!(event, EngineEvent::ChecklistFetched(Err(error)));
}

#[test]
fn every_fetch_request_produces_one_event() {
    let client = StaticChecklistClient::new(Vec::new()).with_delay(Duration::from_millis(20));
    let (engine, events) = EngineHandle::spawn(Arc::new(client));

    engine.fetch();
    engine.fetch();

    assert!(events.recv_timeout(WAIT).is_some());
    assert!(events.recv_timeout(WAIT).is_some());
    assert!(events.recv_timeout(Duration::from_millis(100)).is_none());
}
