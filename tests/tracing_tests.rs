use brrtcors::ids::RequestId;
use brrtcors::server::HandlerResponse;
use brrtcors::Cors;
use http::Method;
use tracing::Level;

mod common;
use common::*;

mod tracing_util;
use tracing_util::TestTracing;

#[test]
fn test_rejected_preflight_is_logged_at_debug() {
    let tracing = TestTracing::init();
    let cors = cors_for(&["foo.com"], &[]);
    let mut req = preflight("bar.com", "PUT");
    req.request_id = RequestId::from_header_or_new(Some("01ARZ3NDEKTSV4RRFFQ69G5FAV"));

    cors.handle_preflight(&req, &mut HandlerResponse::default());

    let events = tracing.events();
    let event = events
        .iter()
        .find(|e| e.message == "CORS preflight rejected")
        .expect("rejection event");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("request_id"), Some("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
    assert_eq!(event.field("origin"), Some("bar.com"));
    assert_eq!(event.field("reason"), Some("origin not allowed"));
    assert_eq!(event.field("stage"), Some("Start"));
}

#[test]
fn test_rejected_actual_request_is_logged() {
    let tracing = TestTracing::init();
    let cors = Cors::default();

    cors.annotate(&actual(Method::DELETE, "foo.com"), &mut HandlerResponse::default());

    let events = tracing.events();
    let event = events
        .iter()
        .find(|e| e.message == "CORS request rejected")
        .expect("rejection event");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("method"), Some("DELETE"));
    assert_eq!(event.field("reason"), Some("method not allowed"));
}

#[test]
fn test_accepted_request_is_logged_at_trace() {
    let tracing = TestTracing::init();
    let cors = Cors::default();

    cors.annotate(&actual(Method::GET, "foo.com"), &mut HandlerResponse::default());

    let events = tracing.events();
    assert!(events
        .iter()
        .all(|e| e.level == Level::TRACE || !e.message.starts_with("CORS")));
    assert!(events.iter().any(|e| e.message == "CORS request accepted"));
}
