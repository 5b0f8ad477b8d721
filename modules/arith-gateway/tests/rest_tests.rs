#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Router-level tests with an in-memory `ArithClient`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use arith_gateway::{AppState, router};
use arith_runtime::logging::MemorySink;
use arith_runtime::{Logger, LoggingConfig};
use arith_sdk::{ArithClient, ArithError, CallContext, REQUEST_ID_HEADER};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::ServiceExt;

#[derive(Default)]
struct MockClient {
    calls: AtomicUsize,
    fail_with: Option<ArithError>,
    seen: Mutex<Vec<CallContext>>,
}

impl MockClient {
    fn failing(err: ArithError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    async fn record(&self, ctx: &CallContext, value: i64) -> Result<i64, ArithError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().await.push(ctx.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl ArithClient for MockClient {
    async fn add(&self, ctx: &CallContext, a: i64, b: i64) -> Result<i64, ArithError> {
        self.record(ctx, a.wrapping_add(b)).await
    }

    async fn multiply(&self, ctx: &CallContext, a: i64, b: i64) -> Result<i64, ArithError> {
        self.record(ctx, a.wrapping_mul(b)).await
    }
}

struct Harness {
    client: Arc<MockClient>,
    sink: MemorySink,
    app: axum::Router,
}

fn harness(client: MockClient) -> Harness {
    let client = Arc::new(client);
    let sink = MemorySink::new();
    let log = Logger::with_writer(&LoggingConfig::default(), sink.clone());
    let app = router(AppState::new(client.clone(), log));
    Harness { client, sink, app }
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, http::HeaderMap, Value) {
    get_with(app, Request::builder().uri(uri)).await
}

async fn get_with(
    app: &axum::Router,
    builder: http::request::Builder,
) -> (StatusCode, http::HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

#[tokio::test]
async fn add_returns_sum_as_string() {
    let h = harness(MockClient::default());
    let (status, _, body) = get(&h.app, "/add/3/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "7"}));
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn mult_returns_product_as_string() {
    let h = harness(MockClient::default());
    let (status, _, body) = get(&h.app, "/mult/3/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "12"}));
}

#[tokio::test]
async fn negative_a_is_rejected_without_calling_the_service() {
    let h = harness(MockClient::default());
    let (status, _, body) = get(&h.app, "/add/-1/4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid Parameter A"}));
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 0);

    let lines = h.sink.lines();
    assert!(
        lines
            .iter()
            .any(|l| l.contains("[E] ") && l.ends_with("Invalid Parameter A: parsing \"-1\": invalid syntax")),
        "{lines:?}"
    );
}

#[tokio::test]
async fn invalid_b_is_rejected_without_calling_the_service() {
    let h = harness(MockClient::default());
    let (status, _, body) = get(&h.app, "/add/3/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid Parameter B"}));
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn a_is_reported_before_b() {
    let h = harness(MockClient::default());
    let (status, _, body) = get(&h.app, "/mult/x/y").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid Parameter A"}));
}

#[tokio::test]
async fn out_of_range_operand_is_rejected() {
    let h = harness(MockClient::default());
    let (status, _, body) = get(&h.app, "/mult/2/18446744073709551616").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid Parameter B"}));
}

#[tokio::test]
async fn empty_operands_are_bad_requests() {
    let h = harness(MockClient::default());
    for (uri, expected) in [
        ("/add/3/", "Invalid Parameter B"),
        ("/mult//", "Invalid Parameter A"),
        ("/add//4", "Invalid Parameter A"),
    ] {
        let (status, _, body) = get(&h.app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": expected}), "{uri}");
    }
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 0);

    let lines = h.sink.lines();
    assert!(
        lines
            .iter()
            .any(|l| l.ends_with("Invalid Parameter B: parsing \"\": empty input")),
        "{lines:?}"
    );
}

#[tokio::test]
async fn undecodable_operands_are_bad_requests() {
    let h = harness(MockClient::default());
    for (uri, expected) in [
        ("/add/%FF/4", "Invalid Parameter A"),
        ("/add/3/%C3%28", "Invalid Parameter B"),
        ("/mult/x/%FF", "Invalid Parameter A"),
    ] {
        let (status, _, body) = get(&h.app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": expected}), "{uri}");
    }
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 0);

    let lines = h.sink.lines();
    assert!(
        lines
            .iter()
            .any(|l| l.ends_with("Invalid Parameter A: parsing \"%FF\": invalid percent-encoding")),
        "{lines:?}"
    );
}

#[tokio::test]
async fn percent_encoded_digits_are_decoded() {
    let h = harness(MockClient::default());
    let (status, _, body) = get(&h.app, "/add/%33/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "7"}));
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn large_unsigned_operands_wrap_to_signed() {
    let h = harness(MockClient::default());
    // u64::MAX reinterprets as -1
    let (status, _, body) = get(&h.app, "/add/18446744073709551615/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "0"}));

    let (_, _, body) = get(&h.app, "/add/9223372036854775807/1").await;
    assert_eq!(body, json!({"result": "-9223372036854775808"}));
}

#[tokio::test]
async fn rpc_failure_maps_to_500_with_message() {
    let h = harness(MockClient::failing(ArithError::Rpc {
        code: tonic::Code::Unavailable,
        message: "connection refused".to_owned(),
    }));
    let (status, _, body) = get(&h.app, "/add/3/4").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "rpc error: code = Unavailable desc = connection refused"})
    );
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 1);

    let lines = h.sink.lines();
    assert!(
        lines.iter().any(|l| l.contains("[E] ") && l.contains("error: rpc error")),
        "{lines:?}"
    );
}

#[tokio::test]
async fn request_id_is_logged_forwarded_and_echoed() {
    let h = harness(MockClient::default());
    let (status, headers, _) = get(&h.app, "/mult/6/7").await;
    assert_eq!(status, StatusCode::OK);

    let id = headers
        .get(REQUEST_ID_HEADER)
        .expect("request id header")
        .to_str()
        .unwrap()
        .to_owned();
    assert_eq!(id.len(), 16);

    let seen = h.client.seen.lock().await;
    assert_eq!(seen[0].request_id(), Some(id.as_str()));

    let lines = h.sink.lines();
    assert!(
        lines
            .iter()
            .any(|l| l.ends_with(&format!("[I] [{id}] Client: mult()..."))),
        "{lines:?}"
    );
}

#[tokio::test]
async fn sensitive_headers_are_redacted_in_logs() {
    let h = harness(MockClient::default());
    let builder = Request::builder()
        .uri("/add/1/2")
        .header("authorization", "Bearer s3cr3t-token")
        .header("cookie", "session=abcdef")
        .header("user-agent", "curl/8.0");
    let (status, _, _) = get_with(&h.app, builder).await;
    assert_eq!(status, StatusCode::OK);

    let out = h.sink.contents();
    assert!(!out.contains("s3cr3t-token"), "{out}");
    assert!(!out.contains("session=abcdef"), "{out}");
    assert!(out.contains("header authorization: [REDACTED]"));
    assert!(out.contains("header cookie: [REDACTED]"));
    assert!(out.contains("header user-agent: curl/8.0"));
}

#[tokio::test]
async fn disabled_logging_writes_nothing() {
    let client = Arc::new(MockClient::default());
    let sink = MemorySink::new();
    let log = Logger::with_writer(&LoggingConfig::new(false, "DEBUG"), sink.clone());
    let app = router(AppState::new(client, log));

    let (status, _, _) = get(&app, "/add/-1/2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let h = harness(MockClient::default());
    let (status, _, _) = get(&h.app, "/sub/3/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(h.client.calls.load(Ordering::SeqCst), 0);
}

/// Never answers; flags `dropped` once the in-flight call future is dropped.
#[derive(Default)]
struct StalledClient {
    started: AtomicBool,
    dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl StalledClient {
    async fn stall(&self) -> Result<i64, ArithError> {
        let _guard = DropFlag(self.dropped.clone());
        self.started.store(true, Ordering::SeqCst);
        std::future::pending().await
    }
}

#[async_trait]
impl ArithClient for StalledClient {
    async fn add(&self, _ctx: &CallContext, _a: i64, _b: i64) -> Result<i64, ArithError> {
        self.stall().await
    }

    async fn multiply(&self, _ctx: &CallContext, _a: i64, _b: i64) -> Result<i64, ArithError> {
        self.stall().await
    }
}

#[tokio::test]
async fn abandoned_request_cancels_the_outbound_call() {
    let client = Arc::new(StalledClient::default());
    let app = router(AppState::new(client.clone(), Logger::disabled()));
    let request = Request::builder()
        .uri("/add/3/4")
        .body(Body::empty())
        .unwrap();

    let outcome = tokio::time::timeout(Duration::from_millis(50), app.oneshot(request)).await;
    assert!(outcome.is_err(), "stalled call must not produce a response");

    assert!(client.started.load(Ordering::SeqCst));
    assert!(client.dropped.load(Ordering::SeqCst));
}
