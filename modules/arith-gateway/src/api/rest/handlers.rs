//! REST handlers for the arith gateway

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, HeaderValue, StatusCode, Uri};

use arith_runtime::{LogLevel, Logger, Secure, log_debug, log_error, log_info, new_request_id};
use arith_sdk::{CallContext, REQUEST_ID_HEADER};

use super::dto::ResultBody;
use super::error::GatewayError;
use super::routes::AppState;
use crate::domain::{Operation, decode_operand};

/// Header values that are only ever logged redacted.
const SENSITIVE_HEADERS: &[&str] = &["authorization", "proxy-authorization", "cookie"];

/// Handler for GET /add/{a}/{b}
pub async fn add(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let (a, b) = operand_segments(&uri);
    calculate(&state, Operation::Add, a, b, &headers).await
}

/// Handler for GET /mult/{a}/{b}
pub async fn mult(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let (a, b) = operand_segments(&uri);
    calculate(&state, Operation::Multiply, a, b, &headers).await
}

/// Raw `{a}` and `{b}` segments of `/<op>/{a}/{b}`, still percent-encoded.
/// A missing segment is empty.
fn operand_segments(uri: &Uri) -> (&str, &str) {
    let path = uri.path().strip_prefix('/').unwrap_or(uri.path());
    let mut segments = path.splitn(3, '/').skip(1);
    let a = segments.next().unwrap_or_default();
    let b = segments.next().unwrap_or_default();
    (a, b)
}

async fn calculate(
    state: &AppState,
    op: Operation,
    raw_a: &str,
    raw_b: &str,
    headers: &HeaderMap,
) -> Response {
    let request_id = new_request_id();
    let log = state.log.with_request_id(&request_id);

    log_info!(log, "Client: {}()...", op.label());
    log_headers(&log, headers);

    let ctx = CallContext::with_request_id(request_id.as_str());
    let mut response = match evaluate(state, op, &ctx, raw_a, raw_b).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ResultBody {
                result: result.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            match &err {
                GatewayError::InvalidParameterA(e) | GatewayError::InvalidParameterB(e) => {
                    log_error!(log, "{err}: {e}");
                }
                GatewayError::Rpc(e) => log_error!(log, "error: {e}"),
            }
            err.into_response()
        }
    };

    if !request_id.is_empty()
        && let Ok(value) = HeaderValue::from_str(&request_id)
    {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// `b` is only decoded once `a` parsed; the service is only called once
/// both did.
async fn evaluate(
    state: &AppState,
    op: Operation,
    ctx: &CallContext,
    raw_a: &str,
    raw_b: &str,
) -> Result<i64, GatewayError> {
    let a = decode_operand(raw_a).map_err(GatewayError::InvalidParameterA)?;
    let b = decode_operand(raw_b).map_err(GatewayError::InvalidParameterB)?;
    Ok(op.invoke(state.client.as_ref(), ctx, a, b).await?)
}

fn log_headers(log: &Logger, headers: &HeaderMap) {
    if !log.enabled_for(LogLevel::Debug) {
        return;
    }
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        if SENSITIVE_HEADERS.contains(&name.as_str()) {
            let value = Secure::new(value);
            log_debug!(log, "header {name}: {value}");
        } else {
            log_debug!(log, "header {name}: {value}");
        }
    }
}
