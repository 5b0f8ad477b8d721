//! Route registration for the arith gateway

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use arith_runtime::Logger;
use arith_sdk::ArithClient;

use super::handlers;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ArithClient>,
    pub log: Logger,
}

impl AppState {
    #[must_use]
    pub fn new(client: Arc<dyn ArithClient>, log: Logger) -> Self {
        Self { client, log }
    }
}

/// Build the gateway router.
///
/// - `GET /add/{a}/{b}`
/// - `GET /mult/{a}/{b}`
///
/// The trailing-slash forms (`/add/3/`, `/mult//`) are routed too so an
/// empty operand gets the same 400 as any other bad one.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/add/{a}/{b}", get(handlers::add))
        .route("/add/{a}/", get(handlers::add))
        .route("/mult/{a}/{b}", get(handlers::mult))
        .route("/mult/{a}/", get(handlers::mult))
        .with_state(state)
}
