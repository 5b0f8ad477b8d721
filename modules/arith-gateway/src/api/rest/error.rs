use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use arith_sdk::ArithError;

use super::dto::ErrorBody;
use crate::domain::OperandError;

/// Failure of a gateway request, mapped onto an HTTP status and JSON body.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Invalid Parameter A")]
    InvalidParameterA(#[source] OperandError),

    #[error("Invalid Parameter B")]
    InvalidParameterB(#[source] OperandError),

    #[error(transparent)]
    Rpc(#[from] ArithError),
}

impl GatewayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameterA(_) | Self::InvalidParameterB(_) => StatusCode::BAD_REQUEST,
            Self::Rpc(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
