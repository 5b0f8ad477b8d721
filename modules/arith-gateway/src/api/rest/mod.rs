pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::GatewayError;
pub use routes::{AppState, router};
