//! gRPC Server implementation for arith
//!
//! The server implementation handles gRPC requests and delegates
//! to the domain Service for business logic.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use arith_sdk::{ArithRequest, ArithResponse, ArithService, CallContext};

use crate::domain::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct ArithServiceImpl {
    service: Arc<Service>,
}

impl ArithServiceImpl {
    /// Create a new `ArithService` implementation with the given Service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl ArithService for ArithServiceImpl {
    async fn add(&self, request: Request<ArithRequest>) -> Result<Response<ArithResponse>, Status> {
        // Request id (if any) travels as metadata
        let ctx = CallContext::extract(request.metadata());
        let req = request.into_inner();

        let result = self.service.add(&ctx, req.a, req.b);

        Ok(Response::new(ArithResponse { result }))
    }

    async fn multiply(
        &self,
        request: Request<ArithRequest>,
    ) -> Result<Response<ArithResponse>, Status> {
        let ctx = CallContext::extract(request.metadata());
        let req = request.into_inner();

        let result = self.service.multiply(&ctx, req.a, req.b);

        Ok(Response::new(ArithResponse { result }))
    }
}
