//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and that
//! record what they were asked to do.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::{GatewayOrder, OrderRequest};
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;
use crate::test_utils::fixtures::gateway_order;

// ============================================================================
// Mock Payment Gateway
// ============================================================================

/// Scripted failure for the mock gateway
#[derive(Debug, Clone)]
enum MockFailure {
    Api { status: u16, message: String },
    Unauthorized,
}

impl MockFailure {
    fn to_error(&self) -> GatewayError {
        match self {
            MockFailure::Api { status, message } => GatewayError::Api {
                status: *status,
                message: message.clone(),
            },
            MockFailure::Unauthorized => GatewayError::Unauthorized,
        }
    }
}

#[derive(Default)]
pub struct MockPaymentGateway {
    order: Option<GatewayOrder>,
    failure: Option<MockFailure>,
    reject_non_positive: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: RwLock<Vec<OrderRequest>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer with this order instead of echoing the request
    pub fn with_order(mut self, order: GatewayOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every call with a gateway API error
    pub fn failing_with_api(mut self, status: u16, message: &str) -> Self {
        self.failure = Some(MockFailure::Api {
            status,
            message: message.to_string(),
        });
        self
    }

    /// Fail every call as if the API credentials were wrong
    pub fn failing_unauthorized(mut self) -> Self {
        self.failure = Some(MockFailure::Unauthorized);
        self
    }

    /// Reject zero and negative amounts the way the real gateway does
    pub fn rejecting_non_positive(mut self) -> Self {
        self.reject_non_positive = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.write().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref failure) = self.failure {
            return Err(failure.to_error());
        }

        if self.reject_non_positive && request.amount <= 0 {
            return Err(GatewayError::Api {
                status: 400,
                message: "The amount must be atleast INR 1.00".to_string(),
            });
        }

        if let Some(ref order) = self.order {
            return Ok(order.clone());
        }

        Ok(gateway_order(json!({
            "id": format!("order_mock_{:04}", n),
            "entity": "order",
            "amount": request.amount,
            "currency": request.currency,
            "receipt": request.receipt,
            "status": "created"
        })))
    }
}
