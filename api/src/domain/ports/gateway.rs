//! Payment gateway port trait
//!
//! Defines the interface for creating orders with an external payment gateway.

use async_trait::async_trait;

use crate::domain::entities::{GatewayOrder, OrderRequest};
use crate::error::GatewayError;

/// Port for the external payment gateway
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment order. One outbound call, never retried.
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError>;
}
