//! Payment service
//!
//! Order creation against the gateway and checkout signature verification.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{
    GatewayOrder, OrderRequest, VerificationOutcome, VerificationRequest,
};
use crate::domain::ports::PaymentGateway;
use crate::domain::signature::verify_signature;
use crate::error::{AppError, GatewayError};

/// Service for the payment boundary
pub struct PaymentService<G>
where
    G: PaymentGateway,
{
    gateway: Arc<G>,
    key_secret: String,
    gateway_timeout: Duration,
}

impl<G> PaymentService<G>
where
    G: PaymentGateway,
{
    pub fn new(gateway: Arc<G>, key_secret: String, gateway_timeout: Duration) -> Self {
        Self {
            gateway,
            key_secret,
            gateway_timeout,
        }
    }

    /// Create a payment order with the gateway
    ///
    /// The request is forwarded without local validation. The whole call is
    /// bounded by the gateway timeout; a stalled gateway yields
    /// `GatewayError::Timeout`.
    pub async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, AppError> {
        let call = self.gateway.create_order(request);

        let order = match tokio::time::timeout(self.gateway_timeout, call).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(GatewayError::Timeout(self.gateway_timeout.as_millis() as u64).into())
            }
        };

        tracing::info!(
            order_id = order.id().unwrap_or("unknown"),
            amount = ?order.amount(),
            currency = order.currency().unwrap_or("unknown"),
            status = order.status().unwrap_or("unknown"),
            "Gateway order created"
        );

        Ok(order)
    }

    /// Verify the signature the checkout returned after payment
    ///
    /// A mismatch is a normal outcome, not an error.
    pub fn verify_payment(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, AppError> {
        request.validate()?;

        let valid = verify_signature(
            &self.key_secret,
            &request.order_id,
            &request.payment_id,
            &request.signature,
        )?;

        if valid {
            tracing::info!(
                order_id = %request.order_id,
                payment_id = %request.payment_id,
                "Payment signature verified"
            );
            Ok(VerificationOutcome::verified())
        } else {
            tracing::warn!(
                order_id = %request.order_id,
                payment_id = %request.payment_id,
                "Payment signature mismatch"
            );
            Ok(VerificationOutcome::failed())
        }
    }
}
