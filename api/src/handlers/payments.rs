//! Payment handlers
//!
//! Endpoints for gateway order creation and checkout verification.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::domain::entities::{
    GatewayOrder, OrderRequest, VerificationOutcome, VerificationRequest,
};
use crate::domain::ports::PaymentGateway;
use crate::error::AppError;
use crate::AppState;

/// Response body for the checkout config endpoint
#[derive(Debug, Serialize)]
pub struct CheckoutConfigResponse {
    /// Public key id for the browser checkout widget
    pub key_id: String,
}

/// POST /api/payment/order
///
/// Create a payment order with the gateway and return it verbatim.
pub async fn create_order<G>(
    State(state): State<AppState<G>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<GatewayOrder>, AppError>
where
    G: PaymentGateway + 'static,
{
    let Json(request) = payload?;
    let order = state.payment_service.create_order(&request).await?;
    Ok(Json(order))
}

/// POST /api/payment/verify
///
/// Check the signature returned by the checkout. A mismatch is reported as
/// `success: false` with a 200.
pub async fn verify_payment<G>(
    State(state): State<AppState<G>>,
    payload: Result<Json<VerificationRequest>, JsonRejection>,
) -> Result<Json<VerificationOutcome>, AppError>
where
    G: PaymentGateway + 'static,
{
    let Json(request) = payload?;
    let outcome = state.payment_service.verify_payment(&request)?;
    Ok(Json(outcome))
}

/// GET /api/payment/config
pub async fn checkout_config<G>(State(state): State<AppState<G>>) -> Json<CheckoutConfigResponse>
where
    G: PaymentGateway + 'static,
{
    Json(CheckoutConfigResponse {
        key_id: state.key_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_checkout_config() {
        let json = serde_json::to_string(&CheckoutConfigResponse {
            key_id: "rzp_test_key".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"key_id":"rzp_test_key"}"#);
    }
}
