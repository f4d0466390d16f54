//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use crate::app::PaymentService;
use crate::config::Config;
use crate::domain::entities::GatewayOrder;
use crate::test_utils::MockPaymentGateway;
use crate::AppState;

pub const TEST_KEY_ID: &str = "rzp_test_key";
pub const TEST_KEY_SECRET: &str = "test_secret";

/// Create a gateway order shaped like a freshly created Razorpay order
pub fn test_order() -> GatewayOrder {
    test_order_for(50000, "INR")
}

/// Create a gateway order for a specific amount and currency
pub fn test_order_for(amount: i64, currency: &str) -> GatewayOrder {
    gateway_order(json!({
        "id": "order_test_0001",
        "entity": "order",
        "amount": amount,
        "amount_paid": 0,
        "amount_due": amount,
        "currency": currency,
        "receipt": null,
        "offer_id": null,
        "status": "created",
        "attempts": 0,
        "notes": [],
        "created_at": 1_700_000_000
    }))
}

/// Wrap an arbitrary JSON object as a gateway order
pub fn gateway_order(value: Value) -> GatewayOrder {
    match value {
        Value::Object(fields) => GatewayOrder::from(fields),
        other => panic!("gateway order fixture must be an object, got {}", other),
    }
}

/// Configuration with test credentials and a short gateway timeout
pub fn test_config() -> Config {
    Config {
        razorpay_key_id: TEST_KEY_ID.to_string(),
        razorpay_key_secret: TEST_KEY_SECRET.to_string(),
        razorpay_api_url: "http://127.0.0.1:9".to_string(),
        gateway_timeout: Duration::from_millis(200),
        port: 0,
        rate_limit_per_second: 2,
        rate_limit_burst: 5,
    }
}

/// App state wired to the given mock gateway
pub fn test_state(gateway: MockPaymentGateway) -> AppState<MockPaymentGateway> {
    let config = test_config();
    let payment_service = Arc::new(PaymentService::new(
        Arc::new(gateway),
        config.razorpay_key_secret.clone(),
        config.gateway_timeout,
    ));

    AppState {
        payment_service,
        key_id: config.razorpay_key_id.clone(),
    }
}
