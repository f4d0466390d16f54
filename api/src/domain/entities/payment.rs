//! Payment domain entities
//!
//! Value types exchanged at the payment boundary. Nothing here is persisted;
//! the gateway owns the order lifecycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// Gateway-issued order identifier (e.g. `order_NXl6...`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Gateway-issued payment identifier (e.g. `pay_NXl7...`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(pub String);

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PaymentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Request to create a payment order
///
/// Forwarded to the gateway as-is. Amount sign and currency validity are
/// left for the gateway to judge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in the currency's minor unit (paise for INR)
    pub amount: i64,
    /// ISO 4217 currency code
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Map<String, Value>>,
}

impl OrderRequest {
    #[cfg(test)]
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            receipt: None,
            notes: None,
        }
    }
}

/// An order as returned by the gateway
///
/// Held as the raw JSON object so it goes back to the client exactly as the
/// gateway sent it. Accessors are read-only views for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayOrder(Map<String, Value>);

impl GatewayOrder {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("id").and_then(Value::as_str)
    }

    pub fn amount(&self) -> Option<i64> {
        self.field("amount").and_then(Value::as_i64)
    }

    pub fn currency(&self) -> Option<&str> {
        self.field("currency").and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.field("status").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for GatewayOrder {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Payment details handed back by the checkout after the user pays
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationRequest {
    #[serde(alias = "razorpay_order_id")]
    pub order_id: OrderId,
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: PaymentId,
    /// Lowercase hex HMAC-SHA256 signature
    #[serde(rename = "razorpay_signature")]
    pub signature: String,
}

impl VerificationRequest {
    /// Reject requests with blank identifiers before any signature work
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.order_id.0.trim().is_empty() {
            return Err(DomainError::Validation("order_id must not be empty".into()));
        }
        if self.payment_id.0.trim().is_empty() {
            return Err(DomainError::Validation(
                "razorpay_payment_id must not be empty".into(),
            ));
        }
        if self.signature.trim().is_empty() {
            return Err(DomainError::Validation(
                "razorpay_signature must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Result of a payment verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    pub success: bool,
    pub message: String,
}

impl VerificationOutcome {
    pub fn verified() -> Self {
        Self {
            success: true,
            message: "Payment verified".to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: "Payment verification failed".to_string(),
        }
    }
}
