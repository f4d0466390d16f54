//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod payment;

pub use payment::{
    GatewayOrder, OrderId, OrderRequest, PaymentId, VerificationOutcome, VerificationRequest,
};
