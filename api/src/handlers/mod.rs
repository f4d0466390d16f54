//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod payments;

pub use payments::{checkout_config, create_order, verify_payment};
