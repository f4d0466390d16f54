//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod razorpay;

pub use razorpay::RazorpayClientImpl;
