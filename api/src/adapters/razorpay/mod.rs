//! Razorpay adapter
//!
//! Implementation of the payment gateway port against the Razorpay REST API.

pub mod client;

pub use client::RazorpayClientImpl;
