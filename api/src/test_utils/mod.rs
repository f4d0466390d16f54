//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mock gateway is hand-written rather than generated: tests need to
//! script delays and failures and inspect what was forwarded.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
