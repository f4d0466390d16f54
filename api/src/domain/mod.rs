//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `signature`: Payment signature computation and verification

pub mod entities;
pub mod ports;
pub mod signature;
