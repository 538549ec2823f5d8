//! Domain layer - Pure business abstractions
//!
//! This layer contains no HTTP framework dependencies (no Axum).
//! Only trait definitions and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
