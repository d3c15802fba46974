//! Fundfolio Core - investment accounting domain.
//!
//! This crate contains the calculation rules that turn backend-owned
//! investment records into the figures a user sees: duration progress,
//! return rate, estimated returns, and portfolio totals. It is
//! database-agnostic and network-agnostic; the session layer maps the
//! remote payload into these models and passes them in by value.

pub mod accounting;
pub mod constants;
pub mod errors;
pub mod investments;
pub mod offers;
pub mod utils;

// Re-export common types from the domain modules
pub use accounting::*;
pub use investments::*;
pub use offers::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
