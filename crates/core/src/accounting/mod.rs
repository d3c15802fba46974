//! Investment accounting - the derived figures shown for records and
//! portfolios: duration progress, return rate, estimated returns, and
//! portfolio stats. Everything here is a pure, synchronous calculation
//! over the record snapshot it is given.

mod accounting_model;
pub mod progress_calculator;
pub mod returns_calculator;
pub mod stats_service;

pub use accounting_model::*;
pub use progress_calculator::*;
pub use returns_calculator::*;
pub use stats_service::*;


#[cfg(test)]
mod returns_calculator_tests;
