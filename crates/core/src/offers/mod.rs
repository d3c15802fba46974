//! Investment offers - purchasable plans and their validation rules.

mod offers_model;

pub use offers_model::*;

#[cfg(test)]
mod offers_model_tests;
