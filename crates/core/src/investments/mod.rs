//! Investment records - backend-owned projections and period normalization.

mod investments_model;

pub use investments_model::*;
