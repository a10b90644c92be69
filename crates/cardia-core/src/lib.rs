//! # cardia-core
//!
//! Domain types shared across the Cardia crates:
//! - Wire types for the prediction service endpoints (prediction, healthy
//!   baseline, feature importance, service status)
//! - Risk level classification with display bands
//! - Form state for the six health inputs
//! - Chart dataset builders for the results views

pub mod charts;
pub mod form;
pub mod risk;
pub mod wire;
