//! Structural patterns.
//!
//! - [`composite`] - folder tree printed by recursive descent
//! - [`proxy`] - lazily constructed subject behind a stand-in

pub mod composite;
pub mod proxy;
