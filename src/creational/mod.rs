//! Object-creation patterns.
//!
//! - [`abstract_factory`] - couriers producing matching origin/destination pairs
//! - [`factory_method`] - teams that build their own rosters
//! - [`singleton`] - a lazily created, process-wide authorizer

pub mod abstract_factory;
pub mod factory_method;
pub mod singleton;
