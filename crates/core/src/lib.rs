//! Domain logic for the reservation core.
//!
//! This crate has zero internal deps and no database access so it can be
//! used by the repository layer, the API, and any future CLI tooling.

pub mod booking;
pub mod error;
pub mod interval;
pub mod pricing;
pub mod roles;
pub mod types;
