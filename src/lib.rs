//! Catalog matching and recommendation engine for the Dress Code
//! marketplace: style-quiz validation, token-gated dress recommendations
//! with progressive constraint relaxation, and diversity-constrained
//! accessory pairing, served over flat JSON catalog snapshots.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
