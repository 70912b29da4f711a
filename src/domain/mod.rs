//! Domain types used throughout the generators.
//!
//! This module defines:
//!
//! - the run configuration (`MapConfig`) and the `Indicator` selector
//! - source rows and nowcasts (`PovertyRow`, `Nowcast`)
//! - the serializable map documents and their records

pub mod types;

pub use types::*;
