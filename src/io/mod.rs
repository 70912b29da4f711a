//! Input/output helpers.
//!
//! - district poverty CSV ingest (`ingest`)
//! - national nowcast JSON reading (`nowcast`)
//! - map document read/write (`export`)

pub mod export;
pub mod ingest;
pub mod nowcast;

pub use export::*;
pub use ingest::*;
pub use nowcast::*;
