//! `district-maps` library crate.
//!
//! The binary is a thin wrapper around this library so that:
//!
//! - generators are testable without spawning processes
//! - each map can be produced on its own (see `maps::generate`)

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod maps;
pub mod report;
