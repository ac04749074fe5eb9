//! Common test utilities for CodeInsight CLI and scenario tests.
//!
//! - `TestEnv`: isolated working, home and ingest directories plus helpers
//!   to run the binary
//! - Fixtures: digest builders and the canonical sample digests

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
