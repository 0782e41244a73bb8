#![allow(dead_code)]
//! Shared test utilities for nestquest integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. Session tests pair these helpers with
//! `#[tokio::test(start_paused = true)]` so the simulated latency elapses
//! deterministically.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
