//! stockade core: protection-limit rules, the precedence algorithm, and the
//! shared error surface.
//!
//! This crate defines the rule model and the resolution algorithm shared by
//! the engine and host integrations. It intentionally carries no runtime or
//! I/O dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StockadeError`/`Result` so a bad
//! configuration or store hiccup can never take the host down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod rules;

/// Shared result type.
pub use error::{Result, StockadeError};
