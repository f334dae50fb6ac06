//! stockade engine: config loading, collaborator seams, and the admission
//! service.
//!
//! This crate wires the core precedence algorithm to its host: strict YAML
//! config, the material catalog consulted at load time, the protection store
//! and group resolver consulted at check time, and atomic snapshot reload.
//! The host event layer (cancelling the action, messaging the player) stays
//! outside; this crate only produces the verdict.

pub mod catalog;
pub mod compile;
pub mod config;
pub mod groups;
pub mod service;
pub mod store;

pub use catalog::{MaterialCatalog, StaticCatalog};
pub use groups::GroupResolver;
pub use service::{LimitService, Verdict};
pub use store::ProtectionStore;
