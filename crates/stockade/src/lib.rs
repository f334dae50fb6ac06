//! Top-level facade crate for stockade.
//!
//! Re-exports the core types and the engine so hosts can depend on a single
//! crate.

pub mod core {
    pub use stockade_core::*;
}

pub mod engine {
    pub use stockade_engine::*;
}
