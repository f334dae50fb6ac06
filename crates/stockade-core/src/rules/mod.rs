//! Limit rules and the precedence algorithm.
//!
//! A [`Limit`] is one policy atom, a [`LimitSet`] is the ordered bucket it
//! lives in, and a [`LimitIndex`] is the full immutable snapshot the engine
//! publishes. Resolution is two-level: bucket precedence (player, then each
//! group in caller order, then the global defaults) is decided before
//! within-bucket specificity is ever examined.

pub mod index;
pub mod limit;

pub use index::LimitIndex;
pub use limit::{Ceiling, Limit, LimitScope, LimitSet, MaterialId};
