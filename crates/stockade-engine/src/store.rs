//! Protection store seam.

use async_trait::async_trait;

use stockade_core::error::Result;
use stockade_core::rules::MaterialId;

/// Backing store exposing live ownership counts.
///
/// The only I/O-bound call on the admission path. Implementations should
/// surface failures as [`StockadeError::Store`]; the engine adds its own
/// deadline on top.
///
/// [`StockadeError::Store`]: stockade_core::StockadeError::Store
#[async_trait]
pub trait ProtectionStore: Send + Sync {
    /// Count protections owned by `owner`, optionally restricted to one
    /// material.
    async fn count_owned(&self, owner: &str, material: Option<MaterialId>) -> Result<u64>;
}
