//! Admission service: resolve the effective limit, fetch the live count,
//! decide.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;

use stockade_core::error::{Result, StockadeError};
use stockade_core::rules::{Ceiling, Limit, LimitIndex, LimitScope, MaterialId};

use crate::catalog::MaterialCatalog;
use crate::compile;
use crate::config::LimitsConfig;
use crate::groups::GroupResolver;
use crate::store::ProtectionStore;

/// Outcome of one admission check.
///
/// `ceiling` and `observed` are diagnostics; callers only need `over_limit`
/// to decide whether to cancel the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub over_limit: bool,
    pub ceiling: Option<Ceiling>,
    pub observed: Option<u64>,
}

impl Verdict {
    /// Verdict for a player no rule applies to. Absence of configuration
    /// never denies.
    fn unconstrained() -> Self {
        Self {
            over_limit: false,
            ceiling: None,
            observed: None,
        }
    }

    pub fn allowed(&self) -> bool {
        !self.over_limit
    }
}

/// Host-facing limits service.
///
/// Holds the published [`LimitIndex`] snapshot plus the external
/// collaborators, all passed in explicitly. Checks are read-only queries
/// against one snapshot; [`LimitService::reload`] publishes a fresh snapshot
/// atomically, so an in-flight check never observes a half-built index and
/// no reader ever blocks the writer.
pub struct LimitService {
    index: ArcSwap<LimitIndex>,
    store: Arc<dyn ProtectionStore>,
    groups: Arc<dyn GroupResolver>,
    catalog: Arc<dyn MaterialCatalog>,
    count_timeout: Duration,
}

impl LimitService {
    /// Compile `cfg` and build the service. Fails on a malformed config.
    pub fn new(
        cfg: &LimitsConfig,
        catalog: Arc<dyn MaterialCatalog>,
        groups: Arc<dyn GroupResolver>,
        store: Arc<dyn ProtectionStore>,
    ) -> Result<Self> {
        let index = compile::build_index(cfg, catalog.as_ref())?;
        log_published(&index, "limits loaded");

        Ok(Self {
            index: ArcSwap::from_pointee(index),
            store,
            groups,
            catalog,
            count_timeout: Duration::from_millis(cfg.engine.count_timeout_ms),
        })
    }

    /// Recompile and atomically publish a new snapshot.
    ///
    /// On error the previously published snapshot keeps serving.
    pub fn reload(&self, cfg: &LimitsConfig) -> Result<()> {
        let index = compile::build_index(cfg, self.catalog.as_ref())?;
        log_published(&index, "limits reloaded");
        self.index.store(Arc::new(index));
        Ok(())
    }

    /// Current snapshot. Stays consistent for as long as the caller holds it,
    /// across any number of concurrent reloads.
    pub fn snapshot(&self) -> Arc<LimitIndex> {
        self.index.load_full()
    }

    /// Resolve the effective limit without touching the store.
    pub fn effective_limit(
        &self,
        player: &str,
        groups: &[String],
        material: MaterialId,
    ) -> Option<Limit> {
        self.index
            .load()
            .effective_limit(player, groups, material)
            .copied()
    }

    /// Full admission check with an explicit, ordered group list.
    ///
    /// No rule anywhere in the chain means unconstrained. A material-scoped
    /// rule counts only that material; a default-scoped rule counts
    /// everything the player owns. Store failures and deadline misses are
    /// surfaced as errors, never silently mapped to a verdict.
    pub async fn check(
        &self,
        player: &str,
        groups: &[String],
        material: MaterialId,
    ) -> Result<Verdict> {
        // Copy the rule out of the snapshot before awaiting the store; the
        // fetch must not pin the index.
        let Some(limit) = self.effective_limit(player, groups, material) else {
            return Ok(Verdict::unconstrained());
        };

        let filter = match limit.scope {
            LimitScope::Material(id) => Some(id),
            LimitScope::Default => None,
        };

        let count = tokio::time::timeout(self.count_timeout, self.store.count_owned(player, filter))
            .await
            .map_err(|_| StockadeError::StoreTimeout)??;

        let over_limit = limit.ceiling.reached_by(count);
        if over_limit {
            tracing::debug!(
                %player,
                material = material.0,
                ceiling = ?limit.ceiling,
                count,
                "protection limit reached"
            );
        }

        Ok(Verdict {
            over_limit,
            ceiling: Some(limit.ceiling),
            observed: Some(count),
        })
    }

    /// Admission check that resolves the player's groups via the
    /// collaborator first.
    pub async fn check_player(&self, player: &str, material: MaterialId) -> Result<Verdict> {
        let groups = self.groups.groups_of(player);
        self.check(player, &groups, material).await
    }

    /// Whether `player` has reached the effective limit for `material`.
    pub async fn is_over_limit(
        &self,
        player: &str,
        groups: &[String],
        material: MaterialId,
    ) -> Result<bool> {
        Ok(self.check(player, groups, material).await?.over_limit)
    }
}

fn log_published(index: &LimitIndex, what: &str) {
    tracing::info!(
        defaults = index.defaults().len(),
        players = index.player_count(),
        groups = index.group_count(),
        "{what}"
    );
}
