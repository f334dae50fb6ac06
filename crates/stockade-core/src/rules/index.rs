//! The loaded, queryable form of the limits configuration.

use std::collections::HashMap;

use super::limit::{Limit, LimitSet, MaterialId};

/// One immutable snapshot of every configured bucket.
///
/// Player and group keys are stored lower-cased; lookups normalize the
/// queried name the same way, so differently-cased input still hits.
/// A snapshot is never mutated after construction; the engine publishes a
/// fresh one on reload.
#[derive(Debug, Clone, Default)]
pub struct LimitIndex {
    defaults: LimitSet,
    players: HashMap<String, LimitSet>,
    groups: HashMap<String, LimitSet>,
}

impl LimitIndex {
    pub fn new(
        defaults: LimitSet,
        players: HashMap<String, LimitSet>,
        groups: HashMap<String, LimitSet>,
    ) -> Self {
        Self {
            defaults,
            players: lowercase_keys(players),
            groups: lowercase_keys(groups),
        }
    }

    pub fn defaults(&self) -> &LimitSet {
        &self.defaults
    }

    pub fn player_limits(&self, player: &str) -> Option<&LimitSet> {
        self.players.get(&player.to_lowercase())
    }

    pub fn group_limits(&self, group: &str) -> Option<&LimitSet> {
        self.groups.get(&group.to_lowercase())
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Walk the precedence chain and return the single effective rule.
    ///
    /// The player's own bucket is consulted first; then each group in the
    /// caller-supplied order, where the first group whose bucket yields a
    /// rule short-circuits the rest; then the global defaults. Once a bucket
    /// yields, lower buckets are never consulted, so a player's default beats
    /// a group's material rule. `None` is a valid terminal outcome meaning
    /// unconstrained.
    pub fn effective_limit<S: AsRef<str>>(
        &self,
        player: &str,
        groups: &[S],
        material: MaterialId,
    ) -> Option<&Limit> {
        if let Some(found) = self
            .player_limits(player)
            .and_then(|set| set.effective_for(material))
        {
            return Some(found);
        }

        for group in groups {
            if let Some(found) = self
                .group_limits(group.as_ref())
                .and_then(|set| set.effective_for(material))
            {
                return Some(found);
            }
        }

        self.defaults.effective_for(material)
    }
}

fn lowercase_keys(map: HashMap<String, LimitSet>) -> HashMap<String, LimitSet> {
    map.into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect()
}
