//! Config -> `LimitIndex` compilation.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use stockade_core::error::{Result, StockadeError};
use stockade_core::rules::{Ceiling, Limit, LimitIndex, LimitScope, LimitSet};

use crate::catalog::MaterialCatalog;
use crate::config::LimitsConfig;

/// Build an immutable index from a validated config.
///
/// A malformed ceiling aborts the whole build. A rule naming a material the
/// catalog does not know is skipped with a warning, so one typo cannot
/// disable every other limit.
pub fn build_index(cfg: &LimitsConfig, catalog: &dyn MaterialCatalog) -> Result<LimitIndex> {
    let defaults = compile_set("defaults", &cfg.defaults, catalog)?;
    let players = compile_sections("players", &cfg.players, catalog)?;
    let groups = compile_sections("groups", &cfg.groups, catalog)?;

    Ok(LimitIndex::new(defaults, players, groups))
}

/// Compile one of the named sections (`players`, `groups`) into per-name
/// buckets, keyed lower-cased.
fn compile_sections(
    section: &str,
    entries: &Mapping,
    catalog: &dyn MaterialCatalog,
) -> Result<HashMap<String, LimitSet>> {
    let mut out = HashMap::with_capacity(entries.len());

    for (name, rules) in entries {
        let name = scalar_str(section, name)?;
        let rules = rules.as_mapping().ok_or_else(|| {
            StockadeError::Config(format!("{section}.{name} must be a mapping of rules"))
        })?;

        let set = compile_set(&format!("{section}.{name}"), rules, catalog)?;
        out.insert(name.to_lowercase(), set);
    }

    Ok(out)
}

/// Compile one bucket's rules, preserving declaration order.
fn compile_set(path: &str, rules: &Mapping, catalog: &dyn MaterialCatalog) -> Result<LimitSet> {
    let mut set = LimitSet::default();

    for (key, value) in rules {
        let key = scalar_str(path, key)?;
        let ceiling = parse_ceiling(&format!("{path}.{key}"), value)?;

        if key.eq_ignore_ascii_case("default") {
            set.push(Limit {
                ceiling,
                scope: LimitScope::Default,
            });
            tracing::debug!(%path, ?ceiling, "loaded default limit");
            continue;
        }

        match catalog.lookup(key) {
            Some(material) => {
                set.push(Limit {
                    ceiling,
                    scope: LimitScope::Material(material),
                });
                tracing::debug!(%path, material = %key, ?ceiling, "loaded material limit");
            }
            None => {
                tracing::warn!(%path, material = %key, "unknown material in limits config, rule skipped");
            }
        }
    }

    Ok(set)
}

fn scalar_str<'a>(path: &str, v: &'a Value) -> Result<&'a str> {
    v.as_str()
        .ok_or_else(|| StockadeError::Config(format!("{path}: keys must be strings")))
}

/// Parse a configured ceiling: the literal `unlimited` (any case) or a
/// non-negative base-10 integer. YAML integer scalars are accepted as well
/// as quoted strings.
fn parse_ceiling(key: &str, value: &Value) -> Result<Ceiling> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Ceiling::Bounded)
            .ok_or_else(|| bad_ceiling(key, &n.to_string())),
        Value::String(s) => {
            if s.eq_ignore_ascii_case("unlimited") {
                return Ok(Ceiling::Unlimited);
            }
            s.parse::<u32>()
                .map(Ceiling::Bounded)
                .map_err(|_| bad_ceiling(key, s))
        }
        other => Err(bad_ceiling(key, &format!("{other:?}"))),
    }
}

fn bad_ceiling(key: &str, value: &str) -> StockadeError {
    StockadeError::BadCeiling {
        key: key.to_string(),
        value: value.to_string(),
    }
}
