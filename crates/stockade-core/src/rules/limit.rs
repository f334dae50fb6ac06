//! Single-bucket rule model and within-bucket resolution.

/// Numeric identifier of a protectable material, assigned by the host catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// Maximum count permitted under a rule.
///
/// `Unlimited` is an explicit state, not a sentinel integer, so comparisons
/// can never overflow into a false denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ceiling {
    /// Hard cap; a count at or above it is a denial.
    Bounded(u32),
    /// Never reached, whatever the count.
    Unlimited,
}

impl Ceiling {
    /// Whether `count` has reached this ceiling.
    pub fn reached_by(self, count: u64) -> bool {
        match self {
            Ceiling::Bounded(max) => count >= u64::from(max),
            Ceiling::Unlimited => false,
        }
    }
}

/// What a rule applies to within its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitScope {
    /// Catch-all for the bucket.
    Default,
    /// Only protections of one material.
    Material(MaterialId),
}

/// An immutable policy atom: a ceiling plus the scope it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub ceiling: Ceiling,
    pub scope: LimitScope,
}

/// Ordered rules for one precedence bucket (a player, a group, or the global
/// defaults). Order is configuration declaration order, nothing else.
#[derive(Debug, Clone, Default)]
pub struct LimitSet {
    limits: Vec<Limit>,
}

impl LimitSet {
    pub fn new(limits: Vec<Limit>) -> Self {
        Self { limits }
    }

    pub fn push(&mut self, limit: Limit) {
        self.limits.push(limit);
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Limit> {
        self.limits.iter()
    }

    /// Resolve this bucket for `material`.
    ///
    /// The first material rule matching `material` wins immediately, even if
    /// a default rule precedes it. Default rules only ever act as a fallback,
    /// and each one seen overwrites the remembered fallback, so with
    /// duplicate defaults the last in declaration order is the one returned.
    /// `None` means the bucket has nothing to say and the chain falls
    /// through.
    pub fn effective_for(&self, material: MaterialId) -> Option<&Limit> {
        let mut fallback = None;

        for limit in &self.limits {
            match limit.scope {
                LimitScope::Default => fallback = Some(limit),
                LimitScope::Material(m) if m == material => return Some(limit),
                LimitScope::Material(_) => {}
            }
        }

        fallback
    }
}
