//! Material catalog seam.

use std::collections::HashMap;

use stockade_core::rules::MaterialId;

/// Resolves configured material names to host identifiers at load time.
pub trait MaterialCatalog: Send + Sync {
    /// Look up a material by its configured name. Case-insensitive.
    fn lookup(&self, name: &str) -> Option<MaterialId>;
}

/// Map-backed catalog for hosts with a fixed material table (and for tests).
#[derive(Debug, Default)]
pub struct StaticCatalog {
    by_name: HashMap<String, MaterialId>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, id: MaterialId) -> Self {
        self.by_name.insert(name.to_lowercase(), id);
        self
    }
}

impl MaterialCatalog for StaticCatalog {
    fn lookup(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(&name.to_lowercase()).copied()
    }
}
