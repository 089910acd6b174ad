use std::{collections::BTreeMap, path::Path};

use anyhow::Context;

use crate::{
    format::spec::FormatSpec,
    foundation::error::{MediafitError, MediafitResult},
};

/// Named registry of [`FormatSpec`] values, typically loaded once at startup
/// from a JSON configuration file holding an array of specs.
///
/// Every spec is validated on the way in, so specs handed out by a catalog
/// are always safe to pass to the engine.
#[derive(Clone, Debug, Default)]
pub struct FormatCatalog {
    specs: BTreeMap<String, FormatSpec>,
}

impl FormatCatalog {
    /// Build a catalog, validating each spec and registering it under its
    /// own name. Duplicate names are rejected.
    pub fn new(specs: impl IntoIterator<Item = FormatSpec>) -> MediafitResult<Self> {
        let mut map = BTreeMap::new();
        for spec in specs {
            spec.validate()?;
            let name = spec.name.clone();
            if map.insert(name.clone(), spec).is_some() {
                return Err(MediafitError::catalog(format!(
                    "duplicate format name '{name}'"
                )));
            }
        }
        Ok(Self { specs: map })
    }

    /// Parse a catalog from a JSON array of specs.
    pub fn from_json(json: &str) -> MediafitResult<Self> {
        let specs: Vec<FormatSpec> = serde_json::from_str(json)
            .map_err(|e| MediafitError::serde(format!("invalid format catalog json: {e}")))?;
        Self::new(specs)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> MediafitResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read format catalog from '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Look up a spec by catalog name.
    pub fn get(&self, name: &str) -> MediafitResult<&FormatSpec> {
        self.specs
            .get(name)
            .ok_or_else(|| MediafitError::catalog(format!("unknown format '{name}'")))
    }

    /// Iterate the registered specs in name order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatSpec> {
        self.specs.values()
    }

    /// Number of registered specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when the catalog holds no specs.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/catalog.rs"]
mod tests;
