//! Item catalog keyed by id

use crate::item::ItemDefinition;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No definition registered under the requested id
    #[error("Unknown item id: {0}")]
    NotFound(String),
}

/// Read-only item catalog
///
/// Built once from authored definitions, then only read. Lookups hand out
/// `Arc` clones, so slots reference definitions without owning them.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    definitions: HashMap<String, Arc<ItemDefinition>>,
}

impl ItemCatalog {
    /// Build a catalog from item definitions
    ///
    /// Definitions with a blank id are skipped; on duplicate ids the last
    /// definition wins.
    pub fn build(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut map = HashMap::new();
        for def in definitions {
            if def.id.trim().is_empty() {
                continue;
            }
            map.insert(def.id.clone(), Arc::new(def));
        }
        Self { definitions: map }
    }

    /// Look up a definition by id
    pub fn get(&self, id: &str) -> Result<Arc<ItemDefinition>, CatalogError> {
        if id.trim().is_empty() {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        self.definitions
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Check if an id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over all definitions
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<ItemDefinition>> {
        self.definitions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn test_build_and_get() {
        let catalog = ItemCatalog::build([
            ItemDefinition::new("health_potion", "Health Potion"),
            ItemDefinition::new("iron_sword", "Iron Sword").with_kind(ItemKind::Weapon),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("iron_sword"));

        let potion = catalog.get("health_potion").unwrap();
        assert_eq!(potion.name, "Health Potion");
    }

    #[test]
    fn test_unknown_id_fails() {
        let catalog = ItemCatalog::default();

        assert!(catalog.is_empty());
        assert!(catalog.get("ghost").is_err());
        assert!(catalog.get("").is_err());
        assert!(!catalog.contains("ghost"));
    }

    #[test]
    fn test_blank_ids_skipped_and_last_wins() {
        let catalog = ItemCatalog::build([
            ItemDefinition::new("", "Nameless"),
            ItemDefinition::new("   ", "Blank"),
            ItemDefinition::new("potion", "Old Potion"),
            ItemDefinition::new("potion", "New Potion"),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("potion").unwrap().name, "New Potion");
    }

    #[test]
    fn test_shared_definitions() {
        let catalog = ItemCatalog::build([ItemDefinition::new("apple", "Apple")]);

        let first = catalog.get("apple").unwrap();
        let second = catalog.get("apple").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
