//! Item definitions

use serde::{Deserialize, Serialize};

/// Item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Consumables (potions, food, etc.)
    Consumable,
    /// Weapons, equippable one at a time
    Weapon,
}

impl Default for ItemKind {
    fn default() -> Self {
        Self::Consumable
    }
}

/// Item definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Kind
    pub kind: ItemKind,
    /// Icon path
    pub icon: String,
}

impl ItemDefinition {
    /// Create a new item definition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind: ItemKind::default(),
            icon: String::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set kind
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set icon path
    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.icon = path.into();
        self
    }

    /// Check if same-id copies merge into a single stack
    pub fn is_stackable(&self) -> bool {
        self.kind == ItemKind::Consumable
    }

    /// Check if the item can be equipped
    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_definition() {
        let item = ItemDefinition::new("health_potion", "Health Potion")
            .with_description("Restores a sliver of health")
            .with_icon("icons/health_potion.png");

        assert_eq!(item.id, "health_potion");
        assert_eq!(item.kind, ItemKind::Consumable);
        assert!(item.is_stackable());
        assert!(!item.is_weapon());
    }

    #[test]
    fn test_weapon_definition() {
        let sword = ItemDefinition::new("iron_sword", "Iron Sword").with_kind(ItemKind::Weapon);

        assert!(sword.is_weapon());
        assert!(!sword.is_stackable());
    }
}
