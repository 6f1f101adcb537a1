//! Proximity pickups feeding the inventory

use crate::inventory::{Inventory, InventoryError};
use ember_items::ItemDefinition;
use std::sync::Arc;
use thiserror::Error;

/// Pickup errors
#[derive(Debug, Error)]
pub enum PickupError {
    /// No collector in range
    #[error("No collector in range")]
    OutOfRange,
    /// Pickup was already collected
    #[error("Pickup already collected")]
    AlreadyCollected,
    /// Inventory rejected the item
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// A world item waiting to be collected
///
/// The proximity layer reports enter/exit; collection happens on an
/// explicit `try_collect` call, never by polling.
#[derive(Debug, Clone)]
pub struct ItemPickup {
    /// Item granted on collection
    item: Arc<ItemDefinition>,
    /// Amount granted on collection
    amount: u32,
    /// Whether a collector is currently in range
    in_range: bool,
    /// Whether the pickup has been collected
    collected: bool,
}

impl ItemPickup {
    /// Create a new pickup
    pub fn new(item: Arc<ItemDefinition>, amount: u32) -> Self {
        Self {
            item,
            amount: amount.max(1),
            in_range: false,
            collected: false,
        }
    }

    /// Item granted on collection
    pub fn item(&self) -> &Arc<ItemDefinition> {
        &self.item
    }

    /// Amount granted on collection
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Whether a collector is currently in range
    pub fn in_range(&self) -> bool {
        self.in_range
    }

    /// Whether the pickup has been collected
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark a collector as having entered range
    ///
    /// Collected pickups are inert and stay out of range.
    pub fn on_proximity_enter(&mut self) {
        if !self.collected {
            self.in_range = true;
        }
    }

    /// Mark the collector as having left range
    pub fn on_proximity_exit(&mut self) {
        self.in_range = false;
    }

    /// Collect into an inventory
    ///
    /// The pickup stays available unless the add succeeded, so a full
    /// inventory leaves it in the world.
    pub fn try_collect(&mut self, inventory: &mut Inventory) -> Result<(), PickupError> {
        if self.collected {
            return Err(PickupError::AlreadyCollected);
        }
        if !self.in_range {
            return Err(PickupError::OutOfRange);
        }

        inventory.try_add(self.item.clone(), self.amount)?;
        self.collected = true;
        self.in_range = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_items::ItemKind;

    fn sword_pickup() -> ItemPickup {
        let sword =
            Arc::new(ItemDefinition::new("iron_sword", "Iron Sword").with_kind(ItemKind::Weapon));
        ItemPickup::new(sword, 1)
    }

    #[test]
    fn test_collect_requires_range() {
        let mut inv = Inventory::new(4);
        let mut pickup = sword_pickup();

        assert!(matches!(
            pickup.try_collect(&mut inv),
            Err(PickupError::OutOfRange)
        ));

        pickup.on_proximity_enter();
        pickup.try_collect(&mut inv).unwrap();

        assert!(pickup.is_collected());
        assert!(inv.has_item("iron_sword"));
    }

    #[test]
    fn test_collect_only_once() {
        let mut inv = Inventory::new(4);
        let mut pickup = sword_pickup();

        pickup.on_proximity_enter();
        pickup.try_collect(&mut inv).unwrap();

        pickup.on_proximity_enter();
        assert!(!pickup.in_range());
        assert!(matches!(
            pickup.try_collect(&mut inv),
            Err(PickupError::AlreadyCollected)
        ));
        assert_eq!(inv.used_slots(), 1);
    }

    #[test]
    fn test_full_inventory_leaves_pickup_available() {
        let mut inv = Inventory::new(1);
        inv.try_add(
            Arc::new(ItemDefinition::new("war_axe", "War Axe").with_kind(ItemKind::Weapon)),
            1,
        )
        .unwrap();

        let mut pickup = sword_pickup();
        pickup.on_proximity_enter();

        assert!(matches!(
            pickup.try_collect(&mut inv),
            Err(PickupError::Inventory(InventoryError::Full))
        ));
        assert!(!pickup.is_collected());
        assert!(pickup.in_range());
    }

    #[test]
    fn test_exit_after_collection_is_noop() {
        let mut pickup = sword_pickup();

        pickup.on_proximity_enter();
        pickup.on_proximity_exit();
        assert!(!pickup.in_range());
    }
}
