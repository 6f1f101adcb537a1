//! Ember Inventory - Player Inventory Engine
//!
//! This crate provides the slot-based player inventory.
//!
//! # Features
//!
//! - Fixed-capacity slot array with add/remove/move/swap/reorder
//! - Consumable stacking by item id
//! - Equipped weapon held outside the slot array
//! - Selection tracking across slot mutations
//! - Change listeners for UI and persistence layers
//! - Proximity pickups feeding the inventory
//!
//! # Example
//!
//! ```ignore
//! use ember_inventory::prelude::*;
//! use ember_items::prelude::*;
//!
//! let catalog = ItemCatalog::build([
//!     ItemDefinition::new("health_potion", "Health Potion"),
//!     ItemDefinition::new("iron_sword", "Iron Sword").with_kind(ItemKind::Weapon),
//! ]);
//!
//! let mut inventory = Inventory::new(12);
//! inventory.try_add(catalog.get("health_potion")?, 2)?;
//! inventory.try_add(catalog.get("iron_sword")?, 1)?;
//! inventory.try_equip_from_slot(1)?;
//! assert_eq!(inventory.equipped_weapon_id(), Some("iron_sword"));
//! ```

pub mod events;
pub mod inventory;
pub mod pickup;
pub mod slot;

pub mod prelude {
    pub use crate::events::{InventoryCallback, InventoryEvent, ListenerId};
    pub use crate::inventory::{Inventory, InventoryError, Selection};
    pub use crate::pickup::{ItemPickup, PickupError};
    pub use crate::slot::ItemStack;
}

pub use prelude::*;
