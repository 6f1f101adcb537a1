//! Ember Items - Item Definitions and Catalog
//!
//! This crate provides the item data layer for Ember.
//!
//! # Features
//!
//! - Item definitions with kind-driven stacking rules
//! - Read-only catalog keyed by item id
//! - Shared definitions (`Arc`) referenced by inventory slots
//!
//! # Example
//!
//! ```ignore
//! use ember_items::prelude::*;
//!
//! let catalog = ItemCatalog::build([
//!     ItemDefinition::new("health_potion", "Health Potion"),
//!     ItemDefinition::new("iron_sword", "Iron Sword").with_kind(ItemKind::Weapon),
//! ]);
//!
//! let potion = catalog.get("health_potion")?;
//! assert!(potion.is_stackable());
//! ```

pub mod catalog;
pub mod item;

pub mod prelude {
    pub use crate::catalog::{CatalogError, ItemCatalog};
    pub use crate::item::{ItemDefinition, ItemKind};
}

pub use prelude::*;
