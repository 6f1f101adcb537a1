//! Ember Save - Inventory Persistence
//!
//! This crate persists player inventory state.
//!
//! # Features
//!
//! - Snapshot schema decoupled from the live engine types
//! - Codec between inventories and snapshots
//! - Entry-wise recovery from corrupt snapshots
//! - JSON and binary save files
//! - Dirty-flag autosave binding
//!
//! # Example
//!
//! ```ignore
//! use ember_save::prelude::*;
//!
//! let store = SaveStore::new("saves/inventory.json");
//! store.save(&codec::snapshot(&inventory))?;
//!
//! let restored = store
//!     .try_load()
//!     .map(|snap| codec::restore(&snap, &catalog, 16))
//!     .unwrap_or_else(|| Inventory::new(16));
//! ```

pub mod autosave;
pub mod codec;
pub mod snapshot;
pub mod store;

pub mod prelude {
    pub use crate::autosave::Autosave;
    pub use crate::codec;
    pub use crate::snapshot::{InventorySnapshot, SlotRecord};
    pub use crate::store::{SaveError, SaveFormat, SaveStore};
}

pub use prelude::*;
