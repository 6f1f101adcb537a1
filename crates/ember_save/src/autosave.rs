//! Autosave binding

use crate::codec;
use crate::store::{SaveError, SaveStore};
use ember_inventory::{Inventory, InventoryEvent, ListenerId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tracks inventory changes and writes a snapshot on flush
///
/// Attach to an inventory, then call `flush` at convenient points (level
/// transitions, quit). Selection changes are not persisted and do not
/// mark the state dirty.
pub struct Autosave {
    listener: ListenerId,
    dirty: Arc<AtomicBool>,
}

impl Autosave {
    /// Subscribe to an inventory's change events
    pub fn attach(inventory: &mut Inventory) -> Self {
        let dirty = Arc::new(AtomicBool::new(false));
        let flag = dirty.clone();
        let listener = inventory.subscribe(Box::new(move |event| match event {
            InventoryEvent::Changed | InventoryEvent::EquippedWeaponChanged { .. } => {
                flag.store(true, Ordering::SeqCst);
            }
            InventoryEvent::SelectionChanged { .. } => {}
        }));

        Self { listener, dirty }
    }

    /// Check if unsaved changes exist
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Force the next flush to write
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Write a snapshot if anything changed since the last flush
    ///
    /// Returns whether a save was written.
    pub fn flush(&self, inventory: &Inventory, store: &SaveStore) -> Result<bool, SaveError> {
        if !self.is_dirty() {
            return Ok(false);
        }

        store.save(&codec::snapshot(inventory))?;
        self.dirty.store(false, Ordering::SeqCst);
        Ok(true)
    }

    /// Unsubscribe from the inventory
    pub fn detach(self, inventory: &mut Inventory) {
        inventory.unsubscribe(self.listener);
    }
}
