//! Inventory change notifications

use crate::inventory::Selection;

/// Inventory events
#[derive(Debug, Clone)]
pub enum InventoryEvent {
    /// Slot contents or equipped state changed
    Changed,
    /// Selection changed
    SelectionChanged {
        /// The new selection
        selection: Selection,
    },
    /// Equipped weapon changed
    EquippedWeaponChanged {
        /// Id of the new weapon, None when unequipped
        weapon_id: Option<String>,
    },
}

/// Listener callback signature
pub type InventoryCallback = Box<dyn Fn(&InventoryEvent) + Send + Sync>;

/// Handle returned by subscribe, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Listener registry owned by an inventory
pub(crate) struct Listeners {
    entries: Vec<(ListenerId, InventoryCallback)>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn subscribe(&mut self, callback: InventoryCallback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub(crate) fn emit(&self, event: &InventoryEvent) {
        for (_, callback) in &self.entries {
            callback(event);
        }
    }
}
