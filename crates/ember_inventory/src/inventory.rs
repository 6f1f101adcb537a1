//! Player inventory engine

use crate::events::{InventoryCallback, InventoryEvent, ListenerId, Listeners};
use crate::slot::ItemStack;
use ember_items::{ItemDefinition, ItemKind};
use std::sync::Arc;
use thiserror::Error;

/// Inventory operation errors
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Slot index outside the slot array
    #[error("Slot index {0} out of bounds")]
    OutOfBounds(usize),
    /// Operation requires a non-empty slot
    #[error("Slot {0} is empty")]
    EmptySlot(usize),
    /// Operation requires an empty destination slot
    #[error("Slot {0} is occupied")]
    OccupiedSlot(usize),
    /// Source and destination are the same slot
    #[error("Source and destination are both slot {0}")]
    SameSlot(usize),
    /// No empty slot available
    #[error("Inventory is full")]
    Full,
    /// Amount must be at least 1
    #[error("Amount must be at least 1")]
    ZeroAmount,
    /// Item id is blank
    #[error("Item id is blank")]
    BlankItemId,
    /// Operation requires a weapon
    #[error("Item {0} is not a weapon")]
    NotAWeapon(String),
    /// No weapon is equipped
    #[error("No weapon equipped")]
    NothingEquipped,
    /// No slot or weapon selected
    #[error("Nothing selected")]
    NothingSelected,
}

/// What the player currently has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Nothing selected
    None,
    /// The equipped weapon pseudo-slot
    EquippedWeapon,
    /// A slot in the array
    Slot(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Self::None
    }
}

/// Player inventory component
///
/// A fixed array of slots plus the equipped weapon, which lives outside
/// the array and never occupies a slot. Mutations go through the `try_*`
/// operations; every successful mutation notifies subscribed listeners
/// after the state has settled.
pub struct Inventory {
    /// Inventory slots (None = empty)
    slots: Vec<Option<ItemStack>>,
    /// Current selection
    selection: Selection,
    /// Equipped weapon, held outside the slot array
    equipped_weapon: Option<Arc<ItemDefinition>>,
    /// Change listeners
    listeners: Listeners,
}

impl Inventory {
    /// Create a new inventory with the given number of slots (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            selection: Selection::None,
            equipped_weapon: None,
            listeners: Listeners::new(),
        }
    }

    /// Create an inventory pre-filled from the start of the slot array
    ///
    /// Stacks beyond capacity are dropped.
    pub fn from_stacks(capacity: usize, stacks: Vec<ItemStack>) -> Self {
        let mut inventory = Self::new(capacity);
        for (slot, stack) in inventory.slots.iter_mut().zip(stacks) {
            *slot = Some(stack);
        }
        inventory
    }

    /// Set the equipped weapon
    ///
    /// Items that are not weapons are ignored.
    pub fn with_equipped_weapon(mut self, item: Arc<ItemDefinition>) -> Self {
        if item.is_weapon() {
            self.equipped_weapon = Some(item);
        } else {
            log::warn!("Refusing to equip non-weapon item {}", item.id);
        }
        self
    }

    /// Get inventory capacity
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get slot contents
    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index)?.as_ref()
    }

    /// All slots in order (None = empty)
    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Currently equipped weapon
    pub fn equipped_weapon(&self) -> Option<&Arc<ItemDefinition>> {
        self.equipped_weapon.as_ref()
    }

    /// Id of the currently equipped weapon
    pub fn equipped_weapon_id(&self) -> Option<&str> {
        self.equipped_weapon.as_deref().map(|item| item.id.as_str())
    }

    /// Check if a weapon is equipped
    pub fn has_equipped_weapon(&self) -> bool {
        self.equipped_weapon.is_some()
    }

    /// Get number of used slots
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Get number of free slots
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.used_slots()
    }

    /// Check if all slots are occupied
    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    /// Check if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.used_slots() == 0
    }

    /// Find first empty slot
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Find first slot containing the given item
    pub fn find_item(&self, item_id: &str) -> Option<usize> {
        self.slots.iter().position(|s| {
            s.as_ref()
                .map(|stack| stack.item_id() == item_id)
                .unwrap_or(false)
        })
    }

    /// Check if any slot holds the given item
    pub fn has_item(&self, item_id: &str) -> bool {
        if item_id.trim().is_empty() {
            return false;
        }
        self.find_item(item_id).is_some()
    }

    /// Register a change listener
    pub fn subscribe(&mut self, callback: InventoryCallback) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Remove a previously registered listener
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.unsubscribe(id);
    }

    /// Change the selection
    ///
    /// Requests that reference an out-of-range or empty slot are ignored,
    /// as is re-selecting the current selection.
    pub fn select(&mut self, selection: Selection) {
        if let Selection::Slot(index) = selection {
            match self.slots.get(index) {
                Some(Some(_)) => {}
                _ => return,
            }
        }
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.emit_selection_changed();
    }

    /// Add an item to the inventory
    ///
    /// Consumables merge into an existing stack of the same id; everything
    /// else goes to the first empty slot.
    pub fn try_add(
        &mut self,
        item: Arc<ItemDefinition>,
        amount: u32,
    ) -> Result<(), InventoryError> {
        if item.id.trim().is_empty() {
            return Err(InventoryError::BlankItemId);
        }
        if amount == 0 {
            return Err(InventoryError::ZeroAmount);
        }

        if item.is_stackable() {
            if let Some(index) = self.find_item(&item.id) {
                if let Some(stack) = self.slots[index].as_mut() {
                    stack.count = stack.count.saturating_add(amount);
                }
                self.emit_changed();
                return Ok(());
            }
        }

        let index = self.find_empty_slot().ok_or(InventoryError::Full)?;
        self.slots[index] = Some(ItemStack::new(item, amount));
        self.emit_changed();
        Ok(())
    }

    /// Move a stack to an empty slot
    pub fn try_move(&mut self, from: usize, to: usize) -> Result<(), InventoryError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Err(InventoryError::SameSlot(from));
        }
        if self.slots[from].is_none() {
            return Err(InventoryError::EmptySlot(from));
        }
        if self.slots[to].is_some() {
            return Err(InventoryError::OccupiedSlot(to));
        }

        self.slots[to] = self.slots[from].take();
        if self.selection == Selection::Slot(from) {
            self.selection = Selection::Slot(to);
        }
        self.emit_changed();
        Ok(())
    }

    /// Remove up to `amount` items from a slot
    ///
    /// The amount is clamped to what the slot holds (minimum 1). Returns
    /// the number of items actually removed. Slots are compacted afterwards
    /// so no gap precedes an occupied slot.
    pub fn try_remove_at(&mut self, index: usize, amount: u32) -> Result<u32, InventoryError> {
        self.check_index(index)?;
        let mut stack = self.slots[index]
            .take()
            .ok_or(InventoryError::EmptySlot(index))?;

        let removed = amount.clamp(1, stack.count);
        stack.count -= removed;
        if stack.count > 0 {
            self.slots[index] = Some(stack);
        }
        self.compact();

        self.clear_selection_if_empty();
        self.emit_changed();
        Ok(removed)
    }

    /// Move a stack to a new position, shifting the slots between
    pub fn try_reorder(&mut self, from: usize, to: usize) -> Result<(), InventoryError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Err(InventoryError::SameSlot(from));
        }
        if self.slots[from].is_none() {
            return Err(InventoryError::EmptySlot(from));
        }

        let moved = self.slots[from].take();
        if from < to {
            for i in from..to {
                self.slots[i] = self.slots[i + 1].take();
            }
        } else {
            for i in (to..from).rev() {
                self.slots[i + 1] = self.slots[i].take();
            }
        }
        self.slots[to] = moved;

        if self.selection == Selection::Slot(from) {
            self.selection = Selection::Slot(to);
        }
        self.clear_selection_if_empty();
        self.emit_changed();
        Ok(())
    }

    /// Swap the contents of two slots
    ///
    /// Swapping two empty slots is allowed and still counts as a change.
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<(), InventoryError> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a == b {
            return Err(InventoryError::SameSlot(a));
        }

        self.slots.swap(a, b);
        self.selection = match self.selection {
            Selection::Slot(index) if index == a => Selection::Slot(b),
            Selection::Slot(index) if index == b => Selection::Slot(a),
            other => other,
        };
        self.emit_changed();
        Ok(())
    }

    /// Use or equip whatever is selected
    ///
    /// Consumables are consumed one at a time, weapons are equipped. With
    /// the equipped weapon selected this unequips it.
    pub fn try_use_or_equip_selected(&mut self) -> Result<(), InventoryError> {
        match self.selection {
            Selection::EquippedWeapon => self.try_unequip_weapon(),
            Selection::Slot(index) => {
                self.check_index(index)?;
                let kind = self.slots[index]
                    .as_ref()
                    .ok_or(InventoryError::EmptySlot(index))?
                    .item
                    .kind;
                match kind {
                    ItemKind::Consumable => self.try_remove_at(index, 1).map(|_| ()),
                    ItemKind::Weapon => self.try_equip_from_slot(index),
                }
            }
            Selection::None => Err(InventoryError::NothingSelected),
        }
    }

    /// Equip a weapon from a slot
    ///
    /// A previously equipped weapon goes to the first empty slot; the whole
    /// operation fails without changes when no slot can receive it.
    pub fn try_equip_from_slot(&mut self, index: usize) -> Result<(), InventoryError> {
        self.check_index(index)?;
        let stack = self.slots[index]
            .as_ref()
            .ok_or(InventoryError::EmptySlot(index))?;
        if !stack.item.is_weapon() {
            return Err(InventoryError::NotAWeapon(stack.item.id.clone()));
        }
        let item = stack.item.clone();

        if let Some(old) = self.equipped_weapon.clone() {
            let empty = self.find_empty_slot().ok_or(InventoryError::Full)?;
            self.slots[empty] = Some(ItemStack::single(old));
        }

        if let Some(mut stack) = self.slots[index].take() {
            stack.count -= 1;
            if stack.count > 0 {
                self.slots[index] = Some(stack);
            }
        }
        self.equipped_weapon = Some(item);

        if self.selection == Selection::Slot(index) {
            self.select(Selection::None);
        }
        self.emit_changed();
        self.emit_equipped_changed();
        Ok(())
    }

    /// Return the equipped weapon to the first empty slot
    pub fn try_unequip_weapon(&mut self) -> Result<(), InventoryError> {
        let weapon = self
            .equipped_weapon
            .clone()
            .ok_or(InventoryError::NothingEquipped)?;
        let empty = self.find_empty_slot().ok_or(InventoryError::Full)?;

        self.slots[empty] = Some(ItemStack::single(weapon));
        self.equipped_weapon = None;

        if self.selection == Selection::EquippedWeapon {
            self.select(Selection::None);
        }
        self.emit_changed();
        self.emit_equipped_changed();
        Ok(())
    }

    /// Empty every slot and unequip
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.equipped_weapon = None;
        self.select(Selection::None);
        self.emit_changed();
        self.emit_equipped_changed();
    }

    fn check_index(&self, index: usize) -> Result<(), InventoryError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(InventoryError::OutOfBounds(index))
        }
    }

    /// Shift occupied slots left, preserving their relative order
    fn compact(&mut self) {
        let mut write = 0;
        for read in 0..self.slots.len() {
            if self.slots[read].is_some() {
                if read != write {
                    self.slots[write] = self.slots[read].take();
                }
                write += 1;
            }
        }
    }

    fn clear_selection_if_empty(&mut self) {
        if let Selection::Slot(index) = self.selection {
            if self.slots[index].is_none() {
                self.select(Selection::None);
            }
        }
    }

    fn emit_changed(&self) {
        self.listeners.emit(&InventoryEvent::Changed);
    }

    fn emit_selection_changed(&self) {
        self.listeners.emit(&InventoryEvent::SelectionChanged {
            selection: self.selection,
        });
    }

    fn emit_equipped_changed(&self) {
        self.listeners.emit(&InventoryEvent::EquippedWeaponChanged {
            weapon_id: self.equipped_weapon_id().map(str::to_owned),
        });
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(16)
    }
}

// Manual Debug implementation (skip listeners)
impl std::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("slots", &self.slots)
            .field("selection", &self.selection)
            .field("equipped_weapon", &self.equipped_weapon)
            .finish()
    }
}
