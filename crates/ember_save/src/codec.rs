//! Conversions between live inventories and snapshots

use crate::snapshot::{InventorySnapshot, SlotRecord};
use ember_inventory::{Inventory, ItemStack};
use ember_items::ItemCatalog;

/// Capture a snapshot of an inventory
///
/// Occupied slots are recorded in slot order; the selection is not
/// persisted.
pub fn snapshot(inventory: &Inventory) -> InventorySnapshot {
    let slots = inventory
        .slots()
        .iter()
        .flatten()
        .filter(|stack| !stack.item_id().trim().is_empty())
        .map(|stack| SlotRecord::new(stack.item_id(), i64::from(stack.count)))
        .collect();

    InventorySnapshot {
        slots,
        equipped_weapon_id: inventory.equipped_weapon_id().map(str::to_owned),
    }
}

/// Rebuild an inventory from a snapshot
///
/// Entries that cannot be restored (blank id, non-positive amount, id
/// missing from the catalog) are skipped with a warning; the rest fill
/// consecutive slots until capacity runs out. An equipped id that does
/// not resolve to a weapon is dropped. Nothing is selected afterwards.
pub fn restore(snapshot: &InventorySnapshot, catalog: &ItemCatalog, capacity: usize) -> Inventory {
    let capacity = capacity.max(1);
    let mut stacks = Vec::new();

    for record in &snapshot.slots {
        if stacks.len() >= capacity {
            log::warn!(
                "Snapshot has more entries than slots, keeping the first {}",
                capacity
            );
            break;
        }
        if record.item_id.trim().is_empty() {
            log::warn!("Skipping snapshot entry with blank item id");
            continue;
        }
        let amount = match u32::try_from(record.amount) {
            Ok(amount) if amount > 0 => amount,
            _ => {
                log::warn!(
                    "Skipping snapshot entry {} with invalid amount {}",
                    record.item_id,
                    record.amount
                );
                continue;
            }
        };
        match catalog.get(&record.item_id) {
            Ok(item) => stacks.push(ItemStack::new(item, amount)),
            Err(err) => log::warn!("Skipping snapshot entry: {}", err),
        }
    }

    let mut inventory = Inventory::from_stacks(capacity, stacks);

    if let Some(id) = snapshot
        .equipped_weapon_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
    {
        match catalog.get(id) {
            Ok(item) if item.is_weapon() => {
                inventory = inventory.with_equipped_weapon(item);
            }
            Ok(_) => log::warn!("Saved equipped item {} is not a weapon, ignoring", id),
            Err(err) => log::warn!("Saved equipped weapon not restored: {}", err),
        }
    }

    inventory
}
