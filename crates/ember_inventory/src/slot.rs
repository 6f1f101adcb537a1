//! Slot contents

use ember_items::ItemDefinition;
use std::sync::Arc;

/// A stack of one item occupying a single slot
#[derive(Debug, Clone)]
pub struct ItemStack {
    /// Definition shared with the catalog
    pub item: Arc<ItemDefinition>,
    /// Number of items in the stack (always at least 1)
    pub count: u32,
}

impl ItemStack {
    /// Create a new stack
    pub fn new(item: Arc<ItemDefinition>, count: u32) -> Self {
        Self {
            item,
            count: count.max(1),
        }
    }

    /// Create a single-item stack
    pub fn single(item: Arc<ItemDefinition>) -> Self {
        Self::new(item, 1)
    }

    /// Id of the stacked item
    pub fn item_id(&self) -> &str {
        &self.item.id
    }
}
