//! Snapshot schema for saved inventories

use serde::{Deserialize, Serialize};

/// One occupied slot in a saved inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    /// Item id, resolved against the catalog on restore
    pub item_id: String,
    /// Stack count
    ///
    /// Signed on the wire so out-of-range values still parse; restore
    /// skips anything that is not a positive count.
    pub amount: i64,
}

impl SlotRecord {
    /// Create a new record
    pub fn new(item_id: impl Into<String>, amount: i64) -> Self {
        Self {
            item_id: item_id.into(),
            amount,
        }
    }
}

/// Saved inventory state
///
/// Occupied slots in slot order plus the equipped weapon id. Empty slot
/// positions and the selection are not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    /// Occupied slots, in slot order
    #[serde(default)]
    pub slots: Vec<SlotRecord>,
    /// Id of the equipped weapon, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipped_weapon_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let snapshot = InventorySnapshot {
            slots: vec![SlotRecord::new("health_potion", 3)],
            equipped_weapon_id: Some("iron_sword".to_string()),
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "slots": [{"itemId": "health_potion", "amount": 3}],
                "equippedWeaponId": "iron_sword",
            })
        );
    }

    #[test]
    fn test_absent_weapon_is_omitted() {
        let snapshot = InventorySnapshot::default();

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("equippedWeaponId"));
    }

    #[test]
    fn test_lenient_parsing() {
        // Missing fields and negative amounts still parse
        let snapshot: InventorySnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.slots.is_empty());
        assert!(snapshot.equipped_weapon_id.is_none());

        let snapshot: InventorySnapshot =
            serde_json::from_str(r#"{"slots":[{"itemId":"x","amount":-4}]}"#).unwrap();
        assert_eq!(snapshot.slots[0].amount, -4);
    }
}
