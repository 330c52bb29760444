//! Inventory - Fixed-capacity, stack-aware item storage

mod slot;

pub use slot::InventorySlot;

use crate::item::ItemRef;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Inventory misuse error
///
/// Ordinary outcomes (full inventory, missing items) are reported as
/// `false`/`None`/`0`, not as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Inventory capacity must be positive")]
    InvalidCapacity,
    #[error("Slot {index} out of range for capacity {capacity}")]
    SlotOutOfRange { index: usize, capacity: usize },
    #[error("Source and destination are the same slot: {0}")]
    SameSlot(usize),
    #[error("Slot {index} has inconsistent contents")]
    CorruptSlot { index: usize },
}

/// A fixed array of slots with stacking-aware placement
///
/// The slot count is fixed at construction. Usage, value and weight totals
/// are always derived from slot contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InventoryData")]
pub struct Inventory {
    slots: Vec<InventorySlot>,
}

/// Unchecked serialized form, validated into an [`Inventory`]
#[derive(Deserialize)]
struct InventoryData {
    slots: Vec<InventorySlot>,
}

impl TryFrom<InventoryData> for Inventory {
    type Error = InventoryError;

    fn try_from(data: InventoryData) -> Result<Self, Self::Error> {
        if data.slots.is_empty() {
            return Err(InventoryError::InvalidCapacity);
        }
        for (position, slot) in data.slots.iter().enumerate() {
            if slot.index != position || !slot.is_consistent() {
                return Err(InventoryError::CorruptSlot { index: position });
            }
        }
        Ok(Inventory { slots: data.slots })
    }
}

impl Inventory {
    /// Create an empty inventory with `capacity` slots
    pub fn new(capacity: usize) -> Result<Self, InventoryError> {
        if capacity == 0 {
            return Err(InventoryError::InvalidCapacity);
        }
        Ok(Inventory {
            slots: (0..capacity).map(InventorySlot::empty).collect(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&InventorySlot, InventoryError> {
        self.slots.get(index).ok_or(InventoryError::SlotOutOfRange {
            index,
            capacity: self.capacity(),
        })
    }

    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn free_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_empty()).count()
    }

    /// Gold value of everything held
    pub fn total_value(&self) -> u64 {
        self.slots
            .iter()
            .filter_map(|slot| slot.item().map(|item| item.base_value as u64 * slot.quantity() as u64))
            .sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.slots
            .iter()
            .filter_map(|slot| slot.item().map(|item| item.weight * slot.quantity() as f64))
            .sum()
    }

    /// Check, without mutating, whether `quantity` units of `item` fit
    ///
    /// Existing stacks of the same item are topped up first; the remainder
    /// needs `ceil(remainder / stack_limit)` empty slots.
    pub fn can_add(&self, item: &ItemRef, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        let limit = item.stack_limit();

        let stack_space: u64 = self
            .slots
            .iter()
            .filter(|slot| slot.holds(&item.id))
            .map(|slot| limit.saturating_sub(slot.quantity()) as u64)
            .sum();

        let remainder = (quantity as u64).saturating_sub(stack_space);
        let slots_needed = remainder.div_ceil(limit as u64);
        slots_needed <= self.free_slots() as u64
    }

    /// Add `quantity` units of `item`, all or nothing
    ///
    /// Fills existing stacks in slot order, then empty slots in slot order.
    /// Returns false and leaves the inventory untouched if they don't fit.
    pub fn try_add(&mut self, item: &ItemRef, quantity: u32) -> bool {
        if !self.can_add(item, quantity) {
            trace!(item = %item.id, quantity, "item does not fit");
            return false;
        }
        let limit = item.stack_limit();
        let mut remaining = quantity;

        for slot in self.slots.iter_mut().filter(|slot| slot.holds(&item.id)) {
            if remaining == 0 {
                break;
            }
            let added = limit.saturating_sub(slot.quantity()).min(remaining);
            slot.grow(added);
            remaining -= added;
        }

        for slot in self.slots.iter_mut().filter(|slot| slot.is_empty()) {
            if remaining == 0 {
                break;
            }
            let added = remaining.min(limit);
            slot.fill(ItemRef::clone(item), added);
            remaining -= added;
        }

        debug!(item = %item.id, quantity, used = self.used_slots(), "added item");
        true
    }

    /// Remove `quantity` units of an item, all or nothing
    ///
    /// Drains matching slots in slot order. Returns false without mutating if
    /// fewer units are held than requested.
    pub fn try_remove(&mut self, item_id: &str, quantity: u32) -> bool {
        if quantity == 0 || self.total_quantity(item_id) < quantity as u64 {
            return false;
        }
        let mut remaining = quantity;
        for slot in self.slots.iter_mut().filter(|slot| slot.holds(item_id)) {
            if remaining == 0 {
                break;
            }
            remaining -= slot.take(remaining);
        }

        debug!(item = item_id, quantity, "removed item");
        true
    }

    /// First slot, by index, holding the item
    pub fn find_slot(&self, item_id: &str) -> Option<&InventorySlot> {
        self.slots.iter().find(|slot| slot.holds(item_id))
    }

    /// Units of the item held across all slots
    pub fn total_quantity(&self, item_id: &str) -> u64 {
        self.slots
            .iter()
            .filter(|slot| slot.holds(item_id))
            .map(|slot| slot.quantity() as u64)
            .sum()
    }

    pub fn contains(&self, item_id: &str, quantity: u32) -> bool {
        self.total_quantity(item_id) >= quantity as u64
    }

    /// Move units from one slot to another
    ///
    /// Moves `min(requested, room at destination)` units, where `None`
    /// requests the whole source stack. The destination must be empty or hold
    /// the same stackable item. Returns the number of units moved, which may be
    /// less than requested and is 0 when nothing could move.
    pub fn try_move_item(
        &mut self,
        from: usize,
        to: usize,
        quantity: Option<u32>,
    ) -> Result<u32, InventoryError> {
        let source = self.slot(from)?;
        let destination = self.slot(to)?;
        if from == to {
            return Err(InventoryError::SameSlot(from));
        }

        let Some(item) = source.item().cloned() else {
            return Ok(0);
        };
        let requested = quantity.unwrap_or(source.quantity()).min(source.quantity());

        let room = if destination.is_empty() {
            item.stack_limit()
        } else if !destination.holds(&item.id) || !item.stackable {
            return Ok(0);
        } else {
            destination.free_space()
        };

        let moved = requested.min(room);
        if moved == 0 {
            return Ok(0);
        }

        self.slots[from].take(moved);
        let destination = &mut self.slots[to];
        if destination.is_empty() {
            destination.fill(item, moved);
        } else {
            destination.grow(moved);
        }

        trace!(from, to, moved, "moved items between slots");
        Ok(moved)
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn potion() -> ItemRef {
        Item::new("potion", "Health Potion")
            .stackable(10)
            .with_value(5)
            .with_weight(0.5)
            .into_ref()
    }

    fn sword() -> ItemRef {
        Item::new("sword", "Iron Sword").with_value(40).with_weight(6.0).into_ref()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(Inventory::new(0).unwrap_err(), InventoryError::InvalidCapacity);
    }

    #[test]
    fn test_stacks_fill_then_reject_overflow() {
        let mut inv = Inventory::new(3).unwrap();
        let potion = potion();
        assert!(inv.try_add(&potion, 25));

        let quantities: Vec<u32> = inv.slots().iter().map(|s| s.quantity()).collect();
        assert_eq!(quantities, vec![10, 10, 5]);

        assert!(!inv.can_add(&potion, 6));
        assert!(!inv.try_add(&potion, 6));
        assert!(inv.try_add(&potion, 5));
        assert!(!inv.try_add(&potion, 1));
        assert_eq!(inv.total_quantity("potion"), 30);
    }

    #[test]
    fn test_failed_add_leaves_inventory_unchanged() {
        let mut inv = Inventory::new(3).unwrap();
        let potion = potion();
        assert!(inv.try_add(&potion, 25));

        assert!(!inv.try_add(&potion, 6));
        let quantities: Vec<u32> = inv.slots().iter().map(|s| s.quantity()).collect();
        assert_eq!(quantities, vec![10, 10, 5]);
    }

    #[test]
    fn test_zero_quantity_fails_closed() {
        let mut inv = Inventory::new(2).unwrap();
        assert!(!inv.can_add(&potion(), 0));
        assert!(!inv.try_add(&potion(), 0));
        assert!(!inv.try_remove("potion", 0));
    }

    #[test]
    fn test_non_stackable_needs_slot_per_unit() {
        let mut inv = Inventory::new(3).unwrap();
        let sword = sword();
        assert!(inv.can_add(&sword, 3));
        assert!(!inv.can_add(&sword, 4));
        assert!(inv.try_add(&sword, 2));
        assert_eq!(inv.used_slots(), 2);
        assert_eq!(inv.free_slots(), 1);
    }

    #[test]
    fn test_existing_stacks_topped_up_first() {
        let mut inv = Inventory::new(3).unwrap();
        let potion = potion();
        let sword = sword();
        assert!(inv.try_add(&sword, 1));
        assert!(inv.try_add(&potion, 4));
        assert!(inv.try_add(&potion, 8));

        assert_eq!(inv.slot(1).unwrap().quantity(), 10);
        assert_eq!(inv.slot(2).unwrap().quantity(), 2);
    }

    #[test]
    fn test_remove_drains_in_slot_order() {
        let mut inv = Inventory::new(3).unwrap();
        let potion = potion();
        assert!(inv.try_add(&potion, 25));

        assert!(!inv.try_remove("potion", 26));
        assert_eq!(inv.total_quantity("potion"), 25);

        assert!(inv.try_remove("potion", 12));
        assert!(inv.slot(0).unwrap().is_empty());
        assert_eq!(inv.slot(1).unwrap().quantity(), 8);
        assert_eq!(inv.slot(2).unwrap().quantity(), 5);
        assert_eq!(inv.find_slot("potion").unwrap().index, 1);
    }

    #[test]
    fn test_derived_totals() {
        let mut inv = Inventory::new(4).unwrap();
        assert!(inv.try_add(&potion(), 12));
        assert!(inv.try_add(&sword(), 1));

        assert_eq!(inv.total_value(), 12 * 5 + 40);
        assert!((inv.total_weight() - (12.0 * 0.5 + 6.0)).abs() < 0.0001);
        assert_eq!(inv.used_slots() + inv.free_slots(), inv.capacity());

        inv.clear();
        assert_eq!(inv.used_slots(), 0);
        assert_eq!(inv.total_value(), 0);
    }

    #[test]
    fn test_move_into_empty_slot() {
        let mut inv = Inventory::new(3).unwrap();
        assert!(inv.try_add(&potion(), 7));

        assert_eq!(inv.try_move_item(0, 2, Some(3)), Ok(3));
        assert_eq!(inv.slot(0).unwrap().quantity(), 4);
        assert_eq!(inv.slot(2).unwrap().quantity(), 3);

        assert_eq!(inv.try_move_item(0, 2, None), Ok(4));
        assert!(inv.slot(0).unwrap().is_empty());
        assert_eq!(inv.slot(2).unwrap().quantity(), 7);
    }

    #[test]
    fn test_move_partial_when_destination_nearly_full() {
        let mut inv = Inventory::new(2).unwrap();
        assert!(inv.try_add(&potion(), 18));

        // Slot 0 has 10, slot 1 has 8: only 0 fits into slot 0
        assert_eq!(inv.try_move_item(1, 0, None), Ok(0));
        assert!(inv.try_remove("potion", 3));

        // Slot 0 now has 7, slot 1 has 8: 3 fit
        assert_eq!(inv.try_move_item(1, 0, None), Ok(3));
        assert_eq!(inv.slot(0).unwrap().quantity(), 10);
        assert_eq!(inv.slot(1).unwrap().quantity(), 5);
    }

    #[test]
    fn test_move_rejections() {
        let mut inv = Inventory::new(3).unwrap();
        assert!(inv.try_add(&potion(), 1));
        assert!(inv.try_add(&sword(), 2));

        assert_eq!(
            inv.try_move_item(0, 5, None),
            Err(InventoryError::SlotOutOfRange { index: 5, capacity: 3 })
        );
        assert_eq!(inv.try_move_item(1, 1, None), Err(InventoryError::SameSlot(1)));

        // Different item at destination
        assert_eq!(inv.try_move_item(0, 1, None), Ok(0));
        // Non-stackable onto an occupied slot
        assert_eq!(inv.try_move_item(1, 2, None), Ok(0));

        assert!(inv.try_remove("sword", 2));
        // Empty source
        assert_eq!(inv.try_move_item(1, 2, None), Ok(0));
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_slots() {
        let mut inv = Inventory::new(2).unwrap();
        assert!(inv.try_add(&potion(), 4));
        let json = serde_json::to_string(&inv).unwrap();
        let restored: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.total_quantity("potion"), 4);

        assert!(serde_json::from_str::<Inventory>(r#"{"slots":[]}"#).is_err());

        let ghost = json.replacen(r#""quantity":4"#, r#""quantity":0"#, 1);
        assert_ne!(ghost, json);
        assert!(serde_json::from_str::<Inventory>(&ghost).is_err());

        let overfull = json.replacen(r#""quantity":4"#, r#""quantity":11"#, 1);
        assert!(serde_json::from_str::<Inventory>(&overfull).is_err());

        let phantom = r#"{"slots":[{"index":0,"item":null,"quantity":3}]}"#;
        assert!(serde_json::from_str::<Inventory>(phantom).is_err());

        let shuffled = r#"{"slots":[{"index":1,"item":null,"quantity":0}]}"#;
        assert!(serde_json::from_str::<Inventory>(shuffled).is_err());
    }
}
