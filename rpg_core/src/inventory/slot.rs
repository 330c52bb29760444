//! InventorySlot - One storage cell

use crate::item::ItemRef;
use serde::{Deserialize, Serialize};

/// One storage cell of an inventory
///
/// Holds an item exactly when its quantity is non-zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySlot {
    pub index: usize,
    item: Option<ItemRef>,
    quantity: u32,
}

impl InventorySlot {
    pub(crate) fn empty(index: usize) -> Self {
        InventorySlot {
            index,
            item: None,
            quantity: 0,
        }
    }

    pub fn item(&self) -> Option<&ItemRef> {
        self.item.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Whether this slot holds the item with the given id
    pub fn holds(&self, item_id: &str) -> bool {
        self.item.as_ref().is_some_and(|item| item.id == item_id)
    }

    /// Units this slot can still accept of its current item
    pub fn free_space(&self) -> u32 {
        match &self.item {
            Some(item) => item.stack_limit().saturating_sub(self.quantity),
            None => 0,
        }
    }

    /// Holds an item exactly when non-empty, within the item's stack limit
    pub(crate) fn is_consistent(&self) -> bool {
        match &self.item {
            Some(item) => self.quantity > 0 && self.quantity <= item.stack_limit(),
            None => self.quantity == 0,
        }
    }

    /// Place `quantity` units of `item` into an empty slot
    pub(crate) fn fill(&mut self, item: ItemRef, quantity: u32) {
        debug_assert!(self.is_empty() && quantity > 0);
        self.item = Some(item);
        self.quantity = quantity;
    }

    pub(crate) fn grow(&mut self, quantity: u32) {
        self.quantity += quantity;
    }

    /// Take up to `quantity` units, emptying the slot when it reaches zero
    /// Returns how many units were taken
    pub(crate) fn take(&mut self, quantity: u32) -> u32 {
        let taken = quantity.min(self.quantity);
        self.quantity -= taken;
        if self.quantity == 0 {
            self.item = None;
        }
        taken
    }

    pub(crate) fn clear(&mut self) {
        self.item = None;
        self.quantity = 0;
    }
}
