//! Item definitions shared by inventories and equipment

use crate::equipment::Equipment;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared, non-owning handle to an item definition
///
/// Inventories hold counts of items, never the definitions themselves.
pub type ItemRef = Arc<Item>;

/// Immutable item definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identity used for stacking and removal
    pub id: String,
    pub name: String,
    pub stackable: bool,
    /// Units per slot for stackable items
    pub max_stack_size: u32,
    /// Gold value per unit
    pub base_value: u32,
    /// Weight per unit
    pub weight: f64,
    /// Present when the item can be worn
    #[serde(default)]
    pub equipment: Option<Equipment>,
}

impl Item {
    /// Create a non-stackable, weightless, worthless item
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            stackable: false,
            max_stack_size: 1,
            base_value: 0,
            weight: 0.0,
            equipment: None,
        }
    }

    /// Make the item stackable up to `max_stack_size` per slot
    pub fn stackable(mut self, max_stack_size: u32) -> Self {
        self.stackable = true;
        self.max_stack_size = max_stack_size;
        self
    }

    pub fn with_value(mut self, base_value: u32) -> Self {
        self.base_value = base_value;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Attach an equipment profile; worn items never stack
    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.stackable = false;
        self.max_stack_size = 1;
        self.equipment = Some(equipment);
        self
    }

    /// Units one slot can hold (1 for non-stackable items)
    pub fn stack_limit(&self) -> u32 {
        if self.stackable {
            self.max_stack_size.max(1)
        } else {
            1
        }
    }

    pub fn into_ref(self) -> ItemRef {
        Arc::new(self)
    }
}
