//! Prelude module for convenient imports
//!
//! ```rust
//! use rpg_core::prelude::*;
//! ```

// Stats
pub use crate::stats::{ModifierKind, ModifierPresets, StatModifier, StatValue, StatsCollection};

// Inventory
pub use crate::inventory::{Inventory, InventorySlot};
pub use crate::item::{Item, ItemRef};

// Equipment
pub use crate::equipment::{Equipment, EquipmentManager};

// Sources
pub use crate::source::{StatSource, EQUIPMENT_SOURCE_ID};

// Shared enums
pub use crate::types::{ActorClass, EquipmentSlot, Rarity, StatKind, Tier, WeaponType};
