//! rpg_core - Character stats, inventory and equipment for turn-based RPGs
//!
//! This library provides:
//! - StatsCollection: Layered stat values under stacking, timed modifiers
//! - Inventory: Fixed-capacity, stack-aware item storage
//! - EquipmentManager: Slot assignment with two-handed exclusivity and
//!   tier/rarity/set bonuses
//! - StatSource: Glue that re-injects equipment bonuses as stat modifiers
//!
//! None of these types are internally synchronized; an actor's trio is
//! meant to be owned and mutated by one writer.

pub mod config;
pub mod equipment;
pub mod inventory;
pub mod item;
pub mod prelude;
pub mod source;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use config::{default_class_templates, default_item_catalog, ClassTemplate, ConfigError, ItemCatalog};
pub use equipment::{EquipError, Equipment, EquipmentKind, EquipmentManager};
pub use inventory::{Inventory, InventoryError, InventorySlot};
pub use item::{Item, ItemRef};
pub use source::{StatSource, EQUIPMENT_SOURCE_ID};
pub use stats::{ModifierKind, ModifierPresets, StatModifier, StatValue, StatsCollection, StatsError};
pub use types::{ActorClass, EquipmentSlot, Rarity, StatKind, Tier, WeaponType};
