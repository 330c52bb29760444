//! Item catalog loading

use super::ConfigError;
use crate::equipment::{Equipment, EquipmentKind};
use crate::item::{Item, ItemRef};
use crate::types::{ActorClass, EquipmentSlot, Rarity, Tier, WeaponType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Equipment section of an item entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EquipmentDef {
    slot: EquipmentSlot,
    tier: Tier,
    rarity: Rarity,
    #[serde(default)]
    weapon_type: Option<WeaponType>,
    #[serde(default)]
    required_level: i32,
    #[serde(default)]
    allowed_classes: Vec<ActorClass>,
    #[serde(default)]
    requirements_optional: bool,
}

/// One `[[items]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemDef {
    id: String,
    name: String,
    #[serde(default)]
    stackable: bool,
    #[serde(default = "default_max_stack_size")]
    max_stack_size: u32,
    #[serde(default)]
    base_value: u32,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    equipment: Option<EquipmentDef>,
}

fn default_max_stack_size() -> u32 {
    1
}

/// Container for item definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemsConfig {
    items: Vec<ItemDef>,
}

impl ItemDef {
    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| Err(ConfigError::ValidationError(format!("{}: {}", self.id, reason)));

        if self.max_stack_size == 0 {
            return invalid("max_stack_size must be at least 1");
        }
        if !self.stackable && self.max_stack_size != 1 {
            return invalid("non-stackable items must have max_stack_size 1");
        }
        if self.stackable && self.equipment.is_some() {
            return invalid("equipment cannot stack");
        }
        if self.weight < 0.0 {
            return invalid("weight cannot be negative");
        }
        Ok(())
    }

    fn into_item(self) -> Item {
        let equipment = self.equipment.map(|def| {
            let kind = match def.weapon_type {
                Some(weapon_type) => EquipmentKind::Weapon { weapon_type },
                None if matches!(
                    def.slot,
                    EquipmentSlot::Neck | EquipmentSlot::Ring1 | EquipmentSlot::Ring2
                ) =>
                {
                    EquipmentKind::Accessory
                }
                None => EquipmentKind::Armor,
            };
            Equipment {
                id: self.id.clone(),
                name: self.name.clone(),
                slot: def.slot,
                tier: def.tier,
                rarity: def.rarity,
                kind,
                required_level: def.required_level,
                allowed_classes: def.allowed_classes,
                requirements_optional: def.requirements_optional,
            }
        });

        Item {
            id: self.id,
            name: self.name,
            stackable: self.stackable,
            max_stack_size: self.max_stack_size,
            base_value: self.base_value,
            weight: self.weight,
            equipment,
        }
    }
}

/// Item definitions keyed by id
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemRef>,
}

impl ItemCatalog {
    fn from_config(config: ItemsConfig) -> Result<Self, ConfigError> {
        let mut items = HashMap::new();
        for def in config.items {
            def.validate()?;
            let item = def.into_item().into_ref();
            if items.contains_key(&item.id) {
                return Err(ConfigError::ValidationError(format!("duplicate item id: {}", item.id)));
            }
            items.insert(item.id.clone(), item);
        }
        Ok(ItemCatalog { items })
    }

    /// Shared handle to an item definition
    pub fn get(&self, id: &str) -> Option<ItemRef> {
        self.items.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.items.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Wearable items, sorted by id
    pub fn equipment(&self) -> Vec<ItemRef> {
        let mut gear: Vec<ItemRef> = self
            .items
            .values()
            .filter(|item| item.equipment.is_some())
            .cloned()
            .collect();
        gear.sort_by(|a, b| a.id.cmp(&b.id));
        gear
    }
}

/// Load an item catalog from a TOML file
pub fn load_item_catalog(path: &Path) -> Result<ItemCatalog, ConfigError> {
    ItemCatalog::from_config(super::load_toml(path)?)
}

/// Load an item catalog from a TOML string
pub fn parse_item_catalog(content: &str) -> Result<ItemCatalog, ConfigError> {
    ItemCatalog::from_config(super::parse_toml(content)?)
}

/// Get the shipped item catalog
pub fn default_item_catalog() -> ItemCatalog {
    let toml = include_str!("../../config/items.toml");
    parse_item_catalog(toml).unwrap_or_else(|err| {
        warn!(%err, "shipped item catalog failed to load");
        ItemCatalog::default()
    })
}
