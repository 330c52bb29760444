//! Equipment - Wearable item profiles

use crate::types::{ActorClass, EquipmentSlot, Rarity, Tier, WeaponType};
use serde::{Deserialize, Serialize};

/// What kind of wearable an equipment piece is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EquipmentKind {
    Armor,
    Weapon { weapon_type: WeaponType },
    Accessory,
}

/// A wearable piece bound to one equipment slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub slot: EquipmentSlot,
    pub tier: Tier,
    pub rarity: Rarity,
    pub kind: EquipmentKind,
    #[serde(default)]
    pub required_level: i32,
    /// Classes allowed to wear this; empty means any class
    #[serde(default)]
    pub allowed_classes: Vec<ActorClass>,
    /// Skip level and class checks entirely
    #[serde(default)]
    pub requirements_optional: bool,
}

impl Equipment {
    /// Create a piece of armor with no requirements
    pub fn armor(
        id: impl Into<String>,
        name: impl Into<String>,
        slot: EquipmentSlot,
        tier: Tier,
        rarity: Rarity,
    ) -> Self {
        Equipment {
            id: id.into(),
            name: name.into(),
            slot,
            tier,
            rarity,
            kind: EquipmentKind::Armor,
            required_level: 0,
            allowed_classes: Vec::new(),
            requirements_optional: false,
        }
    }

    /// Create a main hand weapon with no requirements
    pub fn weapon(
        id: impl Into<String>,
        name: impl Into<String>,
        weapon_type: WeaponType,
        tier: Tier,
        rarity: Rarity,
    ) -> Self {
        Equipment {
            kind: EquipmentKind::Weapon { weapon_type },
            ..Self::armor(id, name, EquipmentSlot::MainHand, tier, rarity)
        }
    }

    pub fn in_slot(mut self, slot: EquipmentSlot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_required_level(mut self, level: i32) -> Self {
        self.required_level = level;
        self
    }

    pub fn with_allowed_classes(mut self, classes: &[ActorClass]) -> Self {
        self.allowed_classes = classes.to_vec();
        self
    }

    pub fn requirements_optional(mut self) -> Self {
        self.requirements_optional = true;
        self
    }

    pub fn weapon_type(&self) -> Option<WeaponType> {
        match self.kind {
            EquipmentKind::Weapon { weapon_type } => Some(weapon_type),
            _ => None,
        }
    }

    pub fn is_two_handed(&self) -> bool {
        self.weapon_type().is_some_and(WeaponType::is_two_handed)
    }

    /// Whether an actor of this level and class may wear the piece
    pub fn meets_requirements(&self, level: i32, class: ActorClass) -> bool {
        if self.requirements_optional {
            return true;
        }
        if level < self.required_level {
            return false;
        }
        self.allowed_classes.is_empty() || self.allowed_classes.contains(&class)
    }
}
