//! Core enums shared by the stats, inventory and equipment modules

use serde::{Deserialize, Serialize};

/// A named numeric attribute of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    // Resources
    Health,
    Mana,
    Stamina,
    // Attributes
    Strength,
    Dexterity,
    Intelligence,
    Vitality,
    // Offense
    AttackPower,
    SpellPower,
    CritChance,
    CritDamage,
    // Defense
    Armor,
    MagicResist,
    Evasion,
    // Utility
    Speed,
}

impl StatKind {
    /// Get all stat kinds
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Health,
            StatKind::Mana,
            StatKind::Stamina,
            StatKind::Strength,
            StatKind::Dexterity,
            StatKind::Intelligence,
            StatKind::Vitality,
            StatKind::AttackPower,
            StatKind::SpellPower,
            StatKind::CritChance,
            StatKind::CritDamage,
            StatKind::Armor,
            StatKind::MagicResist,
            StatKind::Evasion,
            StatKind::Speed,
        ]
    }

    /// Whether this stat is a depletable pool (damage and healing act on it)
    pub fn is_resource(self) -> bool {
        matches!(self, StatKind::Health | StatKind::Mana | StatKind::Stamina)
    }
}

/// Character class, used for equipment class restrictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
    Ranger,
    Paladin,
}

/// Body slot an equipment piece occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Head,
    Shoulders,
    Chest,
    Hands,
    Waist,
    Legs,
    Feet,
    Neck,
    Back,
    Ring1,
    Ring2,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::MainHand,
            EquipmentSlot::OffHand,
            EquipmentSlot::Head,
            EquipmentSlot::Shoulders,
            EquipmentSlot::Chest,
            EquipmentSlot::Hands,
            EquipmentSlot::Waist,
            EquipmentSlot::Legs,
            EquipmentSlot::Feet,
            EquipmentSlot::Neck,
            EquipmentSlot::Back,
            EquipmentSlot::Ring1,
            EquipmentSlot::Ring2,
        ]
    }

    /// Slots that must share a tier for a complete set
    pub fn set_slots() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::MainHand,
            EquipmentSlot::Head,
            EquipmentSlot::Chest,
            EquipmentSlot::Legs,
            EquipmentSlot::Feet,
        ]
    }
}

/// Material tier of an equipment piece
///
/// The discriminant is the tier ordinal used by the bonus formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Crude = 0,
    Cloth = 1,
    Leather = 2,
    Chain = 3,
    Plate = 4,
    Mithril = 5,
    Adamantine = 6,
    Celestial = 7,
}

impl Tier {
    /// Get all tiers, lowest first
    pub fn all() -> &'static [Tier] {
        &[
            Tier::Crude,
            Tier::Cloth,
            Tier::Leather,
            Tier::Chain,
            Tier::Plate,
            Tier::Mithril,
            Tier::Adamantine,
            Tier::Celestial,
        ]
    }

    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

/// Rarity of an equipment piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Bonus multiplier applied on top of the tier multiplier
    pub fn multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.2,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 2.8,
            Rarity::Mythic => 4.0,
        }
    }
}

/// Weapon family, consulted by the two-handed exclusivity rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    // One-handed
    Sword,
    Axe,
    Mace,
    Dagger,
    Wand,
    Shield,
    // Two-handed
    Staff,
    Bow,
    Crossbow,
    Greataxe,
    Greatsword,
    Scythe,
    Hammer,
}

impl WeaponType {
    /// Whether a weapon of this type occupies both hands
    pub fn is_two_handed(self) -> bool {
        matches!(
            self,
            WeaponType::Staff
                | WeaponType::Bow
                | WeaponType::Crossbow
                | WeaponType::Greataxe
                | WeaponType::Greatsword
                | WeaponType::Scythe
                | WeaponType::Hammer
        )
    }
}
