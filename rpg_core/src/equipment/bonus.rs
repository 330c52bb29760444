//! Bonus tables for tier, rarity, slot and set calculations

use crate::types::{EquipmentSlot, Rarity, StatKind, Tier};

/// Multiplier applied per tier ordinal
pub const TIER_FACTOR: f64 = 2.0;

/// Minimum pieces of one tier for a set bonus
pub const SET_THRESHOLD: usize = 3;

/// Share of each tier ordinal granted by a set bonus
pub const SET_TIER_FACTOR: f32 = 0.1;

/// Stat contribution of one equipped piece before slot weighting:
/// `tier_ordinal * TIER_FACTOR * rarity_multiplier`
pub fn base_bonus(tier: Tier, rarity: Rarity) -> f64 {
    tier.ordinal() as f64 * TIER_FACTOR * rarity.multiplier()
}

impl EquipmentSlot {
    /// Which stats a piece in this slot improves, and how strongly
    pub fn stat_weights(self) -> &'static [(StatKind, f64)] {
        match self {
            EquipmentSlot::MainHand => &[(StatKind::AttackPower, 3.0), (StatKind::Strength, 1.5)],
            EquipmentSlot::OffHand => &[(StatKind::Armor, 1.5), (StatKind::Dexterity, 1.0)],
            EquipmentSlot::Head => &[(StatKind::Armor, 1.5), (StatKind::Intelligence, 1.0)],
            EquipmentSlot::Shoulders => &[(StatKind::Armor, 1.5), (StatKind::Strength, 0.5)],
            EquipmentSlot::Chest => &[(StatKind::Armor, 3.0), (StatKind::Health, 2.0)],
            EquipmentSlot::Hands => &[(StatKind::AttackPower, 1.0), (StatKind::Dexterity, 1.0)],
            EquipmentSlot::Waist => &[(StatKind::Armor, 1.0), (StatKind::Stamina, 1.0)],
            EquipmentSlot::Legs => &[(StatKind::Armor, 2.0), (StatKind::Health, 1.0)],
            EquipmentSlot::Feet => &[(StatKind::Armor, 1.0), (StatKind::Speed, 0.5)],
            EquipmentSlot::Neck => &[(StatKind::Mana, 2.0), (StatKind::SpellPower, 1.0)],
            EquipmentSlot::Back => &[(StatKind::Evasion, 1.0), (StatKind::MagicResist, 1.0)],
            EquipmentSlot::Ring1 => &[(StatKind::CritChance, 0.5)],
            EquipmentSlot::Ring2 => &[(StatKind::CritDamage, 0.5)],
        }
    }
}

/// Set bonus step for a number of same-tier pieces
pub fn set_step_bonus(pieces: usize) -> f32 {
    match pieces {
        0..=2 => 0.0,
        3 => 0.10,
        4 => 0.15,
        5 => 0.20,
        _ => 0.25,
    }
}
