//! EquipmentManager - Slot assignment, eligibility and derived bonuses

mod bonus;
mod gear;

pub use bonus::{base_bonus, set_step_bonus, SET_THRESHOLD, SET_TIER_FACTOR, TIER_FACTOR};
pub use gear::{Equipment, EquipmentKind};

use crate::types::{ActorClass, EquipmentSlot, StatKind, Tier};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::debug;

/// Reason an equip attempt was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("{item_id} requires level {required_level} (actor is {level}) or a different class")]
    Ineligible {
        item_id: String,
        required_level: i32,
        level: i32,
    },
    #[error("Off hand is blocked by a two-handed main hand weapon")]
    TwoHandedConflict,
}

/// Maps each equipment slot to at most one equipped piece
///
/// A two-handed weapon in the main hand and an off hand item never coexist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentManager {
    slots: BTreeMap<EquipmentSlot, Equipment>,
}

impl EquipmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_slot_occupied(&self, slot: EquipmentSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn get_equipped_item(&self, slot: EquipmentSlot) -> Option<&Equipment> {
        self.slots.get(&slot)
    }

    /// All equipped pieces in slot order
    pub fn equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &Equipment)> {
        self.slots.iter().map(|(slot, equipment)| (*slot, equipment))
    }

    pub fn equipped_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether an actor of this level and class may wear the piece
    pub fn can_equip(&self, equipment: &Equipment, level: i32, class: ActorClass) -> bool {
        equipment.meets_requirements(level, class)
    }

    /// Equip a piece into its slot
    ///
    /// A two-handed main hand weapon evicts the off hand; an off hand piece is
    /// refused while a two-handed weapon is held. Any prior occupant of the
    /// slot is replaced. Returns every piece displaced by the change.
    pub fn equip(
        &mut self,
        equipment: Equipment,
        level: i32,
        class: ActorClass,
    ) -> Result<Vec<Equipment>, EquipError> {
        if !self.can_equip(&equipment, level, class) {
            return Err(EquipError::Ineligible {
                item_id: equipment.id,
                required_level: equipment.required_level,
                level,
            });
        }

        let slot = equipment.slot;
        if slot == EquipmentSlot::OffHand && self.main_hand_two_handed() {
            return Err(EquipError::TwoHandedConflict);
        }

        let mut displaced = Vec::new();
        if slot == EquipmentSlot::MainHand && equipment.is_two_handed() {
            if let Some(off_hand) = self.slots.remove(&EquipmentSlot::OffHand) {
                debug!(evicted = %off_hand.id, "two-handed weapon evicted off hand");
                displaced.push(off_hand);
            }
        }

        debug!(slot = ?slot, item = %equipment.id, "equipped");
        if let Some(previous) = self.slots.insert(slot, equipment) {
            displaced.push(previous);
        }
        Ok(displaced)
    }

    /// Equip a piece, reporting only success
    ///
    /// Displaced pieces are dropped; use [`EquipmentManager::equip`] to keep them.
    pub fn try_equip(&mut self, equipment: Equipment, level: i32, class: ActorClass) -> bool {
        self.equip(equipment, level, class).is_ok()
    }

    /// Remove and return the piece in a slot
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Equipment> {
        let removed = self.slots.remove(&slot);
        if let Some(equipment) = &removed {
            debug!(slot = ?slot, item = %equipment.id, "unequipped");
        }
        removed
    }

    /// Remove every piece, in slot order
    pub fn unequip_all(&mut self) -> Vec<Equipment> {
        std::mem::take(&mut self.slots).into_values().collect()
    }

    /// Sum the stat bonuses of every equipped piece
    ///
    /// Each piece contributes `base_bonus(tier, rarity) * weight` for every
    /// stat weighted by its slot.
    pub fn calculate_equipment_bonuses(&self) -> HashMap<StatKind, f64> {
        let mut bonuses = HashMap::new();
        for (slot, equipment) in &self.slots {
            let base = base_bonus(equipment.tier, equipment.rarity);
            for &(stat, weight) in slot.stat_weights() {
                *bonuses.entry(stat).or_insert(0.0) += base * weight;
            }
        }
        bonuses
    }

    /// Equipped pieces of exactly this tier, in slot order
    pub fn get_equipment_by_tier(&self, tier: Tier) -> Vec<&Equipment> {
        self.slots.values().filter(|equipment| equipment.tier == tier).collect()
    }

    /// True when main hand, head, chest, legs and feet all hold this tier
    pub fn has_complete_set(&self, tier: Tier) -> bool {
        EquipmentSlot::set_slots()
            .iter()
            .all(|slot| self.slots.get(slot).is_some_and(|equipment| equipment.tier == tier))
    }

    /// Set bonus over all tiers with at least three equipped pieces
    pub fn calculate_set_bonus(&self) -> f32 {
        let mut counts: BTreeMap<Tier, usize> = BTreeMap::new();
        for equipment in self.slots.values() {
            *counts.entry(equipment.tier).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|&(_, pieces)| pieces >= SET_THRESHOLD)
            .map(|(tier, pieces)| set_step_bonus(pieces) * tier.ordinal() as f32 * SET_TIER_FACTOR)
            .sum()
    }

    fn main_hand_two_handed(&self) -> bool {
        self.slots
            .get(&EquipmentSlot::MainHand)
            .is_some_and(Equipment::is_two_handed)
    }
}
