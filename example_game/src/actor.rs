//! Actor - One character's stats, bag and worn gear kept in sync

use rpg_core::prelude::*;
use rpg_core::{ClassTemplate, EquipError, InventoryError};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A character composed of the three rpg_core components
pub struct Actor {
    pub name: String,
    pub class: ActorClass,
    pub level: i32,
    pub stats: StatsCollection,
    pub inventory: Inventory,
    pub equipment: EquipmentManager,
    /// Bag handles of worn pieces, so unequipped gear returns intact
    worn: BTreeMap<EquipmentSlot, ItemRef>,
}

impl Actor {
    /// Create an actor from its class template, starting at full resources
    pub fn from_template(
        name: impl Into<String>,
        template: &ClassTemplate,
        level: i32,
    ) -> Result<Self, InventoryError> {
        let mut stats = StatsCollection::new();
        stats.initialize_defaults(&template.seeds());

        Ok(Actor {
            name: name.into(),
            class: template.class,
            level,
            stats,
            inventory: Inventory::new(template.inventory_capacity)?,
            equipment: EquipmentManager::new(),
            worn: BTreeMap::new(),
        })
    }

    pub fn pick_up(&mut self, item: &ItemRef, quantity: u32) -> bool {
        let added = self.inventory.try_add(item, quantity);
        if added {
            info!(actor = %self.name, item = %item.name, quantity, "picked up");
        } else {
            info!(actor = %self.name, item = %item.name, quantity, "bag is full, left behind");
        }
        added
    }

    /// Wear an item from the bag, returning anything it displaces to the bag
    ///
    /// Returns `Ok(false)` without changing anything when the item is not
    /// held, is not wearable, or the displaced pieces would not fit back
    /// into the bag.
    pub fn equip_from_inventory(&mut self, item_id: &str) -> Result<bool, EquipError> {
        let Some(item) = self.inventory.find_slot(item_id).and_then(|slot| slot.item()).cloned() else {
            return Ok(false);
        };
        let Some(gear) = item.equipment.clone() else {
            return Ok(false);
        };

        // Stage the bag first so a failed return of displaced gear loses nothing
        let mut staged = self.inventory.clone();
        if !staged.try_remove(item_id, 1) {
            return Ok(false);
        }
        for slot in self.slots_displaced_by(&gear) {
            let returned = self
                .worn
                .get(&slot)
                .is_some_and(|piece| staged.try_add(piece, 1));
            if !returned {
                debug!(item = item_id, ?slot, "displaced gear cannot go back to the bag");
                return Ok(false);
            }
        }

        let slot = gear.slot;
        let displaced = self.equipment.equip(gear, self.level, self.class)?;
        self.inventory = staged;
        for piece in &displaced {
            self.worn.remove(&piece.slot);
        }
        self.worn.insert(slot, item);

        self.sync_equipment_bonuses();
        info!(actor = %self.name, item = item_id, displaced = displaced.len(), "equipped");
        Ok(true)
    }

    /// Move a worn piece back into the bag if there is room
    pub fn unequip_to_inventory(&mut self, slot: EquipmentSlot) -> bool {
        if !self.equipment.is_slot_occupied(slot) {
            self.worn.remove(&slot);
            return false;
        }
        let Some(item) = self.worn.get(&slot).cloned() else {
            return false;
        };
        if !self.inventory.try_add(&item, 1) {
            return false;
        }

        self.equipment.unequip(slot);
        self.worn.remove(&slot);
        self.sync_equipment_bonuses();
        true
    }

    /// Drink a potion restoring `amount` of a resource
    ///
    /// The potion is kept when the actor has no such resource.
    pub fn consume(&mut self, item_id: &str, stat: StatKind, amount: f64) -> bool {
        if !self.stats.contains(stat) || !self.inventory.try_remove(item_id, 1) {
            return false;
        }
        if self.stats.apply_delta(stat, amount).is_err() {
            return false;
        }
        info!(actor = %self.name, item = item_id, ?stat, amount, "consumed");
        true
    }

    /// Returns health left, or 0 for an actor without a health stat
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        self.stats.apply_delta(StatKind::Health, -amount).unwrap_or(0.0)
    }

    pub fn heal(&mut self, amount: f64) -> f64 {
        self.stats.apply_delta(StatKind::Health, amount).unwrap_or(0.0)
    }

    pub fn is_alive(&self) -> bool {
        self.stats
            .try_get_stat(StatKind::Health)
            .is_some_and(|health| !health.is_depleted())
    }

    pub fn health_percent(&self) -> f64 {
        self.stats
            .try_get_stat(StatKind::Health)
            .map(StatValue::percent)
            .unwrap_or(0.0)
    }

    /// Advance timed modifiers by one turn
    pub fn end_turn(&mut self) {
        for expired in self.stats.tick_modifiers() {
            info!(actor = %self.name, source = %expired.source_id, stat = ?expired.stat, "effect wore off");
        }
    }

    /// Re-derive the equipment modifiers after any gear change
    fn sync_equipment_bonuses(&mut self) {
        self.stats.apply_source(&self.equipment);
    }

    /// Worn slots that equipping `gear` would empty
    fn slots_displaced_by(&self, gear: &Equipment) -> Vec<EquipmentSlot> {
        let mut slots = Vec::new();
        if gear.slot == EquipmentSlot::MainHand
            && gear.is_two_handed()
            && self.equipment.is_slot_occupied(EquipmentSlot::OffHand)
        {
            slots.push(EquipmentSlot::OffHand);
        }
        if self.equipment.is_slot_occupied(gear.slot) {
            slots.push(gear.slot);
        }
        slots
    }

    pub fn summary(&self) -> ActorSummary {
        ActorSummary {
            name: self.name.clone(),
            class: self.class,
            level: self.level,
            stats: self
                .stats
                .registered_stats()
                .map(|value| StatLine {
                    kind: value.kind,
                    base: value.base(),
                    modified: value.modified(),
                    current: value.current(),
                })
                .collect(),
            equipped: self
                .equipment
                .equipped()
                .map(|(slot, gear)| (slot, gear.name.clone()))
                .collect(),
            inventory: self
                .inventory
                .slots()
                .iter()
                .filter_map(|slot| slot.item().map(|item| (item.name.clone(), slot.quantity())))
                .collect(),
            used_slots: self.inventory.used_slots(),
            total_value: self.inventory.total_value(),
            total_weight: self.inventory.total_weight(),
            set_bonus: self.equipment.calculate_set_bonus(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatLine {
    pub kind: StatKind,
    pub base: f64,
    pub modified: f64,
    pub current: f64,
}

/// Printable snapshot of an actor
#[derive(Debug, Serialize)]
pub struct ActorSummary {
    pub name: String,
    pub class: ActorClass,
    pub level: i32,
    pub stats: Vec<StatLine>,
    pub equipped: Vec<(EquipmentSlot, String)>,
    pub inventory: Vec<(String, u32)>,
    pub used_slots: usize,
    pub total_value: u64,
    pub total_weight: f64,
    pub set_bonus: f32,
}
