//! Equipment bonuses as stat modifiers

use crate::equipment::EquipmentManager;
use crate::source::StatSource;
use crate::stats::StatModifier;
use crate::types::StatKind;

/// Source id carried by every equipment bonus modifier
pub const EQUIPMENT_SOURCE_ID: &str = "equipment";

impl StatSource for EquipmentManager {
    fn source_id(&self) -> &str {
        EQUIPMENT_SOURCE_ID
    }

    /// One permanent additive modifier per bonus stat, in stat order
    fn modifiers(&self) -> Vec<StatModifier> {
        let bonuses = self.calculate_equipment_bonuses();
        StatKind::all()
            .iter()
            .filter_map(|kind| {
                bonuses
                    .get(kind)
                    .map(|&value| StatModifier::additive(*kind, value, EQUIPMENT_SOURCE_ID))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::Equipment;
    use crate::stats::StatsCollection;
    use crate::types::{ActorClass, EquipmentSlot, Rarity, Tier};

    #[test]
    fn test_equipment_modifiers() {
        let mut manager = EquipmentManager::new();
        let chest = Equipment::armor("chest", "Chest", EquipmentSlot::Chest, Tier::Plate, Rarity::Legendary);
        assert!(manager.try_equip(chest, 1, ActorClass::Warrior));

        let modifiers = manager.modifiers();
        assert_eq!(modifiers.len(), 2);
        assert_eq!(modifiers[0].stat, StatKind::Health);
        assert_eq!(modifiers[1].stat, StatKind::Armor);
        assert!(modifiers.iter().all(|m| m.source_id == EQUIPMENT_SOURCE_ID && m.is_permanent()));
    }

    #[test]
    fn test_reapplying_replaces_previous_bonuses() {
        let mut stats = StatsCollection::new();
        stats.initialize_defaults(&[(StatKind::Armor, 10.0), (StatKind::Health, 100.0)]);

        let mut manager = EquipmentManager::new();
        let chest = Equipment::armor("chest", "Chest", EquipmentSlot::Chest, Tier::Plate, Rarity::Legendary);
        assert!(manager.try_equip(chest, 1, ActorClass::Warrior));
        stats.apply_source(&manager);
        stats.apply_source(&manager);

        let armor = stats.get_stat(StatKind::Armor).unwrap();
        assert!((armor.modified() - 77.2).abs() < 0.0001);

        manager.unequip(EquipmentSlot::Chest);
        stats.apply_source(&manager);
        let armor = stats.get_stat(StatKind::Armor).unwrap();
        assert!((armor.modified() - 10.0).abs() < 0.0001);
        assert!(stats.modifiers(StatKind::Armor).is_empty());
    }
}
