//! StatModifier - Timed or permanent rules that perturb a stat

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// How a modifier combines into the modified value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Summed, then added to base
    Additive,
    /// Multiplied together, then applied to `base + additive`
    Multiplicative,
    /// Replaces the whole formula; the last one folded wins
    Override,
}

/// A rule that perturbs one stat's modified value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: StatKind,
    pub kind: ModifierKind,
    pub value: f64,
    /// Who applied this modifier (buff id, "equipment", ...)
    pub source_id: String,
    /// Turns left before expiry, `None` for permanent
    pub remaining_turns: Option<i32>,
    /// Fold order, ascending
    pub priority: i32,
}

impl StatModifier {
    /// Create a permanent modifier at priority 0
    pub fn new(stat: StatKind, kind: ModifierKind, value: f64, source_id: impl Into<String>) -> Self {
        StatModifier {
            stat,
            kind,
            value,
            source_id: source_id.into(),
            remaining_turns: None,
            priority: 0,
        }
    }

    pub fn additive(stat: StatKind, value: f64, source_id: impl Into<String>) -> Self {
        Self::new(stat, ModifierKind::Additive, value, source_id)
    }

    pub fn multiplicative(stat: StatKind, value: f64, source_id: impl Into<String>) -> Self {
        Self::new(stat, ModifierKind::Multiplicative, value, source_id)
    }

    pub fn override_value(stat: StatKind, value: f64, source_id: impl Into<String>) -> Self {
        Self::new(stat, ModifierKind::Override, value, source_id)
    }

    /// Limit the modifier to a number of turns
    pub fn for_turns(mut self, turns: i32) -> Self {
        self.remaining_turns = Some(turns);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn is_permanent(&self) -> bool {
        self.remaining_turns.is_none()
    }

    /// Count down one turn
    /// Returns true if the modifier is still active
    pub(crate) fn tick(&mut self) -> bool {
        match self.remaining_turns.as_mut() {
            None => true,
            Some(turns) => {
                *turns = turns.saturating_sub(1);
                *turns > 0
            }
        }
    }
}

/// Common buff/debuff presets
pub struct ModifierPresets;

impl ModifierPresets {
    /// +30% speed for a few turns
    pub fn haste(turns: i32) -> StatModifier {
        StatModifier::multiplicative(StatKind::Speed, 1.3, "buff_haste")
            .for_turns(turns)
            .with_priority(10)
    }

    /// -25% attack power for a few turns
    pub fn weakness(turns: i32) -> StatModifier {
        StatModifier::multiplicative(StatKind::AttackPower, 0.75, "debuff_weakness")
            .for_turns(turns)
            .with_priority(10)
    }

    /// Flat armor bonus
    pub fn fortify(amount: f64, turns: i32) -> StatModifier {
        StatModifier::additive(StatKind::Armor, amount, "buff_fortify").for_turns(turns)
    }

    /// Pins crit chance to a fixed value, folded after everything else
    pub fn berserk(crit_chance: f64, turns: i32) -> StatModifier {
        StatModifier::override_value(StatKind::CritChance, crit_chance, "buff_berserk")
            .for_turns(turns)
            .with_priority(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_tick() {
        let mut modifier = StatModifier::additive(StatKind::Strength, 5.0, "test").for_turns(2);
        assert!(modifier.tick());
        assert_eq!(modifier.remaining_turns, Some(1));
        assert!(!modifier.tick());
    }

    #[test]
    fn test_tick_of_spent_or_extreme_counts_expires() {
        let mut spent = StatModifier::additive(StatKind::Strength, 5.0, "test").for_turns(0);
        assert!(!spent.tick());
        assert_eq!(spent.remaining_turns, Some(-1));

        let mut extreme = StatModifier::additive(StatKind::Strength, 5.0, "test").for_turns(i32::MIN);
        assert!(!extreme.tick());
        assert_eq!(extreme.remaining_turns, Some(i32::MIN));
    }

    #[test]
    fn test_permanent_never_expires() {
        let mut modifier = StatModifier::additive(StatKind::Strength, 5.0, "test");
        assert!(modifier.is_permanent());
        for _ in 0..100 {
            assert!(modifier.tick());
        }
        assert_eq!(modifier.remaining_turns, None);
    }

    #[test]
    fn test_presets() {
        let haste = ModifierPresets::haste(3);
        assert_eq!(haste.stat, StatKind::Speed);
        assert_eq!(haste.kind, ModifierKind::Multiplicative);
        assert_eq!(haste.remaining_turns, Some(3));

        let berserk = ModifierPresets::berserk(50.0, 2);
        assert_eq!(berserk.kind, ModifierKind::Override);
        assert_eq!(berserk.priority, 100);
    }
}
