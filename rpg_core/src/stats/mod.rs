//! StatsCollection - All stat values and modifiers for one actor

mod modifier;
mod stat_value;

pub use modifier::{ModifierKind, ModifierPresets, StatModifier};
pub use stat_value::StatValue;

use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::{debug, trace};

/// Stat lookup error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Stat not registered: {0:?}")]
    NotFound(StatKind),
}

/// Fold a stat's modifiers over its base value
///
/// Modifiers are applied in ascending priority, ties kept in insertion order.
/// Additive values sum, multiplicative values multiply, and each Override
/// replaces the previous one, so the last Override in fold order wins.
pub fn fold_modifiers(base: f64, modifiers: &[StatModifier]) -> f64 {
    let mut ordered: Vec<&StatModifier> = modifiers.iter().collect();
    ordered.sort_by_key(|m| m.priority);

    let mut additive = 0.0;
    let mut multiplicative = 1.0;
    let mut override_value: Option<f64> = None;

    for modifier in ordered {
        match modifier.kind {
            ModifierKind::Additive => additive += modifier.value,
            ModifierKind::Multiplicative => multiplicative *= modifier.value,
            ModifierKind::Override => override_value = Some(modifier.value),
        }
    }

    override_value.unwrap_or((base + additive) * multiplicative)
}

/// Owns every StatValue and StatModifier of one actor
///
/// Modifiers may target stats that are not registered yet; they are kept
/// and take effect once the stat gets a base value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsCollection {
    values: HashMap<StatKind, StatValue>,
    modifiers: HashMap<StatKind, Vec<StatModifier>>,
}

impl StatsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base value for each stat not already present, then recompute all
    ///
    /// Existing bases are left untouched.
    pub fn initialize_defaults(&mut self, seeds: &[(StatKind, f64)]) {
        let mut registered = Vec::new();
        for &(kind, base) in seeds {
            if !self.values.contains_key(&kind) {
                self.values.insert(kind, StatValue::with_base(kind, base));
                registered.push(kind);
            }
        }

        let kinds: Vec<StatKind> = self.values.keys().copied().collect();
        for kind in kinds {
            self.recalculate(kind);
        }
        // Newly registered stats start full
        for kind in registered {
            if let Some(value) = self.values.get_mut(&kind) {
                value.set_current_to_max();
            }
        }
        debug!(stats = self.values.len(), "initialized stat defaults");
    }

    /// Look up a registered stat
    pub fn get_stat(&self, kind: StatKind) -> Result<&StatValue, StatsError> {
        self.values.get(&kind).ok_or(StatsError::NotFound(kind))
    }

    pub fn try_get_stat(&self, kind: StatKind) -> Option<&StatValue> {
        self.values.get(&kind)
    }

    pub fn contains(&self, kind: StatKind) -> bool {
        self.values.contains_key(&kind)
    }

    /// Registered stats in declaration order
    pub fn registered_stats(&self) -> impl Iterator<Item = &StatValue> {
        StatKind::all().iter().filter_map(|kind| self.values.get(kind))
    }

    /// Set (or create) the base layer and recompute that stat
    pub fn set_base(&mut self, kind: StatKind, base: f64) {
        match self.values.get_mut(&kind) {
            Some(value) => {
                value.set_base(base);
                self.recalculate(kind);
            }
            None => {
                self.values.insert(kind, StatValue::with_base(kind, base));
                self.recalculate(kind);
                if let Some(value) = self.values.get_mut(&kind) {
                    value.set_current_to_max();
                }
            }
        }
    }

    /// Append a modifier and recompute its stat
    ///
    /// No deduplication: modifiers from the same source coexist.
    pub fn add_modifier(&mut self, modifier: StatModifier) {
        let kind = modifier.stat;
        trace!(stat = ?kind, source = %modifier.source_id, modifier_kind = ?modifier.kind, value = modifier.value, "adding modifier");
        self.modifiers.entry(kind).or_default().push(modifier);
        self.recalculate(kind);
    }

    /// Modifiers currently attached to a stat, in insertion order
    pub fn modifiers(&self, kind: StatKind) -> &[StatModifier] {
        self.modifiers.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove every modifier applied by `source_id`
    /// Returns how many were removed
    pub fn remove_modifiers_by_source(&mut self, source_id: &str) -> usize {
        let touched = self.strip_source(source_id);
        let removed = touched.iter().map(|(_, count)| count).sum();
        for (kind, _) in touched {
            self.recalculate(kind);
        }
        removed
    }

    /// Swap all modifiers of one source for a new set
    ///
    /// Each affected stat is recomputed once, after both the removal and the
    /// insertion, so no intermediate value is observable.
    pub fn replace_source_modifiers(&mut self, source_id: &str, modifiers: Vec<StatModifier>) {
        let mut touched: BTreeSet<StatKind> = self
            .strip_source(source_id)
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();

        for modifier in modifiers {
            touched.insert(modifier.stat);
            self.modifiers.entry(modifier.stat).or_default().push(modifier);
        }

        debug!(source = source_id, stats = touched.len(), "replaced source modifiers");
        for kind in touched {
            self.recalculate(kind);
        }
    }

    /// Count every timed modifier down by one turn
    ///
    /// Modifiers that reach zero are removed and returned; their stats are
    /// recomputed. Permanent modifiers are untouched.
    pub fn tick_modifiers(&mut self) -> Vec<StatModifier> {
        let mut expired = Vec::new();
        let mut touched = Vec::new();

        for (kind, list) in self.modifiers.iter_mut() {
            let before = list.len();
            let mut kept = Vec::with_capacity(before);
            for mut modifier in list.drain(..) {
                if modifier.tick() {
                    kept.push(modifier);
                } else {
                    expired.push(modifier);
                }
            }
            *list = kept;
            if list.len() != before {
                touched.push(*kind);
            }
        }
        self.modifiers.retain(|_, list| !list.is_empty());

        for kind in touched {
            self.recalculate(kind);
        }
        for modifier in &expired {
            debug!(stat = ?modifier.stat, source = %modifier.source_id, "modifier expired");
        }
        expired
    }

    /// Add `amount` to a stat's current value, clamped to `0..=modified`
    pub fn apply_delta(&mut self, kind: StatKind, amount: f64) -> Result<f64, StatsError> {
        let value = self.values.get_mut(&kind).ok_or(StatsError::NotFound(kind))?;
        value.apply_delta(amount);
        Ok(value.current())
    }

    pub fn set_current_to_max(&mut self, kind: StatKind) -> Result<(), StatsError> {
        let value = self.values.get_mut(&kind).ok_or(StatsError::NotFound(kind))?;
        value.set_current_to_max();
        Ok(())
    }

    /// Refill every registered stat
    pub fn restore_all(&mut self) {
        for value in self.values.values_mut() {
            value.set_current_to_max();
        }
    }

    /// Recompute one stat from its base and modifiers
    fn recalculate(&mut self, kind: StatKind) {
        let Some(value) = self.values.get_mut(&kind) else {
            return;
        };
        let modifiers = self.modifiers.get(&kind).map(Vec::as_slice).unwrap_or(&[]);
        let modified = fold_modifiers(value.base(), modifiers);
        value.set_modified(modified);
        trace!(stat = ?kind, base = value.base(), modified = value.modified(), current = value.current(), "recalculated stat");
    }

    /// Remove a source's modifiers without recomputing
    /// Returns the stats touched and how many modifiers each lost
    fn strip_source(&mut self, source_id: &str) -> Vec<(StatKind, usize)> {
        let mut touched = Vec::new();
        for (kind, list) in self.modifiers.iter_mut() {
            let before = list.len();
            list.retain(|m| m.source_id != source_id);
            if list.len() != before {
                touched.push((*kind, before - list.len()));
            }
        }
        self.modifiers.retain(|_, list| !list.is_empty());
        touched
    }
}
