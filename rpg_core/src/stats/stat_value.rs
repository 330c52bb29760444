//! StatValue - The layered stat container (Base → Modified → Current)

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// A single named quantity with three layers
///
/// - `base`: the value registered for the actor
/// - `modified`: `base` after every modifier has been folded in
/// - `current`: the depletable amount, always within `0..=modified`
///
/// `modified` is only written by recalculation, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub kind: StatKind,
    base: f64,
    modified: f64,
    current: f64,
}

impl StatValue {
    /// Create a new StatValue with the given base, starting full
    pub fn with_base(kind: StatKind, base: f64) -> Self {
        let modified = base.max(0.0);
        StatValue {
            kind,
            base,
            modified,
            current: modified,
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn modified(&self) -> f64 {
        self.modified
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub(crate) fn set_base(&mut self, base: f64) {
        self.base = base;
    }

    /// Store a freshly recalculated modified value and pull current down to it
    ///
    /// Current never rises on its own when modified grows.
    pub(crate) fn set_modified(&mut self, modified: f64) {
        self.modified = modified.max(0.0);
        self.current = self.current.min(self.modified).max(0.0);
    }

    /// Add `amount` to current, clamped to `0..=modified`
    ///
    /// Negative amounts are damage, positive amounts are healing.
    pub fn apply_delta(&mut self, amount: f64) {
        self.current = (self.current + amount).clamp(0.0, self.modified);
    }

    /// Refill current to the modified value
    pub fn set_current_to_max(&mut self) {
        self.current = self.modified;
    }

    /// Fraction of the modified value currently held (0.0 when modified is 0)
    pub fn percent(&self) -> f64 {
        if self.modified <= 0.0 {
            return 0.0;
        }
        (self.current / self.modified).clamp(0.0, 1.0)
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}
