//! StatSource - Trait and implementations for modifier providers

mod equipment;

pub use equipment::EQUIPMENT_SOURCE_ID;

use crate::stats::{StatModifier, StatsCollection};

/// Trait for anything that contributes modifiers to a StatsCollection
///
/// All modifiers of a source share its id, so re-applying a source swaps the
/// previous set out as a whole.
pub trait StatSource {
    /// Unique identifier stamped on every modifier of this source
    fn source_id(&self) -> &str;

    /// The modifiers this source currently grants
    fn modifiers(&self) -> Vec<StatModifier>;
}

impl StatsCollection {
    /// Replace everything previously applied by `source` with its current modifiers
    pub fn apply_source(&mut self, source: &dyn StatSource) {
        let source_id = source.source_id().to_string();
        self.replace_source_modifiers(&source_id, source.modifiers());
    }
}
