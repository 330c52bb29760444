//! Per-class starting stats and inventory size

use super::ConfigError;
use crate::types::{ActorClass, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Base value for one stat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSeed {
    pub kind: StatKind,
    pub base: f64,
}

/// Starting profile for actors of one class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTemplate {
    pub class: ActorClass,
    pub inventory_capacity: usize,
    pub stats: Vec<StatSeed>,
}

impl ClassTemplate {
    /// Seeds in the shape `StatsCollection::initialize_defaults` takes
    pub fn seeds(&self) -> Vec<(StatKind, f64)> {
        self.stats.iter().map(|seed| (seed.kind, seed.base)).collect()
    }
}

/// Container for class templates
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassesConfig {
    classes: Vec<ClassTemplate>,
}

fn into_map(config: ClassesConfig) -> Result<HashMap<ActorClass, ClassTemplate>, ConfigError> {
    let mut map = HashMap::new();
    for template in config.classes {
        if template.inventory_capacity == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{:?} has an inventory capacity of 0",
                template.class
            )));
        }
        if let Some(previous) = map.insert(template.class, template) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate class template: {:?}",
                previous.class
            )));
        }
    }
    Ok(map)
}

/// Load class templates from a TOML file
pub fn load_class_templates(path: &Path) -> Result<HashMap<ActorClass, ClassTemplate>, ConfigError> {
    into_map(super::load_toml(path)?)
}

/// Load class templates from a TOML string
pub fn parse_class_templates(content: &str) -> Result<HashMap<ActorClass, ClassTemplate>, ConfigError> {
    into_map(super::parse_toml(content)?)
}

/// Get the shipped class templates
pub fn default_class_templates() -> HashMap<ActorClass, ClassTemplate> {
    let toml = include_str!("../../config/classes.toml");
    parse_class_templates(toml).unwrap_or_else(|err| {
        warn!(%err, "shipped class templates failed to load");
        HashMap::new()
    })
}
