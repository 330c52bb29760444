//! Example Game - A headless skirmish demonstrating rpg_core integration
//!
//! This game shows:
//! - Building an actor from a class template
//! - Looting items into a stack-aware inventory
//! - Equipping upgrades and re-deriving stat bonuses
//! - Timed buffs, incoming damage, regeneration and potions over several turns
//! - Stowing gear back into the bag
//!
//! Usage: `example_game [seed]` (default seed 42). Logs go to stderr and are
//! filtered by `RUST_LOG`; the final actor summary is printed as JSON.

mod actor;

use actor::Actor;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rpg_core::prelude::*;
use rpg_core::{default_class_templates, default_item_catalog};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const TURNS: u32 = 12;
const POTION_HEAL: f64 = 60.0;
const REGEN_PER_TURN: f64 = 3.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let catalog = default_item_catalog();
    let templates = default_class_templates();
    let template = templates
        .get(&ActorClass::Warrior)
        .ok_or("missing warrior template")?;
    let mut hero = Actor::from_template("Aldric", template, 6)?;
    info!(seed, items = catalog.len(), "skirmish starting");

    if let Some(potion) = catalog.get("health_potion") {
        hero.pick_up(&potion, 3);
    }

    let loot_table = catalog.ids();
    for turn in 1..=TURNS {
        info!(turn, health = hero.health_percent(), "turn begins");

        // Loot
        if let Some(id) = loot_table.choose(&mut rng) {
            if let Some(item) = catalog.get(id) {
                let quantity = if item.stackable { rng.gen_range(1..=5) } else { 1 };
                if hero.pick_up(&item, quantity) && item.equipment.is_some() {
                    try_upgrade(&mut hero, &item);
                }
            }
        }

        // Buffs
        if turn % 4 == 1 {
            let buff = match rng.gen_range(0..3) {
                0 => ModifierPresets::haste(3),
                1 => ModifierPresets::fortify(15.0, 3),
                _ => ModifierPresets::berserk(0.5, 2),
            };
            info!(source = %buff.source_id, stat = ?buff.stat, "buff applied");
            hero.stats.add_modifier(buff);
        }
        if turn == 6 {
            hero.stats.add_modifier(ModifierPresets::weakness(3));
            warn!("weakened by a curse");
        }

        // Enemy swing, softened by armor
        let armor = hero
            .stats
            .try_get_stat(StatKind::Armor)
            .map(StatValue::modified)
            .unwrap_or(0.0);
        let raw = rng.gen_range(10.0..45.0);
        let damage = raw * 100.0 / (100.0 + armor);
        let health = hero.take_damage(damage);
        info!(raw, damage, health, "hit taken");

        if hero.health_percent() < 0.4 && !hero.consume("health_potion", StatKind::Health, POTION_HEAL) {
            warn!("no potions left");
        }
        if !hero.is_alive() {
            warn!(turn, "hero has fallen");
            break;
        }

        hero.end_turn();
        hero.heal(REGEN_PER_TURN);
    }

    // Make camp: sling the weapon back into the bag
    if hero.is_alive() && !hero.unequip_to_inventory(EquipmentSlot::MainHand) {
        info!("nothing to stow");
    }

    println!("{}", serde_json::to_string_pretty(&hero.summary())?);
    Ok(())
}

/// Equip a freshly looted piece when it beats what is worn
fn try_upgrade(hero: &mut Actor, item: &ItemRef) {
    let Some(gear) = item.equipment.as_ref() else {
        return;
    };
    let better = hero
        .equipment
        .get_equipped_item(gear.slot)
        .map_or(true, |worn| score(gear) > score(worn));
    if !better {
        return;
    }

    match hero.equip_from_inventory(&item.id) {
        Ok(true) => {}
        Ok(false) => warn!(item = %item.id, "could not make room to equip"),
        Err(err) => info!(item = %item.id, %err, "cannot equip"),
    }
}

fn score(gear: &Equipment) -> f64 {
    rpg_core::equipment::base_bonus(gear.tier, gear.rarity)
}
