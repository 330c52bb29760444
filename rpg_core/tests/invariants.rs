//! Property tests: invariants that must survive arbitrary mutation sequences

use proptest::prelude::*;
use rpg_core::prelude::*;

// === Stats ===

#[derive(Debug, Clone)]
enum StatOp {
    Add(ModifierKind, f64, Option<i32>, i32),
    Tick,
    Delta(f64),
    SetBase(f64),
}

fn stat_op() -> impl Strategy<Value = StatOp> {
    let kind = prop_oneof![
        Just(ModifierKind::Additive),
        Just(ModifierKind::Multiplicative),
        Just(ModifierKind::Override),
    ];
    prop_oneof![
        4 => (kind, -100.0f64..200.0, proptest::option::of(1i32..5), -3i32..3)
            .prop_map(|(kind, value, turns, priority)| StatOp::Add(kind, value, turns, priority)),
        3 => Just(StatOp::Tick),
        2 => (-150.0f64..150.0).prop_map(StatOp::Delta),
        1 => (-20.0f64..300.0).prop_map(StatOp::SetBase),
    ]
}

fn assert_bounds(stats: &StatsCollection) -> Result<(), TestCaseError> {
    let health = stats.get_stat(StatKind::Health).unwrap();
    prop_assert!(health.current() >= 0.0, "current below zero: {:?}", health);
    prop_assert!(health.current() <= health.modified(), "current above modified: {:?}", health);
    Ok(())
}

proptest! {
    #[test]
    fn prop_current_stays_within_bounds(ops in proptest::collection::vec(stat_op(), 1..60)) {
        let mut stats = StatsCollection::new();
        stats.initialize_defaults(&[(StatKind::Health, 100.0)]);

        for op in ops {
            match op {
                StatOp::Add(kind, value, turns, priority) => {
                    let mut modifier = StatModifier::new(StatKind::Health, kind, value, "prop")
                        .with_priority(priority);
                    modifier.remaining_turns = turns;
                    stats.add_modifier(modifier);
                }
                StatOp::Tick => {
                    stats.tick_modifiers();
                }
                StatOp::Delta(amount) => {
                    stats.apply_delta(StatKind::Health, amount).unwrap();
                }
                StatOp::SetBase(base) => stats.set_base(StatKind::Health, base),
            }
            assert_bounds(&stats)?;
        }
    }

    #[test]
    fn prop_same_priority_override_last_inserted_wins(
        first in 0.0f64..500.0,
        second in 0.0f64..500.0,
        priority in -5i32..5,
        additive in -50.0f64..50.0,
    ) {
        let mut stats = StatsCollection::new();
        stats.initialize_defaults(&[(StatKind::Strength, 10.0)]);
        stats.add_modifier(StatModifier::override_value(StatKind::Strength, first, "a").with_priority(priority));
        stats.add_modifier(StatModifier::additive(StatKind::Strength, additive, "b").with_priority(priority));
        stats.add_modifier(StatModifier::override_value(StatKind::Strength, second, "c").with_priority(priority));

        let strength = stats.get_stat(StatKind::Strength).unwrap();
        prop_assert!((strength.modified() - second).abs() < 1e-9);
    }

    #[test]
    fn prop_non_override_fold_ignores_insertion_order(
        values in proptest::collection::vec((0.5f64..2.0, -20.0f64..20.0, -3i32..3), 1..8),
    ) {
        let modifiers: Vec<StatModifier> = values
            .iter()
            .enumerate()
            .map(|(i, &(mult, add, priority))| {
                if i % 2 == 0 {
                    StatModifier::multiplicative(StatKind::Armor, mult, "m").with_priority(priority)
                } else {
                    StatModifier::additive(StatKind::Armor, add, "a").with_priority(priority)
                }
            })
            .collect();

        let forward = rpg_core::stats::fold_modifiers(50.0, &modifiers);
        let mut reversed = modifiers.clone();
        reversed.reverse();
        let backward = rpg_core::stats::fold_modifiers(50.0, &reversed);

        prop_assert!((forward - backward).abs() < 1e-6);
    }
}

// === Inventory ===

fn catalog() -> Vec<ItemRef> {
    vec![
        Item::new("potion", "Potion").stackable(10).with_value(5).into_ref(),
        Item::new("arrow", "Arrow").stackable(25).with_value(1).into_ref(),
        Item::new("gem", "Gem").stackable(3).with_value(50).into_ref(),
        Item::new("sword", "Sword").with_value(40).into_ref(),
        Item::new("shield", "Shield").with_value(30).into_ref(),
    ]
}

#[derive(Debug, Clone)]
enum InvOp {
    Add(usize, u32),
    Remove(usize, u32),
    Move(usize, usize, Option<u32>),
}

fn inv_op() -> impl Strategy<Value = InvOp> {
    prop_oneof![
        3 => (0usize..5, 0u32..40).prop_map(|(item, qty)| InvOp::Add(item, qty)),
        2 => (0usize..5, 0u32..30).prop_map(|(item, qty)| InvOp::Remove(item, qty)),
        2 => (0usize..8, 0usize..8, proptest::option::of(0u32..30))
            .prop_map(|(from, to, qty)| InvOp::Move(from, to, qty)),
    ]
}

fn apply_ops(inventory: &mut Inventory, items: &[ItemRef], ops: &[InvOp]) {
    for op in ops {
        match *op {
            InvOp::Add(item, qty) => {
                inventory.try_add(&items[item], qty);
            }
            InvOp::Remove(item, qty) => {
                inventory.try_remove(&items[item].id, qty);
            }
            InvOp::Move(from, to, qty) => {
                let _ = inventory.try_move_item(from, to, qty);
            }
        }
    }
}

fn snapshot(inventory: &Inventory) -> Vec<Option<(String, u32)>> {
    inventory
        .slots()
        .iter()
        .map(|slot| slot.item().map(|item| (item.id.clone(), slot.quantity())))
        .collect()
}

proptest! {
    #[test]
    fn prop_can_add_matches_try_add(
        capacity in 1usize..8,
        ops in proptest::collection::vec(inv_op(), 0..30),
        item in 0usize..5,
        qty in 0u32..80,
    ) {
        let items = catalog();
        let mut inventory = Inventory::new(capacity).unwrap();
        apply_ops(&mut inventory, &items, &ops);

        let before = snapshot(&inventory);
        let predicted = inventory.can_add(&items[item], qty);
        let added = inventory.try_add(&items[item], qty);

        prop_assert_eq!(predicted, added);
        if !added {
            prop_assert_eq!(before, snapshot(&inventory));
        } else {
            let held: u64 = before
                .iter()
                .flatten()
                .filter(|(id, _)| *id == items[item].id)
                .map(|(_, q)| *q as u64)
                .sum();
            prop_assert_eq!(inventory.total_quantity(&items[item].id), held + qty as u64);
        }
    }

    #[test]
    fn prop_add_then_remove_round_trips(
        capacity in 1usize..8,
        ops in proptest::collection::vec(inv_op(), 0..30),
        item in 0usize..5,
        qty in 1u32..60,
    ) {
        let items = catalog();
        let mut inventory = Inventory::new(capacity).unwrap();
        apply_ops(&mut inventory, &items, &ops);
        // Start without any of the item under test
        let held = inventory.total_quantity(&items[item].id) as u32;
        inventory.try_remove(&items[item].id, held);

        let before = snapshot(&inventory);
        if inventory.try_add(&items[item], qty) {
            prop_assert!(inventory.try_remove(&items[item].id, qty));
        }
        prop_assert_eq!(before, snapshot(&inventory));
    }

    #[test]
    fn prop_slot_accounting_and_stack_limits(
        capacity in 1usize..8,
        ops in proptest::collection::vec(inv_op(), 0..50),
    ) {
        let items = catalog();
        let mut inventory = Inventory::new(capacity).unwrap();

        for op in ops {
            apply_ops(&mut inventory, &items, std::slice::from_ref(&op));

            prop_assert_eq!(inventory.capacity(), capacity);
            prop_assert_eq!(inventory.used_slots() + inventory.free_slots(), capacity);
            for slot in inventory.slots() {
                match slot.item() {
                    Some(item) => {
                        prop_assert!(slot.quantity() > 0);
                        prop_assert!(slot.quantity() <= item.stack_limit());
                    }
                    None => prop_assert_eq!(slot.quantity(), 0),
                }
            }
        }
    }
}
