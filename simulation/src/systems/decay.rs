//! Decay System
//!
//! Drains health from every fish and removes the ones that starve.

use hecs::{Entity, World};

use crate::components::{FishId, Vitality};

/// Apply one tick of health decay and despawn dead fish.
/// Returns the fish that died this tick.
pub fn decay_system(world: &mut World) -> Vec<(Entity, FishId)> {
    let mut deaths = Vec::new();

    for (entity, (id, vitality)) in world.query_mut::<(&FishId, &mut Vitality)>() {
        vitality.health -= vitality.decay_rate;
        if vitality.is_dead() {
            deaths.push((entity, *id));
        }
    }

    for (entity, _) in &deaths {
        let _ = world.despawn(*entity);
    }

    deaths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_with_health(world: &mut World, id: u64, health: f64, decay_rate: f64) -> Entity {
        world.spawn((FishId(id), Vitality { health, decay_rate }))
    }

    #[test]
    fn test_health_decreases_by_rate() {
        let mut world = World::new();
        let fish = spawn_with_health(&mut world, 1, 100.0, 0.02);

        let deaths = decay_system(&mut world);

        assert!(deaths.is_empty());
        let health = world.get::<&Vitality>(fish).unwrap().health;
        assert!((health - 99.98).abs() < 1e-9);
    }

    #[test]
    fn test_fish_crossing_zero_is_removed_same_tick() {
        let mut world = World::new();
        let doomed = spawn_with_health(&mut world, 1, 0.01, 1.0);
        let healthy = spawn_with_health(&mut world, 2, 50.0, 0.01);

        let deaths = decay_system(&mut world);

        assert_eq!(deaths, vec![(doomed, FishId(1))]);
        assert!(!world.contains(doomed));
        assert!(world.contains(healthy));
    }

    #[test]
    fn test_exactly_zero_counts_as_dead() {
        let mut world = World::new();
        spawn_with_health(&mut world, 1, 0.5, 0.5);

        assert_eq!(decay_system(&mut world).len(), 1);
        assert_eq!(world.len(), 0);
    }

    #[test]
    fn test_fish_without_vitality_never_decay() {
        let mut world = World::new();
        let immortal = world.spawn((FishId(1),));

        for _ in 0..10_000 {
            assert!(decay_system(&mut world).is_empty());
        }
        assert!(world.contains(immortal));
    }
}
