//! Feeding System

use hecs::{Entity, World};

use crate::components::Vitality;

/// Restore `amount` health to one fish, capped at `max_health`.
/// Returns the new health, or `None` if the fish has no health to restore.
pub fn feed_system(world: &mut World, entity: Entity, amount: f64, max_health: f64) -> Option<f64> {
    let mut vitality = world.get::<&mut Vitality>(entity).ok()?;
    Some(vitality.restore(amount, max_health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_caps_at_max() {
        let mut world = World::new();
        let fish = world.spawn((Vitality {
            health: 95.0,
            decay_rate: 0.01,
        },));

        assert_eq!(feed_system(&mut world, fish, 20.0, 100.0), Some(100.0));
        assert_eq!(feed_system(&mut world, fish, 20.0, 100.0), Some(100.0));
    }

    #[test]
    fn test_feed_adds_amount() {
        let mut world = World::new();
        let fish = world.spawn((Vitality {
            health: 40.0,
            decay_rate: 0.01,
        },));

        assert_eq!(feed_system(&mut world, fish, 20.0, 100.0), Some(60.0));
    }

    #[test]
    fn test_feed_without_vitality() {
        let mut world = World::new();
        let fish = world.spawn((0u8,));
        assert_eq!(feed_system(&mut world, fish, 20.0, 100.0), None);

        let _ = world.despawn(fish);
        assert_eq!(feed_system(&mut world, fish, 20.0, 100.0), None);
    }
}
