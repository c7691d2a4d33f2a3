//! Spawn System
//!
//! Creates fish with randomized size, placement and speed.

use hecs::{Entity, World};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::components::{
    ContainerBounds, Facing, FishId, Position, Size, Velocity, Vitality,
};
use crate::config::SimulationConfig;

/// Sampling distributions derived from a validated config.
#[derive(Debug, Clone)]
pub struct FishDistributions {
    width: Uniform<f64>,
    vx: Uniform<f64>,
    vy: Uniform<f64>,
    decay: Option<Uniform<f64>>,
    aspect_ratio: f64,
    min_speed_x: f64,
    max_health: f64,
}

impl FishDistributions {
    /// `config` must already have passed `SimulationConfig::validate`.
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            width: Uniform::new_inclusive(config.min_size, config.max_size),
            vx: Uniform::new_inclusive(-config.max_speed_x, config.max_speed_x),
            vy: Uniform::new_inclusive(-config.max_speed_y, config.max_speed_y),
            decay: config
                .health_enabled
                .then(|| Uniform::new_inclusive(config.min_decay, config.max_decay)),
            aspect_ratio: config.aspect_ratio,
            min_speed_x: config.min_speed_x,
            max_health: config.max_health,
        }
    }
}

/// Raise a horizontal speed to at least `floor`, keeping its sign.
/// Zero is treated as moving right.
pub fn snap_speed(vx: f64, floor: f64) -> f64 {
    if vx.abs() >= floor {
        vx
    } else if vx < 0.0 {
        -floor
    } else {
        floor
    }
}

/// Spawn one fish somewhere fully inside `bounds`.
pub fn spawn_fish<R: Rng>(
    world: &mut World,
    rng: &mut R,
    dists: &FishDistributions,
    bounds: &ContainerBounds,
    id: FishId,
) -> Entity {
    let width = dists.width.sample(rng);
    let height = width / dists.aspect_ratio;

    // A tank narrower than the fish pins it to the origin
    let max_x = (bounds.width() - width).max(0.0);
    let max_y = (bounds.height() - height).max(0.0);
    let position = Position {
        x: rng.gen_range(0.0..=max_x),
        y: rng.gen_range(0.0..=max_y),
    };

    let vx = snap_speed(dists.vx.sample(rng), dists.min_speed_x);
    let velocity = Velocity {
        vx,
        vy: dists.vy.sample(rng),
    };

    let entity = world.spawn((
        id,
        position,
        velocity,
        Size { width, height },
        Facing::from_velocity(vx),
    ));

    if let Some(decay) = &dists.decay {
        let _ = world.insert_one(
            entity,
            Vitality {
                health: dists.max_health,
                decay_rate: decay.sample(rng),
            },
        );
    }

    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snap_speed() {
        assert_eq!(snap_speed(0.2, 0.5), 0.5);
        assert_eq!(snap_speed(-0.2, 0.5), -0.5);
        assert_eq!(snap_speed(0.0, 0.5), 0.5);
        assert_eq!(snap_speed(-0.7, 0.5), -0.7);
        assert_eq!(snap_speed(0.5, 0.5), 0.5);
    }

    #[test]
    fn test_spawned_fish_shape() {
        let config = SimulationConfig::default();
        let dists = FishDistributions::new(&config);
        let bounds = ContainerBounds::new(400.0, 300.0).unwrap();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(42);

        for i in 0..200 {
            let e = spawn_fish(&mut world, &mut rng, &dists, &bounds, FishId(i));
            let size = *world.get::<&Size>(e).unwrap();
            let vel = *world.get::<&Velocity>(e).unwrap();
            let vitality = *world.get::<&Vitality>(e).unwrap();

            assert!((30.0..=80.0).contains(&size.width));
            assert!((size.height - size.width * 3.0 / 5.0).abs() < 1e-9);
            assert!(vel.vx.abs() >= 0.5 && vel.vx.abs() <= 1.0);
            assert!(vel.vy.abs() <= 0.5);
            assert_eq!(vitality.health, 100.0);
            assert!((0.01..=0.03).contains(&vitality.decay_rate));
        }
    }

    #[test]
    fn test_classic_fish_have_no_vitality() {
        let dists = FishDistributions::new(&SimulationConfig::classic());
        let bounds = ContainerBounds::new(400.0, 300.0).unwrap();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(1);

        let e = spawn_fish(&mut world, &mut rng, &dists, &bounds, FishId(1));
        assert!(world.get::<&Vitality>(e).is_err());
    }

    #[test]
    fn test_tiny_tank_pins_to_origin() {
        let dists = FishDistributions::new(&SimulationConfig::default());
        let bounds = ContainerBounds::new(10.0, 10.0).unwrap();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(3);

        let e = spawn_fish(&mut world, &mut rng, &dists, &bounds, FishId(1));
        assert_eq!(*world.get::<&Position>(e).unwrap(), Position { x: 0.0, y: 0.0 });
    }
}
