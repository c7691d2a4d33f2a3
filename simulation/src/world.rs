//! Simulation State - owns the fish tank and runs the frame loop

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::components::*;
use crate::config::SimulationConfig;
use crate::error::{ConfigurationError, Result};
use crate::systems::{self, FishDistributions};

/// Outcome of a single tick, consumed by the presentation side.
#[derive(Debug, Clone, Serialize)]
pub struct TickResult {
    pub tick: u64,
    /// Fish-state revision this frame was taken at.
    pub revision: u64,
    pub population: u32,
    /// Fish that starved during this tick.
    pub culled: Vec<FishId>,
    /// Set on the tick the last fish died; never repeated for the same run.
    pub terminal: bool,
    /// Live fish in spawn order.
    pub frame: Vec<FishView>,
}

pub struct SimulationState {
    pub(crate) world: World,
    config: SimulationConfig,
    dists: FishDistributions,
    bounds: ContainerBounds,
    rng: StdRng,
    /// Live fish in spawn order; the last entry is the newest.
    roster: Vec<(FishId, Entity)>,
    feeding_mode: FeedingMode,
    next_fish_id: u64,
    tick: u64,
    /// Bumped on every change to the fish; orders frames taken at different times.
    revision: u64,
}

impl SimulationState {
    /// Validate the config against the tank and build an empty simulation.
    pub fn new(config: SimulationConfig, bounds: ContainerBounds) -> Result<Self> {
        config.validate()?;
        if bounds.width() < config.max_size || bounds.height() < config.max_size / config.aspect_ratio {
            return Err(ConfigurationError::ContainerTooSmall {
                width: bounds.width(),
                height: bounds.height(),
                fish_width: config.max_size,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            world: World::new(),
            dists: FishDistributions::new(&config),
            config,
            bounds,
            rng,
            roster: Vec::new(),
            feeding_mode: FeedingMode::Normal,
            next_fish_id: 1,
            tick: 0,
            revision: 0,
        })
    }

    /// Build a simulation and stock it with the configured initial population.
    pub fn with_initial_population(config: SimulationConfig, bounds: ContainerBounds) -> Result<Self> {
        let mut state = Self::new(config, bounds)?;
        state.seed_population(state.config.initial_population);
        Ok(state)
    }

    pub fn seed_population(&mut self, count: usize) {
        for _ in 0..count {
            self.spawn();
        }
        info!("Seeded {} fish, population {}", count, self.population());
    }

    /// Add one randomized fish. It becomes the most recent fish.
    pub fn spawn(&mut self) -> FishId {
        let id = FishId(self.next_fish_id);
        self.next_fish_id += 1;

        let entity = systems::spawn_fish(&mut self.world, &mut self.rng, &self.dists, &self.bounds, id);
        self.roster.push((id, entity));
        self.revision += 1;
        debug!("Spawned fish {:?}", id);
        id
    }

    /// Remove the most recently spawned fish still alive. No-op when empty.
    pub fn despawn(&mut self) -> Option<FishId> {
        let (id, entity) = self.roster.pop()?;
        let _ = self.world.despawn(entity);
        self.revision += 1;
        debug!("Removed fish {:?}", id);
        Some(id)
    }

    /// Feed one fish. `None` for unknown fish or fish without health.
    pub fn feed(&mut self, id: FishId) -> Option<f64> {
        let entity = self.entity_of(id)?;
        let health = systems::feed_system(
            &mut self.world,
            entity,
            self.config.feed_amount,
            self.config.max_health,
        )?;
        self.revision += 1;
        debug!("Fed fish {:?}, health {:.2}", id, health);
        Some(health)
    }

    /// Pointer interaction with a fish: feeds it only in feeding mode.
    pub fn interact(&mut self, id: FishId) -> Option<f64> {
        match self.feeding_mode {
            FeedingMode::Feeding => self.feed(id),
            FeedingMode::Normal => None,
        }
    }

    pub fn toggle_feeding_mode(&mut self) -> FeedingMode {
        self.feeding_mode = self.feeding_mode.toggled();
        info!("Feeding mode: {:?}", self.feeding_mode);
        self.feeding_mode
    }

    pub fn feeding_mode(&self) -> FeedingMode {
        self.feeding_mode
    }

    /// Track a resized tank. Affects the next tick and later spawns.
    pub fn resize(&mut self, bounds: ContainerBounds) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> ContainerBounds {
        self.bounds
    }

    /// Run one tick against the given tank bounds.
    pub fn tick(&mut self, bounds: ContainerBounds) -> TickResult {
        self.resize(bounds);
        self.step()
    }

    /// Run one tick against the last known bounds.
    pub fn step(&mut self) -> TickResult {
        self.tick += 1;
        self.revision += 1;
        let before = self.roster.len();

        let culled: Vec<FishId> = if self.config.health_enabled {
            systems::decay_system(&mut self.world)
                .into_iter()
                .map(|(_, id)| id)
                .collect()
        } else {
            Vec::new()
        };
        if !culled.is_empty() {
            let world = &self.world;
            self.roster.retain(|(_, entity)| world.contains(*entity));
            debug!("{} fish starved on tick {}", culled.len(), self.tick);
        }

        let terminal = before > 0 && self.roster.is_empty();
        if terminal {
            info!("All fish have died on tick {}", self.tick);
        }

        systems::movement_system(&mut self.world, &self.bounds);

        TickResult {
            tick: self.tick,
            revision: self.revision,
            population: self.population() as u32,
            culled,
            terminal,
            frame: self.snapshot(),
        }
    }

    /// Drop every fish and restock with the initial population.
    pub fn reset(&mut self) {
        self.world.clear();
        self.roster.clear();
        self.revision += 1;
        self.feeding_mode = FeedingMode::Normal;
        info!("Resetting aquarium");
        self.seed_population(self.config.initial_population);
    }

    /// Current frame data for every live fish, in spawn order.
    pub fn snapshot(&self) -> Vec<FishView> {
        self.roster
            .iter()
            .filter_map(|(id, entity)| self.view(*id, *entity))
            .collect()
    }

    pub fn fish(&self, id: FishId) -> Option<FishView> {
        self.view(id, self.entity_of(id)?)
    }

    fn view(&self, id: FishId, entity: Entity) -> Option<FishView> {
        let entity_ref = self.world.entity(entity).ok()?;
        let pos = entity_ref.get::<&Position>()?;
        let size = entity_ref.get::<&Size>()?;
        let facing = entity_ref.get::<&Facing>().map(|f| *f).unwrap_or_default();
        let health = entity_ref.get::<&Vitality>().map(|v| v.health);

        Some(FishView {
            id,
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
            facing,
            health,
        })
    }

    fn entity_of(&self, id: FishId) -> Option<Entity> {
        self.roster
            .iter()
            .find(|(fish_id, _)| *fish_id == id)
            .map(|(_, entity)| *entity)
    }

    pub fn population(&self) -> usize {
        self.roster.len()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Overwrite a fish's kinematics; for scripted scenarios.
    pub fn place(&mut self, id: FishId, position: Position, velocity: Velocity) -> bool {
        let Some(entity) = self.entity_of(id) else {
            return false;
        };
        let Ok((pos, vel)) = self.world.query_one_mut::<(&mut Position, &mut Velocity)>(entity) else {
            return false;
        };
        *pos = position;
        *vel = velocity;
        self.revision += 1;
        true
    }

    /// Overwrite a fish's health; ignored for fish without health.
    pub fn set_vitality(&mut self, id: FishId, vitality: Vitality) -> bool {
        let Some(entity) = self.entity_of(id) else {
            return false;
        };
        match self.world.get::<&mut Vitality>(entity) {
            Ok(mut current) => {
                *current = vitality;
                self.revision += 1;
                true
            }
            Err(_) => false,
        }
    }
}
