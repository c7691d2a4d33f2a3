//! Sprite board - presentation-side state for every fish on screen
//!
//! Sprites are keyed by fish id and live alongside the simulation, never
//! inside it.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use simulation::{FishId, FishView, PresentationAdapter};
use tracing::{debug, info};

/// Available fish images
pub const FISH_ASSETS: &[&str] = &[
    "/fish1.png",
    "/fish2.png",
    "/fish3.png",
    "/fish4.png",
    "/fish5.png",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthBand {
    Green,
    Orange,
    Red,
}

impl HealthBand {
    pub fn from_health(health: f64) -> Self {
        if health > 50.0 {
            HealthBand::Green
        } else if health > 0.0 {
            HealthBand::Orange
        } else {
            HealthBand::Red
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            HealthBand::Green => "health-green",
            HealthBand::Orange => "health-orange",
            HealthBand::Red => "health-red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthBar {
    /// Bar fill, percent of the sprite width
    pub width_pct: f64,
    pub band: HealthBand,
    pub css_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub asset: &'static str,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// `1` facing right, `-1` mirrored
    pub scale_x: f64,
    pub health_bar: Option<HealthBar>,
}

impl Sprite {
    fn update(&mut self, view: &FishView) {
        self.left = view.x;
        self.top = view.y;
        self.width = view.width;
        self.height = view.height;
        self.scale_x = view.facing.scale_x();
        self.health_bar = view.health.map(|health| {
            let band = HealthBand::from_health(health);
            HealthBar {
                width_pct: health,
                band,
                css_class: band.css_class(),
            }
        });
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

pub struct SpriteBoard {
    sprites: HashMap<FishId, Sprite>,
    /// Draw order; later entries are on top
    order: Vec<FishId>,
    rng: StdRng,
    extinctions: u32,
    last_extinction_tick: Option<u64>,
    /// Newest state revision drawn so far
    revision: u64,
}

impl SpriteBoard {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            sprites: HashMap::new(),
            order: Vec::new(),
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
            extinctions: 0,
            last_extinction_tick: None,
            revision: 0,
        }
    }

    pub fn sprite(&self, id: FishId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn extinctions(&self) -> u32 {
        self.extinctions
    }

    pub fn last_extinction_tick(&self) -> Option<u64> {
        self.last_extinction_tick
    }

    /// Topmost fish under the pointer.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<FishId> {
        self.order
            .iter()
            .rev()
            .find(|id| self.sprites.get(id).is_some_and(|s| s.contains(x, y)))
            .copied()
    }
}

impl PresentationAdapter for SpriteBoard {
    fn present(&mut self, frame: &[FishView]) {
        let live: Vec<FishId> = frame.iter().map(|view| view.id).collect();
        self.sprites.retain(|id, _| live.contains(id));

        for view in frame {
            let rng = &mut self.rng;
            let sprite = self.sprites.entry(view.id).or_insert_with(|| Sprite {
                asset: FISH_ASSETS[rng.gen_range(0..FISH_ASSETS.len())],
                left: 0.0,
                top: 0.0,
                width: 0.0,
                height: 0.0,
                scale_x: 1.0,
                health_bar: None,
            });
            sprite.update(view);
        }

        self.order = live;
    }

    fn present_at(&mut self, revision: u64, frame: &[FishView]) {
        if revision < self.revision {
            debug!("Dropping stale frame (revision {} < {})", revision, self.revision);
            return;
        }
        self.revision = revision;
        self.present(frame);
    }

    fn on_terminal(&mut self, tick: u64) {
        self.extinctions += 1;
        self.last_extinction_tick = Some(tick);
        info!("Aquarium is empty (tick {}, extinction #{})", tick, self.extinctions);
    }
}

/// Decorative rising bubble
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl BubbleSpec {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(5.0..15.0),
            left_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(5.0..13.0),
            delay_s: rng.gen_range(0.0..5.0),
        }
    }
}
