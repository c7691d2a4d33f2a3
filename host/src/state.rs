use serde::{Deserialize, Serialize};
use simulation::{
    ContainerBounds, FeedingMode, FrameRunner, PresentationAdapter, SimulationConfig,
    SimulationState,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::presentation::SpriteBoard;

/// Global application state shared by every command
pub struct AppState {
    pub simulation: Arc<Mutex<SimulationState>>,
    pub frame_runner: Mutex<Option<FrameRunner>>,
    pub board: Arc<Mutex<SpriteBoard>>,
    pub config: HostConfig,
}

impl AppState {
    /// Validate the config, stock the tank and draw the first frame.
    pub fn new(config: HostConfig) -> anyhow::Result<Self> {
        let bounds = ContainerBounds::new(config.tank_width, config.tank_height)?;
        let simulation = SimulationState::with_initial_population(config.simulation.clone(), bounds)?;

        let mut board = SpriteBoard::new(config.simulation.seed);
        board.present_at(simulation.revision(), &simulation.snapshot());

        Ok(Self {
            simulation: Arc::new(Mutex::new(simulation)),
            frame_runner: Mutex::new(None),
            board: Arc::new(Mutex::new(board)),
            config,
        })
    }
}

// -- Configuration --

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub tank_width: f64,
    pub tank_height: f64,
    /// How long the headless host runs; 0 runs until killed
    pub run_seconds: u64,
    pub bubble_interval_ms: u64,
    /// Restock the tank after every fish has died
    pub restart_on_extinction: bool,
    /// How often the simulated visitor tends the tank; 0 disables it
    pub visitor_interval_ms: u64,
    /// Turn feeding mode on at startup and after every restock
    pub start_in_feeding_mode: bool,
    /// Resize the tank once, partway through the run
    pub resize: Option<TankResize>,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankResize {
    pub after_seconds: u64,
    pub width: f64,
    pub height: f64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tank_width: 960.0,
            tank_height: 540.0,
            run_seconds: 30,
            bubble_interval_ms: 700,
            restart_on_extinction: true,
            visitor_interval_ms: 4000,
            start_in_feeding_mode: false,
            resize: None,
            simulation: SimulationConfig::default(),
        }
    }
}

impl HostConfig {
    /// Read a JSON config file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)?;
        let config: HostConfig = serde_json::from_str(&json)?;
        config.simulation.validate()?;
        Ok(config)
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct AppConfig {
    pub tank_width: f64,
    pub tank_height: f64,
    pub min_fish_size: f64,
    pub max_fish_size: f64,
    pub aspect_ratio: f64,
    pub health_enabled: bool,
    pub feed_amount: f64,
    pub initial_population: usize,
    pub frame_interval_ms: u64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FeedingModeState {
    pub is_feeding: bool,
    pub button_icon: String,
    pub button_label: String,
}

impl From<FeedingMode> for FeedingModeState {
    fn from(mode: FeedingMode) -> Self {
        match mode {
            FeedingMode::Feeding => FeedingModeState {
                is_feeding: true,
                button_icon: "🛑".into(),
                button_label: "Stop Feeding".into(),
            },
            FeedingMode::Normal => FeedingModeState {
                is_feeding: false,
                button_icon: "🥫".into(),
                button_label: "Feed Fish".into(),
            },
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct LoopState {
    pub is_running: bool,
    pub tick: u64,
    pub population: u32,
    pub extinctions: u32,
    pub last_extinction_tick: Option<u64>,
}
