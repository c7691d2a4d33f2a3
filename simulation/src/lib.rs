//! Aquarium Simulation Engine
//!
//! Frame-driven fish tank simulation using ECS architecture.
//! Fish swim, bounce off the tank walls, starve and can be fed; rendering
//! is left to whoever consumes the per-tick frame data.

pub mod components;
pub mod config;
pub mod error;
pub mod frame_runner;
pub mod presentation;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::SimulationConfig;
pub use error::ConfigurationError;
pub use frame_runner::FrameRunner;
pub use presentation::PresentationAdapter;
pub use world::{SimulationState, TickResult};
