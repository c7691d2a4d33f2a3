//! Aquarium Simulation Benchmark
//!
//! Standalone benchmark for the simulation engine.

use simulation::{ContainerBounds, SimulationConfig, SimulationState};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const TANK_WIDTH: f64 = 1280.0;
const TANK_HEIGHT: f64 = 720.0;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Aquarium Simulation Engine starting...");

    let config = SimulationConfig {
        seed: Some(12345),
        ..SimulationConfig::default()
    };
    let bounds = ContainerBounds::new(TANK_WIDTH, TANK_HEIGHT)?;
    let mut state = SimulationState::new(config, bounds)?;

    let initial_pop = 100_000;
    info!("Seeding {} fish...", initial_pop);
    state.seed_population(initial_pop);

    // One minute of frames at 60 Hz
    let frames = 3_600;
    info!("Running {} frames...", frames);
    let start = std::time::Instant::now();
    let mut extinct_at = None;
    for _ in 0..frames {
        let result = state.step();
        if result.terminal {
            extinct_at = Some(result.tick);
            break;
        }
    }
    let elapsed = start.elapsed();

    info!(
        "Benchmark complete: {:?} total, {:?} per frame, {} fish left",
        elapsed,
        elapsed / state.tick_count().max(1) as u32,
        state.population()
    );
    if let Some(tick) = extinct_at {
        info!("Every fish starved by frame {}", tick);
    }

    Ok(())
}
