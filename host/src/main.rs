//! Aquarium host
//!
//! Runs the fish tank headless: frames tick in the background, the sprite
//! board mirrors them, bubbles are emitted on a timer and an emptied tank is
//! restocked. The optional first argument is a JSON config file.

mod commands;
mod presentation;
mod state;
mod visitor;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use presentation::BubbleSpec;
use state::{AppState, HostConfig};

/// How often the host checks on the frame loop.
const SUPERVISE_INTERVAL: Duration = Duration::from_millis(100);
const STATUS_INTERVAL: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = HostConfig::load(config_path.as_deref())?;
    let app_state = AppState::new(config)?;

    let app_config = commands::config::get_config(&app_state);
    info!(
        "Aquarium {}x{} starting with {} fish",
        app_config.tank_width, app_config.tank_height, app_config.initial_population
    );

    if app_state.config.start_in_feeding_mode {
        commands::fish::toggle_feeding_mode(&app_state).map_err(anyhow::Error::msg)?;
    }
    commands::frames::start_loop(&app_state).map_err(anyhow::Error::msg)?;

    let run_for = match app_state.config.run_seconds {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let bubble_interval = Duration::from_millis(app_state.config.bubble_interval_ms.max(1));
    let mut bubble_rng = match app_state.config.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    let started = Instant::now();
    let mut last_bubble = started;
    let mut last_status = started;
    let mut last_visit = started;
    let visitor_interval = Duration::from_millis(app_state.config.visitor_interval_ms);
    let mut bubbles = 0u64;
    let mut pending_resize = app_state.config.resize;

    while run_for.map_or(true, |limit| started.elapsed() < limit) {
        thread::sleep(SUPERVISE_INTERVAL);

        while last_bubble.elapsed() >= bubble_interval {
            let bubble = BubbleSpec::random(&mut bubble_rng);
            debug!("Bubble {:?}", bubble);
            bubbles += 1;
            last_bubble += bubble_interval;
        }

        let loop_state = commands::frames::get_loop_state(&app_state).map_err(anyhow::Error::msg)?;
        // The runner only revokes itself when the last fish dies
        if !loop_state.is_running {
            if app_state.config.restart_on_extinction {
                info!(
                    "Restocking the aquarium (emptied on tick {:?})",
                    loop_state.last_extinction_tick
                );
                commands::frames::restart_world(&app_state).map_err(anyhow::Error::msg)?;
                // Restocking puts the tank back in normal mode
                if app_state.config.start_in_feeding_mode {
                    commands::fish::toggle_feeding_mode(&app_state).map_err(anyhow::Error::msg)?;
                }
            } else {
                info!("Every fish has died, shutting down");
                break;
            }
        }

        if let Some(resize) = pending_resize {
            if started.elapsed() >= Duration::from_secs(resize.after_seconds) {
                commands::frames::set_tank_size(&app_state, resize.width, resize.height)
                    .map_err(anyhow::Error::msg)?;
                info!("Tank resized to {}x{}", resize.width, resize.height);
                pending_resize = None;
            }
        }

        if !visitor_interval.is_zero() && last_visit.elapsed() >= visitor_interval {
            last_visit = Instant::now();
            visitor::visit(&app_state).map_err(anyhow::Error::msg)?;
        }

        if last_status.elapsed() >= STATUS_INTERVAL {
            last_status = Instant::now();
            let mode = commands::fish::get_feeding_mode(&app_state).map_err(anyhow::Error::msg)?;
            let memory = commands::memory::get_memory_usage(&app_state).map_err(anyhow::Error::msg)?;
            info!(
                "tick {} | {} fish, {} sprites | {} {} | extinctions: {} | {} KiB rss, {} KiB virtual",
                loop_state.tick,
                memory.fish,
                memory.sprites,
                mode.button_icon,
                mode.button_label,
                loop_state.extinctions,
                memory.physical_mem / 1024,
                memory.virtual_mem / 1024
            );
        }
    }

    let final_state = commands::frames::stop_loop(&app_state).map_err(anyhow::Error::msg)?;
    info!(
        "Aquarium stopped after {} ticks, {} fish left, {} bubbles",
        final_state.tick, final_state.population, bubbles
    );

    Ok(())
}
