use std::sync::Arc;

use simulation::{ContainerBounds, FrameRunner};
use tracing::warn;

use super::{lock, sync_board};
use crate::state::{AppState, LoopState};

pub fn get_loop_state(state: &AppState) -> Result<LoopState, String> {
    let (tick, population) = {
        let sim = lock(&state.simulation)?;
        (sim.tick_count(), sim.population() as u32)
    };
    let is_running = lock(&state.frame_runner)?
        .as_ref()
        .map(|r| r.is_running())
        .unwrap_or(false);

    let board = lock(&state.board)?;
    Ok(LoopState {
        is_running,
        tick,
        population,
        extinctions: board.extinctions(),
        last_extinction_tick: board.last_extinction_tick(),
    })
}

/// Start ticking once per frame. Every result is drawn on the sprite board.
pub fn start_loop(state: &AppState) -> Result<LoopState, String> {
    let interval = state.config.simulation.frame_interval_ms;
    let board = Arc::clone(&state.board);

    {
        let mut global_runner = lock(&state.frame_runner)?;
        if let Some(mut previous) = global_runner.take() {
            previous.stop();
        }

        let mut runner = FrameRunner::new();
        runner.start(Arc::clone(&state.simulation), interval, move |tick_result| {
            match board.lock() {
                Ok(mut board) => tick_result.deliver(&mut *board),
                Err(_) => warn!("Sprite board poisoned, dropping frame {}", tick_result.tick),
            }
        });
        *global_runner = Some(runner);
    }

    get_loop_state(state)
}

pub fn stop_loop(state: &AppState) -> Result<LoopState, String> {
    {
        let mut global_runner = lock(&state.frame_runner)?;
        if let Some(mut runner) = global_runner.take() {
            runner.stop();
        }
    }

    get_loop_state(state)
}

/// Restock the tank with the initial population and resume the loop.
pub fn restart_world(state: &AppState) -> Result<LoopState, String> {
    stop_loop(state)?;
    lock(&state.simulation)?.reset();
    sync_board(state)?;
    start_loop(state)
}

/// The tank element changed size.
pub fn set_tank_size(state: &AppState, width: f64, height: f64) -> Result<(), String> {
    let bounds = ContainerBounds::new(width, height).map_err(|e| e.to_string())?;
    lock(&state.simulation)?.resize(bounds);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HostConfig;
    use simulation::{SimulationConfig, Vitality};
    use std::thread;
    use std::time::Duration;

    fn app(config: SimulationConfig) -> AppState {
        AppState::new(HostConfig {
            tank_width: 400.0,
            tank_height: 300.0,
            simulation: SimulationConfig {
                seed: Some(5),
                frame_interval_ms: 5,
                ..config
            },
            ..HostConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_start_and_stop() {
        let state = app(SimulationConfig::classic());

        assert!(start_loop(&state).unwrap().is_running);
        thread::sleep(Duration::from_millis(60));
        let stopped = stop_loop(&state).unwrap();

        assert!(!stopped.is_running);
        assert!(stopped.tick > 0);
        assert_eq!(stopped.population, 5);
        assert_eq!(state.board.lock().unwrap().len(), 5);
    }

    #[test]
    fn test_extinction_stops_loop_and_restart_restocks() {
        let state = app(SimulationConfig::default());
        {
            let mut sim = state.simulation.lock().unwrap();
            for fish in sim.snapshot() {
                sim.set_vitality(fish.id, Vitality { health: 0.01, decay_rate: 0.02 });
            }
        }

        start_loop(&state).unwrap();
        thread::sleep(Duration::from_millis(100));

        let after = get_loop_state(&state).unwrap();
        assert!(!after.is_running);
        assert_eq!(after.population, 0);
        assert_eq!(after.extinctions, 1);
        assert!(after.last_extinction_tick.is_some_and(|tick| tick <= after.tick));
        assert_eq!(state.board.lock().unwrap().len(), 0);

        let restarted = restart_world(&state).unwrap();
        assert!(restarted.is_running);
        assert_eq!(restarted.population, 5);
        stop_loop(&state).unwrap();
    }

    #[test]
    fn test_resize_rejects_bad_bounds() {
        let state = app(SimulationConfig::classic());
        assert!(set_tank_size(&state, 0.0, 100.0).is_err());
        assert!(set_tank_size(&state, 800.0, 600.0).is_ok());
        assert_eq!(state.simulation.lock().unwrap().bounds().width(), 800.0);
    }
}
