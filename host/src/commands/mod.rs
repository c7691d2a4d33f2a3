pub mod config;
pub mod fish;
pub mod frames;
pub mod memory;

use std::sync::{Mutex, MutexGuard};

use simulation::PresentationAdapter;

use crate::state::AppState;

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, String> {
    mutex.lock().map_err(|_| "state lock poisoned".to_string())
}

/// Redraw the board from the current fish, outside of a tick.
pub(crate) fn sync_board(state: &AppState) -> Result<(), String> {
    let (revision, frame) = {
        let sim = lock(&state.simulation)?;
        (sim.revision(), sim.snapshot())
    };
    lock(&state.board)?.present_at(revision, &frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HostConfig;
    use simulation::SimulationConfig;

    #[test]
    fn test_late_tick_does_not_hide_a_new_fish() {
        let state = AppState::new(HostConfig {
            tank_width: 400.0,
            tank_height: 300.0,
            simulation: SimulationConfig {
                seed: Some(41),
                ..SimulationConfig::default()
            },
            ..HostConfig::default()
        })
        .unwrap();

        // Tick computed, then a command slips in before it reaches the board
        let late = lock(&state.simulation).unwrap().step();
        let id = fish::spawn_fish(&state).unwrap();
        late.deliver(&mut *lock(&state.board).unwrap());

        let board = lock(&state.board).unwrap();
        assert_eq!(board.len(), 6);
        assert!(board.sprite(simulation::FishId(id)).is_some());
    }
}
