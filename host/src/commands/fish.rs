use simulation::{FishId, FishView};
use tracing::debug;

use super::{lock, sync_board};
use crate::state::{AppState, FeedingModeState};

/// Add a randomized fish; returns its id.
pub fn spawn_fish(state: &AppState) -> Result<u64, String> {
    let id = lock(&state.simulation)?.spawn();
    sync_board(state)?;
    Ok(id.0)
}

/// Remove the most recently added fish. `None` when the tank is empty.
pub fn remove_fish(state: &AppState) -> Result<Option<u64>, String> {
    let removed = lock(&state.simulation)?.despawn();
    if removed.is_some() {
        sync_board(state)?;
    }
    Ok(removed.map(|id| id.0))
}

/// Feed a fish directly, regardless of feeding mode.
pub fn feed_fish(state: &AppState, fish_id: u64) -> Result<f64, String> {
    lock(&state.simulation)?
        .feed(FishId(fish_id))
        .ok_or_else(|| format!("fish {} not found or cannot be fed", fish_id))
}

/// Pointer click inside the tank. Feeds the fish under the pointer while
/// feeding mode is on; returns its new health.
pub fn click_fish(state: &AppState, x: f64, y: f64) -> Result<Option<f64>, String> {
    let Some(id) = lock(&state.board)?.hit_test(x, y) else {
        return Ok(None);
    };
    let health = lock(&state.simulation)?.interact(id);
    debug!("Click on fish {:?} at ({:.1}, {:.1}) -> {:?}", id, x, y, health);
    Ok(health)
}

pub fn toggle_feeding_mode(state: &AppState) -> Result<FeedingModeState, String> {
    Ok(lock(&state.simulation)?.toggle_feeding_mode().into())
}

pub fn get_feeding_mode(state: &AppState) -> Result<FeedingModeState, String> {
    Ok(lock(&state.simulation)?.feeding_mode().into())
}

pub fn get_fish_count(state: &AppState) -> Result<u32, String> {
    Ok(lock(&state.simulation)?.population() as u32)
}

pub fn get_fish(state: &AppState, fish_id: u64) -> Result<Option<FishView>, String> {
    Ok(lock(&state.simulation)?.fish(FishId(fish_id)))
}

pub fn get_all_fish(state: &AppState) -> Result<Vec<FishView>, String> {
    Ok(lock(&state.simulation)?.snapshot())
}
