use serde::Serialize;

use super::lock;
use crate::state::AppState;

#[derive(Serialize, Debug)]
pub struct MemoryUsage {
    pub physical_mem: u64,
    pub virtual_mem: u64,
    pub fish: u32,
    pub sprites: u32,
}

/// Process memory alongside the number of live fish and sprites.
pub fn get_memory_usage(state: &AppState) -> Result<MemoryUsage, String> {
    let (physical_mem, virtual_mem) = memory_stats::memory_stats()
        .map(|stats| (stats.physical_mem as u64, stats.virtual_mem as u64))
        .unwrap_or((0, 0));

    Ok(MemoryUsage {
        physical_mem,
        virtual_mem,
        fish: lock(&state.simulation)?.population() as u32,
        sprites: lock(&state.board)?.len() as u32,
    })
}
