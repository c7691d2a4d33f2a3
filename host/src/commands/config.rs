use crate::state::{AppConfig, AppState};

pub fn get_config(state: &AppState) -> AppConfig {
    let sim = &state.config.simulation;
    AppConfig {
        tank_width: state.config.tank_width,
        tank_height: state.config.tank_height,
        min_fish_size: sim.min_size,
        max_fish_size: sim.max_size,
        aspect_ratio: sim.aspect_ratio,
        health_enabled: sim.health_enabled,
        feed_amount: sim.feed_amount,
        initial_population: sim.initial_population,
        frame_interval_ms: sim.frame_interval_ms,
    }
}
