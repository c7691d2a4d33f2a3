//! Simulated visitor
//!
//! Stands in for a person at the glass: keeps the tank at its initial
//! population and feeds the hungriest fish. With feeding mode on it clicks
//! the fish like a user would; otherwise it drops food straight in. It never
//! touches the feeding mode itself.

use simulation::FishId;
use tracing::debug;

use crate::commands::{fish, lock};
use crate::state::AppState;

pub fn visit(state: &AppState) -> Result<(), String> {
    let initial = state.config.simulation.initial_population;
    let population = fish::get_fish_count(state)? as usize;
    if population < initial {
        let id = fish::spawn_fish(state)?;
        debug!("Visitor added fish {}", id);
    } else if population > initial {
        let removed = fish::remove_fish(state)?;
        debug!("Visitor took out fish {:?}", removed);
    }

    let hungriest = fish::get_all_fish(state)?
        .into_iter()
        .filter_map(|f| f.health.map(|health| (f.id, health)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b));
    let Some((target, health)) = hungriest else {
        return Ok(());
    };

    if fish::get_feeding_mode(state)?.is_feeding {
        let Some((x, y)) = aim(state, target)? else {
            return Ok(());
        };
        let fed = fish::click_fish(state, x, y)?;
        debug!("Visitor clicked fish {:?} at health {:.1} -> {:?}", target, health, fed);
    } else {
        let fed = fish::feed_fish(state, target.0)?;
        debug!("Visitor fed fish {:?} at health {:.1} -> {:.1}", target, health, fed);
    }
    Ok(())
}

/// Middle of the sprite the board last drew, else of the fish itself.
/// `None` once the fish is gone.
fn aim(state: &AppState, id: FishId) -> Result<Option<(f64, f64)>, String> {
    if let Some(sprite) = lock(&state.board)?.sprite(id) {
        return Ok(Some((sprite.left + sprite.width / 2.0, sprite.top + sprite.height / 2.0)));
    }
    Ok(fish::get_fish(state, id.0)?.map(|f| (f.x + f.width / 2.0, f.y + f.height / 2.0)))
}
