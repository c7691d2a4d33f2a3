//! Seam between the simulation and whatever draws it

use crate::components::FishView;
use crate::world::TickResult;

/// Turns per-fish frame data into visual state. The simulation never reads
/// anything back from an adapter.
pub trait PresentationAdapter {
    /// Draw the live fish, in spawn order. Fish absent from `frame` are gone.
    fn present(&mut self, frame: &[FishView]);

    /// Like `present`, with the state revision the frame was taken at. Frames
    /// can arrive out of order when ticks and commands race to the adapter;
    /// adapters that care override this and drop the older one.
    fn present_at(&mut self, _revision: u64, frame: &[FishView]) {
        self.present(frame);
    }

    /// The last fish died on `tick`.
    fn on_terminal(&mut self, _tick: u64) {}
}

impl TickResult {
    /// Hand this tick's frame, and the terminal notice if any, to an adapter.
    pub fn deliver<A: PresentationAdapter + ?Sized>(&self, adapter: &mut A) {
        adapter.present_at(self.revision, &self.frame);
        if self.terminal {
            adapter.on_terminal(self.tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ContainerBounds, Vitality};
    use crate::config::SimulationConfig;
    use crate::world::SimulationState;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<usize>,
        terminals: Vec<u64>,
    }

    impl PresentationAdapter for Recorder {
        fn present(&mut self, frame: &[FishView]) {
            self.frames.push(frame.len());
        }

        fn on_terminal(&mut self, tick: u64) {
            self.terminals.push(tick);
        }
    }

    #[test]
    fn test_deliver_reports_terminal_once() {
        let bounds = ContainerBounds::new(400.0, 300.0).unwrap();
        let config = SimulationConfig {
            seed: Some(9),
            ..SimulationConfig::default()
        };
        let mut state = SimulationState::new(config, bounds).unwrap();
        let id = state.spawn();
        state.set_vitality(id, Vitality { health: 0.01, decay_rate: 1.0 });

        let mut recorder = Recorder::default();
        for _ in 0..3 {
            state.step().deliver(&mut recorder);
        }

        assert_eq!(recorder.frames, vec![0, 0, 0]);
        assert_eq!(recorder.terminals, vec![1]);
    }
}
