//! Frame Runner - Background thread that ticks the simulation once per frame

use std::sync::{Arc, Mutex, atomic::{AtomicBool, Ordering}};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{error, info, warn};
use crate::world::{SimulationState, TickResult};

/// Frame runner that manages a background thread for automatic ticking.
///
/// Commands lock the same state mutex as the runner, so they always land
/// between two ticks, never inside one.
pub struct FrameRunner {
    is_running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl FrameRunner {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start ticking at the specified interval
    ///
    /// # Arguments
    /// * `state` - Shared simulation state
    /// * `interval_ms` - Milliseconds between frames (16 for ~60 Hz)
    /// * `callback` - Receives every tick result, including the terminal one
    ///
    /// The runner revokes itself right after delivering a terminal result.
    pub fn start<F>(
        &mut self,
        state: Arc<Mutex<SimulationState>>,
        interval_ms: u64,
        callback: F,
    ) where
        F: Fn(TickResult) + Send + 'static,
    {
        if self.is_running.load(Ordering::Acquire) {
            warn!("Frame runner already running");
            return;
        }
        // Reap a thread that stopped itself on a terminal tick
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }

        info!("Starting frame runner ({}ms intervals)", interval_ms);
        self.is_running.store(true, Ordering::Release);
        let running = Arc::clone(&self.is_running);

        let handle = thread::spawn(move || {
            while running.load(Ordering::Acquire) {
                let tick_result = {
                    let Ok(mut s) = state.lock() else {
                        error!("Simulation state poisoned, stopping frame runner");
                        running.store(false, Ordering::Release);
                        break;
                    };
                    s.step()
                };

                let terminal = tick_result.terminal;
                callback(tick_result);

                if terminal {
                    info!("Terminal tick reached, frame runner revoked");
                    running.store(false, Ordering::Release);
                    break;
                }

                thread::sleep(Duration::from_millis(interval_ms));
            }
            info!("Frame runner thread stopped");
        });

        self.thread_handle = Some(handle);
    }

    /// Stop ticking and wait for the thread to exit
    pub fn stop(&mut self) {
        if self.is_running.swap(false, Ordering::AcqRel) {
            info!("Stopping frame runner...");
        }

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join(); // Thread panic result intentionally ignored during shutdown
        }
    }

    /// Check if frames are currently being scheduled
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Acquire)
    }
}

impl Default for FrameRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
