//! ECS Systems - process fish each tick or on command

pub mod decay;
pub mod feeding;
pub mod movement;
pub mod spawn;

pub use decay::decay_system;
pub use feeding::feed_system;
pub use movement::movement_system;
pub use spawn::{spawn_fish, FishDistributions};
