// Domain layer - grid and transition rule
pub mod domain;

// Application layer - session state machine and input vocabulary
pub mod application;

pub mod config;
pub mod error;
pub mod logging;

// Infrastructure layer - macroquad rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid};
pub use application::{InputEvent, Session, SimulationState};
pub use config::Config;
pub use error::{LifeError, Result};
