mod events;
mod session;

pub use events::InputEvent;
pub use session::{Session, SimulationState};
