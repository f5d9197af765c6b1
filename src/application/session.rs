use std::time::Duration;

use macroquad::prelude::MouseButton;
use tracing::{debug, trace};

use super::InputEvent;
use crate::config::Config;
use crate::domain::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SimulationState {
    #[default]
    Paused,
    Running,
}

/// Session owns the grid and the run-loop state for one program run.
/// The binary feeds it input each frame, calls `update`, then draws.
pub struct Session {
    config: Config,
    grid: Grid,
    state: SimulationState,
    quit: bool,
    mouse_held: bool,
    last_mouse: (f32, f32),
    delay: Duration,
    generation: u64,
}

impl Session {
    /// Start paused with an all-dead grid sized from the config
    pub fn new(config: Config) -> Self {
        let (width, height) = config.grid_dimensions();
        Self {
            grid: Grid::new(width, height),
            config,
            state: SimulationState::Paused,
            quit: false,
            mouse_held: false,
            last_mouse: (0.0, 0.0),
            delay: Duration::ZERO,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn is_mouse_held(&self) -> bool {
        self.mouse_held
    }

    pub fn last_mouse(&self) -> (f32, f32) {
        self.last_mouse
    }

    /// Generations applied since startup
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How long to wait after presenting the current frame
    pub fn frame_delay(&self) -> Duration {
        self.delay
    }

    /// Switch between paused and running; the frame delay follows the state
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SimulationState::Paused => SimulationState::Running,
            SimulationState::Running => SimulationState::Paused,
        };
        self.delay = match self.state {
            SimulationState::Running => self.config.running_delay,
            SimulationState::Paused => Duration::ZERO,
        };
        debug!(state = ?self.state, generation = self.generation, "simulation toggled");
    }

    /// Record the cursor position and invert the cell under it, if any
    pub fn paint_at(&mut self, x: f32, y: f32) {
        self.last_mouse = (x, y);

        if let Some((gx, gy)) = self.config.cell_at(x, y) {
            let cell = self.grid.toggle(gx, gy);
            trace!(x = gx, y = gy, ?cell, "cell toggled");
        }
    }

    /// True once the cursor is a full cell away from the last paint on either axis
    fn moved_a_cell(&self, x: f32, y: f32) -> bool {
        let size = self.config.cell_size_px();
        let (last_x, last_y) = self.last_mouse;
        (last_x - x).abs() >= size || (last_y - y).abs() >= size
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                debug!("quit requested");
                self.quit = true;
            }
            InputEvent::KeyDown(key) if key == self.config.pause_key => self.toggle_pause(),
            InputEvent::KeyDown(_) => {}
            InputEvent::MouseDown {
                button: MouseButton::Left,
                x,
                y,
            } => {
                self.mouse_held = true;
                self.paint_at(x, y);
            }
            InputEvent::MouseDown { .. } => {}
            InputEvent::MouseUp { .. } => self.mouse_held = false,
            InputEvent::MouseMotion { x, y } => {
                if self.mouse_held && self.moved_a_cell(x, y) {
                    self.paint_at(x, y);
                }
            }
        }
    }

    pub fn handle_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    /// Advance one generation when running. Returns whether the grid changed generation.
    pub fn update(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.grid = self.grid.evolve();
        self.generation += 1;
        true
    }
}
