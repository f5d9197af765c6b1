//! Window, grid and timing settings.
//!
//! Everything is fixed at compile time; `Config::default()` is the only
//! configuration the binary uses.

use std::time::Duration;

use macroquad::prelude::KeyCode;
use macroquad::window::Conf;

use crate::error::{LifeError, Result};

pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 700;
pub const CELL_SIZE: u32 = 10;
pub const WINDOW_TITLE: &str = "Game of Life";

/// Delay between frames while the simulation runs
pub const RUNNING_DELAY_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub title: String,
    pub running_delay: Duration,
    /// Key that switches between paused and running
    pub pause_key: KeyCode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            title: WINDOW_TITLE.to_owned(),
            running_delay: Duration::from_millis(RUNNING_DELAY_MS),
            pause_key: KeyCode::P,
        }
    }
}

impl Config {
    /// Reject settings that would produce an empty grid
    pub fn validate(self) -> Result<Self> {
        if self.cell_size == 0 {
            return Err(LifeError::ZeroCellSize);
        }
        if self.window_width < self.cell_size || self.window_height < self.cell_size {
            return Err(LifeError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }
        if i32::try_from(self.window_width).is_err() || i32::try_from(self.window_height).is_err() {
            return Err(LifeError::WindowTooLarge {
                width: self.window_width,
                height: self.window_height,
                max: i32::MAX,
            });
        }
        Ok(self)
    }

    /// Grid size in cells: `(window / cell_size)` along each axis
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cell = self.cell_size.max(1);
        (
            (self.window_width / cell) as usize,
            (self.window_height / cell) as usize,
        )
    }

    pub fn cell_size_px(&self) -> f32 {
        self.cell_size as f32
    }

    /// Map a pixel position to the grid cell under it.
    /// Positions left of or above the origin, non-finite values and positions
    /// past the last cell all map to `None`.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        let size = self.cell_size_px();
        let gx = (px / size).floor();
        let gy = (py / size).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }

        let (gx, gy) = (gx as usize, gy as usize);
        let (width, height) = self.grid_dimensions();
        (gx < width && gy < height).then_some((gx, gy))
    }

    /// Build the macroquad window configuration
    pub fn window_conf(&self) -> Result<Conf> {
        let too_large = |_| LifeError::WindowTooLarge {
            width: self.window_width,
            height: self.window_height,
            max: i32::MAX,
        };

        Ok(Conf {
            window_title: self.title.clone(),
            window_width: i32::try_from(self.window_width).map_err(too_large)?,
            window_height: i32::try_from(self.window_height).map_err(too_large)?,
            window_resizable: false,
            ..Default::default()
        })
    }
}
