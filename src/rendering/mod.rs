use macroquad::prelude::*;

use crate::domain::Grid;

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const DEAD_COLOR: Color = BLACK;
const OUTLINE_THICKNESS: f32 = 1.0;

/// Draw every cell as a filled square with an outline of the same colour
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    for (x, y, cell) in grid.iter_cells() {
        let screen_x = x as f32 * cell_size;
        let screen_y = y as f32 * cell_size;
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };

        draw_rectangle(screen_x, screen_y, cell_size, cell_size, color);
        draw_rectangle_lines(
            screen_x,
            screen_y,
            cell_size,
            cell_size,
            OUTLINE_THICKNESS,
            color,
        );
    }
}

/// Clear to black and draw the grid
pub fn draw_frame(grid: &Grid, cell_size: f32) {
    clear_background(DEAD_COLOR);
    draw_grid(grid, cell_size);
}
