use super::Cell;

/// Grid is the fixed-size board the automaton runs on.
/// Dimensions are set at construction and never change; `evolve` builds the
/// next generation into a fresh grid instead of mutating in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid with the given cells alive. Out-of-range coordinates are dropped.
    pub fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Invert the cell at position. Returns the new state, or `None` when
    /// the position is outside the grid (in which case nothing changes).
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }

    /// Count live neighbors. Cells past the edge count as dead; the grid does not wrap.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation. Every cell is evaluated against `self`,
    /// so no cell sees a neighbor that was already updated this step.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }
}
