/// Cell is the state of one square of the Life grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead (used by mouse painting)
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rule_table() {
        // (current, neighbors, next)
        let cases = [
            (Cell::Alive, 1, Cell::Dead),
            (Cell::Alive, 2, Cell::Alive),
            (Cell::Alive, 3, Cell::Alive),
            (Cell::Alive, 4, Cell::Dead),
            (Cell::Dead, 2, Cell::Dead),
            (Cell::Dead, 3, Cell::Alive),
            (Cell::Dead, 4, Cell::Dead),
        ];
        for (current, neighbors, next) in cases {
            assert_eq!(current.evolve(neighbors), next, "{current:?} with {neighbors}");
        }
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
    }

    proptest! {
        #[test]
        fn alive_survives_only_on_two_or_three(n in 0u8..=8) {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            prop_assert_eq!(Cell::Alive.evolve(n), expected);
        }

        #[test]
        fn dead_is_born_only_on_three(n in 0u8..=8) {
            prop_assert_eq!(Cell::Dead.evolve(n).is_alive(), n == 3);
        }
    }
}
