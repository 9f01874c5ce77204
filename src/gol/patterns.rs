use std::collections::HashSet;

use crate::gol::board::{Board, BoardError};
use crate::util::cell::CellState;

/// A named seed pattern. Coordinates are `(x, y)` pairs relative to the
/// pattern's top-left corner; `Pattern::board` centres them on the grid.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
    pub walls: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
        walls: &[],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
        walls: &[],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        walls: &[],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
        walls: &[],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        walls: &[],
    },
    // A blinker oscillating inside a closed wall ring.
    Pattern {
        name: "Boxed Blinker",
        cells: &[(1, 2), (2, 2), (3, 2)],
        walls: &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
            (0, 1), (4, 1),
            (0, 2), (4, 2),
            (0, 3), (4, 3),
            (0, 4), (1, 4), (2, 4), (3, 4), (4, 4),
        ],
    },
];

/// Find a pattern by name, ignoring case.
pub fn lookup(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    // Bounding box of the pattern, walls included.
    fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .chain(self.walls.iter())
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Seed a fresh `width x height` board with this pattern centred on it.
    /// Pattern cells falling outside the grid are dropped.
    pub fn board(&self, width: usize, height: usize) -> Result<Board, BoardError> {
        let (pattern_width, pattern_height) = self.extent();
        let x0 = width.saturating_sub(pattern_width) / 2;
        let y0 = height.saturating_sub(pattern_height) / 2;

        let place = |coords: &[(usize, usize)]| -> HashSet<(usize, usize)> {
            coords
                .iter()
                .map(|&(x, y)| (x + x0, y + y0))
                .filter(|&(x, y)| x < width && y < height)
                .collect()
        };
        let on = place(self.cells);
        let walls = place(self.walls);

        Board::new(width, height, |coord| {
            if walls.contains(&(coord.x, coord.y)) {
                CellState::Wall
            } else if on.contains(&(coord.x, coord.y)) {
                CellState::On
            } else {
                CellState::Off
            }
        })
    }
}
