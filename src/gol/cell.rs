use crate::util::cell::CellState;

/// A single cell in the board arena. The cell keeps its current state, the
/// pending state written during the compute phase of a generation, and the
/// arena indices of its Moore neighbours.
///
/// Neighbour indices are wired once by the board and never change afterwards.
/// State transitions report whether anything changed so the board can keep
/// its active set up to date.
#[derive(Debug, Clone)]
pub struct Cell {
    current: CellState,
    pending: CellState,
    neighbours: Vec<usize>,
}

impl Cell {
    pub fn new(initial: CellState) -> Self {
        Cell {
            current: initial,
            pending: initial,
            neighbours: Vec::new(),
        }
    }

    pub fn current_state(&self) -> CellState {
        self.current
    }

    /// Arena indices of the up to 8 neighbouring cells.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }

    pub(super) fn add_neighbour(&mut self, index: usize) {
        self.neighbours.push(index);
    }

    /// Flip the cell between `On` and `Off`. A `Wall` is left untouched.
    /// Returns whether the state changed.
    pub fn toggle(&mut self) -> bool {
        let next = self.current.into_toggled();
        let changed = next != self.current;
        self.current = next;
        self.pending = next;
        changed
    }

    /// Flip the cell between `Wall` and `Off`: a wall is knocked down, any
    /// other state is bricked over. Returns whether the state changed.
    pub fn toggle_wall(&mut self) -> bool {
        let next = self.current.into_wall_toggled();
        let changed = next != self.current;
        self.current = next;
        self.pending = next;
        changed
    }

    /// Compute phase: derive the next state from the current state and the
    /// number of live neighbours, storing it in the pending slot. The current
    /// state is not touched, so every cell of a generation observes the same
    /// snapshot no matter the order of compute calls.
    pub fn compute_next_state(&mut self, live_neighbours: usize) {
        self.pending = match (self.current, live_neighbours) {
            // Any live cell with fewer than two live neighbours dies, as if by underpopulation.
            (CellState::On, 0..=1) => CellState::Off,

            // Any live cell with two or three live neighbours lives on to the next generation.
            (CellState::On, 2 | 3) => CellState::On,

            // Any live cell with more than three live neighbours dies, as if by overpopulation.
            (CellState::On, _) => CellState::Off,

            // Any dead cell with exactly three live neighbours becomes a live cell, as if by reproduction.
            (CellState::Off, 3) => CellState::On,

            // Everything else holds its state; walls in particular never transition.
            (state, _) => state,
        };
    }

    /// Commit phase: move the pending state into the current state. Returns
    /// whether the state changed.
    pub fn commit_next_state(&mut self) -> bool {
        let changed = self.pending != self.current;
        self.current = self.pending;
        changed
    }
}
