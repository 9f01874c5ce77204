use core::fmt;

use indexmap::IndexSet;

use crate::gol::cell::Cell;
use crate::util::cell::{CellCoord, CellState};

// All 8 Moore neighbourhood offsets around a cell.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Errors surfaced by board construction and deserialization. Every other
/// board operation is total over a well formed board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { width: usize, height: usize },
    EmptyInput,
    RaggedRow { row: usize, len: usize, expected: usize },
    InvalidState { row: usize, col: usize, ch: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } =>
                write!(f, "Invalid board dimensions: {}x{}", width, height),
            BoardError::EmptyInput =>
                write!(f, "Cannot deserialize an empty string"),
            BoardError::RaggedRow { row, len, expected } =>
                write!(f, "Row {} has {} cells, expected {}", row, len, expected),
            BoardError::InvalidState { row, col, ch } =>
                write!(f, "Invalid cell state '{}' at row {} column {}", ch, row, col),
        }
    }
}

impl std::error::Error for BoardError {}

/// The board owns a `width x height` arena of cells and drives the
/// simulation. One `advance` call is one generation: a compute pass over the
/// active set followed by a commit pass over the same set.
///
/// The two frontier sets are a performance optimization, not logical state:
/// a cell can only change state next generation if it is `On` now or is
/// adjacent to an `On` cell now, so only those cells are ever evaluated.
/// `IndexSet` keeps iteration in insertion order, which makes a run
/// reproducible.
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    active: IndexSet<usize>,
    next_active: IndexSet<usize>,
}

impl Board {
    /// Create a board of the given dimensions, seeding every cell from the
    /// initializer. The initializer is called exactly once per coordinate in
    /// row-major order. Fails with `InvalidDimensions` if either dimension
    /// is zero.
    pub fn new<F>(width: usize, height: usize, initializer: F) -> Result<Self, BoardError>
        where F: FnMut(CellCoord) -> CellState
    {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self::build(width, height, initializer))
    }

    // Construction for callers that already hold validated dimensions.
    fn build<F>(width: usize, height: usize, mut initializer: F) -> Self
        where F: FnMut(CellCoord) -> CellState
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(initializer(CellCoord::new(x, y))));
            }
        }
        let mut board = Board {
            width,
            height,
            cells,
            active: IndexSet::new(),
            next_active: IndexSet::new(),
        };
        board.register_cell_neighbours();
        board.seed_active_set();
        board
    }

    // Wire the Moore adjacency once. Offsets falling outside the grid are
    // skipped, so edge cells end up with 3 to 5 neighbours and a 1x1 board
    // with none.
    fn register_cell_neighbours(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let index = y * self.width + x;
                for (dx, dy) in NEIGHBOUR_OFFSETS {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || nx >= self.width as isize {
                        continue;
                    }
                    if ny < 0 || ny >= self.height as isize {
                        continue;
                    }
                    let neighbour = ny as usize * self.width + nx as usize;
                    self.cells[index].add_neighbour(neighbour);
                }
            }
        }
    }

    // Every initially live cell and its neighbours may need evaluation on the
    // first advance; nothing else can change.
    fn seed_active_set(&mut self) {
        for index in 0..self.cells.len() {
            if self.cells[index].current_state().is_on() {
                self.mark_active(index);
            }
        }
    }

    // Queue a cell and its whole neighbourhood for evaluation next turn.
    fn mark_active(&mut self, index: usize) {
        self.next_active.insert(index);
        self.next_active
            .extend(self.cells[index].neighbours().iter().copied());
    }

    fn live_neighbours(&self, index: usize) -> usize {
        self.cells[index]
            .neighbours()
            .iter()
            .filter(|&&neighbour| self.cells[neighbour].current_state().is_on())
            .count()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The current state of the cell at `coord`. Coordinates must lie inside
    /// the grid; the board does not bounds-check beyond neighbour wiring.
    pub fn state_at(&self, coord: CellCoord) -> CellState {
        self.cells[coord.y * self.width + coord.x].current_state()
    }

    /// Number of cells currently `On`.
    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.current_state().is_on())
            .count()
    }

    /// Coordinates of every cell currently `On`, in row-major order.
    pub fn alive_cells(&self) -> Vec<CellCoord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.current_state().is_on())
            .map(|(index, _)| CellCoord::new(index % self.width, index / self.width))
            .collect()
    }

    /// Flip the cell at `coord` between `On` and `Off` (walls stay walls).
    /// A cell toggled to `On` re-enters the active set with its neighbours.
    pub fn toggle_cell(&mut self, coord: CellCoord) {
        let index = coord.y * self.width + coord.x;
        if self.cells[index].toggle() && self.cells[index].current_state().is_on() {
            self.mark_active(index);
        }
    }

    /// Flip the cell at `coord` between `Wall` and `Off`.
    pub fn toggle_wall(&mut self, coord: CellCoord) {
        let index = coord.y * self.width + coord.x;
        if self.cells[index].toggle_wall() && self.cells[index].current_state().is_on() {
            self.mark_active(index);
        }
    }

    /// Advance the board one generation.
    ///
    /// The compute pass finishes over the entire active set before any commit
    /// happens, so every cell observes the previous generation's neighbour
    /// states. Every cell that ends the turn `On` re-seeds itself and its
    /// neighbourhood for the next turn; an unchanged `On` cell must stay
    /// tracked or the death of its last neighbours would go unnoticed.
    pub fn advance(&mut self) {
        std::mem::swap(&mut self.active, &mut self.next_active);
        self.next_active.clear();
        let active = std::mem::take(&mut self.active);

        for &index in &active {
            let live = self.live_neighbours(index);
            self.cells[index].compute_next_state(live);
        }

        let mut flipped = 0;
        for &index in &active {
            if self.cells[index].commit_next_state() {
                flipped += 1;
            }
            if self.cells[index].current_state().is_on() {
                self.mark_active(index);
            }
        }
        log::trace!(
            target: "Board",
            "Evaluated {} cells, flipped {}, {} queued for next turn",
            active.len(),
            flipped,
            self.next_active.len()
        );

        self.active = active;
    }

    /// Serialize the board to the text format: one digit per cell (`0` Off,
    /// `1` On, `2` Wall), rows joined by commas, x varying fastest.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for y in 0..self.height {
            if y > 0 {
                out.push(',');
            }
            for x in 0..self.width {
                out.push(self.cells[y * self.width + x].current_state().as_digit());
            }
        }
        out
    }

    /// Parse a board from the text format produced by [`serialize`]. Fails
    /// on empty input, rows of unequal length or any character outside
    /// `{0, 1, 2}`; no partial board is ever produced.
    ///
    /// [`serialize`]: Board::serialize
    pub fn deserialize(text: &str) -> Result<Self, BoardError> {
        if text.is_empty() {
            return Err(BoardError::EmptyInput);
        }
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        for (y, row) in text.split(',').enumerate() {
            let mut states = Vec::with_capacity(row.len());
            for (x, ch) in row.chars().enumerate() {
                let state = CellState::from_digit(ch)
                    .ok_or(BoardError::InvalidState { row: y, col: x, ch })?;
                states.push(state);
            }
            if y > 0 && states.len() != rows[0].len() {
                return Err(BoardError::RaggedRow {
                    row: y,
                    len: states.len(),
                    expected: rows[0].len(),
                });
            }
            rows.push(states);
        }
        Board::new(rows[0].len(), rows.len(), |coord| rows[coord.y][coord.x])
    }
}

impl Clone for Board {
    /// Deep copy: a fresh board seeded from this board's per-cell states.
    /// Active-set bookkeeping is rebuilt from scratch rather than copied.
    fn clone(&self) -> Self {
        Board::build(self.width, self.height, |coord| self.state_at(coord))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("alive", &self.alive_count())
            .finish()
    }
}
