#[allow(dead_code)]
pub mod oracle {
    use gol_walls::gol::board::Board;
    use gol_walls::util::cell::{CellCoord, CellState};

    const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0),           (1, 0),
        (-1, 1),  (0, 1),  (1, 1),
    ];

    /// Row-major snapshot of a board's per-cell states.
    pub fn snapshot(board: &Board) -> Vec<Vec<CellState>> {
        (0..board.height())
            .map(|y| (0..board.width())
                .map(|x| board.state_at(CellCoord::new(x, y)))
                .collect())
            .collect()
    }

    /// Rebuild a board from a snapshot.
    pub fn board_from(grid: &[Vec<CellState>]) -> Board {
        Board::new(grid[0].len(), grid.len(), |coord: CellCoord| grid[coord.y][coord.x])
            .unwrap()
    }

    /// Reference generation step: a naive two-phase pass over every cell of
    /// the grid, no active-set tracking. The board's optimized advance must
    /// always agree with this.
    pub fn step(grid: &[Vec<CellState>]) -> Vec<Vec<CellState>> {
        let height = grid.len();
        let width = grid[0].len();
        let mut next = grid.to_vec();
        for y in 0..height {
            for x in 0..width {
                let mut live = 0;
                for (dx, dy) in NEIGHBOUR_OFFSETS {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || nx >= width as isize || ny < 0 || ny >= height as isize {
                        continue;
                    }
                    if grid[ny as usize][nx as usize].is_on() {
                        live += 1;
                    }
                }
                next[y][x] = match (grid[y][x], live) {
                    (CellState::On, 2 | 3) => CellState::On,
                    (CellState::On, _) => CellState::Off,
                    (CellState::Off, 3) => CellState::On,
                    (state, _) => state,
                };
            }
        }
        next
    }
}

#[allow(dead_code)]
pub mod seed {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use gol_walls::gol::board::Board;
    use gol_walls::util::cell::CellState;

    fn mix(seed: u64, x: usize, y: usize) -> u64 {
        let mut hasher = DefaultHasher::new();
        (seed, x, y).hash(&mut hasher);
        hasher.finish()
    }

    /// Deterministic random-looking board, roughly a third alive.
    pub fn soup(width: usize, height: usize, seed: u64) -> Board {
        Board::new(width, height, |coord| {
            match mix(seed, coord.x, coord.y) % 16 {
                0..=4 => CellState::On,
                _ => CellState::Off,
            }
        })
        .unwrap()
    }

    /// Soup with a sprinkling of walls mixed in.
    pub fn walled_soup(width: usize, height: usize, seed: u64) -> Board {
        Board::new(width, height, |coord| {
            match mix(seed, coord.x, coord.y) % 16 {
                0..=4 => CellState::On,
                5 => CellState::Wall,
                _ => CellState::Off,
            }
        })
        .unwrap()
    }
}

#[allow(dead_code)]
pub mod visualise {
    use gol_walls::gol::board::Board;
    use gol_walls::util::cell::CellState;

    /// Assert that the board matches the expected grid, printing both side
    /// by side on mismatch (small boards only).
    pub fn assert_eq_grid(context: &str, board: &Board, expected: &[Vec<CellState>]) {
        let actual = super::oracle::snapshot(board);
        if actual == expected {
            return;
        }

        if board.width() <= 32 {
            let banner_len = board.width() * 2 + 7;
            let mut actual = matrix_to_strings(&actual);
            let mut expected = matrix_to_strings(expected);
            actual.insert(0, get_centered_banner(banner_len, "Your result", ' '));
            expected.insert(0, get_centered_banner(banner_len, "Expected result", ' '));
            let output = fold_strings(&[&actual, &expected]);
            log::info!(target: "Test", "{}", output);
        }
        panic!("Test Failed - {}", context);
    }

    fn get_centered_banner(
        len: usize,
        str: &str,
        filling_char: char
    ) -> String {
        assert!(len > str.len(), "string should not be longer than banner");
        let filling = (0..(len - str.len()) / 2).map(|_| filling_char).collect::<String>();
        format!("{}{}{}", filling, str, filling)
    }

    fn fold_strings(items: &[&[String]]) -> String {
        assert!(items.len() > 0, "nothing to fold");
        assert!(
            items.iter().all(|item| item.len() == items[0].len()),
            "items for folding should have same length"
        );
        (0..items[0].len()).fold(String::new(), |output, i| {
            format!(
                "{}\n{}",
                output,
                items.iter().fold(String::new(), |line, item| line + &item[i])
            )
        })
    }

    fn matrix_to_strings(cells: &[Vec<CellState>]) -> Vec<String> {
        assert!(cells.len() > 0);
        let width = cells[0].len();
        let mut output: Vec<String> = vec![];
        output.push(format!("   ┌{}┐  ", (0..width*2).map(|_| "─").collect::<String>()));
        output.append(&mut cells.iter().enumerate()
            .map(|(y, row)|
                format!("{:2} │{}│  ", y + 1,
                        row.iter().map(|&cell| match cell {
                            CellState::On => "██",
                            CellState::Wall => "▓▓",
                            CellState::Off => "  ",
                        }).collect::<String>()))
            .collect());
        output.push(format!("   └{}┘  ", (0..width*2).map(|_| "─").collect::<String>()));
        output
    }
}
