use std::time::{Duration, Instant};

use crate::args::Args;
use crate::gol::board::Board;
use crate::util::avgturns::AvgTurns;

pub mod board;
pub mod cell;
pub mod patterns;

// How often the run loop reports progress.
const REPORT_INTERVAL: Duration = Duration::from_secs(2);

/// `Params` provides the details of how to run the Game of Life simulation.
#[derive(Clone, Debug)]
pub struct Params {
    pub turns: usize,
    pub width: usize,
    pub height: usize,
}

/// Advance `board` through `params.turns` generations, logging alive counts
/// and average turn rate every couple of seconds, and return the final board.
pub fn run<P: Into<Params>>(params: P, mut board: Board) -> Board {
    let params: Params = params.into();
    let mut avg_turns = AvgTurns::new();
    let mut last_report = Instant::now();

    for turn in 1..=params.turns {
        board.advance();
        if last_report.elapsed() >= REPORT_INTERVAL {
            log::info!(
                target: "Gol",
                "Complete Turns {:<8} Alive Cells {:<8} Avg {:>6.0} turns/s",
                turn,
                board.alive_count(),
                avg_turns.get(turn as u32)
            );
            last_report = Instant::now();
        }
    }

    log::info!(
        target: "Gol",
        "Complete Turns {:<8} Alive Cells {:<8} Final Turn Complete",
        params.turns,
        board.alive_count()
    );
    board
}

impl From<Args> for Params {
    fn from(args: Args) -> Self {
        Params {
            turns: args.turns,
            width: args.width,
            height: args.height,
        }
    }
}
