use anyhow::{Context, Result};
use clap::Parser;
use log::Level;
use gol_walls::args::Args;
use gol_walls::gol::{self, board::Board, patterns, Params};
use gol_walls::util::logger;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(Level::Info, false);

    log::info!(target: "Main", "{:<10} {}", "Width", args.width);
    log::info!(target: "Main", "{:<10} {}", "Height", args.height);
    log::info!(target: "Main", "{:<10} {}", "Turns", args.turns);

    let board = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read board from {}", path))?;
            let board = Board::deserialize(text.trim_end())?;
            log::info!(target: "Main", "{:<10} {}", "Input", path);
            board
        }
        None => {
            let pattern = patterns::lookup(&args.pattern)
                .with_context(|| format!("Unknown pattern '{}'", args.pattern))?;
            log::info!(target: "Main", "{:<10} {}", "Pattern", pattern.name);
            pattern.board(args.width, args.height)?
        }
    };

    let board = gol::run(Params::from(args.clone()), board);

    match &args.output {
        Some(path) => {
            std::fs::write(path, board.serialize())
                .with_context(|| format!("Failed to write board to {}", path))?;
            log::info!(target: "Main", "Board written to {}", path);
        }
        None => println!("{}", board.serialize()),
    }
    Ok(())
}
