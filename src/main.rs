//! Terminal front-end for the fifteen puzzle.
//!
//! The engine never renders, reads input, or keeps time; this binary does
//! all three and feeds the outcome back into the library when a game ends.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fifteen::results::{format_duration, DEFAULT_RESULTS_FILE};
use fifteen::{BestResult, Board, GameState, ResultStore};

/// Plays the game of fifteen in the terminal.
#[derive(Parser)]
#[command(name = "fifteen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Shuffle a board and play it interactively.
    Play {
        /// Board edge length (3, 4, or 5 in the classic game).
        #[arg(long, default_value_t = 4)]
        size: usize,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the best recorded result per board size.
    Best,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Play { size, seed }) => run_play(size, seed),
        Some(Command::Best) => {
            run_best();
            ExitCode::SUCCESS
        }
        None => run_play(4, None),
    }
}

/// Shuffles a fresh board and drives the stdin move loop until the player
/// wins or quits. Elapsed time is measured here, not in the engine.
fn run_play(size: usize, seed: Option<u64>) -> ExitCode {
    let mut board = match Board::new(size) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = ResultStore::open(DEFAULT_RESULTS_FILE);
    match store.best_for(size as u32) {
        Some(best) => println!(
            "Best for {size}x{size}: {} moves, {}",
            best.moves,
            format_duration(best.time)
        ),
        None => println!("No best result for {size}x{size} yet"),
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    board.shuffle(&mut rng);

    println!("Enter moves as \"row col\" (1-based), or q to quit.");
    let started = Instant::now();
    let stdin = io::stdin();

    loop {
        print!("{board}");
        println!("Moves: {}", board.move_count());
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return ExitCode::SUCCESS;
        }
        let Some((row, col)) = parse_move(line) else {
            println!("expected \"row col\", e.g. \"2 3\"");
            continue;
        };
        if let Err(err) = board.apply_move(row, col) {
            println!("{err}");
            continue;
        }

        if board.state() == GameState::Won {
            let elapsed = started.elapsed().as_secs_f64();
            print!("{board}");
            println!(
                "Solved in {} moves, {}",
                board.move_count(),
                format_duration(elapsed)
            );
            let candidate = BestResult {
                moves: board.move_count(),
                time: elapsed,
            };
            match store.record_if_better(size as u32, candidate) {
                Ok(true) => println!("New best for {size}x{size}!"),
                Ok(false) => {}
                Err(err) => eprintln!("warning: best result not saved: {err}"),
            }
            return ExitCode::SUCCESS;
        }
    }
}

/// Prints the stored best for the three classic levels.
fn run_best() {
    let store = ResultStore::open(DEFAULT_RESULTS_FILE);
    for size in [3u32, 4, 5] {
        match store.best_for(size) {
            Some(best) => println!(
                "{size}x{size}  {} moves, {}",
                best.moves,
                format_duration(best.time)
            ),
            None => println!("{size}x{size}  ---"),
        }
    }
}

/// Parses a 1-based "row col" pair into 0-based coordinates.
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return None;
    }
    Some((row - 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::parse_move;

    #[test]
    fn parse_move_accepts_one_based_pairs() {
        assert_eq!(parse_move("2 3"), Some((1, 2)));
        assert_eq!(parse_move("  1   1 "), Some((0, 0)));
    }

    #[test]
    fn parse_move_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("2"), None);
        assert_eq!(parse_move("0 1"), None);
        assert_eq!(parse_move("2 3 4"), None);
        assert_eq!(parse_move("a b"), None);
    }
}
