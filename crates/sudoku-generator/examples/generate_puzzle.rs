//! Example demonstrating basic Sudoku puzzle generation.
//!
//! Generates a puzzle, then prints the problem grid, the solution, the
//! number of givens, and the seed that reproduces the puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Replay a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex chars>
//! ```
//!
//! Adjust how many cells stay revealed (default: 0.4):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --reveal-probability 0.3
//! ```

use clap::Parser;
use sudoku_core::{DigitGrid, Position};
use sudoku_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to replay, as 64 hex characters.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Per-cell probability that a cell stays revealed as a given.
    #[arg(long, value_name = "PROB", default_value_t = PuzzleGenerator::DEFAULT_REVEAL_PROBABILITY)]
    reveal_probability: f64,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::with_reveal_probability(args.reveal_probability);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Problem:");
    print_grid(&puzzle.problem);
    println!("\nSolution:");
    print_grid(&puzzle.solution);

    let givens = puzzle
        .problem
        .iter()
        .filter(|(_, cell)| cell.is_some())
        .count();
    println!("\nGivens: {givens}/81");
    println!("Seed:   {}", puzzle.seed);
}

fn print_grid(grid: &DigitGrid) {
    for y in 0..9 {
        if y % 3 == 0 && y != 0 {
            println!("------+-------+------");
        }
        for x in 0..9 {
            if x % 3 == 0 && x != 0 {
                print!("| ");
            }
            match grid[Position::new(x, y)] {
                Some(digit) => print!("{digit} "),
                None => print!(". "),
            }
        }
        println!();
    }
}
