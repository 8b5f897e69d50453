//! Sudoku puzzle generation.
//!
//! This crate builds playable puzzles in two steps:
//!
//! 1. [`solution`]: fill an empty grid with a complete valid solution using
//!    randomized backtracking.
//! 2. [`masker`]: independently decide per cell whether it stays revealed
//!    as a given or is hidden for the player to fill.
//!
//! Generation is reproducible: a [`PuzzleSeed`] deterministically drives
//! both steps, so the same seed always yields the same puzzle.
//!
//! No attempt is made to guarantee that the masked puzzle has a unique
//! solution; the masking policy is intentionally simple and per-cell
//! independent.
//!
//! # Examples
//!
//! ```
//! use sudoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_valid_solution());
//! // regenerating from the recorded seed reproduces the puzzle
//! assert_eq!(generator.generate_with_seed(puzzle.seed), puzzle);
//! ```

pub mod masker;
pub mod seed;
pub mod solution;

use sudoku_core::DigitGrid;

pub use self::seed::{ParseSeedError, PuzzleSeed};

/// A generated puzzle: the masked problem grid, the complete solution it
/// was derived from, and the seed that produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid; `Some` cells are givens, `None` cells are for
    /// the player to fill.
    pub problem: DigitGrid,
    /// The complete solution the problem was masked from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles by producing a full solution and masking it.
///
/// The reveal probability controls how likely each cell is to stay visible
/// as a given; cells are decided independently, so the number of givens
/// varies between puzzles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleGenerator {
    reveal_probability: f64,
}

impl PuzzleGenerator {
    /// The default per-cell probability that a cell stays revealed.
    pub const DEFAULT_REVEAL_PROBABILITY: f64 = 0.40;

    /// Creates a generator with the default reveal probability.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reveal_probability: Self::DEFAULT_REVEAL_PROBABILITY,
        }
    }

    /// Creates a generator with a custom reveal probability.
    ///
    /// # Panics
    ///
    /// Panics if `reveal_probability` is not in the range `0.0..=1.0`.
    #[must_use]
    pub fn with_reveal_probability(reveal_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&reveal_probability),
            "reveal probability must be within 0.0..=1.0, got {reveal_probability}"
        );
        Self { reveal_probability }
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.to_rng();
        let solution = solution::generate_solution(&mut rng);
        let problem = masker::mask_solution(&solution, self.reveal_probability, &mut rng);
        log::debug!(
            "generated puzzle seed={seed} givens={}",
            problem.iter().filter(|(_, cell)| cell.is_some()).count()
        );
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
