//! Complete-solution generation via randomized backtracking.

use rand::{Rng, seq::SliceRandom as _};
use sudoku_core::{Digit, DigitGrid, Position};

/// Fills an empty grid with a complete valid solution.
///
/// Cells are visited in row-major order. At each empty cell the digits 1-9
/// are tried in a freshly shuffled order, which is what makes solutions
/// vary between runs; a fixed order would rediscover the same
/// lexicographically-first grid every time. Backtracking over an empty
/// grid always terminates in success.
///
/// # Examples
///
/// ```
/// let mut rng = rand::rng();
/// let solution = sudoku_generator::solution::generate_solution(&mut rng);
/// assert!(solution.is_valid_solution());
/// ```
pub fn generate_solution<R: Rng + ?Sized>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let filled = fill_from(&mut grid, 0, rng);
    assert!(filled, "backtracking over an empty grid always succeeds");
    grid
}

/// Recursively fills the first empty cell at or after `start`.
///
/// Returns `false` when no digit fits the current cell, signalling the
/// caller to undo its own placement and try the next candidate.
fn fill_from<R: Rng + ?Sized>(grid: &mut DigitGrid, start: usize, rng: &mut R) -> bool {
    let Some(pos) = next_empty(grid, start) else {
        return true;
    };

    let mut candidates = Digit::ALL;
    candidates.shuffle(rng);
    for digit in candidates {
        if grid.is_placement_valid(pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, pos.index() + 1, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

fn next_empty(grid: &DigitGrid, start: usize) -> Option<Position> {
    (start..81)
        .map(Position::from_index)
        .find(|&pos| grid[pos].is_none())
}
