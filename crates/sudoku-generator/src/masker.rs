//! Probabilistic masking of a solution into a playable problem grid.

use rand::{Rng, RngExt as _};
use sudoku_core::{DigitGrid, Position};

/// Masks a complete solution into a problem grid.
///
/// Each cell is decided independently: with probability
/// `reveal_probability` it keeps the solution digit as a given, otherwise
/// it is left empty for the player. No global constraint is placed on the
/// count or layout of givens, and the resulting puzzle is not checked for
/// a unique solution; the per-cell policy is intentional, so difficulty
/// varies between puzzles.
///
/// # Panics
///
/// Panics if `reveal_probability` is not in the range `0.0..=1.0`.
pub fn mask_solution<R: Rng + ?Sized>(
    solution: &DigitGrid,
    reveal_probability: f64,
    rng: &mut R,
) -> DigitGrid {
    let mut problem = DigitGrid::new();
    for pos in Position::ALL {
        if rng.random_bool(reveal_probability) {
            problem.set(pos, solution[pos]);
        }
    }
    problem
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use sudoku_core::DigitGrid;

    use super::*;

    const SOLVED: &str = "\
        534678912672195348198342567\
        859761423426853791713924856\
        961537284287419635345286179";

    #[test]
    fn test_revealed_cells_copy_the_solution() {
        let solution: DigitGrid = SOLVED.parse().unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let problem = mask_solution(&solution, 0.4, &mut rng);

        let mut givens = 0;
        for (pos, cell) in problem.iter() {
            if let Some(digit) = cell {
                assert_eq!(solution[pos], Some(digit));
                givens += 1;
            }
        }
        // with p = 0.4 over 81 cells, both fully-hidden and fully-revealed
        // boards are astronomically unlikely
        assert!(givens > 0 && givens < 81);
    }

    #[test]
    fn test_extreme_probabilities() {
        let solution: DigitGrid = SOLVED.parse().unwrap();

        let mut rng = Pcg64Mcg::seed_from_u64(7);
        assert_eq!(mask_solution(&solution, 1.0, &mut rng), solution);

        let hidden = mask_solution(&solution, 0.0, &mut rng);
        assert!(hidden.iter().all(|(_, cell)| cell.is_none()));
    }
}
