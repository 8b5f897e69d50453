//! The 9×9 board of optional digits and the placement rule predicate.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, DigitSet, Position};

/// A 9×9 grid where each cell holds an optional digit.
///
/// This is the shared board representation: the generator produces a fully
/// decided grid (the solution) and a partially decided one (the problem),
/// and the game session validates placements against it.
///
/// # Examples
///
/// ```
/// use sudoku_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid[Position::new(0, 0)], None);
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// ```
///
/// Grids can be parsed from and rendered as 81-character strings, with `.`
/// for empty cells:
///
/// ```
/// use sudoku_core::DigitGrid;
///
/// let grid: DigitGrid = format!("17{}", ".".repeat(79)).parse().unwrap();
/// assert_eq!(grid.to_string().chars().take(3).collect::<String>(), "17.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given position, if any.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the digit at the given position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns whether placing `digit` at `pos` is consistent with the
    /// digits already on the grid.
    ///
    /// The check scans the 20 house peers of `pos` (same row, column, or
    /// 3×3 box); the cell at `pos` itself is excluded, so re-checking a
    /// cell against its own current value succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(8, 0), Some(Digit::D2));
    ///
    /// // column conflict
    /// assert!(!grid.is_placement_valid(Position::new(8, 1), Digit::D2));
    /// // the occupied cell does not conflict with itself
    /// assert!(grid.is_placement_valid(Position::new(8, 0), Digit::D2));
    /// ```
    #[must_use]
    pub fn is_placement_valid(&self, pos: Position, digit: Digit) -> bool {
        !pos.house_peers()
            .into_iter()
            .any(|peer| self.get(peer) == Some(digit))
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether this grid is a complete, valid sudoku solution:
    /// every row, column, and 3×3 box contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        if !self.is_complete() {
            return false;
        }

        let mut rows = [DigitSet::EMPTY; 9];
        let mut columns = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            rows[pos.y() as usize].insert(digit);
            columns[pos.x() as usize].insert(digit);
            boxes[pos.box_index() as usize].insert(digit);
        }

        rows.into_iter()
            .chain(columns)
            .chain(boxes)
            .all(|house| house == DigitSet::FULL)
    }

    /// Returns an iterator over `(Position, Option<Digit>)` pairs in
    /// row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Digit>)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string does not contain exactly 81 characters.
    #[display("grid string must be 81 characters, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is neither a digit 1-9 nor `.`.
    #[display("invalid character {ch:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Row-major cell index of the character.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::InvalidLength { len });
        }

        let mut grid = Self::new();
        for (index, ch) in s.chars().enumerate() {
            let digit = match ch {
                '.' => None,
                '1'..='9' => ch
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::try_from_value),
                _ => return Err(ParseGridError::InvalidCharacter { ch, index }),
            };
            grid.set(Position::from_index(index), digit);
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // A classic completed sudoku grid.
    const SOLVED: &str = "\
        534678912672195348198342567\
        859761423426853791713924856\
        961537284287419635345286179";

    fn grid_with_row_0(values: [u8; 9]) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for (x, value) in (0_u8..9).zip(values) {
            grid.set(Position::new(x, 0), Digit::try_from_value(value));
        }
        grid
    }

    #[test]
    fn test_placement_rules_on_partial_grid() {
        // row 0 filled with a valid permutation, everything else empty
        let grid = grid_with_row_0([5, 3, 4, 6, 7, 8, 9, 1, 2]);

        // 2 already sits at (8, 0); the same column rejects it...
        assert!(!grid.is_placement_valid(Position::new(8, 1), Digit::D2));
        // ...and so does the containing box
        assert!(!grid.is_placement_valid(Position::new(7, 2), Digit::D2));
        // 5 at (0, 0) does not block 5 in row 1 outside its column and box
        assert!(grid.is_placement_valid(Position::new(4, 1), Digit::D5));
        // self-exclusion: re-checking an occupied cell's own value passes
        assert!(grid.is_placement_valid(Position::new(8, 0), Digit::D2));
        // ...but a different digit in that cell still sees its row peers
        assert!(!grid.is_placement_valid(Position::new(8, 0), Digit::D5));
    }

    #[test]
    fn test_placement_valid_on_empty_grid() {
        let grid = DigitGrid::new();
        for pos in [Position::new(0, 0), Position::new(4, 4), Position::new(8, 8)] {
            for digit in Digit::ALL {
                assert!(grid.is_placement_valid(pos, digit));
            }
        }
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid: DigitGrid = SOLVED.parse().expect("valid grid string");
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D9));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::InvalidLength { len: 3 })
        );
        let with_zero = format!("0{}", ".".repeat(80));
        assert_eq!(
            with_zero.parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter { ch: '0', index: 0 })
        );
    }

    #[test]
    fn test_is_valid_solution() {
        let grid: DigitGrid = SOLVED.parse().expect("valid grid string");
        assert!(grid.is_valid_solution());

        // removing any cell breaks completeness
        let mut incomplete = grid.clone();
        incomplete.set(Position::new(4, 4), None);
        assert!(!incomplete.is_valid_solution());

        // duplicating a digit within a row breaks validity
        let mut duplicated = grid.clone();
        let first = duplicated[Position::new(0, 0)];
        duplicated.set(Position::new(1, 0), first);
        assert!(!duplicated.is_valid_solution());
    }

    #[test]
    fn test_empty_grid_is_not_a_solution() {
        assert!(!DigitGrid::new().is_valid_solution());
        assert!(!DigitGrid::new().is_complete());
    }

    proptest! {
        #[test]
        fn prop_accepted_placements_never_duplicate_in_houses(
            placements in proptest::collection::vec((0usize..81, 1u8..=9), 0..40)
        ) {
            let mut grid = DigitGrid::new();
            for (index, value) in placements {
                let pos = Position::from_index(index);
                let digit = Digit::from_value(value);
                if grid[pos].is_none() && grid.is_placement_valid(pos, digit) {
                    grid.set(pos, Some(digit));
                }
            }

            // every placed digit must still be consistent with its peers
            for (pos, cell) in grid.iter() {
                if let Some(digit) = cell {
                    prop_assert!(grid.is_placement_valid(pos, digit));
                }
            }
        }
    }
}
