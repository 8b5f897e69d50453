//! Per-cell play state.

use sudoku_core::Digit;

/// The state of one cell during play.
///
/// Given cells are the puzzle's pre-filled mask: they always hold the
/// solution digit and are never mutated for the lifetime of the session.
/// Filled cells hold player input (or a hint) and can be changed or
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A cell pre-filled by the puzzle; not editable.
    Given(Digit),
    /// A cell filled by the player or a hint; editable.
    Filled(Digit),
    /// A cell with no digit yet.
    Empty,
}

impl CellState {
    /// Returns the digit in this cell regardless of whether it is a given
    /// or player-filled, or `None` when empty.
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Empty => None,
        }
    }
}
