//! Sudoku game session management.
//!
//! This crate owns the mutable play state of a single game: the player's
//! grid, the undo history, the mistake counter, the elapsed-time counter,
//! and the hint cooldown. It validates player input against the sudoku
//! rules and reports every outcome as an explicit enum; no operation here
//! fails fatally or performs I/O.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::Position;
//! use sudoku_game::GameSession;
//! use sudoku_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate();
//! let mut session = GameSession::new(puzzle);
//!
//! // find a fillable cell and place the solution's digit there
//! let pos = Position::ALL
//!     .into_iter()
//!     .find(|&pos| session.cell(pos).is_empty())
//!     .expect("puzzle has empty cells");
//! let digit = session.solution()[pos].expect("solution is complete");
//!
//! let outcome = session.apply_input(pos, &digit.to_string());
//! assert!(outcome.is_accepted());
//! ```

pub mod cell_state;
pub mod session;

pub use self::{
    cell_state::CellState,
    session::{GamePhase, GameSession, HintOutcome, InputOutcome, RejectReason, UndoOutcome},
};
