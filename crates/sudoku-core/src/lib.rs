//! Core data structures for the Sudoku game.
//!
//! This crate provides the fundamental board types shared by puzzle
//! generation and game session management:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A compact set of digits, used for validity checks
//! - [`position`]: Board coordinates and house-peer relationships
//! - [`grid`]: The 9×9 board of optional digits and the placement rule
//!   predicate
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 conflicts with itself along row 0
//! assert!(!grid.is_placement_valid(Position::new(3, 0), Digit::D5));
//! // but a different digit is fine
//! assert!(grid.is_placement_valid(Position::new(3, 0), Digit::D7));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    position::Position,
};
