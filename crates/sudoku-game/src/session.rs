//! The mutable game session and its operations.

use std::time::{Duration, Instant};

use rand::{Rng, seq::IndexedRandom as _};
use sudoku_core::{Digit, DigitGrid, Position};
use sudoku_generator::GeneratedPuzzle;

use crate::CellState;

/// Whether the session is still being played or has been completed.
///
/// `Solved` is terminal: the elapsed-time counter stops and never resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    /// The puzzle is in progress; [`GameSession::tick`] advances the clock.
    Active,
    /// Every cell is decided; the clock is stopped.
    Solved,
}

/// Why a player input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// The targeted cell is a given and cannot be edited.
    #[display("cell is a given")]
    GivenCell,
    /// The input text is not a digit in the range 1-9.
    #[display("input is not a digit 1-9")]
    InvalidFormat,
    /// The digit conflicts with a peer in its row, column, or box.
    #[display("digit conflicts with the row, column, or box")]
    RuleViolation,
}

/// Outcome of [`GameSession::apply_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOutcome {
    /// The digit passed validation and was committed to the cell.
    Accepted,
    /// Empty input: the cell was cleared.
    Cleared,
    /// The input was not committed; the reason says why.
    Rejected(RejectReason),
}

/// Outcome of [`GameSession::undo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum UndoOutcome {
    /// One history entry was popped and its cell restored.
    Applied,
    /// The history was empty; nothing changed.
    NoOp,
}

/// Outcome of [`GameSession::request_hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum HintOutcome {
    /// A cell was filled from the solution.
    Provided {
        /// The cell that was filled.
        position: Position,
        /// The digit placed there.
        digit: Digit,
    },
    /// The cooldown window since the last hint has not elapsed yet.
    CooldownActive {
        /// Time left until the next hint is allowed.
        remaining: Duration,
    },
    /// Every non-given cell already holds a digit.
    NoEmptyCells,
}

/// One committed change, recorded for undo.
///
/// Entries exist only for committed changes: accepted inputs and hints.
/// Clears, rejected inputs, and given cells never enter the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HistoryEntry {
    position: Position,
    previous: Option<Digit>,
}

/// A single-player Sudoku game session.
///
/// Owns the player's grid (given and filled cells), the solution it was
/// generated from, the undo history, and the mistake, elapsed-time, and
/// hint-cooldown state. All operations are synchronous and infallible;
/// anything that cannot proceed reports an explicit outcome instead.
///
/// A session is replaced wholesale for a new game; there is no in-place
/// reset.
///
/// # Examples
///
/// ```
/// use sudoku_game::GameSession;
/// use sudoku_generator::PuzzleGenerator;
///
/// let mut session = GameSession::new(PuzzleGenerator::new().generate());
/// assert!(session.phase().is_active());
/// assert_eq!(session.mistake_count(), 0);
///
/// session.tick();
/// assert_eq!(session.elapsed_seconds(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    cells: [CellState; 81],
    solution: DigitGrid,
    history: Vec<HistoryEntry>,
    mistake_count: u32,
    elapsed_seconds: u64,
    last_hint: Option<Instant>,
    phase: GamePhase,
}

impl GameSession {
    /// Minimum time between two provided hints.
    pub const HINT_COOLDOWN: Duration = Duration::from_millis(2000);

    /// Creates a session from a generated puzzle.
    ///
    /// Cells present in the puzzle's problem grid become givens; the rest
    /// start empty. Counters start at zero and the first hint is available
    /// immediately.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            history: Vec::new(),
            mistake_count: 0,
            elapsed_seconds: 0,
            last_hint: None,
            phase: GamePhase::Active,
        }
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns the solution grid this puzzle was generated from.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns whether the session is active or solved.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the number of rule violations so far.
    #[must_use]
    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    /// Returns the number of seconds ticked while the session was active.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Applies raw player input to a cell.
    ///
    /// Given cells reject any input without mutation. Empty input clears
    /// the cell and returns [`InputOutcome::Cleared`]; no history entry is
    /// recorded for a clear, so it cannot be undone. Text that is not a
    /// digit 1-9 also clears the cell and is reported as
    /// [`RejectReason::InvalidFormat`] without counting a mistake.
    ///
    /// A well-formed digit is checked against the cell's house peers; the
    /// cell itself is excluded from the scan, so re-entering a cell's
    /// current value is accepted. On success the previous value (possibly
    /// empty) is pushed onto the history and the win condition is
    /// evaluated. On a conflict the mistake counter increments, the cell
    /// is cleared, and nothing is recorded for undo.
    pub fn apply_input(&mut self, pos: Position, text: &str) -> InputOutcome {
        if self.cell(pos).is_given() {
            return InputOutcome::Rejected(RejectReason::GivenCell);
        }

        if text.is_empty() {
            self.cells[pos.index()] = CellState::Empty;
            return InputOutcome::Cleared;
        }

        let Some(digit) = text
            .parse::<u8>()
            .ok()
            .and_then(Digit::try_from_value)
        else {
            self.cells[pos.index()] = CellState::Empty;
            return InputOutcome::Rejected(RejectReason::InvalidFormat);
        };

        if self.is_conflicting(pos, digit) {
            self.mistake_count += 1;
            self.cells[pos.index()] = CellState::Empty;
            log::debug!(
                "rejected {digit} at {pos}: rule violation (mistakes={})",
                self.mistake_count
            );
            return InputOutcome::Rejected(RejectReason::RuleViolation);
        }

        self.history.push(HistoryEntry {
            position: pos,
            previous: self.cell(pos).as_digit(),
        });
        self.cells[pos.index()] = CellState::Filled(digit);
        self.evaluate_win();
        InputOutcome::Accepted
    }

    /// Reverts the most recent committed change.
    ///
    /// Restores exactly one cell to its previous value, including back to
    /// empty. Returns [`UndoOutcome::NoOp`] when the history is empty.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(entry) = self.history.pop() else {
            return UndoOutcome::NoOp;
        };
        self.cells[entry.position.index()] = match entry.previous {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
        UndoOutcome::Applied
    }

    /// Fills one random empty cell from the solution.
    ///
    /// Hints are rate limited: within [`Self::HINT_COOLDOWN`] of the last
    /// provided hint the call reports the remaining wait and mutates
    /// nothing. A fresh session has no cooldown, so the first hint always
    /// succeeds. Hinted digits come straight from the solution, bypass
    /// rule checking and mistake counting, and are undoable like any
    /// committed change.
    pub fn request_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HintOutcome {
        if let Some(last) = self.last_hint {
            let since = last.elapsed();
            if since < Self::HINT_COOLDOWN {
                return HintOutcome::CooldownActive {
                    remaining: Self::HINT_COOLDOWN - since,
                };
            }
        }

        let empty_cells: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).is_empty())
            .collect();
        let Some(&pos) = empty_cells.choose(rng) else {
            return HintOutcome::NoEmptyCells;
        };

        let Some(digit) = self.solution[pos] else {
            // the solution grid is complete by construction
            unreachable!("solution has a digit for every cell");
        };
        self.history.push(HistoryEntry {
            position: pos,
            previous: None,
        });
        self.cells[pos.index()] = CellState::Filled(digit);
        self.last_hint = Some(Instant::now());
        self.evaluate_win();
        HintOutcome::Provided {
            position: pos,
            digit,
        }
    }

    /// Advances the clock by one second while the session is active.
    ///
    /// Intended to be called once per real second by an external
    /// scheduler. Once the session is solved this is a no-op. Returns the
    /// elapsed seconds after the tick.
    pub fn tick(&mut self) -> u64 {
        if self.phase.is_active() {
            self.elapsed_seconds += 1;
        }
        self.elapsed_seconds
    }

    /// Returns whether every cell holds a digit.
    ///
    /// Only fullness is checked: every accepted value already passed rule
    /// validation, so a full grid is a valid completion, though not
    /// necessarily identical to the generated solution when the puzzle
    /// admits more than one.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.as_digit().is_some())
    }

    fn is_conflicting(&self, pos: Position, digit: Digit) -> bool {
        pos.house_peers()
            .into_iter()
            .any(|peer| self.cell(peer).as_digit() == Some(digit))
    }

    fn evaluate_win(&mut self) {
        if self.phase.is_active() && self.is_solved() {
            self.phase = GamePhase::Solved;
            log::info!(
                "puzzle solved in {}s with {} mistakes",
                self.elapsed_seconds,
                self.mistake_count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use sudoku_core::DigitGrid;
    use sudoku_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    const SOLUTION: &str = "\
        534678912672195348198342567\
        859761423426853791713924856\
        961537284287419635345286179";

    /// Session over a fixed solution with givens at the listed indices.
    fn session_with_givens(given_indices: &[usize]) -> GameSession {
        let solution: DigitGrid = SOLUTION.parse().expect("valid solution grid");
        let mut problem = DigitGrid::new();
        for &index in given_indices {
            let pos = Position::from_index(index);
            problem.set(pos, solution[pos]);
        }
        GameSession::new(GeneratedPuzzle {
            problem,
            solution,
            seed: PuzzleSeed::from_bytes([0; 32]),
        })
    }

    fn rng() -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(0xDEAD_BEEF)
    }

    #[test]
    fn test_new_session_marks_givens() {
        let session = session_with_givens(&[0, 40, 80]);
        assert_eq!(
            session.cell(Position::new(0, 0)),
            &CellState::Given(Digit::D5)
        );
        assert_eq!(
            session.cell(Position::new(4, 4)),
            &CellState::Given(Digit::D5)
        );
        assert_eq!(
            session.cell(Position::new(8, 8)),
            &CellState::Given(Digit::D9)
        );
        assert_eq!(session.cell(Position::new(1, 0)), &CellState::Empty);
        assert!(session.phase().is_active());
        assert_eq!(session.mistake_count(), 0);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_givens_always_match_the_solution() {
        let puzzle = PuzzleGenerator::new().generate();
        let mut session = GameSession::new(puzzle);

        // exercise a mix of operations, then re-check the given invariant
        session.apply_input(Position::new(0, 0), "5");
        session.apply_input(Position::new(1, 1), "abc");
        session.request_hint(&mut rng());
        session.undo();

        for pos in Position::ALL {
            if let CellState::Given(digit) = *session.cell(pos) {
                assert_eq!(session.solution()[pos], Some(digit));
            }
        }
    }

    #[test]
    fn test_apply_input_accepts_a_consistent_digit() {
        let mut session = session_with_givens(&[0]); // 5 at (0, 0)
        let pos = Position::new(1, 0);

        assert_eq!(session.apply_input(pos, "3"), InputOutcome::Accepted);
        assert_eq!(session.cell(pos), &CellState::Filled(Digit::D3));
        assert_eq!(session.mistake_count(), 0);
    }

    #[test]
    fn test_apply_input_rejects_given_cells() {
        let mut session = session_with_givens(&[0]);
        let pos = Position::new(0, 0);

        assert_eq!(
            session.apply_input(pos, "9"),
            InputOutcome::Rejected(RejectReason::GivenCell)
        );
        assert_eq!(session.cell(pos), &CellState::Given(Digit::D5));
        assert_eq!(session.mistake_count(), 0);
    }

    #[test]
    fn test_apply_input_format_errors_clear_without_mistake() {
        let mut session = session_with_givens(&[0]);
        let pos = Position::new(1, 0);
        session.apply_input(pos, "3");

        for bad in ["10", "abc", "0", "-1", " 5", "3.5"] {
            assert_eq!(
                session.apply_input(pos, bad),
                InputOutcome::Rejected(RejectReason::InvalidFormat),
                "input {bad:?}"
            );
            assert_eq!(session.cell(pos), &CellState::Empty);
            assert_eq!(session.mistake_count(), 0);
        }
    }

    #[test]
    fn test_apply_input_rule_violation_counts_and_clears() {
        let mut session = session_with_givens(&[0]); // 5 at (0, 0)
        let pos = Position::new(8, 0); // same row

        assert_eq!(
            session.apply_input(pos, "5"),
            InputOutcome::Rejected(RejectReason::RuleViolation)
        );
        assert_eq!(session.cell(pos), &CellState::Empty);
        assert_eq!(session.mistake_count(), 1);

        // the rejected entry was never committed, so nothing is undoable
        assert_eq!(session.undo(), UndoOutcome::NoOp);
    }

    #[test]
    fn test_reentering_the_same_value_does_not_self_conflict() {
        let mut session = session_with_givens(&[]);
        let pos = Position::new(4, 4);

        assert_eq!(session.apply_input(pos, "7"), InputOutcome::Accepted);
        // overwriting a cell with its current value passes rule checking
        assert_eq!(session.apply_input(pos, "7"), InputOutcome::Accepted);
        assert_eq!(session.cell(pos), &CellState::Filled(Digit::D7));
        assert_eq!(session.mistake_count(), 0);
    }

    #[test]
    fn test_clearing_is_not_recorded_in_history() {
        let mut session = session_with_givens(&[]);
        let pos = Position::new(2, 3);

        session.apply_input(pos, "4");
        assert_eq!(session.apply_input(pos, ""), InputOutcome::Cleared);
        assert_eq!(session.cell(pos), &CellState::Empty);

        // undo pops the accepted input's entry (previous value: empty),
        // not the clear
        assert_eq!(session.undo(), UndoOutcome::Applied);
        assert_eq!(session.cell(pos), &CellState::Empty);
        assert_eq!(session.undo(), UndoOutcome::NoOp);
    }

    #[test]
    fn test_undo_restores_the_exact_prior_value() {
        let mut session = session_with_givens(&[]);
        let pos = Position::new(6, 2);

        session.apply_input(pos, "1");
        session.apply_input(pos, "2");
        assert_eq!(session.cell(pos), &CellState::Filled(Digit::D2));

        assert_eq!(session.undo(), UndoOutcome::Applied);
        assert_eq!(session.cell(pos), &CellState::Filled(Digit::D1));

        // restores to empty when the cell had no prior value
        assert_eq!(session.undo(), UndoOutcome::Applied);
        assert_eq!(session.cell(pos), &CellState::Empty);
    }

    #[test]
    fn test_undo_on_fresh_session_is_a_no_op() {
        let mut session = session_with_givens(&[0, 1, 2]);
        let before: Vec<CellState> =
            Position::ALL.iter().map(|&pos| *session.cell(pos)).collect();

        assert_eq!(session.undo(), UndoOutcome::NoOp);

        let after: Vec<CellState> =
            Position::ALL.iter().map(|&pos| *session.cell(pos)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_first_hint_succeeds_immediately() {
        let mut session = session_with_givens(&[0]);

        let outcome = session.request_hint(&mut rng());
        let HintOutcome::Provided { position, digit } = outcome else {
            panic!("expected a hint, got {outcome:?}");
        };
        assert_eq!(session.solution()[position], Some(digit));
        assert_eq!(session.cell(position), &CellState::Filled(digit));

        // hints are undoable and exempt from mistake counting
        assert_eq!(session.mistake_count(), 0);
        assert_eq!(session.undo(), UndoOutcome::Applied);
        assert_eq!(session.cell(position), &CellState::Empty);
    }

    #[test]
    fn test_second_hint_within_cooldown_does_not_mutate() {
        let mut session = session_with_givens(&[0]);
        assert!(session.request_hint(&mut rng()).is_provided());

        let before: Vec<CellState> =
            Position::ALL.iter().map(|&pos| *session.cell(pos)).collect();
        let outcome = session.request_hint(&mut rng());
        let HintOutcome::CooldownActive { remaining } = outcome else {
            panic!("expected cooldown, got {outcome:?}");
        };
        assert!(remaining <= GameSession::HINT_COOLDOWN);

        let after: Vec<CellState> =
            Position::ALL.iter().map(|&pos| *session.cell(pos)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_hint_on_full_board_reports_no_empty_cells() {
        let mut session = session_with_givens(&(0..81_usize).collect::<Vec<_>>());
        assert_eq!(session.request_hint(&mut rng()), HintOutcome::NoEmptyCells);
    }

    #[test]
    fn test_is_solved_checks_fullness_only() {
        let mut session = session_with_givens(&(1..81_usize).collect::<Vec<_>>());
        assert!(!session.is_solved());

        // filling the last cell with the solution digit completes the game
        assert_eq!(
            session.apply_input(Position::new(0, 0), "5"),
            InputOutcome::Accepted
        );
        assert!(session.is_solved());
        assert!(session.phase().is_solved());
    }

    #[test]
    fn test_tick_stops_once_solved() {
        let mut session = session_with_givens(&(1..81_usize).collect::<Vec<_>>());
        assert_eq!(session.tick(), 1);
        assert_eq!(session.tick(), 2);

        session.apply_input(Position::new(0, 0), "5");
        assert!(session.phase().is_solved());
        assert_eq!(session.tick(), 2);
        assert_eq!(session.elapsed_seconds(), 2);
    }

    #[test]
    fn test_winning_via_hint() {
        let mut session = session_with_givens(&(1..81_usize).collect::<Vec<_>>());
        let outcome = session.request_hint(&mut rng());
        assert_eq!(
            outcome,
            HintOutcome::Provided {
                position: Position::new(0, 0),
                digit: Digit::D5,
            }
        );
        assert!(session.phase().is_solved());
    }

    #[test]
    fn test_mistakes_accumulate_monotonically() {
        let mut session = session_with_givens(&[0]); // 5 at (0, 0)

        session.apply_input(Position::new(1, 0), "5"); // row conflict
        session.apply_input(Position::new(0, 5), "5"); // column conflict
        session.apply_input(Position::new(1, 1), "5"); // box conflict
        assert_eq!(session.mistake_count(), 3);

        // accepted input and undo never change the counter
        session.apply_input(Position::new(8, 8), "5");
        session.undo();
        assert_eq!(session.mistake_count(), 3);
    }
}
