//! Terminal front end for the Sudoku game.
//!
//! A thin read-eval loop over [`GameSession`]: stdin commands are bound to
//! session methods and the resulting outcomes are printed. All game logic
//! lives in the library crates.

use std::{
    io::{self, BufRead as _, Write as _},
    time::Instant,
};

use clap::Parser;
use sudoku_core::Position;
use sudoku_game::{CellState, GameSession, HintOutcome, InputOutcome, RejectReason, UndoOutcome};
use sudoku_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to replay, as 64 hex characters.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Per-cell probability that a cell starts revealed as a given.
    #[arg(long, value_name = "PROB", default_value_t = PuzzleGenerator::DEFAULT_REVEAL_PROBABILITY)]
    reveal_probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Put { row: u8, col: u8 },
    Clear { row: u8, col: u8 },
    Undo,
    Hint,
    New,
    Quit,
}

/// Parses one input line into a command plus the raw value text for `put`.
///
/// Rows and columns are 1-9 as shown on the rendered board. The value of a
/// `put` is returned verbatim so the session performs the format check.
fn parse_command(line: &str) -> Result<(Command, Option<&str>), String> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Err("empty command".into());
    };

    match keyword {
        "put" => {
            let row = coordinate(&mut parts, "row")?;
            let col = coordinate(&mut parts, "col")?;
            let value = parts.next().ok_or("missing value")?;
            Ok((Command::Put { row, col }, Some(value)))
        }
        "clear" => {
            let row = coordinate(&mut parts, "row")?;
            let col = coordinate(&mut parts, "col")?;
            Ok((Command::Clear { row, col }, None))
        }
        "undo" => Ok((Command::Undo, None)),
        "hint" => Ok((Command::Hint, None)),
        "new" => Ok((Command::New, None)),
        "quit" | "exit" => Ok((Command::Quit, None)),
        other => Err(format!("unknown command: {other}")),
    }
}

fn coordinate<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> Result<u8, String> {
    parts
        .next()
        .ok_or_else(|| format!("missing {name}"))?
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=9).contains(n))
        .ok_or_else(|| format!("{name} must be 1-9"))
}

fn position(row: u8, col: u8) -> Position {
    Position::new(col - 1, row - 1)
}

fn render(session: &GameSession) {
    println!("    1 2 3   4 5 6   7 8 9");
    println!("  +-------+-------+-------+");
    for y in 0..9 {
        print!("{} |", y + 1);
        for x in 0..9 {
            match session.cell(Position::new(x, y)) {
                CellState::Given(digit) | CellState::Filled(digit) => print!(" {digit}"),
                CellState::Empty => print!(" ."),
            }
            if x % 3 == 2 {
                print!(" |");
            }
        }
        println!();
        if y % 3 == 2 {
            println!("  +-------+-------+-------+");
        }
    }

    let elapsed = session.elapsed_seconds();
    println!(
        "Time: {:02}:{:02}   Mistakes: {}",
        elapsed / 60,
        elapsed % 60,
        session.mistake_count()
    );
}

fn report_input(outcome: InputOutcome) {
    match outcome {
        InputOutcome::Accepted => {}
        InputOutcome::Cleared => println!("Cell cleared."),
        InputOutcome::Rejected(RejectReason::GivenCell) => {
            println!("That cell is part of the puzzle.");
        }
        InputOutcome::Rejected(RejectReason::InvalidFormat) => {
            println!("Enter a digit from 1 to 9.");
        }
        InputOutcome::Rejected(RejectReason::RuleViolation) => {
            println!("That number doesn't fit there!");
        }
    }
}

fn report_hint(outcome: HintOutcome) {
    match outcome {
        HintOutcome::Provided { position, digit } => {
            println!(
                "Hint provided! {digit} at row {}, col {}.",
                position.y() + 1,
                position.x() + 1
            );
        }
        HintOutcome::CooldownActive { remaining } => {
            println!("Hint cooldown: {:.1}s", remaining.as_secs_f64());
        }
        HintOutcome::NoEmptyCells => println!("No empty cells!"),
    }
}

fn new_session(generator: &PuzzleGenerator, seed: Option<PuzzleSeed>) -> GameSession {
    let puzzle = match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    log::info!("new game, seed={}", puzzle.seed);
    GameSession::new(puzzle)
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::with_reveal_probability(args.reveal_probability);
    let mut session = new_session(&generator, args.seed);
    let mut rng = rand::rng();

    // Cooperative clock: whole seconds spent waiting for input are replayed
    // into tick() before each command is handled.
    let mut clock = Instant::now();

    println!("Commands: put <row> <col> <digit>, clear <row> <col>, undo, hint, new, quit");
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;

        let pending = clock.elapsed().as_secs();
        for _ in 0..pending {
            session.tick();
        }
        clock += std::time::Duration::from_secs(pending);

        let solved_before = session.phase().is_solved();
        match parse_command(&line) {
            Ok((Command::Put { row, col }, value)) => {
                let outcome = session.apply_input(position(row, col), value.unwrap_or(""));
                report_input(outcome);
            }
            Ok((Command::Clear { row, col }, _)) => {
                report_input(session.apply_input(position(row, col), ""));
            }
            Ok((Command::Undo, _)) => match session.undo() {
                UndoOutcome::Applied => println!("Last move reverted."),
                UndoOutcome::NoOp => println!("Nothing to undo."),
            },
            Ok((Command::Hint, _)) => report_hint(session.request_hint(&mut rng)),
            Ok((Command::New, _)) => {
                session = new_session(&generator, None);
                clock = Instant::now();
            }
            Ok((Command::Quit, _)) => break,
            Err(message) => println!("{message}"),
        }

        render(&session);
        if !solved_before && session.phase().is_solved() {
            println!("You Won!");
        }
    }

    Ok(())
}
