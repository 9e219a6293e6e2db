//! Interactive console: menus, coordinate input, board rendering, and the
//! per-turn operation loop.

use std::io::{self, Write};
use std::path::Path;

use crate::cell::Cell;
use crate::common::GameError;
use crate::notakto::{SUB_BOARD_COUNT, SUB_BOARD_SIZE};
use crate::registry::{GameKind, VARIANTS};
use crate::save;
use crate::session::{GameStatus, Mode, Session};
use crate::sum_line::target_number;
use anyhow::Context;
use rand::rngs::SmallRng;

/// Per-turn operations offered to a human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    MakeMove,
    Undo,
    Redo,
    Save,
    Help,
}

const OPERATIONS: &[(Operation, &str)] = &[
    (Operation::MakeMove, "Make a move"),
    (Operation::Undo, "Undo move"),
    (Operation::Redo, "Redo move"),
    (Operation::Save, "Save current game"),
    (Operation::Help, "View help menu"),
];

/// Convert a 1-based column number to its Excel-style label (A..Z, AA..).
pub fn excel_column(mut number: usize) -> String {
    let mut result = String::new();
    while number > 0 {
        number -= 1;
        result.insert(0, (b'A' + (number % 26) as u8) as char);
        number /= 26;
    }
    result
}

/// Parse a spreadsheet-style cell address: one or more letters (base-26
/// column, A=1..Z=26, AA=27..) followed by the row number.
pub fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let letters: String = input.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    let digits = &input[letters.len()..];
    if letters.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut col = 0usize;
    for c in letters.chars() {
        col = col * 26 + (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 || col == 0 {
        return None;
    }
    Some((row, col))
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).context("reading input")?;
    Ok(line.trim().to_string())
}

/// Display a numbered menu and read a valid 1-based choice.
fn choose_from_menu(subject: &str, question: &str, items: &[String]) -> anyhow::Result<usize> {
    loop {
        println!("{}", subject);
        for (i, item) in items.iter().enumerate() {
            println!("{}. {}", i + 1, item);
        }
        let answer = prompt(question)?;
        match answer.parse::<usize>() {
            Ok(choice) if (1..=items.len()).contains(&choice) => return Ok(choice),
            _ => println!("Invalid selection.\n"),
        }
    }
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Print rows `row_start..=row_end` of the grid with Excel column headers
/// and row numbers. Global row numbers are kept so Notakto input addresses
/// stay unambiguous.
fn render_rows(session: &Session, row_start: usize, row_end: usize) {
    let board = session.board();
    let row_width = board.rows().to_string().len();
    let cell_width = (board.rows() * board.cols())
        .to_string()
        .len()
        .max(excel_column(board.cols()).len())
        + 2;

    let mut header = format!("{} |", " ".repeat(row_width));
    for c in 1..=board.cols() {
        header.push_str(&center(&excel_column(c), cell_width));
        header.push('|');
    }
    let divider = "-".repeat(header.len());

    println!("{}", header);
    for r in row_start..=row_end {
        println!("{}", divider);
        print!("{:>width$} |", r, width = row_width);
        for c in 1..=board.cols() {
            print!("{}|", center(&board.get(r, c).to_string(), cell_width));
        }
        println!();
    }
    println!("{}", divider);
}

/// Render the playing surface; Notakto shows its three sub-boards under
/// separate headers.
pub fn render_board(session: &Session) {
    if session.kind() == GameKind::Notakto {
        for i in 0..SUB_BOARD_COUNT {
            println!("Board {}", i + 1);
            let row_start = i * SUB_BOARD_SIZE + 1;
            render_rows(session, row_start, row_start + SUB_BOARD_SIZE - 1);
        }
    } else {
        render_rows(session, 1, session.board().rows());
    }
}

fn show_turn(session: &Session) {
    let player = session.current_player();
    if player.is_human() {
        if session.mode() == Mode::HumanVsHuman {
            println!("Player {}'s turn:", player.number);
        } else {
            println!("Your turn:");
        }
        if session.kind() == GameKind::SumLine {
            println!("Your goal is {}", target_number(session.board().rows()));
        }
    } else {
        println!("Computer's turn:");
    }
    println!("The current game board is:");
    render_board(session);
}

/// Ask a human for the value to place. Card holders pick from their
/// remaining cards; mark holders place their fixed symbol.
fn choose_value(session: &Session) -> anyhow::Result<Cell> {
    let holdings = &session.current_player().holdings;
    let candidates = holdings.candidates();
    match candidates.as_slice() {
        [only] => Ok(*only),
        _ => loop {
            let listed: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
            let answer = prompt(&format!(
                "Please choose one of the following cards ({}): ",
                listed.join(", ")
            ))?;
            if let Some(&cell) = candidates.iter().find(|c| c.to_string() == answer) {
                return Ok(cell);
            }
            println!("Invalid input. Try again.");
        },
    }
}

fn choose_position(session: &Session) -> anyhow::Result<(usize, usize)> {
    loop {
        let answer = prompt("Please choose a position to place in format (e.g. A1): ")?;
        match parse_cell(&answer) {
            Some((row, col)) if session.is_open(row, col) => return Ok((row, col)),
            Some(_) => println!("The chosen position is not available, please try again."),
            None => println!("Invalid input. Try again."),
        }
    }
}

fn human_move(session: &mut Session) -> anyhow::Result<()> {
    let value = choose_value(session)?;
    let (row, col) = choose_position(session)?;
    session.apply_move(row, col, value)?;
    Ok(())
}

fn computer_move(session: &mut Session, rng: &mut SmallRng) -> anyhow::Result<()> {
    let (row, col, value) = session.computer_move(rng)?;
    session.apply_move(row, col, value)?;
    println!("Computer places {} at {}{}", value, excel_column(col), row);
    Ok(())
}

fn choose_operation() -> anyhow::Result<Operation> {
    let labels: Vec<String> = OPERATIONS.iter().map(|(_, l)| l.to_string()).collect();
    let choice = choose_from_menu(
        "Operations:",
        "Please choose one of the operations: ",
        &labels,
    )?;
    Ok(OPERATIONS[choice - 1].0)
}

fn announce_result(session: &Session) {
    println!("Game over! The final board is:");
    render_board(session);

    if session.kind() == GameKind::Notakto {
        if let GameStatus::Won(winner) = session.status() {
            println!("All boards are complete!");
            println!("Player {} loses the game.", 2 - winner);
            println!("Player {} wins!", winner + 1);
        }
        return;
    }

    match session.status() {
        GameStatus::Draw => println!("Game over! Draw!"),
        GameStatus::Won(winner) => match session.mode() {
            Mode::HumanVsHuman => println!("Congratulations! Player {} wins!", winner + 1),
            Mode::ComputerVsComputer => println!("Computer {} wins!", winner + 1),
            Mode::HumanVsComputer => {
                if session.players()[winner].is_human() {
                    println!("Congratulations! You win!");
                } else {
                    println!("Sorry, you lose!");
                }
            }
        },
        GameStatus::InProgress => {}
    }
}

/// Drive one game to completion.
pub fn run_game(session: &mut Session, dir: &Path, rng: &mut SmallRng) -> anyhow::Result<()> {
    while !session.is_over() {
        show_turn(session);
        if session.current_player().is_human() {
            match choose_operation()? {
                Operation::MakeMove => human_move(session)?,
                Operation::Undo => {
                    if !session.undo() {
                        println!("Nothing to undo.");
                    }
                }
                Operation::Redo => {
                    if !session.redo() {
                        println!("Nothing to redo.");
                    }
                }
                Operation::Save => {
                    save::save_game(dir, session)?;
                    println!("Game saved successfully!");
                    human_move(session)?;
                }
                Operation::Help => {
                    println!("\n=== HELP MENU ===");
                    println!("{} rules:", session.kind().name());
                    println!("{}\n", session.kind().help_text());
                }
            }
        } else {
            computer_move(session, rng)?;
        }
        println!();
    }
    announce_result(session);
    Ok(())
}

fn choose_game() -> anyhow::Result<GameKind> {
    let names: Vec<String> = VARIANTS.iter().map(|k| k.name().to_string()).collect();
    let choice = choose_from_menu(
        "Please choose a game to play:",
        "Please enter the number of the game you want to play: ",
        &names,
    )?;
    Ok(VARIANTS[choice - 1])
}

fn choose_board_size() -> anyhow::Result<usize> {
    loop {
        let answer = prompt("Enter the board size: ")?;
        match answer.parse::<usize>() {
            Ok(size) if size >= 2 => return Ok(size),
            _ => println!("Invalid input. Try again."),
        }
    }
}

fn choose_mode() -> anyhow::Result<Mode> {
    let modes = [
        (Mode::HumanVsHuman, "Human vs Human"),
        (Mode::HumanVsComputer, "Human vs Computer"),
        (Mode::ComputerVsComputer, "Computer vs Computer"),
    ];
    let labels: Vec<String> = modes.iter().map(|(_, l)| l.to_string()).collect();
    let choice = choose_from_menu(
        "Gaming modes:",
        "Please choose one of the gaming modes: ",
        &labels,
    )?;
    Ok(modes[choice - 1].0)
}

fn choose_first_mover(mode: Mode) -> anyhow::Result<bool> {
    if mode != Mode::HumanVsComputer {
        return Ok(true);
    }
    loop {
        let answer = prompt("Would you like to play first (Y/N)? ")?;
        match answer.to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => println!("Invalid input. Try again."),
        }
    }
}

fn new_session(kind: GameKind) -> anyhow::Result<Session> {
    let size = if kind.configurable_size() {
        choose_board_size()?
    } else {
        0
    };
    let mode = choose_mode()?;
    let human_first = choose_first_mover(mode)?;
    Ok(Session::new(kind, size, mode, human_first))
}

/// Full program flow: variant menu, new-vs-resume, then the game loop.
pub fn run(dir: &Path, preselected: Option<GameKind>, rng: &mut SmallRng) -> anyhow::Result<()> {
    let kind = match preselected {
        Some(kind) => kind,
        None => choose_game()?,
    };
    println!("Welcome to {}!\n", kind.name());

    let mut session = loop {
        let start = choose_from_menu(
            "Start options:",
            "Please choose one of the start options: ",
            &["Start new game".to_string(), "Resume previous game".to_string()],
        )?;
        if start == 1 {
            break new_session(kind)?;
        }
        match save::load_game(dir, kind) {
            Ok(session) => break session,
            Err(GameError::NoSavedGame) => {
                println!("Previous game record does not exist! Please start a new game!\n");
            }
            // A malformed record is fatal for the resume attempt; the
            // engine must not fabricate missing state.
            Err(e) => return Err(e.into()),
        }
    };

    run_game(&mut session, dir, rng)
}
