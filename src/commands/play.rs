//! Interactive text game
//!
//! Reads one word or command per line and drives a [`GameSession`].
//! Rendering reacts to session notifications rather than polling.

use crate::game::GameSession;
use crate::output::formatters::{format_rungs, highlight_change};
use crate::search::SearchPath;
use anyhow::{Result, bail};
use colored::Colorize;
use rand::Rng;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// How an interactive game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    pub won: bool,
    pub moves: usize,
    pub path: SearchPath,
}

enum Command {
    Quit,
    Reset,
    NewGame,
    Hint,
    ShowPath,
    Help,
    Guess(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let input = line.trim().to_lowercase();
        match input.as_str() {
            "" => None,
            "quit" | "q" | "exit" => Some(Self::Quit),
            "reset" | "r" => Some(Self::Reset),
            "new" | "n" => Some(Self::NewGame),
            "hint" | "solve" => Some(Self::Hint),
            "path" | "p" => Some(Self::ShowPath),
            "help" | "?" => Some(Self::Help),
            _ => Some(Self::Guess(input)),
        }
    }
}

/// Play a game on an already configured session
///
/// Stops when the target is reached, on `quit`, or at end of input.
/// Rejected moves are explained only if `report_invalid_moves` is set; the
/// winning banner shows the computed solution instead of the player's path
/// when `reveal_solution_path` is set.
///
/// # Errors
///
/// Returns an error if the session has no endpoints, or on I/O failure.
pub fn run_play<R, W, G>(
    session: &mut GameSession,
    reader: R,
    mut out: W,
    rng: &mut G,
) -> Result<PlaySummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    if !session.is_configured() {
        bail!("cannot start a game before start and target words are set");
    }

    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    let subscription = session.subscribe(move |_| flag.set(true));

    print_banner(session, &mut out)?;

    let mut won = session.is_won();
    let mut lines = reader.lines();
    while !won {
        let Some(line) = lines.next() else {
            break;
        };
        let Some(command) = Command::parse(&line?) else {
            continue;
        };

        match command {
            Command::Quit => {
                writeln!(out, "{}", "Thanks for playing!".bright_white())?;
                break;
            }
            Command::Reset => {
                session.reset()?;
                writeln!(out, "{}", "Path cleared.".yellow())?;
            }
            Command::NewGame => {
                let start = session.start_word().map(|w| w.text().to_owned());
                let target = session.target_word().map(|w| w.text().to_owned());
                let outcome =
                    session.configure_endpoints_with_rng(start.as_deref(), target.as_deref(), rng);
                match outcome {
                    Ok(()) => {
                        print_banner(session, &mut out)?;
                        won = session.is_won();
                    }
                    Err(e) => {
                        writeln!(out, "{}", format!("Could not start a new game: {e}").red())?;
                    }
                }
            }
            Command::Hint => match session.solution_path()? {
                Some(path) => writeln!(
                    out,
                    "{}",
                    format!("Shortest ladder ({} steps): {path}", path.edge_count()).cyan()
                )?,
                None => writeln!(out, "{}", "The target cannot be reached.".red())?,
            },
            Command::ShowPath => render_path(&session.current_path(), &mut out)?,
            Command::Help => print_help(&mut out)?,
            Command::Guess(word) => {
                let previous = session.current_path().last().cloned();
                let result = session.submit_move(&word)?;

                if result.is_accepted() {
                    if let (Some(previous), Some(current)) =
                        (previous, session.current_path().last())
                    {
                        writeln!(out, "  {} → {}", previous, highlight_change(&previous, current))?;
                    }
                    won = session.is_won();
                } else if session.config().report_invalid_moves {
                    writeln!(
                        out,
                        "{}",
                        format!("Invalid move '{word}': {}", result.describe()).red()
                    )?;
                }
            }
        }

        if dirty.replace(false) && !won {
            render_path(&session.current_path(), &mut out)?;
        }
    }

    if won {
        print_victory(session, &mut out)?;
    }

    session.unsubscribe(subscription);

    Ok(PlaySummary {
        won,
        moves: session.moves_made(),
        path: session.current_path(),
    })
}

fn print_banner<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    let start = session.start_word().map_or("----", |w| w.text());
    let target = session.target_word().map_or("----", |w| w.text());

    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(out, "{}", "  W E A V E R".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    writeln!(out, "Start word:  {}", start.to_uppercase().bright_yellow().bold())?;
    writeln!(out, "Target word: {}", target.to_uppercase().bright_yellow().bold())?;
    writeln!(out, "Change one letter at a time. Type 'help' for commands.\n")?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <word>   submit the next word")?;
    writeln!(out, "  reset    clear your path back to the start word")?;
    writeln!(out, "  new      start a new game")?;
    writeln!(out, "  hint     show a shortest ladder")?;
    writeln!(out, "  path     show your current path")?;
    writeln!(out, "  quit     leave the game")?;
    Ok(())
}

fn render_path<W: Write>(path: &SearchPath, out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_rungs(path))?;
    Ok(())
}

fn print_victory<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    let moves = session.moves_made();
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!(
            "🎉 You reached {} in {moves} {}!",
            session.target_word().map_or("", |w| w.text()),
            if moves == 1 { "move" } else { "moves" }
        )
        .bright_green()
        .bold()
    )?;

    if session.config().reveal_solution_path {
        if let Some(solution) = session.solution_path()? {
            writeln!(
                out,
                "{}",
                format!("Shortest ladder ({} steps): {solution}", solution.edge_count()).cyan()
            )?;
        }
    } else {
        writeln!(out, "{}", format!("Your path: {}", session.current_path()).cyan())?;
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    Ok(())
}
