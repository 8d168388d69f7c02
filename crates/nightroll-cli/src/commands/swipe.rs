use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use nightroll_application::{SeedCatalog, SessionOutcome, SwipeSession};
use nightroll_core::{Direction, GestureDecision, Item};

use super::AppContext;

/// Number of cards previewed behind the front one.
const TAIL_PREVIEW: usize = 3;

const WORDS: [&str; 4] = ["like", "pass", "skip", "quit"];

/// A parsed line of swipe input.
#[derive(Debug, Clone, PartialEq)]
enum SwipeInput {
    Decide(Direction),
    Release { offset: f64, velocity: f64 },
    Quit,
}

fn parse_input(line: &str) -> Result<SwipeInput, String> {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Err("empty input".to_string());
    };

    match first.to_lowercase().as_str() {
        "r" | "right" | "like" | "y" => return Ok(SwipeInput::Decide(Direction::Right)),
        "l" | "left" | "pass" | "skip" | "n" => return Ok(SwipeInput::Decide(Direction::Left)),
        "q" | "quit" | "exit" => return Ok(SwipeInput::Quit),
        _ => {}
    }

    let offset: f64 = first
        .parse()
        .map_err(|_| format!("unrecognized input '{}'", first))?;
    let velocity: f64 = match parts.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid velocity '{}'", raw))?,
        None => 0.0,
    };
    if parts.next().is_some() {
        return Err("expected '<offset> [velocity]'".to_string());
    }
    Ok(SwipeInput::Release { offset, velocity })
}

#[derive(Clone)]
struct SwipeHelper;

impl Helper for SwipeHelper {}

impl Completer for SwipeHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let candidates = WORDS
            .iter()
            .filter(|word| word.starts_with(line))
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for SwipeHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() {
            return None;
        }
        WORDS
            .iter()
            .find(|word| word.starts_with(line) && word.len() > line.len())
            .map(|word| word[line.len()..].to_string())
    }
}

impl Highlighter for SwipeHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Borrowed(line)
    }
}

impl Validator for SwipeHelper {}

pub fn run(ctx: &mut AppContext, category: &str) -> Result<()> {
    let catalog = SeedCatalog::new();
    let slug = SeedCatalog::normalize(category);
    let label = catalog.label(&slug);
    let candidates = catalog.candidates(&slug, &mut rand::thread_rng());
    let mut session = SwipeSession::start(slug, candidates, ctx.thresholds);

    let mut rl: Editor<SwipeHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(SwipeHelper));

    println!("{}", format!("=== {} ===", label).bright_magenta().bold());
    println!(
        "{}",
        format!(
            "'like'/'r' or 'pass'/'l' to decide, '<offset> [velocity]' to release a drag \
             (commits past {} units or {} units/s), 'quit' to stop.",
            ctx.thresholds.distance, ctx.thresholds.velocity
        )
        .bright_black()
    );

    loop {
        let Some((ticket, front)) = session.front_ticket() else {
            println!();
            println!("{}", format!("You're out of {} cards.", label).bright_yellow());
            println!("{}", "Run `nightroll spin` to pick from your likes.".bright_black());
            break;
        };
        print_card(front, &session.tail(TAIL_PREVIEW), session.remaining());

        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let outcome = match parse_input(trimmed) {
            Ok(SwipeInput::Quit) => break,
            Ok(SwipeInput::Decide(direction)) => {
                session.decide(&mut ctx.store, ticket, direction)?
            }
            Ok(SwipeInput::Release { offset, velocity }) => {
                session.release(&mut ctx.store, offset, velocity)?
            }
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };
        print_outcome(&outcome);
    }

    let liked = ctx.store.liked(session.category()).len();
    println!("{}", format!("{} liked in {}.", liked, label).bright_black());
    Ok(())
}

fn print_card(front: &Item, tail: &[&Item], remaining: usize) {
    println!();
    println!("{} {}", "┃".bright_cyan(), front.title.bold());
    if let Some(subtitle) = &front.subtitle {
        println!("{} {}", "┃".bright_cyan(), subtitle.bright_black());
    }
    if !tail.is_empty() {
        let next: Vec<&str> = tail.iter().map(|item| item.title.as_str()).collect();
        println!("{}", format!("  next: {}", next.join(", ")).bright_black());
    }
    println!("{}", format!("  {} left", remaining).bright_black());
}

fn print_outcome(outcome: &SessionOutcome) {
    match (outcome.decision, &outcome.item) {
        (GestureDecision::CommitRight, Some(item)) => {
            println!("{} {}", "LIKE".green().bold(), item.title)
        }
        (GestureDecision::CommitLeft, Some(item)) => {
            println!("{} {}", "PASS".red().bold(), item.title)
        }
        _ => println!("{}", "↺ snapped back".bright_black()),
    }
}
