//! Terminal front end for the memory game.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use memory_match::{CardFace, Difficulty, GameConfig, RevealOutcome, Table};

const COLUMNS: usize = 4;

#[derive(Parser)]
#[command(name = "memory")]
#[command(about = "Flip cards two at a time and find every pair")]
#[command(version)]
struct Cli {
    /// Difficulty: easy (4 pairs), medium (6) or hard (8)
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Milliseconds a mismatched pair stays visible
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// Shuffle seed for a reproducible deal
    #[arg(short, long)]
    seed: Option<u64>,
}

enum Command {
    Flip(usize),
    Restart,
    Difficulty(Difficulty),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    if let Ok(position) = head.parse::<usize>() {
        // Cards are numbered from 1 on screen; 0 maps out of range
        return Some(Command::Flip(position.checked_sub(1).unwrap_or(usize::MAX)));
    }

    match head.to_ascii_lowercase().as_str() {
        "r" | "restart" => Some(Command::Restart),
        "d" | "difficulty" => parts.next()?.parse().ok().map(Command::Difficulty),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn render(table: &Table) {
    let snapshot = table.snapshot();

    println!();
    for (row_start, row) in snapshot.faces.chunks(COLUMNS).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, face)| {
                let position = row_start * COLUMNS + col + 1;
                match face {
                    CardFace::FaceDown => format!("[{:>2}: ? ]", position),
                    CardFace::FaceUp { symbol, matched: true } => format!("[{:>2}:{}✓]", position, symbol),
                    CardFace::FaceUp { symbol, matched: false } => format!("[{:>2}:{} ]", position, symbol),
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
    println!();
    println!("  {}", snapshot.stats_line());
}

fn print_help() {
    println!("Find all matching pairs. Flip two cards per move; matches stay up.");
    println!("  <n>            flip card n");
    println!("  r | restart    deal a new game");
    println!("  d <level>      switch difficulty (easy, medium, hard) and deal");
    println!("  h | help       show this help");
    println!("  q | quit       leave");
}

/// Let a mismatched pair show for the configured delay, then flip it back.
fn wait_out_mismatch(table: &mut Table) {
    if let Some(due) = table.next_deadline() {
        let remaining = due - table.now();
        if remaining > Duration::ZERO {
            std::thread::sleep(remaining);
        }
        table.tick();
        render(table);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::default()
        .with_difficulty(cli.difficulty)
        .with_mismatch_delay(Duration::from_millis(cli.delay_ms));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut table = Table::with_system_clock(config)?;
    let mut editor = DefaultEditor::new()?;

    println!("🧠 Memory Match ({})", table.config().difficulty);
    print_help();
    render(&table);

    loop {
        let line = match editor.readline("memory> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = editor.add_history_entry(line.as_str());

        let Some(command) = parse_command(&line) else {
            println!("Unknown command. Type 'help' for a list.");
            continue;
        };

        match command {
            Command::Flip(index) => match table.reveal(index) {
                RevealOutcome::Ignored(reason) => println!("Can't flip that card ({:?}).", reason),
                RevealOutcome::Mismatched => {
                    render(&table);
                    println!("  No match.");
                    wait_out_mismatch(&mut table);
                }
                RevealOutcome::Matched { complete } => {
                    render(&table);
                    if complete {
                        if let Some(summary) = table.summary() {
                            println!("\n{}\n", summary);
                        }
                        println!("Type 'restart' to play again.");
                    } else {
                        println!("  Match!");
                    }
                }
                RevealOutcome::FirstFlipped => render(&table),
            },
            Command::Restart => {
                table.restart()?;
                render(&table);
            }
            Command::Difficulty(difficulty) => {
                table.set_difficulty(difficulty)?;
                println!("Difficulty: {}", difficulty);
                render(&table);
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    Ok(())
}
