//! Terminal Binary
//!
//! Plays a live table in the terminal. Online play signs in against the
//! database at DB_URL so finished games land on the leaderboard.
//!
//! Options: --difficulty <easy|hard>, --offline

mod render;

use clap::Parser;
use colored::Colorize;
use flippy_auth::AuthRepository;
use flippy_auth::Member;
use flippy_core::ID;
use flippy_core::Unique;
use flippy_engine::Difficulty;
use flippy_engine::Engine;
use flippy_engine::Snapshot;
use flippy_gameroom::*;
use flippy_records::Memory;
use flippy_records::ScoreStore;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Flip cards two at a time and find every pair")]
struct Args {
    /// Grid size: easy (4x4) or hard (6x6)
    #[arg(long, default_value = "easy", value_parser = parse_difficulty)]
    difficulty: Difficulty,
    /// Keep scores in memory instead of signing in
    #[arg(long)]
    offline: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::try_from(s).map_err(|e| e.to_string())
}

/// Maps a line of input to a table command.
fn command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "q" | "quit" | "exit" => Some(Command::Leave),
        "n" | "new" => match words.next() {
            None => Some(Command::NewGame(None)),
            Some(d) => Difficulty::try_from(d).ok().map(Some).map(Command::NewGame),
        },
        word => word.parse::<usize>().ok().map(Command::Click),
    }
}

/// Forwards stdin to the table until it closes or the player quits.
fn listen(tx: UnboundedSender<Command>) {
    let hint = "card number, n [easy|hard] for a new game, q to quit";
    println!("{}", hint.dimmed());
    let mut line = String::new();
    loop {
        line.clear();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => {
                let _ = tx.send(Command::Leave);
                return;
            }
            Ok(_) => match command(&line) {
                Some(Command::Leave) => {
                    let _ = tx.send(Command::Leave);
                    return;
                }
                Some(cmd) => {
                    if tx.send(cmd).is_err() {
                        return;
                    }
                }
                None if line.trim().is_empty() => continue,
                None => println!("{}", hint.dimmed()),
            },
        }
    }
}

async fn offline() -> (Arc<dyn ScoreStore>, Member) {
    let memory = Memory::default();
    let member = Member::new(ID::default(), "player".into(), "player@localhost".into());
    memory.enroll(&member).await;
    let store: Arc<dyn ScoreStore> = Arc::new(memory);
    (store, member)
}

async fn online() -> anyhow::Result<(Arc<dyn ScoreStore>, Member)> {
    let client = flippy_database::db().await;
    let identifier = dialoguer::Input::<String>::new()
        .with_prompt("username or email")
        .interact_text()?;
    let password = dialoguer::Password::new()
        .with_prompt("password")
        .interact()?;
    match client.lookup(identifier.trim()).await? {
        Some((member, hashword)) if flippy_auth::password::verify(&password, &hashword) => {
            log::info!("[play] signed in as {}", member.username());
            let store: Arc<dyn ScoreStore> = Arc::new(client);
            Ok((store, member))
        }
        _ => Err(anyhow::anyhow!("invalid credentials")),
    }
}

async fn play(difficulty: Difficulty, store: Arc<dyn ScoreStore>, member: &Member) {
    let engine = Engine::new(difficulty);
    let config = TimerConfig::default();
    let (table, seat) = Table::new(ID::default(), engine, Some(member.id()), store, config);
    let Seat {
        commands,
        mut events,
    } = seat;
    tokio::spawn(table.run());
    std::thread::spawn(move || listen(commands));
    let mut last: Option<Snapshot> = None;
    while let Some(event) = events.recv().await {
        match event {
            Event::Snapshot(snapshot) => {
                if render::changed(last.as_ref(), &snapshot) {
                    println!("{}", render::render(&snapshot));
                }
                last = Some(snapshot);
            }
            Event::Complete(completion) => println!("{}", completion.to_string().green().bold()),
            Event::Saved(points) => println!("{}", format!("saved {} points", points).green()),
            Event::Notice(message) => println!("{}", message.yellow()),
            Event::Rejected(reason) => println!("{}", reason.red()),
        }
    }
}

async fn report(store: &dyn ScoreStore, member: &Member) -> anyhow::Result<()> {
    let summary = store.summary(member.id()).await?;
    if summary.total_games > 0 {
        println!(
            "{} games, {} moves and {}s on average, mostly {}",
            summary.total_games, summary.avg_moves, summary.avg_time, summary.most_played
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flippy_core::quiet();
    flippy_core::kys();
    let args = Args::parse();
    let (store, member) = if args.offline {
        offline().await
    } else {
        online().await?
    };
    play(args.difficulty, store.clone(), &member).await;
    report(store.as_ref(), &member).await?;
    std::process::exit(0)
}
