//! Othello - unified CLI
//!
//! Interactive console play plus single-move commands over a save file.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use othello_online::{ConsoleGame, GameState, MoveOutcome, OthelloConfig, SaveStore, render};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let mut config = OthelloConfig::load_or_default(&cli.config)?;
    if let Some(save_path) = cli.save_path {
        info!(save_path = %save_path.display(), "Overriding save path");
        config = config.with_save_path(save_path);
    }
    let store = SaveStore::new(config.save_path());

    match cli.command {
        Command::Play { save } => run_play(&config, &store, save),
        Command::New => run_new(&config, &store),
        Command::Move {
            row,
            col,
            turn_number,
        } => run_move(&config, &store, row, col, turn_number),
        Command::Show { json } => run_show(&config, &store, json),
        Command::Turn => run_turn(&store),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument(skip(config, store))]
fn run_play(config: &OthelloConfig, store: &SaveStore, save: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = ConsoleGame::new(config, stdin.lock(), stdout.lock());

    if save {
        let game = store.load_or_new()?;
        console.with_store(store).run(game)?;
    } else {
        console.run(GameState::new_game())?;
    }
    Ok(())
}

/// Start a new saved game
#[instrument(skip(config, store))]
fn run_new(config: &OthelloConfig, store: &SaveStore) -> Result<()> {
    let game = store.new_game()?;
    print!("{}", render::summary(&game, config));
    Ok(())
}

/// Apply one move to the saved game
#[instrument(skip(config, store))]
fn run_move(
    config: &OthelloConfig,
    store: &SaveStore,
    row: usize,
    col: usize,
    turn_number: u32,
) -> Result<()> {
    let outcome = store.apply_move(row, col, turn_number)?;
    match &outcome {
        MoveOutcome::Applied { applied, .. } => println!("Played {}", applied),
        MoveOutcome::Stale {
            requested, current, ..
        } => println!(
            "Move for turn {} ignored; the game is on turn {}",
            requested, current
        ),
        MoveOutcome::Rejected { error, .. } => println!("{}", error),
    }
    println!();
    print!("{}", render::summary(outcome.game(), config));
    Ok(())
}

/// Show the saved game
#[instrument(skip(config, store))]
fn run_show(config: &OthelloConfig, store: &SaveStore, json: bool) -> Result<()> {
    let game = store.load_or_new()?;
    if json {
        let view = serde_json::json!({
            "status": game.status(),
            "game": game,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::summary(&game, config));
    }
    Ok(())
}

/// Print the saved turn number
#[instrument(skip(store))]
fn run_turn(store: &SaveStore) -> Result<()> {
    let turn = if store.exists() { store.turn_number()? } else { 0 };
    println!("{}", turn);
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,othello_online=info,strictly_othello=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
