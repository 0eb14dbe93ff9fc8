//! `soundhz` - CLI for the sound board manager
//!
//! A thin front over the sound board store: every subcommand maps onto one
//! store operation.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use soundhz::cli::{AddCommand, Cli, Command, ConfigCommand, ListCommand, RemoveCommand};
use soundhz::{init_logging, BoardStore, CancelToken, Config, SoundBoard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd).await,
        Command::Add(cmd) => handle_add(&config, cmd).await,
        Command::Remove(cmd) => handle_remove(&config, &cmd).await,
        Command::Config(cmd) => handle_config(&config, &cmd),
    }
}

async fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = BoardStore::with_data_dir(config.data_dir());
    let boards = store.list(&CancelToken::new()).await?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&boards)?);
        return Ok(());
    }

    for board in &boards {
        println!("{}", board.title());
        if !board.description().is_empty() {
            println!("    {}", board.description());
        }
        for sound in board.sounds() {
            println!("    - {} ({})", sound.name(), sound.file_path());
        }
    }
    Ok(())
}

async fn handle_add(config: &Config, cmd: AddCommand) -> anyhow::Result<()> {
    let board = SoundBoard::new(cmd.title, cmd.description)?;
    let title = board.title().to_string();

    let store = BoardStore::with_data_dir(config.data_dir());
    store.add(board, &CancelToken::new()).await?;

    println!("Added sound board \"{title}\".");
    Ok(())
}

async fn handle_remove(config: &Config, cmd: &RemoveCommand) -> anyhow::Result<()> {
    let store = BoardStore::with_data_dir(config.data_dir());
    let removed = store.remove(&cmd.title, &CancelToken::new()).await?;

    if removed == 0 {
        println!("No sound board titled \"{}\" was found.", cmd.title);
    } else {
        println!("Removed {removed} sound board(s).");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Data directory:  {}", config.data_dir().display());
                println!("Boards file:     {}", config.boards_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
