//! `ldeck` - CLI for launchdeck
//!
//! This binary loads the launch list once, then prints either the filtered
//! list or the details of one launch.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use launchdeck::cli::output::{
    format_detail_human, format_detail_json, format_list_human, format_list_json, rows,
};
use launchdeck::cli::{Cli, Command, ConfigCommand, ListCommand, ShowCommand};
use launchdeck::{
    init_logging, Aggregator, AppState, Config, Error, Event, FetchError, ListView,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Only the API commands and `config show` need a loadable configuration
    match &cli.command {
        Command::List(list_cmd) => handle_list(&cli.load_config()?, list_cmd).await,
        Command::Show(show_cmd) => handle_show(&cli.load_config()?, show_cmd).await,
        Command::Config(config_cmd) => handle_config(&cli, config_cmd),
    }
}

/// Run the single load of this session and fold its outcome into the state.
async fn load_state(config: &Config) -> anyhow::Result<AppState> {
    let aggregator = Aggregator::from_config(&config.api)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling load");
            on_interrupt.cancel();
        }
    });

    let started = AppState::new().reduce(Event::LoadStarted);
    let state = match Event::from(aggregator.load(&cancel).await) {
        Event::LoadCancelled => bail!(Error::from(FetchError::Cancelled)),
        event => started.reduce(event),
    };

    if let Some(warning) = state.warning() {
        eprintln!("warning: {warning}");
    }
    Ok(state)
}

async fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let query = cmd.query.clone().unwrap_or_default();
    let state = load_state(config)
        .await?
        .reduce(Event::QueryChanged(query));

    match state.list_view() {
        ListView::Loading => bail!("load did not finish"),
        ListView::Failed(err) => Err(anyhow!(err.clone())),
        ListView::Records(records) => {
            let newest_first = config.display.newest_first && !cmd.oldest_first;
            let rows = rows(&records, newest_first);
            let query = state.query().as_str();
            if cmd.json {
                println!("{}", format_list_json(query, rows)?);
            } else {
                print!("{}", format_list_human(query, &rows));
            }
            Ok(())
        }
    }
}

async fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let state = load_state(config)
        .await?
        .reduce(Event::Selected(cmd.flight_number));

    if let Some(err) = state.error() {
        return Err(anyhow!(err.clone()));
    }

    let Some(fields) = state.detail() else {
        return Err(Error::LaunchNotFound {
            flight_number: cmd.flight_number,
        }
        .into());
    };

    if cmd.json {
        println!("{}", format_detail_json(&fields)?);
    } else {
        print!("{}", format_detail_human(&fields));
    }
    Ok(())
}

fn handle_config(cli: &Cli, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = cli.load_config()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[API]");
                println!("  Base URL:           {}", config.api.base_url);
                println!("  Timeout (seconds):  {}", config.api.timeout_secs);
                println!("  User agent:         {}", config.api.user_agent);
                println!();
                println!("[Display]");
                println!("  Newest first:       {}", config.display.newest_first);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { .. } => {
            let path = cli.validation_target();
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration error")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
