use anyhow::Context;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tribu_desk::{Config, Controller};

mod cli;

#[derive(Parser, Debug)]
#[command(name = "tribu-desk")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override DATABASE_PATH
    #[arg(short, long, global = true)]
    database: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Create the database and its tables
    Init,
    #[command(flatten)]
    Account(cli::account::Command),
    /// Operate on contacts
    #[command(subcommand)]
    Contacts(cli::contact::Command),
    /// Operate on quotations
    #[command(subcommand)]
    Quotations(cli::quotation::Command),
    /// Operate on rules
    #[command(subcommand)]
    Rules(cli::rule::Command),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the command succeeded.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(path) = cli.database {
        config.database_path = path;
    }

    let controller = Controller::new(config).context("could not open database")?;

    match &cli.command {
        Command::Init => {
            println!(
                "Database ready at {}",
                controller.config().database_path.display()
            );
            Ok(true)
        }
        Command::Account(cmd) => cli::account::handle(&controller, cmd),
        Command::Contacts(cmd) => cli::contact::handle(&controller, cmd),
        Command::Quotations(cmd) => cli::quotation::handle(&controller, cmd),
        Command::Rules(cmd) => cli::rule::handle(&controller, cmd),
    }
}
