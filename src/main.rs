use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use psysafe::cli::args::{Cli, Commands};
use psysafe::cli::commands;
use psysafe::config::Config;
use psysafe::error::PsySafeError;
use psysafe::output::Notification;
use psysafe::storage::KeyValueStore;

const LOG_ENV: &str = "PSYSAFE_LOG";

fn main() {
    if let Err(e) = run() {
        match e.downcast_ref::<PsySafeError>() {
            Some(err) if err.is_user_error() => {
                eprintln!("{}", Notification::warning(err.to_string()).render());
            }
            _ => eprintln!("{}: {:#}", "error".red().bold(), e),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "psysafe=info",
        2 => "psysafe=debug",
        _ => "psysafe=trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("loading ~/.psysafe/config.yaml")?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Breathe(args) => commands::breathe(args, &config.breathing, format)?,
        Commands::Techniques => commands::techniques(format)?,
        Commands::Checklist { items } => commands::checklist(&items, format)?,
        Commands::Burnout { levels } => commands::burnout(&levels, format)?,
        Commands::Diary(args) => {
            commands::diary(&KeyValueStore::open()?, args.command, format)?
        }
        Commands::Boundaries(args) => {
            commands::boundaries(&KeyValueStore::open()?, args.command, format)?
        }
        Commands::Plan(args) => commands::plan(&KeyValueStore::open()?, args.command, format)?,
        Commands::Research { dataset } => commands::research(dataset.as_deref(), format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
