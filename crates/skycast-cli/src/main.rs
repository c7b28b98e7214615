use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use skycast_cli::handlers;
use skycast_cli::handlers::now::NowArgs;
use skycast_cli::{Cli, CliConfig, CliError, Commands, bootstrap};
use skycast_core::{NewWeatherRecord, env_file_path};

#[tokio::main]
async fn main() {
    load_env_files();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let err = CliError::from_anyhow(err);
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

/// Load `.env` from the working directory, then from the data directory.
/// Variables already set in the environment are never overridden.
fn load_env_files() {
    dotenvy::dotenv().ok();
    if let Ok(path) = env_file_path() {
        dotenvy::from_path(path).ok();
    }
}

/// Log to stderr. `--verbose` forces debug; otherwise `RUST_LOG` or warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(mut cli: Cli) -> Result<()> {
    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Paths => {
            handlers::paths::execute(cli.database.as_deref())?;
        }
        Commands::Now {
            query,
            at,
            periods,
            json,
        } => {
            let args = NowArgs {
                query,
                at,
                periods,
                json,
            };
            handlers::now::execute(&ctx, args).await?;
        }
        Commands::Save { query, date } => {
            handlers::save::execute(&ctx, query, date).await?;
        }
        Commands::Add {
            location,
            date,
            temperature,
            wind_speed,
            wind_direction,
            forecast,
        } => {
            let record =
                NewWeatherRecord::new(location, date, temperature, wind_speed, wind_direction)
                    .with_forecast(forecast.unwrap_or_default());
            handlers::add::execute(&ctx, record).await?;
        }
        Commands::History { location } => {
            handlers::history::execute(&ctx, location).await?;
        }
        Commands::Delete {
            location,
            date,
            force,
        } => {
            handlers::delete::execute(&ctx, &location, date, force).await?;
        }
        Commands::Count => {
            handlers::count::execute(&ctx).await?;
        }
        Commands::Config { command } => {
            handlers::config::execute(&ctx, command).await?;
        }
    }

    Ok(())
}
