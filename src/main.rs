use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use ynab_memo::args::Args;
use ynab_memo::{commands, Mode, Result};

#[tokio::main]
async fn main() -> ExitCode {
    // Values from a .env file must be in the environment before clap reads its env fallbacks.
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());
    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => trace!("No .env file found"),
        Err(e) => error!("Unable to load the .env file: {e}"),
    }

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            commands::print_error(&e, std::io::stderr());
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");

    // This allows for running the program without calling YNAB. When YNAB_MEMO_IN_TEST_MODE is set
    // and non-empty, the mode will be Mode::Test, otherwise it will be Mode::Ynab.
    let mode = Mode::from_env();
    commands::run(&args, mode).await
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
