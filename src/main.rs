use std::{io, process::ExitCode};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod console;
mod options;
mod pace;
mod stats;

/// Exit code for arguments that don't parse
const USAGE_ERROR: u8 = 2;

fn init_logging() {
    // logs go to stderr so they never land inside a frame
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn usage_error(err: &options::ArgError) -> ExitCode {
    eprintln!("{err}\n\n{}", options::usage());
    ExitCode::from(USAGE_ERROR)
}

fn main() -> ExitCode {
    init_logging();

    let args = match options::Args::from_env() {
        Ok(args) => args,
        Err(err) => return usage_error(&err),
    };
    if args.help() {
        println!("{}", options::usage());
        return ExitCode::SUCCESS;
    }
    let config = match args.config() {
        Ok(config) => config,
        Err(err) => return usage_error(&err),
    };
    info!(?config, "starting simulation");

    match app::run(&config, io::stdout().lock(), io::stdin().lock()) {
        Ok(summary) => {
            info!(
                frames = summary.frames,
                generations = summary.generations,
                quit = summary.quit,
                "simulation finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "failed to write to the terminal");
            ExitCode::FAILURE
        }
    }
}
