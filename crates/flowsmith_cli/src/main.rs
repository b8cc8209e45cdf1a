//! Flowsmith CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (a declined session is a normal outcome)
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Scaffold generation failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

use flowsmith_session::SessionError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const GENERATION_FAILURE: u8 = 3;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()))
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args).await,
        Commands::Check(args) => commands::check::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(session_error) = e.downcast_ref::<SessionError>() {
        return match session_error {
            SessionError::Scaffold(_) => ExitCodes::GENERATION_FAILURE,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("argument") || msg.contains("option") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
