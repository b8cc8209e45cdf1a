//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod check;
pub mod run;

/// Flowsmith - interactive automation solution architect
#[derive(Parser)]
#[command(name = "flowsmith")]
#[command(version, about = "Flowsmith - interactive automation solution architect")]
#[command(long_about = r#"
Flowsmith interviews you about an automation problem, scores the candidate
solution strategies against your environment, refines the winning
architecture with you, and scaffolds the approved solution to disk.

WORKFLOWS:
  run    → Start an interactive session (interview → select → refine → scaffold)
  check  → Probe which tools and platform accounts are available

EXIT CODES:
  0 - Success (including a declined session)
  1 - General error
  2 - Invalid arguments
  3 - Scaffold generation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one interactive session to a terminal outcome
    Run(run::RunArgs),

    /// Report which capabilities the environment offers
    Check(check::CheckArgs),
}
