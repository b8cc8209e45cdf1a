//! Run command - one interactive session from interview to scaffold.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use flowsmith_interview::{ConsoleAnswers, SystemProbe};
use flowsmith_session::{Pipeline, PipelineOutcome, SessionStore};

#[derive(Args)]
pub struct RunArgs {
    /// Root directory for generated scaffolds
    #[arg(short, long, env = "FLOWSMITH_OUT", default_value = "flowsmith-out")]
    output: PathBuf,
}

pub async fn execute(args: RunArgs) -> Result<()> {
    info!("Starting session (output root: {})", args.output.display());

    let mut answers = ConsoleAnswers::new();
    let probe = SystemProbe::new();
    let mut store = SessionStore::new();

    let outcome = Pipeline::new(&mut answers, &probe, &args.output)
        .run(&mut store)
        .await?;

    match outcome {
        PipelineOutcome::Implemented { record, out_dir } => {
            println!();
            println!(
                "✅ {} scaffold generated",
                record.solution.solution_type.display_name()
            );
            println!();
            println!("Location: {}", out_dir.display());
            println!();
            println!("Files:");
            for file in &record.implementation.files {
                println!("  {}", file);
            }
            println!();
            println!("Setup:");
            for (index, instruction) in record.implementation.instructions.iter().enumerate() {
                println!("  {}. {}", index + 1, instruction);
            }
            println!();
            println!("Next steps:");
            for step in &record.implementation.next_steps {
                println!("  - {}", step);
            }
        }
        PipelineOutcome::Rejected => {
            println!();
            println!("No solution was approved; nothing was generated.");
        }
    }

    Ok(())
}
