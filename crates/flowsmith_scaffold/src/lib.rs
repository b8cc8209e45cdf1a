//! Scaffold generation for Flowsmith.
//!
//! Given an approved solution, writes the concrete scaffold — source stubs,
//! config, docs — into a session-unique output directory and reports what
//! was produced. Write failures are fatal to the generation phase; partial
//! output is left in place for inspection.

mod error;
mod generators;
mod ident;
mod output;

pub use error::{ScaffoldError, ScaffoldResult};
pub use generators::{generator_for, ScaffoldGenerator};
pub use ident::{step_ident, step_idents};
pub use output::SessionOutput;

use tracing::info;

use flowsmith_model::{Implementation, Solution};

/// Generate the scaffold for an approved solution.
pub fn generate(solution: &Solution, out: &SessionOutput) -> ScaffoldResult<Implementation> {
    info!(
        solution_type = %solution.solution_type,
        out = %out.dir().display(),
        "Generating scaffold"
    );
    let implementation =
        generator_for(solution.solution_type).generate(&solution.architecture, out)?;
    info!(files = implementation.files.len(), "Scaffold complete");
    Ok(implementation)
}
