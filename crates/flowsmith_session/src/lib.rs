//! Session orchestration for Flowsmith.
//!
//! Ties the phases together: the validation loop that refines a proposed
//! solution with the user, the pipeline that runs a whole session, and the
//! recorder that keeps the append-only history and writes the summary
//! artifact.

mod error;
mod pipeline;
mod recorder;
mod validation;

pub use error::{SessionError, SessionResult};
pub use pipeline::{Pipeline, PipelineOutcome};
pub use recorder::{render_summary, write_summary, SessionStore};
pub use validation::{ValidationLoop, ValidationOutcome, ValidationState};
