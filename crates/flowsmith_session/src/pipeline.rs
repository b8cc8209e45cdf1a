//! End-to-end session pipeline.
//!
//! Interview, selection, validation, generation, recording — strictly in
//! that order, with validation able to restart the whole thing.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, warn};

use flowsmith_interview::{AnswerSource, CapabilityProbe, InterviewCollector};
use flowsmith_model::SessionRecord;
use flowsmith_scaffold::SessionOutput;
use flowsmith_select::select;

use crate::error::SessionResult;
use crate::recorder::{write_summary, SessionStore};
use crate::validation::{ValidationLoop, ValidationOutcome};

/// How a session ended.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Approved, generated, and recorded.
    Implemented {
        record: SessionRecord,
        out_dir: PathBuf,
    },
    /// The user declined every proposal; nothing was generated.
    Rejected,
}

/// One interactive session from first question to terminal outcome.
pub struct Pipeline<'a> {
    answers: &'a mut dyn AnswerSource,
    probe: &'a dyn CapabilityProbe,
    out_root: PathBuf,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        answers: &'a mut dyn AnswerSource,
        probe: &'a dyn CapabilityProbe,
        out_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            answers,
            probe,
            out_root: out_root.into(),
        }
    }

    pub async fn run(&mut self, store: &mut SessionStore) -> SessionResult<PipelineOutcome> {
        loop {
            let problem = InterviewCollector::new(&mut *self.answers, self.probe)
                .collect()
                .await?;
            let solution = select(&problem);

            match ValidationLoop::new(&mut *self.answers)
                .run(&problem, solution)
                .await?
            {
                ValidationOutcome::Restart => {
                    info!("Restarting the session from the interview");
                    continue;
                }
                ValidationOutcome::Rejected => return Ok(PipelineOutcome::Rejected),
                ValidationOutcome::Approved(solution) => {
                    let out = SessionOutput::create(&self.out_root, Utc::now())?;
                    let implementation = flowsmith_scaffold::generate(&solution, &out)?;

                    let record = SessionRecord::new(problem, solution, implementation);
                    if let Err(e) = write_summary(&record, out.dir()) {
                        warn!("{e}");
                    }
                    store.append(record.clone());

                    return Ok(PipelineOutcome::Implemented {
                        record,
                        out_dir: out.dir().to_path_buf(),
                    });
                }
            }
        }
    }
}
