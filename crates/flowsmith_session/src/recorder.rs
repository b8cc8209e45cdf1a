//! Session history and the human-readable summary artifact.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use flowsmith_model::SessionRecord;

use crate::error::{SessionError, SessionResult};

/// Append-only, in-memory history of completed sessions.
///
/// Owned by the caller rather than hidden behind a global, so test runs
/// never leak records into each other.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: Vec<SessionRecord>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Render one session as a Markdown document.
pub fn render_summary(record: &SessionRecord) -> String {
    let problem = &record.problem;
    let architecture = &record.solution.architecture;
    let implementation = &record.implementation;

    let mut content = String::new();
    content.push_str("# Automation session summary\n\n");
    content.push_str(&format!(
        "- Session: `{}`\n- Completed: {}\n- Solution type: {}\n\n",
        record.id,
        record.timestamp.format("%Y-%m-%d %H:%M UTC"),
        record.solution.solution_type.display_name()
    ));

    content.push_str("## Problem\n\n");
    content.push_str(&problem.description);
    content.push_str("\n\n");

    if !problem.goals.is_empty() {
        content.push_str("## Goals\n\n");
        for goal in &problem.goals {
            content.push_str(&format!("- {}\n", goal));
        }
        content.push('\n');
    }

    content.push_str("## Architecture\n\n");
    content.push_str(&format!("**{}** - {}\n\n", architecture.name, architecture.description));

    if !architecture.components.is_empty() {
        content.push_str("### Components\n\n");
        for component in &architecture.components {
            content.push_str(&format!("- {}: {}\n", component.name, component.purpose));
        }
        content.push('\n');
    }

    content.push_str("### Workflow\n\n");
    for (index, step) in architecture.workflow.iter().enumerate() {
        content.push_str(&format!("{}. {}\n", index + 1, step));
    }
    content.push('\n');

    content.push_str("## Generated files\n\n");
    for file in &implementation.files {
        content.push_str(&format!("- `{}`\n", file));
    }
    content.push('\n');

    content.push_str("## Setup instructions\n\n");
    for (index, instruction) in implementation.instructions.iter().enumerate() {
        content.push_str(&format!("{}. {}\n", index + 1, instruction));
    }
    content.push('\n');

    content.push_str("## Next steps\n\n");
    for step in &implementation.next_steps {
        content.push_str(&format!("- {}\n", step));
    }

    if !problem.success_criteria.is_empty() {
        content.push_str("\n## Success criteria\n\n");
        for criterion in &problem.success_criteria {
            content.push_str(&format!("- {}\n", criterion));
        }
    }

    content
}

/// Write `SUMMARY.md` into the session's output directory.
///
/// Callers treat a failure here as a warning, not a run failure.
pub fn write_summary(record: &SessionRecord, dir: &Path) -> SessionResult<PathBuf> {
    let path = dir.join("SUMMARY.md");
    fs::write(&path, render_summary(record)).map_err(SessionError::Summary)?;
    info!("Session summary written to {}", path.display());
    Ok(path)
}
