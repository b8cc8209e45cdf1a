//! Generated scaffold output and the per-session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::problem::Problem;
use crate::solution::Solution;

/// What the scaffold generator produced for an approved solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Implementation {
    /// Paths written, relative to the session output directory
    pub files: Vec<String>,
    /// Ordered setup steps (install, configure, test, run)
    pub instructions: Vec<String>,
    /// Recommended follow-up work
    #[serde(rename = "nextSteps")]
    pub next_steps: Vec<String>,
}

/// One completed session. Appended to the history, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: uuid::Uuid,
    pub problem: Problem,
    pub solution: Solution,
    pub implementation: Implementation,
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(problem: Problem, solution: Solution, implementation: Implementation) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            problem,
            solution,
            implementation,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{Architecture, SolutionConfig, SolutionType};

    fn dummy_solution() -> Solution {
        Solution {
            solution_type: SolutionType::ShellScript,
            architecture: Architecture {
                name: "Shell Automation".to_string(),
                description: "A script".to_string(),
                components: Vec::new(),
                workflow: vec!["Do the thing".to_string()],
                triggers: vec!["manual".to_string()],
                config: SolutionConfig::Script {
                    runtime: "bash".to_string(),
                    schedule: None,
                    libraries: Vec::new(),
                    extra: Default::default(),
                },
            },
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn test_record_carries_timestamp_and_id() {
        let record = SessionRecord::new(
            Problem::new("p"),
            dummy_solution(),
            Implementation {
                files: vec!["run.sh".to_string()],
                instructions: Vec::new(),
                next_steps: Vec::new(),
            },
        );
        assert!(!record.id.is_nil());
        assert!(record.timestamp <= Utc::now());
    }
}
