//! Architecture selection for Flowsmith.
//!
//! Scores the closed catalogue of solution types against a collected
//! problem, synthesizes the winner's architecture through a per-type
//! builder, and attaches up to three runner-up strategies. Everything in
//! this crate is a pure function of the problem.

mod alternatives;
mod builders;
mod scoring;
mod suggest;

pub use alternatives::{alternatives_for, rationale};
pub use builders::{builder_for, ArchitectureBuilder};
pub use scoring::{score, winner};
pub use suggest::{schedule_for, suggest_integrations, suggest_libraries};

use tracing::info;

use flowsmith_model::{Problem, Solution};

/// Pick a solution type for the problem and build its full solution.
pub fn select(problem: &Problem) -> Solution {
    let scores = score(problem);
    let winning_type = winner(&scores);
    info!(
        winner = %winning_type,
        scores = ?scores.iter().map(|(t, s)| format!("{t}={s}")).collect::<Vec<_>>(),
        "Selected solution type"
    );

    Solution {
        solution_type: winning_type,
        architecture: builder_for(winning_type).describe(problem),
        alternatives: alternatives_for(winning_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowsmith_model::{Complexity, Frequency, SolutionType};

    #[test]
    fn test_select_is_deterministic() {
        let mut problem = Problem::new("deploy the site nightly");
        problem.technical_context.has_git = true;
        problem.technical_context.frequency = Frequency::Periodic;

        let first = select(&problem);
        let second = select(&problem);
        assert_eq!(first.solution_type, second.solution_type);
        assert_eq!(first.architecture.workflow, second.architecture.workflow);
        assert_eq!(first.alternatives.len(), second.alternatives.len());
    }

    #[test]
    fn test_select_honors_invariants() {
        let mut problem = Problem::new("summarize tickets");
        problem.goals.push("intelligent triage".to_string());
        problem.technical_context.complexity = Complexity::Complex;

        let solution = select(&problem);
        assert_eq!(solution.solution_type, SolutionType::Agent);
        assert!(solution.alternatives.len() <= 3);
        assert!(solution
            .alternatives
            .iter()
            .all(|a| a.solution_type != solution.solution_type));
    }
}
