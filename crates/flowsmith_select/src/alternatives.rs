//! Runner-up strategies with fixed rationales.

use flowsmith_model::{Alternative, SolutionType};

/// One-line case for each strategy, shown when it is offered as a runner-up.
pub fn rationale(solution_type: SolutionType) -> &'static str {
    match solution_type {
        SolutionType::Agent => {
            "An AI agent can absorb the judgement calls a fixed script cannot."
        }
        SolutionType::ShellScript => {
            "A shell script is the smallest thing that works on any Unix box."
        }
        SolutionType::NodeScript => {
            "A Node.js script balances quick iteration with a large integration ecosystem."
        }
        SolutionType::PythonScript => {
            "A Python script suits data-heavy steps and has a library for everything."
        }
        SolutionType::CiWorkflow => {
            "A CI workflow gives scheduling, logs, and retries without new infrastructure."
        }
        SolutionType::Make => {
            "A Make scenario wires services together visually with nothing to host."
        }
        SolutionType::Zapier => {
            "A Zapier Zap is the fastest path when every service has a native connector."
        }
        SolutionType::Hybrid => {
            "A hybrid pairs an intelligent core with deterministic orchestration."
        }
    }
}

/// Up to three runner-ups: every type except the winner, in enumeration
/// order, truncated to three.
pub fn alternatives_for(winner: SolutionType) -> Vec<Alternative> {
    SolutionType::ALL
        .iter()
        .filter(|&&solution_type| solution_type != winner)
        .take(3)
        .map(|&solution_type| Alternative {
            solution_type,
            reason: rationale(solution_type).to_string(),
        })
        .collect()
}
