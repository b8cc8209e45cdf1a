//! Per-type architecture builders.
//!
//! Each solution type has one builder: a pure function from a [`Problem`]
//! to the [`Architecture`] that realizes it. Adding a type means adding a
//! builder and one registry arm, nothing else.

mod agent;
mod ci;
mod hybrid;
mod script;
mod visual;

pub use agent::AgentBuilder;
pub use ci::CiBuilder;
pub use hybrid::HybridBuilder;
pub use script::ScriptBuilder;
pub use visual::VisualBuilder;

use flowsmith_model::{Architecture, Component, Frequency, Problem, SolutionType};

use crate::suggest::suggest_integrations;

/// Builds the architecture for one solution type. Pure: no I/O, same
/// output for the same problem.
pub trait ArchitectureBuilder: Send + Sync {
    fn solution_type(&self) -> SolutionType;
    fn describe(&self, problem: &Problem) -> Architecture;
}

/// Registry lookup. Every [`SolutionType`] has exactly one builder.
pub fn builder_for(solution_type: SolutionType) -> &'static dyn ArchitectureBuilder {
    match solution_type {
        SolutionType::Agent => &AgentBuilder,
        SolutionType::ShellScript => &script::SHELL,
        SolutionType::NodeScript => &script::NODE,
        SolutionType::PythonScript => &script::PYTHON,
        SolutionType::CiWorkflow => &CiBuilder,
        SolutionType::Make => &visual::MAKE,
        SolutionType::Zapier => &visual::ZAPIER,
        SolutionType::Hybrid => &HybridBuilder,
    }
}

/// The middle of every workflow: the user's goals, one step each, or a
/// single step derived from the description when no goals were given.
pub(crate) fn goal_steps(problem: &Problem) -> Vec<String> {
    if problem.goals.is_empty() {
        vec![format!("Carry out: {}", problem.description)]
    } else {
        problem.goals.clone()
    }
}

pub(crate) fn triggers_for(frequency: Frequency) -> Vec<String> {
    match frequency {
        Frequency::OneTime => vec!["manual".to_string()],
        Frequency::Periodic => vec!["schedule".to_string()],
        Frequency::Continuous => vec!["schedule".to_string(), "event".to_string()],
    }
}

/// One component per suggested external integration.
pub(crate) fn integration_components(problem: &Problem) -> Vec<Component> {
    suggest_integrations(problem)
        .into_iter()
        .map(|system| {
            Component::integration(
                system.clone(),
                "External system the workflow exchanges data with",
                system,
            )
        })
        .collect()
}
