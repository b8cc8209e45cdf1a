//! Per-type scaffold generators.
//!
//! One generator per solution type, behind a registry. Every generator
//! expands each workflow step into one stub (in workflow order), writes a
//! type-appropriate config file and a README, and returns the fixed setup
//! instructions and next steps for its type.

mod agent;
mod ci;
mod hybrid;
mod node;
mod python;
mod shell;
mod visual;

pub use agent::AgentGenerator;
pub use ci::CiGenerator;
pub use hybrid::HybridGenerator;
pub use node::NodeGenerator;
pub use python::PythonGenerator;
pub use shell::ShellGenerator;
pub use visual::VisualGenerator;

use flowsmith_model::{Architecture, Implementation, SolutionType};

use crate::error::ScaffoldResult;
use crate::output::SessionOutput;

/// Emits the scaffold for one solution type.
pub trait ScaffoldGenerator: Send + Sync {
    fn solution_type(&self) -> SolutionType;

    /// Write the scaffold into `out` and describe what was produced.
    /// Any write failure aborts the remaining steps; partial files stay.
    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation>;
}

/// Registry lookup. Every [`SolutionType`] has exactly one generator.
pub fn generator_for(solution_type: SolutionType) -> &'static dyn ScaffoldGenerator {
    match solution_type {
        SolutionType::Agent => &AgentGenerator,
        SolutionType::ShellScript => &ShellGenerator,
        SolutionType::NodeScript => &NodeGenerator,
        SolutionType::PythonScript => &PythonGenerator,
        SolutionType::CiWorkflow => &CiGenerator,
        SolutionType::Make => &visual::MAKE,
        SolutionType::Zapier => &visual::ZAPIER,
        SolutionType::Hybrid => &HybridGenerator,
    }
}

/// README shared by every generator: what this scaffold is and how its
/// pieces fit together.
pub(crate) fn render_readme(architecture: &Architecture) -> String {
    let mut content = String::new();

    content.push_str(&format!("# {}\n\n", architecture.name));
    content.push_str(&architecture.description);
    content.push_str("\n\n## Components\n\n");
    for component in &architecture.components {
        match (&component.path, &component.integration) {
            (Some(path), _) => {
                content.push_str(&format!("- `{}` - {}\n", path, component.purpose));
            }
            (None, Some(system)) => {
                content.push_str(&format!("- {} ({})\n", component.name, system));
            }
            (None, None) => {
                content.push_str(&format!("- {} - {}\n", component.name, component.purpose));
            }
        }
    }

    content.push_str("\n## Workflow\n\n");
    for (index, step) in architecture.workflow.iter().enumerate() {
        content.push_str(&format!("{}. {}\n", index + 1, step));
    }

    if !architecture.triggers.is_empty() {
        content.push_str("\n## Triggers\n\n");
        for trigger in &architecture.triggers {
            content.push_str(&format!("- {}\n", trigger));
        }
    }

    content
}
