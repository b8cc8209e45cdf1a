//! Hybrid architecture builder: an intelligent half plus an orchestration half.

use flowsmith_model::{Architecture, Component, Problem, SolutionConfig, SolutionType};

use super::{goal_steps, integration_components, triggers_for, ArchitectureBuilder};

/// Pairs an agent with whichever deterministic orchestrator the environment
/// supports best.
pub struct HybridBuilder;

impl HybridBuilder {
    fn orchestration_for(problem: &Problem) -> SolutionType {
        let tc = &problem.technical_context;
        if tc.has_git {
            SolutionType::CiWorkflow
        } else if tc.has_node {
            SolutionType::NodeScript
        } else if tc.has_make_account {
            SolutionType::Make
        } else {
            SolutionType::ShellScript
        }
    }
}

impl ArchitectureBuilder for HybridBuilder {
    fn solution_type(&self) -> SolutionType {
        SolutionType::Hybrid
    }

    fn describe(&self, problem: &Problem) -> Architecture {
        let orchestration = Self::orchestration_for(problem);

        let mut components = vec![
            Component {
                name: "Intelligence half".to_string(),
                purpose: "Agent that makes the judgement calls".to_string(),
                path: Some("agent.md".to_string()),
                integration: None,
            },
            Component {
                name: "Orchestration half".to_string(),
                purpose: format!(
                    "{} that triggers runs and records outcomes",
                    orchestration.display_name()
                ),
                path: None,
                integration: None,
            },
        ];
        components.extend(integration_components(problem));

        let mut workflow = vec!["Orchestrator kicks off a run".to_string()];
        workflow.extend(goal_steps(problem));
        workflow.push("Agent reviews results and handles exceptions".to_string());
        workflow.push("Orchestrator records the outcome".to_string());

        Architecture {
            name: "Hybrid Automation".to_string(),
            description: format!(
                "Pairs an agent with a {} so \"{}\" gets both judgement and \
                 dependable scheduling.",
                orchestration.display_name(),
                problem.description
            ),
            components,
            workflow,
            triggers: triggers_for(problem.technical_context.frequency),
            config: SolutionConfig::Hybrid {
                intelligence: SolutionType::Agent,
                orchestration,
                extra: Default::default(),
            },
        }
    }
}
