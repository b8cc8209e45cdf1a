//! Agent architecture builder.

use flowsmith_model::{Architecture, Component, Problem, SolutionConfig, SolutionType};

use crate::suggest::schedule_for;

use super::{goal_steps, integration_components, triggers_for, ArchitectureBuilder};

/// An autonomous agent run: brief, config, launcher.
pub struct AgentBuilder;

impl ArchitectureBuilder for AgentBuilder {
    fn solution_type(&self) -> SolutionType {
        SolutionType::Agent
    }

    fn describe(&self, problem: &Problem) -> Architecture {
        let mut components = vec![
            Component::file(
                "Agent brief",
                "Instructions, context, and guardrails for the agent",
                "agent.md",
            ),
            Component::file("Agent config", "Model, tools, and schedule", "agent.yaml"),
            Component::file("Launcher", "Starts one agent run", "run-agent.sh"),
        ];
        components.extend(integration_components(problem));

        let mut workflow = vec!["Review the task context and inputs".to_string()];
        workflow.extend(goal_steps(problem));
        workflow.push("Summarize what was done and flag anything unusual".to_string());

        let frequency = problem.technical_context.frequency;
        Architecture {
            name: "AI Agent Automation".to_string(),
            description: format!(
                "An autonomous agent that handles \"{}\" end to end, making the \
                 judgement calls a fixed script cannot.",
                problem.description
            ),
            components,
            workflow,
            triggers: triggers_for(frequency),
            config: SolutionConfig::Agent {
                schedule: schedule_for(frequency).map(String::from),
                model: "claude-sonnet-4-5".to_string(),
                tools: vec![
                    "file-io".to_string(),
                    "shell".to_string(),
                    "web-fetch".to_string(),
                ],
                extra: Default::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowsmith_model::Frequency;

    #[test]
    fn test_agent_schedule_follows_frequency() {
        let mut problem = Problem::new("triage inbound support mail");
        problem.technical_context.frequency = Frequency::Continuous;

        let architecture = AgentBuilder.describe(&problem);
        match architecture.config {
            SolutionConfig::Agent { schedule, .. } => {
                assert_eq!(schedule.as_deref(), Some("*/15 * * * *"));
            }
            _ => panic!("wrong config variant"),
        }
        assert!(architecture.workflow.len() >= 3);
    }
}
