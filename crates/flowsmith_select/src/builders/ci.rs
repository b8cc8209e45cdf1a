//! CI workflow architecture builder.

use flowsmith_model::{Architecture, Component, Frequency, Problem, SolutionConfig, SolutionType};

use crate::suggest::schedule_for;

use super::{goal_steps, integration_components, ArchitectureBuilder};

/// A scheduled GitHub Actions workflow in the user's repository.
pub struct CiBuilder;

impl ArchitectureBuilder for CiBuilder {
    fn solution_type(&self) -> SolutionType {
        SolutionType::CiWorkflow
    }

    fn describe(&self, problem: &Problem) -> Architecture {
        let mut components = vec![
            Component::file(
                "Workflow definition",
                "Schedules and runs the automation in CI",
                ".github/workflows/automation.yml",
            ),
            Component::file(
                "Workflow config",
                "Tunable settings read by the workflow",
                "ci-config.yaml",
            ),
        ];
        components.extend(integration_components(problem));

        let mut workflow = vec!["Check out the repository".to_string()];
        workflow.extend(goal_steps(problem));
        workflow.push("Publish the run summary".to_string());

        let frequency = problem.technical_context.frequency;
        let mut triggers = vec!["push".to_string()];
        if frequency != Frequency::OneTime {
            triggers.push("schedule".to_string());
        }
        triggers.push("manual".to_string());

        Architecture {
            name: "CI Workflow Automation".to_string(),
            description: format!(
                "A CI workflow that runs \"{}\" inside the repository, with \
                 scheduling, logs, and retries provided by the CI platform.",
                problem.description
            ),
            components,
            workflow,
            triggers,
            config: SolutionConfig::Ci {
                schedule: schedule_for(frequency).map(String::from),
                on_push: true,
                extra: Default::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_time_ci_has_no_schedule_trigger() {
        let problem = Problem::new("one-shot cleanup");
        let architecture = CiBuilder.describe(&problem);
        assert!(!architecture.triggers.contains(&"schedule".to_string()));
        match architecture.config {
            SolutionConfig::Ci { schedule, on_push, .. } => {
                assert!(schedule.is_none());
                assert!(on_push);
            }
            _ => panic!("wrong config variant"),
        }
    }
}
