//! Visual automation platform builders (Make, Zapier).

use flowsmith_model::{Architecture, Component, Frequency, Problem, SolutionConfig, SolutionType};

use super::{goal_steps, integration_components, triggers_for, ArchitectureBuilder};

/// Shared shape for the two no-code platforms.
pub struct VisualBuilder {
    solution_type: SolutionType,
    platform: &'static str,
}

pub const MAKE: VisualBuilder = VisualBuilder {
    solution_type: SolutionType::Make,
    platform: "make",
};

pub const ZAPIER: VisualBuilder = VisualBuilder {
    solution_type: SolutionType::Zapier,
    platform: "zapier",
};

impl VisualBuilder {
    /// Deterministic scenario name from the first words of the description.
    fn scenario_name(problem: &Problem) -> String {
        let head: Vec<&str> = problem.description.split_whitespace().take(6).collect();
        if head.is_empty() {
            "automation scenario".to_string()
        } else {
            head.join(" ")
        }
    }
}

impl ArchitectureBuilder for VisualBuilder {
    fn solution_type(&self) -> SolutionType {
        self.solution_type
    }

    fn describe(&self, problem: &Problem) -> Architecture {
        let mut components = vec![
            Component::file(
                "Scenario blueprint",
                "Importable skeleton of the scenario",
                "blueprint.json",
            ),
            Component::file(
                "Setup notes",
                "How to import and wire up the scenario",
                "setup.md",
            ),
        ];
        components.extend(integration_components(problem));

        let mut workflow = vec!["Receive the trigger event".to_string()];
        workflow.extend(goal_steps(problem));
        workflow.push("Send a completion notification".to_string());

        let frequency = problem.technical_context.frequency;
        let mut triggers = triggers_for(frequency);
        if frequency == Frequency::Continuous {
            triggers.push("webhook".to_string());
        }

        let webhooks = if frequency == Frequency::Continuous {
            vec!["incoming".to_string()]
        } else {
            Vec::new()
        };

        Architecture {
            name: self.solution_type.display_name().to_string(),
            description: format!(
                "A {} scenario that wires \"{}\" together from the platform's \
                 built-in connectors, with no code to host.",
                self.platform, problem.description
            ),
            components,
            workflow,
            triggers,
            config: SolutionConfig::Visual {
                platform: self.platform.to_string(),
                scenario: Self::scenario_name(problem),
                webhooks,
                extra: Default::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_name_truncates_description() {
        let problem =
            Problem::new("forward every single new invoice into the accounting spreadsheet");
        let architecture = MAKE.describe(&problem);
        match architecture.config {
            SolutionConfig::Visual { platform, scenario, .. } => {
                assert_eq!(platform, "make");
                assert_eq!(scenario, "forward every single new invoice into");
            }
            _ => panic!("wrong config variant"),
        }
    }

    #[test]
    fn test_continuous_visual_gets_webhook() {
        let mut problem = Problem::new("route leads");
        problem.technical_context.frequency = Frequency::Continuous;
        let architecture = ZAPIER.describe(&problem);
        assert!(architecture.triggers.contains(&"webhook".to_string()));
        match architecture.config {
            SolutionConfig::Visual { webhooks, .. } => {
                assert_eq!(webhooks, vec!["incoming".to_string()]);
            }
            _ => panic!("wrong config variant"),
        }
    }
}
