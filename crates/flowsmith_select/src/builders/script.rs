//! Script architecture builders (shell, node, python).

use flowsmith_model::{Architecture, Component, Problem, SolutionConfig, SolutionType};

use crate::suggest::{schedule_for, suggest_libraries};

use super::{goal_steps, integration_components, triggers_for, ArchitectureBuilder};

/// Shared shape for the three script runtimes.
pub struct ScriptBuilder {
    solution_type: SolutionType,
    runtime: &'static str,
    entry: &'static str,
    config_file: &'static str,
}

pub const SHELL: ScriptBuilder = ScriptBuilder {
    solution_type: SolutionType::ShellScript,
    runtime: "bash",
    entry: "run.sh",
    config_file: ".env.example",
};

pub const NODE: ScriptBuilder = ScriptBuilder {
    solution_type: SolutionType::NodeScript,
    runtime: "node",
    entry: "index.js",
    config_file: "config.json",
};

pub const PYTHON: ScriptBuilder = ScriptBuilder {
    solution_type: SolutionType::PythonScript,
    runtime: "python3",
    entry: "main.py",
    config_file: "config.json",
};

impl ArchitectureBuilder for ScriptBuilder {
    fn solution_type(&self) -> SolutionType {
        self.solution_type
    }

    fn describe(&self, problem: &Problem) -> Architecture {
        let mut components = vec![
            Component::file(
                "Entry point",
                "Runs the workflow start to finish",
                self.entry,
            ),
            Component::file("Configuration", "Runtime settings", self.config_file),
        ];
        components.extend(integration_components(problem));

        let mut workflow = vec![
            "Load configuration".to_string(),
            "Fetch input data".to_string(),
        ];
        workflow.extend(goal_steps(problem));
        workflow.push("Write results".to_string());
        workflow.push("Report completion".to_string());

        let frequency = problem.technical_context.frequency;
        Architecture {
            name: format!("{} Automation", self.solution_type.display_name()),
            description: format!(
                "A {} script that automates \"{}\" as a deterministic sequence of steps.",
                self.runtime, problem.description
            ),
            components,
            workflow,
            triggers: triggers_for(frequency),
            config: SolutionConfig::Script {
                runtime: self.runtime.to_string(),
                schedule: schedule_for(frequency).map(String::from),
                libraries: suggest_libraries(problem, self.runtime),
                extra: Default::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_script_picks_up_libraries() {
        let problem = Problem::new("scrape the status page and email a summary");
        let architecture = NODE.describe(&problem);

        match architecture.config {
            SolutionConfig::Script { runtime, libraries, .. } => {
                assert_eq!(runtime, "node");
                assert!(libraries.contains(&"cheerio".to_string()));
                assert!(libraries.contains(&"nodemailer".to_string()));
            }
            _ => panic!("wrong config variant"),
        }
    }

    #[test]
    fn test_shell_script_has_no_library_table() {
        let problem = Problem::new("email the logs");
        let architecture = SHELL.describe(&problem);
        match architecture.config {
            SolutionConfig::Script { libraries, .. } => assert!(libraries.is_empty()),
            _ => panic!("wrong config variant"),
        }
    }

    #[test]
    fn test_workflow_embeds_goals_in_order() {
        let mut problem = Problem::new("nightly batch");
        problem.goals = vec!["first goal".to_string(), "second goal".to_string()];

        let workflow = PYTHON.describe(&problem).workflow;
        let first = workflow.iter().position(|s| s == "first goal").unwrap();
        let second = workflow.iter().position(|s| s == "second goal").unwrap();
        assert!(first < second);
        assert_eq!(workflow.first().map(String::as_str), Some("Load configuration"));
        assert_eq!(workflow.last().map(String::as_str), Some("Report completion"));
    }
}
