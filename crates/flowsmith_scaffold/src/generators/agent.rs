//! Agent generator: a brief the agent follows, its config, and a launcher.

use flowsmith_model::{Architecture, Implementation, SolutionConfig, SolutionType};

use crate::error::ScaffoldResult;
use crate::ident::step_idents;
use crate::output::SessionOutput;

use super::{render_readme, ScaffoldGenerator};

pub struct AgentGenerator;

impl AgentGenerator {
    fn render_brief(architecture: &Architecture) -> String {
        let mut content = String::new();
        content.push_str(&format!("# {}\n\n", architecture.name));
        content.push_str("## Mission\n\n");
        content.push_str(&architecture.description);
        content.push_str("\n\n## Checklist\n\n");
        content.push_str("Work through these in order; skip nothing silently:\n\n");
        for step in &architecture.workflow {
            content.push_str(&format!("- [ ] {}\n", step));
        }
        content.push_str("\n## Guardrails\n\n");
        content.push_str("- Stay inside the working directory.\n");
        content.push_str("- Ask before any destructive operation.\n");
        content.push_str("- Leave a short run log next to your outputs.\n");
        content
    }

    fn render_launcher(architecture: &Architecture) -> String {
        let idents = step_idents(&architecture.workflow);
        let mut script = String::from("#!/usr/bin/env bash\n");
        script.push_str("# Starts one agent run against the brief.\n");
        script.push_str("set -euo pipefail\n\n");
        script.push_str("AGENT_CONFIG=${AGENT_CONFIG:-agent.yaml}\n\n");
        script.push_str("# Step markers consumed by the run log\n");
        for (ident, step) in idents.iter().zip(&architecture.workflow) {
            script.push_str(&format!("# {ident}: {step}\n"));
        }
        script.push_str("\nagent run --config \"$AGENT_CONFIG\" --brief agent.md \"$@\"\n");
        script
    }
}

impl ScaffoldGenerator for AgentGenerator {
    fn solution_type(&self) -> SolutionType {
        SolutionType::Agent
    }

    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation> {
        out.write("agent.md", &Self::render_brief(architecture))?;

        // Sub-generators may hand us a non-agent config; serialize whatever
        // is there so the YAML stays an honest mirror of the architecture.
        let config_yaml = serde_yaml::to_string(&architecture.config)?;
        out.write("agent.yaml", &config_yaml)?;
        out.write("run-agent.sh", &Self::render_launcher(architecture))?;
        out.write("README.md", &render_readme(architecture))?;

        Ok(Implementation {
            files: vec![
                "agent.md".to_string(),
                "agent.yaml".to_string(),
                "run-agent.sh".to_string(),
                "README.md".to_string(),
            ],
            instructions: vec![
                "Install: install your agent CLI and authenticate it".to_string(),
                "Configure: review agent.yaml (model, tools, schedule)".to_string(),
                "Test: run ./run-agent.sh with a dry-run flag first".to_string(),
                "Run: ./run-agent.sh".to_string(),
            ],
            next_steps: vec![
                "Tighten the guardrails in agent.md for your environment".to_string(),
                "Decide where run logs should be collected".to_string(),
                "Schedule the launcher if runs should be unattended".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_architecture() -> Architecture {
        Architecture {
            name: "AI Agent Automation".to_string(),
            description: "Agent that triages tickets".to_string(),
            components: Vec::new(),
            workflow: vec![
                "Review the task context and inputs".to_string(),
                "Summarize what was done and flag anything unusual".to_string(),
            ],
            triggers: vec!["schedule".to_string()],
            config: SolutionConfig::Agent {
                schedule: Some("0 9 * * *".to_string()),
                model: "claude-sonnet-4-5".to_string(),
                tools: vec!["file-io".to_string()],
                extra: Default::default(),
            },
        }
    }

    #[test]
    fn test_brief_lists_every_step_as_checklist() {
        let brief = AgentGenerator::render_brief(&agent_architecture());
        assert!(brief.contains("- [ ] Review the task context and inputs"));
        assert!(brief.contains("## Guardrails"));
    }

    #[test]
    fn test_generate_writes_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let out = SessionOutput::at(dir.path());

        let implementation = AgentGenerator
            .generate(&agent_architecture(), &out)
            .unwrap();
        assert!(implementation.files.contains(&"agent.yaml".to_string()));

        let yaml = std::fs::read_to_string(dir.path().join("agent.yaml")).unwrap();
        assert!(yaml.contains("claude-sonnet-4-5"));
    }
}
