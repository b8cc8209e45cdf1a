//! CI workflow generator (GitHub Actions).

use flowsmith_model::{Architecture, Implementation, SolutionConfig, SolutionType};

use crate::error::ScaffoldResult;
use crate::ident::step_idents;
use crate::output::SessionOutput;

use super::{render_readme, ScaffoldGenerator};

pub struct CiGenerator;

impl CiGenerator {
    fn schedule(architecture: &Architecture) -> Option<String> {
        match &architecture.config {
            SolutionConfig::Ci { schedule, .. } => schedule.clone(),
            SolutionConfig::Agent { schedule, .. } => schedule.clone(),
            SolutionConfig::Script { schedule, .. } => schedule.clone(),
            _ => None,
        }
    }

    fn on_push(architecture: &Architecture) -> bool {
        match &architecture.config {
            SolutionConfig::Ci { on_push, .. } => *on_push,
            _ => true,
        }
    }

    fn render_workflow(architecture: &Architecture) -> String {
        let idents = step_idents(&architecture.workflow);

        let mut yaml = String::from("name: automation\n\non:\n  workflow_dispatch: {}\n");
        if Self::on_push(architecture) {
            yaml.push_str("  push:\n    branches: [main]\n");
        }
        if let Some(cron) = Self::schedule(architecture) {
            yaml.push_str(&format!("  schedule:\n    - cron: '{}'\n", cron));
        }

        yaml.push_str("\njobs:\n  automation:\n    runs-on: ubuntu-latest\n    steps:\n");
        yaml.push_str("      - uses: actions/checkout@v4\n");
        for (ident, step) in idents.iter().zip(&architecture.workflow) {
            yaml.push_str(&format!(
                "      - name: {}\n        run: echo \"TODO {}\"\n",
                step, ident
            ));
        }
        yaml
    }
}

impl ScaffoldGenerator for CiGenerator {
    fn solution_type(&self) -> SolutionType {
        SolutionType::CiWorkflow
    }

    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation> {
        out.write(
            ".github/workflows/automation.yml",
            &Self::render_workflow(architecture),
        )?;
        let config_yaml = serde_yaml::to_string(&architecture.config)?;
        out.write("ci-config.yaml", &config_yaml)?;
        out.write("README.md", &render_readme(architecture))?;

        Ok(Implementation {
            files: vec![
                ".github/workflows/automation.yml".to_string(),
                "ci-config.yaml".to_string(),
                "README.md".to_string(),
            ],
            instructions: vec![
                "Install: commit the workflow file to your repository".to_string(),
                "Configure: add the secrets the workflow references".to_string(),
                "Test: trigger workflow_dispatch from the Actions tab".to_string(),
                "Run: push to main or wait for the schedule".to_string(),
            ],
            next_steps: vec![
                "Replace the echo stubs with the real job steps".to_string(),
                "Add a failure notification (Slack or email) to the job".to_string(),
                "Review the cron expression against your timezone".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_architecture(schedule: Option<&str>) -> Architecture {
        Architecture {
            name: "CI Workflow Automation".to_string(),
            description: "x".to_string(),
            components: Vec::new(),
            workflow: vec![
                "Check out the repository".to_string(),
                "Publish the run summary".to_string(),
            ],
            triggers: vec!["push".to_string()],
            config: SolutionConfig::Ci {
                schedule: schedule.map(String::from),
                on_push: true,
                extra: Default::default(),
            },
        }
    }

    #[test]
    fn test_workflow_contains_schedule_when_periodic() {
        let yaml = CiGenerator::render_workflow(&ci_architecture(Some("0 9 * * *")));
        assert!(yaml.contains("cron: '0 9 * * *'"));
        assert!(yaml.contains("- uses: actions/checkout@v4"));
        assert!(yaml.contains("- name: Publish the run summary"));
    }

    #[test]
    fn test_workflow_omits_schedule_for_one_time() {
        let yaml = CiGenerator::render_workflow(&ci_architecture(None));
        assert!(!yaml.contains("schedule:"));
        assert!(yaml.contains("workflow_dispatch"));
    }
}
