//! Shell script generator.

use flowsmith_model::{Architecture, Implementation, SolutionType};

use crate::error::ScaffoldResult;
use crate::ident::step_idents;
use crate::output::SessionOutput;

use super::{render_readme, ScaffoldGenerator};

pub struct ShellGenerator;

impl ShellGenerator {
    fn render_script(architecture: &Architecture) -> String {
        let idents = step_idents(&architecture.workflow);

        let mut script = String::from("#!/usr/bin/env bash\n");
        script.push_str(&format!("# {}\n", architecture.name));
        script.push_str("set -euo pipefail\n\n");
        script.push_str("source .env 2>/dev/null || true\n\n");

        for (ident, step) in idents.iter().zip(&architecture.workflow) {
            script.push_str(&format!(
                "{ident}() {{\n    echo \"TODO: {step}\"\n}}\n\n"
            ));
        }

        script.push_str("main() {\n");
        for ident in &idents {
            script.push_str(&format!("    {ident}\n"));
        }
        script.push_str("}\n\nmain \"$@\"\n");
        script
    }

    fn render_env_example(architecture: &Architecture) -> String {
        let mut content = String::from("# Copy to .env and fill in real values\n");
        for component in &architecture.components {
            if let Some(system) = &component.integration {
                let var = system
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
                    .collect::<String>();
                content.push_str(&format!("{}_TOKEN=\n", var.trim_matches('_')));
            }
        }
        content
    }
}

impl ScaffoldGenerator for ShellGenerator {
    fn solution_type(&self) -> SolutionType {
        SolutionType::ShellScript
    }

    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation> {
        out.write("run.sh", &Self::render_script(architecture))?;
        out.write(".env.example", &Self::render_env_example(architecture))?;
        let config = format!(
            "{}\n",
            serde_json::to_string_pretty(&architecture.config)?
        );
        out.write("config.json", &config)?;
        out.write("README.md", &render_readme(architecture))?;

        Ok(Implementation {
            files: vec![
                "run.sh".to_string(),
                ".env.example".to_string(),
                "config.json".to_string(),
                "README.md".to_string(),
            ],
            instructions: vec![
                "Install: nothing beyond bash and coreutils".to_string(),
                "Configure: copy .env.example to .env and fill in the values".to_string(),
                "Test: bash -n run.sh".to_string(),
                "Run: bash run.sh".to_string(),
            ],
            next_steps: vec![
                "Replace each TODO echo with the real commands".to_string(),
                "Add the script to cron if it should run on a schedule".to_string(),
                "Commit the script to version control".to_string(),
            ],
        })
    }
}
