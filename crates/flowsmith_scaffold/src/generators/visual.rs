//! Visual platform generators (Make, Zapier): an importable blueprint plus
//! setup notes, since the real scenario lives on the platform.

use flowsmith_model::{Architecture, Implementation, SolutionConfig, SolutionType};

use crate::error::ScaffoldResult;
use crate::ident::step_idents;
use crate::output::SessionOutput;

use super::{render_readme, ScaffoldGenerator};

pub struct VisualGenerator {
    solution_type: SolutionType,
    platform: &'static str,
    platform_label: &'static str,
}

pub const MAKE: VisualGenerator = VisualGenerator {
    solution_type: SolutionType::Make,
    platform: "make",
    platform_label: "Make",
};

pub const ZAPIER: VisualGenerator = VisualGenerator {
    solution_type: SolutionType::Zapier,
    platform: "zapier",
    platform_label: "Zapier",
};

impl VisualGenerator {
    fn scenario_name(&self, architecture: &Architecture) -> String {
        match &architecture.config {
            SolutionConfig::Visual { scenario, .. } if !scenario.is_empty() => scenario.clone(),
            _ => architecture.name.clone(),
        }
    }

    fn render_blueprint(&self, architecture: &Architecture) -> ScaffoldResult<String> {
        let idents = step_idents(&architecture.workflow);
        let modules: Vec<serde_json::Value> = idents
            .iter()
            .zip(&architecture.workflow)
            .enumerate()
            .map(|(index, (ident, step))| {
                serde_json::json!({
                    "id": index + 1,
                    "module": ident,
                    "label": step,
                    "type": "placeholder",
                })
            })
            .collect();

        let blueprint = serde_json::json!({
            "name": self.scenario_name(architecture),
            "platform": self.platform,
            "triggers": architecture.triggers,
            "modules": modules,
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&blueprint)?))
    }

    fn render_setup(&self, architecture: &Architecture) -> String {
        let mut content = String::new();
        content.push_str(&format!("# Setting up the {} scenario\n\n", self.platform_label));
        content.push_str(&format!(
            "1. Create a new scenario named \"{}\" in {}.\n",
            self.scenario_name(architecture),
            self.platform_label
        ));
        content.push_str("2. Recreate each module from blueprint.json, in order.\n");
        content.push_str("3. Connect the accounts each module needs.\n");
        content.push_str("4. Run once manually and check every module's output.\n");
        content
    }
}

impl ScaffoldGenerator for VisualGenerator {
    fn solution_type(&self) -> SolutionType {
        self.solution_type
    }

    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation> {
        out.write("blueprint.json", &self.render_blueprint(architecture)?)?;
        out.write("setup.md", &self.render_setup(architecture))?;
        out.write("README.md", &render_readme(architecture))?;

        Ok(Implementation {
            files: vec![
                "blueprint.json".to_string(),
                "setup.md".to_string(),
                "README.md".to_string(),
            ],
            instructions: vec![
                format!("Install: sign in to your {} account", self.platform_label),
                "Configure: follow setup.md to recreate the blueprint".to_string(),
                "Test: run the scenario once manually".to_string(),
                "Run: enable the scenario's trigger".to_string(),
            ],
            next_steps: vec![
                "Add error-handling routes to the scenario".to_string(),
                "Set up a notification for failed runs".to_string(),
                format!("Export the finished scenario from {} as a backup", self.platform_label),
            ],
        })
    }
}
