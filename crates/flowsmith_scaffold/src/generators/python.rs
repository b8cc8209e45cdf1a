//! Python script generator.

use flowsmith_model::{Architecture, Implementation, SolutionConfig, SolutionType};

use crate::error::ScaffoldResult;
use crate::ident::step_idents;
use crate::output::SessionOutput;

use super::{render_readme, ScaffoldGenerator};

pub struct PythonGenerator;

impl PythonGenerator {
    fn libraries(architecture: &Architecture) -> Vec<String> {
        match &architecture.config {
            SolutionConfig::Script { libraries, .. } => libraries.clone(),
            _ => Vec::new(),
        }
    }

    fn render_entry(architecture: &Architecture) -> String {
        let idents = step_idents(&architecture.workflow);

        let mut source = String::new();
        source.push_str(&format!("\"\"\"{}\"\"\"\n\n", architecture.name));
        source.push_str("import json\n\n\n");
        source.push_str(
            "def load_config():\n    with open(\"config.json\") as handle:\n        return json.load(handle)\n\n\n",
        );

        for (ident, step) in idents.iter().zip(&architecture.workflow) {
            source.push_str(&format!(
                "def {ident}(config):\n    # TODO: {step}\n    print(\"{step}\")\n\n\n"
            ));
        }

        source.push_str("def main():\n    config = load_config()\n");
        for ident in &idents {
            source.push_str(&format!("    {ident}(config)\n"));
        }
        source.push_str("\n\nif __name__ == \"__main__\":\n    main()\n");
        source
    }

    fn render_requirements(architecture: &Architecture) -> String {
        let mut content = String::new();
        for library in Self::libraries(architecture) {
            content.push_str(&library);
            content.push('\n');
        }
        content
    }
}

impl ScaffoldGenerator for PythonGenerator {
    fn solution_type(&self) -> SolutionType {
        SolutionType::PythonScript
    }

    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation> {
        out.write("main.py", &Self::render_entry(architecture))?;
        out.write("requirements.txt", &Self::render_requirements(architecture))?;
        let config = format!(
            "{}\n",
            serde_json::to_string_pretty(&architecture.config)?
        );
        out.write("config.json", &config)?;
        out.write("README.md", &render_readme(architecture))?;

        Ok(Implementation {
            files: vec![
                "main.py".to_string(),
                "requirements.txt".to_string(),
                "config.json".to_string(),
                "README.md".to_string(),
            ],
            instructions: vec![
                "Install: pip install -r requirements.txt".to_string(),
                "Configure: edit config.json".to_string(),
                "Test: python3 -m py_compile main.py".to_string(),
                "Run: python3 main.py".to_string(),
            ],
            next_steps: vec![
                "Implement each TODO in main.py".to_string(),
                "Pin the versions in requirements.txt".to_string(),
                "Add logging so scheduled runs leave a trail".to_string(),
            ],
        })
    }
}
