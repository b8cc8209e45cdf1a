//! Node.js script generator.

use flowsmith_model::{Architecture, Implementation, SolutionConfig, SolutionType};

use crate::error::ScaffoldResult;
use crate::ident::step_idents;
use crate::output::SessionOutput;

use super::{render_readme, ScaffoldGenerator};

pub struct NodeGenerator;

impl NodeGenerator {
    fn libraries(architecture: &Architecture) -> Vec<String> {
        match &architecture.config {
            SolutionConfig::Script { libraries, .. } => libraries.clone(),
            _ => Vec::new(),
        }
    }

    fn render_entry(architecture: &Architecture) -> String {
        let idents = step_idents(&architecture.workflow);

        let mut source = String::new();
        source.push_str(&format!("// {}\n", architecture.name));
        source.push_str("const config = require('./config.json');\n\n");

        for (ident, step) in idents.iter().zip(&architecture.workflow) {
            source.push_str(&format!(
                "async function {ident}() {{\n  // TODO: {step}\n  console.log('{step}');\n}}\n\n"
            ));
        }

        source.push_str("async function main() {\n");
        for ident in &idents {
            source.push_str(&format!("  await {ident}();\n"));
        }
        source.push_str("}\n\nmain().catch((err) => {\n  console.error(err);\n  process.exitCode = 1;\n});\n");
        source
    }

    fn render_package_json(architecture: &Architecture) -> ScaffoldResult<String> {
        let dependencies: serde_json::Map<String, serde_json::Value> =
            Self::libraries(architecture)
                .into_iter()
                .map(|library| (library, serde_json::Value::String("latest".to_string())))
                .collect();

        let package = serde_json::json!({
            "name": "automation",
            "version": "0.1.0",
            "private": true,
            "main": "index.js",
            "scripts": { "start": "node index.js" },
            "dependencies": dependencies,
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&package)?))
    }
}

impl ScaffoldGenerator for NodeGenerator {
    fn solution_type(&self) -> SolutionType {
        SolutionType::NodeScript
    }

    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation> {
        out.write("index.js", &Self::render_entry(architecture))?;
        out.write("package.json", &Self::render_package_json(architecture)?)?;
        let config = format!(
            "{}\n",
            serde_json::to_string_pretty(&architecture.config)?
        );
        out.write("config.json", &config)?;
        out.write("README.md", &render_readme(architecture))?;

        Ok(Implementation {
            files: vec![
                "index.js".to_string(),
                "package.json".to_string(),
                "config.json".to_string(),
                "README.md".to_string(),
            ],
            instructions: vec![
                "Install: npm install".to_string(),
                "Configure: edit config.json".to_string(),
                "Test: node --check index.js".to_string(),
                "Run: node index.js".to_string(),
            ],
            next_steps: vec![
                "Implement each TODO in index.js".to_string(),
                "Pin the dependency versions in package.json".to_string(),
                "Add error handling around the external calls".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_architecture() -> Architecture {
        Architecture {
            name: "Node.js Script Automation".to_string(),
            description: "x".to_string(),
            components: Vec::new(),
            workflow: vec!["Fetch input data".to_string(), "Write results".to_string()],
            triggers: vec!["manual".to_string()],
            config: SolutionConfig::Script {
                runtime: "node".to_string(),
                schedule: None,
                libraries: vec!["axios".to_string()],
                extra: Default::default(),
            },
        }
    }

    #[test]
    fn test_entry_stubs_follow_workflow_order() {
        let source = NodeGenerator::render_entry(&node_architecture());
        let fetch = source.find("async function fetchInputData").unwrap();
        let write = source.find("async function writeResults").unwrap();
        assert!(fetch < write);
        assert!(source.contains("await fetchInputData();"));
    }

    #[test]
    fn test_package_json_lists_suggested_libraries() {
        let package = NodeGenerator::render_package_json(&node_architecture()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&package).unwrap();
        assert_eq!(value["dependencies"]["axios"], "latest");
    }
}
