//! Hybrid generator: runs the sub-generators named in the configuration
//! and adds an integration manifest tying the halves together.

use flowsmith_model::{Architecture, Implementation, SolutionConfig, SolutionType};
use tracing::info;

use crate::error::ScaffoldResult;
use crate::output::SessionOutput;

use super::{generator_for, render_readme, ScaffoldGenerator};

pub struct HybridGenerator;

impl HybridGenerator {
    /// The two halves, from the configuration. A half that names `hybrid`
    /// (which would recurse) falls back to the default for that slot.
    fn halves(architecture: &Architecture) -> (SolutionType, SolutionType) {
        let (intelligence, orchestration) = match &architecture.config {
            SolutionConfig::Hybrid {
                intelligence,
                orchestration,
                ..
            } => (*intelligence, *orchestration),
            _ => (SolutionType::Agent, SolutionType::CiWorkflow),
        };

        let intelligence = if intelligence == SolutionType::Hybrid {
            SolutionType::Agent
        } else {
            intelligence
        };
        let orchestration = if orchestration == SolutionType::Hybrid {
            SolutionType::CiWorkflow
        } else {
            orchestration
        };
        (intelligence, orchestration)
    }

    fn render_manifest(
        architecture: &Architecture,
        intelligence: SolutionType,
        orchestration: SolutionType,
    ) -> ScaffoldResult<String> {
        let platforms: Vec<&str> = architecture
            .components
            .iter()
            .filter_map(|c| c.integration.as_deref())
            .collect();

        let manifest = serde_json::json!({
            "intelligence": intelligence,
            "orchestration": orchestration,
            "platforms": platforms,
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&manifest)?))
    }
}

impl ScaffoldGenerator for HybridGenerator {
    fn solution_type(&self) -> SolutionType {
        SolutionType::Hybrid
    }

    fn generate(
        &self,
        architecture: &Architecture,
        out: &SessionOutput,
    ) -> ScaffoldResult<Implementation> {
        let (intelligence, orchestration) = Self::halves(architecture);
        info!(
            intelligence = %intelligence,
            orchestration = %orchestration,
            "Generating hybrid scaffold"
        );

        let first = generator_for(intelligence).generate(architecture, out)?;
        let second = generator_for(orchestration).generate(architecture, out)?;

        // Union of the halves' outputs, first-seen order, no duplicates.
        let mut files = first.files;
        for file in second.files {
            if !files.contains(&file) {
                files.push(file);
            }
        }

        out.write(
            "integration-manifest.json",
            &Self::render_manifest(architecture, intelligence, orchestration)?,
        )?;
        files.push("integration-manifest.json".to_string());

        // The shared README from the halves describes one half each;
        // replace it with the whole picture.
        out.write("README.md", &render_readme(architecture))?;

        Ok(Implementation {
            files,
            instructions: vec![
                "Install: set up both halves (agent tooling and the orchestrator)".to_string(),
                "Configure: review each generated config file".to_string(),
                "Test: run the orchestrator once with the agent in dry-run".to_string(),
                "Run: enable the orchestrator's trigger".to_string(),
            ],
            next_steps: vec![
                "Decide how the orchestrator passes context to the agent".to_string(),
                "Route agent escalations to a human channel".to_string(),
                "Add a shared run log both halves append to".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowsmith_model::Component;

    fn hybrid_architecture() -> Architecture {
        Architecture {
            name: "Hybrid Automation".to_string(),
            description: "x".to_string(),
            components: vec![Component::integration(
                "Slack",
                "notifications",
                "Slack",
            )],
            workflow: vec!["Orchestrator kicks off a run".to_string()],
            triggers: vec!["schedule".to_string()],
            config: SolutionConfig::Hybrid {
                intelligence: SolutionType::Agent,
                orchestration: SolutionType::CiWorkflow,
                extra: Default::default(),
            },
        }
    }

    #[test]
    fn test_union_has_no_duplicates_and_one_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let out = SessionOutput::at(dir.path());

        let implementation = HybridGenerator
            .generate(&hybrid_architecture(), &out)
            .unwrap();

        let manifest_count = implementation
            .files
            .iter()
            .filter(|f| f.as_str() == "integration-manifest.json")
            .count();
        assert_eq!(manifest_count, 1);

        let mut deduped = implementation.files.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), implementation.files.len());
    }

    #[test]
    fn test_hybrid_half_never_recurses() {
        let mut architecture = hybrid_architecture();
        architecture.config = SolutionConfig::Hybrid {
            intelligence: SolutionType::Hybrid,
            orchestration: SolutionType::Hybrid,
            extra: Default::default(),
        };
        let (intelligence, orchestration) = HybridGenerator::halves(&architecture);
        assert_eq!(intelligence, SolutionType::Agent);
        assert_eq!(orchestration, SolutionType::CiWorkflow);
    }
}
