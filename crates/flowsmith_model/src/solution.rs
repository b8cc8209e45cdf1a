//! Solution types, architectures, and their typed configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed catalogue of automation strategies.
///
/// The declaration order is load-bearing: scoring ties resolve to the
/// first-listed type, and alternatives are offered in this order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SolutionType {
    Agent,
    ShellScript,
    NodeScript,
    PythonScript,
    CiWorkflow,
    Make,
    Zapier,
    Hybrid,
}

impl SolutionType {
    /// Every type, in the canonical (tie-break) order.
    pub const ALL: [SolutionType; 8] = [
        Self::Agent,
        Self::ShellScript,
        Self::NodeScript,
        Self::PythonScript,
        Self::CiWorkflow,
        Self::Make,
        Self::Zapier,
        Self::Hybrid,
    ];

    /// Get the display name for this solution type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Agent => "AI Agent",
            Self::ShellScript => "Shell Script",
            Self::NodeScript => "Node.js Script",
            Self::PythonScript => "Python Script",
            Self::CiWorkflow => "CI Workflow",
            Self::Make => "Make Scenario",
            Self::Zapier => "Zapier Zap",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Stable kebab-case identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::ShellScript => "shell-script",
            Self::NodeScript => "node-script",
            Self::PythonScript => "python-script",
            Self::CiWorkflow => "ci-workflow",
            Self::Make => "make",
            Self::Zapier => "zapier",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One building block of an architecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub purpose: String,
    /// Where the component will live on disk, when it is a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// External system the component talks to, when it is an integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl Component {
    pub fn file(name: impl Into<String>, purpose: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
            path: Some(path.into()),
            integration: None,
        }
    }

    pub fn integration(
        name: impl Into<String>,
        purpose: impl Into<String>,
        system: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
            path: None,
            integration: Some(system.into()),
        }
    }
}

/// Per-type configuration, kept as a tagged shape so generated JSON/YAML
/// stays self-describing. The `extra` maps hold free-form overrides from
/// the refinement loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SolutionConfig {
    Agent {
        #[serde(skip_serializing_if = "Option::is_none")]
        schedule: Option<String>,
        model: String,
        tools: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        extra: BTreeMap<String, String>,
    },
    Script {
        runtime: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        schedule: Option<String>,
        libraries: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        extra: BTreeMap<String, String>,
    },
    Ci {
        #[serde(skip_serializing_if = "Option::is_none")]
        schedule: Option<String>,
        #[serde(rename = "onPush")]
        on_push: bool,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        extra: BTreeMap<String, String>,
    },
    Visual {
        platform: String,
        scenario: String,
        webhooks: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        extra: BTreeMap<String, String>,
    },
    Hybrid {
        intelligence: SolutionType,
        orchestration: SolutionType,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        extra: BTreeMap<String, String>,
    },
}

impl SolutionConfig {
    /// Route a key/value override to the typed field when the key is known,
    /// otherwise into the variant's `extra` map. Never fails.
    pub fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Agent { schedule, model, extra, .. } => match key {
                "schedule" => *schedule = Some(value.to_string()),
                "model" => *model = value.to_string(),
                _ => {
                    extra.insert(key.to_string(), value.to_string());
                }
            },
            Self::Script { runtime, schedule, extra, .. } => match key {
                "runtime" => *runtime = value.to_string(),
                "schedule" => *schedule = Some(value.to_string()),
                _ => {
                    extra.insert(key.to_string(), value.to_string());
                }
            },
            Self::Ci { schedule, on_push, extra } => match key {
                "schedule" => *schedule = Some(value.to_string()),
                "onPush" | "on_push" => *on_push = value.eq_ignore_ascii_case("true"),
                _ => {
                    extra.insert(key.to_string(), value.to_string());
                }
            },
            Self::Visual { platform, scenario, extra, .. } => match key {
                "platform" => *platform = value.to_string(),
                "scenario" => *scenario = value.to_string(),
                _ => {
                    extra.insert(key.to_string(), value.to_string());
                }
            },
            Self::Hybrid { extra, .. } => {
                extra.insert(key.to_string(), value.to_string());
            }
        }
    }
}

/// The structured description of how a solution type will be realized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Architecture {
    pub name: String,
    pub description: String,
    pub components: Vec<Component>,
    /// Ordered, human-readable steps. The scaffold generator expands each
    /// entry into one stub, in this order.
    pub workflow: Vec<String>,
    /// Event names that start a run
    pub triggers: Vec<String>,
    pub config: SolutionConfig,
}

/// A runner-up strategy with a one-line rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(rename = "type")]
    pub solution_type: SolutionType,
    pub reason: String,
}

/// A chosen solution type with its architecture and up to three runner-ups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    #[serde(rename = "type")]
    pub solution_type: SolutionType,
    pub architecture: Architecture,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_is_stable() {
        assert_eq!(SolutionType::ALL[0], SolutionType::Agent);
        assert_eq!(SolutionType::ALL[4], SolutionType::CiWorkflow);
        assert_eq!(SolutionType::ALL.len(), 8);
    }

    #[test]
    fn test_display_matches_serde() {
        let json = serde_json::to_string(&SolutionType::CiWorkflow).unwrap();
        assert_eq!(json, "\"ci-workflow\"");
        assert_eq!(SolutionType::CiWorkflow.to_string(), "ci-workflow");
    }

    #[test]
    fn test_config_set_routes_known_keys() {
        let mut config = SolutionConfig::Ci {
            schedule: None,
            on_push: false,
            extra: BTreeMap::new(),
        };
        config.set("schedule", "0 9 * * *");
        config.set("retries", "3");

        match config {
            SolutionConfig::Ci { schedule, extra, .. } => {
                assert_eq!(schedule.as_deref(), Some("0 9 * * *"));
                assert_eq!(extra.get("retries").map(String::as_str), Some("3"));
            }
            _ => panic!("variant changed"),
        }
    }

    #[test]
    fn test_config_round_trips_as_json() {
        let config = SolutionConfig::Hybrid {
            intelligence: SolutionType::Agent,
            orchestration: SolutionType::CiWorkflow,
            extra: BTreeMap::new(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"hybrid\""));
        assert!(json.contains("\"intelligence\":\"agent\""));
    }
}
