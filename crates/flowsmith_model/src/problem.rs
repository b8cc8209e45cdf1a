//! The collected problem description.

use serde::{Deserialize, Serialize};

/// How involved the automation is expected to be.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    /// Menu labels, in presentation order.
    pub const OPTIONS: [Complexity; 3] = [Self::Simple, Self::Moderate, Self::Complex];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "Simple (a few linear steps)",
            Self::Moderate => "Moderate (branching, several tools)",
            Self::Complex => "Complex (judgement calls, many moving parts)",
        }
    }
}

/// How often the automation should run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    Periodic,
    Continuous,
}

impl Frequency {
    pub const OPTIONS: [Frequency; 3] = [Self::OneTime, Self::Periodic, Self::Continuous];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneTime => "One-time (run it once, maybe again someday)",
            Self::Periodic => "Periodic (on a schedule)",
            Self::Continuous => "Continuous (react to events as they happen)",
        }
    }
}

/// How many external systems the automation has to talk to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationLevel {
    None,
    Few,
    Many,
}

impl IntegrationLevel {
    pub const OPTIONS: [IntegrationLevel; 3] = [Self::None, Self::Few, Self::Many];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None (everything stays local)",
            Self::Few => "A few (one or two services)",
            Self::Many => "Many (several services have to cooperate)",
        }
    }
}

/// What the user's environment offers, probed rather than asked where possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalContext {
    /// Version-control CLI (git) is on the PATH
    #[serde(rename = "hasGit")]
    pub has_git: bool,
    /// Node.js runtime is on the PATH
    #[serde(rename = "hasNode")]
    pub has_node: bool,
    /// Python runtime is on the PATH
    #[serde(rename = "hasPython")]
    pub has_python: bool,
    /// Make (the automation platform) account is configured
    #[serde(rename = "hasMakeAccount")]
    pub has_make_account: bool,
    /// Zapier account is configured
    #[serde(rename = "hasZapierAccount")]
    pub has_zapier_account: bool,
    pub complexity: Complexity,
    pub frequency: Frequency,
    pub integrations: IntegrationLevel,
}

impl Default for TechnicalContext {
    fn default() -> Self {
        Self {
            has_git: false,
            has_node: false,
            has_python: false,
            has_make_account: false,
            has_zapier_account: false,
            complexity: Complexity::Simple,
            frequency: Frequency::OneTime,
            integrations: IntegrationLevel::None,
        }
    }
}

/// The structured problem description gathered by the interview.
///
/// Created once per session and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Free-text description of what should be automated
    pub description: String,
    /// What success looks like, one goal per entry
    #[serde(default)]
    pub goals: Vec<String>,
    /// Hard constraints (budget, tooling, compliance)
    #[serde(default)]
    pub constraints: Vec<String>,
    /// How the work is done today
    #[serde(rename = "currentProcess")]
    pub current_process: String,
    /// What hurts about the current process
    #[serde(rename = "painPoints", default)]
    pub pain_points: Vec<String>,
    /// Measurable criteria for calling the automation done
    #[serde(rename = "successCriteria", default)]
    pub success_criteria: Vec<String>,
    #[serde(rename = "technicalContext")]
    pub technical_context: TechnicalContext,
}

impl Problem {
    /// Create an empty problem around a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            goals: Vec::new(),
            constraints: Vec::new(),
            current_process: String::new(),
            pain_points: Vec::new(),
            success_criteria: Vec::new(),
            technical_context: TechnicalContext::default(),
        }
    }

    /// All free text of the problem, lower-cased, for keyword matching.
    pub fn haystack(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.description);
        text.push(' ');
        text.push_str(&self.current_process);
        for part in self
            .goals
            .iter()
            .chain(&self.constraints)
            .chain(&self.pain_points)
            .chain(&self.success_criteria)
        {
            text.push(' ');
            text.push_str(part);
        }
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_problem_is_empty() {
        let problem = Problem::new("sync invoices");
        assert_eq!(problem.description, "sync invoices");
        assert!(problem.goals.is_empty());
        assert!(!problem.technical_context.has_git);
    }

    #[test]
    fn test_haystack_covers_all_text() {
        let mut problem = Problem::new("Deploy the THING");
        problem.goals.push("Email a report".to_string());
        problem.pain_points.push("Slack noise".to_string());

        let haystack = problem.haystack();
        assert!(haystack.contains("deploy the thing"));
        assert!(haystack.contains("email a report"));
        assert!(haystack.contains("slack noise"));
    }

    #[test]
    fn test_serde_field_names() {
        let problem = Problem::new("x");
        let json = serde_json::to_string(&problem).unwrap();
        assert!(json.contains("currentProcess"));
        assert!(json.contains("technicalContext"));
        assert!(json.contains("hasGit"));
    }
}
