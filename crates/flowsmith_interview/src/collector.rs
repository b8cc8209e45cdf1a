//! The interview itself: question sequence, list collection, closed menus,
//! and the technical-context assessment.

use tracing::{debug, info};

use flowsmith_model::{Complexity, Frequency, IntegrationLevel, Problem, TechnicalContext};

use crate::answers::AnswerSource;
use crate::error::InterviewResult;
use crate::probes::{CapabilityProbe, ProbeId};

/// Present a numbered menu and read one selection.
///
/// The answer is parsed as a 1-based index; anything unparsable or out of
/// range silently falls back to the first option. That leniency is part of
/// the interview contract, so callers never see a menu error.
pub async fn select_option(
    answers: &mut dyn AnswerSource,
    prompt: &str,
    options: &[&str],
) -> InterviewResult<usize> {
    let mut text = String::from(prompt);
    for (i, option) in options.iter().enumerate() {
        text.push_str(&format!("\n  {}. {}", i + 1, option));
    }
    text.push_str(&format!("\nSelect [1-{}]:", options.len()));

    let answer = answers.ask(&text).await?;
    Ok(parse_selection(&answer, options.len()))
}

fn parse_selection(answer: &str, option_count: usize) -> usize {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=option_count).contains(&n) => n - 1,
        _ => 0,
    }
}

/// Turns a question/answer exchange into a [`Problem`].
///
/// Holds the answer stream and the capability probe for one interview; it
/// never touches solution state.
pub struct InterviewCollector<'a> {
    answers: &'a mut dyn AnswerSource,
    probe: &'a dyn CapabilityProbe,
}

impl<'a> InterviewCollector<'a> {
    pub fn new(answers: &'a mut dyn AnswerSource, probe: &'a dyn CapabilityProbe) -> Self {
        Self { answers, probe }
    }

    /// Run the full interview and return the collected problem.
    pub async fn collect(&mut self) -> InterviewResult<Problem> {
        info!("Starting problem interview");

        let description = self
            .answers
            .ask("Describe the process you want to automate:")
            .await?;
        let mut problem = Problem::new(description);

        problem.goals = self.collect_list("Goal (empty line to finish):").await?;
        problem.constraints = self
            .collect_list("Constraint (empty line to finish):")
            .await?;
        problem.current_process = self.answers.ask("How is this handled today?").await?;
        problem.pain_points = self
            .collect_list("Pain point (empty line to finish):")
            .await?;
        problem.success_criteria = self
            .collect_list("Success criterion (empty line to finish):")
            .await?;

        problem.technical_context = self.assess_technical_context().await?;

        info!(
            goals = problem.goals.len(),
            pain_points = problem.pain_points.len(),
            "Interview complete"
        );
        Ok(problem)
    }

    /// Ask for one item at a time until an empty answer ends the list.
    /// The terminating empty answer is never stored.
    async fn collect_list(&mut self, prompt: &str) -> InterviewResult<Vec<String>> {
        let mut items = Vec::new();
        loop {
            let answer = self.answers.ask(prompt).await?;
            if answer.is_empty() {
                break;
            }
            items.push(answer);
        }
        Ok(items)
    }

    /// Probe tool availability and ask the three closed-menu questions.
    async fn assess_technical_context(&mut self) -> InterviewResult<TechnicalContext> {
        let mut context = TechnicalContext {
            has_git: self.check_probe(ProbeId::Git).await,
            has_node: self.check_probe(ProbeId::Node).await,
            has_python: self.check_probe(ProbeId::Python).await,
            has_make_account: self.check_probe(ProbeId::MakeAccount).await,
            has_zapier_account: self.check_probe(ProbeId::ZapierAccount).await,
            ..TechnicalContext::default()
        };

        let complexity_labels: Vec<&str> =
            Complexity::OPTIONS.iter().map(|c| c.label()).collect();
        let idx = select_option(
            &mut *self.answers,
            "How complex is the process?",
            &complexity_labels,
        )
        .await?;
        context.complexity = Complexity::OPTIONS[idx];

        let frequency_labels: Vec<&str> =
            Frequency::OPTIONS.iter().map(|f| f.label()).collect();
        let idx = select_option(
            &mut *self.answers,
            "How often should it run?",
            &frequency_labels,
        )
        .await?;
        context.frequency = Frequency::OPTIONS[idx];

        let integration_labels: Vec<&str> =
            IntegrationLevel::OPTIONS.iter().map(|l| l.label()).collect();
        let idx = select_option(
            &mut *self.answers,
            "How many external services are involved?",
            &integration_labels,
        )
        .await?;
        context.integrations = IntegrationLevel::OPTIONS[idx];

        Ok(context)
    }

    /// A probe that errors reports the capability as absent.
    async fn check_probe(&self, id: ProbeId) -> bool {
        match self.probe.check(id).await {
            Ok(available) => {
                debug!("{}: {}", id, if available { "available" } else { "not found" });
                available
            }
            Err(e) => {
                debug!("{} probe failed, treating as unavailable: {}", id, e);
                false
            }
        }
    }
}
