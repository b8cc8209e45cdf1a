//! Human-in-the-loop validation of a proposed solution.
//!
//! A small state machine: the solution is presented, and the user approves
//! it, refines it in place, switches to a runner-up or a different type, or
//! declines. Modification and exploration always return to presentation, so
//! the only exits are approval, rejection, and a full restart.

use tracing::{debug, info};

use flowsmith_interview::{select_option, AnswerSource};
use flowsmith_model::{Component, Problem, Solution, SolutionType};
use flowsmith_select::{alternatives_for, builder_for};

use crate::error::SessionResult;

/// States of the validation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Presenting,
    Approved,
    Modifying,
    ExploringAlternative,
    Rejected,
}

/// Terminal result of one validation run.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// User approved; carry the (possibly refined) solution forward.
    Approved(Solution),
    /// User declined both the proposal and every alternative.
    Rejected,
    /// User asked to start the whole pipeline over.
    Restart,
}

const MODIFY_OPTIONS: [&str; 5] = [
    "Change solution type",
    "Change components",
    "Change workflow",
    "Change configuration",
    "Restart from the interview",
];

enum ModifyAction {
    Continue,
    Restart,
}

/// Drives the presentation/refinement loop over one answer stream.
pub struct ValidationLoop<'a> {
    answers: &'a mut dyn AnswerSource,
}

impl<'a> ValidationLoop<'a> {
    pub fn new(answers: &'a mut dyn AnswerSource) -> Self {
        Self { answers }
    }

    /// Run to a terminal outcome. Strictly sequential: one question at a
    /// time, one validation per session.
    pub async fn run(
        &mut self,
        problem: &Problem,
        mut solution: Solution,
    ) -> SessionResult<ValidationOutcome> {
        let mut state = ValidationState::Presenting;
        let mut choice = String::new();

        loop {
            debug!(?state, "validation");
            match state {
                ValidationState::Presenting => {
                    let answer = self
                        .answers
                        .ask(&render_presentation(&solution))
                        .await?;
                    state = match answer.as_str() {
                        "y" => ValidationState::Approved,
                        "modify" => ValidationState::Modifying,
                        "" => ValidationState::Rejected,
                        _ => {
                            choice = answer;
                            ValidationState::ExploringAlternative
                        }
                    };
                }
                ValidationState::Modifying => {
                    state = match self.apply_modification(problem, &mut solution).await? {
                        ModifyAction::Continue => ValidationState::Presenting,
                        ModifyAction::Restart => return Ok(ValidationOutcome::Restart),
                    };
                }
                ValidationState::ExploringAlternative => {
                    let explored = self.explore(problem, &mut solution, &choice).await?;
                    state = if explored {
                        ValidationState::Presenting
                    } else {
                        ValidationState::Rejected
                    };
                }
                ValidationState::Approved => {
                    info!(solution_type = %solution.solution_type, "Solution approved");
                    return Ok(ValidationOutcome::Approved(solution));
                }
                ValidationState::Rejected => {
                    info!("Solution rejected; no implementation will be generated");
                    return Ok(ValidationOutcome::Rejected);
                }
            }
        }
    }

    /// Swap in an alternative (1-based index) or, for the `custom` token,
    /// any type from the full catalogue. Returns false when nothing usable
    /// was chosen, which ends the loop as a rejection.
    async fn explore(
        &mut self,
        problem: &Problem,
        solution: &mut Solution,
        token: &str,
    ) -> SessionResult<bool> {
        if token == "custom" {
            let labels: Vec<&str> = SolutionType::ALL
                .iter()
                .map(|t| t.display_name())
                .collect();
            let index = select_option(
                &mut *self.answers,
                "Which solution type instead?",
                &labels,
            )
            .await?;
            rebuild(problem, solution, SolutionType::ALL[index]);
            return Ok(true);
        }

        match token.parse::<usize>() {
            Ok(n) if (1..=solution.alternatives.len()).contains(&n) => {
                let chosen = solution.alternatives[n - 1].solution_type;
                info!(alternative = %chosen, "Switching to alternative");
                rebuild(problem, solution, chosen);
                Ok(true)
            }
            _ => {
                debug!(token, "No usable alternative chosen");
                Ok(false)
            }
        }
    }

    async fn apply_modification(
        &mut self,
        problem: &Problem,
        solution: &mut Solution,
    ) -> SessionResult<ModifyAction> {
        let index = select_option(
            &mut *self.answers,
            "What should change?",
            &MODIFY_OPTIONS,
        )
        .await?;

        match index {
            0 => {
                let labels: Vec<&str> = SolutionType::ALL
                    .iter()
                    .map(|t| t.display_name())
                    .collect();
                let type_index =
                    select_option(&mut *self.answers, "New solution type:", &labels).await?;
                rebuild(problem, solution, SolutionType::ALL[type_index]);
            }
            1 => {
                let action = select_option(
                    &mut *self.answers,
                    "Components:",
                    &["Add a component", "Remove a component"],
                )
                .await?;
                if action == 0 {
                    let name = self.answers.ask("Component name:").await?;
                    let purpose = self.answers.ask("Component purpose:").await?;
                    let position = self
                        .answers
                        .ask("Insert at position (1-based, empty = end):")
                        .await?;
                    splice(
                        &mut solution.architecture.components,
                        Component {
                            name,
                            purpose,
                            path: None,
                            integration: None,
                        },
                        &position,
                    );
                } else {
                    let index_answer = self
                        .answers
                        .ask("Remove which component (1-based index)?")
                        .await?;
                    remove_at(&mut solution.architecture.components, &index_answer);
                }
            }
            2 => {
                let action = select_option(
                    &mut *self.answers,
                    "Workflow:",
                    &["Add a step", "Remove a step"],
                )
                .await?;
                if action == 0 {
                    let step = self.answers.ask("New step description:").await?;
                    let position = self
                        .answers
                        .ask("Insert at position (1-based, empty = end):")
                        .await?;
                    splice(&mut solution.architecture.workflow, step, &position);
                } else {
                    let index_answer = self
                        .answers
                        .ask("Remove which step (1-based index)?")
                        .await?;
                    remove_at(&mut solution.architecture.workflow, &index_answer);
                }
            }
            3 => {
                let key = self.answers.ask("Setting name:").await?;
                let value = self.answers.ask("Setting value:").await?;
                solution.architecture.config.set(&key, &value);
            }
            _ => return Ok(ModifyAction::Restart),
        }

        Ok(ModifyAction::Continue)
    }
}

/// Re-run the builder for a newly chosen type and refresh the runner-ups so
/// the list never contains the current type.
fn rebuild(problem: &Problem, solution: &mut Solution, solution_type: SolutionType) {
    solution.solution_type = solution_type;
    solution.architecture = builder_for(solution_type).describe(problem);
    solution.alternatives = alternatives_for(solution_type);
}

/// Insert at a 1-based position; anything unparsable appends at the end.
fn splice<T>(items: &mut Vec<T>, item: T, position: &str) {
    let index = match position.trim().parse::<usize>() {
        Ok(n) if n >= 1 => (n - 1).min(items.len()),
        _ => items.len(),
    };
    items.insert(index, item);
}

/// Remove at a 1-based position; invalid positions are ignored.
fn remove_at<T>(items: &mut Vec<T>, index_answer: &str) {
    if let Ok(n) = index_answer.trim().parse::<usize>() {
        if (1..=items.len()).contains(&n) {
            items.remove(n - 1);
        }
    }
}

fn render_presentation(solution: &Solution) -> String {
    let architecture = &solution.architecture;
    let mut text = String::new();

    text.push_str(&format!(
        "\nProposed solution: {} [{}]\n{}\n",
        architecture.name, solution.solution_type, architecture.description
    ));

    text.push_str("\nComponents:\n");
    for component in &architecture.components {
        text.push_str(&format!("  - {}: {}\n", component.name, component.purpose));
    }

    text.push_str("\nWorkflow:\n");
    for (index, step) in architecture.workflow.iter().enumerate() {
        text.push_str(&format!("  {}. {}\n", index + 1, step));
    }

    if !solution.alternatives.is_empty() {
        text.push_str("\nAlternatives:\n");
        for (index, alternative) in solution.alternatives.iter().enumerate() {
            text.push_str(&format!(
                "  {}. {} - {}\n",
                index + 1,
                alternative.solution_type.display_name(),
                alternative.reason
            ));
        }
    }

    text.push_str(
        "\nApprove this architecture? (y = approve, modify = refine, \
         1-N = switch to an alternative, custom = different type):",
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowsmith_interview::ScriptedAnswers;
    use flowsmith_select::select;

    fn problem() -> Problem {
        let mut problem = Problem::new("deploy the docs site nightly");
        problem.technical_context.has_git = true;
        problem.technical_context.frequency = flowsmith_model::Frequency::Periodic;
        problem
    }

    #[tokio::test]
    async fn test_immediate_approval() {
        let problem = problem();
        let solution = select(&problem);
        let mut answers = ScriptedAnswers::new(["y"]);

        let outcome = ValidationLoop::new(&mut answers)
            .run(&problem, solution)
            .await
            .unwrap();
        assert!(matches!(outcome, ValidationOutcome::Approved(_)));
    }

    #[tokio::test]
    async fn test_invalid_alternative_rejects() {
        let problem = problem();
        let solution = select(&problem);
        let mut answers = ScriptedAnswers::new(["9"]);

        let outcome = ValidationLoop::new(&mut answers)
            .run(&problem, solution)
            .await
            .unwrap();
        assert!(matches!(outcome, ValidationOutcome::Rejected));
    }

    #[tokio::test]
    async fn test_empty_answer_rejects() {
        let problem = problem();
        let solution = select(&problem);
        let mut answers = ScriptedAnswers::new([""]);

        let outcome = ValidationLoop::new(&mut answers)
            .run(&problem, solution)
            .await
            .unwrap();
        assert!(matches!(outcome, ValidationOutcome::Rejected));
    }

    #[tokio::test]
    async fn test_switching_to_alternative_keeps_invariant() {
        let problem = problem();
        let solution = select(&problem);
        let first_alternative = solution.alternatives[0].solution_type;
        let mut answers = ScriptedAnswers::new(["1", "y"]);

        let outcome = ValidationLoop::new(&mut answers)
            .run(&problem, solution)
            .await
            .unwrap();
        match outcome {
            ValidationOutcome::Approved(solution) => {
                assert_eq!(solution.solution_type, first_alternative);
                assert!(solution
                    .alternatives
                    .iter()
                    .all(|a| a.solution_type != solution.solution_type));
                assert!(solution.alternatives.len() <= 3);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_workflow_splice_at_position_two() {
        let problem = problem();
        let mut solution = select(&problem);
        solution.architecture.workflow = vec![
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
            "four".to_string(),
        ];

        // modify -> change workflow -> add step -> text -> position 2 -> approve
        let mut answers =
            ScriptedAnswers::new(["modify", "3", "1", "brand new step", "2", "y"]);
        let outcome = ValidationLoop::new(&mut answers)
            .run(&problem, solution)
            .await
            .unwrap();

        match outcome {
            ValidationOutcome::Approved(solution) => {
                let workflow = &solution.architecture.workflow;
                assert_eq!(workflow.len(), 5);
                assert_eq!(workflow[1], "brand new step");
                assert_eq!(
                    workflow,
                    &vec![
                        "one".to_string(),
                        "brand new step".to_string(),
                        "two".to_string(),
                        "three".to_string(),
                        "four".to_string(),
                    ]
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_restart_unwinds_to_pipeline() {
        let problem = problem();
        let solution = select(&problem);
        let mut answers = ScriptedAnswers::new(["modify", "5"]);

        let outcome = ValidationLoop::new(&mut answers)
            .run(&problem, solution)
            .await
            .unwrap();
        assert!(matches!(outcome, ValidationOutcome::Restart));
    }

    #[tokio::test]
    async fn test_custom_path_rebuilds_with_chosen_type() {
        let problem = problem();
        let solution = select(&problem);
        // custom -> pick type 4 (python-script) -> approve
        let mut answers = ScriptedAnswers::new(["custom", "4", "y"]);

        let outcome = ValidationLoop::new(&mut answers)
            .run(&problem, solution)
            .await
            .unwrap();
        match outcome {
            ValidationOutcome::Approved(solution) => {
                assert_eq!(solution.solution_type, SolutionType::PythonScript);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_splice_falls_back_to_append() {
        let mut items = vec!["a".to_string(), "b".to_string()];
        splice(&mut items, "c".to_string(), "not a number");
        assert_eq!(items, vec!["a", "b", "c"]);

        splice(&mut items, "d".to_string(), "99");
        assert_eq!(items.last().map(String::as_str), Some("d"));
    }

    #[test]
    fn test_remove_at_ignores_invalid_index() {
        let mut items = vec!["a".to_string(), "b".to_string()];
        remove_at(&mut items, "5");
        assert_eq!(items.len(), 2);
        remove_at(&mut items, "1");
        assert_eq!(items, vec!["b"]);
    }
}
