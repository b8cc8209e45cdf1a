//! Additive scoring of solution types against a problem.

use flowsmith_model::{Complexity, Frequency, IntegrationLevel, Problem, SolutionType};

/// Score every solution type against the problem.
///
/// One fixed table of additive rules, evaluated once. Types without a rule
/// keep their initial score of 0. Results come back in the canonical
/// enumeration order.
pub fn score(problem: &Problem) -> Vec<(SolutionType, i32)> {
    let tc = &problem.technical_context;
    let description = problem.description.to_lowercase();
    let goal_mentions_ai = problem.goals.iter().any(|goal| {
        let goal = goal.to_lowercase();
        goal.contains("ai") || goal.contains("intelligent")
    });

    SolutionType::ALL
        .iter()
        .map(|&solution_type| {
            let mut points = 0;
            match solution_type {
                SolutionType::Agent => {
                    if tc.complexity == Complexity::Complex {
                        points += 3;
                    }
                    if goal_mentions_ai {
                        points += 3;
                    }
                }
                SolutionType::CiWorkflow => {
                    if tc.has_git && tc.frequency == Frequency::Periodic {
                        points += 3;
                    }
                    if description.contains("deploy") || description.contains("test") {
                        points += 2;
                    }
                }
                SolutionType::Make => {
                    if tc.has_make_account && tc.integrations != IntegrationLevel::None {
                        points += 3;
                    }
                    if tc.has_make_account && tc.complexity == Complexity::Simple {
                        points += 2;
                    }
                }
                SolutionType::Zapier => {
                    if tc.has_zapier_account && tc.integrations != IntegrationLevel::None {
                        points += 3;
                    }
                    if tc.has_zapier_account && tc.complexity == Complexity::Simple {
                        points += 2;
                    }
                }
                SolutionType::NodeScript => {
                    if tc.has_node && tc.complexity == Complexity::Moderate {
                        points += 2;
                    }
                    // always a viable fallback when the runtime exists
                    if tc.has_node {
                        points += 1;
                    }
                }
                _ => {}
            }
            (solution_type, points)
        })
        .collect()
}

/// The winning type. Ties resolve to the first-listed type: a later entry
/// has to score strictly higher to displace the leader.
pub fn winner(scores: &[(SolutionType, i32)]) -> SolutionType {
    let mut best = scores[0];
    for &(solution_type, points) in &scores[1..] {
        if points > best.1 {
            best = (solution_type, points);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_intelligent_problem_picks_agent() {
        let mut problem = Problem::new("untangle support tickets");
        problem.goals.push("intelligent automation".to_string());
        problem.technical_context.complexity = Complexity::Complex;
        problem.technical_context.has_git = false;

        let scores = score(&problem);
        let agent_score = scores
            .iter()
            .find(|(t, _)| *t == SolutionType::Agent)
            .unwrap()
            .1;
        assert!(agent_score >= 6);
        assert!(scores
            .iter()
            .filter(|(t, _)| *t != SolutionType::Agent)
            .all(|(_, s)| *s <= 1));
        assert_eq!(winner(&scores), SolutionType::Agent);
    }

    #[test]
    fn test_periodic_deploy_with_git_picks_ci() {
        let mut problem = Problem::new("deploy the docs site every morning");
        problem.technical_context.has_git = true;
        problem.technical_context.frequency = Frequency::Periodic;

        let scores = score(&problem);
        let ci_score = scores
            .iter()
            .find(|(t, _)| *t == SolutionType::CiWorkflow)
            .unwrap()
            .1;
        assert!(ci_score >= 5);
        assert_eq!(winner(&scores), SolutionType::CiWorkflow);
    }

    #[test]
    fn test_tie_resolves_to_first_listed() {
        // Everything scores 0: the first-listed type wins.
        let problem = Problem::new("nothing special");
        let scores = score(&problem);
        assert!(scores.iter().all(|(_, s)| *s == 0));
        assert_eq!(winner(&scores), SolutionType::Agent);
    }

    #[test]
    fn test_node_runtime_is_always_fallback_viable() {
        let mut problem = Problem::new("rename some files");
        problem.technical_context.has_node = true;

        let scores = score(&problem);
        let node_score = scores
            .iter()
            .find(|(t, _)| *t == SolutionType::NodeScript)
            .unwrap()
            .1;
        assert_eq!(node_score, 1);
        assert_eq!(winner(&scores), SolutionType::NodeScript);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut problem = Problem::new("deploy and test the service");
        problem.technical_context.has_git = true;
        problem.technical_context.has_zapier_account = true;
        problem.technical_context.frequency = Frequency::Periodic;
        problem.technical_context.integrations = IntegrationLevel::Many;

        let first = score(&problem);
        for _ in 0..10 {
            assert_eq!(score(&problem), first);
        }
    }
}
