//! Workflow-step to identifier transform.

use regex::Regex;

/// Fallback identifier for steps with no usable characters.
const PLACEHOLDER: &str = "step";

/// Turn one workflow step into a camelCase identifier.
///
/// Strips everything outside letters, digits, and whitespace, splits on
/// whitespace, lower-cases the first token, and upper-cases the first
/// letter of each remaining token. Total over arbitrary input: an empty or
/// punctuation-only step becomes the fixed placeholder.
pub fn step_ident(step: &str) -> String {
    let cleaned = Regex::new(r"[^A-Za-z0-9\s]")
        .unwrap()
        .replace_all(step, "");

    let mut words = cleaned.split_whitespace();
    let Some(first) = words.next() else {
        return PLACEHOLDER.to_string();
    };

    let mut ident = first.to_lowercase();
    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            ident.extend(head.to_uppercase());
            ident.push_str(chars.as_str());
        }
    }
    ident
}

/// Identifiers for a whole workflow, in step order, de-duplicated by
/// suffixing the 1-based step position on collision.
pub fn step_idents(workflow: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    workflow
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let mut ident = step_ident(step);
            if seen.contains(&ident) {
                ident = format!("{}{}", ident, index + 1);
            }
            seen.push(ident.clone());
            ident
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_step() {
        assert_eq!(step_ident("Multi   Word!! Step"), "multiWordStep");
    }

    #[test]
    fn test_total_over_degenerate_input() {
        assert_eq!(step_ident(""), "step");
        assert_eq!(step_ident("!!!"), "step");
        assert_eq!(step_ident("   "), "step");
        assert_eq!(step_ident("éé"), "step");
    }

    #[test]
    fn test_result_is_alphanumeric() {
        for input in ["Fetch input data", "re-run: the (whole) thing?", "42 things"] {
            let ident = step_ident(input);
            assert!(!ident.is_empty());
            assert!(ident.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_casing_contract() {
        assert_eq!(step_ident("Load configuration"), "loadConfiguration");
        assert_eq!(step_ident("CHECK out THE repo"), "checkOutTHERepo");
    }

    #[test]
    fn test_collisions_get_position_suffix() {
        let workflow = vec!["".to_string(), "!!!".to_string(), "step".to_string()];
        assert_eq!(step_idents(&workflow), vec!["step", "step2", "step3"]);
    }
}
