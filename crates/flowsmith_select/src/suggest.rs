//! Fixed lookup tables: schedules, likely integrations, likely libraries.

use flowsmith_model::{Frequency, Problem};

/// Cron-like schedule for a run frequency.
pub fn schedule_for(frequency: Frequency) -> Option<&'static str> {
    match frequency {
        Frequency::OneTime => None,
        Frequency::Periodic => Some("0 9 * * *"),
        Frequency::Continuous => Some("*/15 * * * *"),
    }
}

const INTEGRATION_KEYWORDS: &[(&str, &str)] = &[
    ("email", "Email (SMTP / SendGrid)"),
    ("mail", "Email (SMTP / SendGrid)"),
    ("slack", "Slack"),
    ("database", "Database (PostgreSQL / MySQL)"),
    ("sql", "Database (PostgreSQL / MySQL)"),
    ("spreadsheet", "Google Sheets"),
    ("sheet", "Google Sheets"),
    ("github", "GitHub"),
    ("calendar", "Calendar (Google / Outlook)"),
    ("webhook", "Incoming webhooks"),
    ("api", "HTTP APIs"),
    ("crm", "CRM (HubSpot / Salesforce)"),
];

/// External systems the problem text suggests the solution will touch.
/// No match means an empty list, never an error.
pub fn suggest_integrations(problem: &Problem) -> Vec<String> {
    let haystack = problem.haystack();
    let mut suggestions: Vec<String> = Vec::new();
    for (keyword, integration) in INTEGRATION_KEYWORDS {
        if haystack.contains(keyword) && !suggestions.iter().any(|s| s == integration) {
            suggestions.push((*integration).to_string());
        }
    }
    suggestions
}

const NODE_LIBRARIES: &[(&str, &str)] = &[
    ("email", "nodemailer"),
    ("mail", "nodemailer"),
    ("slack", "@slack/web-api"),
    ("database", "pg"),
    ("sql", "pg"),
    ("sheet", "googleapis"),
    ("csv", "csv-parse"),
    ("scrape", "cheerio"),
    ("api", "axios"),
];

const PYTHON_LIBRARIES: &[(&str, &str)] = &[
    ("email", "yagmail"),
    ("mail", "yagmail"),
    ("slack", "slack-sdk"),
    ("database", "sqlalchemy"),
    ("sql", "sqlalchemy"),
    ("sheet", "gspread"),
    ("csv", "pandas"),
    ("scrape", "beautifulsoup4"),
    ("api", "requests"),
];

/// Third-party libraries the problem text suggests, for a given runtime.
/// Runtimes without a table (shell) get an empty list.
pub fn suggest_libraries(problem: &Problem, runtime: &str) -> Vec<String> {
    let table: &[(&str, &str)] = match runtime {
        "node" => NODE_LIBRARIES,
        "python3" | "python" => PYTHON_LIBRARIES,
        _ => &[],
    };

    let haystack = problem.haystack();
    let mut libraries: Vec<String> = Vec::new();
    for (keyword, library) in table {
        if haystack.contains(keyword) && !libraries.iter().any(|l| l == library) {
            libraries.push((*library).to_string());
        }
    }
    libraries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_table() {
        assert_eq!(schedule_for(Frequency::OneTime), None);
        assert_eq!(schedule_for(Frequency::Periodic), Some("0 9 * * *"));
        assert_eq!(schedule_for(Frequency::Continuous), Some("*/15 * * * *"));
    }

    #[test]
    fn test_integration_suggestions_deduplicate() {
        let mut problem = Problem::new("email the team, then email the boss");
        problem.goals.push("post to slack".to_string());

        let suggestions = suggest_integrations(&problem);
        assert_eq!(
            suggestions,
            vec!["Email (SMTP / SendGrid)".to_string(), "Slack".to_string()]
        );
    }

    #[test]
    fn test_no_match_yields_empty_lists() {
        let problem = Problem::new("rename the weekly folders");
        assert!(suggest_integrations(&problem).is_empty());
        assert!(suggest_libraries(&problem, "node").is_empty());
        assert!(suggest_libraries(&problem, "bash").is_empty());
    }

    #[test]
    fn test_library_table_follows_runtime() {
        let problem = Problem::new("pull rows from the database and email a digest");
        assert!(suggest_libraries(&problem, "node").contains(&"pg".to_string()));
        assert!(suggest_libraries(&problem, "python3").contains(&"sqlalchemy".to_string()));
    }
}
