//! Keyword priority triage across report recommendations.
//!
//! The report aggregator collects recommendation lines from every analytic
//! report and orders them high, medium, then low priority. Matching is
//! case-insensitive on substrings; order within a bucket is preserved.

use std::fmt;

use serde::Serialize;

use crate::config::TriageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Prefix prepended to triaged lines.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Urgent",
            Priority::Medium => "Important",
            Priority::Low => "Long-term",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a single recommendation line.
pub fn classify(recommendation: &str, config: &TriageConfig) -> Priority {
    let lowered = recommendation.to_lowercase();
    let matches = |keywords: &[String]| {
        keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    };

    if matches(&config.high_keywords) {
        Priority::High
    } else if matches(&config.medium_keywords) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Order recommendations by priority and prefix each with its label.
pub fn prioritize<I, S>(recommendations: I, config: &TriageConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ranked: Vec<(Priority, String)> = recommendations
        .into_iter()
        .map(|line| {
            let line = line.as_ref();
            (classify(line, config), line.to_string())
        })
        .collect();
    // Stable sort keeps the collection order inside each bucket.
    ranked.sort_by_key(|(priority, _)| *priority);

    ranked
        .into_iter()
        .map(|(priority, line)| format!("{priority}: {line}"))
        .collect()
}
