//! Job filter used when searching the action catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A job (class) abbreviation such as `DNC`, or `Any`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Job {
    #[default]
    Any,
    Named(String),
}

impl Job {
    /// Whether an action whose job category reads `category` is usable by this job.
    ///
    /// Categories are free text from the data sheet ("DNC", "BRD MCH DNC", ...).
    pub fn allows(&self, category: Option<&str>) -> bool {
        match self {
            Job::Any => true,
            Job::Named(abbr) => category
                .map(|c| {
                    c.split(|ch: char| !ch.is_ascii_alphanumeric())
                        .any(|token| token.eq_ignore_ascii_case(abbr))
                })
                .unwrap_or(false),
        }
    }
}

impl From<String> for Job {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            Job::Any
        } else {
            Job::Named(trimmed.to_uppercase())
        }
    }
}

impl From<Job> for String {
    fn from(job: Job) -> Self {
        job.to_string()
    }
}

impl FromStr for Job {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Job::from(s.to_string()))
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Job::Any => write!(f, "ANY"),
            Job::Named(abbr) => write!(f, "{}", abbr),
        }
    }
}
