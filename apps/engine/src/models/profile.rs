#![allow(dead_code)]

//! GitHub profile payload — the structured half of the engine's input.
//!
//! The payload is produced by an out-of-scope collaborator (API fetch or
//! file upload) and passed through the analysis result unchanged, so both
//! structs carry a flattened map of any fields the engine does not read.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::EngineError;

/// A developer's public code-hosting profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubProfile {
    pub username: String,
    pub repositories: Vec<Repository>,
    /// Monthly commit history. Passed through for rendering; not analyzed.
    #[serde(default)]
    pub commit_activity: Vec<CommitActivity>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One public repository. `languages` keeps payload order so mention order
/// is reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Language name → share of the repository, in integer percent.
    pub languages: IndexMap<String, u32>,
    pub topics: Vec<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitActivity {
    pub date: String,
    pub commits: u32,
}

impl GithubProfile {
    /// Parses a profile payload, surfacing shape problems (missing
    /// `repositories`, or a repository without `languages`/`topics`) as
    /// `MalformedInput` rather than defaulting them — silent defaults would
    /// corrupt downstream scores.
    pub fn from_json(payload: &str) -> Result<Self, EngineError> {
        serde_json::from_str(payload).map_err(|e| EngineError::MalformedInput(e.to_string()))
    }

    /// Same as [`from_json`](Self::from_json), for an already-parsed value.
    pub fn from_value(payload: Value) -> Result<Self, EngineError> {
        serde_json::from_value(payload).map_err(|e| EngineError::MalformedInput(e.to_string()))
    }

    /// Language share summed across all repositories, sorted descending.
    /// This is the input to the caller's language-distribution chart.
    pub fn language_totals(&self) -> Vec<(String, u32)> {
        let mut totals: IndexMap<String, u32> = IndexMap::new();
        for repo in &self.repositories {
            for (language, pct) in &repo.languages {
                *totals.entry(language.clone()).or_insert(0) += pct;
            }
        }
        let mut totals: Vec<(String, u32)> = totals.into_iter().collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1));
        totals
    }
}
