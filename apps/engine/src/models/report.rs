//! Result models — the reconciled per-skill records and the terminal
//! analysis artifact. Wire names are camelCase for compatibility with the
//! report consumers.

use serde::{Deserialize, Serialize};

use crate::models::profile::GithubProfile;
use crate::taxonomy::SkillCategory;

/// Origin of a skill mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Resume,
    Github,
}

/// The reconciled, deduplicated record for one skill.
///
/// `sources` is a true set (unique values, insertion order); `evidence` is a
/// list in merge order and may repeat — each profile mention of the same
/// skill across repositories adds one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: String,
    pub category: SkillCategory,
    pub sources: Vec<Source>,
    pub evidence: Vec<String>,
    pub trust_score: u32,
}

/// Terminal artifact of one engine run. Replaced wholesale on the next run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// First-seen order: résumé-origin skills precede profile-only skills.
    pub skills: Vec<SkillRecord>,
    /// Aggregate trust score, 0–100.
    pub trust_score: u32,
    /// The raw profile payload, passed through for rendering.
    pub github_data: GithubProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_wire_names() {
        assert_eq!(serde_json::to_string(&Source::Resume).unwrap(), "\"resume\"");
        assert_eq!(serde_json::to_string(&Source::Github).unwrap(), "\"github\"");
    }

    #[test]
    fn test_skill_record_wire_shape() {
        let record = SkillRecord {
            name: "Python".to_string(),
            category: SkillCategory::ProgrammingLanguages,
            sources: vec![Source::Resume, Source::Github],
            evidence: vec!["Used in ml-price-predictor (90%)".to_string()],
            trust_score: 100,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "programming_languages");
        assert_eq!(json["trustScore"], 100);
        assert_eq!(json["sources"][0], "resume");
        assert_eq!(json["sources"][1], "github");
    }
}
