//! Report export — the JSON schema external tooling deserializes. Field
//! names and nesting are a compatibility surface; do not rename.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::report::{AnalysisResult, Source};
use crate::taxonomy::SkillCategory;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    /// ISO-8601 with milliseconds, UTC ("Z").
    pub timestamp: String,
    pub overall_trust_score: u32,
    pub skills_analyzed: usize,
    pub skills_details: Vec<ExportSkillDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSkillDetail {
    pub name: String,
    pub category: SkillCategory,
    pub trust_score: u32,
    pub sources: Vec<Source>,
    pub evidence_count: usize,
}

/// Projects an analysis result into the export schema.
pub fn build_export_report(result: &AnalysisResult, now: DateTime<Utc>) -> ExportReport {
    ExportReport {
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        overall_trust_score: result.trust_score,
        skills_analyzed: result.skills.len(),
        skills_details: result
            .skills
            .iter()
            .map(|skill| ExportSkillDetail {
                name: skill.name.clone(),
                category: skill.category,
                trust_score: skill.trust_score,
                sources: skill.sources.clone(),
                evidence_count: skill.evidence.len(),
            })
            .collect(),
    }
}

/// Default report filename: `skillcred-report-<YYYY-MM-DD>.json`.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("skillcred-report-{}.json", now.format("%Y-%m-%d"))
}
