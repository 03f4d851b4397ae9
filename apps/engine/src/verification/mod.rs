// Skill verification engine.
// Implements: mention extraction, cross-referencing, trust scoring,
// recommendations, report export. Pure and synchronous throughout — the
// caller decides how to surface stage progress.

pub mod crossref;
pub mod export;
pub mod extract;
pub mod recommend;
pub mod trust;

use tracing::debug;

use crate::models::profile::GithubProfile;
use crate::models::report::AnalysisResult;
use crate::taxonomy::{SkillTaxonomy, TopicMap};

/// Pipeline stages, reported to the caller's callback as each one begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    ResumeExtraction,
    ProfileExtraction,
    CrossReference,
    TrustScoring,
    ReportAssembly,
}

impl AnalysisStage {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStage::ResumeExtraction => "Scanning resume for known skills",
            AnalysisStage::ProfileExtraction => "Analyzing repository languages and topics",
            AnalysisStage::CrossReference => "Cross-referencing skill mentions",
            AnalysisStage::TrustScoring => "Calculating trust scores",
            AnalysisStage::ReportAssembly => "Compiling verification report",
        }
    }
}

/// Runs the full analysis: extraction → merge → scoring → result.
///
/// `on_stage` fires synchronously at each stage boundary; pass a closure
/// that ignores its argument if progress reporting is not needed (or use
/// [`analyze`]). The profile payload is moved into the result unchanged.
pub fn run_analysis(
    taxonomy: &SkillTaxonomy,
    topics: &TopicMap,
    resume_text: &str,
    profile: GithubProfile,
    mut on_stage: impl FnMut(AnalysisStage),
) -> AnalysisResult {
    on_stage(AnalysisStage::ResumeExtraction);
    let resume_mentions = extract::extract_resume_mentions(taxonomy, resume_text);

    on_stage(AnalysisStage::ProfileExtraction);
    let profile_mentions = extract::extract_profile_mentions(taxonomy, topics, &profile);

    debug!(
        resume_mentions = resume_mentions.len(),
        profile_mentions = profile_mentions.len(),
        "extraction complete"
    );

    on_stage(AnalysisStage::CrossReference);
    let merged = crossref::cross_reference(&resume_mentions, &profile_mentions);

    on_stage(AnalysisStage::TrustScoring);
    let skills = trust::score_skills(merged);
    let trust_score = trust::aggregate_trust_score(&skills);

    on_stage(AnalysisStage::ReportAssembly);
    AnalysisResult {
        skills,
        trust_score,
        github_data: profile,
    }
}

/// [`run_analysis`] without progress reporting.
#[allow(dead_code)]
pub fn analyze(
    taxonomy: &SkillTaxonomy,
    topics: &TopicMap,
    resume_text: &str,
    profile: GithubProfile,
) -> AnalysisResult {
    run_analysis(taxonomy, topics, resume_text, profile, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::Source;
    use crate::taxonomy::SkillCategory;

    fn empty_profile() -> GithubProfile {
        GithubProfile::from_json(r#"{"username": "johndoe", "repositories": []}"#).unwrap()
    }

    fn one_repo_profile(languages: &str, topics: &str) -> GithubProfile {
        GithubProfile::from_json(&format!(
            r#"{{
                "username": "johndoe",
                "repositories": [{{
                    "name": "demo",
                    "languages": {{{languages}}},
                    "topics": [{topics}]
                }}]
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_scenario_python_and_react_confirmed_by_profile() {
        // A fixture registry without the single-letter "R" skill, which the
        // builtin set would substring-match inside "React".
        let taxonomy = SkillTaxonomy::new(vec![
            (
                SkillCategory::ProgrammingLanguages,
                vec!["Python".to_string()],
            ),
            (SkillCategory::Frameworks, vec!["React".to_string()]),
        ]);
        let topics = TopicMap::builtin();
        let profile = one_repo_profile(r#""Python": 90"#, r#""react""#);

        let result = analyze(
            &taxonomy,
            &topics,
            "Experienced with Python and React",
            profile,
        );

        assert_eq!(result.skills.len(), 2);
        let python = result.skills.iter().find(|s| s.name == "Python").unwrap();
        let react = result.skills.iter().find(|s| s.name == "React").unwrap();
        assert_eq!(python.sources, [Source::Resume, Source::Github]);
        assert_eq!(python.trust_score, 100);
        assert_eq!(react.sources, [Source::Resume, Source::Github]);
        assert_eq!(react.trust_score, 100);
        assert_eq!(result.trust_score, 100);
    }

    #[test]
    fn test_scenario_profile_only_java() {
        let taxonomy = SkillTaxonomy::builtin();
        let topics = TopicMap::builtin();
        let profile = one_repo_profile(r#""Java": 70"#, "");

        // Résumé has no taxonomy matches at all.
        let result = analyze(&taxonomy, &topics, "", profile);

        assert_eq!(result.skills.len(), 1);
        assert_eq!(result.skills[0].name, "Java");
        assert_eq!(result.skills[0].sources, [Source::Github]);
        assert_eq!(result.skills[0].trust_score, 80);
        assert_eq!(result.trust_score, 80);
    }

    #[test]
    fn test_scenario_topic_only_docker() {
        let taxonomy = SkillTaxonomy::builtin();
        let topics = TopicMap::builtin();
        let profile = one_repo_profile("", r#""docker""#);

        let result = analyze(&taxonomy, &topics, "", profile);

        assert_eq!(result.skills.len(), 1);
        assert_eq!(result.skills[0].name, "Docker");
        assert_eq!(result.skills[0].sources, [Source::Github]);
        assert_eq!(result.skills[0].trust_score, 80);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let taxonomy = SkillTaxonomy::builtin();
        let topics = TopicMap::builtin();
        let result = analyze(&taxonomy, &topics, "", empty_profile());
        assert!(result.skills.is_empty());
        assert_eq!(result.trust_score, 0);
    }

    #[test]
    fn test_stages_fire_once_in_order() {
        let taxonomy = SkillTaxonomy::builtin();
        let topics = TopicMap::builtin();
        let mut stages = Vec::new();

        run_analysis(&taxonomy, &topics, "Python", empty_profile(), |stage| {
            stages.push(stage)
        });

        assert_eq!(
            stages,
            [
                AnalysisStage::ResumeExtraction,
                AnalysisStage::ProfileExtraction,
                AnalysisStage::CrossReference,
                AnalysisStage::TrustScoring,
                AnalysisStage::ReportAssembly,
            ]
        );
    }

    #[test]
    fn test_profile_passes_through_unchanged() {
        let taxonomy = SkillTaxonomy::builtin();
        let topics = TopicMap::builtin();
        let profile = one_repo_profile(r#""Python": 90, "Jupyter Notebook": 10"#, "");
        let before = serde_json::to_value(&profile).unwrap();

        let result = analyze(&taxonomy, &topics, "some resume", profile);
        assert_eq!(serde_json::to_value(&result.github_data).unwrap(), before);
    }

    #[test]
    fn test_analysis_result_wire_names() {
        let taxonomy = SkillTaxonomy::builtin();
        let topics = TopicMap::builtin();
        let result = analyze(&taxonomy, &topics, "", one_repo_profile(r#""Java": 70"#, ""));

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("trustScore").is_some());
        assert!(json.get("githubData").is_some());
        assert_eq!(json["skills"][0]["trustScore"], 80);
    }
}
