//! Mention extractors — the two independent producers of skill mentions.
//!
//! Résumé matching is case-insensitive substring containment of the
//! registered skill name in the lowercased text. It is deliberately not
//! tokenized: a skill name that happens to be a substring of an unrelated
//! word will false-positive (e.g. "R" inside "Senior"). Known limitation,
//! part of the contract.
//!
//! Repository language keys are matched case-insensitively against the
//! registered programming languages, so a payload key like "python" still
//! canonicalizes to "Python". This is a deliberate relaxation of exact key
//! matching, consistent with the matching policy everywhere else.

use rand::Rng;

use crate::models::profile::GithubProfile;
use crate::models::report::Source;
use crate::taxonomy::{SkillCategory, SkillTaxonomy, TopicMap};

/// One observation of a skill from one source, pre-deduplication.
#[derive(Debug, Clone)]
pub struct Mention {
    pub name: String,
    pub category: SkillCategory,
    pub source: Source,
    /// In [0, 1]. Never read by the trust scorer; surfaces only in résumé
    /// evidence strings.
    pub confidence: f64,
    pub evidence: Option<String>,
}

/// Résumé mention confidence is drawn from
/// `[RESUME_CONFIDENCE_BASE, RESUME_CONFIDENCE_BASE + RESUME_CONFIDENCE_SPREAD)`.
pub const RESUME_CONFIDENCE_BASE: f64 = 0.85;
pub const RESUME_CONFIDENCE_SPREAD: f64 = 0.10;

/// Fixed confidence for a language-share mention.
pub const LANGUAGE_CONFIDENCE: f64 = 0.9;
/// Fixed confidence for a topic-tag mention.
pub const TOPIC_CONFIDENCE: f64 = 0.8;

/// Scans résumé text for every registered skill. At most one mention per
/// distinct skill name (containment is boolean).
pub fn extract_resume_mentions(taxonomy: &SkillTaxonomy, resume_text: &str) -> Vec<Mention> {
    let text_lower = resume_text.to_lowercase();
    let mut rng = rand::rng();

    taxonomy
        .all_skills()
        .filter(|(_, name)| text_lower.contains(&name.to_lowercase()))
        .map(|(category, name)| Mention {
            name: name.to_string(),
            category,
            source: Source::Resume,
            confidence: RESUME_CONFIDENCE_BASE + rng.random::<f64>() * RESUME_CONFIDENCE_SPREAD,
            evidence: None,
        })
        .collect()
}

/// Scans a profile's repositories for language-share and topic-tag mentions.
///
/// The same skill across multiple repositories yields multiple mentions;
/// deduplication happens in the cross-referencer. Unrecognized topics are
/// dropped silently, and a repository with no registered languages simply
/// contributes nothing.
pub fn extract_profile_mentions(
    taxonomy: &SkillTaxonomy,
    topics: &TopicMap,
    profile: &GithubProfile,
) -> Vec<Mention> {
    let mut mentions = Vec::new();

    for repo in &profile.repositories {
        for (language, pct) in &repo.languages {
            if let Some(canonical) = taxonomy.canonical_language(language) {
                mentions.push(Mention {
                    name: canonical.to_string(),
                    category: SkillCategory::ProgrammingLanguages,
                    source: Source::Github,
                    confidence: LANGUAGE_CONFIDENCE,
                    evidence: Some(format!("Used in {} ({pct}%)", repo.name)),
                });
            }
        }

        for topic in &repo.topics {
            if let Some(skill) = topics.resolve(topic) {
                mentions.push(Mention {
                    name: skill.to_string(),
                    category: taxonomy.category_of(skill),
                    source: Source::Github,
                    confidence: TOPIC_CONFIDENCE,
                    evidence: Some(format!("Project topic in {}", repo.name)),
                });
            }
        }
    }

    mentions
}
