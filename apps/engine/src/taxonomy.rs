#![allow(dead_code)]

//! Skill taxonomy — the controlled vocabulary the extractors match against,
//! plus the topic → skill normalization table for repository topic tags.
//!
//! Both structures are immutable after construction and injected into the
//! extractors, so tests can run against alternate registries.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Category of a skill in the registry. `Other` is the fallback for names
/// resolved via the topic table that belong to no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    ProgrammingLanguages,
    Frameworks,
    Databases,
    CloudPlatforms,
    Tools,
    SoftSkills,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "programming_languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Databases => "databases",
            SkillCategory::CloudPlatforms => "cloud_platforms",
            SkillCategory::Tools => "tools",
            SkillCategory::SoftSkills => "soft_skills",
            SkillCategory::Other => "other",
        }
    }
}

const PROGRAMMING_LANGUAGES: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "TypeScript",
    "Swift",
    "Kotlin",
    "Scala",
    "R",
    "MATLAB",
    "SQL",
];

const FRAMEWORKS: &[&str] = &[
    "React",
    "Angular",
    "Vue.js",
    "Django",
    "Flask",
    "Spring",
    "Express.js",
    "Laravel",
    "Ruby on Rails",
    "ASP.NET",
    "Flutter",
    "React Native",
];

const DATABASES: &[&str] = &[
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Oracle",
    "SQLite",
    "Cassandra",
    "DynamoDB",
    "Elasticsearch",
];

const CLOUD_PLATFORMS: &[&str] = &[
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "Heroku",
    "DigitalOcean",
];

const TOOLS: &[&str] = &[
    "Git",
    "Jenkins",
    "Docker",
    "Ansible",
    "Terraform",
    "Jira",
    "Confluence",
    "Slack",
    "Visual Studio Code",
    "IntelliJ",
];

const SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Communication",
    "Project Management",
    "Team Collaboration",
    "Problem Solving",
    "Critical Thinking",
];

/// Topic tag → canonical skill name. Targets outside the taxonomy (e.g.
/// "Node.js") are legitimate and resolve to `SkillCategory::Other`.
const TOPIC_SKILLS: &[(&str, &str)] = &[
    ("react", "React"),
    ("nodejs", "Node.js"),
    ("mongodb", "MongoDB"),
    ("express", "Express.js"),
    ("python", "Python"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("spring-boot", "Spring"),
    ("machine-learning", "Machine Learning"),
];

/// Categorized registry of known skill names.
///
/// Matching is case-insensitive; display form is the registered casing.
/// A name registered under two categories (the built-in set lists "Docker"
/// under both cloud_platforms and tools) resolves first-category-wins, and
/// iteration yields it once.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<(SkillCategory, Vec<String>)>,
}

impl SkillTaxonomy {
    pub fn new(categories: Vec<(SkillCategory, Vec<String>)>) -> Self {
        Self { categories }
    }

    /// The registry shipped with the engine.
    pub fn builtin() -> Self {
        let category_sets = [
            (SkillCategory::ProgrammingLanguages, PROGRAMMING_LANGUAGES),
            (SkillCategory::Frameworks, FRAMEWORKS),
            (SkillCategory::Databases, DATABASES),
            (SkillCategory::CloudPlatforms, CLOUD_PLATFORMS),
            (SkillCategory::Tools, TOOLS),
            (SkillCategory::SoftSkills, SOFT_SKILLS),
        ];
        Self::new(
            category_sets
                .into_iter()
                .map(|(category, names)| {
                    (category, names.iter().map(|n| n.to_string()).collect())
                })
                .collect(),
        )
    }

    /// Resolves the category of a canonical skill name. First category wins;
    /// unknown names fall back to `Other`.
    pub fn category_of(&self, name: &str) -> SkillCategory {
        for (category, names) in &self.categories {
            if names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                return *category;
            }
        }
        SkillCategory::Other
    }

    /// Iterates every `(category, name)` pair in fixed category order,
    /// yielding each distinct name once (first category wins on duplicates).
    pub fn all_skills(&self) -> impl Iterator<Item = (SkillCategory, &str)> {
        let mut seen: Vec<&str> = Vec::new();
        self.categories
            .iter()
            .flat_map(|(category, names)| names.iter().map(move |n| (*category, n.as_str())))
            .filter(move |&(_, name)| {
                if seen.iter().any(|s| s.eq_ignore_ascii_case(name)) {
                    false
                } else {
                    seen.push(name);
                    true
                }
            })
    }

    /// Looks up a repository language key in the programming_languages
    /// category, returning the registered display form on a hit.
    pub fn canonical_language(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(category, _)| *category == SkillCategory::ProgrammingLanguages)
            .and_then(|(_, names)| {
                names
                    .iter()
                    .find(|n| n.eq_ignore_ascii_case(name))
                    .map(|n| n.as_str())
            })
    }
}

/// Finite topic → skill table, shape-checked at construction so a bad table
/// fails startup instead of silently missing at lookup time. Unrecognized
/// topics at lookup time are the intended silent-drop policy and stay that
/// way.
#[derive(Debug, Clone)]
pub struct TopicMap {
    entries: Vec<(String, String)>,
}

impl TopicMap {
    /// Builds a table from `(topic, skill)` pairs. Topics are normalized to
    /// lowercase; empty topics, empty skill names, and duplicate topics are
    /// construction-time errors.
    pub fn new(pairs: Vec<(String, String)>) -> Result<Self, EngineError> {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(pairs.len());
        for (topic, skill) in pairs {
            let topic = topic.trim().to_lowercase();
            if topic.is_empty() {
                return Err(EngineError::Taxonomy(
                    "topic table contains an empty topic".to_string(),
                ));
            }
            if skill.trim().is_empty() {
                return Err(EngineError::Taxonomy(format!(
                    "topic '{topic}' maps to an empty skill name"
                )));
            }
            if entries.iter().any(|(t, _)| *t == topic) {
                return Err(EngineError::Taxonomy(format!(
                    "duplicate topic '{topic}' in topic table"
                )));
            }
            entries.push((topic, skill));
        }
        Ok(Self { entries })
    }

    /// The table shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            entries: TOPIC_SKILLS
                .iter()
                .map(|(t, s)| (t.to_string(), s.to_string()))
                .collect(),
        }
    }

    /// Resolves a topic tag to its canonical skill name, or `None` if the
    /// topic is unrecognized.
    pub fn resolve(&self, topic: &str) -> Option<&str> {
        let topic = topic.to_lowercase();
        self.entries
            .iter()
            .find(|(t, _)| *t == topic)
            .map(|(_, skill)| skill.as_str())
    }
}
