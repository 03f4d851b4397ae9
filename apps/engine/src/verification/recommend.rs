//! Recommendation generator — actionable suggestions derived from a scored
//! skill record. Rule order matters; the closing line is always present.

use crate::models::report::{SkillRecord, Source};
use crate::verification::trust::{TrustLevel, HIGH_TRUST_MIN};

const RECOMMEND_PUBLIC_PROJECTS: &str =
    "Consider creating public GitHub projects showcasing this skill to increase verification confidence.";
const RECOMMEND_ADD_TO_RESUME: &str =
    "Add this skill to your resume to improve consistency across platforms.";
const RECOMMEND_RECENT_ACTIVITY: &str =
    "Create more recent projects or contributions to demonstrate current proficiency.";
const RECOMMEND_CERTIFICATIONS: &str =
    "Consider obtaining certifications or endorsements for this skill.";
const RECOMMEND_KEEP_PRACTICING: &str =
    "Continue practicing and building projects to maintain skill relevancy.";

/// Builds the recommendation list for one skill.
pub fn generate_recommendations(skill: &SkillRecord) -> Vec<String> {
    let mut recommendations = Vec::new();

    if skill.sources.len() == 1 {
        if skill.sources[0] == Source::Resume {
            recommendations.push(RECOMMEND_PUBLIC_PROJECTS.to_string());
        } else {
            recommendations.push(RECOMMEND_ADD_TO_RESUME.to_string());
        }
    }

    if skill.trust_score < HIGH_TRUST_MIN {
        recommendations.push(RECOMMEND_RECENT_ACTIVITY.to_string());
        recommendations.push(RECOMMEND_CERTIFICATIONS.to_string());
    }

    recommendations.push(RECOMMEND_KEEP_PRACTICING.to_string());
    recommendations
}

/// Badge level for a skill row, shared with the aggregate status label.
pub fn skill_badge(skill: &SkillRecord) -> TrustLevel {
    TrustLevel::from_score(skill.trust_score)
}
