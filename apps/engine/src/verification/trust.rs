//! Trust scoring — deterministic functions from merged skill records to
//! 0–100 integer scores.
//!
//! Per-skill scores depend only on a record's source set, so exactly three
//! values are reachable: 70 (résumé only), 80 (profile only), and 100
//! (both sources).

use serde::{Deserialize, Serialize};

use crate::models::report::{SkillRecord, Source};

/// Cross-source consistency component.
pub const CROSS_SOURCE_POINTS: u32 = 40;
pub const SINGLE_SOURCE_POINTS: u32 = 20;

/// Recency/frequency component. Constant until commit activity is scored.
pub const RECENCY_POINTS: u32 = 30;

/// External validation component.
pub const EXTERNALLY_VALIDATED_POINTS: u32 = 20;
pub const SELF_REPORTED_POINTS: u32 = 10;

/// Project complexity component. Constant placeholder.
pub const COMPLEXITY_POINTS: u32 = 10;

pub const MAX_SCORE: u32 = 100;

/// Maximum aggregate bonus when every skill is multi-source.
pub const CONSISTENCY_BONUS_MAX: f64 = 10.0;

/// Scores one skill from its source set.
pub fn skill_trust_score(sources: &[Source]) -> u32 {
    let consistency = if sources.len() > 1 {
        CROSS_SOURCE_POINTS
    } else {
        SINGLE_SOURCE_POINTS
    };
    let validation = if sources.contains(&Source::Github) {
        EXTERNALLY_VALIDATED_POINTS
    } else {
        SELF_REPORTED_POINTS
    };
    (consistency + RECENCY_POINTS + validation + COMPLEXITY_POINTS).min(MAX_SCORE)
}

/// Assigns every record its trust score, producing a new sequence.
pub fn score_skills(records: Vec<SkillRecord>) -> Vec<SkillRecord> {
    records
        .into_iter()
        .map(|record| {
            let trust_score = skill_trust_score(&record.sources);
            SkillRecord {
                trust_score,
                ..record
            }
        })
        .collect()
}

/// Aggregate score across the whole skill set: mean per-skill score plus a
/// consistency bonus proportional to the share of multi-source skills.
/// Rounding is half-away-from-zero (72.5 → 73). Empty set scores 0.
pub fn aggregate_trust_score(skills: &[SkillRecord]) -> u32 {
    if skills.is_empty() {
        return 0;
    }
    let mean = skills.iter().map(|s| s.trust_score as f64).sum::<f64>() / skills.len() as f64;
    let consistent = skills.iter().filter(|s| s.sources.len() > 1).count();
    let bonus = (consistent as f64 / skills.len() as f64) * CONSISTENCY_BONUS_MAX;
    ((mean + bonus).round() as u32).min(MAX_SCORE)
}

/// Share of multi-source skills, as a rounded percentage. The consistency
/// stat shown next to the aggregate score.
pub fn consistency_percentage(skills: &[SkillRecord]) -> u32 {
    if skills.is_empty() {
        return 0;
    }
    let consistent = skills.iter().filter(|s| s.sources.len() > 1).count();
    ((consistent as f64 / skills.len() as f64) * 100.0).round() as u32
}

/// Three-tier trust classification. Shared by skill badges, the aggregate
/// status label, and the recommendation rules — all three call sites must
/// agree on the thresholds.
pub const HIGH_TRUST_MIN: u32 = 80;
pub const MEDIUM_TRUST_MIN: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    High,
    Medium,
    Low,
}

impl TrustLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_TRUST_MIN {
            TrustLevel::High
        } else if score >= MEDIUM_TRUST_MIN {
            TrustLevel::Medium
        } else {
            TrustLevel::Low
        }
    }

    /// Status label for the aggregate score.
    pub fn trust_label(self) -> &'static str {
        match self {
            TrustLevel::High => "High Trust",
            TrustLevel::Medium => "Medium Trust",
            TrustLevel::Low => "Low Trust",
        }
    }

    /// Confidence label for a single skill's detail view.
    pub fn confidence_label(self) -> &'static str {
        match self {
            TrustLevel::High => "High Confidence",
            TrustLevel::Medium => "Medium Confidence",
            TrustLevel::Low => "Low Confidence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::SkillCategory;

    fn record(name: &str, sources: Vec<Source>) -> SkillRecord {
        let trust_score = skill_trust_score(&sources);
        SkillRecord {
            name: name.to_string(),
            category: SkillCategory::Other,
            sources,
            evidence: vec![],
            trust_score,
        }
    }

    #[test]
    fn test_resume_only_scores_70() {
        assert_eq!(skill_trust_score(&[Source::Resume]), 70);
    }

    #[test]
    fn test_github_only_scores_80() {
        assert_eq!(skill_trust_score(&[Source::Github]), 80);
    }

    #[test]
    fn test_both_sources_score_100() {
        assert_eq!(skill_trust_score(&[Source::Resume, Source::Github]), 100);
    }

    #[test]
    fn test_all_reachable_scores_are_in_bounds() {
        for sources in [
            vec![Source::Resume],
            vec![Source::Github],
            vec![Source::Resume, Source::Github],
        ] {
            let score = skill_trust_score(&sources);
            assert!((1..=MAX_SCORE).contains(&score));
            assert!([70, 80, 100].contains(&score));
        }
    }

    #[test]
    fn test_aggregate_of_empty_set_is_zero() {
        assert_eq!(aggregate_trust_score(&[]), 0);
    }

    #[test]
    fn test_aggregate_all_consistent_caps_at_100() {
        let skills = vec![
            record("Python", vec![Source::Resume, Source::Github]),
            record("React", vec![Source::Resume, Source::Github]),
        ];
        // mean 100 + bonus 10, capped.
        assert_eq!(aggregate_trust_score(&skills), 100);
    }

    #[test]
    fn test_aggregate_single_github_skill_is_80() {
        let skills = vec![record("Java", vec![Source::Github])];
        assert_eq!(aggregate_trust_score(&skills), 80);
    }

    #[test]
    fn test_aggregate_rounds_half_away_from_zero() {
        // Three résumé-only (70) and one github-only (80): mean 72.5, bonus 0.
        // Half-away-from-zero rounding gives 73 (ties-to-even would give 72).
        let skills = vec![
            record("A", vec![Source::Resume]),
            record("B", vec![Source::Resume]),
            record("C", vec![Source::Resume]),
            record("D", vec![Source::Github]),
        ];
        assert_eq!(aggregate_trust_score(&skills), 73);
    }

    #[test]
    fn test_aggregate_mixed_set() {
        // 70 + 100, bonus (1/2)*10 = 5 → 85 + 5 = 90.
        let skills = vec![
            record("A", vec![Source::Resume]),
            record("B", vec![Source::Resume, Source::Github]),
        ];
        assert_eq!(aggregate_trust_score(&skills), 90);
    }

    #[test]
    fn test_score_skills_assigns_every_record() {
        let records = vec![
            record("A", vec![Source::Resume]),
            record("B", vec![Source::Github]),
        ];
        let scored = score_skills(records);
        assert_eq!(scored[0].trust_score, 70);
        assert_eq!(scored[1].trust_score, 80);
    }

    #[test]
    fn test_consistency_percentage() {
        let skills = vec![
            record("A", vec![Source::Resume, Source::Github]),
            record("B", vec![Source::Resume]),
            record("C", vec![Source::Github]),
        ];
        // 1 of 3 → 33.33% → 33.
        assert_eq!(consistency_percentage(&skills), 33);
        assert_eq!(consistency_percentage(&[]), 0);
    }

    #[test]
    fn test_trust_level_thresholds() {
        assert_eq!(TrustLevel::from_score(100), TrustLevel::High);
        assert_eq!(TrustLevel::from_score(80), TrustLevel::High);
        assert_eq!(TrustLevel::from_score(79), TrustLevel::Medium);
        assert_eq!(TrustLevel::from_score(60), TrustLevel::Medium);
        assert_eq!(TrustLevel::from_score(59), TrustLevel::Low);
        assert_eq!(TrustLevel::from_score(0), TrustLevel::Low);
    }

    #[test]
    fn test_trust_level_labels() {
        assert_eq!(TrustLevel::High.trust_label(), "High Trust");
        assert_eq!(TrustLevel::Medium.confidence_label(), "Medium Confidence");
    }
}
