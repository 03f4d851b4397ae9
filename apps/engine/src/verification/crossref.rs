//! Cross-referencer — merges résumé and profile mentions into one record
//! per distinct skill.

use indexmap::IndexMap;

use crate::models::report::{SkillRecord, Source};
use crate::verification::extract::Mention;

/// Evidence line appended when a profile mention carries no provenance text.
const GENERIC_GITHUB_EVIDENCE: &str = "Found in GitHub repositories";

/// Merges both mention streams, keyed by skill name.
///
/// Résumé mentions are processed first, so résumé-origin skills precede
/// profile-only skills in the result, and a record's category is fixed by
/// whichever mention creates it (first-writer-wins). Sources deduplicate;
/// evidence accumulates in merge order, duplicates allowed. Trust scores
/// are left at zero for the scorer.
pub fn cross_reference(resume: &[Mention], profile: &[Mention]) -> Vec<SkillRecord> {
    let mut records: IndexMap<String, SkillRecord> = IndexMap::new();

    for mention in resume {
        let record = entry_for(&mut records, mention);
        push_source(record, Source::Resume);
        record.evidence.push(format!(
            "Mentioned in resume with {}% confidence",
            (mention.confidence * 100.0).round() as u32
        ));
    }

    for mention in profile {
        let record = entry_for(&mut records, mention);
        push_source(record, Source::Github);
        record.evidence.push(
            mention
                .evidence
                .clone()
                .unwrap_or_else(|| GENERIC_GITHUB_EVIDENCE.to_string()),
        );
    }

    records.into_values().collect()
}

fn entry_for<'a>(
    records: &'a mut IndexMap<String, SkillRecord>,
    mention: &Mention,
) -> &'a mut SkillRecord {
    records
        .entry(mention.name.clone())
        .or_insert_with(|| SkillRecord {
            name: mention.name.clone(),
            category: mention.category,
            sources: Vec::new(),
            evidence: Vec::new(),
            trust_score: 0,
        })
}

fn push_source(record: &mut SkillRecord, source: Source) {
    if !record.sources.contains(&source) {
        record.sources.push(source);
    }
}
