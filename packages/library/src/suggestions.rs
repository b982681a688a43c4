// ABOUTME: Rule table suggesting related resources for the relationship builder
// ABOUTME: Relevance scores are fixed per-rule constants; output order is deterministic

use crate::types::{RelationshipType, Resource};
use serde::{Deserialize, Serialize};

/// A suggested relationship between the subject resource and a candidate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationshipSuggestion {
    pub resource_id: String,
    pub title: String,
    pub suggested_type: RelationshipType,
    pub relevance: f32,
    pub reason: String,
}

/// One entry of the suggestion table. The first matching rule wins for
/// a given candidate; later rules never override an earlier match.
struct SuggestionRule {
    matches: fn(&Resource, &Resource) -> bool,
    suggested_type: RelationshipType,
    relevance: f32,
    reason: &'static str,
}

fn shares_tag(subject: &Resource, candidate: &Resource) -> bool {
    subject.tags.iter().any(|tag| {
        candidate
            .tags
            .iter()
            .any(|other| other.eq_ignore_ascii_case(tag))
    })
}

fn shares_title_keyword(subject: &Resource, candidate: &Resource) -> bool {
    let candidate_title = candidate.title.to_lowercase();
    subject
        .title
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .any(|word| candidate_title.contains(word))
}

const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        matches: shares_tag,
        suggested_type: RelationshipType::RelatedTo,
        relevance: 0.75,
        reason: "Shares a tag with this resource",
    },
    SuggestionRule {
        matches: |subject, candidate| subject.kind == candidate.kind,
        suggested_type: RelationshipType::RelatedTo,
        relevance: 0.6,
        reason: "Same resource kind",
    },
    SuggestionRule {
        matches: shares_title_keyword,
        suggested_type: RelationshipType::RelatedTo,
        relevance: 0.5,
        reason: "Title keyword overlap",
    },
];

/// Evaluate the suggestion table for every candidate. Candidates keep
/// their input order; the subject itself is never suggested.
pub fn suggest_related(subject: &Resource, candidates: &[Resource]) -> Vec<RelationshipSuggestion> {
    candidates
        .iter()
        .filter(|candidate| candidate.id != subject.id)
        .filter_map(|candidate| {
            SUGGESTION_RULES
                .iter()
                .find(|rule| (rule.matches)(subject, candidate))
                .map(|rule| RelationshipSuggestion {
                    resource_id: candidate.id.clone(),
                    title: candidate.title.clone(),
                    suggested_type: rule.suggested_type,
                    relevance: rule.relevance,
                    reason: rule.reason.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceKind;
    use chrono::Utc;

    fn resource(id: &str, title: &str, kind: ResourceKind, tags: &[&str]) -> Resource {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            description: String::new(),
            url: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn shared_tag_outranks_same_kind() {
        let subject = resource("a", "802.1X rollout guide", ResourceKind::Guide, &["wired"]);
        let candidate = resource("b", "RADIUS basics", ResourceKind::Guide, &["wired"]);

        let suggestions = suggest_related(&subject, &[candidate]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].relevance, 0.75);
        assert_eq!(suggestions[0].reason, "Shares a tag with this resource");
    }

    #[test]
    fn subject_is_never_suggested() {
        let subject = resource("a", "802.1X rollout guide", ResourceKind::Guide, &["wired"]);
        let suggestions = suggest_related(&subject, &[subject.clone()]);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn unrelated_candidate_yields_nothing() {
        let subject = resource("a", "802.1X rollout guide", ResourceKind::Guide, &["wired"]);
        let candidate = resource("b", "Budgeting template", ResourceKind::Template, &["cost"]);
        assert!(suggest_related(&subject, &[candidate]).is_empty());
    }

    #[test]
    fn output_is_deterministic_and_ordered() {
        let subject = resource("a", "802.1X rollout guide", ResourceKind::Guide, &["wired"]);
        let candidates = vec![
            resource("b", "Guest access guide", ResourceKind::Guide, &[]),
            resource("c", "Switch config tool", ResourceKind::Tool, &["wired"]),
        ];

        let first = suggest_related(&subject, &candidates);
        let second = suggest_related(&subject, &candidates);
        assert_eq!(first, second);
        assert_eq!(first[0].resource_id, "b");
        assert_eq!(first[1].resource_id, "c");
    }
}
