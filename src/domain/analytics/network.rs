//! Similarity Network - decisions linked by shared tags.

use serde::{Deserialize, Serialize};

use super::tally::OrderedTally;
use crate::domain::decision::{Decision, OutcomeType};
use crate::domain::foundation::DecisionId;

/// A decision as a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: DecisionId,
    /// 1-based index of the primary tag in first-seen order.
    pub group: usize,
    /// Node size, initial confidence divided by ten.
    pub val: f64,
    pub label: String,
    pub outcome: OutcomeType,
}

/// Undirected edge between two decisions that share at least one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLink {
    pub source: DecisionId,
    pub target: DecisionId,
    /// Number of shared tags.
    pub value: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityNetwork {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

/// One node per decision in input order, one link per unordered pair
/// (i < j) that shares a tag. Quadratic in the number of decisions.
pub fn similarity_network(decisions: &[Decision]) -> SimilarityNetwork {
    let mut groups: OrderedTally<()> = OrderedTally::new();
    let nodes = decisions
        .iter()
        .map(|decision| {
            let group = match decision.primary_tag() {
                Some(tag) => {
                    groups.entry(tag);
                    groups.position(tag).map(|p| p + 1).unwrap_or(0)
                }
                None => 0,
            };
            NetworkNode {
                id: decision.id.clone(),
                group,
                val: f64::from(decision.initial_confidence) / 10.0,
                label: decision.title.clone(),
                outcome: decision.outcome,
            }
        })
        .collect();

    let mut links = Vec::new();
    for (i, a) in decisions.iter().enumerate() {
        for b in &decisions[i + 1..] {
            let shared = a.shared_tag_count(b);
            if shared > 0 {
                links.push(NetworkLink {
                    source: a.id.clone(),
                    target: b.id.clone(),
                    value: shared,
                });
            }
        }
    }

    SimilarityNetwork { nodes, links }
}
