//! Node/link assembly for the force-directed dashboard graph.
//! Layout, physics and colors belong to the renderer.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::{Employer, Institution, Match};

pub const INSTITUTION_NODE_SIZE: u32 = 5;
pub const EMPLOYER_NODE_SIZE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeGroup {
    Institution,
    Employer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub group: NodeGroup,
    pub val: u32,
    /// Carnegie type for institutions, raw industry string for employers.
    pub sub_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkGraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Active dashboard filters: a mix of institution types and employer sectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphFilter {
    pub active: BTreeSet<String>,
}

impl GraphFilter {
    pub fn new<I, S>(filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: filters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Comma separated sectors, trimmed. "Logistics & Supply Chain" stays one sector.
pub fn parse_industries(industry: &str) -> Vec<String> {
    let sectors: Vec<String> = industry
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if sectors.is_empty() {
        vec!["Unknown".to_string()]
    } else {
        sectors
    }
}

/// Sorted, de-duplicated sector list across all employers.
pub fn all_sectors(employers: &[Employer]) -> Vec<String> {
    employers
        .iter()
        .flat_map(|e| parse_industries(&e.industry))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A filter value restricts a node group only when it names something in that
/// group; otherwise the group passes untouched. Links survive only when both
/// endpoints do.
pub fn build_graph(
    institutions: &[Institution],
    employers: &[Employer],
    matches: &[Match],
    filter: &GraphFilter,
) -> NetworkGraphData {
    let sectors: HashSet<String> = all_sectors(employers).into_iter().collect();
    let institution_types: HashSet<&str> = institutions.iter().map(|i| i.kind.as_str()).collect();

    let filter_has_sectors = filter.active.iter().any(|f| sectors.contains(f));
    let filter_has_types = filter
        .active
        .iter()
        .any(|f| institution_types.contains(f.as_str()));

    let institution_nodes = institutions
        .iter()
        .filter(|i| filter.is_empty() || !filter_has_types || filter.active.contains(&i.kind))
        .map(|i| GraphNode {
            id: i.id.clone(),
            name: i.name.clone(),
            group: NodeGroup::Institution,
            val: INSTITUTION_NODE_SIZE,
            sub_type: i.kind.clone(),
        });

    let employer_nodes = employers
        .iter()
        .filter(|e| {
            filter.is_empty()
                || !filter_has_sectors
                || parse_industries(&e.industry)
                    .iter()
                    .any(|s| filter.active.contains(s))
        })
        .map(|e| GraphNode {
            id: e.id.clone(),
            name: e.name.clone(),
            group: NodeGroup::Employer,
            val: EMPLOYER_NODE_SIZE,
            sub_type: e.industry.clone(),
        });

    let nodes: Vec<GraphNode> = institution_nodes.chain(employer_nodes).collect();
    let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let links = matches
        .iter()
        .filter(|m| {
            node_ids.contains(m.source_id.as_str()) && node_ids.contains(m.target_id.as_str())
        })
        .map(|m| GraphLink {
            source: m.source_id.clone(),
            target: m.target_id.clone(),
            value: m.match_strength_score,
        })
        .collect();

    NetworkGraphData { nodes, links }
}

/// Matches touching `node_id` on either end, strongest first.
pub fn matches_for_node<'a>(matches: &'a [Match], node_id: &str) -> Vec<&'a Match> {
    let mut touching: Vec<&Match> = matches
        .iter()
        .filter(|m| m.source_id == node_id || m.target_id == node_id)
        .collect();
    touching.sort_by(|a, b| b.match_strength_score.cmp(&a.match_strength_score));
    touching
}
