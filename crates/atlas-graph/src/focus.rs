//! Focused-subgraph extraction ("scouter" mode).
//!
//! Given a chosen center node, computes the visible neighborhood for a
//! narrowed view: either one hop in each direction, or the full transitive
//! closure. The one hard failure in the engine lives here - an unknown center
//! id indicates a caller-side bug (stale id) and must surface, not degrade.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::construction::DependencyGraph;
use crate::layout::LayoutNode;
use crate::node::{Edge, Node};

/// Base node size assumed when a style carries no explicit dimensions.
const DEFAULT_NODE_SIZE: f64 = 60.0;
/// Scale applied to the center node's dimensions.
const CENTER_SCALE: f64 = 1.5;
/// Accent border marking the analysis center.
const CENTER_BORDER: &str = "3px solid #f59e0b";
/// Drop shadow marking the analysis center.
const CENTER_SHADOW: &str = "0 0 16px rgba(245, 158, 11, 0.55)";

/// Errors from focused-subgraph extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    /// The requested center id does not exist in the graph.
    #[error("center node not found: {0}")]
    CenterNotFound(String),
}

/// Options controlling neighborhood extent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FocusOptions {
    /// When true, follow edges transitively in both directions instead of a
    /// single hop.
    pub show_all_descendants: bool,
}

/// The visible neighborhood around a center node.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedNodes {
    pub center: Node,
    /// Nodes the center (transitively) depends on.
    pub dependency_nodes: Vec<Node>,
    /// Nodes that (transitively) depend on the center.
    pub dependent_nodes: Vec<Node>,
    /// Every edge traversed while collecting the neighborhood.
    pub related_edges: Vec<Edge>,
}

/// Extract the focused neighborhood around `center_id`.
pub fn extract(
    center_id: &str,
    graph: &DependencyGraph,
    options: FocusOptions,
) -> Result<RelatedNodes, FocusError> {
    let center = graph
        .node(center_id)
        .ok_or_else(|| FocusError::CenterNotFound(center_id.to_string()))?;

    let mut dependency_ids: Vec<String> = Vec::new();
    let mut dependent_ids: Vec<String> = Vec::new();
    let mut related_edges: Vec<Edge> = Vec::new();
    let mut edge_seen: FxHashSet<(String, String)> = FxHashSet::default();

    let mut record_edge = |edge: &Edge, edges: &mut Vec<Edge>| {
        if edge_seen.insert((edge.from.clone(), edge.to.clone())) {
            edges.push(edge.clone());
        }
    };

    if options.show_all_descendants {
        collect_transitive(
            graph,
            center_id,
            Direction::Outgoing,
            &mut dependency_ids,
            &mut |e| record_edge(e, &mut related_edges),
        );
        collect_transitive(
            graph,
            center_id,
            Direction::Incoming,
            &mut dependent_ids,
            &mut |e| record_edge(e, &mut related_edges),
        );
    } else {
        for edge in graph.edges() {
            if edge.from == center_id {
                dependency_ids.push(edge.to.clone());
                record_edge(edge, &mut related_edges);
            } else if edge.to == center_id {
                dependent_ids.push(edge.from.clone());
                record_edge(edge, &mut related_edges);
            }
        }
    }

    let resolve = |ids: &[String]| -> Vec<Node> {
        ids.iter()
            .filter_map(|id| graph.node(id))
            .cloned()
            .collect()
    };

    Ok(RelatedNodes {
        center: center.clone(),
        dependency_nodes: resolve(&dependency_ids),
        dependent_nodes: resolve(&dependent_ids),
        related_edges,
    })
}

#[derive(Clone, Copy)]
enum Direction {
    Outgoing,
    Incoming,
}

/// DFS closure in one direction, stopping revisits at already-seen nodes and
/// at the center itself.
fn collect_transitive(
    graph: &DependencyGraph,
    center_id: &str,
    direction: Direction,
    out: &mut Vec<String>,
    on_edge: &mut dyn FnMut(&Edge),
) {
    let mut visited: FxHashSet<String> = FxHashSet::default();
    visited.insert(center_id.to_string());
    let mut stack: Vec<String> = vec![center_id.to_string()];

    while let Some(current) = stack.pop() {
        let Some(node) = graph.node(&current) else {
            continue;
        };
        let neighbors = match direction {
            Direction::Outgoing => &node.dependency_ids,
            Direction::Incoming => &node.dependent_ids,
        };
        for next in neighbors {
            if let Some(edge) = find_edge(graph, direction, &current, next) {
                on_edge(edge);
            }
            if visited.insert(next.clone()) {
                out.push(next.clone());
                stack.push(next.clone());
            }
        }
    }
}

fn find_edge<'g>(
    graph: &'g DependencyGraph,
    direction: Direction,
    current: &str,
    neighbor: &str,
) -> Option<&'g Edge> {
    let (from, to) = match direction {
        Direction::Outgoing => (current, neighbor),
        Direction::Incoming => (neighbor, current),
    };
    graph.edges().iter().find(|e| e.from == from && e.to == to)
}

/// Return a presentation copy of `node` highlighted as the analysis center.
///
/// Width and height scale by 1.5 (default base 60 when unset) and a fixed
/// accent border and shadow are applied, plus the center marker flag. Graph
/// semantics are untouched; this is display data only.
pub fn highlight_center(node: &LayoutNode) -> LayoutNode {
    let mut highlighted = node.clone();
    highlighted.width = Some(node.width.unwrap_or(DEFAULT_NODE_SIZE) * CENTER_SCALE);
    highlighted.height = Some(node.height.unwrap_or(DEFAULT_NODE_SIZE) * CENTER_SCALE);
    highlighted.border = Some(CENTER_BORDER.to_string());
    highlighted.shadow = Some(CENTER_SHADOW.to_string());
    highlighted.is_center = true;
    highlighted
}
