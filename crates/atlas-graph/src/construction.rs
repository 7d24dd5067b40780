//! Dependency graph construction: name resolution, depth assignment, and
//! cycle detection.
//!
//! The graph is stored arena-style: nodes live in a `Vec` in unit insertion
//! order with an id-to-index map alongside. Both DFS passes (depth, cycles)
//! use explicit stacks so pathological graphs cannot exhaust the call stack.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::metrics::complexity_score;
use crate::node::{Edge, Node, NodeStyle};
use crate::unit::{Unit, UnitId};

/// The component dependency graph built from a complete set of parsed units.
///
/// Construction is deterministic given stable input order: building twice from
/// the same unit list yields identical node and edge sets. The graph is
/// immutable once built; metrics, layout, and focus extraction read it but
/// never mutate it.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: FxHashMap<UnitId, usize>,
}

impl DependencyGraph {
    /// Build the graph from a finite set of units.
    ///
    /// Dependency names resolve by exact declared-identifier match across the
    /// whole unit set; the name map is built once per run with last writer
    /// winning on collisions. Unresolvable names and self-references are
    /// silently dropped, never errors.
    pub fn build(units: Vec<Unit>) -> Self {
        // Nodes are keyed by id; a duplicate id replaces the earlier unit in
        // place (map semantics, last writer wins, insertion position kept).
        let mut nodes: Vec<Node> = Vec::with_capacity(units.len());
        let mut index: FxHashMap<UnitId, usize> = FxHashMap::default();
        for unit in units {
            let node = Node::from_unit(unit);
            match index.get(&node.id) {
                Some(&i) => nodes[i] = node,
                None => {
                    index.insert(node.id.clone(), nodes.len());
                    nodes.push(node);
                }
            }
        }

        let mut by_name: FxHashMap<String, usize> = FxHashMap::default();
        for (i, node) in nodes.iter().enumerate() {
            // Last writer wins on duplicate names across files.
            by_name.insert(node.unit.name.clone(), i);
        }

        let mut edges: Vec<Edge> = Vec::new();
        let mut edge_index: FxHashMap<(usize, usize), usize> = FxHashMap::default();

        for from in 0..nodes.len() {
            let names: Vec<String> = nodes[from].unit.dependency_names.clone();
            for name in &names {
                let Some(&to) = by_name.get(name) else {
                    // Expected for external-library usages and typos alike.
                    continue;
                };
                if to == from {
                    continue;
                }

                let to_id = nodes[to].id.clone();
                if !nodes[from].dependency_ids.contains(&to_id) {
                    nodes[from].dependency_ids.push(to_id);
                }
                let from_id = nodes[from].id.clone();
                if !nodes[to].dependent_ids.contains(&from_id) {
                    nodes[to].dependent_ids.push(from_id.clone());
                }

                match edge_index.get(&(from, to)) {
                    Some(&e) => edges[e].strength += 1,
                    None => {
                        edge_index.insert((from, to), edges.len());
                        edges.push(Edge {
                            from: from_id,
                            to: nodes[to].id.clone(),
                            strength: 1,
                        });
                    }
                }
            }
        }

        for i in 0..nodes.len() {
            nodes[i].complexity = complexity_score(&nodes[i].unit, nodes[i].dependency_ids.len());
        }

        assign_depths(&mut nodes, &index);
        mark_cycles(&mut nodes, &index);

        for node in &mut nodes {
            node.style = NodeStyle::derive(
                node.complexity,
                node.dependent_ids.is_empty(),
                node.circular,
                node.unit.is_root_file(),
            );
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            circular = nodes.iter().filter(|n| n.circular).count(),
            "dependency graph built"
        );

        Self {
            nodes,
            edges,
            index,
        }
    }

    /// Look up a node by unit id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Look up a node by declared name (first match in insertion order).
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.unit.name == name)
    }

    /// All nodes in unit insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Assign `depth` to every node: 0 for roots (no incoming edge), otherwise
/// `max(depth(pred) + 1)` over the nodes that depend on it.
///
/// Iterative DFS with a temp set standing in for the recursion stack. A
/// predecessor still in progress (back edge of a cycle) contributes nothing,
/// which stops the walk at the current depth instead of recursing forever.
fn assign_depths(nodes: &mut [Node], index: &FxHashMap<UnitId, usize>) {
    let preds: Vec<Vec<usize>> = nodes
        .iter()
        .map(|n| {
            n.dependent_ids
                .iter()
                .filter_map(|id| index.get(id).copied())
                .collect()
        })
        .collect();

    let mut state = vec![VisitState::Unvisited; nodes.len()];
    let mut depth = vec![0usize; nodes.len()];

    for start in 0..nodes.len() {
        if state[start] != VisitState::Unvisited {
            continue;
        }
        // Frame = (node, next predecessor position).
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        state[start] = VisitState::InProgress;

        while let Some(&mut (node, ref mut next)) = stack.last_mut() {
            if *next < preds[node].len() {
                let pred = preds[node][*next];
                *next += 1;
                if state[pred] == VisitState::Unvisited {
                    state[pred] = VisitState::InProgress;
                    stack.push((pred, 0));
                }
            } else {
                depth[node] = preds[node]
                    .iter()
                    .filter(|&&p| state[p] == VisitState::Done)
                    .map(|&p| depth[p] + 1)
                    .max()
                    .unwrap_or(0);
                state[node] = VisitState::Done;
                stack.pop();
            }
        }
    }

    for (node, d) in nodes.iter_mut().zip(depth) {
        node.depth = d;
    }
}

/// Mark every node that participates in a dependency cycle.
///
/// Iterative DFS over outgoing dependency edges with an explicit recursion
/// stack. When a node already on the stack is re-encountered, the whole call
/// chain back to the re-entry point is marked circular, not just the re-entry
/// node.
fn mark_cycles(nodes: &mut [Node], index: &FxHashMap<UnitId, usize>) {
    let deps: Vec<Vec<usize>> = nodes
        .iter()
        .map(|n| {
            n.dependency_ids
                .iter()
                .filter_map(|id| index.get(id).copied())
                .collect()
        })
        .collect();

    let mut state = vec![VisitState::Unvisited; nodes.len()];
    let mut circular = vec![false; nodes.len()];

    for start in 0..nodes.len() {
        if state[start] != VisitState::Unvisited {
            continue;
        }
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        state[start] = VisitState::InProgress;

        while let Some(&mut (node, ref mut next)) = stack.last_mut() {
            if *next < deps[node].len() {
                let dep = deps[node][*next];
                *next += 1;
                match state[dep] {
                    VisitState::Unvisited => {
                        state[dep] = VisitState::InProgress;
                        stack.push((dep, 0));
                    }
                    VisitState::InProgress => {
                        // Back edge: everything from the re-entry point up the
                        // current chain is part of the cycle.
                        if let Some(pos) = stack.iter().position(|&(n, _)| n == dep) {
                            for &(n, _) in &stack[pos..] {
                                circular[n] = true;
                            }
                        }
                    }
                    VisitState::Done => {}
                }
            } else {
                state[node] = VisitState::Done;
                stack.pop();
            }
        }
    }

    for (node, is_circular) in nodes.iter_mut().zip(circular) {
        node.circular = is_circular;
    }
}
