//! 2D coordinate assignment for graph nodes.
//!
//! Pure functions: the graph is read-only and the output is a fresh vector of
//! position-annotated copies, recomputed on every call (e.g. on a layout-type
//! switch).

use std::collections::VecDeque;
use std::f64::consts::TAU;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::construction::DependencyGraph;
use crate::unit::UnitId;

/// Vertical distance between tree levels.
pub const LEVEL_STEP: f64 = 200.0;
/// Horizontal distance between siblings within a level.
pub const NODE_STEP: f64 = 200.0;
/// Top margin above level 0.
pub const TOP_OFFSET: f64 = 50.0;
/// Horizontal midline the tree is centered on.
const CENTER_X: f64 = 500.0;
/// Center of the force-mode circle.
const FORCE_CENTER: (f64, f64) = (500.0, 500.0);

/// Layout algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Hierarchical: roots on top, BFS levels below.
    Tree,
    /// Deterministic circular placement approximating a force layout.
    Force,
}

impl LayoutMode {
    /// Parse a mode name; `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tree" => Some(Self::Tree),
            "force" => Some(Self::Force),
            _ => None,
        }
    }
}

/// A graph node annotated with position and presentation extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: UnitId,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub border: Option<String>,
    pub shadow: Option<String>,
    /// Marks the analysis center in focused views. Presentation only.
    pub is_center: bool,
}

impl LayoutNode {
    pub fn at(id: impl Into<UnitId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width: None,
            height: None,
            border: None,
            shadow: None,
            is_center: false,
        }
    }
}

/// Lay out all graph nodes under the requested mode.
pub fn layout(graph: &DependencyGraph, mode: LayoutMode) -> Vec<LayoutNode> {
    match mode {
        LayoutMode::Tree => tree_layout(graph),
        LayoutMode::Force => force_layout(graph),
    }
}

/// String-keyed entry point for callers holding a mode name.
///
/// Unknown names are an explicit no-op fallback, not an error: nodes come back
/// unpositioned at the origin.
pub fn layout_named(graph: &DependencyGraph, mode_name: &str) -> Vec<LayoutNode> {
    match LayoutMode::from_name(mode_name) {
        Some(mode) => layout(graph, mode),
        None => graph
            .nodes()
            .iter()
            .map(|n| LayoutNode::at(n.id.clone(), 0.0, 0.0))
            .collect(),
    }
}

/// Hierarchical tree placement.
///
/// Roots are the nodes with no incoming edge (isolated nodes included). BFS
/// runs from all roots simultaneously with first-visit-wins level assignment:
/// shared descendants take the level of whichever root reaches them first.
/// Within a level nodes sit in discovery order, centered on the midline.
fn tree_layout(graph: &DependencyGraph) -> Vec<LayoutNode> {
    let nodes = graph.nodes();
    let mut level_of: FxHashMap<usize, usize> = FxHashMap::default();
    // Discovery order per level.
    let mut levels: Vec<Vec<usize>> = Vec::new();

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    for (i, node) in nodes.iter().enumerate() {
        if node.dependent_ids.is_empty() {
            queue.push_back((i, 0));
        }
    }

    let mut place = |levels: &mut Vec<Vec<usize>>, i: usize, level: usize| {
        if levels.len() <= level {
            levels.resize_with(level + 1, Vec::new);
        }
        levels[level].push(i);
    };

    while let Some((i, level)) = queue.pop_front() {
        if level_of.contains_key(&i) {
            continue;
        }
        level_of.insert(i, level);
        place(&mut levels, i, level);

        for dep_id in &nodes[i].dependency_ids {
            if let Some(j) = graph.index_of(dep_id) {
                if !level_of.contains_key(&j) {
                    queue.push_back((j, level + 1));
                }
            }
        }
    }

    // Pure-cycle components have no root to reach them; park them at level 0
    // in node order so every node still gets a position.
    for i in 0..nodes.len() {
        if !level_of.contains_key(&i) {
            level_of.insert(i, 0);
            place(&mut levels, i, 0);
        }
    }

    let mut out: Vec<LayoutNode> = Vec::with_capacity(nodes.len());
    for (level, members) in levels.iter().enumerate() {
        let width = (members.len().saturating_sub(1)) as f64 * NODE_STEP;
        for (slot, &i) in members.iter().enumerate() {
            let x = CENTER_X - width / 2.0 + slot as f64 * NODE_STEP;
            let y = TOP_OFFSET + level as f64 * LEVEL_STEP;
            out.push(LayoutNode::at(nodes[i].id.clone(), x, y));
        }
    }
    out
}

/// Deterministic circular placement standing in for a force simulation.
///
/// Nodes sit evenly on a circle whose radius grows with node count, so no two
/// nodes ever land on the same point. A real spring simulation could replace
/// this as long as those two properties hold.
fn force_layout(graph: &DependencyGraph) -> Vec<LayoutNode> {
    let nodes = graph.nodes();
    let count = nodes.len();
    if count == 0 {
        return Vec::new();
    }

    let radius = (count as f64 * 30.0).max(200.0);
    let (cx, cy) = FORCE_CENTER;

    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let angle = i as f64 * TAU / count as f64;
            LayoutNode::at(
                node.id.clone(),
                cx + radius * angle.cos(),
                cy + radius * angle.sin(),
            )
        })
        .collect()
}
