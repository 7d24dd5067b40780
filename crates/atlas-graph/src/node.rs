//! Graph-level wrappers around units: nodes, edges, and derived styling.

use serde::{Deserialize, Serialize};

use crate::unit::{Unit, UnitId};

/// A directed edge in the dependency graph.
///
/// One edge exists per ordered `(from, to)` pair; repeated references
/// increment `strength` instead of duplicating the edge. Self-edges are never
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: UnitId,
    pub to: UnitId,
    pub strength: u32,
}

/// A node in the dependency graph.
///
/// `dependency_ids` and `dependent_ids` are derived adjacency mirrors of the
/// edge set (unique, insertion order) kept consistent by the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: UnitId,
    pub unit: Unit,
    /// Targets of outgoing edges: the units this node depends on.
    pub dependency_ids: Vec<UnitId>,
    /// Sources of incoming edges: the units that depend on this node.
    pub dependent_ids: Vec<UnitId>,
    /// Longest dependency-chain distance from a root (no-incoming-edge) node.
    pub depth: usize,
    /// Bounded complexity score, always an integer in `[0, 100]`.
    pub complexity: u8,
    /// True when the node participates in any dependency cycle.
    pub circular: bool,
    pub style: NodeStyle,
}

impl Node {
    pub(crate) fn from_unit(unit: Unit) -> Self {
        Self {
            id: unit.id.clone(),
            unit,
            dependency_ids: Vec::new(),
            dependent_ids: Vec::new(),
            depth: 0,
            complexity: 0,
            circular: false,
            style: NodeStyle::default(),
        }
    }

    /// A node nothing depends on (no incoming edges).
    pub fn is_unused(&self) -> bool {
        self.dependent_ids.is_empty()
    }
}

/// Color bucket for rendering, derived deterministically from node state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorClass {
    /// Participates in a dependency cycle. Overrides everything else.
    Circular,
    /// Lives in an entry-point file. Overrides complexity bucketing.
    Root,
    /// No incoming edges.
    Unused,
    /// Complexity <= 30.
    Low,
    /// Complexity 31-60.
    Moderate,
    /// Complexity 61-80.
    High,
    /// Complexity > 80.
    Severe,
}

/// Presentation data derived from `(complexity, unused, circular, root)`.
///
/// Purely cosmetic: styling never feeds back into graph semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub color: ColorClass,
    /// Diameter scaling linearly with complexity: `40 + complexity/100 * 60`.
    pub size: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            color: ColorClass::Low,
            size: 40.0,
        }
    }
}

impl NodeStyle {
    /// Derive styling with fixed precedence: circular > root > unused >
    /// complexity band.
    pub fn derive(complexity: u8, unused: bool, circular: bool, root: bool) -> Self {
        let color = if circular {
            ColorClass::Circular
        } else if root {
            ColorClass::Root
        } else if unused {
            ColorClass::Unused
        } else if complexity <= 30 {
            ColorClass::Low
        } else if complexity <= 60 {
            ColorClass::Moderate
        } else if complexity <= 80 {
            ColorClass::High
        } else {
            ColorClass::Severe
        };

        Self {
            color,
            size: 40.0 + (f64::from(complexity) / 100.0) * 60.0,
        }
    }
}
