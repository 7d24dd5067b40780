//! # atlas-graph
//!
//! Pure graph data structures and algorithms for component dependency graphs.
//!
//! This crate is the analysis core of atlas: it takes the [`Unit`]s produced by
//! a parser (one per detected component or custom hook declaration) and builds
//! a directed [`DependencyGraph`] with per-node depth, cycle marks, and a
//! bounded complexity score. On top of the graph it provides:
//!
//! - **Metrics**: per-unit complexity scoring and project-level aggregates
//!   ([`metrics`])
//! - **Layout**: 2D coordinate assignment under tree and force modes
//!   ([`layout`])
//! - **Focus**: focused-subgraph extraction around a chosen center node
//!   ([`focus`])
//!
//! The crate performs no I/O and never touches a display surface. The graph is
//! rebuilt wholesale on every analysis run; metrics, layout, and focus outputs
//! are transient values recomputed on demand.
//!
//! ## Quick start
//!
//! ```rust
//! use atlas_graph::{DependencyGraph, ProjectMetrics, Unit, UnitKind};
//!
//! let units = vec![
//!     Unit::new("App", "src/App.tsx", UnitKind::Function)
//!         .with_dependency_names(vec!["Button".into()]),
//!     Unit::new("Button", "src/Button.tsx", UnitKind::Arrow),
//! ];
//!
//! let graph = DependencyGraph::build(units);
//! assert_eq!(graph.len(), 2);
//!
//! let metrics = ProjectMetrics::aggregate(&graph);
//! assert_eq!(metrics.unit_count, 2);
//! ```

pub mod construction;
pub mod focus;
pub mod layout;
pub mod metrics;
pub mod naming;
pub mod node;
pub mod unit;

pub use construction::DependencyGraph;
pub use focus::{FocusError, FocusOptions, RelatedNodes, extract, highlight_center};
pub use layout::{LayoutMode, LayoutNode, layout, layout_named};
pub use metrics::{ComplexityHistogram, ProjectMetrics, complexity_score};
pub use naming::{NameClass, classify_identifier, is_hook_name, is_pascal_case, is_root_file};
pub use node::{ColorClass, Edge, Node, NodeStyle};
pub use unit::{HookUsage, ImportRecord, PropEntry, PropShape, Unit, UnitId, UnitKind};

#[cfg(test)]
mod tests;
