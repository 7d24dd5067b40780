//! The analysis document: everything one run produces, in one serializable
//! value, plus the human-readable summary rendering.

use anyhow::Result;
use serde::Serialize;

use atlas_graph::{DependencyGraph, LayoutNode, ProjectMetrics, RelatedNodes};

/// Full output of one analysis run.
#[derive(Debug, Serialize)]
pub struct AnalysisDocument {
    pub graph: DependencyGraph,
    pub metrics: ProjectMetrics,
    pub layout: Vec<LayoutNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<RelatedNodes>,
}

impl AnalysisDocument {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Terminal summary for runs without `--json`.
    pub fn summary(&self) -> String {
        let m = &self.metrics;
        let mut out = String::new();
        out.push_str(&format!(
            "{} units ({} hooks), {} dependency edges\n",
            m.unit_count,
            m.hook_count,
            self.graph.edges().len()
        ));
        out.push_str(&format!(
            "complexity avg {:.1} (min {}, max {}), {} circular\n",
            m.average_complexity, m.min_complexity, m.max_complexity, m.circular_count
        ));
        if let Some(top) = m.most_complex.first() {
            out.push_str(&format!("most complex: {} ({})\n", top.name, top.value));
        }
        if let Some(top) = m.most_depended_upon.first() {
            out.push_str(&format!(
                "most depended upon: {} ({} dependents)\n",
                top.name, top.value
            ));
        }
        if let Some(focus) = &self.focus {
            out.push_str(&format!(
                "focus {}: {} dependencies, {} dependents, {} edges\n",
                focus.center.unit.name,
                focus.dependency_nodes.len(),
                focus.dependent_nodes.len(),
                focus.related_edges.len()
            ));
        }
        out
    }
}
