//! Complexity scoring and project-level aggregates.
//!
//! The per-unit score is a weighted proxy, not cyclomatic complexity: five
//! sub-scores are each normalized against a fixed cap, then combined with a
//! constant base term. Cheap, deterministic, single-pass, no control-flow
//! analysis.

use serde::{Deserialize, Serialize};

use crate::construction::DependencyGraph;
use crate::unit::{Unit, UnitId, UnitKind};

const LOC_CAP: f64 = 200.0;
const DEPENDENCY_CAP: f64 = 10.0;
const HOOK_CAP: f64 = 10.0;
const PROP_CAP: f64 = 15.0;
const EXTERNAL_LIB_CAP: f64 = 5.0;

/// Fixed floor every unit carries, weighted into the final score.
const BASE_COMPLEXITY: f64 = 20.0;

const LOC_WEIGHT: f64 = 0.25;
const DEPENDENCY_WEIGHT: f64 = 0.20;
const HOOK_WEIGHT: f64 = 0.20;
const PROP_WEIGHT: f64 = 0.15;
const EXTERNAL_LIB_WEIGHT: f64 = 0.05;
const BASE_WEIGHT: f64 = 0.20;

/// Number of entries kept in the top-N metric lists.
const TOP_N: usize = 10;

/// Normalize a raw value to `[0, 100]` against a fixed cap.
fn normalized(value: f64, cap: f64) -> f64 {
    (value / cap * 100.0).min(100.0)
}

/// Score one unit's complexity as an integer in `[0, 100]`.
///
/// `dependency_count` is the resolved edge count from the graph, not the raw
/// `dependency_names` length, so unresolvable references never inflate the
/// score.
pub fn complexity_score(unit: &Unit, dependency_count: usize) -> u8 {
    let loc = normalized(unit.lines_of_code as f64, LOC_CAP);
    let deps = normalized(dependency_count as f64, DEPENDENCY_CAP);
    let hooks = normalized(unit.hook_call_total() as f64, HOOK_CAP);
    let props = normalized(unit.prop_count() as f64, PROP_CAP);
    let external = normalized(unit.external_library_count() as f64, EXTERNAL_LIB_CAP);

    let weighted = LOC_WEIGHT * loc
        + DEPENDENCY_WEIGHT * deps
        + HOOK_WEIGHT * hooks
        + PROP_WEIGHT * props
        + EXTERNAL_LIB_WEIGHT * external
        + BASE_WEIGHT * BASE_COMPLEXITY;

    weighted.round().min(100.0) as u8
}

/// Complexity distribution in four fixed bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityHistogram {
    /// Complexity <= 30.
    pub low: usize,
    /// Complexity 31-60.
    pub moderate: usize,
    /// Complexity 61-80.
    pub high: usize,
    /// Complexity > 80.
    pub severe: usize,
}

impl ComplexityHistogram {
    fn record(&mut self, complexity: u8) {
        if complexity <= 30 {
            self.low += 1;
        } else if complexity <= 60 {
            self.moderate += 1;
        } else if complexity <= 80 {
            self.high += 1;
        } else {
            self.severe += 1;
        }
    }
}

/// A ranked entry in the top-N lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedUnit {
    pub id: UnitId,
    pub name: String,
    pub value: usize,
}

/// Aggregate statistics over a built dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub unit_count: usize,
    pub hook_count: usize,
    pub circular_count: usize,
    pub average_complexity: f64,
    pub min_complexity: u8,
    pub max_complexity: u8,
    pub histogram: ComplexityHistogram,
    /// Top 10 units by complexity; ties keep encounter order.
    pub most_complex: Vec<RankedUnit>,
    /// Top 10 units by dependent count; ties keep encounter order.
    pub most_depended_upon: Vec<RankedUnit>,
}

impl ProjectMetrics {
    /// Derive project aggregates from the graph in a single pass plus two
    /// stable sorts.
    pub fn aggregate(graph: &DependencyGraph) -> Self {
        let nodes = graph.nodes();

        let mut histogram = ComplexityHistogram::default();
        let mut total: u64 = 0;
        let mut min_complexity = u8::MAX;
        let mut max_complexity = 0u8;
        let mut hook_count = 0;
        let mut circular_count = 0;

        for node in nodes {
            histogram.record(node.complexity);
            total += u64::from(node.complexity);
            min_complexity = min_complexity.min(node.complexity);
            max_complexity = max_complexity.max(node.complexity);
            if node.unit.kind == UnitKind::Hook {
                hook_count += 1;
            }
            if node.circular {
                circular_count += 1;
            }
        }

        if nodes.is_empty() {
            min_complexity = 0;
        }
        let average_complexity = if nodes.is_empty() {
            0.0
        } else {
            total as f64 / nodes.len() as f64
        };

        // sort_by is stable, so ties stay in encounter order and the lists are
        // reproducible across runs.
        let mut by_complexity: Vec<RankedUnit> = nodes
            .iter()
            .map(|n| RankedUnit {
                id: n.id.clone(),
                name: n.unit.name.clone(),
                value: usize::from(n.complexity),
            })
            .collect();
        by_complexity.sort_by(|a, b| b.value.cmp(&a.value));
        by_complexity.truncate(TOP_N);

        let mut by_dependents: Vec<RankedUnit> = nodes
            .iter()
            .map(|n| RankedUnit {
                id: n.id.clone(),
                name: n.unit.name.clone(),
                value: n.dependent_ids.len(),
            })
            .collect();
        by_dependents.sort_by(|a, b| b.value.cmp(&a.value));
        by_dependents.truncate(TOP_N);

        Self {
            unit_count: nodes.len(),
            hook_count,
            circular_count,
            average_complexity,
            min_complexity,
            max_complexity,
            histogram,
            most_complex: by_complexity,
            most_depended_upon: by_dependents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{HookUsage, ImportRecord};

    #[test]
    fn empty_unit_scores_the_base_term() {
        let unit = Unit::new("Tiny", "src/Tiny.tsx", UnitKind::Arrow).with_lines_of_code(1);
        // 0.25 * 0.5 + 0.20 * 20 = 4.125 -> 4
        assert_eq!(complexity_score(&unit, 0), 4);
    }

    #[test]
    fn caps_bound_every_sub_score() {
        use crate::unit::{PropEntry, PropShape};

        let unit = Unit::new("Huge", "src/Huge.tsx", UnitKind::Function)
            .with_lines_of_code(10_000)
            .with_hook_usages(vec![HookUsage {
                name: "useState".into(),
                count: 500,
            }])
            .with_prop_shape(Some(PropShape {
                type_name: "HugeProps".into(),
                properties: (0..20)
                    .map(|i| PropEntry {
                        name: format!("prop{i}"),
                        ty: None,
                        required: true,
                        default: None,
                    })
                    .collect(),
            }))
            .with_imports(
                (0..20)
                    .map(|i| ImportRecord::new(format!("lib-{i}"), vec!["Widget".into()]))
                    .collect(),
            );

        let score = complexity_score(&unit, 100);
        // All sub-scores saturate at 100: 0.85 * 100 + 0.20 * 20 = 89.
        assert_eq!(score, 89);
    }

    #[test]
    fn score_is_always_in_range() {
        for loc in [0usize, 1, 50, 200, 100_000] {
            for deps in [0usize, 5, 10, 1_000] {
                let unit = Unit::new("X", "src/X.tsx", UnitKind::Function)
                    .with_lines_of_code(loc);
                let score = complexity_score(&unit, deps);
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn aggregate_over_empty_graph() {
        let metrics = ProjectMetrics::aggregate(&DependencyGraph::build(Vec::new()));
        assert_eq!(metrics.unit_count, 0);
        assert_eq!(metrics.min_complexity, 0);
        assert_eq!(metrics.max_complexity, 0);
        assert_eq!(metrics.average_complexity, 0.0);
        assert!(metrics.most_complex.is_empty());
    }

    #[test]
    fn aggregate_counts_hooks_and_tops() {
        let graph = DependencyGraph::build(vec![
            Unit::new("App", "src/App.tsx", UnitKind::Function)
                .with_dependency_names(vec!["Button".into(), "useAuth".into()]),
            Unit::new("Button", "src/Button.tsx", UnitKind::Arrow),
            Unit::new("useAuth", "src/useAuth.ts", UnitKind::Hook),
        ]);

        let metrics = ProjectMetrics::aggregate(&graph);
        assert_eq!(metrics.unit_count, 3);
        assert_eq!(metrics.hook_count, 1);
        assert_eq!(metrics.circular_count, 0);
        assert_eq!(metrics.most_complex.len(), 3);
        // App resolves two dependencies, so it scores highest.
        assert_eq!(metrics.most_complex[0].name, "App");
    }

    #[test]
    fn depended_upon_ranking_is_stable_on_ties() {
        let graph = DependencyGraph::build(vec![
            Unit::new("App", "src/App.tsx", UnitKind::Function)
                .with_dependency_names(vec!["First".into(), "Second".into()]),
            Unit::new("First", "src/First.tsx", UnitKind::Arrow),
            Unit::new("Second", "src/Second.tsx", UnitKind::Arrow),
        ]);

        let metrics = ProjectMetrics::aggregate(&graph);
        // First and Second both have one dependent; encounter order decides.
        assert_eq!(metrics.most_depended_upon[0].name, "First");
        assert_eq!(metrics.most_depended_upon[1].name, "Second");
    }

    #[test]
    fn histogram_bands_are_exclusive() {
        let mut histogram = ComplexityHistogram::default();
        for c in [0, 30, 31, 60, 61, 80, 81, 100] {
            histogram.record(c);
        }
        assert_eq!(histogram.low, 2);
        assert_eq!(histogram.moderate, 2);
        assert_eq!(histogram.high, 2);
        assert_eq!(histogram.severe, 2);
    }
}
