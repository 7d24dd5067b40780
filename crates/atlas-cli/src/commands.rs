//! Command implementations. `analyze` is the full pipeline: scan, parse,
//! build, measure, lay out, optionally focus, then print or write JSON.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use atlas_graph::{DependencyGraph, FocusOptions, ProjectMetrics, focus, layout};

use crate::cli::AnalyzeArgs;
use crate::report::AnalysisDocument;
use crate::scan;

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let document = build_document(&args)?;

    match &args.json {
        Some(path) => {
            let json = document.to_pretty_json()?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("cannot create {}", parent.display()))?;
                }
            }
            fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), "wrote analysis document");
        }
        None => print!("{}", document.summary()),
    }
    Ok(())
}

/// Run the pipeline without touching stdout, so tests can inspect the result.
fn build_document(args: &AnalyzeArgs) -> Result<AnalysisDocument> {
    let files = scan::collect_sources(&args.dir)?;
    info!(files = files.len(), "starting analysis");

    let units = atlas_parse::parse_sources(&files);
    let graph = DependencyGraph::build(units);
    let metrics = ProjectMetrics::aggregate(&graph);
    let positions = layout::layout(&graph, args.layout.mode());

    let focus = match &args.focus {
        Some(center) => {
            let center_id = resolve_center(&graph, center);
            let options = FocusOptions {
                show_all_descendants: args.all_descendants,
            };
            Some(focus::extract(&center_id, &graph, options)?)
        }
        None => None,
    };

    Ok(AnalysisDocument {
        graph,
        metrics,
        layout: positions,
        focus,
    })
}

/// Accept either a full unit id or a bare declared name as the focus target.
fn resolve_center(graph: &DependencyGraph, center: &str) -> String {
    if graph.node(center).is_some() {
        return center.to_string();
    }
    match graph.node_by_name(center) {
        Some(node) => node.id.clone(),
        None => center.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::cli::LayoutChoice;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "src/App.tsx",
            r#"
import { Button } from "./Button";
export const App = () => <Button />;
"#,
        );
        write(
            dir.path(),
            "src/Button.tsx",
            "export const Button = () => <button />;",
        );
        dir
    }

    fn args(dir: &Path) -> AnalyzeArgs {
        AnalyzeArgs {
            dir: dir.to_path_buf(),
            layout: LayoutChoice::Tree,
            focus: None,
            all_descendants: false,
            json: None,
        }
    }

    #[test]
    fn analyze_builds_a_complete_document() {
        let dir = fixture();
        let document = build_document(&args(dir.path())).unwrap();

        assert_eq!(document.graph.len(), 2);
        assert_eq!(document.graph.edges().len(), 1);
        assert_eq!(document.metrics.unit_count, 2);
        assert_eq!(document.layout.len(), 2);
        assert!(document.focus.is_none());
    }

    #[test]
    fn focus_accepts_a_bare_name() {
        let dir = fixture();
        let mut args = args(dir.path());
        args.focus = Some("Button".into());

        let document = build_document(&args).unwrap();
        let focus = document.focus.unwrap();
        assert_eq!(focus.center.unit.name, "Button");
        assert_eq!(focus.dependent_nodes.len(), 1);
        assert!(focus.dependency_nodes.is_empty());
    }

    #[test]
    fn unknown_focus_target_fails() {
        let dir = fixture();
        let mut args = args(dir.path());
        args.focus = Some("Missing".into());

        assert!(build_document(&args).is_err());
    }

    #[test]
    fn json_output_writes_the_document() {
        let dir = fixture();
        let out = dir.path().join("out/analysis.json");
        let mut args = args(dir.path());
        args.json = Some(out.clone());

        analyze(args).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["metrics"]["unit_count"], 2);
    }
}
