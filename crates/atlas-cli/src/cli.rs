//! Command-line interface definition for the atlas analyzer.
//!
//! Defined with clap v4's derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use atlas_graph::LayoutMode;

/// Atlas - component dependency graph analysis for front-end projects
#[derive(Parser, Debug)]
#[command(
    name = "atlas",
    version,
    about = "Component dependency graph analysis for front-end projects",
    long_about = "Atlas parses JavaScript/TypeScript source trees, detects React-style\n\
                  components and custom hooks, and builds a dependency graph with\n\
                  complexity scores, project metrics, and 2D layout coordinates."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available atlas subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a source directory
    ///
    /// Walks the directory (honoring .gitignore, skipping node_modules),
    /// parses every .ts/.tsx/.js/.jsx file, and prints a project summary or a
    /// full JSON analysis document.
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Root directory of the project to analyze
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Layout algorithm for node positions
    #[arg(long, value_enum, default_value = "tree")]
    pub layout: LayoutChoice,

    /// Focus on one unit, by declared name or full `<file>::<name>` id
    #[arg(long, value_name = "UNIT")]
    pub focus: Option<String>,

    /// Follow dependency edges transitively in both directions when focusing
    #[arg(long, requires = "focus")]
    pub all_descendants: bool,

    /// Write the full analysis document as pretty-printed JSON to this path
    /// instead of printing a summary
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

/// Layout algorithm selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChoice {
    /// Hierarchical top-down placement from dependency roots
    Tree,
    /// Circular placement sized to the node count
    Force,
}

impl LayoutChoice {
    pub fn mode(self) -> LayoutMode {
        match self {
            LayoutChoice::Tree => LayoutMode::Tree,
            LayoutChoice::Force => LayoutMode::Force,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_defaults() {
        let cli = Cli::parse_from(["atlas", "analyze"]);
        let Command::Analyze(args) = cli.command;
        assert_eq!(args.dir, PathBuf::from("."));
        assert_eq!(args.layout, LayoutChoice::Tree);
        assert!(args.focus.is_none());
        assert!(!args.all_descendants);
    }

    #[test]
    fn focus_flags_parse() {
        let cli = Cli::parse_from([
            "atlas",
            "analyze",
            "src",
            "--layout",
            "force",
            "--focus",
            "Button",
            "--all-descendants",
        ]);
        let Command::Analyze(args) = cli.command;
        assert_eq!(args.layout, LayoutChoice::Force);
        assert_eq!(args.focus.as_deref(), Some("Button"));
        assert!(args.all_descendants);
    }

    #[test]
    fn all_descendants_requires_focus() {
        let result = Cli::try_parse_from(["atlas", "analyze", "--all-descendants"]);
        assert!(result.is_err());
    }
}
