//! Source tree scanning: gitignore-aware directory walking and file reading.
//!
//! The engine never touches the filesystem; this module turns a project
//! directory into the `(path, extension, content)` records the parser
//! consumes. Paths are stored relative to the scanned root so unit ids stay
//! stable across machines.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use atlas_parse::SourceFile;

/// File extensions handed to the parser, without the leading dot.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Walk `root` and read every analyzable source file.
///
/// Honors .gitignore files, skips hidden entries and `node_modules`.
/// Unreadable files are logged and skipped; the scan itself only fails when
/// the root is unusable. Results are sorted by path so downstream output is
/// deterministic regardless of walk order.
pub fn collect_sources(root: &Path) -> Result<Vec<SourceFile>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot access directory {}", root.display()))?;

    let mut files = Vec::new();
    let walker = WalkBuilder::new(&root)
        .filter_entry(|entry| entry.file_name() != "node_modules")
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !SOURCE_EXTENSIONS.contains(&extension) {
            continue;
        }

        let relative = path.strip_prefix(&root).unwrap_or(path);
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable file");
                continue;
            }
        };
        files.push(SourceFile::new(
            relative.to_string_lossy().into_owned(),
            format!(".{extension}"),
            content,
        ));
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(root = %root.display(), files = files.len(), "collected source files");
    Ok(files)
}
