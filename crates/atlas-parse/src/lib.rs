//! # atlas-parse
//!
//! OXC-based source parser turning one file's text into zero or more declared
//! units (component/hook candidates) plus their imports, hook usages, and prop
//! shapes.
//!
//! The parser is the only subsystem that reads syntax; everything downstream
//! ([`atlas_graph`]) works on the [`Unit`] model. Parsing never errors
//! outward: a file with syntax errors logs a warning and contributes zero
//! units, so one bad file never aborts an analysis run.
//!
//! ```rust
//! use atlas_parse::{SourceFile, parse_source};
//!
//! let file = SourceFile::new(
//!     "src/Button.tsx",
//!     ".tsx",
//!     "export const Button = () => <button>go</button>;",
//! );
//! let units = parse_source(&file);
//! assert_eq!(units.len(), 1);
//! assert_eq!(units[0].name, "Button");
//! ```

mod collector;
mod hooks;
mod props;

use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportDeclarationSpecifier, ModuleDeclaration, Program};
use oxc_ast_visit::Visit;
use oxc_parser::Parser;
use oxc_span::SourceType;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use atlas_graph::{HookUsage, ImportRecord, NameClass, PropShape, Unit, classify_identifier};

use collector::{DeclarationCollector, RawDeclaration};
use hooks::{HookCall, HookCallCollector, is_built_in_hook};

/// One already-read source file handed to the parser by the caller.
///
/// Directory traversal, exclusion rules, and permission handling belong to the
/// file-acquisition side; the parser only ever sees `(path, extension,
/// content)` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    /// Extension including the dot: `.ts`, `.tsx`, `.js`, `.jsx`.
    pub extension: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(
        path: impl Into<String>,
        extension: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
            content: content.into(),
        }
    }
}

/// Grammar selection: the TypeScript plugin is enabled only for `.ts`/`.tsx`;
/// plain JavaScript still parses with JSX enabled.
fn source_type_for(extension: &str) -> SourceType {
    match extension {
        ".tsx" => SourceType::tsx(),
        ".ts" => SourceType::ts(),
        _ => SourceType::jsx(),
    }
}

/// Parse one file into its declared units.
///
/// Never returns an error: malformed source logs a warning and yields an empty
/// vector (partial-failure isolation).
pub fn parse_source(file: &SourceFile) -> Vec<Unit> {
    let allocator = Allocator::default();
    let source_type = source_type_for(&file.extension);
    let parsed = Parser::new(&allocator, &file.content, source_type).parse();

    if parsed.panicked || !parsed.errors.is_empty() {
        warn!(
            path = %file.path,
            errors = parsed.errors.len(),
            "failed to parse source file, skipping"
        );
        return Vec::new();
    }

    let mut declarations = DeclarationCollector::new(&file.content);
    declarations.visit_program(&parsed.program);

    let mut hook_calls = HookCallCollector::default();
    hook_calls.visit_program(&parsed.program);

    let imports = collect_imports(&parsed.program);

    let units = assemble_units(
        file,
        declarations.declarations,
        declarations.prop_shapes,
        &hook_calls.calls,
        imports,
    );
    debug!(path = %file.path, units = units.len(), "parsed source file");
    units
}

/// Parse many files, fanning out per-file work on the rayon pool.
///
/// Each file's parse is independent; the collect is the single merge barrier
/// before graph construction, and output order follows input order.
pub fn parse_sources(files: &[SourceFile]) -> Vec<Unit> {
    files
        .par_iter()
        .map(parse_source)
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Collect import statements once per file, in source order.
fn collect_imports(program: &Program) -> Vec<ImportRecord> {
    let mut records = Vec::new();
    for statement in &program.body {
        let Some(ModuleDeclaration::ImportDeclaration(import)) = statement.as_module_declaration()
        else {
            continue;
        };
        let mut specifiers = Vec::new();
        if let Some(specs) = &import.specifiers {
            for spec in specs {
                let local = match spec {
                    ImportDeclarationSpecifier::ImportSpecifier(named) => &named.local,
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => &default.local,
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace) => {
                        &namespace.local
                    }
                };
                specifiers.push(local.name.to_string());
            }
        }
        records.push(ImportRecord::new(import.source.value.to_string(), specifiers));
    }
    records
}

/// Assemble final units: attribute hook calls to their innermost declaration,
/// derive dependency names, attach prop shapes, and measure size.
fn assemble_units(
    file: &SourceFile,
    declarations: Vec<RawDeclaration>,
    prop_shapes: Vec<PropShape>,
    hook_calls: &[HookCall],
    imports: Vec<ImportRecord>,
) -> Vec<Unit> {
    // Import specifiers that can resolve to declared units: anything
    // component-like from a likely-component import.
    let import_dependencies: Vec<String> = imports
        .iter()
        .filter(|record| record.is_likely_component)
        .flat_map(|record| record.specifiers.iter())
        .filter(|name| classify_identifier(name) != NameClass::NotCandidate)
        .cloned()
        .collect();

    // Innermost-enclosing declaration per hook call.
    let mut calls_by_declaration: Vec<Vec<&HookCall>> = vec![Vec::new(); declarations.len()];
    for call in hook_calls {
        let owner = declarations
            .iter()
            .enumerate()
            .filter(|(_, decl)| decl.contains(call.offset))
            .min_by_key(|(_, decl)| decl.span_len())
            .map(|(i, _)| i);
        if let Some(i) = owner {
            calls_by_declaration[i].push(call);
        }
    }

    declarations
        .into_iter()
        .enumerate()
        .map(|(i, decl)| {
            let body = &file.content[decl.span.start as usize..decl.span.end as usize];
            let lines_of_code = body.matches('\n').count() + 1;

            // Count hook usages by occurrence, keeping first-seen order.
            let mut hook_usages: Vec<HookUsage> = Vec::new();
            for call in &calls_by_declaration[i] {
                match hook_usages.iter_mut().find(|u| u.name == call.name) {
                    Some(usage) => usage.count += 1,
                    None => hook_usages.push(HookUsage {
                        name: call.name.clone(),
                        count: 1,
                    }),
                }
            }

            // Dependency names: component-like import specifiers plus custom
            // hook calls, de-duplicated, self excluded.
            let mut dependency_names: Vec<String> = Vec::new();
            let add_dependency = |name: &str, out: &mut Vec<String>| {
                if name != decl.name && !out.iter().any(|n| n == name) {
                    out.push(name.to_string());
                }
            };
            for name in &import_dependencies {
                add_dependency(name, &mut dependency_names);
            }
            for usage in &hook_usages {
                if !is_built_in_hook(&usage.name) {
                    add_dependency(&usage.name, &mut dependency_names);
                }
            }

            let mut prop_shape = prop_shapes
                .iter()
                .find(|shape| shape.type_name == format!("{}Props", decl.name))
                .cloned();
            if let Some(shape) = &mut prop_shape {
                props::apply_defaults(shape, &decl.param_defaults);
            }

            Unit::new(&decl.name, &file.path, decl.kind)
                .with_dependency_names(dependency_names)
                .with_imports(imports.clone())
                .with_hook_usages(hook_usages)
                .with_prop_shape(prop_shape)
                .with_lines_of_code(lines_of_code)
        })
        .collect()
}

#[cfg(test)]
mod tests;
