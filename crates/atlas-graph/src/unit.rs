//! Parsed unit model: the candidate components and hooks a parser found.

use serde::{Deserialize, Serialize};

/// Stable identifier for a unit: `<file_path>::<name>`.
pub type UnitId = String;

/// The declaration shape a unit was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// `function Button() {}` or a variable initialized to a function expression.
    Function,
    /// `const Button = () => {}`.
    Arrow,
    /// `class Button extends Component {}`.
    Class,
    /// Any declaration whose identifier matches `use[A-Z]...`.
    Hook,
}

/// One import statement collected from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// The raw module specifier (`./Button`, `react`, `@scope/pkg`).
    pub source: String,
    /// Local binding names introduced by the import.
    pub specifiers: Vec<String>,
    /// Heuristic: relative/absolute sources always qualify; package sources
    /// qualify only when some binding is PascalCase.
    pub is_likely_component: bool,
}

impl ImportRecord {
    /// Build a record, deriving the component-likeness flag from the source
    /// shape and specifier names.
    pub fn new(source: impl Into<String>, specifiers: Vec<String>) -> Self {
        let source = source.into();
        let is_likely_component = Self::is_local_source(&source)
            || specifiers.iter().any(|s| crate::naming::is_pascal_case(s));
        Self {
            source,
            specifiers,
            is_likely_component,
        }
    }

    /// Relative or absolute path sources point inside the analyzed tree.
    pub fn is_local_source(source: &str) -> bool {
        source.starts_with('.') || source.starts_with('/')
    }

    /// True when the source names an external package rather than a file.
    pub fn is_external(&self) -> bool {
        !Self::is_local_source(&self.source)
    }
}

/// A hook call observed inside a unit body, counted by occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookUsage {
    pub name: String,
    pub count: usize,
}

/// One property of a parsed `XxxProps` interface or type alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropEntry {
    pub name: String,
    /// Source text of the type annotation, when present.
    pub ty: Option<String>,
    pub required: bool,
    /// Source text of a destructuring default (`{ size = "md" }`), when present.
    pub default: Option<String>,
}

/// The prop contract of a component, recovered from a sibling
/// `${Name}Props` interface or type alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropShape {
    pub type_name: String,
    pub properties: Vec<PropEntry>,
}

/// A parsed candidate component or custom hook declaration.
///
/// Units are created once per detected declaration during parsing and never
/// mutated afterwards; the graph builder only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub file_path: String,
    pub kind: UnitKind,
    /// De-duplicated union of component-like import specifiers and custom hook
    /// call names, excluding self-reference. Resolved against declared unit
    /// names at graph-build time; unresolved entries are silently dropped.
    pub dependency_names: Vec<String>,
    pub imports: Vec<ImportRecord>,
    pub hook_usages: Vec<HookUsage>,
    pub prop_shape: Option<PropShape>,
    /// Proxy line count from the declaration's source span.
    pub lines_of_code: usize,
}

impl Unit {
    /// Create a unit with the deterministic `<file_path>::<name>` id.
    pub fn new(name: impl Into<String>, file_path: impl Into<String>, kind: UnitKind) -> Self {
        let name = name.into();
        let file_path = file_path.into();
        Self {
            id: unit_id(&file_path, &name),
            name,
            file_path,
            kind,
            dependency_names: Vec::new(),
            imports: Vec::new(),
            hook_usages: Vec::new(),
            prop_shape: None,
            lines_of_code: 1,
        }
    }

    pub fn with_dependency_names(mut self, names: Vec<String>) -> Self {
        self.dependency_names = names;
        self
    }

    pub fn with_imports(mut self, imports: Vec<ImportRecord>) -> Self {
        self.imports = imports;
        self
    }

    pub fn with_hook_usages(mut self, usages: Vec<HookUsage>) -> Self {
        self.hook_usages = usages;
        self
    }

    pub fn with_prop_shape(mut self, shape: Option<PropShape>) -> Self {
        self.prop_shape = shape;
        self
    }

    pub fn with_lines_of_code(mut self, lines: usize) -> Self {
        self.lines_of_code = lines;
        self
    }

    /// Total hook call occurrences across all hook names.
    pub fn hook_call_total(&self) -> usize {
        self.hook_usages.iter().map(|usage| usage.count).sum()
    }

    /// Number of parsed prop entries (zero without a prop shape).
    pub fn prop_count(&self) -> usize {
        self.prop_shape
            .as_ref()
            .map_or(0, |shape| shape.properties.len())
    }

    /// Count of distinct external package sources imported by this unit's file.
    pub fn external_library_count(&self) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        for import in self.imports.iter().filter(|i| i.is_external()) {
            if !seen.contains(&import.source.as_str()) {
                seen.push(&import.source);
            }
        }
        seen.len()
    }

    /// True when the unit lives in a framework entry-point file.
    pub fn is_root_file(&self) -> bool {
        crate::naming::is_root_file(&self.file_path)
    }
}

/// Deterministic unit id from file path and declared name.
pub fn unit_id(file_path: &str, name: &str) -> UnitId {
    format!("{file_path}::{name}")
}
