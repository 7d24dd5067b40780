//! Identifier classification heuristics.
//!
//! Whether a declaration is a component or a custom hook is decided purely by
//! its name: PascalCase identifiers are component candidates, `use`-prefixed
//! identifiers with an uppercase follow-up letter are hooks. This is a naming
//! convention, not a type-system guarantee, so the heuristic lives here as a
//! pure function that graph logic never needs to know the internals of.

/// Classification of a declared identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    /// PascalCase identifier - a component candidate.
    Component,
    /// Matches `use[A-Z]...` - a custom hook candidate.
    Hook,
    /// Neither convention applies; the declaration is ignored entirely.
    NotCandidate,
}

/// Classify a declared identifier by naming convention.
///
/// The hook check runs first: `useFoo` is PascalCase-adjacent in neither
/// direction, but a hook named `UseFoo` would otherwise be misread as a
/// component.
pub fn classify_identifier(name: &str) -> NameClass {
    if is_hook_name(name) {
        NameClass::Hook
    } else if is_pascal_case(name) {
        NameClass::Component
    } else {
        NameClass::NotCandidate
    }
}

/// True when the identifier starts with an uppercase ASCII letter.
///
/// JSX treats any capitalized identifier as a component reference, so the
/// check is intentionally just the first character.
pub fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// True when the identifier matches `use[A-Z]...`.
pub fn is_hook_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Entry-point filename stems that make a unit a "root" component.
///
/// These match framework routing conventions (`page.tsx`, `layout.tsx`,
/// `route.ts`); root status overrides complexity-based styling.
const ROOT_FILE_STEMS: &[&str] = &["page", "layout", "route"];

/// True when the file path names a framework entry-point file.
pub fn is_root_file(file_path: &str) -> bool {
    let file_name = file_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_path);
    let stem = file_name.split('.').next().unwrap_or(file_name);
    ROOT_FILE_STEMS.contains(&stem)
}
