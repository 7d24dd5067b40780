//! Prop shape extraction from `${Name}Props` interfaces and type aliases,
//! plus destructuring defaults from component parameters.

use oxc_ast::ast::{
    BindingPatternKind, FormalParameters, PropertyKey, TSInterfaceDeclaration, TSSignature,
    TSType, TSTypeAliasDeclaration,
};
use oxc_span::GetSpan;

use atlas_graph::{PropEntry, PropShape};

/// Slice source text for a span.
fn slice(source: &str, span: oxc_span::Span) -> &str {
    &source[span.start as usize..span.end as usize]
}

fn property_key_name(key: &PropertyKey) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.to_string()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        _ => None,
    }
}

fn entries_from_signatures(members: &[TSSignature], source: &str) -> Vec<PropEntry> {
    let mut entries = Vec::new();
    for member in members {
        let TSSignature::TSPropertySignature(sig) = member else {
            continue;
        };
        let Some(name) = property_key_name(&sig.key) else {
            continue;
        };
        let ty = sig
            .type_annotation
            .as_ref()
            .map(|ann| slice(source, ann.type_annotation.span()).trim().to_string());
        entries.push(PropEntry {
            name,
            ty,
            required: !sig.optional,
            default: None,
        });
    }
    entries
}

/// Parse a `${Name}Props` interface into a prop shape.
pub(crate) fn shape_from_interface(
    decl: &TSInterfaceDeclaration,
    source: &str,
) -> Option<PropShape> {
    let type_name = decl.id.name.to_string();
    if !type_name.ends_with("Props") {
        return None;
    }
    Some(PropShape {
        type_name,
        properties: entries_from_signatures(&decl.body.body, source),
    })
}

/// Parse a `type ${Name}Props = { ... }` alias into a prop shape.
///
/// Only object-literal aliases carry properties; mapped or union aliases yield
/// an empty property list but still register the shape.
pub(crate) fn shape_from_type_alias(
    decl: &TSTypeAliasDeclaration,
    source: &str,
) -> Option<PropShape> {
    let type_name = decl.id.name.to_string();
    if !type_name.ends_with("Props") {
        return None;
    }
    let properties = match &decl.type_annotation {
        TSType::TSTypeLiteral(literal) => entries_from_signatures(&literal.members, source),
        _ => Vec::new(),
    };
    Some(PropShape {
        type_name,
        properties,
    })
}

/// Harvest literal defaults from a destructured first parameter:
/// `function Button({ size = "md" })` yields `("size", "\"md\"")`.
pub(crate) fn destructured_defaults(
    params: &FormalParameters,
    source: &str,
) -> Vec<(String, String)> {
    let mut defaults = Vec::new();
    let Some(first) = params.items.first() else {
        return defaults;
    };
    let BindingPatternKind::ObjectPattern(object) = &first.pattern.kind else {
        return defaults;
    };
    for property in &object.properties {
        let Some(name) = property_key_name(&property.key) else {
            continue;
        };
        if let BindingPatternKind::AssignmentPattern(assignment) = &property.value.kind {
            let text = slice(source, assignment.right.span()).trim().to_string();
            defaults.push((name, text));
        }
    }
    defaults
}

/// Fill `default` entries on a prop shape from a component's destructuring
/// defaults, matching by property name.
pub(crate) fn apply_defaults(shape: &mut PropShape, defaults: &[(String, String)]) {
    for entry in &mut shape.properties {
        if let Some((_, text)) = defaults.iter().find(|(name, _)| *name == entry.name) {
            entry.default = Some(text.clone());
        }
    }
}
