//! AST visitor collecting candidate declarations and prop type shapes.

use oxc_ast::ast::{
    BindingPatternKind, Class, Expression, Function, TSInterfaceDeclaration,
    TSTypeAliasDeclaration, VariableDeclarator,
};
use oxc_ast_visit::{Visit, walk};
use oxc_semantic::ScopeFlags;
use oxc_span::Span;

use atlas_graph::{NameClass, PropShape, UnitKind, classify_identifier};

use crate::props;

/// A qualifying declaration found in the file, before unit assembly.
#[derive(Debug)]
pub(crate) struct RawDeclaration {
    pub name: String,
    pub kind: UnitKind,
    pub span: Span,
    /// Destructuring defaults from the first parameter, for prop shapes.
    pub param_defaults: Vec<(String, String)>,
}

impl RawDeclaration {
    /// True when `offset` falls inside this declaration's source span.
    pub fn contains(&self, offset: u32) -> bool {
        self.span.start <= offset && offset < self.span.end
    }

    pub fn span_len(&self) -> u32 {
        self.span.end - self.span.start
    }
}

/// Walks top-level and nested declarations of the three qualifying shapes:
/// function declarations, variable declarators initialized to arrow/function
/// expressions, and class declarations. Lowercase-named functions never
/// qualify, which closes off most false positives up front.
pub(crate) struct DeclarationCollector<'a> {
    source: &'a str,
    pub declarations: Vec<RawDeclaration>,
    pub prop_shapes: Vec<PropShape>,
}

impl<'a> DeclarationCollector<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            declarations: Vec::new(),
            prop_shapes: Vec::new(),
        }
    }

    fn record(
        &mut self,
        name: &str,
        component_kind: UnitKind,
        span: Span,
        param_defaults: Vec<(String, String)>,
    ) {
        let kind = match classify_identifier(name) {
            NameClass::Hook => UnitKind::Hook,
            NameClass::Component => component_kind,
            NameClass::NotCandidate => return,
        };
        self.declarations.push(RawDeclaration {
            name: name.to_string(),
            kind,
            span,
            param_defaults,
        });
    }
}

impl<'a, 'ast> Visit<'ast> for DeclarationCollector<'a> {
    fn visit_function(&mut self, func: &Function<'ast>, flags: ScopeFlags) {
        // Anonymous function expressions are picked up through their variable
        // declarator instead.
        if let Some(id) = &func.id {
            let defaults = props::destructured_defaults(&func.params, self.source);
            self.record(&id.name, UnitKind::Function, func.span, defaults);
        }
        walk::walk_function(self, func, flags);
    }

    fn visit_class(&mut self, class: &Class<'ast>) {
        if let Some(id) = &class.id {
            self.record(&id.name, UnitKind::Class, class.span, Vec::new());
        }
        walk::walk_class(self, class);
    }

    fn visit_variable_declarator(&mut self, declarator: &VariableDeclarator<'ast>) {
        if let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind {
            match &declarator.init {
                Some(Expression::ArrowFunctionExpression(arrow)) => {
                    let defaults = props::destructured_defaults(&arrow.params, self.source);
                    self.record(&ident.name, UnitKind::Arrow, declarator.span, defaults);
                }
                Some(Expression::FunctionExpression(func)) => {
                    let defaults = props::destructured_defaults(&func.params, self.source);
                    self.record(&ident.name, UnitKind::Function, declarator.span, defaults);
                }
                _ => {}
            }
        }
        walk::walk_variable_declarator(self, declarator);
    }

    fn visit_ts_interface_declaration(&mut self, decl: &TSInterfaceDeclaration<'ast>) {
        if let Some(shape) = props::shape_from_interface(decl, self.source) {
            self.prop_shapes.push(shape);
        }
        walk::walk_ts_interface_declaration(self, decl);
    }

    fn visit_ts_type_alias_declaration(&mut self, decl: &TSTypeAliasDeclaration<'ast>) {
        if let Some(shape) = props::shape_from_type_alias(decl, self.source) {
            self.prop_shapes.push(shape);
        }
        walk::walk_ts_type_alias_declaration(self, decl);
    }
}
