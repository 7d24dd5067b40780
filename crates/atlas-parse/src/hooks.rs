//! Hook call detection inside candidate declaration bodies.

use oxc_ast::ast::{CallExpression, Expression};
use oxc_ast_visit::{Visit, walk};

use atlas_graph::is_hook_name;

/// React's built-in hook names. Calls to these count toward hook usage but do
/// not become dependency edges; only custom hooks can resolve to a declared
/// unit.
pub(crate) const BUILT_IN_HOOKS: &[&str] = &[
    "useState",
    "useEffect",
    "useContext",
    "useReducer",
    "useCallback",
    "useMemo",
    "useRef",
    "useImperativeHandle",
    "useLayoutEffect",
    "useInsertionEffect",
    "useDebugValue",
    "useDeferredValue",
    "useTransition",
    "useId",
    "useSyncExternalStore",
    "useOptimistic",
    "useActionState",
];

pub(crate) fn is_built_in_hook(name: &str) -> bool {
    BUILT_IN_HOOKS.contains(&name)
}

/// One observed `use[A-Z]...` call: name plus byte offset of the call, used to
/// attribute the call to the innermost enclosing declaration.
#[derive(Debug, Clone)]
pub(crate) struct HookCall {
    pub name: String,
    pub offset: u32,
}

/// AST visitor collecting every bare-identifier hook call in the file.
///
/// Member calls (`React.useState(...)`) are deliberately not matched; the
/// identifier heuristic only applies to plain callee names.
#[derive(Default)]
pub(crate) struct HookCallCollector {
    pub calls: Vec<HookCall>,
}

impl<'ast> Visit<'ast> for HookCallCollector {
    fn visit_call_expression(&mut self, call: &CallExpression<'ast>) {
        if let Expression::Identifier(ident) = &call.callee {
            if is_hook_name(&ident.name) {
                self.calls.push(HookCall {
                    name: ident.name.to_string(),
                    offset: call.span.start,
                });
            }
        }
        walk::walk_call_expression(self, call);
    }
}
