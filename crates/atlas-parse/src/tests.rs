use atlas_graph::{DependencyGraph, UnitKind};

use crate::{SourceFile, parse_source, parse_sources};

fn tsx(path: &str, content: &str) -> SourceFile {
    SourceFile::new(path, ".tsx", content)
}

#[test]
fn function_declaration_becomes_a_function_unit() {
    let units = parse_source(&tsx(
        "src/Button.tsx",
        "export function Button() { return <button />; }",
    ));
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "Button");
    assert_eq!(units[0].id, "src/Button.tsx::Button");
    assert_eq!(units[0].kind, UnitKind::Function);
}

#[test]
fn arrow_and_function_expressions_keep_their_shape() {
    let units = parse_source(&tsx(
        "src/shapes.tsx",
        r#"
export const Card = () => <div />;
export const Panel = function () { return <div />; };
"#,
    ));
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].name, "Card");
    assert_eq!(units[0].kind, UnitKind::Arrow);
    assert_eq!(units[1].name, "Panel");
    assert_eq!(units[1].kind, UnitKind::Function);
}

#[test]
fn class_declaration_becomes_a_class_unit() {
    let units = parse_source(&tsx(
        "src/Legacy.tsx",
        "export class LegacyView extends Component { render() { return null; } }",
    ));
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].kind, UnitKind::Class);
}

#[test]
fn hook_naming_overrides_declaration_shape() {
    let units = parse_source(&tsx(
        "src/useAuth.ts",
        "export function useAuth() { return useContext(AuthContext); }",
    ));
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].kind, UnitKind::Hook);
}

#[test]
fn lowercase_declarations_are_not_candidates() {
    let units = parse_source(&tsx(
        "src/util.ts",
        r#"
export function formatDate(d) { return d.toISOString(); }
const helper = () => 1;
class config {}
const user = { name: "x" };
"#,
    ));
    assert!(units.is_empty());
}

#[test]
fn malformed_source_yields_no_units() {
    let units = parse_source(&tsx("src/broken.tsx", "const = function {{{"));
    assert!(units.is_empty());
}

#[test]
fn typescript_syntax_only_parses_in_typescript_files() {
    let source = "interface WidgetProps { id: string }\nexport const Widget = () => <div />;";
    let ts_units = parse_source(&tsx("src/Widget.tsx", source));
    assert_eq!(ts_units.len(), 1);
    assert!(ts_units[0].prop_shape.is_some());

    // The same text in a .js file is a syntax error and degrades to nothing.
    let js_units = parse_source(&SourceFile::new("src/Widget.js", ".js", source));
    assert!(js_units.is_empty());
}

#[test]
fn component_like_imports_become_dependency_names() {
    let units = parse_source(&tsx(
        "src/App.tsx",
        r#"
import { Button } from "./Button";
import Header from "./Header";
import { debounce } from "lodash";
import { Dialog } from "@radix-ui/react-dialog";

export const App = () => <Header><Button /><Dialog /></Header>;
"#,
    ));
    assert_eq!(units.len(), 1);
    // Relative sources qualify outright; package sources need a PascalCase
    // binding, so lodash's debounce is dropped twice over (source and casing).
    assert_eq!(units[0].dependency_names, vec!["Button", "Header", "Dialog"]);
    assert_eq!(units[0].imports.len(), 4);
    assert_eq!(units[0].external_library_count(), 2);
}

#[test]
fn hook_calls_are_counted_per_name() {
    let units = parse_source(&tsx(
        "src/Form.tsx",
        r#"
import { useForm } from "./useForm";

export const Form = () => {
  const [a] = useState(0);
  const [b] = useState(1);
  useEffect(() => {}, []);
  const form = useForm();
  return <form />;
};
"#,
    ));
    assert_eq!(units.len(), 1);
    let usages = &units[0].hook_usages;
    assert_eq!(usages.len(), 3);
    assert_eq!(usages[0].name, "useState");
    assert_eq!(usages[0].count, 2);
    assert_eq!(units[0].hook_call_total(), 4);
    // Built-in hooks never become dependencies; the custom one does, and the
    // import-derived entry is not duplicated by the call.
    assert_eq!(units[0].dependency_names, vec!["useForm"]);
}

#[test]
fn hook_calls_attach_to_the_innermost_declaration() {
    let units = parse_source(&tsx(
        "src/Outer.tsx",
        r#"
export const Outer = () => {
  const useLocal = () => {
    return useState(0);
  };
  const [v] = useLocal();
  return <div>{v}</div>;
};
"#,
    ));
    assert_eq!(units.len(), 2);
    let outer = units.iter().find(|u| u.name == "Outer").unwrap();
    let local = units.iter().find(|u| u.name == "useLocal").unwrap();
    // useState lands on the nested hook, not on Outer.
    assert_eq!(local.hook_usages.len(), 1);
    assert_eq!(local.hook_usages[0].name, "useState");
    assert_eq!(outer.hook_usages.len(), 1);
    assert_eq!(outer.hook_usages[0].name, "useLocal");
    assert_eq!(outer.dependency_names, vec!["useLocal"]);
}

#[test]
fn prop_shape_is_matched_by_name_and_defaults_applied() {
    let units = parse_source(&tsx(
        "src/Button.tsx",
        r#"
interface ButtonProps {
  label: string;
  size?: string;
  onClick: () => void;
}

export function Button({ label, size = "md", onClick }: ButtonProps) {
  return <button onClick={onClick}>{label}</button>;
}
"#,
    ));
    assert_eq!(units.len(), 1);
    let shape = units[0].prop_shape.as_ref().unwrap();
    assert_eq!(shape.type_name, "ButtonProps");
    assert_eq!(shape.properties.len(), 3);

    let label = &shape.properties[0];
    assert!(label.required);
    assert_eq!(label.ty.as_deref(), Some("string"));
    assert_eq!(label.default, None);

    let size = &shape.properties[1];
    assert!(!size.required);
    assert_eq!(size.default.as_deref(), Some("\"md\""));

    assert_eq!(shape.properties[2].ty.as_deref(), Some("() => void"));
    assert_eq!(units[0].prop_count(), 3);
}

#[test]
fn type_alias_props_also_match() {
    let units = parse_source(&tsx(
        "src/Badge.tsx",
        r#"
type BadgeProps = { label: string };
export const Badge = ({ label }: BadgeProps) => <span>{label}</span>;
"#,
    ));
    assert_eq!(units.len(), 1);
    let shape = units[0].prop_shape.as_ref().unwrap();
    assert_eq!(shape.type_name, "BadgeProps");
    assert_eq!(shape.properties.len(), 1);
}

#[test]
fn units_without_a_matching_props_type_have_no_shape() {
    let units = parse_source(&tsx(
        "src/Pair.tsx",
        r#"
interface CardProps { title: string }
export const Card = ({ title }: CardProps) => <div>{title}</div>;
export const Footer = () => <footer />;
"#,
    ));
    assert_eq!(units.len(), 2);
    assert!(units[0].prop_shape.is_some());
    assert!(units[1].prop_shape.is_none());
}

#[test]
fn self_reference_through_imports_is_excluded() {
    let units = parse_source(&tsx(
        "src/Button.tsx",
        r#"
import { Button as Base } from "./base";
export const Button = () => <Base />;
"#,
    ));
    assert_eq!(units.len(), 1);
    // The local binding is "Base"; a hypothetical "Button" entry would have
    // been stripped as self.
    assert_eq!(units[0].dependency_names, vec!["Base"]);
}

#[test]
fn line_count_follows_the_declaration_span() {
    let units = parse_source(&tsx(
        "src/Tall.tsx",
        "export function Tall() {\n  const a = 1;\n  return <div>{a}</div>;\n}\n",
    ));
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].lines_of_code, 4);
}

#[test]
fn parse_sources_isolates_bad_files_and_keeps_order() {
    let files = vec![
        tsx("src/A.tsx", "export const Alpha = () => <div />;"),
        tsx("src/broken.tsx", "const = }{"),
        tsx("src/B.tsx", "export const Beta = () => <div />;"),
    ];
    let units = parse_sources(&files);
    let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[test]
fn parsed_units_feed_straight_into_graph_construction() {
    let files = vec![
        tsx(
            "src/App.tsx",
            r#"
import { Button } from "./Button";
export const App = () => <Button />;
"#,
        ),
        tsx("src/Button.tsx", "export const Button = () => <button />;"),
    ];
    let graph = DependencyGraph::build(parse_sources(&files));
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].from, "src/App.tsx::App");
    assert_eq!(graph.edges()[0].to, "src/Button.tsx::Button");

    let app = graph.node_by_name("App").unwrap();
    let button = graph.node_by_name("Button").unwrap();
    assert_eq!(app.depth, 0);
    assert_eq!(button.depth, 1);
}
