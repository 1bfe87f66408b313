//! End-to-end extraction through the public API, checked against the
//! transport codec.

use docgraph_builder::{BuildOptions, ComponentShape, extract_component};
use docgraph_model::{Component, TypeNode, TypeOrRef, decode, encode};
use docgraph_oracle::{MemoryOracle, PropertySpec, SymbolId, TypeId};
use serde_json::json;

const FILE: &str = "/src/Tree.svelte";

fn extract(oracle: &MemoryOracle, shape: &ComponentShape<TypeId, SymbolId>) -> Component {
    extract_component(oracle, shape, BuildOptions::default()).expect("extraction succeeds")
}

fn shape_with_props(props: TypeId) -> ComponentShape<TypeId, SymbolId> {
    let mut shape = ComponentShape::new(FILE);
    shape.props = Some(props);
    shape
}

fn member_type<'a>(component: &'a Component, interface: &str, member: &str) -> &'a TypeOrRef {
    let node = component.types.get(interface).expect("registered interface");
    &node.as_interface().expect("interface node").members[member].ty
}

#[test]
fn test_self_recursive_interface() {
    let mut oracle = MemoryOracle::new();
    let recursive = oracle.interface("Recursive");
    oracle.add_property(recursive, PropertySpec::new("self", recursive));
    let props = oracle.object_literal();
    oracle.add_property(props, PropertySpec::new("node", recursive));

    let component = extract(&oracle, &shape_with_props(props));
    assert_eq!(component.props["node"].ty, TypeOrRef::reference("Recursive"));
    assert_eq!(
        member_type(&component, "Recursive", "self"),
        &TypeOrRef::reference("Recursive")
    );

    let decoded = decode(&encode(&component).unwrap()).unwrap();
    assert_eq!(decoded, component);
}

#[test]
fn test_mutual_optional_cycle() {
    let mut oracle = MemoryOracle::new();
    let a = oracle.interface("A");
    let b = oracle.interface("B");
    let maybe_b = oracle.union(vec![b, TypeId::UNDEFINED]);
    let maybe_a = oracle.union(vec![a, TypeId::UNDEFINED]);
    oracle.add_property(a, PropertySpec::new("b", maybe_b).optional());
    oracle.add_property(b, PropertySpec::new("a", maybe_a).optional());
    let props = oracle.object_literal();
    oracle.add_property(props, PropertySpec::new("root", a));

    let component = extract(&oracle, &shape_with_props(props));
    let names: Vec<&str> = component.types.names().collect();
    assert_eq!(names, ["A", "B"]);

    let a_to_b = member_type(&component, "A", "b");
    let b_to_a = member_type(&component, "B", "a");
    for (edge, target) in [(a_to_b, "B"), (b_to_a, "A")] {
        let Some(TypeNode::Union(union)) = edge.as_inline() else {
            panic!("expected an optional union, got {edge:?}");
        };
        assert_eq!(union.types[0], TypeOrRef::reference(target));
        assert_eq!(union.types[1], TypeOrRef::inline(TypeNode::Undefined));
    }

    let decoded = decode(&encode(&component).unwrap()).unwrap();
    assert_eq!(decoded, component);
}

#[test]
fn test_generic_dedup_across_props() {
    let mut oracle = MemoryOracle::new();
    let first = oracle.array(TypeId::STRING);
    let second = oracle.array(TypeId::STRING);
    let props = oracle.object_literal();
    oracle.add_property(props, PropertySpec::new("items", first));
    oracle.add_property(props, PropertySpec::new("selected", second));

    let component = extract(&oracle, &shape_with_props(props));
    assert_eq!(component.props["items"].ty, component.props["selected"].ty);
    assert_eq!(component.types.len(), 1);
    assert!(component.types.contains("Array<string>"));
}

#[test]
fn test_anonymous_shapes_are_isolated() {
    let mut oracle = MemoryOracle::new();
    let first = oracle.object_expression();
    oracle.add_property(first, PropertySpec::new("x", TypeId::NUMBER));
    let second = oracle.object_expression();
    oracle.add_property(second, PropertySpec::new("x", TypeId::NUMBER));
    let props = oracle.object_literal();
    oracle.add_property(props, PropertySpec::new("from", first));
    oracle.add_property(props, PropertySpec::new("to", second));

    let component = extract(&oracle, &shape_with_props(props));
    assert_eq!(component.props["from"].ty, TypeOrRef::reference("<anon:0>"));
    assert_eq!(component.props["to"].ty, TypeOrRef::reference("<anon:1>"));
    assert_eq!(component.types.len(), 2);
}

#[test]
fn test_empty_component_wire_form() {
    let mut oracle = MemoryOracle::new();
    let props = oracle.object_literal();

    let component = extract(&oracle, &shape_with_props(props));
    assert!(component.props.is_empty());
    assert!(component.types.is_empty());

    let value = encode(&component).unwrap();
    assert_eq!(value["props"], json!({ "$map": [] }));
    assert_eq!(value["types"], json!({ "$map": [] }));
    assert!(value.get("events").is_none());
}

#[test]
fn test_legacy_component_round_trip() {
    let mut oracle = MemoryOracle::new();
    let detail = oracle.interface("ToggleDetail");
    oracle.add_property(detail, PropertySpec::new("open", TypeId::BOOLEAN).readonly());
    let events = oracle.object_literal();
    oracle.add_property(events, PropertySpec::new("toggle", detail));
    let slot = oracle.object_literal();
    oracle.add_property(slot, PropertySpec::new("open", TypeId::BOOLEAN));
    let slots = oracle.object_literal();
    oracle.add_property(slots, PropertySpec::new("default", slot));
    let props = oracle.object_literal();
    oracle.add_property(
        props,
        PropertySpec::new("class", TypeId::STRING).source("/node_modules/svelte/elements.d.ts"),
    );
    oracle.add_property(props, PropertySpec::new("open", TypeId::BOOLEAN));
    let initial = oracle.literal_string("closed");

    let mut shape = shape_with_props(props);
    shape.is_legacy = true;
    shape.events = Some(events);
    shape.slots = Some(slots);
    shape.bindings.insert("open".into());
    shape.defaults.insert("class".into(), initial);

    let component = extract(&oracle, &shape);
    let value = encode(&component).unwrap();
    assert_eq!(
        value["props"]["$map"][0][1]["sources"],
        json!({ "$set": ["/node_modules/svelte/elements.d.ts"] })
    );
    assert_eq!(value["events"]["$map"][0][0], json!("on:toggle"));
    assert_eq!(value["events"]["$map"][0][1], json!("ToggleDetail"));
    assert_eq!(value["isLegacy"], json!(true));

    let decoded = decode(&value).unwrap();
    assert_eq!(decoded, component);
    assert!(decoded.props["open"].is_bindable);
    assert!(decoded.props["class"].is_optional);
    assert!(decoded.props["class"].is_extended);
}
