//! `parse_component` end to end: configuration, extraction, transport and
//! host-side caching.

use std::fs;
use std::thread;

use docgraph::{
    ArtifactCache, ArtifactUpdate, ComponentShape, DocumentKey, ErrorCode, MemoryOracle,
    ParseConfig, ParseError, TypeOrRef, decode, encode, parse_component,
};
use docgraph_oracle::{PropertySpec, SymbolId, TypeId};
use serde_json::json;

const FILE: &str = "/src/Select.svelte";

struct Fixture {
    oracle: MemoryOracle,
    shape: ComponentShape<TypeId, SymbolId>,
}

/// A select box: an option list prop, a bindable value and a nested
/// recursive group type.
fn select_fixture() -> Fixture {
    let mut oracle = MemoryOracle::new();
    let group = oracle.interface("OptionGroup");
    let groups = oracle.array(group);
    oracle.add_property(group, PropertySpec::new("label", TypeId::STRING));
    oracle.add_property(group, PropertySpec::new("children", groups).optional());

    let value = oracle.union(vec![TypeId::STRING, TypeId::UNDEFINED]);
    let props = oracle.object_literal();
    oracle.add_property(props, PropertySpec::new("groups", groups).source(FILE));
    oracle.add_property(
        props,
        PropertySpec::new("value", value)
            .optional()
            .description("Selected option.")
            .source(FILE),
    );

    let mut shape = ComponentShape::new(FILE);
    shape.props = Some(props);
    shape.bindings.insert("value".into());
    Fixture { oracle, shape }
}

#[test]
fn test_parse_and_round_trip() {
    let Fixture { oracle, shape } = select_fixture();
    let component = parse_component(&oracle, &shape, &ParseConfig::default()).unwrap();

    assert_eq!(
        component.props["groups"].ty,
        TypeOrRef::reference("Array<OptionGroup>")
    );
    assert!(component.props["value"].is_bindable);
    assert_eq!(
        component.props["value"].description.as_deref(),
        Some("Selected option.")
    );
    let names: Vec<&str> = component.types.names().collect();
    assert_eq!(names, ["Array<OptionGroup>", "OptionGroup"]);

    let tree = encode(&component).unwrap();
    assert_eq!(tree["types"]["$map"][0][0], json!("Array<OptionGroup>"));
    assert_eq!(decode(&tree).unwrap(), component);
}

#[test]
fn test_output_is_deterministic() {
    let Fixture { oracle, shape } = select_fixture();
    let first = parse_component(&oracle, &shape, &ParseConfig::default()).unwrap();
    let second = parse_component(&oracle, &shape, &ParseConfig::default()).unwrap();
    assert_eq!(
        docgraph::to_json_string(&first, false).unwrap(),
        docgraph::to_json_string(&second, false).unwrap()
    );
}

#[test]
fn test_parses_on_separate_threads_are_isolated() {
    let Fixture { oracle, shape } = select_fixture();
    let expected = parse_component(&oracle, &shape, &ParseConfig::default()).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| parse_component(&oracle, &shape, &ParseConfig::default())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn test_config_depth_limit_aborts_parse() {
    let Fixture { oracle, shape } = select_fixture();
    let config = ParseConfig::from_json_str(r#"{"maxDepth": 2}"#).unwrap();

    let err = parse_component(&oracle, &shape, &config).unwrap_err();
    assert!(matches!(err, ParseError::Build(_)));
    assert_eq!(err.code(), ErrorCode::DepthExceeded);
}

#[test]
fn test_invalid_config_aborts_parse() {
    let Fixture { oracle, shape } = select_fixture();
    let config = ParseConfig {
        max_depth: Some(0),
        ..ParseConfig::default()
    };

    let err = parse_component(&oracle, &shape, &config).unwrap_err();
    assert!(matches!(err, ParseError::Config(_)));
    assert_eq!(err.code(), ErrorCode::InvalidConfig);
    assert!(err.code().docs_url().ends_with("#invalid-config"));
}

#[test]
fn test_document_key() {
    let a = DocumentKey::compute(FILE, "<script>let a;</script>");
    assert_eq!(a, DocumentKey::compute(FILE, "<script>let a;</script>"));
    assert_ne!(a, DocumentKey::compute(FILE, "<script>let b;</script>"));
    assert_ne!(a, DocumentKey::compute("/src/Other.svelte", "<script>let a;</script>"));
    assert_eq!(a.to_string().len(), 16);
}

#[test]
fn test_cached_document_reused_until_file_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Select.svelte");
    fs::write(&path, "<script>export let value;</script>").unwrap();

    let Fixture { oracle, shape } = select_fixture();
    let mut cache: ArtifactCache<serde_json::Value, String, ParseConfig> = ArtifactCache::new();

    let component = parse_component(&oracle, &shape, &ParseConfig::default()).unwrap();
    cache.set(
        path.clone(),
        ArtifactUpdate::new()
            .program(encode(&component).unwrap())
            .source(fs::read_to_string(&path).unwrap())
            .options(ParseConfig::default()),
    );

    let cached = cache.get(&path).and_then(|entry| entry.program.clone()).unwrap();
    assert_eq!(decode(&cached).unwrap(), component);

    fs::remove_file(&path).unwrap();
    assert!(cache.get(&path).is_none());
}
