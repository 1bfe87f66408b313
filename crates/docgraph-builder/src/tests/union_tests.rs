use super::*;
use crate::options::BuildOptions;
use docgraph_oracle::{Literal, MemoryOracle, TypeId};

fn boolean_literal(value: bool) -> TypeOrRef {
    TypeOrRef::inline(TypeNode::Literal(LiteralValue::Boolean(value)))
}

fn union_of(graph: &mut TypeGraph<'_, MemoryOracle>, ty: TypeId) -> UnionNode {
    match graph.build(ty).unwrap() {
        TypeOrRef::Inline(node) => match *node {
            TypeNode::Union(union) => union,
            other => panic!("expected union, got {other:?}"),
        },
        TypeOrRef::Ref(name) => panic!("expected inline union, got reference {name}"),
    }
}

#[test]
fn test_boolean_recombination() {
    let mut oracle = MemoryOracle::new();
    let ty = oracle.union(vec![TypeId::TRUE, TypeId::FALSE, TypeId::NUMBER]);
    let mut graph = TypeGraph::new(&oracle, BuildOptions::default());

    let union = union_of(&mut graph, ty);
    assert_eq!(
        union.types,
        [TypeOrRef::inline(TypeNode::Boolean), TypeOrRef::inline(TypeNode::Number)]
    );
    assert!(union.non_nullable.is_none());
}

#[test]
fn test_nullable_reassembly_keeps_alias() {
    let mut oracle = MemoryOracle::new();
    let a = oracle.literal_string("a");
    let b = oracle.literal_string("b");
    let aliased = oracle.union(vec![a, b]);
    oracle.alias(aliased, "AliasedString", Vec::new());
    let optional = oracle.union(vec![aliased, TypeId::UNDEFINED]);
    let mut graph = TypeGraph::new(&oracle, BuildOptions::default());

    let union = union_of(&mut graph, optional);
    assert_eq!(
        union.types,
        [
            TypeOrRef::reference("AliasedString"),
            TypeOrRef::inline(TypeNode::Undefined)
        ]
    );
    assert_eq!(union.non_nullable, Some(TypeOrRef::reference("AliasedString")));

    let types = graph.finish().unwrap();
    let aliased = types.get("AliasedString").and_then(TypeNode::as_union).unwrap();
    assert_eq!(aliased.types.len(), 2);
}

#[test]
fn test_unaliased_non_nullable_union_is_spliced() {
    let mut oracle = MemoryOracle::new();
    let ty = oracle.union(vec![TypeId::STRING, TypeId::NULL, TypeId::NUMBER, TypeId::UNDEFINED]);
    let mut graph = TypeGraph::new(&oracle, BuildOptions::default());

    let union = union_of(&mut graph, ty);
    assert_eq!(
        union.types,
        [
            TypeOrRef::inline(TypeNode::String),
            TypeOrRef::inline(TypeNode::Number),
            TypeOrRef::inline(TypeNode::Null),
            TypeOrRef::inline(TypeNode::Undefined),
        ]
    );
    let non_nullable = union.non_nullable.as_ref().and_then(TypeOrRef::as_inline);
    assert!(matches!(non_nullable, Some(TypeNode::Union(inner)) if inner.types.len() == 2));
}

#[test]
fn test_optional_boolean() {
    let mut oracle = MemoryOracle::new();
    let ty = oracle.union(vec![TypeId::BOOLEAN, TypeId::UNDEFINED]);
    let mut graph = TypeGraph::new(&oracle, BuildOptions::default());

    let union = union_of(&mut graph, ty);
    assert_eq!(
        union.types,
        [TypeOrRef::inline(TypeNode::Boolean), TypeOrRef::inline(TypeNode::Undefined)]
    );
    assert_eq!(union.non_nullable, Some(TypeOrRef::inline(TypeNode::Boolean)));
}

#[test]
fn test_all_nullable_union() {
    let mut oracle = MemoryOracle::new();
    let ty = oracle.union(vec![TypeId::NULL, TypeId::UNDEFINED]);
    let mut graph = TypeGraph::new(&oracle, BuildOptions::default());

    let union = union_of(&mut graph, ty);
    assert_eq!(
        union.types,
        [TypeOrRef::inline(TypeNode::Null), TypeOrRef::inline(TypeNode::Undefined)]
    );
    assert!(union.non_nullable.is_none());
}

#[test]
fn test_enum_union_is_referenced_by_name() {
    let mut oracle = MemoryOracle::new();
    let color = oracle.enum_type("Color", vec![Literal::Number(0.0), Literal::Number(1.0)]);
    let mut graph = TypeGraph::new(&oracle, BuildOptions::default());

    assert_eq!(graph.build(color).unwrap(), TypeOrRef::reference("Color"));
    let types = graph.finish().unwrap();
    let union = types.get("Color").and_then(TypeNode::as_union).unwrap();
    assert_eq!(
        union.types[1],
        TypeOrRef::inline(TypeNode::Literal(LiteralValue::Number(1.0)))
    );
}

#[test]
fn test_recombine_uses_smaller_index() {
    let mut types = vec![
        TypeOrRef::inline(TypeNode::String),
        boolean_literal(false),
        TypeOrRef::inline(TypeNode::Number),
        boolean_literal(true),
    ];
    recombine_boolean(&mut types);
    assert_eq!(
        types,
        [
            TypeOrRef::inline(TypeNode::String),
            TypeOrRef::inline(TypeNode::Boolean),
            TypeOrRef::inline(TypeNode::Number),
        ]
    );
}

#[test]
fn test_recombine_needs_both_literals() {
    let mut types = vec![boolean_literal(true), TypeOrRef::inline(TypeNode::Number)];
    let before = types.clone();
    recombine_boolean(&mut types);
    assert_eq!(types, before);
}
