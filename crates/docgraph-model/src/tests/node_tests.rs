use super::*;
use serde_json::json;

fn string() -> TypeOrRef {
    TypeOrRef::inline(TypeNode::String)
}

#[test]
fn test_base_kind_wire_form() {
    assert_eq!(serde_json::to_value(&TypeNode::Any).unwrap(), json!({ "kind": "any" }));
    assert_eq!(
        serde_json::to_value(&TypeNode::BigInt).unwrap(),
        json!({ "kind": "bigint" })
    );
    let node: TypeNode = serde_json::from_value(json!({ "kind": "object" })).unwrap();
    assert_eq!(node, TypeNode::Object);
}

#[test]
fn test_reference_is_plain_string() {
    let ty = TypeOrRef::reference("Recursive");
    assert_eq!(serde_json::to_value(&ty).unwrap(), json!("Recursive"));

    let back: TypeOrRef = serde_json::from_value(json!("Recursive")).unwrap();
    assert_eq!(back.as_reference().map(TypeRef::as_str), Some("Recursive"));

    let name = back.as_reference().cloned().map(TypeRef::into_string);
    assert_eq!(name.as_deref(), Some("Recursive"));
}

#[test]
fn test_inline_node_is_tagged_object() {
    let back: TypeOrRef = serde_json::from_value(json!({ "kind": "never" })).unwrap();
    assert_eq!(back.as_inline(), Some(&TypeNode::Never));
}

#[test]
fn test_literal_wire_form() {
    let node = TypeNode::Literal(LiteralValue::String("primary".into()));
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({ "kind": "literal", "subkind": "string", "value": "primary" })
    );

    let node: TypeNode =
        serde_json::from_value(json!({ "kind": "literal", "subkind": "number", "value": 3 }))
            .unwrap();
    assert_eq!(node, TypeNode::Literal(LiteralValue::Number(3.0)));

    let node: TypeNode =
        serde_json::from_value(json!({ "kind": "literal", "subkind": "bigint", "value": "10" }))
            .unwrap();
    assert_eq!(node, TypeNode::Literal(LiteralValue::BigInt("10".into())));
}

#[test]
fn test_array_node_flattens_metadata() {
    let node = TypeNode::Array(ArrayNode {
        element: string(),
        is_readonly: true,
        meta: TypeMeta {
            name: Some("ReadonlyArray".into()),
            ..TypeMeta::default()
        },
    });
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "kind": "array",
            "element": { "kind": "string" },
            "isReadonly": true,
            "name": "ReadonlyArray",
        })
    );
}

#[test]
fn test_interface_members_and_sources() {
    let node = TypeNode::Interface(InterfaceNode {
        members: [(
            "self",
            Member {
                is_optional: false,
                is_readonly: false,
                ty: TypeOrRef::reference("Recursive"),
            },
        )]
        .into_iter()
        .collect(),
        meta: TypeMeta {
            name: Some("Recursive".into()),
            sources: Some(["/src/types.ts"].into_iter().collect()),
            ..TypeMeta::default()
        },
    });

    let tree = serde_json::to_value(&node).unwrap();
    assert_eq!(
        tree,
        json!({
            "kind": "interface",
            "members": { "$map": [["self", { "isOptional": false, "isReadonly": false, "type": "Recursive" }]] },
            "name": "Recursive",
            "sources": { "$set": ["/src/types.ts"] },
        })
    );
    let back: TypeNode = serde_json::from_value(tree).unwrap();
    assert_eq!(back, node);
}

#[test]
fn test_union_omits_unset_non_nullable() {
    let node = TypeNode::Union(UnionNode {
        types: vec![TypeOrRef::inline(TypeNode::Boolean), TypeOrRef::inline(TypeNode::Number)],
        non_nullable: None,
        meta: TypeMeta::default(),
    });
    let tree = serde_json::to_value(&node).unwrap();
    assert_eq!(
        tree,
        json!({ "kind": "union", "types": [{ "kind": "boolean" }, { "kind": "number" }] })
    );
}

#[test]
fn test_unknown_kind_is_rejected() {
    let err = serde_json::from_value::<TypeNode>(json!({ "kind": "mapped" })).unwrap_err();
    assert!(err.to_string().contains("mapped"), "{err}");
}

#[test]
fn test_meta_slots() {
    let mut node = TypeNode::Index(IndexNode {
        ty: string(),
        meta: TypeMeta::default(),
    });
    node.meta_mut().unwrap().alias = Some("Keys".into());
    assert_eq!(node.meta().and_then(|m| m.alias.as_deref()), Some("Keys"));

    let mut param = TypeNode::TypeParameter(TypeParameterNode {
        name: "T".into(),
        is_const: false,
        constraint: None,
        default: None,
    });
    assert!(param.meta_mut().is_none());
    assert!(TypeNode::String.meta().is_none());
}

#[test]
fn test_kind_names_match_wire_tags() {
    let nodes = [
        TypeNode::Void,
        TypeNode::BigInt,
        TypeNode::Literal(LiteralValue::Boolean(true)),
        TypeNode::TemplateLiteral(TemplateLiteralNode {
            texts: vec!["on".into(), String::new()],
            types: vec![string()],
            meta: TypeMeta::default(),
        }),
        TypeNode::IndexedAccess(IndexedAccessNode {
            object: TypeOrRef::reference("T"),
            index: string(),
            meta: TypeMeta::default(),
        }),
    ];
    for node in nodes {
        let tree = serde_json::to_value(&node).unwrap();
        assert_eq!(tree["kind"], json!(node.kind_name()));
    }
}

#[test]
fn test_types_registry_resolve() {
    let mut types = Types::new();
    types.insert("Name", TypeNode::String);

    assert!(types.contains("Name"));
    assert_eq!(types.resolve(&TypeOrRef::reference("Name")), Some(&TypeNode::String));
    assert_eq!(types.resolve(&TypeOrRef::reference("Other")), None);
    let inline = TypeOrRef::inline(TypeNode::Number);
    assert_eq!(types.resolve(&inline), Some(&TypeNode::Number));

    types.insert("First", TypeNode::Never);
    types.insert("Name", TypeNode::Number);
    let names: Vec<&str> = types.names().collect();
    assert_eq!(names, ["Name", "First"]);
}
