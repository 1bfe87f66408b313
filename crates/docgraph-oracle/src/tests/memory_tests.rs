use super::*;
use crate::kind::TypeKind;

#[test]
fn test_intrinsics_are_preregistered() {
    let oracle = MemoryOracle::new();

    assert_eq!(oracle.type_count() as u32, TypeId::FIRST_USER);
    assert_eq!(oracle.type_to_string(TypeId::STRING), "string");
    assert_eq!(oracle.type_to_string(TypeId::BOOLEAN), "boolean");
    assert_eq!(oracle.kind_of(TypeId::BOOLEAN), TypeKind::Boolean);
    assert_eq!(oracle.kind_of(TypeId::TRUE), TypeKind::Literal);
    assert_eq!(oracle.kind_of(TypeId::OBJECT), TypeKind::Object);
    assert_eq!(oracle.types_of(TypeId::BOOLEAN), vec![TypeId::FALSE, TypeId::TRUE]);
}

#[test]
fn test_union_interning_by_member_set() {
    let mut oracle = MemoryOracle::new();
    let a = oracle.literal_string("a");
    let b = oracle.literal_string("b");

    let first = oracle.union(vec![a, b]);
    let second = oracle.union(vec![b, a]);

    assert_eq!(first, second);
    assert_eq!(oracle.types_of(first), vec![a, b]);
}

#[test]
fn test_union_of_true_false_is_boolean() {
    let mut oracle = MemoryOracle::new();
    let union = oracle.union(vec![TypeId::TRUE, TypeId::FALSE]);
    assert_eq!(union, TypeId::BOOLEAN);
}

#[test]
fn test_union_flattens_and_finds_aliased_non_nullable() {
    let mut oracle = MemoryOracle::new();
    let a = oracle.literal_string("a");
    let b = oracle.literal_string("b");
    let aliased = oracle.union(vec![a, b]);
    oracle.alias(aliased, "AliasedString", Vec::new());

    let optional = oracle.union(vec![aliased, TypeId::UNDEFINED]);

    assert_ne!(optional, aliased);
    assert_eq!(oracle.types_of(optional), vec![a, b, TypeId::UNDEFINED]);
    assert!(oracle.alias_of(optional).is_none());
    assert_eq!(oracle.non_nullable_of(optional), aliased);
    assert_eq!(oracle.non_nullable_of(aliased), aliased);
    assert_eq!(oracle.type_to_string(optional), "\"a\" | \"b\" | undefined");
}

#[test]
fn test_non_nullable_of_single_member() {
    let mut oracle = MemoryOracle::new();
    let optional = oracle.union(vec![TypeId::STRING, TypeId::NULL]);

    assert_eq!(oracle.non_nullable_of(optional), TypeId::STRING);
    assert_eq!(oracle.non_nullable_of(TypeId::NULL), TypeId::NEVER);
    assert_eq!(oracle.non_nullable_of(TypeId::NUMBER), TypeId::NUMBER);
}

#[test]
fn test_non_nullable_of_all_nullish_is_never() {
    let mut oracle = MemoryOracle::new();
    let nullish = oracle.union(vec![TypeId::NULL, TypeId::UNDEFINED]);
    assert_eq!(oracle.non_nullable_of(nullish), TypeId::NEVER);
}

#[test]
fn test_object_literals_are_distinct() {
    let mut oracle = MemoryOracle::new();
    let first = oracle.object_literal();
    oracle.add_property(first, PropertySpec::new("x", TypeId::NUMBER));
    let second = oracle.object_literal();
    oracle.add_property(second, PropertySpec::new("x", TypeId::NUMBER));

    assert_ne!(first, second);
    assert_eq!(oracle.type_to_string(first), oracle.type_to_string(second));
    assert_eq!(oracle.type_to_string(first), "{ x: number; }");
}

#[test]
fn test_array_and_tuple_shapes() {
    let mut oracle = MemoryOracle::new();
    let array = oracle.array(TypeId::STRING);
    let readonly = oracle.readonly_array(TypeId::STRING);
    let tuple = oracle.readonly_tuple(vec![TypeId::STRING, TypeId::NUMBER]);

    assert_eq!(oracle.kind_of(array), TypeKind::Array);
    assert_eq!(oracle.kind_of(tuple), TypeKind::Tuple);
    assert!(!oracle.is_readonly_array_like(array));
    assert!(oracle.is_readonly_array_like(readonly));
    assert_eq!(oracle.declared_name_of(array).as_deref(), Some("Array"));
    assert!(oracle.object_flags(array).contains(ObjectFlags::REFERENCE));
    assert_eq!(oracle.type_to_string(array), "string[]");
    assert_eq!(oracle.type_to_string(tuple), "readonly [string, number]");
}

#[test]
fn test_function_and_class_kinds() {
    let mut oracle = MemoryOracle::new();
    let p = oracle.parameter("value", TypeId::STRING);
    let function = oracle.function(vec![MemoryOracle::signature(vec![p], TypeId::VOID)]);
    let class = oracle.class("Date", vec![MemoryOracle::signature(Vec::new(), TypeId::OBJECT)]);
    let iface = oracle.interface("Props");

    assert_eq!(oracle.kind_of(function), TypeKind::Function);
    assert_eq!(oracle.kind_of(class), TypeKind::Constructible);
    assert_eq!(oracle.kind_of(iface), TypeKind::Interface);
}

#[test]
fn test_callable_with_properties_is_interface() {
    let mut oracle = MemoryOracle::new();
    let callable = oracle.function(vec![MemoryOracle::signature(Vec::new(), TypeId::VOID)]);
    oracle.add_property(callable, PropertySpec::new("displayName", TypeId::STRING));

    assert_eq!(oracle.kind_of(callable), TypeKind::Interface);
}

#[test]
fn test_recursive_interface_display_terminates() {
    let mut oracle = MemoryOracle::new();
    let recursive = oracle.interface("Recursive");
    oracle.add_property(recursive, PropertySpec::new("self", recursive));

    assert_eq!(oracle.type_to_string(recursive), "Recursive");
    assert_eq!(oracle.properties_of(recursive).len(), 1);
}

#[test]
fn test_symbol_metadata() {
    let mut oracle = MemoryOracle::new();
    let props = oracle.interface("Props");
    let symbol = oracle.add_property(
        props,
        PropertySpec::new("label", TypeId::STRING)
            .optional()
            .readonly()
            .description("The label.")
            .tag("default", Some("\"\""))
            .source("/src/Button.svelte"),
    );

    assert!(oracle.is_optional(symbol));
    assert!(oracle.is_readonly(symbol));
    assert_eq!(oracle.symbol_name(symbol), "label");
    assert_eq!(oracle.type_of_symbol(symbol), TypeId::STRING);
    let doc = oracle.documentation_of(symbol);
    assert_eq!(doc.text.as_deref(), Some("The label."));
    assert_eq!(doc.tags.len(), 1);
    assert_eq!(doc.tags[0].name, "default");
    assert_eq!(
        oracle.symbol_declaration_sources_of(symbol),
        vec!["/src/Button.svelte".to_string()]
    );
}

#[test]
fn test_instantiable_parts() {
    let mut oracle = MemoryOracle::new();
    let t = oracle.type_parameter("T");
    let keyof = oracle.index(t);
    let access = oracle.indexed_access(t, keyof);
    let conditional = oracle.conditional(ConditionalParts {
        check: t,
        extends: TypeId::STRING,
        true_type: TypeId::TRUE,
        false_type: TypeId::FALSE,
    });
    let template = oracle.template_literal(vec!["on", ""], vec![t]);
    let upper = oracle.string_mapping("Uppercase", t);

    assert_eq!(oracle.kind_of(t), TypeKind::TypeParameter);
    assert_eq!(oracle.index_operand_of(keyof), Some(t));
    assert_eq!(oracle.indexed_access_of(access), Some((t, keyof)));
    assert_eq!(oracle.type_to_string(conditional), "T extends string ? true : false");
    assert_eq!(oracle.type_to_string(template), "`on${T}`");
    assert_eq!(oracle.type_to_string(upper), "Uppercase<T>");
    assert_eq!(oracle.kind_of(template), TypeKind::TemplateLiteral);
}

#[test]
fn test_alias_metadata() {
    let mut oracle = MemoryOracle::new();
    let t = oracle.type_parameter("T");
    let maybe = oracle.union(vec![t, TypeId::NULL]);
    oracle.alias(maybe, "Maybe", vec![TypeId::STRING]);
    oracle.set_alias_source(maybe, "/src/types.ts");
    oracle.set_qualified_name(maybe, "\"/src/types\".Maybe");

    let alias = oracle.alias_of(maybe).expect("alias attached");
    assert_eq!(alias.name, "Maybe");
    assert_eq!(alias.qualified_name, "\"/src/types\".Maybe");
    assert_eq!(alias.source.as_deref(), Some("/src/types.ts"));
    assert_eq!(oracle.type_to_string(maybe), "Maybe<string>");
}

#[test]
fn test_opaque_type_is_unrecognized() {
    let mut oracle = MemoryOracle::new();
    let opaque = oracle.opaque(TypeFlags::empty(), "mystery");
    assert_eq!(oracle.kind_of(opaque), TypeKind::Unrecognized);
}

#[test]
fn test_enum_type() {
    let mut oracle = MemoryOracle::new();
    let color = oracle.enum_type(
        "Color",
        vec![Literal::Number(0.0), Literal::Number(1.0)],
    );

    assert!(oracle.flags(color).contains(TypeFlags::ENUM | TypeFlags::UNION));
    assert_eq!(oracle.kind_of(color), TypeKind::Union);
    assert_eq!(oracle.type_to_string(color), "Color");
    let members = oracle.types_of(color);
    assert_eq!(oracle.type_to_string(members[1]), "1");
}
