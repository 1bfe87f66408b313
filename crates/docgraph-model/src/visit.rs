//! Traversal over the type positions of nodes and documents.

use crate::document::{Component, Prop};
use crate::node::{TypeNode, TypeOrRef, TypeRef};

/// Call `f` on every direct operand of `node`, in field order.
///
/// Inline operands are not descended into; use [`walk_refs`] for a deep walk.
pub fn for_each_child<'a>(node: &'a TypeNode, mut f: impl FnMut(&'a TypeOrRef)) {
    if let Some(meta) = node.meta() {
        meta.alias_type_args.iter().flatten().for_each(&mut f);
        meta.type_args.iter().flatten().for_each(&mut f);
    }
    match node {
        TypeNode::Array(array) => f(&array.element),
        TypeNode::Tuple(tuple) => tuple.elements.iter().for_each(f),
        TypeNode::Function(function) => {
            for call in &function.calls {
                call.parameters.iter().for_each(|param| f(&param.ty));
                f(&call.return_type);
            }
        }
        TypeNode::Constructible(constructible) => {
            for params in &constructible.constructors {
                params.iter().for_each(|param| f(&param.ty));
            }
        }
        TypeNode::Interface(interface) => {
            interface.members.values().for_each(|member| f(&member.ty));
        }
        TypeNode::Intersection(intersection) => intersection.types.iter().for_each(f),
        TypeNode::Union(union) => {
            union.types.iter().for_each(&mut f);
            if let Some(non_nullable) = &union.non_nullable {
                f(non_nullable);
            }
        }
        TypeNode::TypeParameter(param) => {
            param.constraint.iter().for_each(&mut f);
            param.default.iter().for_each(f);
        }
        TypeNode::Index(index) => f(&index.ty),
        TypeNode::IndexedAccess(access) => {
            f(&access.object);
            f(&access.index);
        }
        TypeNode::Conditional(conditional) => {
            f(&conditional.check);
            f(&conditional.extends);
            f(&conditional.true_type);
            f(&conditional.false_type);
        }
        TypeNode::Substitution(substitution) => {
            f(&substitution.base);
            f(&substitution.constraint);
        }
        TypeNode::TemplateLiteral(template) => template.types.iter().for_each(f),
        TypeNode::StringMapping(mapping) => f(&mapping.ty),
        TypeNode::Any
        | TypeNode::Unknown
        | TypeNode::Never
        | TypeNode::Null
        | TypeNode::Undefined
        | TypeNode::Void
        | TypeNode::Boolean
        | TypeNode::Number
        | TypeNode::String
        | TypeNode::BigInt
        | TypeNode::Symbol
        | TypeNode::Object
        | TypeNode::Literal(_) => {}
    }
}

/// Call `f` on every reference reachable from `ty` without following
/// references, descending through inline nodes.
pub fn walk_refs<'a>(ty: &'a TypeOrRef, f: &mut impl FnMut(&'a TypeRef)) {
    match ty {
        TypeOrRef::Ref(name) => f(name),
        TypeOrRef::Inline(node) => walk_node_refs(node, f),
    }
}

/// Like [`walk_refs`], starting at a node.
pub fn walk_node_refs<'a>(node: &'a TypeNode, f: &mut impl FnMut(&'a TypeRef)) {
    for_each_child(node, |child| walk_refs(child, &mut *f));
}

fn walk_prop_refs<'a>(prop: &'a Prop, f: &mut impl FnMut(&'a TypeRef)) {
    walk_refs(&prop.ty, f);
    if let Some(default) = &prop.default {
        walk_refs(default, f);
    }
}

/// Call `f` on every reference held anywhere in `component`: props, exports,
/// events, slots and the bodies of registry entries.
pub fn component_refs<'a>(component: &'a Component, mut f: impl FnMut(&'a TypeRef)) {
    for prop in component.props.values() {
        walk_prop_refs(prop, &mut f);
    }
    for ty in component.exports.values() {
        walk_refs(ty, &mut f);
    }
    for ty in component.events.iter().flat_map(|events| events.values()) {
        walk_refs(ty, &mut f);
    }
    for slot in component.slots.iter().flat_map(|slots| slots.values()) {
        for prop in slot.values() {
            walk_prop_refs(prop, &mut f);
        }
    }
    for (_, node) in component.types.iter() {
        walk_node_refs(node, &mut f);
    }
}
