//! Union normalization.
//!
//! A checker reports unions in fully distributed form: `boolean` becomes
//! `false | true`, and `Alias | undefined` becomes the alias members plus
//! `undefined`. Before a union node is emitted both expansions are folded
//! back:
//!
//! - nullable members are split off and the remaining non-nullable union is
//!   built once (which finds the alias again), and
//! - a literal `true` and `false` pair is replaced by one `boolean` member.

use docgraph_model::{LiteralValue, TypeMeta, TypeNode, TypeOrRef, UnionNode};
use docgraph_oracle::{TypeFlags, TypeKind, TypeOracle};
use tracing::trace;

use crate::builder::TypeGraph;
use crate::error::BuildError;

impl<O: TypeOracle> TypeGraph<'_, O> {
    pub(crate) fn build_union(&mut self, ty: O::Type) -> Result<UnionNode, BuildError> {
        let oracle = self.oracle;
        let members = oracle.types_of(ty);
        let non_nullable = oracle.non_nullable_of(ty);

        let (mut types, non_nullable) =
            if oracle.alias_of(ty).is_some() || non_nullable == ty {
                (self.build_all(&members)?, None)
            } else {
                self.reassemble_nullable(&members, non_nullable)?
            };

        recombine_boolean(&mut types);
        Ok(UnionNode {
            types,
            non_nullable,
            meta: TypeMeta::default(),
        })
    }

    /// Build the non-nullable part once, then append one member per nullable
    /// original member.
    fn reassemble_nullable(
        &mut self,
        members: &[O::Type],
        non_nullable: O::Type,
    ) -> Result<(Vec<TypeOrRef>, Option<TypeOrRef>), BuildError> {
        let oracle = self.oracle;
        let mut types = Vec::with_capacity(members.len());

        let non_nullable = if oracle.kind_of(non_nullable) == TypeKind::Never {
            None
        } else {
            let built = self.build(non_nullable)?;
            match &built {
                TypeOrRef::Inline(node) => match &**node {
                    TypeNode::Union(inner) => types.extend(inner.types.iter().cloned()),
                    _ => types.push(built.clone()),
                },
                TypeOrRef::Ref(_) => types.push(built.clone()),
            }
            Some(built)
        };

        for &member in members {
            if oracle.flags(member).intersects(TypeFlags::NULLISH_MEMBER) {
                types.push(self.build(member)?);
            }
        }
        trace!(members = types.len(), "reassembled nullable union");
        Ok((types, non_nullable))
    }
}

/// Replace a literal `true` and `false` pair with `boolean`, placed at the
/// smaller of the two positions.
pub fn recombine_boolean(types: &mut Vec<TypeOrRef>) {
    let position = |value: bool| {
        types.iter().position(|ty| {
            matches!(
                ty.as_inline(),
                Some(TypeNode::Literal(LiteralValue::Boolean(b))) if *b == value
            )
        })
    };
    let (Some(t), Some(f)) = (position(true), position(false)) else {
        return;
    };
    let (first, second) = if t < f { (t, f) } else { (f, t) };
    types.remove(second);
    types.remove(first);
    types.insert(first, TypeOrRef::inline(TypeNode::Boolean));
}

#[cfg(test)]
#[path = "tests/union_tests.rs"]
mod tests;
