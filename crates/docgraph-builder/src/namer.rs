//! Reference naming.
//!
//! A referenced type is stored in the registry under a name computed from
//! its identity. The first matching rule wins:
//!
//! 1. Generic references with type arguments: `Array<string>`,
//!    `Map<string, number>`; tuples render as `[a, b]` or `readonly [a, b]`.
//! 2. Aliased or declared types: the fully-qualified name, followed by the
//!    alias type arguments (or the type's own arguments).
//! 3. Primitive and parametric kinds: the oracle's canonical string form.
//! 4. Anything else: `<anon:N>`, counting per parse.
//!
//! Names are memoized per handle, so asking twice for the same type returns
//! the same string even for rule 4.

use docgraph_common::limits::{ANONYMOUS_NAME_PREFIX, INTERNAL_SYMBOL_PREFIX};
use docgraph_oracle::{ObjectFlags, TypeFlags, TypeOracle};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::BuildError;
use crate::recursion::DepthCounter;

type ArgNames = SmallVec<[String; 4]>;

/// Memoizing namer scoped to one parse.
#[derive(Debug)]
pub struct ReferenceNamer<T> {
    names: FxHashMap<T, String>,
    next_anonymous: u32,
}

impl<T> Default for ReferenceNamer<T> {
    fn default() -> Self {
        Self {
            names: FxHashMap::default(),
            next_anonymous: 0,
        }
    }
}

impl<T: Copy + Eq + std::hash::Hash> ReferenceNamer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `<anon:N>` names handed out so far.
    pub fn anonymous_count(&self) -> u32 {
        self.next_anonymous
    }

    /// Name of `ty`, computed once per handle.
    ///
    /// Type arguments are named recursively under `depth`.
    pub fn name_of<O>(
        &mut self,
        oracle: &O,
        ty: T,
        depth: &mut DepthCounter,
    ) -> Result<String, BuildError>
    where
        O: TypeOracle<Type = T>,
    {
        if let Some(name) = self.names.get(&ty) {
            return Ok(name.clone());
        }
        if !depth.enter() {
            return Err(BuildError::DepthExceeded {
                max_depth: depth.max_depth(),
                display: oracle.type_to_string(ty),
            });
        }
        let result = self.compute(oracle, ty, depth);
        depth.leave();

        let name = result?;
        trace!(name = %name, "named type");
        self.names.insert(ty, name.clone());
        Ok(name)
    }

    fn compute<O>(
        &mut self,
        oracle: &O,
        ty: T,
        depth: &mut DepthCounter,
    ) -> Result<String, BuildError>
    where
        O: TypeOracle<Type = T>,
    {
        let own_args = oracle.type_arguments_of(ty);

        // Rule 1: generic reference.
        if oracle.object_flags(ty).contains(ObjectFlags::REFERENCE) && !own_args.is_empty() {
            let args = self.arg_names(oracle, &own_args, depth)?;
            if oracle.is_tuple_type(ty) {
                let prefix = if oracle.is_readonly_array_like(ty) {
                    "readonly "
                } else {
                    ""
                };
                return Ok(format!("{prefix}[{}]", args.join(", ")));
            }
            if let Some(declared) = oracle.declared_name_of(ty) {
                return Ok(with_args(&declared, &args));
            }
        }

        // Rule 2: alias or source-level declared name.
        if let Some(alias) = oracle.alias_of(ty) {
            let args = if alias.type_args.is_empty() {
                &own_args
            } else {
                &alias.type_args
            };
            let args = self.arg_names(oracle, args, depth)?;
            return Ok(with_args(&alias.qualified_name, &args));
        }
        if oracle
            .declared_name_of(ty)
            .is_some_and(|name| !name.starts_with(INTERNAL_SYMBOL_PREFIX))
        {
            let qualified = oracle
                .qualified_name_of(ty)
                .or_else(|| oracle.declared_name_of(ty))
                .unwrap_or_default();
            let args = self.arg_names(oracle, &own_args, depth)?;
            return Ok(with_args(&qualified, &args));
        }

        // Rule 3: the canonical form is already unique.
        let flags = oracle.flags(ty);
        if flags.intersects(TypeFlags::SAFE_TO_NAME) {
            return Ok(oracle.type_to_string(ty));
        }

        // Unaliased unions and intersections only appear here as type
        // arguments; name them from their members so anonymous members keep
        // their own `<anon:N>` identity.
        if flags.intersects(TypeFlags::UNION_OR_INTERSECTION) {
            let separator = if flags.contains(TypeFlags::UNION) {
                " | "
            } else {
                " & "
            };
            let members = self.arg_names(oracle, &oracle.types_of(ty), depth)?;
            return Ok(members.join(separator));
        }

        // Rule 4: anonymous.
        let n = self.next_anonymous;
        self.next_anonymous += 1;
        Ok(format!("{ANONYMOUS_NAME_PREFIX}{n}>"))
    }

    fn arg_names<O>(
        &mut self,
        oracle: &O,
        args: &[T],
        depth: &mut DepthCounter,
    ) -> Result<ArgNames, BuildError>
    where
        O: TypeOracle<Type = T>,
    {
        args.iter()
            .map(|&arg| self.name_of(oracle, arg, depth))
            .collect()
    }
}

fn with_args(name: &str, args: &[String]) -> String {
    if args.is_empty() {
        name.to_string()
    } else {
        format!("{name}<{}>", args.join(", "))
    }
}

#[cfg(test)]
#[path = "tests/namer_tests.rs"]
mod tests;
