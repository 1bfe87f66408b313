//! Property and member extraction.
//!
//! Turns the transpiled shape of one component into a [`Component`]
//! document: one [`Prop`] per property symbol, exported bindings, and for
//! the legacy shape events and slots.

use docgraph_model::{Component, OrderedMap, Prop, SourceSet, Tag, TypeOrRef};
use docgraph_oracle::{Documentation, TypeOracle};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::builder::TypeGraph;
use crate::error::BuildError;
use crate::options::BuildOptions;

/// What the transpiler knows about a component before type extraction.
#[derive(Clone, Debug)]
pub struct ComponentShape<T, S> {
    /// File declaring the component itself.
    pub file: String,
    /// Legacy shape: `events` and `slots` are emitted.
    pub is_legacy: bool,
    /// Object type whose properties are the component props.
    pub props: Option<T>,
    /// Exported bindings.
    pub exports: Vec<S>,
    /// Object type whose properties are the events (legacy shape).
    pub events: Option<T>,
    /// Object type whose properties are the slots; each slot's type is an
    /// object whose properties are the slot props (legacy shape).
    pub slots: Option<T>,
    /// Names of bindable props, with or without the bindable prefix.
    pub bindings: FxHashSet<String>,
    /// Type of the default initializer of each destructured or exported prop.
    pub defaults: IndexMap<String, T>,
    /// Documentation comment of the component.
    pub documentation: Documentation,
}

impl<T, S> ComponentShape<T, S> {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            is_legacy: false,
            props: None,
            exports: Vec::new(),
            events: None,
            slots: None,
            bindings: FxHashSet::default(),
            defaults: IndexMap::new(),
            documentation: Documentation::default(),
        }
    }
}

/// Build the document of one component in a fresh graph context.
pub fn extract_component<O: TypeOracle>(
    oracle: &O,
    shape: &ComponentShape<O::Type, O::Symbol>,
    options: BuildOptions,
) -> Result<Component, BuildError> {
    let mut graph = TypeGraph::new(oracle, options);
    let mut extractor = Extractor::new(&mut graph, shape);

    let props = match shape.props {
        Some(props) => extractor.props_of(props)?,
        None => OrderedMap::new(),
    };
    let exports = extractor.exports()?;
    let (events, slots) = if shape.is_legacy {
        (Some(extractor.events()?), Some(extractor.slots()?))
    } else {
        (None, None)
    };

    let types = graph.finish()?;
    debug!(
        file = %shape.file,
        props = props.len(),
        types = types.len(),
        legacy = shape.is_legacy,
        "extracted component"
    );
    Ok(Component {
        description: shape.documentation.text.clone(),
        tags: tags_of(&shape.documentation),
        is_legacy: shape.is_legacy,
        props,
        exports,
        events,
        slots,
        types,
    })
}

struct Extractor<'g, 'o, 's, O: TypeOracle> {
    graph: &'g mut TypeGraph<'o, O>,
    shape: &'s ComponentShape<O::Type, O::Symbol>,
    bindable: FxHashSet<String>,
}

impl<'g, 'o, 's, O: TypeOracle> Extractor<'g, 'o, 's, O> {
    fn new(graph: &'g mut TypeGraph<'o, O>, shape: &'s ComponentShape<O::Type, O::Symbol>) -> Self {
        let prefix = graph.options().bindable_prefix.clone();
        let bindable = shape
            .bindings
            .iter()
            .map(|name| strip(name, &prefix).to_string())
            .collect();
        Self {
            graph,
            shape,
            bindable,
        }
    }

    /// One [`Prop`] per property of `owner`, in declaration order.
    ///
    /// `x` and its prefixed spelling name the same prop. The first
    /// declaration wins; later ones are skipped without building their type.
    fn props_of(&mut self, owner: O::Type) -> Result<OrderedMap<Prop>, BuildError> {
        let oracle = self.graph.oracle();
        let symbols = oracle.properties_of(owner);
        let mut props = OrderedMap::with_capacity(symbols.len());
        for symbol in symbols {
            let raw = oracle.symbol_name(symbol);
            let name = strip(&raw, &self.graph.options().bindable_prefix).to_string();
            if props.contains_key(&name) {
                debug!(prop = %name, declared_as = %raw, "skipped duplicate prop");
                continue;
            }
            let prop = self.prop(&name, symbol)?;
            props.insert(name, prop);
        }
        Ok(props)
    }

    fn prop(&mut self, name: &str, symbol: O::Symbol) -> Result<Prop, BuildError> {
        let oracle = self.graph.oracle();
        let ty = self.graph.build(oracle.type_of_symbol(symbol))?;
        let default = match self.shape.defaults.get(name) {
            Some(&initializer) => Some(self.graph.build(initializer)?),
            None => None,
        };

        let declared_in = oracle.symbol_declaration_sources_of(symbol);
        let is_extended = declared_in.iter().any(|source| *source != self.shape.file);
        let sources = is_extended.then(|| declared_in.into_iter().collect::<SourceSet>());

        let documentation = oracle.documentation_of(symbol);
        Ok(Prop {
            ty,
            is_optional: oracle.is_optional(symbol) || default.is_some(),
            is_bindable: self.bindable.contains(name),
            default,
            description: documentation.text.clone(),
            tags: tags_of(&documentation),
            is_extended,
            sources,
        })
    }

    fn exports(&mut self) -> Result<OrderedMap<TypeOrRef>, BuildError> {
        let oracle = self.graph.oracle();
        let mut exports = OrderedMap::with_capacity(self.shape.exports.len());
        for &symbol in &self.shape.exports {
            let ty = self.graph.build(oracle.type_of_symbol(symbol))?;
            exports.insert(oracle.symbol_name(symbol), ty);
        }
        Ok(exports)
    }

    /// Event name to payload type, keyed with the event prefix.
    fn events(&mut self) -> Result<OrderedMap<TypeOrRef>, BuildError> {
        let Some(owner) = self.shape.events else {
            return Ok(OrderedMap::new());
        };
        let oracle = self.graph.oracle();
        let prefix = self.graph.options().event_prefix.clone();
        let symbols = oracle.properties_of(owner);
        let mut events = OrderedMap::with_capacity(symbols.len());
        for symbol in symbols {
            let name = oracle.symbol_name(symbol);
            let key = if name.starts_with(&prefix) {
                name
            } else {
                format!("{prefix}{name}")
            };
            let ty = self.graph.build(oracle.type_of_symbol(symbol))?;
            events.insert(key, ty);
        }
        Ok(events)
    }

    /// Slot name to the props the slot receives.
    fn slots(&mut self) -> Result<OrderedMap<OrderedMap<Prop>>, BuildError> {
        let Some(owner) = self.shape.slots else {
            return Ok(OrderedMap::new());
        };
        let oracle = self.graph.oracle();
        let symbols = oracle.properties_of(owner);
        let mut slots = OrderedMap::with_capacity(symbols.len());
        for symbol in symbols {
            let slot_type = oracle.type_of_symbol(symbol);
            let mut slot_props = OrderedMap::new();
            for prop_symbol in oracle.properties_of(slot_type) {
                let name = oracle.symbol_name(prop_symbol);
                let prop = self.slot_prop(prop_symbol)?;
                slot_props.insert(name, prop);
            }
            slots.insert(oracle.symbol_name(symbol), slot_props);
        }
        Ok(slots)
    }

    /// Slot props take no defaults and are never bindable.
    fn slot_prop(&mut self, symbol: O::Symbol) -> Result<Prop, BuildError> {
        let oracle = self.graph.oracle();
        let documentation = oracle.documentation_of(symbol);
        Ok(Prop {
            is_optional: oracle.is_optional(symbol),
            description: documentation.text.clone(),
            tags: tags_of(&documentation),
            ..Prop::new(self.graph.build(oracle.type_of_symbol(symbol))?)
        })
    }
}

fn strip<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

fn tags_of(documentation: &Documentation) -> Vec<Tag> {
    documentation
        .tags
        .iter()
        .map(|tag| Tag::new(tag.name.clone(), tag.content.clone()))
        .collect()
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
