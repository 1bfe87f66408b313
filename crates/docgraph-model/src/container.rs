//! Ordered containers and their tagged transport form.
//!
//! A plain JSON tree has no ordered mapping and no set. Instead of relying on
//! a field-name table shared between encoder and decoder, each container
//! carries its own discriminator on the wire:
//!
//! ```json
//! { "$map": [["name", { ... }], ["other", { ... }]] }
//! { "$set": ["/src/a.ts", "/src/b.ts"] }
//! ```
//!
//! Decoding a container checks the discriminator, so a set where a mapping is
//! expected (or a bare array) is rejected instead of silently revived as the
//! wrong shape.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use indexmap::{IndexMap, IndexSet};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Discriminator key of an encoded ordered mapping.
pub const MAP_TAG: &str = "$map";
/// Discriminator key of an encoded set.
pub const SET_TAG: &str = "$set";

/// Message prefix of container shape errors, used by the codec to classify
/// deserialization failures.
pub(crate) const CONTAINER_MISMATCH: &str = "container mismatch";
/// Message prefix of duplicate-key errors.
pub(crate) const DUPLICATE_KEY: &str = "duplicate key";

// =============================================================================
// OrderedMap
// =============================================================================

/// Insertion-ordered mapping from names to values.
///
/// Equality is order-sensitive: two maps with the same entries in a different
/// order are different documents.
#[derive(Clone)]
pub struct OrderedMap<V>(IndexMap<String, V>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    pub fn into_inner(self) -> IndexMap<String, V> {
        self.0
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl<V> Deref for OrderedMap<V> {
    type Target = IndexMap<String, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V> DerefMut for OrderedMap<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<V> From<IndexMap<String, V>> for OrderedMap<V> {
    fn from(map: IndexMap<String, V>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

struct Entries<'a, V>(&'a IndexMap<String, V>);

impl<V: Serialize> Serialize for Entries<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for entry in self.0 {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(MAP_TAG, &Entries(&self.0))?;
        map.end()
    }
}

/// Entry list of an encoded ordered mapping, rejecting repeated keys.
struct EntryList<V>(IndexMap<String, V>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for EntryList<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryListVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntryListVisitor<V> {
            type Value = EntryList<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of [key, value] pairs")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut entries = IndexMap::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some((key, value)) = seq.next_element::<(String, V)>()? {
                    if entries.contains_key(&key) {
                        return Err(de::Error::custom(format_args!(
                            "{DUPLICATE_KEY} `{key}` in ordered map"
                        )));
                    }
                    entries.insert(key, value);
                }
                Ok(EntryList(entries))
            }
        }

        deserializer.deserialize_seq(EntryListVisitor(PhantomData))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TaggedVisitor::<EntryList<V>>::new(MAP_TAG))
            .map(|list| Self(list.0))
    }
}

// =============================================================================
// SourceSet
// =============================================================================

/// Set of declaration locations, kept in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceSet(IndexSet<String>);

impl SourceSet {
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    pub fn into_inner(self) -> IndexSet<String> {
        self.0
    }
}

impl Deref for SourceSet {
    type Target = IndexSet<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SourceSet {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<S: Into<String>> FromIterator<S> for SourceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

struct Members<'a>(&'a IndexSet<String>);

impl Serialize for Members<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0)
    }
}

impl Serialize for SourceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(SET_TAG, &Members(&self.0))?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for SourceSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(TaggedVisitor::<Vec<String>>::new(SET_TAG))
            .map(|members| Self(members.into_iter().collect()))
    }
}

// =============================================================================
// Tagged container visitor
// =============================================================================

/// Accepts exactly `{ "<tag>": <payload> }`.
struct TaggedVisitor<P> {
    tag: &'static str,
    marker: PhantomData<P>,
}

impl<P> TaggedVisitor<P> {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            marker: PhantomData,
        }
    }

    fn mismatch<E: de::Error>(&self, found: impl fmt::Display) -> E {
        E::custom(format_args!(
            "{CONTAINER_MISMATCH}: expected `{{\"{}\": [...]}}`, found {found}",
            self.tag
        ))
    }
}

impl<'de, P: Deserialize<'de>> Visitor<'de> for TaggedVisitor<P> {
    type Value = P;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with a single `{}` field", self.tag)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<P, A::Error> {
        let Some(key) = map.next_key::<String>()? else {
            return Err(self.mismatch("an empty object"));
        };
        if key != self.tag {
            return Err(self.mismatch(format_args!("`{key}`")));
        }
        let payload = map.next_value::<P>()?;
        if let Some(extra) = map.next_key::<String>()? {
            return Err(self.mismatch(format_args!("extra field `{extra}`")));
        }
        Ok(payload)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<P, A::Error> {
        Err(self.mismatch("a plain array"))
    }

    fn visit_str<E: de::Error>(self, _v: &str) -> Result<P, E> {
        Err(self.mismatch("a string"))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<P, E> {
        Err(self.mismatch("a boolean"))
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<P, E> {
        Err(self.mismatch("a number"))
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<P, E> {
        Err(self.mismatch("a number"))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<P, E> {
        Err(self.mismatch("a number"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<P, E> {
        Err(self.mismatch("null"))
    }
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
