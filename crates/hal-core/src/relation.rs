//! Relation multiplicity — one item or an ordered sequence per relation name.

use indexmap::map::Entry;
use indexmap::IndexMap;

/// The value stored under a relation name.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> Relation<T> {
    /// Append an item. A single item becomes a two-element sequence.
    pub fn push(&mut self, item: T) {
        match self {
            Self::Many(items) => items.push(item),
            Self::Single(_) => {
                if let Self::Single(first) = std::mem::replace(self, Self::Many(Vec::new())) {
                    *self = Self::Many(vec![first, item]);
                }
            }
        }
    }

    /// All items in insertion order, regardless of multiplicity.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Single(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }
}

/// Relation names mapped to their items, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Relations<T> {
    entries: IndexMap<String, Relation<T>>,
}

impl<T> Default for Relations<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> Relations<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item under `rel`: stored singly when the relation is new,
    /// otherwise appended to the relation's sequence.
    pub fn insert(&mut self, rel: &str, item: T) {
        match self.entries.entry(rel.to_string()) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().push(item);
                tracing::trace!(rel, len = existing.get().len(), "appended to relation");
            }
            Entry::Vacant(slot) => {
                slot.insert(Relation::Single(item));
            }
        }
    }

    /// Add an item under `rel`, always using the sequence representation.
    pub fn insert_many(&mut self, rel: &str, item: T) {
        match self.entries.entry(rel.to_string()) {
            Entry::Occupied(mut existing) => existing.get_mut().push(item),
            Entry::Vacant(slot) => {
                slot.insert(Relation::Many(vec![item]));
            }
        }
    }

    /// Store `item` as the only value of `rel`, dropping anything already
    /// there. A relation keeps its original position when replaced.
    pub fn replace(&mut self, rel: &str, item: T) {
        self.entries.insert(rel.to_string(), Relation::Single(item));
    }

    pub fn get(&self, rel: &str) -> Option<&Relation<T>> {
        self.entries.get(rel)
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.entries.contains_key(rel)
    }

    /// Relation names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Relation<T>)> {
        self.entries
            .iter()
            .map(|(name, relation)| (name.as_str(), relation))
    }

    /// Number of relation names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
