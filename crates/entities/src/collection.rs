//! Keyed ordered collection used for every per-user list.

use std::{
    borrow::Borrow,
    collections::{HashMap, VecDeque},
    hash::Hash,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An entity that is uniquely identified by a key inside a [`Collection`].
pub trait Keyed {
    /// Key type.
    type Key: Eq + Hash + Clone;

    /// Returns the key of this entity.
    fn key(&self) -> &Self::Key;
}

/// Ordered list of entities with a key index.
///
/// Display order is the order of the underlying deque. Lookups by key go
/// through the index instead of rescanning the list, and both ends accept new
/// entries in constant time. Serializes as a plain list.
#[derive(Debug, Clone)]
pub struct Collection<V: Keyed> {
    entries: VecDeque<V>,
    /// Key to sequence number. An entry's position is `seq - head`.
    index: HashMap<V::Key, i64>,
    /// Sequence number of the front entry.
    head: i64,
}

impl<V: Keyed> Default for Collection<V> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            index: HashMap::new(),
            head: 0,
        }
    }
}

impl<V: Keyed> Collection<V> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in display order.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, V> {
        self.entries.iter()
    }

    /// Returns the first entry in display order.
    pub fn first(&self) -> Option<&V> {
        self.entries.front()
    }

    /// Whether an entry with this key exists.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Gets an entry by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.position(key)?;
        self.entries.get(position)
    }

    /// Appends an entry. Returns it back if the key is already present.
    pub fn push_back(&mut self, value: V) -> Result<(), V> {
        if self.index.contains_key(value.key()) {
            return Err(value);
        }
        let seq = self.head + self.entries.len() as i64;
        self.index.insert(value.key().clone(), seq);
        self.entries.push_back(value);
        Ok(())
    }

    /// Prepends an entry. Returns it back if the key is already present.
    pub fn push_front(&mut self, value: V) -> Result<(), V> {
        if self.index.contains_key(value.key()) {
            return Err(value);
        }
        self.head -= 1;
        self.index.insert(value.key().clone(), self.head);
        self.entries.push_front(value);
        Ok(())
    }

    /// Replaces the entry with the same key, keeping its position.
    ///
    /// Returns the previous entry, or the given value back if no entry has
    /// its key.
    pub fn replace(&mut self, value: V) -> Result<V, V> {
        match self.position(value.key()) {
            Some(i) => Ok(std::mem::replace(&mut self.entries[i], value)),
            None => Err(value),
        }
    }

    /// Applies `f` to the entry with this key.
    ///
    /// Keys are fixed: if `f` changes the key, the change is discarded and
    /// the entry is left as it was. Returns whether the entry was updated.
    pub fn update<Q, F>(&mut self, key: &Q, f: F) -> bool
    where
        V: Clone,
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(&mut V),
    {
        let Some(i) = self.position(key) else {
            return false;
        };
        let mut updated = self.entries[i].clone();
        f(&mut updated);
        if updated.key() != self.entries[i].key() {
            return false;
        }
        self.entries[i] = updated;
        true
    }

    /// Removes the entry with this key.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.position(key)?;
        let removed = self.entries.remove(i)?;
        self.reindex();
        Some(removed)
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&seq| usize::try_from(seq - self.head).unwrap_or(usize::MAX))
    }

    fn reindex(&mut self) {
        self.head = 0;
        self.index = self
            .entries
            .iter()
            .zip(0..)
            .map(|(v, seq)| (v.key().clone(), seq))
            .collect();
    }
}

impl<V: Keyed + PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Keyed + Eq> Eq for Collection<V> {}

/// Builds a collection from a list. Later duplicates of a key are dropped.
impl<V: Keyed> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut collection = Self::new();
        for value in iter {
            let _ = collection.push_back(value);
        }
        collection
    }
}

impl<V: Keyed> IntoIterator for Collection<V> {
    type Item = V;
    type IntoIter = std::collections::vec_deque::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V: Keyed> IntoIterator for &'a Collection<V> {
    type Item = &'a V;
    type IntoIter = std::collections::vec_deque::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V: Keyed + Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, V: Keyed + Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<V>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
