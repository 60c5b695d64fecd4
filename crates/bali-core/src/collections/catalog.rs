// Bali Document Notation - Rust implementation
//
// Copyright (c) 2025 Bali Notation contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// A mapping from unique keys to values that remembers insertion order.
///
/// Replacing the value for an existing key keeps the association where it
/// was. Two catalogs are equal only when they hold the same associations in
/// the same order.
#[derive(Debug, Clone)]
pub struct Catalog<K, V> {
    map: IndexMap<K, V>,
}

impl<K, V> Default for Catalog<K, V> {
    fn default() -> Self {
        Self {
            map: IndexMap::default(),
        }
    }
}

impl<K: Hash + Eq, V> Catalog<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Associate `value` with `key`, returning the value it replaced.
    pub fn set_value(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    pub fn get_value(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Remove the association for `key`, keeping the others in order.
    pub fn remove_value(&mut self, key: &K) -> Option<V> {
        self.map.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    pub fn reverse(&mut self) {
        self.map.reverse();
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Catalog<K, V> {
    /// The associations of `first` followed by those of `second`; a key in
    /// both takes its value from `second`.
    pub fn merge(first: &Self, second: &Self) -> Self {
        let mut merged = first.clone();
        for (key, value) in second.iter() {
            merged.set_value(key.clone(), value.clone());
        }
        merged
    }

    /// The associations for `keys`, in the order the keys are given.
    pub fn extract<'a>(catalog: &Self, keys: impl IntoIterator<Item = &'a K>) -> Self
    where
        K: 'a,
    {
        keys.into_iter()
            .filter_map(|key| Some((key.clone(), catalog.get_value(key)?.clone())))
            .collect()
    }
}

impl<K: Hash + Eq + Ord, V> Catalog<K, V> {
    /// Reorder the associations by key.
    pub fn sort(&mut self) {
        self.map.sort_keys();
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Catalog<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Catalog<K, V> {}

impl<K: Hash + Eq, V: Hash> Hash for Catalog<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self.iter() {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Catalog<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (key, value) in iter {
            catalog.set_value(key, value);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog<&'static str, i32> {
        [("alpha", 1), ("beta", 2), ("gamma", 3)].into_iter().collect()
    }

    #[test]
    fn test_set_value_keeps_position() {
        let mut catalog = sample();
        assert_eq!(catalog.set_value("alpha", 10), Some(1));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.keys().copied().collect::<Vec<_>>(), ["alpha", "beta", "gamma"]);
        assert_eq!(catalog.get_value(&"alpha"), Some(&10));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut catalog = sample();
        assert_eq!(catalog.remove_value(&"beta"), Some(2));
        assert_eq!(catalog.keys().copied().collect::<Vec<_>>(), ["alpha", "gamma"]);
        assert_eq!(catalog.remove_value(&"beta"), None);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let mut reversed = sample();
        reversed.reverse();
        assert_ne!(sample(), reversed);
        reversed.sort();
        assert_eq!(sample(), reversed);
    }

    #[test]
    fn test_merge_and_extract() {
        let other: Catalog<_, _> = [("gamma", 30), ("delta", 4)].into_iter().collect();
        let merged = Catalog::merge(&sample(), &other);
        assert_eq!(merged.keys().copied().collect::<Vec<_>>(), ["alpha", "beta", "gamma", "delta"]);
        assert_eq!(merged.get_value(&"gamma"), Some(&30));

        let extracted = Catalog::extract(&merged, &["delta", "alpha", "missing"]);
        assert_eq!(extracted.iter().collect::<Vec<_>>(), [(&"delta", &4), (&"alpha", &1)]);
    }
}
