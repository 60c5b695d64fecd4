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

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Orders the items of a [`Set`].
pub type Ranker<T> = fn(&T, &T) -> Ordering;

fn natural<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// A sorted, duplicate-free sequence.
///
/// Items are kept in a vector ordered by the set's ranker, so membership
/// and insertion points are found by binary search. The logical operations
/// leave their operands untouched and rank the result like the first
/// operand.
#[derive(Clone)]
pub struct Set<T> {
    items: Vec<T>,
    rank: Ranker<T>,
}

impl<T: Ord> Default for Set<T> {
    fn default() -> Self {
        Self::with_ranker(natural::<T>)
    }
}

impl<T: Ord> Set<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Set<T> {
    pub fn with_ranker(rank: Ranker<T>) -> Self {
        Self {
            items: Vec::new(),
            rank,
        }
    }

    fn search(&self, item: &T) -> Result<usize, usize> {
        self.items.binary_search_by(|probe| (self.rank)(probe, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_ok()
    }

    /// 1-based position of `item`, or 0 when absent.
    pub fn index_of(&self, item: &T) -> usize {
        self.search(item).map_or(0, |i| i + 1)
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Insert `item`; returns false if an equal item was already present.
    pub fn add(&mut self, item: T) -> bool {
        match self.search(&item) {
            Ok(_) => false,
            Err(at) => {
                self.items.insert(at, item);
                true
            }
        }
    }

    pub fn remove(&mut self, item: &T) -> bool {
        match self.search(item) {
            Ok(at) => {
                self.items.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Set<T> {
    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Self {
        Self {
            items: self.items.iter().filter(|item| keep(item)).cloned().collect(),
            rank: self.rank,
        }
    }

    /// Items in both sets.
    pub fn and(first: &Self, second: &Self) -> Self {
        first.filtered(|item| second.contains(item))
    }

    /// Items in either set.
    pub fn or(first: &Self, second: &Self) -> Self {
        let mut result = first.clone();
        for item in second.iter() {
            result.add(item.clone());
        }
        result
    }

    /// Items in `first` but not in `second`.
    pub fn sans(first: &Self, second: &Self) -> Self {
        first.filtered(|item| !second.contains(item))
    }

    /// Items in exactly one of the sets.
    pub fn xor(first: &Self, second: &Self) -> Self {
        Self::or(&Self::sans(first, second), &Self::sans(second, first))
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.items).finish()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(items: &[i32]) -> Set<i32> {
        items.iter().copied().collect()
    }

    // ==================== Membership tests ====================

    #[test]
    fn test_sorted_without_duplicates() {
        let s = set(&[5, 1, 3, 1, 5]);
        assert_eq!(s.as_slice(), &[1, 3, 5]);
        assert_eq!(s.index_of(&3), 2);
        assert_eq!(s.index_of(&4), 0);
        assert_eq!(s.item(1), Some(&1));
        assert_eq!(s.item(0), None);
    }

    #[test]
    fn test_add_and_remove() {
        let mut s = set(&[1, 2]);
        assert!(!s.add(2));
        assert!(s.add(0));
        assert!(s.remove(&1));
        assert!(!s.remove(&1));
        assert_eq!(s.as_slice(), &[0, 2]);
    }

    #[test]
    fn test_custom_ranker() {
        let mut s: Set<i32> = Set::with_ranker(|a, b| b.cmp(a));
        for item in [1, 3, 2] {
            s.add(item);
        }
        assert_eq!(s.as_slice(), &[3, 2, 1]);
        assert!(s.contains(&2));
    }

    // ==================== Algebra tests ====================

    #[test]
    fn test_logical_operations() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4]);
        assert_eq!(Set::and(&a, &b).as_slice(), &[3]);
        assert_eq!(Set::or(&a, &b).as_slice(), &[1, 2, 3, 4]);
        assert_eq!(Set::sans(&a, &b).as_slice(), &[1, 2]);
        assert_eq!(Set::xor(&a, &b).as_slice(), &[1, 2, 4]);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_or_commutes(a in prop::collection::vec(-50i32..50, 0..20),
                            b in prop::collection::vec(-50i32..50, 0..20)) {
            let (a, b) = (set(&a), set(&b));
            prop_assert_eq!(Set::or(&a, &b), Set::or(&b, &a));
        }

        #[test]
        fn prop_sans_of_or_is_subset(a in prop::collection::vec(-50i32..50, 0..20),
                                     b in prop::collection::vec(-50i32..50, 0..20)) {
            let (a, b) = (set(&a), set(&b));
            let rest = Set::sans(&Set::or(&a, &b), &b);
            prop_assert!(rest.iter().all(|item| a.contains(item)));
        }

        #[test]
        fn prop_xor_is_union_of_differences(a in prop::collection::vec(-50i32..50, 0..20),
                                            b in prop::collection::vec(-50i32..50, 0..20)) {
            let (a, b) = (set(&a), set(&b));
            prop_assert_eq!(
                Set::xor(&a, &b),
                Set::or(&Set::sans(&a, &b), &Set::sans(&b, &a))
            );
        }
    }
}
