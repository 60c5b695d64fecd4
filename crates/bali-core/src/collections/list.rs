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

use std::ops::Deref;

/// An insertion ordered sequence with 1-based indexing.
///
/// Negative indices count back from the end, so `-1` is the last item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, index: isize) -> Option<usize> {
        if index > 0 {
            let i = index.unsigned_abs() - 1;
            (i < self.items.len()).then_some(i)
        } else if index < 0 {
            self.items.len().checked_sub(index.unsigned_abs())
        } else {
            None
        }
    }

    pub fn item(&self, index: isize) -> Option<&T> {
        self.position(index).map(|i| &self.items[i])
    }

    /// Replace the item at `index` in place, returning the old item.
    pub fn set_item(&mut self, index: isize, item: T) -> Option<T> {
        let i = self.position(index)?;
        Some(std::mem::replace(&mut self.items[i], item))
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, index: isize) -> Option<T> {
        let i = self.position(index)?;
        Some(self.items.remove(i))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_and_negative_indices() {
        let list: List<i32> = vec![10, 20, 30].into();
        assert_eq!(list.item(1), Some(&10));
        assert_eq!(list.item(-1), Some(&30));
        assert_eq!(list.item(0), None);
        assert_eq!(list.item(4), None);
        assert_eq!(list.item(-4), None);
    }

    #[test]
    fn test_set_item_replaces_in_place() {
        let mut list: List<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(list.set_item(2, "B"), Some("b"));
        assert_eq!(&*list, &["a", "B", "c"]);
        assert_eq!(list.set_item(9, "z"), None);
    }

    #[test]
    fn test_add_and_remove() {
        let mut list = List::new();
        list.add(1);
        list.add(2);
        assert_eq!(list.remove_item(-1), Some(2));
        assert_eq!(list.len(), 1);
    }
}
