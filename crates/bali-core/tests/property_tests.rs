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

//! Property-based tests for the value model, the collections and the
//! parser's handling of arbitrary input.

use bali_core::collections::Set;
use bali_core::lex::{Scanner, TokenKind};
use bali_core::value::{Extent, Range, Scalar};
use bali_core::{parse, BaliErrorKind};
use proptest::prelude::*;

fn extent() -> impl Strategy<Value = Extent> {
    prop_oneof![
        Just(Extent::Inclusive),
        Just(Extent::LeftOpen),
        Just(Extent::RightOpen),
        Just(Extent::Exclusive),
    ]
}

fn integer_range(first: i64, extent: Extent, last: i64) -> Range {
    Range::new(Some(Scalar::Integer(first)), extent, Some(Scalar::Integer(last))).unwrap()
}

fn set_of(items: &[i32]) -> Set<i32> {
    let mut set = Set::new();
    for item in items {
        set.add(*item);
    }
    set
}

// ==================== Range properties ====================

proptest! {
    #[test]
    fn prop_range_size_matches_extent(first in -1000i64..1000, span in 0i64..200, extent in extent()) {
        let range = integer_range(first, extent, first + span);
        let inclusive = span + 1;
        let expected = match extent {
            Extent::Inclusive => inclusive,
            Extent::LeftOpen | Extent::RightOpen => inclusive - 1,
            Extent::Exclusive => (inclusive - 2).max(0),
        };
        prop_assert_eq!(range.size(), Some(expected as usize));
    }

    #[test]
    fn prop_range_index_of_and_value_at_agree(
        first in -100i64..100,
        span in 0i64..50,
        probe in -200i64..200,
        extent in extent(),
    ) {
        let range = integer_range(first, extent, first + span);
        let value = Scalar::Integer(probe);
        let index = range.index_of(&value);
        prop_assert_eq!(index > 0, range.contains(&value));
        if index > 0 {
            prop_assert_eq!(range.value_at(index as i64), Some(value));
        }
    }

    #[test]
    fn prop_range_negative_index_counts_back(first in -100i64..100, span in 0i64..50) {
        let range = integer_range(first, Extent::Inclusive, first + span);
        prop_assert_eq!(range.value_at(-1), Some(Scalar::Integer(first + span)));
        prop_assert_eq!(range.value_at(1), Some(Scalar::Integer(first)));
        prop_assert_eq!(range.value_at(0), None);
    }

    #[test]
    fn prop_range_text_reparses(first in -100i64..100, span in 0i64..50, extent in extent()) {
        let range = integer_range(first, extent, first + span);
        let tree = parse(&format!("[{}]", range)).unwrap();
        let bali_core::Entity::Collection(bali_core::Collection::Range(parsed)) = tree.entity else {
            panic!("not a range");
        };
        prop_assert_eq!(parsed, range);
    }
}

// ==================== Set properties ====================

proptest! {
    #[test]
    fn prop_set_is_sorted_and_unique(items in prop::collection::vec(-50i32..50, 0..40)) {
        let set = set_of(&items);
        prop_assert!(set.as_slice().windows(2).all(|w| w[0] < w[1]));
        for item in &items {
            prop_assert!(set.contains(item));
            prop_assert_eq!(set.item(set.index_of(item)), Some(item));
        }
    }

    #[test]
    fn prop_set_algebra(
        a in prop::collection::vec(-20i32..20, 0..20),
        b in prop::collection::vec(-20i32..20, 0..20),
    ) {
        let (a, b) = (set_of(&a), set_of(&b));
        let and = Set::and(&a, &b);
        let or = Set::or(&a, &b);
        let sans = Set::sans(&a, &b);
        let xor = Set::xor(&a, &b);

        for x in -20..20 {
            let (in_a, in_b) = (a.contains(&x), b.contains(&x));
            prop_assert_eq!(and.contains(&x), in_a && in_b);
            prop_assert_eq!(or.contains(&x), in_a || in_b);
            prop_assert_eq!(sans.contains(&x), in_a && !in_b);
            prop_assert_eq!(xor.contains(&x), in_a != in_b);
        }
        prop_assert_eq!(or.len(), and.len() + xor.len());
    }

    #[test]
    fn prop_set_remove_undoes_add(items in prop::collection::vec(-50i32..50, 0..20), extra in 100i32..200) {
        let mut set = set_of(&items);
        let before = set.as_slice().to_vec();
        prop_assert!(set.add(extra));
        prop_assert!(!set.add(extra));
        prop_assert!(set.remove(&extra));
        prop_assert_eq!(set.as_slice(), &before[..]);
    }
}

// ==================== Robustness properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_scanner_consumes_any_input(source in "\\PC{0,64}") {
        let mut scanner = Scanner::new(&source);
        let mut count = 0;
        loop {
            let token = scanner.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            prop_assert!(!token.text.is_empty());
            count += 1;
        }
        prop_assert!(count <= source.len());
    }

    #[test]
    fn prop_parse_never_panics(source in "[\\[\\]{}()$a-z0-9:,;.<>~!\"' \n+*/-]{0,48}") {
        if let Err(err) = parse(&source) {
            prop_assert!(matches!(err.kind, BaliErrorKind::Syntax | BaliErrorKind::Range));
            let _ = err.report(&source);
        }
    }
}
