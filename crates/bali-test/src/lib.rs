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

//! Shared test fixtures and utilities for the Bali crates.
//!
//! This crate provides canonical documents, tree builders, error fixtures
//! and round-trip helpers so the parser and formatter test suites exercise
//! the same inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use bali_test::{assert_round_trip, fixtures};
//!
//! // Every fixture is canonical text
//! for (name, source) in fixtures::all() {
//!     assert_round_trip(name, source);
//! }
//!
//! // Build trees in code
//! use bali_test::fixtures::builders::{integer, list, typed};
//!
//! let tree = typed(list(vec![integer(1)]), "/bali/List/v1");
//! assert_eq!(bali_c14n::format(&tree).unwrap(), "[1] ($type: /bali/List/v1)");
//!
//! // Test error handling
//! use bali_test::fixtures::errors;
//!
//! for (name, invalid, kind) in errors::invalid_samples() {
//!     assert_eq!(bali_core::parse(invalid).unwrap_err().kind, kind, "{}", name);
//! }
//! ```

use bali_core::{BaliResult, Component};

/// Type alias for a list of fixtures as (name, canonical text) pairs.
pub type FixtureList = Vec<(&'static str, &'static str)>;

/// Parse `source` and format the tree again.
pub fn reformat(source: &str) -> BaliResult<String> {
    let component = bali_core::parse(source)?;
    bali_c14n::format(&component)
}

/// Assert that `source` parses, and that formatting the tree reproduces it
/// and reparses to the same tree.
///
/// # Panics
///
/// Panics with the fixture name and the failing step.
pub fn assert_round_trip(name: &str, source: &str) {
    let tree = bali_core::parse(source)
        .unwrap_or_else(|e| panic!("fixture {} failed to parse: {}\n{}", name, e, e.report(source)));
    let text = bali_c14n::format(&tree)
        .unwrap_or_else(|e| panic!("fixture {} failed to format: {}", name, e));
    assert_eq!(text, source, "fixture {} is not canonical", name);
    let reparsed = bali_core::parse(&text)
        .unwrap_or_else(|e| panic!("fixture {} failed to reparse: {}", name, e));
    assert_eq!(reparsed, tree, "fixture {} changed on reparse", name);
}

/// Returns all fixtures as parsed trees.
///
/// # Panics
///
/// Panics if a fixture does not parse.
pub fn fixtures_as_components() -> Vec<(&'static str, Component)> {
    fixtures::all()
        .into_iter()
        .map(|(name, source)| {
            let tree = bali_core::parse(source)
                .unwrap_or_else(|e| panic!("fixture {} failed to parse: {}", name, e));
            (name, tree)
        })
        .collect()
}

/// Canonical test fixtures covering the whole notation.
pub mod fixtures;

/// Tree counting utilities.
pub mod counts;

pub use counts::{count_components, count_statements};

#[cfg(test)]
mod tests {
    use super::*;
    use bali_core::{Collection, Entity};
    use std::collections::HashSet;

    #[test]
    fn test_fixture_names_unique() {
        let all = fixtures::all();
        let names: HashSet<_> = all.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_all_fixtures_round_trip() {
        for (name, source) in fixtures::all() {
            assert_round_trip(name, source);
        }
    }

    #[test]
    fn test_catalog_fixture() {
        let tree = bali_core::parse("[\n    $name: \"Alice\"\n    $age: 42\n]").unwrap();
        match tree.entity {
            Entity::Collection(Collection::Catalog(catalog)) => assert_eq!(catalog.len(), 2),
            other => panic!("Expected catalog, got {:?}", other),
        }
    }

    #[test]
    fn test_count_components() {
        let components = fixtures_as_components();
        let find = |wanted: &str| {
            components
                .iter()
                .find(|(name, _)| *name == wanted)
                .map(|(_, tree)| tree)
                .unwrap()
        };
        assert_eq!(count_components(find("list")), 4);
        // root, two keys, two values
        assert_eq!(count_components(find("catalog")), 5);
        // root plus the `$type` value
        assert_eq!(count_components(find("context")), 2);
    }

    #[test]
    fn test_count_statements() {
        let components = fixtures_as_components();
        let count = |wanted: &str| {
            components
                .iter()
                .find(|(name, _)| *name == wanted)
                .map(|(_, tree)| count_statements(tree))
                .unwrap()
        };
        assert_eq!(count("empty_procedure"), 0);
        assert_eq!(count("clauses"), 11);
        // `if` plus the two statements it guards
        assert_eq!(count("nested_procedure"), 3);
        // checkout plus one statement in each handler
        assert_eq!(count("on_clause"), 3);
    }

    #[test]
    fn test_invalid_samples_fail() {
        for (name, source, kind) in fixtures::errors::invalid_samples() {
            let err = bali_core::parse(source).unwrap_err();
            assert_eq!(err.kind, kind, "{}", name);
        }
    }

    #[test]
    fn test_invalid_expressions_fail() {
        for (name, expression) in fixtures::errors::invalid_expressions() {
            let source = format!("{{return {}}}", expression);
            assert!(bali_core::parse(&source).is_err(), "{}", name);
        }
    }
}
