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

//! Tests for the bali facade crate.
//!
//! Exercises the re-exported types and the convenience functions against
//! the shared fixtures.

use bali::c14n::{format_with_config, FormatConfig};
use bali::{
    format, format_document, parse, parse_with_options, validate, BaliErrorKind, Collection,
    Entity, ParseOptions,
};
use bali_test::fixtures;

// ==================== Round trip tests ====================

#[test]
fn test_every_fixture_round_trips_through_facade() {
    for (name, source) in fixtures::all() {
        let tree = parse(source).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(format(&tree).unwrap(), source, "{}", name);
    }
}

#[test]
fn test_format_document_reparses() {
    for (name, source) in fixtures::all() {
        let tree = parse(source).unwrap();
        let document = format_document(&tree).unwrap();
        assert!(document.ends_with('\n'), "{}", name);
        assert_eq!(parse(&document).unwrap(), tree, "{}", name);
    }
}

#[test]
fn test_custom_layout_through_facade() {
    let tree = parse("[\n    1\n    2\n]").unwrap();
    let config = FormatConfig::new().with_max_inline_entries(2);
    assert_eq!(format_with_config(&tree, &config).unwrap(), "[1, 2]");
}

// ==================== Validation tests ====================

#[test]
fn test_validate_reports_kinds() {
    assert!(validate("[:]").is_ok());
    for (name, source, kind) in fixtures::errors::invalid_samples() {
        assert_eq!(validate(source).unwrap_err().kind, kind, "{}", name);
    }
}

#[test]
fn test_parse_with_options_reexported() {
    let options = ParseOptions::builder().max_depth(2).build();
    assert!(parse_with_options("[1]", &options).is_ok());
    let err = parse_with_options("[[1]]", &options).unwrap_err();
    assert_eq!(err.kind, BaliErrorKind::Syntax);
}

// ==================== Module re-export tests ====================

#[test]
fn test_modules_reexported() {
    let tree = parse("[1..3]").unwrap();
    let Entity::Collection(Collection::Range(range)) = tree.entity else {
        panic!("not a range");
    };
    assert_eq!(range.extent(), bali::value::Extent::Inclusive);
    assert_eq!(range.size(), Some(3));

    let tokens: Vec<_> = bali::lex::Scanner::new("[1, 2]").collect();
    assert_eq!(tokens.len(), 5);
    assert!(bali::grammar::rule("$component").is_some());
}

#[test]
fn test_version_constant() {
    assert!(!bali::VERSION.is_empty());
}
