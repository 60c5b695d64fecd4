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

//! Integration tests for error context helpers.

use bali::{parse, BaliError, BaliErrorKind, BaliResultExt};

fn load(path: &str) -> Result<bali::Component, BaliError> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    parse(&text).with_context(|| format!("parsing {}", path))
}

// ==================== Parse error tests ====================

#[test]
fn test_context_keeps_diagnostics() {
    let source = "{break}";
    let err = parse(source).context("in the handler").unwrap_err();
    assert_eq!(err.kind, BaliErrorKind::Syntax);
    assert_eq!(err.column, Some(7));
    assert_eq!(err.expected.first(), Some(&"$breakClause"));

    let report = err.report(source);
    assert!(report.contains("0001: {break}"));
    assert!(report.ends_with("(in the handler)\n"));
}

#[test]
fn test_context_chains_outermost_first() {
    let err = parse("[1..~π]")
        .context("in the range")
        .context("while loading")
        .unwrap_err();
    assert_eq!(err.kind, BaliErrorKind::Range);
    let context = err.context.unwrap();
    assert!(context.starts_with("while loading; in the range"));
}

#[test]
fn test_display_leaves_context_to_report() {
    let source = "[1, 2";
    let err = parse(source).context("in citation.bali").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("SyntaxError at line 1"), "{}", text);
    assert!(!text.contains("citation.bali"), "{}", text);
    assert!(err.report(source).contains("(in citation.bali)"));
}

// ==================== I/O error tests ====================

#[test]
fn test_missing_file_is_io_error() {
    let err = load("/nonexistent/path/draft.bali").unwrap_err();
    assert_eq!(err.kind, BaliErrorKind::Io);
    assert_eq!(err.line, 0);
    assert_eq!(err.context.as_deref(), Some("reading /nonexistent/path/draft.bali"));
    assert!(err.to_string().starts_with("IOError"));
}

#[test]
fn test_file_round_trip() {
    let path = std::env::temp_dir().join(format!("bali-context-{}.bali", std::process::id()));
    let path_text = path.to_string_lossy().into_owned();
    let tree = parse("[\n    $x: 1\n    $y: 2\n]").unwrap();
    std::fs::write(&path, bali::format_document(&tree).unwrap()).unwrap();
    let loaded = load(&path_text);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.unwrap(), tree);
}
