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

//! # Bali Document Notation
//!
//! Bali is a notation for structured, richly typed documents. Its literals
//! cover numbers, angles, percentages, probabilities, durations, moments,
//! versions, tags, resources, patterns and binary data; its collections
//! nest lists, catalogs and ranges; and its procedures carry a small
//! statement language.
//!
//! ## Quick Start
//!
//! ```rust
//! use bali::{format, parse};
//!
//! let source = "[\n    $name: \"Alice\"\n    $age: 42\n] ($type: /bali/Person/v1)";
//!
//! // Parse the document
//! let tree = parse(source).expect("Failed to parse");
//! assert!(tree.parameter("type").is_some());
//!
//! // Canonical text reproduces the source
//! assert_eq!(format(&tree).expect("Failed to format"), source);
//! ```
//!
//! ## Modules
//!
//! - [`ast`]: the component tree, expressions and statements
//! - [`value`]: literal types and ranges
//! - [`collections`]: lists, catalogs and sets
//! - [`lex`]: scanner and token stream
//! - [`c14n`](mod@c14n): canonical formatting

pub use bali_core::{
    // Functions
    parse_with_options,
    // Tree
    Annotation,
    // Errors
    BaliError,
    BaliErrorKind,
    BaliResult,
    Clause,
    Collection,
    Component,
    Context,
    Element,
    Entity,
    Expression,
    // Parser
    Limits,
    Line,
    ParseOptions,
    ParseOptionsBuilder,
    Procedure,
    Range,
    Statement,
    StringLiteral,
};

pub use bali_core::{ast, collections, grammar, lex, value};

mod error_ext;
pub use error_ext::BaliResultExt;

pub mod c14n {
    //! Canonical formatting utilities
    pub use bali_c14n::{
        format, format_with_config, CanonicalWriter, FormatConfig, FormatConfigBuilder,
    };
}

/// Parse Bali source text into a component tree with the default limits.
#[inline]
pub fn parse(input: &str) -> BaliResult<Component> {
    bali_core::parse(input)
}

/// Format a component as canonical text, without a trailing newline.
///
/// For every canonical `source`, `format(&parse(source)?)? == source`.
#[inline]
pub fn format(component: &Component) -> BaliResult<String> {
    bali_c14n::format(component)
}

/// Format a component as a complete document, ending with a newline.
///
/// The result is still accepted by [`parse`], which allows one trailing
/// end of line.
#[inline]
pub fn format_document(component: &Component) -> BaliResult<String> {
    let mut text = format(component)?;
    text.push('\n');
    Ok(text)
}

/// Check that `input` is a well-formed document.
#[inline]
pub fn validate(input: &str) -> BaliResult<()> {
    parse(input).map(|_| ())
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
