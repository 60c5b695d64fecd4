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

//! Recursive-descent parser for Bali documents.
//!
//! # Speculative and committed productions
//!
//! Most productions return `BaliResult<Option<T>>`:
//!
//! - `Ok(Some(node))` when the production matched,
//! - `Ok(None)` when the input does not start with this production; the
//!   token stream is left where it was so the caller can try the next
//!   alternative,
//! - `Err(_)` when the production recognized its own leading token (a
//!   keyword, an opening bracket) but could not complete. These errors are
//!   fatal and end the parse.
//!
//! # Limits
//!
//! The parser enforces two limits from [`Limits`]:
//!
//! - `max_input_size`: source length in bytes (default: 16MB)
//! - `max_depth`: nesting depth of components, expressions and statements
//!   (default: 256)
//!
//! Every nested component, expression and statement costs one level, so a
//! hostile document cannot drive the recursion past the configured depth.

mod collections;
mod expressions;
mod literals;
mod statements;

use tracing::{debug, trace};

use crate::ast::Component;
use crate::error::{BaliError, BaliResult};
use crate::lex::{Token, TokenKind, TokenStream};
use crate::limits::Limits;

/// Parsing options for configuring Bali document parsing.
///
/// ```text
/// use bali_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .max_depth(64)
///     .max_input_size(1024 * 1024)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for configuring parse options.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the maximum source size in bytes.
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.limits.max_input_size = size;
        self
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.limits.max_depth = depth;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

/// Parse a document with default options.
pub fn parse(source: &str) -> BaliResult<Component> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse a document: a single component, an optional end of line, then the
/// end of input.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> BaliResult<Component> {
    debug!(bytes = source.len(), "parsing document");
    if source.len() > options.limits.max_input_size {
        return Err(BaliError::syntax(
            format!(
                "The document is {} bytes long, more than the limit of {} bytes",
                source.len(),
                options.limits.max_input_size
            ),
            0,
        ));
    }
    let mut parser = Parser::new(source, &options.limits);
    let result = parser.parse_document();
    match &result {
        Ok(_) => debug!("parsed document"),
        Err(err) => debug!(line = err.line, column = ?err.column, "parse failed: {}", err.message),
    }
    result
}

/// Parser state shared by every production.
pub(crate) struct Parser<'a> {
    stream: TokenStream<'a>,
    limits: &'a Limits,
    depth: usize,
    /// Productions currently being parsed, outermost first.
    trail: Vec<&'static str>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, limits: &'a Limits) -> Self {
        Self {
            stream: TokenStream::new(source),
            limits,
            depth: 0,
            trail: Vec::new(),
        }
    }

    fn parse_document(&mut self) -> BaliResult<Component> {
        self.within("$document", |p| {
            let component = match p.parse_component()? {
                Some(component) => component,
                None => return p.fail("$component"),
            };
            p.accept_kind(TokenKind::Eol);
            if !p.accept_kind(TokenKind::Eof) {
                return p.fail("$EOF");
            }
            Ok(component)
        })
    }

    // ==================== Token helpers ====================

    fn next_token(&mut self) -> Token {
        let token = self.stream.next_token();
        trace!(token = %token, "read");
        token
    }

    fn peek(&mut self) -> Token {
        self.stream.peek()
    }

    /// Consume the next token if it is the delimiter `text`.
    fn accept_delimiter(&mut self, text: &str) -> bool {
        let token = self.next_token();
        if token.is_delimiter(text) {
            return true;
        }
        self.stream.backup();
        false
    }

    /// Consume the next token if it is the keyword `text`.
    fn accept_keyword(&mut self, text: &str) -> bool {
        let token = self.next_token();
        if token.is_keyword(text) {
            return true;
        }
        self.stream.backup();
        false
    }

    fn accept_kind(&mut self, kind: TokenKind) -> bool {
        let token = self.next_token();
        if token.kind == kind {
            return true;
        }
        self.stream.backup();
        false
    }

    fn expect_delimiter(&mut self, text: &str, production: &'static str) -> BaliResult<()> {
        if self.accept_delimiter(text) {
            Ok(())
        } else {
            self.fail(production)
        }
    }

    fn expect_keyword(&mut self, text: &str, production: &'static str) -> BaliResult<()> {
        if self.accept_keyword(text) {
            Ok(())
        } else {
            self.fail(production)
        }
    }

    fn expect_kind(&mut self, kind: TokenKind, production: &'static str) -> BaliResult<Token> {
        let token = self.next_token();
        if token.kind == kind {
            return Ok(token);
        }
        self.stream.backup();
        self.fail(production)
    }

    /// Unwrap a required sub-production or fail at the current token.
    fn require<T>(&mut self, found: Option<T>, production: &'static str) -> BaliResult<T> {
        match found {
            Some(value) => Ok(value),
            None => self.fail(production),
        }
    }

    // ==================== Diagnostics ====================

    /// Fail at the next token. The expected chain lists `production` first,
    /// then the enclosing productions from innermost to outermost.
    fn fail<T>(&mut self, production: &'static str) -> BaliResult<T> {
        let token = self.next_token();
        let mut expected = vec![production];
        expected.extend(self.trail.iter().rev().filter(|name| **name != production));
        Err(BaliError::unexpected(&token, &expected))
    }

    /// Attach the position of `token` to an error raised while decoding it.
    fn at(token: &Token, err: BaliError) -> BaliError {
        let mut err = err.with_column(token.pos.column()).with_token(token.text.clone());
        err.line = token.pos.line();
        err
    }

    /// Run `f` with `production` on the trail.
    fn within<T>(
        &mut self,
        production: &'static str,
        f: impl FnOnce(&mut Self) -> BaliResult<T>,
    ) -> BaliResult<T> {
        self.trail.push(production);
        let result = f(self);
        self.trail.pop();
        result
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> BaliResult<T>) -> BaliResult<T> {
        if self.depth >= self.limits.max_depth {
            let token = self.peek();
            return Err(BaliError::syntax(
                format!("The document nests deeper than the limit of {} levels", self.limits.max_depth),
                token.pos.line(),
            )
            .with_column(token.pos.column()));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
