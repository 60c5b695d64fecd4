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

//! Error types for Bali parsing and formatting.

use std::fmt;
use thiserror::Error;

use crate::grammar;
use crate::lex::Token;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaliErrorKind {
    /// Scanner or parser could not match the input against the grammar.
    Syntax,
    /// Formatter was asked to render a tree it cannot express.
    Format,
    /// A range was built from endpoints of different scalar types.
    Range,
    /// Reading or writing document text failed.
    Io,
}

impl fmt::Display for BaliErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Format => write!(f, "FormatError"),
            Self::Range => write!(f, "RangeError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error raised by the parser, the formatter or a value constructor.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct BaliError {
    /// The kind of error.
    pub kind: BaliErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when the error has no source position).
    pub line: usize,
    /// Column number (1-based, optional).
    pub column: Option<usize>,
    /// Raw text of the offending token.
    pub token: Option<String>,
    /// Grammar productions that were being attempted, most specific first.
    pub expected: Vec<&'static str>,
    /// Additional context supplied by the caller.
    pub context: Option<String>,
}

impl BaliError {
    /// Create a new error.
    pub fn new(kind: BaliErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column: None,
            token: None,
            expected: Vec::new(),
            context: None,
        }
    }

    /// Build a syntax error pointing at `token`.
    pub fn unexpected(token: &Token, expected: &[&'static str]) -> Self {
        let message = format!(
            "An unexpected token was received by the parser: {}",
            token.describe()
        );
        Self::syntax(message, token.pos.line())
            .with_column(token.pos.column())
            .with_token(token.text.clone())
            .with_expected(expected)
    }

    /// Add column information.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Record the offending token text.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Record the production chain, most specific first.
    pub fn with_expected(mut self, expected: &[&'static str]) -> Self {
        self.expected = expected.to_vec();
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(BaliErrorKind::Syntax, message, line)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(BaliErrorKind::Format, message, 0)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(BaliErrorKind::Range, message, 0)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(BaliErrorKind::Io, message, 0)
    }

    /// Render a multi-line diagnostic against the source it was raised for.
    ///
    /// The report shows the offending line with a caret under the column,
    /// followed by the rule text for each expected production.
    pub fn report(&self, source: &str) -> String {
        let mut out = String::new();
        out.push_str(&self.to_string());
        out.push('\n');
        if self.line > 0 {
            if let Some(text) = source_line(source, self.line) {
                out.push_str(&format!("{:04}: {}\n", self.line, text));
                if let Some(column) = self.column {
                    out.push_str(&" ".repeat(column + 5));
                    out.push_str("^\n");
                }
            }
        }
        if !self.expected.is_empty() {
            out.push_str("Was expecting:\n");
            for name in &self.expected {
                match grammar::rule(name) {
                    Some(rule) => {
                        out.push_str(&format!("  \x1b[32m{}: \x1b[33m{}\x1b[0m\n", name, rule.trim()))
                    }
                    None => out.push_str(&format!("  \x1b[32m{}\x1b[0m\n", name)),
                }
            }
        }
        if let Some(context) = &self.context {
            out.push_str(&format!("({})\n", context));
        }
        out
    }
}

/// Return the 1-based `line` of `source` without its terminator.
fn source_line(source: &str, line: usize) -> Option<&str> {
    let bytes = source.as_bytes();
    let mut start = 0;
    for _ in 1..line {
        let newline = memchr::memchr(b'\n', &bytes[start..])?;
        start += newline + 1;
    }
    let end = memchr::memchr(b'\n', &bytes[start..])
        .map(|i| start + i)
        .unwrap_or(bytes.len());
    Some(&source[start..end])
}

/// Result type for Bali operations.
pub type BaliResult<T> = Result<T, BaliError>;
