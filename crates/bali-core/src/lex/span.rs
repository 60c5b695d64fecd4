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

//! Source positions for tokens and diagnostics.
//!
//! # Examples
//!
//! ```
//! use bali_core::lex::SourcePos;
//!
//! let pos = SourcePos::new(10, 25, 300);
//! assert_eq!(pos.line(), 10);
//! assert_eq!(pos.column(), 25);
//! assert_eq!(pos.offset(), 300);
//! ```

use std::fmt;

/// A position in source text.
///
/// Lines and columns are 1-indexed and count characters, the offset is the
/// 0-indexed byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePos {
    line: usize,
    column: usize,
    offset: usize,
}

impl SourcePos {
    /// Creates a new source position.
    #[inline]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Creates a position at the start of the source (line 1, column 1).
    #[inline]
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the byte offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Advances the position past `text`, tracking line breaks.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
