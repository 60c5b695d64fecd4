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

//! Tokens produced by the scanner.

use std::fmt;

use super::span::SourcePos;

/// The shape of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Angle,
    Binary,
    Boolean,
    Comment,
    Delimiter,
    Duration,
    Eof,
    Eol,
    Identifier,
    Keyword,
    Moment,
    Moniker,
    Narrative,
    Note,
    Number,
    Pattern,
    Percentage,
    Probability,
    Quote,
    Resource,
    Symbol,
    Tag,
    Version,
}

/// The broad category a token falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Delimiter,
    Identifier,
    Keyword,
    NumericLiteral,
    StringLiteral,
    Annotation,
    EndOfLine,
    EndOfInput,
}

impl TokenKind {
    pub fn category(self) -> TokenCategory {
        match self {
            Self::Delimiter => TokenCategory::Delimiter,
            Self::Identifier => TokenCategory::Identifier,
            Self::Keyword => TokenCategory::Keyword,
            Self::Angle
            | Self::Duration
            | Self::Moment
            | Self::Number
            | Self::Percentage
            | Self::Probability => TokenCategory::NumericLiteral,
            Self::Binary
            | Self::Boolean
            | Self::Moniker
            | Self::Narrative
            | Self::Pattern
            | Self::Quote
            | Self::Resource
            | Self::Symbol
            | Self::Tag
            | Self::Version => TokenCategory::StringLiteral,
            Self::Comment | Self::Note => TokenCategory::Annotation,
            Self::Eol => TokenCategory::EndOfLine,
            Self::Eof => TokenCategory::EndOfInput,
        }
    }

    /// Grammar production name of the token shape, used in diagnostics.
    pub fn production(self) -> &'static str {
        match self {
            Self::Angle => "$ANGLE",
            Self::Binary => "$BINARY",
            Self::Boolean => "$BOOLEAN",
            Self::Comment => "$COMMENT",
            Self::Delimiter => "$DELIMITER",
            Self::Duration => "$DURATION",
            Self::Eof => "$EOF",
            Self::Eol => "$EOL",
            Self::Identifier => "$IDENTIFIER",
            Self::Keyword => "$KEYWORD",
            Self::Moment => "$MOMENT",
            Self::Moniker => "$MONIKER",
            Self::Narrative => "$NARRATIVE",
            Self::Note => "$NOTE",
            Self::Number => "$NUMBER",
            Self::Pattern => "$PATTERN",
            Self::Percentage => "$PERCENTAGE",
            Self::Probability => "$PROBABILITY",
            Self::Quote => "$QUOTE",
            Self::Resource => "$RESOURCE",
            Self::Symbol => "$SYMBOL",
            Self::Tag => "$TAG",
            Self::Version => "$VERSION",
        }
    }
}

/// A scanned token. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: SourcePos,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// True for a delimiter token with exactly this text.
    pub fn is_delimiter(&self, text: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.text == text
    }

    /// True for a keyword token with exactly this text.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == text
    }

    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "<EOF>".to_string(),
            TokenKind::Eol => "<EOL>".to_string(),
            _ => format!("{} {:?}", self.kind.production(), self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.describe(), self.pos)
    }
}
