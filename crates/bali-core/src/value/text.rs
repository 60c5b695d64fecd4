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

//! String-shaped values: binaries, monikers, narratives, quotes and symbols.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::BaliError;
use crate::lex::{scan_exact, TokenKind};

fn invalid(kind: &str, text: &str) -> BaliError {
    BaliError::syntax(format!("{:?} is not a valid {}", text, kind), 0)
}

fn checked(text: &str, kind: TokenKind, name: &str) -> Result<(), BaliError> {
    if scan_exact(text, kind) {
        Ok(())
    } else {
        Err(invalid(name, text))
    }
}

// ==================== Binary ====================

/// A byte string, base-64 encoded between single quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Binary(Vec<u8>);

impl Binary {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", STANDARD.encode(&self.0))
    }
}

impl FromStr for Binary {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        checked(s, TokenKind::Binary, "binary")?;
        let encoded: String = s[1..s.len() - 1]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        STANDARD
            .decode(encoded)
            .map(Binary)
            .map_err(|e| invalid("binary", s).with_context(e.to_string()))
    }
}

// ==================== Moniker ====================

/// A slash separated path of names, e.g. `/bali/types/Number/v1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Moniker(Vec<String>);

impl Moniker {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Moniker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Moniker {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        checked(s, TokenKind::Moniker, "moniker")?;
        Ok(Moniker::new(s[1..].split('/')))
    }
}

// ==================== Narrative ====================

/// Multi-line block text. The text between the delimiters is kept verbatim,
/// including the line break after the opener and the indentation before the
/// closer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Narrative(String);

impl Narrative {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The content lines, without the opening and closing delimiter lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let body = self.0.strip_prefix('\n').unwrap_or(&self.0);
        let body = match body.rfind('\n') {
            Some(end) => &body[..end],
            None => "",
        };
        body.split('\n').filter(move |_| !body.is_empty())
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\">{}<\"", self.0)
    }
}

impl FromStr for Narrative {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        checked(s, TokenKind::Narrative, "narrative")?;
        Ok(Narrative(s[2..s.len() - 2].to_string()))
    }
}

// ==================== Quote ====================

/// Single line text. Holds the decoded runes; escapes are restored when the
/// quote is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Quote(String);

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The single rune this quote holds, if it holds exactly one.
    pub fn as_rune(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Decode the escapes in the body of a quote.
pub(crate) fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next()? {
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0B}',
            width @ ('u' | 'U') => {
                let digits = if width == 'u' { 4 } else { 8 };
                let hex: String = chars.by_ref().take(digits).collect();
                if hex.len() != digits {
                    return None;
                }
                char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?
            }
            _ => return None,
        };
        out.push(decoded);
    }
    Some(out)
}

/// Write `text` as the body of a quote.
pub(crate) fn escape(text: &str, f: &mut impl fmt::Write) -> fmt::Result {
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\u{07}' => f.write_str("\\a")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0B}' => f.write_str("\\v")?,
            c if c.is_control() && (c as u32) <= 0xFFFF => write!(f, "\\u{:04x}", c as u32)?,
            c if c.is_control() => write!(f, "\\U{:08x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        escape(&self.0, f)?;
        f.write_char('"')
    }
}

impl FromStr for Quote {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        checked(s, TokenKind::Quote, "quote")?;
        unescape(&s[1..s.len() - 1])
            .map(Quote)
            .ok_or_else(|| invalid("quote", s))
    }
}

// ==================== Symbol ====================

/// A `$name`, used to bind exceptions and address attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// The name without its `$`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        checked(s, TokenKind::Symbol, "symbol")?;
        Ok(Symbol(s[1..].to_string()))
    }
}

/// Write a rune as a one-rune quote.
pub fn format_rune(rune: char) -> String {
    let mut out = String::from("\"");
    // Writing into a String cannot fail.
    let _ = escape(rune.encode_utf8(&mut [0; 4]), &mut out);
    out.push('"');
    out
}
