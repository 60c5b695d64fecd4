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

//! Scanner: turns source text into tokens.
//!
//! Several literal shapes share a leading character, so the attempt order in
//! [`classify`] decides what a run of text means. Longer and more specific
//! shapes are tried first: a probability `1.` before a plain real, a
//! percentage before a plain real, a quote before anything that would split
//! it, and reserved words before identifiers. The scanner never fails;
//! anything it cannot classify becomes a one-character delimiter that the
//! parser then rejects with full context.

use super::span::SourcePos;
use super::token::{Token, TokenKind};

/// Reserved words of the statement sublanguage and the logical operators.
pub const KEYWORDS: &[&str] = &[
    "accept", "as", "at", "break", "checkout", "continue", "discard", "do", "each", "from", "if",
    "in", "level", "loop", "matching", "notarize", "on", "post", "publish", "reject", "retrieve",
    "return", "save", "select", "throw", "to", "while", "with", "AND", "IS", "MATCHES", "NOT",
    "OR", "SANS", "XOR",
];

/// Delimiters, longest first.
const DELIMITERS: &[&str] = &[
    "<..<", "<..", "<-", "..<", "..", ":=", "/=", "//", "-=", "+=", "*=", "?=", "}", "|", "{",
    "^", "]", "[", "@", ">", "=", "≠", "<", ";", ":", "/", ".", "-", ",", "+", "*", ")", "(",
    "&",
];

const BASE32: &str = "0123456789ABCDFGHJKLMNPQRSTVWXYZ";

type Matcher = fn(&str) -> Option<usize>;

/// Attempt order for everything except end of line, words and delimiters.
const MATCHERS: &[(TokenKind, Matcher)] = &[
    (TokenKind::Comment, scan_comment),
    (TokenKind::Note, scan_note),
    (TokenKind::Narrative, scan_narrative),
    (TokenKind::Pattern, scan_pattern),
    (TokenKind::Quote, scan_quote),
    (TokenKind::Binary, scan_binary),
    (TokenKind::Moment, scan_moment),
    (TokenKind::Resource, scan_resource),
    (TokenKind::Duration, scan_duration),
    (TokenKind::Angle, scan_angle),
    (TokenKind::Tag, scan_tag),
    (TokenKind::Symbol, scan_symbol),
    (TokenKind::Version, scan_version),
    (TokenKind::Moniker, scan_moniker),
    (TokenKind::Number, scan_complex),
    (TokenKind::Probability, scan_probability),
    (TokenKind::Percentage, scan_percentage),
    (TokenKind::Number, scan_number),
];

/// Produces one token per call, tracking its position in the source.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: SourcePos,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: SourcePos::start(),
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> SourcePos {
        self.pos
    }

    /// Scan the next token. Returns `Eof` tokens forever once the input is
    /// exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_blanks();
        let start = self.pos;
        let rest = &self.source[start.offset()..];
        if rest.is_empty() {
            return Token::new(TokenKind::Eof, "", start);
        }
        let (kind, len) = classify(rest);
        let text = &rest[..len];
        self.pos.advance(text);
        Token::new(kind, text, start)
    }

    fn skip_blanks(&mut self) {
        let rest = &self.source[self.pos.offset()..];
        let blanks = rest
            .find(|c| !matches!(c, ' ' | '\t' | '\r'))
            .unwrap_or(rest.len());
        self.pos.advance(&rest[..blanks]);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Identify the token at the start of `rest`, which must not be empty.
pub(crate) fn classify(rest: &str) -> (TokenKind, usize) {
    if rest.starts_with('\n') {
        return (TokenKind::Eol, 1);
    }
    for (kind, matcher) in MATCHERS {
        if let Some(len) = matcher(rest) {
            return (*kind, len);
        }
    }
    if let Some(len) = scan_identifier(rest) {
        let word = &rest[..len];
        let kind = if word == "true" || word == "false" {
            TokenKind::Boolean
        } else if KEYWORDS.contains(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        return (kind, len);
    }
    let len = scan_delimiter(rest)
        .or_else(|| rest.chars().next().map(char::len_utf8))
        .unwrap_or(rest.len());
    (TokenKind::Delimiter, len)
}

/// Scan `text` completely as a single token of `kind`.
pub(crate) fn scan_exact(text: &str, kind: TokenKind) -> bool {
    if text.is_empty() {
        return false;
    }
    let (found, len) = classify(text);
    found == kind && len == text.len()
}

// ==================== Helpers ====================

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn next_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// True when `s` does not continue a word.
fn at_boundary(s: &str) -> bool {
    !next_char(s).map_or(false, is_word_char)
}

fn scan_keyword_like(s: &str, word: &str) -> Option<usize> {
    (s.starts_with(word) && at_boundary(&s[word.len()..])).then_some(word.len())
}

fn count_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// `"1".."9" {"0".."9"}`
fn scan_ordinal(s: &str) -> Option<usize> {
    match s.as_bytes().first() {
        Some(b'1'..=b'9') => Some(1 + count_digits(&s[1..])),
        _ => None,
    }
}

/// `"." <"0".."9">`
fn scan_fraction(s: &str) -> Option<usize> {
    if !s.starts_with('.') {
        return None;
    }
    match count_digits(&s[1..]) {
        0 => None,
        n => Some(1 + n),
    }
}

/// Matches a region delimited by `open` and `close`, which may nest. An
/// opener only counts when it ends its line.
fn scan_nested(s: &str, open: &str, close: &str) -> Option<usize> {
    let opens_here = |rest: &str| rest.starts_with(open) && rest[open.len()..].starts_with('\n');
    if !opens_here(s) {
        return None;
    }
    let mut depth = 0usize;
    let mut i = 0;
    while i < s.len() {
        let rest = &s[i..];
        if opens_here(rest) {
            depth += 1;
            i += open.len();
        } else if rest.starts_with(close) {
            depth -= 1;
            i += close.len();
            if depth == 0 {
                return Some(i);
            }
        } else {
            i += next_char(rest)?.len_utf8();
        }
    }
    None
}

// ==================== Annotations and text ====================

fn scan_comment(s: &str) -> Option<usize> {
    scan_nested(s, "!>", "<!")
}

fn scan_note(s: &str) -> Option<usize> {
    if !s.starts_with("! ") {
        return None;
    }
    Some(memchr::memchr(b'\n', s.as_bytes()).unwrap_or(s.len()))
}

fn scan_narrative(s: &str) -> Option<usize> {
    scan_nested(s, "\">", "<\"")
}

/// A double quoted run of runes on a single line, escapes included.
fn scan_quote(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some(i + 1),
            '\\' => match chars.next() {
                Some((_, '\n' | '\r')) | None => return None,
                Some(_) => {}
            },
            '\n' | '\r' => return None,
            _ => {}
        }
    }
    None
}

fn scan_pattern(s: &str) -> Option<usize> {
    if let Some(len) = scan_keyword_like(s, "none").or_else(|| scan_keyword_like(s, "any")) {
        return Some(len);
    }
    let len = scan_quote(s)?;
    (len > 2 && s[len..].starts_with('?')).then_some(len + 1)
}

fn scan_binary(s: &str) -> Option<usize> {
    if !s.starts_with('\'') {
        return None;
    }
    for (i, c) in s.char_indices().skip(1) {
        match c {
            '\'' => return Some(i + 1),
            c if c.is_ascii_alphanumeric() => {}
            '+' | '/' | '=' | ' ' | '\t' | '\r' | '\n' => {}
            _ => return None,
        }
    }
    None
}

fn scan_tag(s: &str) -> Option<usize> {
    if !s.starts_with('#') {
        return None;
    }
    let digits = s[1..].chars().take_while(|c| BASE32.contains(*c)).count();
    (digits > 0 && at_boundary(&s[1 + digits..])).then_some(1 + digits)
}

fn scan_identifier(s: &str) -> Option<usize> {
    let first = next_char(s)?;
    if !first.is_alphabetic() {
        return None;
    }
    let tail: usize = s[first.len_utf8()..]
        .chars()
        .take_while(|c| is_word_char(*c))
        .map(char::len_utf8)
        .sum();
    Some(first.len_utf8() + tail)
}

fn scan_symbol(s: &str) -> Option<usize> {
    if !s.starts_with('$') {
        return None;
    }
    scan_identifier(&s[1..]).map(|n| n + 1)
}

fn scan_version(s: &str) -> Option<usize> {
    if !s.starts_with('v') {
        return None;
    }
    let mut i = 1 + scan_ordinal(&s[1..])?;
    while s[i..].starts_with('.') {
        match scan_ordinal(&s[i + 1..]) {
            Some(n) => i += 1 + n,
            None => break,
        }
    }
    at_boundary(&s[i..]).then_some(i)
}

/// `LETTER {[SEPARATOR] (LETTER | DIGIT)}`
fn scan_name(s: &str) -> Option<usize> {
    let first = next_char(s)?;
    if !first.is_alphabetic() {
        return None;
    }
    let mut i = first.len_utf8();
    loop {
        let rest = &s[i..];
        match next_char(rest) {
            Some(c) if is_word_char(c) => i += c.len_utf8(),
            Some(sep @ ('-' | '+' | '.')) => match next_char(&rest[1..]) {
                Some(c) if is_word_char(c) => i += sep.len_utf8() + c.len_utf8(),
                _ => break,
            },
            _ => break,
        }
    }
    Some(i)
}

fn scan_moniker(s: &str) -> Option<usize> {
    let mut i = 0;
    while s[i..].starts_with('/') {
        match scan_name(&s[i + 1..]) {
            Some(n) => i += 1 + n,
            None => break,
        }
    }
    (i > 0).then_some(i)
}

// ==================== Resources and temporal literals ====================

fn scan_moment(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.first() != Some(&b'<') {
        return None;
    }
    let mut i = 1;
    if matches!(b.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    i += scan_ordinal(&s[i..])?;
    let two_digits = |at: usize| {
        b.get(at).map_or(false, u8::is_ascii_digit) && b.get(at + 1).map_or(false, u8::is_ascii_digit)
    };
    let mut fields = 0;
    for separator in [b'-', b'-', b'T', b':', b':'] {
        if b.get(i) == Some(&separator) && two_digits(i + 1) {
            i += 3;
            fields += 1;
        } else {
            break;
        }
    }
    if fields == 5 {
        if let Some(n) = scan_fraction(&s[i..]) {
            i += n;
        }
    }
    (b.get(i) == Some(&b'>')).then_some(i + 1)
}

fn scan_resource(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.first() != Some(&b'<') || !b.get(1).map_or(false, u8::is_ascii_alphabetic) {
        return None;
    }
    let scheme = 1 + b[1..]
        .iter()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.'))
        .count();
    if b.get(scheme) != Some(&b':') {
        return None;
    }
    let body = &s[scheme + 1..];
    for (i, c) in body.char_indices() {
        match c {
            '>' if i > 0 => return Some(scheme + 1 + i + 1),
            '>' | '<' | '"' => return None,
            c if c.is_whitespace() => return None,
            _ => {}
        }
    }
    None
}

/// `("0" | ORDINAL) [FRACTION]`
fn scan_timespan(s: &str) -> Option<usize> {
    let whole = if s.starts_with('0') { 1 } else { scan_ordinal(s)? };
    Some(whole + scan_fraction(&s[whole..]).unwrap_or(0))
}

/// Consume `TSPAN unit` if present.
fn scan_unit(s: &str, unit: char) -> Option<usize> {
    let n = scan_timespan(s)?;
    s[n..].starts_with(unit).then_some(n + 1)
}

fn scan_duration(s: &str) -> Option<usize> {
    if !s.starts_with('~') {
        return None;
    }
    let mut i = 1;
    if s[i..].starts_with(['+', '-']) {
        i += 1;
    }
    if !s[i..].starts_with('P') {
        return None;
    }
    i += 1;
    if let Some(n) = scan_unit(&s[i..], 'W') {
        return Some(i + n);
    }
    let mut found = false;
    for unit in ['Y', 'M', 'D'] {
        if let Some(n) = scan_unit(&s[i..], unit) {
            i += n;
            found = true;
        }
    }
    if s[i..].starts_with('T') {
        let mut j = i + 1;
        for unit in ['H', 'M', 'S'] {
            if let Some(n) = scan_unit(&s[j..], unit) {
                j += n;
            }
        }
        if j == i + 1 {
            return None;
        }
        i = j;
        found = true;
    }
    found.then_some(i)
}

// ==================== Numeric literals ====================

/// `(ORDINAL [FRACTION] | "0" [FRACTION]) [EXPONENT]`
fn scan_scalar(s: &str) -> Option<usize> {
    let mut i = if s.starts_with('0') { 1 } else { scan_ordinal(s)? };
    if let Some(n) = scan_fraction(&s[i..]) {
        i += n;
    } else if i == 1 && s.starts_with('0') {
        return Some(1);
    }
    if s[i..].starts_with('E') {
        let mut j = i + 1;
        if s[j..].starts_with(['+', '-']) {
            j += 1;
        }
        if let Some(n) = scan_ordinal(&s[j..]) {
            i = j + n;
        }
    }
    Some(i)
}

/// A signed real without the word-boundary check on named constants.
fn scan_real_raw(s: &str) -> Option<usize> {
    let sign = usize::from(s.starts_with(['+', '-']));
    let rest = &s[sign..];
    for constant in ["π", "φ", "τ", "pi", "phi", "tau", "e"] {
        if rest.starts_with(constant) {
            return Some(sign + constant.len());
        }
    }
    scan_scalar(rest).map(|n| sign + n)
}

/// A signed real. Named constants spelled with letters must end a word.
pub(crate) fn scan_real(s: &str) -> Option<usize> {
    let n = scan_real_raw(s)?;
    let spelled = s[..n].chars().last().map_or(false, |c| c.is_ascii_alphabetic());
    (!spelled || at_boundary(&s[n..])).then_some(n)
}

fn scan_angle(s: &str) -> Option<usize> {
    if !s.starts_with('~') {
        return None;
    }
    scan_real(&s[1..]).map(|n| n + 1)
}

fn scan_imaginary(s: &str) -> Option<usize> {
    let coefficient = scan_real_raw(s)
        .or_else(|| s.starts_with(['+', '-']).then_some(1))
        .unwrap_or(0);
    let rest = &s[coefficient..];
    (rest.starts_with('i') && at_boundary(&rest[1..])).then_some(coefficient + 1)
}

/// Rectangular `(re, imi)` or polar `(r e^~θi)` complex numbers.
fn scan_complex(s: &str) -> Option<usize> {
    if !s.starts_with('(') {
        return None;
    }
    let mut i = 1 + scan_real(&s[1..])?;
    if s[i..].starts_with(", ") {
        i += 2;
        i += scan_imaginary(&s[i..])?;
    } else {
        if s[i..].starts_with(' ') {
            i += 1;
        }
        if !s[i..].starts_with("e^") {
            return None;
        }
        i += 2;
        i += scan_angle(&s[i..])?;
        if s[i..].starts_with(' ') {
            i += 1;
        }
        if !s[i..].starts_with('i') {
            return None;
        }
        i += 1;
    }
    s[i..].starts_with(')').then_some(i + 1)
}

fn scan_probability(s: &str) -> Option<usize> {
    if let Some(n) = scan_fraction(s) {
        return Some(n);
    }
    let after = s.strip_prefix("1.")?;
    (!after.starts_with('.') && !next_char(after).map_or(false, |c| c.is_ascii_digit()))
        .then_some(2)
}

fn scan_percentage(s: &str) -> Option<usize> {
    let n = scan_real(s)?;
    s[n..].starts_with('%').then_some(n + 1)
}

fn scan_number(s: &str) -> Option<usize> {
    if let Some(n) = scan_keyword_like(s, "undefined") {
        return Some(n);
    }
    let sign = usize::from(s.starts_with(['+', '-']));
    if s[sign..].starts_with('∞') {
        return Some(sign + '∞'.len_utf8());
    }
    if let Some(n) = scan_keyword_like(&s[sign..], "infinity") {
        return Some(sign + n);
    }
    scan_imaginary(s).or_else(|| scan_real(s))
}

// ==================== Delimiters ====================

fn scan_delimiter(s: &str) -> Option<usize> {
    let delimiter = DELIMITERS.iter().find(|d| s.starts_with(**d))?;
    // `..<` directly before a moment or resource is `..` followed by it.
    if delimiter.ends_with("..<") {
        let opening = delimiter.len() - 1;
        let rest = &s[opening..];
        if scan_moment(rest).is_some() || scan_resource(rest).is_some() {
            return Some(opening);
        }
    }
    Some(delimiter.len())
}
