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

//! Buffered token stream with pushback.

use super::scanner::Scanner;
use super::token::Token;

/// A saved stream position, see [`TokenStream::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Token source for the parser.
///
/// Every token read is kept, so a committed production can push back the
/// token it just read, and a speculative production can rewind to a mark
/// taken before it started.
#[derive(Debug)]
pub struct TokenStream<'a> {
    scanner: Scanner<'a>,
    tokens: Vec<Token>,
    next: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            tokens: Vec::new(),
            next: 0,
        }
    }

    /// Read the next token.
    pub fn next_token(&mut self) -> Token {
        if self.next == self.tokens.len() {
            let token = self.scanner.next_token();
            self.tokens.push(token);
        }
        let token = self.tokens[self.next].clone();
        self.next += 1;
        token
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Token {
        let token = self.next_token();
        self.backup();
        token
    }

    /// Push back the most recently read token.
    pub fn backup(&mut self) {
        self.next = self.next.saturating_sub(1);
    }

    pub fn mark(&self) -> Mark {
        Mark(self.next)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.next = mark.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::TokenKind;

    #[test]
    fn test_backup_rereads_same_token() {
        let mut stream = TokenStream::new("a b");
        assert_eq!(stream.next_token().text, "a");
        stream.backup();
        assert_eq!(stream.next_token().text, "a");
        assert_eq!(stream.next_token().text, "b");
    }

    #[test]
    fn test_mark_and_reset_span_many_tokens() {
        let mut stream = TokenStream::new("[1, 2, 3]");
        stream.next_token();
        let mark = stream.mark();
        for _ in 0..5 {
            stream.next_token();
        }
        stream.reset(mark);
        assert_eq!(stream.next_token().text, "1");
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut stream = TokenStream::new("x");
        assert_eq!(stream.peek().text, "x");
        assert_eq!(stream.next_token().text, "x");
    }

    #[test]
    fn test_eof_is_sticky_and_backs_up() {
        let mut stream = TokenStream::new("x");
        stream.next_token();
        assert_eq!(stream.next_token().kind, TokenKind::Eof);
        assert_eq!(stream.next_token().kind, TokenKind::Eof);
        stream.backup();
        assert_eq!(stream.next_token().kind, TokenKind::Eof);
    }
}
