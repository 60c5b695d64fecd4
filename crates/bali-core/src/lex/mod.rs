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

//! Lexical analysis: positions, tokens, the scanner and the parser's token
//! stream.

mod scanner;
mod span;
mod stream;
mod token;

pub use scanner::{Scanner, KEYWORDS};
pub use span::SourcePos;
pub use stream::{Mark, TokenStream};
pub use token::{Token, TokenCategory, TokenKind};

pub(crate) use scanner::{classify, scan_exact};
