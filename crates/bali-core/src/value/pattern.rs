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

//! Patterns: `none`, `any`, or a regular expression written as `"regex"?`.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::BaliError;
use crate::lex::{scan_exact, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    /// Matches nothing.
    None,
    /// Matches everything.
    Any,
    /// The expression text exactly as written between the quotes.
    Regex(String),
}

impl Pattern {
    /// Compile the pattern and test `text` against it. The expression must
    /// match the whole text.
    pub fn matches_text(&self, text: &str) -> Result<bool, regex::Error> {
        match self {
            Pattern::None => Ok(false),
            Pattern::Any => Ok(true),
            Pattern::Regex(source) => {
                let anchored = Regex::new(&format!("^(?:{})$", source))?;
                Ok(anchored.is_match(text))
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::None => f.write_str("none"),
            Pattern::Any => f.write_str("any"),
            Pattern::Regex(source) => write!(f, "\"{}\"?", source),
        }
    }
}

impl FromStr for Pattern {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Pattern) {
            return Err(BaliError::syntax(format!("{:?} is not a valid pattern", s), 0));
        }
        Ok(match s {
            "none" => Pattern::None,
            "any" => Pattern::Any,
            _ => Pattern::Regex(s[1..s.len() - 2].to_string()),
        })
    }
}
