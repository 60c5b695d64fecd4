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

//! Operators and the categories they belong to.

use std::fmt;

/// The kind of expression an operator builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Logical,
    Invocation,
    Inversion,
    Assignment,
    Exponential,
    Chaining,
    Dereference,
}

/// Every operator of the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Modulo,
    // Comparison
    Less,
    Equal,
    More,
    Unequal,
    Is,
    Matches,
    // Logical
    And,
    Or,
    Sans,
    Xor,
    Not,
    // Invocation
    Dot,
    Arrow,
    // Inversion, written as unary prefixes `-`, `/` and `*`
    Inverse,
    Reciprocal,
    Conjugate,
    // Assignment
    Assign,
    Sum,
    Difference,
    Product,
    Quotient,
    Default,
    // The rest have one operator each
    Caret,
    Ampersand,
    At,
}

impl Operator {
    pub fn category(self) -> OperatorCategory {
        use Operator::*;
        match self {
            Plus | Minus | Star | Slash | Modulo => OperatorCategory::Arithmetic,
            Less | Equal | More | Unequal | Is | Matches => OperatorCategory::Comparison,
            And | Or | Sans | Xor | Not => OperatorCategory::Logical,
            Dot | Arrow => OperatorCategory::Invocation,
            Inverse | Reciprocal | Conjugate => OperatorCategory::Inversion,
            Assign | Sum | Difference | Product | Quotient | Default => {
                OperatorCategory::Assignment
            }
            Caret => OperatorCategory::Exponential,
            Ampersand => OperatorCategory::Chaining,
            At => OperatorCategory::Dereference,
        }
    }

    pub fn as_str(self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "+",
            Minus | Inverse => "-",
            Star | Conjugate => "*",
            Slash | Reciprocal => "/",
            Modulo => "//",
            Less => "<",
            Equal => "=",
            More => ">",
            Unequal => "≠",
            Is => "IS",
            Matches => "MATCHES",
            And => "AND",
            Or => "OR",
            Sans => "SANS",
            Xor => "XOR",
            Not => "NOT",
            Dot => ".",
            Arrow => "<-",
            Assign => ":=",
            Sum => "+=",
            Difference => "-=",
            Product => "*=",
            Quotient => "/=",
            Default => "?=",
            Caret => "^",
            Ampersand => "&",
            At => "@",
        }
    }

    /// The operator a token spells when it follows an operand. Unary
    /// prefixes are looked up with [`Operator::prefix`] instead.
    pub fn infix(text: &str) -> Option<Operator> {
        use Operator::*;
        Some(match text {
            "+" => Plus,
            "-" => Minus,
            "*" => Star,
            "/" => Slash,
            "//" => Modulo,
            "<" => Less,
            "=" => Equal,
            ">" => More,
            "≠" => Unequal,
            "IS" => Is,
            "MATCHES" => Matches,
            "AND" => And,
            "OR" => Or,
            "SANS" => Sans,
            "XOR" => Xor,
            "." => Dot,
            "<-" => Arrow,
            ":=" => Assign,
            "+=" => Sum,
            "-=" => Difference,
            "*=" => Product,
            "/=" => Quotient,
            "?=" => Default,
            "^" => Caret,
            "&" => Ampersand,
            _ => return None,
        })
    }

    /// The operator a token spells when it comes before its operand.
    pub fn prefix(text: &str) -> Option<Operator> {
        match text {
            "-" => Some(Operator::Inverse),
            "/" => Some(Operator::Reciprocal),
            "*" => Some(Operator::Conjugate),
            "NOT" => Some(Operator::Not),
            "@" => Some(Operator::At),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table() {
        for text in ["+", "-", "*", "/", "//"] {
            assert_eq!(Operator::infix(text).unwrap().category(), OperatorCategory::Arithmetic);
        }
        for text in ["<", "=", ">", "≠", "IS", "MATCHES"] {
            assert_eq!(Operator::infix(text).unwrap().category(), OperatorCategory::Comparison);
        }
        for text in ["AND", "OR", "SANS", "XOR"] {
            assert_eq!(Operator::infix(text).unwrap().category(), OperatorCategory::Logical);
        }
        for text in [":=", "+=", "-=", "*=", "/=", "?="] {
            assert_eq!(Operator::infix(text).unwrap().category(), OperatorCategory::Assignment);
        }
        assert_eq!(Operator::infix("<-").unwrap().category(), OperatorCategory::Invocation);
        assert_eq!(Operator::infix("^").unwrap().category(), OperatorCategory::Exponential);
        assert_eq!(Operator::infix("&").unwrap().category(), OperatorCategory::Chaining);
        assert_eq!(Operator::prefix("@").unwrap().category(), OperatorCategory::Dereference);
        assert_eq!(Operator::prefix("NOT").unwrap().category(), OperatorCategory::Logical);
    }

    #[test]
    fn test_prefix_operators_are_inversions() {
        for text in ["-", "/", "*"] {
            let operator = Operator::prefix(text).unwrap();
            assert_eq!(operator.category(), OperatorCategory::Inversion);
            assert_eq!(operator.as_str(), text);
        }
    }

    #[test]
    fn test_unknown_text() {
        assert_eq!(Operator::infix("|"), None);
        assert_eq!(Operator::prefix("+"), None);
    }
}
