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

//! Error test fixtures.
//!
//! Invalid documents and the kind of error each must raise.

use bali_core::BaliErrorKind;

/// Invalid Bali text samples for parser error testing.
///
/// Each tuple contains (name, text, expected error kind).
pub fn invalid_samples() -> Vec<(&'static str, &'static str, BaliErrorKind)> {
    use BaliErrorKind::*;
    vec![
        ("empty", "", Syntax),
        ("whitespace_only", "   \t  ", Syntax),
        ("unknown_character", "`", Syntax),
        ("unclosed_list", "[1, 2", Syntax),
        ("trailing_comma", "[1, ]", Syntax),
        ("trailing_tokens", "1 2", Syntax),
        ("missing_parameter_value", "[ ] ($type: )", Syntax),
        ("unclosed_procedure", "{return 1", Syntax),
        ("break_without_loop", "{break}", Syntax),
        ("if_without_do", "{if $x return}", Syntax),
        ("select_without_cases", "{select $x}", Syntax),
        ("literal_recipient", "{5 := 1}", Syntax),
        ("dangling_operator", "{return a +}", Syntax),
        ("mismatched_endpoints", "[1..~π]", Range),
    ]
}

/// Expressions that must fail inside a `{return ...}` statement.
pub fn invalid_expressions() -> Vec<(&'static str, &'static str)> {
    vec![
        ("unclosed_paren", "size("),
        ("unclosed_magnitude", "|a"),
        ("trailing_dot", "a."),
        ("unclosed_item", "a[1"),
        ("empty_indices", "a[]"),
        ("trailing_argument_comma", "size(a,)"),
    ]
}
