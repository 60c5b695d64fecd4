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

//! Fixtures for single literals: elements and strings.

use crate::FixtureList;

/// One fixture per element shape, including the spellings that are easy to
/// confuse: probabilities against reals, durations against angles, moments
/// against resources.
pub fn elements() -> FixtureList {
    vec![
        ("angle_zero", "~0"),
        ("angle_pi", "~π"),
        ("angle_scientific", "~1.23456789E-10"),
        ("boolean", "false"),
        ("duration", "~P12Y3M4DT5H6M7.890S"),
        ("duration_weeks", "~-P13W"),
        ("moment_year", "<1776>"),
        ("moment_date", "<1962-04-25>"),
        ("moment_precise", "<-1-02-03T04:05:06.789>"),
        ("number_integer", "42"),
        ("number_negative", "-2.5"),
        ("number_constant", "π"),
        ("number_infinite", "-∞"),
        ("number_imaginary", "4i"),
        ("number_complex", "(3, 4i)"),
        ("pattern_regex", "\"ca+t\"?"),
        ("pattern_any", "any"),
        ("percentage", "50%"),
        ("probability", ".75"),
        ("probability_certain", "1."),
        ("resource", "<https://bali-nebula.net/types/Number?version=1#top>"),
        ("symbol", "$exception"),
        ("tag", "#BXC4F8Y7GR"),
    ]
}

/// One fixture per string shape.
pub fn strings() -> FixtureList {
    vec![
        ("binary", "'AQID'"),
        ("moniker", "/bali/types/Number/v1.2.3"),
        ("narrative", "\">\n    This is a \"narrative\".\n<\""),
        ("quote", "\"hello\""),
        ("quote_escapes", "\"tab\\there \\\"quoted\\\" A\""),
        ("version", "v1.2.3"),
    ]
}
