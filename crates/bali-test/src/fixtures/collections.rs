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

//! Fixtures for collections, ranges, parameters and annotations.

use crate::FixtureList;

pub fn collections() -> FixtureList {
    vec![
        ("empty_list", "[ ]"),
        ("empty_catalog", "[:]"),
        ("single_item", "[42]"),
        ("list", "[\n    1\n    2\n    3\n]"),
        ("catalog", "[\n    $name: \"Alice\"\n    $age: 42\n]"),
        ("string_keys", "[\n    \"alpha\": 1\n    \"beta\": 2\n]"),
        ("nested", "[\n    [\n        1\n        2\n    ]\n    [:]\n]"),
        (
            "nested_catalog",
            "[\n    $point: [\n        $x: 1\n        $y: 2\n    ]\n    $label: \"origin\"\n]",
        ),
    ]
}

/// Ranges over the scalar domains, open and closed at either end.
pub fn ranges() -> FixtureList {
    vec![
        ("range_inclusive", "[1..5]"),
        ("range_exclusive", "[0<..<1]"),
        ("range_open_start", "[..<0]"),
        ("range_open_end", "[v1.2..]"),
        ("range_runes", "[\"a\"..\"z\"]"),
        ("range_angles", "[~0..~π]"),
        ("range_moments", "[<2001>..<2002>]"),
    ]
}

/// Parameters and annotations attached to components.
pub fn contexts() -> FixtureList {
    vec![
        ("context", "[ ] ($type: /bali/collections/List/v1)"),
        (
            "context_multiple",
            "[\n    $x: 1\n    $y: 2\n] (\n    $type: /bali/Point/v1\n    $version: v2\n)",
        ),
        ("note", "42  ! the answer"),
        ("annotated_item", "[\n    1  ! the first\n    2\n]"),
        ("comment", "[\n    1  !>\n        a block comment\n    <!\n]"),
    ]
}
