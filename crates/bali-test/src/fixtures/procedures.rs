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

//! Fixtures for procedures, statements and expressions.

use crate::FixtureList;

pub fn procedures() -> FixtureList {
    vec![
        ("empty_procedure", "{ }"),
        ("return", "{return $x + 1}"),
        (
            "assignment",
            "{\n    $total := 0\n    $total += 5\n    return $total\n}",
        ),
        ("attribute", "{\n    document[1, 2] := 5\n    return document[1]\n}"),
        ("if", "{if $x < 5 do {return true}}"),
        ("while", "{while $i < 5 do {$i := $i + 1}}"),
        ("with", "{with each $item in list do {publish $item}}"),
        (
            "select",
            "{select $level matching 1 do {return \"low\"} matching 2 do {return \"high\"}}",
        ),
        (
            "nested_procedure",
            "{\n    if $ready do {\n        $count := $count + 1\n        post $count to $bag\n    }\n}",
        ),
        (
            "on_clause",
            "{checkout $doc from $citation on $exception matching \"denied\"? do {return false} do {throw $exception}}",
        ),
        (
            "clauses",
            "{\n    save $draft as $copy\n    notarize $draft as $citation\n    checkout $doc at level 2 from $citation\n    post $message to $bag\n    retrieve $message from $bag\n    discard $draft\n    accept $message\n    reject $message\n    throw $exception\n    continue loop\n    break loop\n}",
        ),
        (
            "notes",
            "{\n    ! setup\n    $x := 1  ! initial value\n    return $x\n}",
        ),
    ]
}

pub fn expressions() -> FixtureList {
    vec![
        ("arithmetic", "{return a * b - c // 2}"),
        ("comparison", "{return $x ≠ 5 AND $y MATCHES \"ca+t\"?}"),
        ("exponential", "{return a^2 + b^2}"),
        ("chaining", "{return \"Hello \" & name}"),
        ("prefix", "{return NOT |a - b| & - c}"),
        ("inversion", "{return - 5}"),
        ("reciprocal", "{return / a}"),
        ("double_reciprocal", "{return / / a}"),
        ("reciprocal_moniker", "{return / /a/b}"),
        ("dereference", "{return @reference}"),
        ("precedence", "{return (a + b) * c}"),
        ("intrinsic", "{return size(list, 2)}"),
        ("invocation", "{\n    $result := queue<-pop()\n    return $result.size()[1]\n}"),
        ("literal_operand", "{return [1..5] & [ ] ($type: /bali/List/v1)}"),
    ]
}
