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

//! Quick Start Example
//!
//! Parses a Bali document, inspects the tree, reformats it and shows how a
//! syntax error is reported.
//!
//! Run with: cargo run --example quick_start

use bali::{format, parse, Collection, Entity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bali Quick Start Example ===\n");

    let source = "[\n    $title: \"Moby Dick\"\n    $pages: [1..635]\n    $published: <1851-10-18>\n] ($type: /bali/Book/v1)";

    println!("--- Parsing ---");
    let tree = parse(source)?;
    if let Some(kind) = tree.parameter("type") {
        println!("Type: {}", format(kind)?);
    }
    if let Entity::Collection(Collection::Catalog(catalog)) = &tree.entity {
        println!("Attributes: {}", catalog.len());
        for (key, value) in catalog.iter() {
            println!("  {} => {}", format(key)?, format(value)?);
        }
    }
    println!();

    println!("--- Canonical text ---");
    let text = format(&tree)?;
    println!("{}", text);
    println!("Matches source: {}", text == source);
    println!();

    println!("--- Errors ---");
    let broken = "{\n    while $x < 5 do {$x += 1\n}";
    match parse(broken) {
        Ok(_) => println!("unexpectedly parsed"),
        Err(err) => print!("{}", err.report(broken)),
    }

    Ok(())
}
