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

//! Canonical test fixtures covering the whole notation.
//!
//! Every fixture is canonical text: parsing it and formatting the tree must
//! give the same text back.
//!
//! - **elements**: one literal of each element and string shape
//! - **collections**: lists, catalogs, ranges, parameters and annotations
//! - **procedures**: statements, clauses and expressions
//! - **errors**: invalid documents and the errors they raise
//! - **builders**: constructors for trees assembled in code

pub mod builders;
mod collections;
mod elements;
pub mod errors;
mod procedures;

pub use collections::*;
pub use elements::*;
pub use procedures::*;

use crate::FixtureList;

/// Returns all canonical fixtures for iteration.
///
/// Useful for running the same test across every fixture.
pub fn all() -> FixtureList {
    let groups: [fn() -> FixtureList; 7] = [
        elements,
        strings,
        collections,
        ranges,
        contexts,
        procedures,
        expressions,
    ];
    groups.iter().flat_map(|group| group()).collect()
}
