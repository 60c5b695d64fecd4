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

//! Core scanner, parser and data model for the Bali Document Notation.
//!
//! This crate turns Bali source text into a [`Component`] tree:
//!
//! - [`lex`] scans source text into typed tokens and buffers them for the
//!   parser
//! - [`value`] holds the literal types (numbers, moments, tags, versions,
//!   ...) and the range model built over them
//! - [`collections`] holds the ordered containers the tree keeps its
//!   children in
//! - [`ast`] is the component tree itself, with its expressions and
//!   statements
//!
//! Rendering a tree back to canonical text lives in the `bali-c14n` crate.

pub mod ast;
pub mod collections;
mod error;
pub mod grammar;
pub mod lex;
mod limits;
mod parser;
pub mod value;

pub use ast::{
    Annotation, Binary, Case, Clause, Collection, Component, Context, Entity, Expression, Handler,
    Line, OnClause, Operator, OperatorCategory, Procedure, Recipient, Statement,
};
pub use error::{BaliError, BaliErrorKind, BaliResult};
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use value::{Element, Extent, Range, Scalar, StringLiteral};
