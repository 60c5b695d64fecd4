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

//! Builders for component trees.
//!
//! Short constructors for the trees tests assemble in code rather than
//! parse, such as trees the parser could never produce.

use bali_core::collections::List;
use bali_core::value::{Moniker, Number, Quote, Symbol};
use bali_core::{
    Annotation, Clause, Collection, Component, Context, Element, Expression, Line, Procedure,
    Statement, StringLiteral,
};

pub fn integer(value: i64) -> Component {
    Component::new(Element::Number(Number::real(value as f64)))
}

pub fn quote(text: &str) -> Component {
    Component::new(StringLiteral::Quote(Quote::new(text)))
}

pub fn symbol(name: &str) -> Component {
    Component::new(Element::Symbol(Symbol::new(name)))
}

pub fn list(items: Vec<Component>) -> Component {
    Component::new(Collection::List(items.into()))
}

pub fn catalog(entries: Vec<(Component, Component)>) -> Component {
    Component::new(Collection::Catalog(entries.into_iter().collect()))
}

/// Attach a `$type` parameter naming `moniker`, such as `/bali/List/v1`.
pub fn typed(component: Component, moniker: &str) -> Component {
    let segments = moniker.split('/').filter(|segment| !segment.is_empty());
    let value = Component::new(StringLiteral::Moniker(Moniker::new(segments)));
    let parameters = [(Symbol::new("type"), value)].into_iter().collect();
    component.with_context(Context::new(parameters))
}

/// Attach a `! text` note.
pub fn noted(component: Component, text: &str) -> Component {
    component.with_annotation(Annotation::Note(format!("! {}", text)))
}

pub fn procedure(statements: Vec<Statement>) -> Component {
    let lines: List<Line> = statements.into_iter().map(Line::Statement).collect();
    Component::new(Procedure::new(lines))
}

/// `return expression`
pub fn returning(expression: Expression) -> Statement {
    Statement::new(Clause::Return(expression))
}
