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

//! Components: the nodes every document is built from.

use crate::collections::{Catalog, List};
use crate::value::{Element, Range, StringLiteral, Symbol};

use super::expression::Expression;
use super::statement::Statement;

/// A node of the document tree: an entity with optional parameters and an
/// optional trailing annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    pub entity: Entity,
    pub context: Option<Context>,
    pub annotation: Option<Annotation>,
}

impl Component {
    pub fn new(entity: impl Into<Entity>) -> Self {
        Self {
            entity: entity.into(),
            context: None,
            annotation: None,
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// A parameter value from the context.
    pub fn parameter(&self, name: &str) -> Option<&Component> {
        self.context
            .as_ref()
            .and_then(|context| context.parameters.get_value(&Symbol::new(name)))
    }
}

/// The payload of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    Element(Element),
    String(StringLiteral),
    Collection(Collection),
    Procedure(Procedure),
    Expression(Box<Expression>),
    Statement(Box<Statement>),
}

impl From<Element> for Entity {
    fn from(element: Element) -> Self {
        Entity::Element(element)
    }
}

impl From<StringLiteral> for Entity {
    fn from(string: StringLiteral) -> Self {
        Entity::String(string)
    }
}

impl From<Collection> for Entity {
    fn from(collection: Collection) -> Self {
        Entity::Collection(collection)
    }
}

impl From<Procedure> for Entity {
    fn from(procedure: Procedure) -> Self {
        Entity::Procedure(procedure)
    }
}

/// Named parameters attached to an entity, in the order written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Context {
    pub parameters: Catalog<Symbol, Component>,
}

impl Context {
    pub fn new(parameters: Catalog<Symbol, Component>) -> Self {
        Self { parameters }
    }
}

/// A note (`! text`) or block comment (`!>` ... `<!`), kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annotation {
    Note(String),
    Comment(String),
}

impl Annotation {
    pub fn as_str(&self) -> &str {
        match self {
            Annotation::Note(text) | Annotation::Comment(text) => text,
        }
    }
}

/// A bracketed collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Collection {
    List(List<Component>),
    Catalog(Catalog<Component, Component>),
    Range(Range),
}

/// A block of statements between braces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Procedure {
    pub lines: List<Line>,
}

impl Procedure {
    pub fn new(lines: List<Line>) -> Self {
        Self { lines }
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.lines.iter().filter_map(|line| match line {
            Line::Statement(statement) => Some(statement),
            Line::Annotation(_) => None,
        })
    }
}

/// One line of a procedure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    Annotation(Annotation),
    Statement(Statement),
}
