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

//! Statements and their clauses.

use crate::collections::List;
use crate::value::Symbol;

use super::component::{Annotation, Procedure};
use super::expression::Expression;
use super::operator::Operator;

/// A main clause, an optional exception handler and an optional trailing
/// note.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    pub clause: Clause,
    pub on_clause: Option<OnClause>,
    pub note: Option<Annotation>,
}

impl Statement {
    pub fn new(clause: Clause) -> Self {
        Self {
            clause,
            on_clause: None,
            note: None,
        }
    }
}

/// `on $exception matching pattern do {...} ...`
///
/// Handlers are tried in the order written. A handler without a pattern
/// matches any exception.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OnClause {
    pub exception: Symbol,
    pub handlers: List<Handler>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handler {
    pub pattern: Option<Expression>,
    pub procedure: Procedure,
}

/// `matching pattern do {...}` inside a select clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Case {
    pub pattern: Expression,
    pub procedure: Procedure,
}

/// Where a value is stored: a named symbol, or an attribute of a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recipient {
    Name(Symbol),
    Attribute {
        variable: String,
        indices: List<Expression>,
    },
}

impl Recipient {
    /// The recipient an expression names, if it names one.
    pub fn from_expression(expression: &Expression) -> Option<Recipient> {
        use crate::ast::Entity;
        use crate::value::Element;

        match expression {
            Expression::Component(component)
                if component.context.is_none() && component.annotation.is_none() =>
            {
                match &component.entity {
                    Entity::Element(Element::Symbol(symbol)) => Some(Recipient::Name(symbol.clone())),
                    _ => None,
                }
            }
            Expression::Item { composite, indices } => match composite.as_ref() {
                Expression::Variable(variable) => Some(Recipient::Attribute {
                    variable: variable.clone(),
                    indices: indices.clone(),
                }),
                _ => None,
            },
            _ => None,
        }
    }
}

/// The main clause of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    /// `if condition do {...}`
    If {
        condition: Expression,
        procedure: Procedure,
    },
    /// `select target matching a do {...} matching b do {...}`
    Select {
        target: Expression,
        cases: List<Case>,
    },
    /// `while condition do {...}`
    While {
        condition: Expression,
        procedure: Procedure,
    },
    /// `with each $item in sequence do {...}`
    With {
        item: Symbol,
        sequence: Expression,
        procedure: Procedure,
    },
    /// `continue loop`
    Continue,
    /// `break loop`
    Break,
    Return(Expression),
    Throw(Expression),
    /// `save draft as recipient`
    Save {
        draft: Expression,
        recipient: Recipient,
    },
    Discard(Expression),
    /// `notarize draft as citation`
    Notarize {
        draft: Expression,
        citation: Expression,
    },
    /// `checkout recipient [at level n] from citation`
    Checkout {
        recipient: Recipient,
        level: Option<Expression>,
        citation: Expression,
    },
    Publish(Expression),
    /// `post message to bag`
    Post {
        message: Expression,
        bag: Expression,
    },
    /// `retrieve recipient from bag`
    Retrieve {
        recipient: Recipient,
        bag: Expression,
    },
    Accept(Expression),
    Reject(Expression),
    /// An expression, optionally assigned: `$x := 5`, `list[1] += 2`.
    Evaluate {
        assignment: Option<(Recipient, Operator)>,
        expression: Expression,
    },
}
