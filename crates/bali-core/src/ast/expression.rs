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

//! Expressions of the procedural sublanguage.

use crate::collections::List;
use crate::error::{BaliError, BaliResult};

use super::component::Component;
use super::operator::{Operator, OperatorCategory};

/// An expression. Binary expressions associate to the right: the right
/// operand of an operator is the whole expression that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A literal component such as `5`, `"text"` or `[1, 2]`.
    Component(Box<Component>),
    /// A variable reference: `total`.
    Variable(String),
    /// A call to an intrinsic function: `size(list)`.
    Intrinsic {
        function: String,
        arguments: List<Expression>,
    },
    /// A parenthesized expression: `(a + b)`.
    Precedence(Box<Expression>),
    /// `@expr`
    Dereference(Box<Expression>),
    /// A message sent to a target, synchronously with `.` or
    /// asynchronously with `<-`.
    Invocation {
        target: Box<Expression>,
        operator: Operator,
        message: String,
        arguments: List<Expression>,
    },
    /// Indexing into a composite: `list[1, 2]`.
    Item {
        composite: Box<Expression>,
        indices: List<Expression>,
    },
    /// `a & b`
    Chaining(Binary),
    /// `base^exponent`
    Exponential(Binary),
    /// Prefix `-`, `/` or `*`.
    Inversion {
        operator: Operator,
        operand: Box<Expression>,
    },
    /// `+ - * / //`
    Arithmetic(Binary),
    /// `|expr|`
    Magnitude(Box<Expression>),
    /// `< = > ≠ IS MATCHES`
    Comparison(Binary),
    /// `NOT expr`
    Complement(Box<Expression>),
    /// `AND OR SANS XOR`
    Logical(Binary),
}

/// The operands and operator of a binary expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    pub left: Box<Expression>,
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn component(component: Component) -> Self {
        Expression::Component(Box::new(component))
    }

    /// True for expressions whose last operand takes everything written
    /// after it: binary and prefix expressions.
    pub fn is_open_ended(&self) -> bool {
        matches!(
            self,
            Expression::Chaining(_)
                | Expression::Exponential(_)
                | Expression::Arithmetic(_)
                | Expression::Comparison(_)
                | Expression::Logical(_)
                | Expression::Inversion { .. }
                | Expression::Complement(_)
                | Expression::Dereference(_)
        )
    }

    /// Build the binary expression `operator` forms. Fails for operators
    /// that do not join two operands, and for an open-ended left operand,
    /// which has to be wrapped in [`Expression::Precedence`] first.
    pub fn binary(left: Expression, operator: Operator, right: Expression) -> BaliResult<Self> {
        if left.is_open_ended() {
            return Err(BaliError::syntax(
                format!(
                    "The left operand of {} would take the right operand as its own; wrap it in a precedence expression",
                    operator
                ),
                0,
            ));
        }
        let binary = Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };
        match operator.category() {
            OperatorCategory::Arithmetic => Ok(Expression::Arithmetic(binary)),
            OperatorCategory::Comparison => Ok(Expression::Comparison(binary)),
            OperatorCategory::Logical if operator != Operator::Not => {
                Ok(Expression::Logical(binary))
            }
            OperatorCategory::Exponential => Ok(Expression::Exponential(binary)),
            OperatorCategory::Chaining => Ok(Expression::Chaining(binary)),
            _ => Err(BaliError::syntax(
                format!("The operator {} does not join two expressions", operator),
                0,
            )),
        }
    }

    /// Build a prefix expression. Fails for operators that are not prefixes.
    pub fn unary(operator: Operator, operand: Expression) -> BaliResult<Self> {
        let operand = Box::new(operand);
        match operator.category() {
            OperatorCategory::Inversion => Ok(Expression::Inversion { operator, operand }),
            OperatorCategory::Dereference => Ok(Expression::Dereference(operand)),
            OperatorCategory::Logical if operator == Operator::Not => {
                Ok(Expression::Complement(operand))
            }
            _ => Err(BaliError::syntax(
                format!("The operator {} is not a prefix operator", operator),
                0,
            )),
        }
    }
}
