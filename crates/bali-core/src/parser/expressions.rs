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

//! Expressions.
//!
//! Operands are tried in a fixed order: a component literal, an intrinsic
//! call, a variable, a parenthesized expression, then the prefix forms.
//! Invocations and item lookups extend an operand in a loop. A binary
//! operator that follows takes the whole remaining expression as its right
//! operand, so binary expressions associate to the right.

use crate::ast::{Expression, Operator, OperatorCategory};
use crate::collections::List;
use crate::error::BaliResult;
use crate::lex::{Token, TokenKind};

use super::Parser;

/// The binary operator `token` spells, if any. Assignment and invocation
/// operators also follow an operand but never join two expressions.
fn binary_operator(token: &Token) -> Option<Operator> {
    if !matches!(token.kind, TokenKind::Delimiter | TokenKind::Keyword) {
        return None;
    }
    let operator = Operator::infix(&token.text)?;
    match operator.category() {
        OperatorCategory::Arithmetic
        | OperatorCategory::Comparison
        | OperatorCategory::Logical
        | OperatorCategory::Exponential
        | OperatorCategory::Chaining => Some(operator),
        _ => None,
    }
}

fn prefix_operator(token: &Token) -> Option<Operator> {
    if !matches!(token.kind, TokenKind::Delimiter | TokenKind::Keyword) {
        return None;
    }
    Operator::prefix(&token.text)
}

impl Parser<'_> {
    pub(super) fn parse_expression(&mut self) -> BaliResult<Option<Expression>> {
        self.nested(|p| {
            let mut expression = match p.parse_operand()? {
                Some(expression) => expression,
                None => return Ok(None),
            };
            loop {
                let token = p.next_token();
                expression = if token.is_delimiter(".") || token.is_delimiter("<-") {
                    p.parse_invocation(expression, &token)?
                } else if token.is_delimiter("[") {
                    p.parse_item(expression)?
                } else {
                    p.stream.backup();
                    break;
                };
            }
            let token = p.next_token();
            let operator = match binary_operator(&token) {
                Some(operator) => operator,
                None => {
                    p.stream.backup();
                    return Ok(Some(expression));
                }
            };
            p.within(production(operator), |p| {
                let right = p.parse_expression()?;
                let right = p.require(right, "$expression")?;
                Expression::binary(expression, operator, right)
                    .map(Some)
                    .map_err(|err| Self::at(&token, err))
            })
        })
    }

    /// An expression that must be present.
    pub(super) fn expect_expression(&mut self) -> BaliResult<Expression> {
        let expression = self.parse_expression()?;
        self.require(expression, "$expression")
    }

    fn parse_operand(&mut self) -> BaliResult<Option<Expression>> {
        if let Some(component) = self.parse_literal()? {
            return Ok(Some(Expression::component(component)));
        }
        let token = self.next_token();
        match token.kind {
            TokenKind::Identifier => {
                if self.peek().is_delimiter("(") {
                    return self.within("$intrinsicExpression", |p| {
                        let arguments = p.parse_arguments()?;
                        Ok(Some(Expression::Intrinsic {
                            function: token.text,
                            arguments,
                        }))
                    });
                }
                return Ok(Some(Expression::Variable(token.text)));
            }
            _ if token.is_delimiter("(") => {
                return self.within("$precedenceExpression", |p| {
                    let inner = p.expect_expression()?;
                    p.expect_delimiter(")", "$precedenceExpression")?;
                    Ok(Some(Expression::Precedence(Box::new(inner))))
                });
            }
            _ if token.is_delimiter("|") => {
                return self.within("$magnitudeExpression", |p| {
                    let inner = p.expect_expression()?;
                    p.expect_delimiter("|", "$magnitudeExpression")?;
                    Ok(Some(Expression::Magnitude(Box::new(inner))))
                });
            }
            _ => {}
        }
        if let Some(operator) = prefix_operator(&token) {
            return self.within(production(operator), |p| {
                let operand = p.expect_expression()?;
                Expression::unary(operator, operand)
                    .map(Some)
                    .map_err(|err| Self::at(&token, err))
            });
        }
        self.stream.backup();
        Ok(None)
    }

    /// `target ("." | "<-") IDENTIFIER arguments`, once the operator token
    /// has been read.
    fn parse_invocation(&mut self, target: Expression, token: &Token) -> BaliResult<Expression> {
        self.within("$invocationExpression", |p| {
            let operator = match Operator::infix(&token.text) {
                Some(operator) => operator,
                None => return p.fail("$invocationExpression"),
            };
            let message = p.expect_kind(TokenKind::Identifier, "$IDENTIFIER")?;
            let arguments = p.parse_arguments()?;
            Ok(Expression::Invocation {
                target: Box::new(target),
                operator,
                message: message.text,
                arguments,
            })
        })
    }

    /// `composite "[" indices "]"`, once the bracket has been read.
    fn parse_item(&mut self, composite: Expression) -> BaliResult<Expression> {
        self.within("$itemExpression", |p| {
            let indices = p.parse_indices()?;
            p.expect_delimiter("]", "$itemExpression")?;
            Ok(Expression::Item {
                composite: Box::new(composite),
                indices,
            })
        })
    }

    /// `"(" [expression {"," expression}] ")"`
    pub(super) fn parse_arguments(&mut self) -> BaliResult<List<Expression>> {
        self.within("$arguments", |p| {
            p.expect_delimiter("(", "$arguments")?;
            let mut arguments = List::new();
            if p.accept_delimiter(")") {
                return Ok(arguments);
            }
            loop {
                arguments.add(p.expect_expression()?);
                if !p.accept_delimiter(",") {
                    break;
                }
            }
            p.expect_delimiter(")", "$arguments")?;
            Ok(arguments)
        })
    }

    /// `expression {"," expression}`
    pub(super) fn parse_indices(&mut self) -> BaliResult<List<Expression>> {
        self.within("$indices", |p| {
            let mut indices = List::new();
            loop {
                indices.add(p.expect_expression()?);
                if !p.accept_delimiter(",") {
                    return Ok(indices);
                }
            }
        })
    }
}

/// Grammar production an operator builds, for diagnostics.
fn production(operator: Operator) -> &'static str {
    match operator.category() {
        OperatorCategory::Arithmetic => "$arithmeticExpression",
        OperatorCategory::Comparison => "$comparisonExpression",
        OperatorCategory::Logical if operator == Operator::Not => "$complementExpression",
        OperatorCategory::Logical => "$logicalExpression",
        OperatorCategory::Invocation => "$invocationExpression",
        OperatorCategory::Inversion => "$inversionExpression",
        OperatorCategory::Assignment => "$evaluateClause",
        OperatorCategory::Exponential => "$exponentialExpression",
        OperatorCategory::Chaining => "$chainingExpression",
        OperatorCategory::Dereference => "$dereferenceExpression",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Binary, Entity};
    use crate::error::BaliErrorKind;
    use crate::limits::Limits;
    use crate::value::Element;

    fn expression(source: &str) -> Expression {
        let limits = Limits::default();
        let mut parser = Parser::new(source, &limits);
        let expression = parser.parse_expression().unwrap().unwrap();
        assert_eq!(parser.next_token().kind, TokenKind::Eof, "{}", source);
        expression
    }

    fn binary(expression: &Expression) -> &Binary {
        match expression {
            Expression::Arithmetic(b)
            | Expression::Comparison(b)
            | Expression::Logical(b)
            | Expression::Exponential(b)
            | Expression::Chaining(b) => b,
            other => panic!("not binary: {:?}", other),
        }
    }

    // ==================== Operand tests ====================

    #[test]
    fn test_operands() {
        assert_eq!(expression("total"), Expression::variable("total"));
        assert!(matches!(expression("5"), Expression::Component(_)));
        assert!(matches!(expression("size(list)"), Expression::Intrinsic { ref function, .. } if function == "size"));
        assert!(matches!(expression("(a)"), Expression::Precedence(_)));
        assert!(matches!(expression("@a"), Expression::Dereference(_)));
        assert!(matches!(expression("|a|"), Expression::Magnitude(_)));
        assert!(matches!(expression("NOT a"), Expression::Complement(_)));
        assert!(matches!(
            expression("/(a)"),
            Expression::Inversion { operator: Operator::Reciprocal, .. }
        ));
    }

    #[test]
    fn test_component_literal_keeps_context() {
        let Expression::Component(component) = expression("[1, 2]($type: /bali/List/v1)") else {
            panic!("not a component");
        };
        assert!(component.parameter("type").is_some());
    }

    #[test]
    fn test_intrinsic_without_arguments() {
        let Expression::Intrinsic { arguments, .. } = expression("now()") else {
            panic!("not an intrinsic");
        };
        assert!(arguments.is_empty());
    }

    // ==================== Postfix tests ====================

    #[test]
    fn test_invocation_and_item_chain() {
        let Expression::Item { composite, indices } = expression("queue<-pop(1)[2, 3]") else {
            panic!("not an item");
        };
        assert_eq!(indices.len(), 2);
        assert!(matches!(
            *composite,
            Expression::Invocation { operator: Operator::Arrow, ref message, .. } if message == "pop"
        ));
    }

    #[test]
    fn test_invocation_needs_a_message() {
        let limits = Limits::default();
        let err = Parser::new("a.(", &limits).parse_expression().unwrap_err();
        assert_eq!(err.kind, BaliErrorKind::Syntax);
        assert_eq!(err.expected[..2], ["$IDENTIFIER", "$invocationExpression"]);
    }

    // ==================== Binary tests ====================

    #[test]
    fn test_binary_categories() {
        assert!(matches!(expression("a + b"), Expression::Arithmetic(_)));
        assert!(matches!(expression("a // b"), Expression::Arithmetic(_)));
        assert!(matches!(expression("a ≠ b"), Expression::Comparison(_)));
        assert!(matches!(expression("a MATCHES b"), Expression::Comparison(_)));
        assert!(matches!(expression("a XOR b"), Expression::Logical(_)));
        assert!(matches!(expression("a^2"), Expression::Exponential(_)));
        assert!(matches!(expression("a & b"), Expression::Chaining(_)));
    }

    #[test]
    fn test_binary_expressions_associate_right() {
        let outer = expression("a - b - c");
        let b = binary(&outer);
        assert_eq!(*b.left, Expression::variable("a"));
        assert!(matches!(*b.right, Expression::Arithmetic(_)));
    }

    #[test]
    fn test_prefix_takes_whole_expression() {
        let Expression::Complement(operand) = expression("NOT a AND b") else {
            panic!("not a complement");
        };
        assert!(matches!(*operand, Expression::Logical(_)));
    }

    #[test]
    fn test_missing_right_operand() {
        let limits = Limits::default();
        let err = Parser::new("a +", &limits).parse_expression().unwrap_err();
        assert_eq!(err.expected[..2], ["$expression", "$arithmeticExpression"]);
    }

    #[test]
    fn test_assignment_operator_ends_expression() {
        let limits = Limits::default();
        let mut parser = Parser::new("$x := 1", &limits);
        let left = parser.parse_expression().unwrap().unwrap();
        let Expression::Component(component) = left else {
            panic!("not a component");
        };
        assert!(matches!(component.entity, Entity::Element(Element::Symbol(_))));
        assert!(parser.next_token().is_delimiter(":="));
    }
}
