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

//! Procedures, statements and their clauses.
//!
//! A clause that opens with a keyword is committed once the keyword is
//! read. Anything else is tried as an evaluate clause.

use crate::ast::{
    Case, Clause, Handler, Line, OnClause, Operator, OperatorCategory, Procedure, Recipient,
    Statement,
};
use crate::collections::List;
use crate::error::{BaliError, BaliResult};
use crate::lex::{Token, TokenKind};
use crate::value::Symbol;

use super::Parser;

fn assignment_operator(token: &Token) -> Option<Operator> {
    if token.kind != TokenKind::Delimiter {
        return None;
    }
    Operator::infix(&token.text).filter(|op| op.category() == OperatorCategory::Assignment)
}

impl Parser<'_> {
    /// `"{" statements "}"`
    pub(super) fn parse_procedure(&mut self) -> BaliResult<Option<Procedure>> {
        if !self.accept_delimiter("{") {
            return Ok(None);
        }
        self.within("$procedure", |p| {
            let lines = p.within("$statements", Self::parse_lines)?;
            Ok(Some(Procedure::new(lines)))
        })
    }

    fn expect_procedure(&mut self) -> BaliResult<Procedure> {
        let procedure = self.parse_procedure()?;
        self.require(procedure, "$procedure")
    }

    /// Statements separated by `;`, or one statement or annotation per line
    /// after an opening end of line. Consumes the closing brace.
    fn parse_lines(&mut self) -> BaliResult<List<Line>> {
        let mut lines = List::new();
        if self.accept_kind(TokenKind::Eol) {
            while !self.accept_delimiter("}") {
                let line = match self.parse_annotation() {
                    Some(annotation) => Line::Annotation(annotation),
                    None => {
                        let statement = self.parse_statement()?;
                        Line::Statement(self.require(statement, "$statement")?)
                    }
                };
                lines.add(line);
                self.expect_kind(TokenKind::Eol, "$EOL")?;
            }
            return Ok(lines);
        }
        if self.accept_delimiter("}") {
            return Ok(lines);
        }
        loop {
            let statement = self.parse_statement()?;
            lines.add(Line::Statement(self.require(statement, "$statement")?));
            if !self.accept_delimiter(";") {
                break;
            }
        }
        self.expect_delimiter("}", "$procedure")?;
        Ok(lines)
    }

    /// `mainClause [onClause] [NOTE]`
    pub(super) fn parse_statement(&mut self) -> BaliResult<Option<Statement>> {
        self.nested(|p| {
            p.within("$statement", |p| {
                let clause = match p.parse_main_clause()? {
                    Some(clause) => clause,
                    None => return Ok(None),
                };
                let mut statement = Statement::new(clause);
                statement.on_clause = p.parse_on_clause()?;
                statement.note = p.parse_note();
                Ok(Some(statement))
            })
        })
    }

    fn parse_main_clause(&mut self) -> BaliResult<Option<Clause>> {
        let token = self.next_token();
        if token.kind == TokenKind::Keyword {
            let clause = match token.text.as_str() {
                "if" => self.within("$ifClause", |p| {
                    let condition = p.expect_expression()?;
                    p.expect_keyword("do", "$ifClause")?;
                    let procedure = p.expect_procedure()?;
                    Ok(Clause::If {
                        condition,
                        procedure,
                    })
                })?,
                "select" => self.within("$selectClause", Self::parse_select)?,
                "while" => self.within("$whileClause", |p| {
                    let condition = p.expect_expression()?;
                    p.expect_keyword("do", "$whileClause")?;
                    let procedure = p.expect_procedure()?;
                    Ok(Clause::While {
                        condition,
                        procedure,
                    })
                })?,
                "with" => self.within("$withClause", Self::parse_with)?,
                "continue" => self.within("$continueClause", |p| {
                    p.expect_keyword("loop", "$continueClause")?;
                    Ok(Clause::Continue)
                })?,
                "break" => self.within("$breakClause", |p| {
                    p.expect_keyword("loop", "$breakClause")?;
                    Ok(Clause::Break)
                })?,
                "return" => self.within("$returnClause", |p| p.expect_expression().map(Clause::Return))?,
                "throw" => self.within("$throwClause", |p| p.expect_expression().map(Clause::Throw))?,
                "save" => self.within("$saveClause", |p| {
                    let draft = p.expect_expression()?;
                    p.expect_keyword("as", "$saveClause")?;
                    let recipient = p.parse_recipient()?;
                    Ok(Clause::Save { draft, recipient })
                })?,
                "discard" => {
                    self.within("$discardClause", |p| p.expect_expression().map(Clause::Discard))?
                }
                "notarize" => self.within("$notarizeClause", |p| {
                    let draft = p.expect_expression()?;
                    p.expect_keyword("as", "$notarizeClause")?;
                    let citation = p.expect_expression()?;
                    Ok(Clause::Notarize { draft, citation })
                })?,
                "checkout" => self.within("$checkoutClause", Self::parse_checkout)?,
                "publish" => {
                    self.within("$publishClause", |p| p.expect_expression().map(Clause::Publish))?
                }
                "post" => self.within("$postClause", |p| {
                    let message = p.expect_expression()?;
                    p.expect_keyword("to", "$postClause")?;
                    let bag = p.expect_expression()?;
                    Ok(Clause::Post { message, bag })
                })?,
                "retrieve" => self.within("$retrieveClause", |p| {
                    let recipient = p.parse_recipient()?;
                    p.expect_keyword("from", "$retrieveClause")?;
                    let bag = p.expect_expression()?;
                    Ok(Clause::Retrieve { recipient, bag })
                })?,
                "accept" => {
                    self.within("$acceptClause", |p| p.expect_expression().map(Clause::Accept))?
                }
                "reject" => {
                    self.within("$rejectClause", |p| p.expect_expression().map(Clause::Reject))?
                }
                _ => {
                    self.stream.backup();
                    return self.parse_evaluate();
                }
            };
            return Ok(Some(clause));
        }
        self.stream.backup();
        self.parse_evaluate()
    }

    /// `"select" expression <"matching" expression "do" procedure>`
    fn parse_select(&mut self) -> BaliResult<Clause> {
        let target = self.expect_expression()?;
        let mut cases = List::new();
        while self.accept_keyword("matching") {
            let pattern = self.expect_expression()?;
            self.expect_keyword("do", "$selectClause")?;
            let procedure = self.expect_procedure()?;
            cases.add(Case { pattern, procedure });
        }
        if cases.is_empty() {
            return self.fail("$selectClause");
        }
        Ok(Clause::Select { target, cases })
    }

    /// `"with" "each" SYMBOL "in" expression "do" procedure`
    fn parse_with(&mut self) -> BaliResult<Clause> {
        self.expect_keyword("each", "$withClause")?;
        let item = self.parse_symbol()?;
        self.expect_keyword("in", "$withClause")?;
        let sequence = self.expect_expression()?;
        self.expect_keyword("do", "$withClause")?;
        let procedure = self.expect_procedure()?;
        Ok(Clause::With {
            item,
            sequence,
            procedure,
        })
    }

    /// `"checkout" recipient ["at" "level" expression] "from" expression`
    fn parse_checkout(&mut self) -> BaliResult<Clause> {
        let recipient = self.parse_recipient()?;
        let level = if self.accept_keyword("at") {
            self.expect_keyword("level", "$checkoutClause")?;
            Some(self.expect_expression()?)
        } else {
            None
        };
        self.expect_keyword("from", "$checkoutClause")?;
        let citation = self.expect_expression()?;
        Ok(Clause::Checkout {
            recipient,
            level,
            citation,
        })
    }

    /// `[recipient assignment] expression`
    ///
    /// The left side is read as an expression first and only becomes a
    /// recipient when an assignment operator follows it.
    fn parse_evaluate(&mut self) -> BaliResult<Option<Clause>> {
        self.within("$evaluateClause", |p| {
            let expression = match p.parse_expression()? {
                Some(expression) => expression,
                None => return Ok(None),
            };
            let token = p.next_token();
            let operator = match assignment_operator(&token) {
                Some(operator) => operator,
                None => {
                    p.stream.backup();
                    return Ok(Some(Clause::Evaluate {
                        assignment: None,
                        expression,
                    }));
                }
            };
            let recipient = Recipient::from_expression(&expression).ok_or_else(|| {
                Self::at(
                    &token,
                    BaliError::syntax(
                        "Only a symbol or an attribute of a variable can be assigned to",
                        0,
                    )
                    .with_expected(&["$recipient", "$evaluateClause"]),
                )
            })?;
            let value = p.expect_expression()?;
            Ok(Some(Clause::Evaluate {
                assignment: Some((recipient, operator)),
                expression: value,
            }))
        })
    }

    /// `SYMBOL | variable "[" indices "]"`
    fn parse_recipient(&mut self) -> BaliResult<Recipient> {
        self.within("$recipient", |p| {
            let token = p.next_token();
            match token.kind {
                TokenKind::Symbol => {
                    p.stream.backup();
                    p.parse_symbol().map(Recipient::Name)
                }
                TokenKind::Identifier => p.within("$attribute", |p| {
                    p.expect_delimiter("[", "$attribute")?;
                    let indices = p.parse_indices()?;
                    p.expect_delimiter("]", "$attribute")?;
                    Ok(Recipient::Attribute {
                        variable: token.text,
                        indices,
                    })
                }),
                _ => {
                    p.stream.backup();
                    p.fail("$recipient")
                }
            }
        })
    }

    fn parse_symbol(&mut self) -> BaliResult<Symbol> {
        let token = self.expect_kind(TokenKind::Symbol, "$SYMBOL")?;
        token.text.parse().map_err(|err| Self::at(&token, err))
    }

    /// `"on" SYMBOL <handler>`
    fn parse_on_clause(&mut self) -> BaliResult<Option<OnClause>> {
        if !self.accept_keyword("on") {
            return Ok(None);
        }
        self.within("$onClause", |p| {
            let exception = p.parse_symbol()?;
            let mut handlers = List::new();
            loop {
                let pattern = if p.accept_keyword("matching") {
                    let pattern = p.within("$handler", Self::expect_expression)?;
                    p.expect_keyword("do", "$handler")?;
                    Some(pattern)
                } else if p.accept_keyword("do") {
                    None
                } else {
                    break;
                };
                let procedure = p.within("$handler", Self::expect_procedure)?;
                handlers.add(Handler { pattern, procedure });
            }
            if handlers.is_empty() {
                return p.fail("$handler");
            }
            Ok(Some(OnClause {
                exception,
                handlers,
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Annotation, Clause, Entity, Expression, Line, Operator, Procedure, Recipient};
    use crate::error::BaliErrorKind;
    use crate::parser::parse;

    fn procedure(source: &str) -> Procedure {
        match parse(source).unwrap().entity {
            Entity::Procedure(procedure) => procedure,
            other => panic!("not a procedure: {:?}", other),
        }
    }

    fn clause(source: &str) -> Clause {
        let procedure = procedure(source);
        let statement = procedure.statements().next().cloned().unwrap();
        statement.clause
    }

    // ==================== Procedure tests ====================

    #[test]
    fn test_empty_procedure() {
        assert!(procedure("{ }").lines.is_empty());
    }

    #[test]
    fn test_inline_statements() {
        let procedure = procedure("{$x := 1; return $x}");
        assert_eq!(procedure.statements().count(), 2);
    }

    #[test]
    fn test_multiline_procedure_with_annotations() {
        let procedure = procedure("{\n    ! setup\n    $x := 1\n    return $x  ! done\n}\n");
        assert_eq!(procedure.lines.len(), 3);
        assert!(matches!(procedure.lines.item(1), Some(Line::Annotation(Annotation::Note(_)))));
        let last = procedure.statements().last().unwrap();
        assert_eq!(last.note, Some(Annotation::Note("! done".to_string())));
    }

    // ==================== Clause tests ====================

    #[test]
    fn test_control_clauses() {
        assert!(matches!(clause("{if x do {return 1}}"), Clause::If { .. }));
        assert!(matches!(clause("{while $i < 5 do {$i := $i + 1}}"), Clause::While { .. }));
        assert!(matches!(clause("{continue loop}"), Clause::Continue));
        assert!(matches!(clause("{break loop}"), Clause::Break));
        let Clause::With { item, .. } = clause("{with each $item in list do {discard $item}}") else {
            panic!("not a with clause");
        };
        assert_eq!(item.name(), "item");
    }

    #[test]
    fn test_select_cases() {
        let Clause::Select { cases, .. } =
            clause("{select x matching 1 do {return 1} matching any do {return 0}}")
        else {
            panic!("not a select clause");
        };
        assert_eq!(cases.len(), 2);
    }

    #[test]
    fn test_document_clauses() {
        assert!(matches!(clause("{save draft as $citation}"), Clause::Save { recipient: Recipient::Name(_), .. }));
        assert!(matches!(clause("{notarize draft as citation}"), Clause::Notarize { .. }));
        assert!(matches!(clause("{post message to bag}"), Clause::Post { .. }));
        assert!(matches!(clause("{publish event}"), Clause::Publish(_)));
        assert!(matches!(clause("{accept message}"), Clause::Accept(_)));
        assert!(matches!(clause("{reject message}"), Clause::Reject(_)));
        assert!(matches!(clause("{throw error}"), Clause::Throw(_)));
        assert!(matches!(
            clause("{retrieve queue[1] from bag}"),
            Clause::Retrieve { recipient: Recipient::Attribute { .. }, .. }
        ));
    }

    #[test]
    fn test_checkout_level_is_optional() {
        assert!(matches!(clause("{checkout $doc from citation}"), Clause::Checkout { level: None, .. }));
        assert!(matches!(
            clause("{checkout $doc at level 2 from citation}"),
            Clause::Checkout { level: Some(_), .. }
        ));
    }

    #[test]
    fn test_evaluate_with_assignment() {
        let Clause::Evaluate { assignment, expression } = clause("{list[1] += 2}") else {
            panic!("not an evaluate clause");
        };
        let (recipient, operator) = assignment.unwrap();
        assert_eq!(operator, Operator::Sum);
        assert!(matches!(recipient, Recipient::Attribute { ref variable, .. } if variable == "list"));
        assert!(matches!(expression, Expression::Component(_)));
    }

    #[test]
    fn test_evaluate_without_assignment() {
        assert!(matches!(
            clause("{log.write(\"hi\")}"),
            Clause::Evaluate { assignment: None, expression: Expression::Invocation { .. } }
        ));
    }

    #[test]
    fn test_assignment_to_expression_is_rejected() {
        let err = parse("{(a) := 1}").unwrap_err();
        assert_eq!(err.kind, BaliErrorKind::Syntax);
        assert_eq!(err.token.as_deref(), Some(":="));
        assert_eq!(err.expected, vec!["$recipient", "$evaluateClause"]);
    }

    // ==================== On clause tests ====================

    #[test]
    fn test_on_clause_handlers_in_order() {
        let procedure = procedure(
            "{return x on $exception matching \"a\" do {return 1} do {return 2}}",
        );
        let statement = procedure.statements().next().unwrap();
        let on_clause = statement.on_clause.as_ref().unwrap();
        assert_eq!(on_clause.exception.name(), "exception");
        assert_eq!(on_clause.handlers.len(), 2);
        assert!(on_clause.handlers.item(1).unwrap().pattern.is_some());
        assert!(on_clause.handlers.item(2).unwrap().pattern.is_none());
    }

    #[test]
    fn test_on_clause_needs_a_handler() {
        let err = parse("{return x on $exception}").unwrap_err();
        assert_eq!(err.expected[..2], ["$handler", "$onClause"]);
    }

    // ==================== Committed clause tests ====================

    #[test]
    fn test_keyword_commits_the_clause() {
        let err = parse("{if x {return 1}}").unwrap_err();
        assert_eq!(err.token.as_deref(), Some("{"));
        assert_eq!(err.expected[..3], ["$ifClause", "$statement", "$statements"]);
    }

    #[test]
    fn test_missing_loop_keyword() {
        let err = parse("{break}").unwrap_err();
        assert_eq!(err.expected[0], "$breakClause");
        assert_eq!(err.line, 1);
        assert_eq!(err.column, Some(7));
    }
}
