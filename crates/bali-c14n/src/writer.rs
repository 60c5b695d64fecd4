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

//! Canonical Bali writer.
//!
//! Each node is rendered to its own string before its parent decides how
//! to lay it out: a parent goes multi-line when a child's text spans lines,
//! so children are always rendered at the indentation they would have in
//! the multi-line form.

use std::fmt::{Debug, Display, Write};

use bali_core::lex::Scanner;
use bali_core::{
    Annotation, BaliError, BaliResult, Clause, Collection, Component, Context, Entity, Expression,
    Line, OnClause, Procedure, Range, Recipient, Statement,
};

use crate::config::FormatConfig;

/// Initial buffer capacity for the document text.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 4096;

/// Maximum nesting depth of the tree being written.
///
/// Trees built in code are not bounded by the parser's limits, so the
/// writer guards its own recursion.
const MAX_NESTING_DEPTH: usize = 1000;

/// Space between a node and its trailing annotation.
const ANNOTATION_GAP: &str = "  ";

/// Render `value` through its `Display` implementation. A value that cannot
/// be displayed, such as a moment outside the calendar range, is a format
/// error rather than a panic.
fn display<T: Display + Debug>(value: &T) -> BaliResult<String> {
    let mut text = String::new();
    write!(text, "{}", value)
        .map_err(|_| BaliError::format(format!("{:?} has no canonical form", value)))?;
    Ok(text)
}

fn join(parts: &[String]) -> String {
    parts.join(", ")
}

/// True when `text` scans with `head` as its whole first token.
fn scans_apart(head: &str, text: &str) -> bool {
    Scanner::new(text).next_token().text == head
}

/// A left operand that would swallow the operator written after it.
fn ungrouped(operand: &Expression, position: &str) -> BaliResult<()> {
    if operand.is_open_ended() {
        return Err(BaliError::format(format!(
            "The {} of an expression must be grouped in parentheses when it is a binary or prefix expression",
            position
        )));
    }
    Ok(())
}

/// Writer for canonical Bali text.
pub struct CanonicalWriter {
    config: FormatConfig,
    output: String,
    depth: usize,
}

impl CanonicalWriter {
    /// Creates a new canonical writer with the given configuration.
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
            depth: 0,
        }
    }

    /// Writes a component as a complete document, ending with a newline.
    pub fn write_document(&mut self, component: &Component) -> BaliResult<String> {
        let text = self.component(component, 0)?;
        self.output.push_str(&text);
        self.output.push('\n');
        Ok(std::mem::take(&mut self.output))
    }

    /// Renders a component at the outermost level, without a final newline.
    pub fn write_component(&mut self, component: &Component) -> BaliResult<String> {
        self.component(component, 0)
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.config.indentation)
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> BaliResult<T>) -> BaliResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(BaliError::format(format!(
                "The tree nests deeper than the limit of {} levels",
                MAX_NESTING_DEPTH
            )));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // ==================== Components ====================

    fn component(&mut self, component: &Component, level: usize) -> BaliResult<String> {
        self.nested(|w| {
            let mut text = w.literal(component, level)?;
            if let Some(annotation) = &component.annotation {
                text.push_str(ANNOTATION_GAP);
                text.push_str(annotation.as_str());
            }
            Ok(text)
        })
    }

    /// A component without its annotation.
    fn literal(&mut self, component: &Component, level: usize) -> BaliResult<String> {
        let mut text = self.entity(&component.entity, level)?;
        if let Some(context) = &component.context {
            text.push(' ');
            text.push_str(&self.context(context, level)?);
        }
        Ok(text)
    }

    fn entity(&mut self, entity: &Entity, level: usize) -> BaliResult<String> {
        match entity {
            Entity::Element(element) => display(element),
            Entity::String(string) => display(string),
            Entity::Collection(collection) => self.collection(collection, level),
            Entity::Procedure(procedure) => self.procedure(procedure, level),
            Entity::Expression(expression) => self.expression(expression, level),
            Entity::Statement(statement) => self.statement(statement, level),
        }
    }

    fn context(&mut self, context: &Context, level: usize) -> BaliResult<String> {
        let mut entries = Vec::with_capacity(context.parameters.len());
        let mut annotated = false;
        for (name, value) in context.parameters.iter() {
            annotated |= value.annotation.is_some();
            entries.push(format!("{}: {}", display(name)?, self.component(value, level + 1)?));
        }
        Ok(self.layout("(", ")", &entries, annotated, level))
    }

    fn collection(&mut self, collection: &Collection, level: usize) -> BaliResult<String> {
        match collection {
            Collection::List(list) if list.is_empty() => Ok("[ ]".to_string()),
            Collection::List(list) => {
                let mut entries = Vec::with_capacity(list.len());
                for item in list.iter() {
                    entries.push(self.component(item, level + 1)?);
                }
                let annotated = list.iter().any(|item| item.annotation.is_some());
                Ok(self.layout("[", "]", &entries, annotated, level))
            }
            Collection::Catalog(catalog) if catalog.is_empty() => Ok("[:]".to_string()),
            Collection::Catalog(catalog) => {
                let mut entries = Vec::with_capacity(catalog.len());
                let mut annotated = false;
                for (key, value) in catalog.iter() {
                    annotated |= value.annotation.is_some();
                    entries.push(format!("{}: {}", self.key(key)?, self.component(value, level + 1)?));
                }
                Ok(self.layout("[", "]", &entries, annotated, level))
            }
            Collection::Range(range) => self.range(range),
        }
    }

    fn range(&self, range: &Range) -> BaliResult<String> {
        let mut text = String::from("[");
        if let Some(first) = range.first() {
            text.push_str(&display(first)?);
        }
        text.push_str(range.extent().delimiter());
        if let Some(last) = range.last() {
            text.push_str(&display(last)?);
        }
        text.push(']');
        Ok(text)
    }

    /// Catalog keys are read back as a single element or string.
    fn key(&mut self, key: &Component) -> BaliResult<String> {
        if key.context.is_some() || key.annotation.is_some() {
            return Err(BaliError::format(
                "A catalog key cannot carry parameters or an annotation",
            ));
        }
        match &key.entity {
            Entity::Element(element) => display(element),
            Entity::String(string) => display(string),
            _ => Err(BaliError::format(
                "A catalog key must be an element or a string",
            )),
        }
    }

    /// Lay out rendered entries inline or one per line.
    fn layout(&self, open: &str, close: &str, entries: &[String], annotated: bool, level: usize) -> String {
        let spans_lines = entries.iter().any(|entry| entry.contains('\n'));
        if entries.len() <= self.config.max_inline_entries && !annotated && !spans_lines {
            return format!("{}{}{}", open, join(entries), close);
        }
        let inner = self.indent(level + 1);
        let mut text = String::from(open);
        text.push('\n');
        for entry in entries {
            text.push_str(&inner);
            text.push_str(entry);
            text.push('\n');
        }
        text.push_str(&self.indent(level));
        text.push_str(close);
        text
    }

    // ==================== Procedures ====================

    fn procedure(&mut self, procedure: &Procedure, level: usize) -> BaliResult<String> {
        if procedure.lines.is_empty() {
            return Ok("{ }".to_string());
        }
        let mut lines = Vec::with_capacity(procedure.lines.len());
        for line in procedure.lines.iter() {
            lines.push(match line {
                Line::Annotation(annotation) => annotation.as_str().to_string(),
                Line::Statement(statement) => self.statement(statement, level + 1)?,
            });
        }
        if let [Line::Statement(statement)] = &procedure.lines[..] {
            if statement.note.is_none() && !lines[0].contains('\n') {
                return Ok(format!("{{{}}}", lines[0]));
            }
        }
        let inner = self.indent(level + 1);
        let mut text = String::from("{\n");
        for line in &lines {
            text.push_str(&inner);
            text.push_str(line);
            text.push('\n');
        }
        text.push_str(&self.indent(level));
        text.push('}');
        Ok(text)
    }

    fn statement(&mut self, statement: &Statement, level: usize) -> BaliResult<String> {
        self.nested(|w| {
            let mut text = w.clause(&statement.clause, level)?;
            if let Some(on_clause) = &statement.on_clause {
                text.push_str(&w.on_clause(on_clause, level)?);
            }
            match &statement.note {
                Some(Annotation::Note(note)) => {
                    text.push_str(ANNOTATION_GAP);
                    text.push_str(note);
                }
                Some(Annotation::Comment(_)) => {
                    return Err(BaliError::format(
                        "A statement can only end with a note, not a block comment",
                    ))
                }
                None => {}
            }
            Ok(text)
        })
    }

    fn clause(&mut self, clause: &Clause, level: usize) -> BaliResult<String> {
        Ok(match clause {
            Clause::If {
                condition,
                procedure,
            } => format!(
                "if {} do {}",
                self.expression(condition, level)?,
                self.procedure(procedure, level)?
            ),
            Clause::Select { target, cases } => {
                let mut text = format!("select {}", self.expression(target, level)?);
                for case in cases.iter() {
                    write!(
                        text,
                        " matching {} do {}",
                        self.expression(&case.pattern, level)?,
                        self.procedure(&case.procedure, level)?
                    )
                    .map_err(|_| BaliError::format("Failed to write a select case"))?;
                }
                text
            }
            Clause::While {
                condition,
                procedure,
            } => format!(
                "while {} do {}",
                self.expression(condition, level)?,
                self.procedure(procedure, level)?
            ),
            Clause::With {
                item,
                sequence,
                procedure,
            } => format!(
                "with each {} in {} do {}",
                display(item)?,
                self.expression(sequence, level)?,
                self.procedure(procedure, level)?
            ),
            Clause::Continue => "continue loop".to_string(),
            Clause::Break => "break loop".to_string(),
            Clause::Return(e) => format!("return {}", self.expression(e, level)?),
            Clause::Throw(e) => format!("throw {}", self.expression(e, level)?),
            Clause::Save { draft, recipient } => format!(
                "save {} as {}",
                self.expression(draft, level)?,
                self.recipient(recipient, level)?
            ),
            Clause::Discard(e) => format!("discard {}", self.expression(e, level)?),
            Clause::Notarize { draft, citation } => format!(
                "notarize {} as {}",
                self.expression(draft, level)?,
                self.expression(citation, level)?
            ),
            Clause::Checkout {
                recipient,
                level: at,
                citation,
            } => {
                let mut text = format!("checkout {}", self.recipient(recipient, level)?);
                if let Some(at) = at {
                    text.push_str(" at level ");
                    text.push_str(&self.expression(at, level)?);
                }
                text.push_str(" from ");
                text.push_str(&self.expression(citation, level)?);
                text
            }
            Clause::Publish(e) => format!("publish {}", self.expression(e, level)?),
            Clause::Post { message, bag } => format!(
                "post {} to {}",
                self.expression(message, level)?,
                self.expression(bag, level)?
            ),
            Clause::Retrieve { recipient, bag } => format!(
                "retrieve {} from {}",
                self.recipient(recipient, level)?,
                self.expression(bag, level)?
            ),
            Clause::Accept(e) => format!("accept {}", self.expression(e, level)?),
            Clause::Reject(e) => format!("reject {}", self.expression(e, level)?),
            Clause::Evaluate {
                assignment,
                expression,
            } => {
                let value = self.expression(expression, level)?;
                match assignment {
                    Some((recipient, operator)) => {
                        format!("{} {} {}", self.recipient(recipient, level)?, operator, value)
                    }
                    None => value,
                }
            }
        })
    }

    fn on_clause(&mut self, on_clause: &OnClause, level: usize) -> BaliResult<String> {
        let mut text = format!(" on {}", display(&on_clause.exception)?);
        for handler in on_clause.handlers.iter() {
            if let Some(pattern) = &handler.pattern {
                text.push_str(" matching ");
                text.push_str(&self.expression(pattern, level)?);
            }
            text.push_str(" do ");
            text.push_str(&self.procedure(&handler.procedure, level)?);
        }
        Ok(text)
    }

    fn recipient(&mut self, recipient: &Recipient, level: usize) -> BaliResult<String> {
        match recipient {
            Recipient::Name(symbol) => display(symbol),
            Recipient::Attribute { variable, indices } => {
                Ok(format!("{}[{}]", variable, self.expressions(indices, level)?))
            }
        }
    }

    // ==================== Expressions ====================

    fn expressions(&mut self, expressions: &[Expression], level: usize) -> BaliResult<String> {
        let mut parts = Vec::with_capacity(expressions.len());
        for expression in expressions {
            parts.push(self.expression(expression, level)?);
        }
        Ok(join(&parts))
    }

    fn expression(&mut self, expression: &Expression, level: usize) -> BaliResult<String> {
        self.nested(|w| {
            Ok(match expression {
                Expression::Component(component) => {
                    if component.annotation.is_some() {
                        return Err(BaliError::format(
                            "A component inside an expression cannot carry an annotation",
                        ));
                    }
                    w.literal(component, level)?
                }
                Expression::Variable(name) => name.clone(),
                Expression::Intrinsic {
                    function,
                    arguments,
                } => format!("{}({})", function, w.expressions(arguments, level)?),
                Expression::Precedence(inner) => format!("({})", w.expression(inner, level)?),
                Expression::Dereference(inner) => format!("@{}", w.expression(inner, level)?),
                Expression::Invocation {
                    target,
                    operator,
                    message,
                    arguments,
                } => {
                    ungrouped(target, "target of an invocation")?;
                    let target = w.expression(target, level)?;
                    let call = format!("{}{}(", operator, message);
                    // `1.size()` would scan `1.` as one real number.
                    if scans_apart(&target, &target)
                        && !scans_apart(&target, &format!("{}{}", target, call))
                    {
                        return Err(BaliError::format(format!(
                            "The target {} must be grouped in parentheses before {}",
                            target, call
                        )));
                    }
                    format!("{}{}{})", target, call, w.expressions(arguments, level)?)
                }
                Expression::Item { composite, indices } => {
                    ungrouped(composite, "composite of an item")?;
                    format!(
                        "{}[{}]",
                        w.expression(composite, level)?,
                        w.expressions(indices, level)?
                    )
                }
                Expression::Exponential(b) => {
                    ungrouped(&b.left, "left operand")?;
                    format!(
                        "{}{}{}",
                        w.expression(&b.left, level)?,
                        b.operator,
                        w.expression(&b.right, level)?
                    )
                }
                Expression::Chaining(b)
                | Expression::Arithmetic(b)
                | Expression::Comparison(b)
                | Expression::Logical(b) => {
                    ungrouped(&b.left, "left operand")?;
                    format!(
                        "{} {} {}",
                        w.expression(&b.left, level)?,
                        b.operator,
                        w.expression(&b.right, level)?
                    )
                }
                Expression::Inversion { operator, operand } => {
                    let operand = w.expression(operand, level)?;
                    let operator = operator.as_str();
                    // `-5`, `/a` and `//` would scan as a number, a moniker
                    // and the modulo operator.
                    let spaced = match operand.chars().next() {
                        Some(c) => c.is_alphanumeric() || c == '.' || c == '∞',
                        None => false,
                    };
                    let joined = format!("{}{}", operator, operand);
                    let gap = if spaced || !scans_apart(operator, &joined) {
                        " "
                    } else {
                        ""
                    };
                    format!("{}{}{}", operator, gap, operand)
                }
                Expression::Magnitude(inner) => format!("|{}|", w.expression(inner, level)?),
                Expression::Complement(inner) => format!("NOT {}", w.expression(inner, level)?),
            })
        })
    }
}
