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

//! Invariant tests for canonical formatting.
//!
//! - Idempotency: formatting canonical text gives the same text
//! - Layout: inline and one-entry-per-line forms follow the configuration
//! - Errors: trees with no canonical form fail with a `Format` error

use bali_c14n::{format, format_with_config, CanonicalWriter, FormatConfig};
use bali_core::collections::List;
use bali_core::value::{Extent, Moment, Number, Symbol};
use bali_core::{
    parse, Annotation, BaliErrorKind, Binary, Clause, Collection, Component, Element, Entity, Expression,
    Line, Operator, Procedure, Statement,
};

fn integer(n: i64) -> Component {
    Component::new(Element::Number(Number::real(n as f64)))
}

fn reformat(source: &str) -> String {
    format(&parse(source).unwrap()).unwrap()
}

// ==================== Idempotency tests ====================

#[test]
fn test_idempotency_after_relayout() {
    let once = reformat("[1, [2, 3], [$a: 4]]");
    assert_eq!(reformat(&once), once);
}

#[test]
fn test_idempotency_procedure() {
    let once = reformat("{$x := 1; if $x < 2 do {return $x}}");
    assert_eq!(once, "{\n    $x := 1\n    if $x < 2 do {return $x}\n}");
    assert_eq!(reformat(&once), once);
}

#[test]
fn test_deterministic() {
    let tree = parse("[\n    $b: 2\n    $a: 1\n]").unwrap();
    assert_eq!(format(&tree).unwrap(), format(&tree).unwrap());
}

#[test]
fn test_catalog_keeps_insertion_order() {
    let source = "[\n    $b: 2\n    $a: 1\n]";
    assert_eq!(reformat(source), source);
}

// ==================== Layout tests ====================

#[test]
fn test_indentation() {
    let tree = parse("[[1, 2]]").unwrap();
    let config = FormatConfig::new().with_indentation(2);
    assert_eq!(
        format_with_config(&tree, &config).unwrap(),
        "[\n  [\n    1\n    2\n  ]\n]"
    );
}

#[test]
fn test_zero_inline_entries() {
    let tree = parse("[42]").unwrap();
    let config = FormatConfig::new().with_max_inline_entries(0);
    assert_eq!(format_with_config(&tree, &config).unwrap(), "[\n    42\n]");
    assert_eq!(format_with_config(&parse("[ ]").unwrap(), &config).unwrap(), "[ ]");
}

#[test]
fn test_wide_inline_entries() {
    let tree = parse("[\n    1\n    2\n    3\n]").unwrap();
    let config = FormatConfig::new().with_max_inline_entries(3);
    assert_eq!(format_with_config(&tree, &config).unwrap(), "[1, 2, 3]");
}

#[test]
fn test_multiline_child_forces_multiline_parent() {
    let tree = parse("[[1, 2]]").unwrap();
    let config = FormatConfig::new().with_max_inline_entries(1);
    assert_eq!(
        format_with_config(&tree, &config).unwrap(),
        "[\n    [\n        1\n        2\n    ]\n]"
    );
}

#[test]
fn test_multiline_context() {
    let source = "[ ] (\n    $type: /bali/List/v1\n    $version: v1.2\n)";
    assert_eq!(reformat(source), source);
}

#[test]
fn test_narrative_keeps_its_lines() {
    let source = "[\n    \">\n    first line\n    second line\n<\"\n]";
    assert_eq!(reformat(source), source);
}

#[test]
fn test_procedure_annotation_lines() {
    let source = "{\n    ! first\n    return 1\n}";
    assert_eq!(reformat(source), source);
}

#[test]
fn test_statement_note_forces_multiline() {
    let tree = parse("{\n    return 1  ! done\n}").unwrap();
    assert_eq!(format(&tree).unwrap(), "{\n    return 1  ! done\n}");
}

#[test]
fn test_inversion_keeps_operand_apart() {
    assert_eq!(reformat("{return - 5}"), "{return - 5}");
    assert_eq!(reformat("{return / a}"), "{return / a}");
    assert_eq!(reformat("{return -(a)}"), "{return -(a)}");
}

#[test]
fn test_reciprocal_keeps_slash_operand_apart() {
    assert_eq!(reformat("{return / / a}"), "{return / / a}");
    assert_eq!(reformat("{return / /a/b}"), "{return / /a/b}");
}

#[test]
fn test_moment_and_resource_ranges_are_canonical() {
    for source in [
        "[<2001>..<2002>]",
        "[<2001>..<<2002>]",
        "[<2001><..<2002>]",
        "[<2001><..<<2002>]",
        "[..<2002>]",
        "[<https://bali-nebula.net/a>..<https://bali-nebula.net/b>]",
    ] {
        assert_eq!(reformat(source), source);
    }
}

#[test]
fn test_inclusive_moment_range_keeps_extent() {
    let tree = parse("[<2001>..<2002>]").unwrap();
    let Entity::Collection(Collection::Range(range)) = &tree.entity else {
        panic!("not a range");
    };
    assert_eq!(range.extent(), Extent::Inclusive);
    assert_eq!(parse(&format(&tree).unwrap()).unwrap(), tree);
}

// ==================== Error tests ====================

#[test]
fn test_annotated_key_is_format_error() {
    let key = integer(1).with_annotation(Annotation::Note("! key".to_string()));
    let tree = Component::new(Collection::Catalog([(key, integer(2))].into_iter().collect()));
    assert_eq!(format(&tree).unwrap_err().kind, BaliErrorKind::Format);
}

#[test]
fn test_annotated_operand_is_format_error() {
    let operand = integer(1).with_annotation(Annotation::Note("! one".to_string()));
    let statement = Statement::new(Clause::Return(Expression::component(operand)));
    let tree = Component::new(Procedure::new(vec![Line::Statement(statement)].into()));
    assert_eq!(format(&tree).unwrap_err().kind, BaliErrorKind::Format);
}

fn returning(expression: Expression) -> Component {
    let statement = Statement::new(Clause::Return(expression));
    Component::new(Procedure::new(vec![Line::Statement(statement)].into()))
}

fn variable_difference() -> Expression {
    Expression::binary(
        Expression::variable("a"),
        Operator::Minus,
        Expression::variable("b"),
    )
    .unwrap()
}

#[test]
fn test_ungrouped_left_operand_is_format_error() {
    let tree = returning(Expression::Arithmetic(Binary {
        left: Box::new(variable_difference()),
        operator: Operator::Minus,
        right: Box::new(Expression::variable("c")),
    }));
    let err = format(&tree).unwrap_err();
    assert_eq!(err.kind, BaliErrorKind::Format);
    assert!(err.message.contains("parentheses"));
}

#[test]
fn test_ungrouped_prefix_left_operand_is_format_error() {
    let negated = Expression::unary(Operator::Inverse, Expression::variable("a")).unwrap();
    let tree = returning(Expression::Exponential(Binary {
        left: Box::new(negated),
        operator: Operator::Caret,
        right: Box::new(integer_expression(2)),
    }));
    assert_eq!(format(&tree).unwrap_err().kind, BaliErrorKind::Format);
}

#[test]
fn test_grouped_left_operand_round_trips() {
    let grouped = Expression::Precedence(Box::new(variable_difference()));
    let sum = Expression::binary(grouped, Operator::Minus, Expression::variable("c")).unwrap();
    let tree = returning(sum);
    let text = format(&tree).unwrap();
    assert_eq!(text, "{return (a - b) - c}");
    assert_eq!(parse(&text).unwrap(), tree);
}

#[test]
fn test_ungrouped_invocation_target_is_format_error() {
    let tree = returning(Expression::Invocation {
        target: Box::new(variable_difference()),
        operator: Operator::Dot,
        message: "size".to_string(),
        arguments: List::new(),
    });
    assert_eq!(format(&tree).unwrap_err().kind, BaliErrorKind::Format);
}

#[test]
fn test_integer_invocation_target_is_format_error() {
    let tree = returning(Expression::Invocation {
        target: Box::new(integer_expression(1)),
        operator: Operator::Dot,
        message: "size".to_string(),
        arguments: List::new(),
    });
    let err = format(&tree).unwrap_err();
    assert_eq!(err.kind, BaliErrorKind::Format);
    assert!(err.message.contains(".size("));
}

fn integer_expression(n: i64) -> Expression {
    Expression::component(integer(n))
}

#[test]
fn test_moment_outside_calendar_is_format_error() {
    let tree = Component::new(Collection::List(
        vec![Component::new(Element::Moment(Moment::from_millis(i64::MIN)))].into(),
    ));
    let err = format(&tree).unwrap_err();
    assert_eq!(err.kind, BaliErrorKind::Format);
}

#[test]
fn test_deep_tree_is_format_error() {
    // Building, formatting and dropping the tree all recurse.
    let worker = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let mut tree = Component::new(Element::Symbol(Symbol::new("leaf")));
            for _ in 0..1100 {
                tree = Component::new(Collection::List(List::from(vec![tree])));
            }
            CanonicalWriter::new(FormatConfig::default())
                .write_component(&tree)
                .unwrap_err()
        })
        .unwrap();
    let err = worker.join().unwrap();
    assert_eq!(err.kind, BaliErrorKind::Format);
    assert!(err.message.contains("1000"));
}
