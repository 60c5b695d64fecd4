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

//! Bali canonical formatting
//!
//! Renders a [`Component`] tree to canonical Bali text.
//!
//! # Overview
//!
//! Canonical text is the one rendering the formatter produces for a tree.
//! It is chosen so that:
//!
//! - **Round trips hold**: `format(parse(s)) == s` for canonical `s`
//! - **Reparsing is lossless**: `parse(format(t))` is structurally equal to `t`
//! - **Annotations survive**: notes and block comments are written where
//!   they were attached
//!
//! Collections with more than [`FormatConfig::max_inline_entries`] entries,
//! or with an entry that spans lines or carries an annotation, are written
//! one entry per line. Everything else stays on one line.
//!
//! # Examples
//!
//! ```
//! use bali_c14n::{format, format_with_config, FormatConfig};
//!
//! # fn example() -> Result<(), bali_core::BaliError> {
//! let tree = bali_core::parse("[\n    1\n    2\n]")?;
//! assert_eq!(format(&tree)?, "[\n    1\n    2\n]");
//!
//! let config = FormatConfig::new().with_max_inline_entries(2);
//! assert_eq!(format_with_config(&tree, &config)?, "[1, 2]");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Errors
//!
//! Formatting fails with a `Format` error only for trees the parser could
//! not have produced: an annotated catalog key, a block comment ending a
//! statement, a moment outside the calendar, or nesting beyond 1000 levels.

mod config;
mod writer;

pub use config::{FormatConfig, FormatConfigBuilder};
pub use writer::CanonicalWriter;

use bali_core::{BaliResult, Component};
use tracing::debug;

/// Format a component as canonical text using the default configuration.
///
/// The result has no trailing newline, so it can be embedded in other text.
///
/// # Errors
///
/// Returns a `Format` error if the tree has no canonical form.
pub fn format(component: &Component) -> BaliResult<String> {
    format_with_config(component, &FormatConfig::default())
}

/// Format a component with a custom layout.
///
/// # Examples
///
/// ```
/// use bali_c14n::{format_with_config, FormatConfig};
///
/// let tree = bali_core::parse("[$a: 1]").unwrap();
/// let config = FormatConfig::builder().indentation(2).build();
/// assert_eq!(format_with_config(&tree, &config).unwrap(), "[$a: 1]");
/// ```
pub fn format_with_config(component: &Component, config: &FormatConfig) -> BaliResult<String> {
    debug!(
        indentation = config.indentation,
        max_inline_entries = config.max_inline_entries,
        "formatting component"
    );
    CanonicalWriter::new(config.clone()).write_component(component)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reformat(source: &str) -> String {
        format(&bali_core::parse(source).unwrap()).unwrap()
    }

    // ==================== Element tests ====================

    #[test]
    fn test_element_literals() {
        for source in ["~0", "~π", "5", "-2.5", "true", "50%", ".25", "$name", "<2024-03-15>"] {
            assert_eq!(reformat(source), source);
        }
    }

    #[test]
    fn test_string_literals() {
        for source in ["\"hello\"", "v1.2.3", "/bali/types/v1", "'aGk='"] {
            assert_eq!(reformat(source), source);
        }
    }

    // ==================== Collection tests ====================

    #[test]
    fn test_empty_catalog() {
        assert_eq!(reformat("[:]"), "[:]");
    }

    #[test]
    fn test_range() {
        assert_eq!(reformat("[1..5]"), "[1..5]");
    }

    #[test]
    fn test_context_parameters() {
        assert_eq!(reformat("[ ] ($type: /bali/List/v1)"), "[ ] ($type: /bali/List/v1)");
    }

    #[test]
    fn test_inline_list_input_goes_multiline() {
        assert_eq!(reformat("[1, 2, 3]"), "[\n    1\n    2\n    3\n]");
    }

    // ==================== Procedure tests ====================

    #[test]
    fn test_single_statement_procedure() {
        assert_eq!(reformat("{return $x + 1}"), "{return $x + 1}");
    }

    #[test]
    fn test_multi_statement_procedure() {
        let source = "{\n    $x := 1\n    return $x\n}";
        assert_eq!(reformat(source), source);
    }

    #[test]
    fn test_expression_spacing() {
        assert_eq!(reformat("{return a^2 + b^2}"), "{return a^2 + b^2}");
        assert_eq!(reformat("{return NOT |a|}"), "{return NOT |a|}");
    }
}
