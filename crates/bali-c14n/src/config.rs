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

//! Formatting configuration.
//!
//! This module defines the options that control the layout of canonical
//! Bali text.

/// Configuration for canonical output layout.
///
/// Layout never changes what a document means: the parser accepts inline
/// and one-entry-per-line collections alike, so every configuration
/// produces text that parses back to the same tree.
///
/// # Examples
///
/// ```
/// use bali_c14n::FormatConfig;
///
/// // Default configuration (canonical form)
/// let config = FormatConfig::default();
/// assert_eq!(config.indentation, 4);
/// assert_eq!(config.max_inline_entries, 1);
///
/// // Wider inline collections using the fluent API
/// let config = FormatConfig::new().with_max_inline_entries(4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct FormatConfig {
    /// Number of spaces per nesting level.
    ///
    /// Default: `4`
    pub indentation: usize,

    /// Largest number of entries a collection or context may have and still
    /// be written on one line.
    ///
    /// Collections with more entries, or with any entry that spans lines or
    /// carries an annotation, are written one entry per line:
    ///
    /// ```text
    /// [
    ///     1
    ///     2
    /// ]
    /// ```
    ///
    /// Default: `1`
    pub max_inline_entries: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indentation: 4,
            max_inline_entries: 1,
        }
    }
}

impl FormatConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `FormatConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bali_c14n::FormatConfig;
    ///
    /// let config = FormatConfig::builder()
    ///     .indentation(2)
    ///     .max_inline_entries(3)
    ///     .build();
    /// assert_eq!(config.indentation, 2);
    /// ```
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::new()
    }

    /// Set the number of spaces per nesting level.
    pub fn with_indentation(mut self, indentation: usize) -> Self {
        self.indentation = indentation;
        self
    }

    /// Set the largest entry count written on one line.
    pub fn with_max_inline_entries(mut self, max_inline_entries: usize) -> Self {
        self.max_inline_entries = max_inline_entries;
        self
    }
}

/// Builder for constructing a `FormatConfig` with a chainable API.
#[derive(Debug, Clone)]
pub struct FormatConfigBuilder {
    indentation: usize,
    max_inline_entries: usize,
}

impl Default for FormatConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        let defaults = FormatConfig::default();
        Self {
            indentation: defaults.indentation,
            max_inline_entries: defaults.max_inline_entries,
        }
    }

    /// Set the number of spaces per nesting level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bali_c14n::FormatConfig;
    ///
    /// let config = FormatConfig::builder().indentation(2).build();
    /// assert_eq!(config.indentation, 2);
    /// ```
    pub fn indentation(mut self, indentation: usize) -> Self {
        self.indentation = indentation;
        self
    }

    /// Set the largest entry count written on one line.
    pub fn max_inline_entries(mut self, max_inline_entries: usize) -> Self {
        self.max_inline_entries = max_inline_entries;
        self
    }

    /// Build the `FormatConfig` from this builder.
    pub fn build(self) -> FormatConfig {
        FormatConfig {
            indentation: self.indentation,
            max_inline_entries: self.max_inline_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== FormatConfig tests ====================

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indentation, 4);
        assert_eq!(config.max_inline_entries, 1);
        assert_eq!(config, FormatConfig::new());
    }

    #[test]
    fn test_fluent_setters() {
        let config = FormatConfig::new()
            .with_indentation(2)
            .with_max_inline_entries(8);
        assert_eq!(config.indentation, 2);
        assert_eq!(config.max_inline_entries, 8);
    }

    // ==================== FormatConfigBuilder tests ====================

    #[test]
    fn test_builder_defaults_match_config_defaults() {
        assert_eq!(FormatConfig::builder().build(), FormatConfig::default());
    }

    #[test]
    fn test_builder_partial_override() {
        let config = FormatConfig::builder().max_inline_entries(3).build();
        assert_eq!(config.max_inline_entries, 3);
        assert_eq!(config.indentation, 4);
    }
}
