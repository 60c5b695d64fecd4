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

//! Resource limits for Bali parsing.

/// Configurable limits for parser resources.
///
/// Recursive descent recurses once per nesting level of the input, so the
/// depth limit is what keeps hostile input from exhausting the call stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum source size in bytes (default: 16MB).
    pub max_input_size: usize,
    /// Maximum nesting depth of components, expressions and statements
    /// (default: 256).
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16MB
            max_depth: 256,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_depth: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default limits tests ====================

    #[test]
    fn test_default_max_input_size() {
        assert_eq!(Limits::default().max_input_size, 16 * 1024 * 1024);
    }

    #[test]
    fn test_default_max_depth() {
        assert_eq!(Limits::default().max_depth, 256);
    }

    // ==================== Unlimited limits tests ====================

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_input_size, usize::MAX);
        assert_eq!(limits.max_depth, usize::MAX);
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits {
            max_depth: 8,
            ..Limits::default()
        };
        assert_eq!(limits.max_depth, 8);
        assert_eq!(limits.max_input_size, Limits::default().max_input_size);
    }
}
