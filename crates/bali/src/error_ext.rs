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

//! Error context extension trait.
//!
//! Callers that parse documents from files or other sources usually want
//! the failure to say which document failed. [`BaliResultExt`] attaches that
//! context to a [`BaliError`] without losing its position or expected
//! productions, and lifts I/O failures into the same error type.

use crate::BaliError;
use std::fmt;

/// Extension methods for results that can fail with a [`BaliError`].
pub trait BaliResultExt<T> {
    /// Add context to an error.
    ///
    /// The message is evaluated immediately. For expensive messages, prefer
    /// [`with_context`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bali::{parse, BaliResultExt};
    ///
    /// let result = parse("[1, 2")
    ///     .context("in the header")
    ///     .context("while loading citation.bali");
    ///
    /// let err = result.unwrap_err();
    /// let context = err.context.unwrap();
    /// assert!(context.starts_with("while loading citation.bali"));
    /// assert!(context.contains("in the header"));
    /// ```
    ///
    /// [`with_context`]: BaliResultExt::with_context
    fn context<C>(self, context: C) -> Result<T, BaliError>
    where
        C: fmt::Display;

    /// Add context to an error using a closure, evaluated only on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bali::{parse, BaliResultExt};
    ///
    /// fn load(path: &str, content: &str) -> Result<(), bali::BaliError> {
    ///     parse(content).with_context(|| format!("in {} ({} bytes)", path, content.len()))?;
    ///     Ok(())
    /// }
    /// assert!(load("draft.bali", "[:]").is_ok());
    /// ```
    fn with_context<C, F>(self, f: F) -> Result<T, BaliError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> BaliResultExt<T> for Result<T, BaliError> {
    fn context<C>(self, context: C) -> Result<T, BaliError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, BaliError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }
}

impl<T> BaliResultExt<T> for Result<T, std::io::Error> {
    fn context<C>(self, context: C) -> Result<T, BaliError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| BaliError::io(e.to_string()).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, BaliError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| BaliError::io(e.to_string()).with_context(f().to_string()))
    }
}

/// Outer context goes first: "while loading; in the header".
fn add_context_to_error(mut error: BaliError, new_context: String) -> BaliError {
    if new_context.is_empty() {
        return error;
    }
    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, BaliErrorKind};

    // ==================== context() tests ====================

    #[test]
    fn test_context_on_error() {
        let result: Result<(), BaliError> = Err(BaliError::syntax("bad token", 5));
        let err = result.context("in procedure body").unwrap_err();

        assert_eq!(err.context, Some("in procedure body".to_string()));
        assert_eq!(err.line, 5);
        assert_eq!(err.kind, BaliErrorKind::Syntax);
    }

    #[test]
    fn test_context_on_ok() {
        let result: Result<i32, BaliError> = Ok(42);
        assert_eq!(result.context("unused").unwrap(), 42);
    }

    #[test]
    fn test_context_chaining_puts_outer_first() {
        let result: Result<(), BaliError> = Err(BaliError::range("mismatched endpoints"));
        let err = result
            .context("in range")
            .context("while loading")
            .unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while loading; in range"));
    }

    #[test]
    fn test_context_preserves_error_fields() {
        let err = parse("[1, 2").context("in draft").unwrap_err();
        assert_eq!(err.kind, BaliErrorKind::Syntax);
        assert_eq!(err.line, 1);
        assert!(err.column.is_some());
        assert!(!err.expected.is_empty());
    }

    #[test]
    fn test_context_empty_string() {
        let result: Result<(), BaliError> = Err(BaliError::format("bad key"));
        assert_eq!(result.context("").unwrap_err().context, None);
    }

    // ==================== with_context() tests ====================

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut evaluated = false;
        let result: Result<i32, BaliError> = Ok(42);
        let value = result
            .with_context(|| {
                evaluated = true;
                "expensive"
            })
            .unwrap();
        assert_eq!(value, 42);
        assert!(!evaluated);
    }

    #[test]
    fn test_with_context_on_error() {
        let result: Result<(), BaliError> = Err(BaliError::syntax("bad", 2));
        let err = result
            .with_context(|| format!("in file {}", "citation.bali"))
            .unwrap_err();
        assert_eq!(err.context.as_deref(), Some("in file citation.bali"));
    }

    // ==================== io::Result tests ====================

    #[test]
    fn test_io_error_becomes_io_kind() {
        let io: Result<String, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = io.context("reading draft.bali").unwrap_err();
        assert_eq!(err.kind, BaliErrorKind::Io);
        assert!(err.message.contains("file not found"));
        assert_eq!(err.context.as_deref(), Some("reading draft.bali"));
    }

    #[test]
    fn test_io_ok_passes_through() {
        let io: Result<String, std::io::Error> = Ok("[:]".to_string());
        assert_eq!(io.with_context(|| "unused").unwrap(), "[:]");
    }
}
