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

//! Versions: dotted sequences of positive ordinals such as `v1.2.3`.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::BaliError;
use crate::lex::{scan_exact, TokenKind};

/// A version. Never empty; every ordinal is at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(Vec<NonZeroU32>);

impl Version {
    /// Build a version, or `None` if `ordinals` is empty or holds a zero.
    pub fn new(ordinals: &[u32]) -> Option<Self> {
        if ordinals.is_empty() {
            return None;
        }
        ordinals
            .iter()
            .map(|n| NonZeroU32::new(*n))
            .collect::<Option<Vec<_>>>()
            .map(Version)
    }

    pub fn ordinals(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|n| n.get())
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The ordinal at a 1-based `level`; negative levels count from the end.
    pub fn ordinal(&self, level: isize) -> Option<u32> {
        let index = if level < 0 {
            self.0.len().checked_sub(level.unsigned_abs())?
        } else {
            usize::try_from(level).ok()?.checked_sub(1)?
        };
        self.0.get(index).map(|n| n.get())
    }

    /// The next version at `level`. Levels past the end append a new `1`
    /// ordinal; otherwise the version is truncated to `level` ordinals and
    /// the last one incremented. Level 0 is treated as the last level.
    pub fn next_version(&self, level: usize) -> Version {
        let level = if level == 0 { self.0.len() } else { level };
        let mut ordinals = self.0.clone();
        if level > ordinals.len() {
            ordinals.push(NonZeroU32::MIN);
        } else {
            ordinals.truncate(level);
            if let Some(last) = ordinals.last_mut() {
                *last = last.saturating_add(1);
            }
        }
        Version(ordinals)
    }

    /// True when `next` is a legal successor of `current` at some level.
    pub fn is_valid_next_version(current: &Version, next: &Version) -> bool {
        (1..=current.len() + 1).any(|level| current.next_version(level) == *next)
    }

    /// `v1` followed by `v2.3` gives `v1.2.3`.
    pub fn concatenate(first: &Version, second: &Version) -> Version {
        let mut ordinals = first.0.clone();
        ordinals.extend_from_slice(&second.0);
        Version(ordinals)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("v")?;
        for (i, ordinal) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", ordinal)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BaliError::syntax(format!("{:?} is not a valid version", s), 0);
        if !scan_exact(s, TokenKind::Version) {
            return Err(invalid());
        }
        s[1..]
            .split('.')
            .map(|part| part.parse::<NonZeroU32>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Version)
            .ok_or_else(invalid)
    }
}
