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

//! Bounded ranges over scalar domains.
//!
//! A discrete domain can be stepped one value at a time and so supports
//! size, index lookup and enumeration through [`Interval`]. Any ordered
//! domain supports containment through [`Continuum`]. [`Range`] is the
//! untyped form the parser builds, with endpoints that may be omitted.

use std::fmt;

use super::scalar::Scalar;
use super::tag::{Tag, BASE32_DIGITS};
use super::temporal::{Duration, Moment};
use super::version::Version;
use crate::error::{BaliError, BaliResult};

/// Which endpoints a range includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    /// `first..last`
    #[default]
    Inclusive,
    /// `first<..last`
    LeftOpen,
    /// `first..<last`
    RightOpen,
    /// `first<..<last`
    Exclusive,
}

impl Extent {
    pub fn delimiter(self) -> &'static str {
        match self {
            Extent::Inclusive => "..",
            Extent::LeftOpen => "<..",
            Extent::RightOpen => "..<",
            Extent::Exclusive => "<..<",
        }
    }

    pub fn from_delimiter(text: &str) -> Option<Extent> {
        match text {
            ".." => Some(Extent::Inclusive),
            "<.." => Some(Extent::LeftOpen),
            "..<" => Some(Extent::RightOpen),
            "<..<" => Some(Extent::Exclusive),
            _ => None,
        }
    }

    pub fn includes_first(self) -> bool {
        matches!(self, Extent::Inclusive | Extent::RightOpen)
    }

    pub fn includes_last(self) -> bool {
        matches!(self, Extent::Inclusive | Extent::LeftOpen)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.delimiter())
    }
}

// ==================== Discrete domains ====================

/// A domain whose values can be enumerated in order.
pub trait Discrete: Clone + Ord {
    /// The value `steps` steps away, if it exists.
    fn offset(&self, steps: i64) -> Option<Self>;

    /// Number of steps from `self` to `other`, negative when `other` comes
    /// first. `None` when the two cannot be reached from one another.
    fn distance(&self, other: &Self) -> Option<i64>;

    fn successor(&self) -> Option<Self> {
        self.offset(1)
    }

    fn predecessor(&self) -> Option<Self> {
        self.offset(-1)
    }
}

impl Discrete for i64 {
    fn offset(&self, steps: i64) -> Option<Self> {
        self.checked_add(steps)
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        other.checked_sub(*self)
    }
}

impl Discrete for bool {
    fn offset(&self, steps: i64) -> Option<Self> {
        match i64::from(*self).checked_add(steps)? {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        Some(i64::from(*other) - i64::from(*self))
    }
}

const SURROGATES: u32 = 0xE000 - 0xD800;

/// Position of a rune among the scalar values, surrogates skipped.
fn rune_ordinal(rune: char) -> i64 {
    let code = rune as u32;
    i64::from(if code >= 0xE000 { code - SURROGATES } else { code })
}

fn rune_from_ordinal(ordinal: i64) -> Option<char> {
    let ordinal = u32::try_from(ordinal).ok()?;
    let code = if ordinal >= 0xD800 {
        ordinal.checked_add(SURROGATES)?
    } else {
        ordinal
    };
    char::from_u32(code)
}

impl Discrete for char {
    fn offset(&self, steps: i64) -> Option<Self> {
        rune_from_ordinal(rune_ordinal(*self).checked_add(steps)?)
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        Some(rune_ordinal(*other) - rune_ordinal(*self))
    }
}

impl Discrete for Duration {
    fn offset(&self, steps: i64) -> Option<Self> {
        self.as_millis().checked_add(steps).map(Duration::from_millis)
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        other.as_millis().checked_sub(self.as_millis())
    }
}

impl Discrete for Moment {
    fn offset(&self, steps: i64) -> Option<Self> {
        self.as_millis().checked_add(steps).map(Moment::from_millis)
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        other.as_millis().checked_sub(self.as_millis())
    }
}

impl Discrete for Tag {
    fn offset(&self, steps: i64) -> Option<Self> {
        match steps {
            0 => Some(self.clone()),
            1 => Tag::successor(self),
            -1 => Tag::predecessor(self),
            _ => {
                let target = self.value()?.checked_add(steps)?;
                if target < 0 {
                    return None;
                }
                let width = self.digits().len();
                let mut digits = vec![b'0'; width];
                let mut rest = target;
                for digit in digits.iter_mut().rev() {
                    *digit = BASE32_DIGITS[(rest % 32) as usize];
                    rest /= 32;
                }
                if rest != 0 {
                    return None;
                }
                let text = String::from_utf8(digits).ok()?;
                format!("#{}", text).parse().ok()
            }
        }
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        if self.digits().len() != other.digits().len() {
            return None;
        }
        other.value()?.checked_sub(self.value()?)
    }

    fn successor(&self) -> Option<Self> {
        Tag::successor(self)
    }

    fn predecessor(&self) -> Option<Self> {
        Tag::predecessor(self)
    }
}

/// Versions step by their last ordinal.
impl Discrete for Version {
    fn offset(&self, steps: i64) -> Option<Self> {
        let mut ordinals: Vec<u32> = self.ordinals().collect();
        let last = ordinals.last_mut()?;
        *last = u32::try_from(i64::from(*last).checked_add(steps)?).ok()?;
        Version::new(&ordinals)
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        let mine: Vec<u32> = self.ordinals().collect();
        let theirs: Vec<u32> = other.ordinals().collect();
        let (my_last, my_prefix) = mine.split_last()?;
        let (their_last, their_prefix) = theirs.split_last()?;
        (my_prefix == their_prefix).then(|| i64::from(*their_last) - i64::from(*my_last))
    }
}

// ==================== Interval ====================

/// A bounded range over a discrete domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    first: T,
    extent: Extent,
    last: T,
}

impl<T: Discrete> Interval<T> {
    pub fn new(first: T, extent: Extent, last: T) -> Self {
        Self {
            first,
            extent,
            last,
        }
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn last(&self) -> &T {
        &self.last
    }

    /// The first member, when the interval is not empty at its low end.
    fn lowest(&self) -> Option<T> {
        if self.extent.includes_first() {
            Some(self.first.clone())
        } else {
            self.first.successor()
        }
    }

    /// Number of members, or `None` when the endpoints cannot be counted
    /// between.
    pub fn size(&self) -> Option<usize> {
        let raw = self.first.distance(&self.last)?;
        let adjusted = match self.extent {
            Extent::Inclusive => raw.checked_add(1)?,
            Extent::LeftOpen | Extent::RightOpen => raw,
            Extent::Exclusive => raw.checked_sub(1)?,
        };
        Some(usize::try_from(adjusted).unwrap_or(0))
    }

    pub fn is_empty(&self) -> bool {
        self.size() == Some(0)
    }

    pub fn contains(&self, value: &T) -> bool {
        let above = match self.extent.includes_first() {
            true => *value >= self.first,
            false => *value > self.first,
        };
        let below = match self.extent.includes_last() {
            true => *value <= self.last,
            false => *value < self.last,
        };
        above && below
    }

    /// 1-based position of `value`, or 0 when it is not a member.
    pub fn index_of(&self, value: &T) -> usize {
        if !self.contains(value) {
            return 0;
        }
        self.lowest()
            .and_then(|lowest| lowest.distance(value))
            .and_then(|steps| usize::try_from(steps).ok())
            .map_or(0, |steps| steps + 1)
    }

    /// The member at a 1-based `index`; negative indices count back from the
    /// last member.
    pub fn value_at(&self, index: i64) -> Option<T> {
        let size = i64::try_from(self.size()?).ok()?;
        let position = match index {
            0 => return None,
            i if i > 0 => i,
            i => size + i + 1,
        };
        if position < 1 || position > size {
            return None;
        }
        self.lowest()?.offset(position - 1)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let size = self.size().unwrap_or(0);
        std::iter::successors(self.lowest(), |value| value.successor()).take(size)
    }
}

// ==================== Continuum ====================

/// A range over an ordered domain, either end possibly unbounded. Supports
/// containment only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Continuum<T> {
    first: Option<T>,
    extent: Extent,
    last: Option<T>,
}

impl<T: Ord> Continuum<T> {
    pub fn new(first: Option<T>, extent: Extent, last: Option<T>) -> Self {
        Self {
            first,
            extent,
            last,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        let above = self.first.as_ref().map_or(true, |first| {
            if self.extent.includes_first() {
                value >= first
            } else {
                value > first
            }
        });
        let below = self.last.as_ref().map_or(true, |last| {
            if self.extent.includes_last() {
                value <= last
            } else {
                value < last
            }
        });
        above && below
    }
}

// ==================== Range ====================

/// A range literal. Both endpoints, when present, hold the same scalar type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    first: Option<Scalar>,
    extent: Extent,
    last: Option<Scalar>,
}

/// Run `$body` with `$a` and `$b` bound to the payloads of two scalars of
/// the same discrete type. `$wrap` rebuilds a scalar of that type and
/// `$unwrap` extracts its payload from another scalar.
macro_rules! with_discrete {
    (@arms $pair:expr; [$a:ident $b:ident $wrap:ident $unwrap:ident] $body:expr; $($variant:ident)+) => {
        match $pair {
            $(
                (Scalar::$variant($a), Scalar::$variant($b)) => {
                    let $wrap = Scalar::$variant;
                    let $unwrap = |s: &Scalar| match s {
                        Scalar::$variant(x) => Some(x.clone()),
                        _ => None,
                    };
                    $body
                }
            )+
            _ => None,
        }
    };
    ($first:expr, $last:expr, |$a:ident, $b:ident, $wrap:ident, $unwrap:ident| $body:expr) => {
        with_discrete!(@arms ($first, $last); [$a $b $wrap $unwrap] $body;
            Integer Boolean Rune Duration Moment Tag Version)
    };
}

impl Range {
    /// Build a range, failing when the endpoints differ in type.
    pub fn new(first: Option<Scalar>, extent: Extent, last: Option<Scalar>) -> BaliResult<Self> {
        if let (Some(a), Some(b)) = (&first, &last) {
            if !a.same_type(b) {
                return Err(BaliError::range(format!(
                    "The endpoints of a range must have the same type, not {} and {}",
                    a.type_name(),
                    b.type_name()
                ))
                .with_context(format!("{}{}{}", a, extent, b)));
            }
        }
        Ok(Self {
            first,
            extent,
            last,
        })
    }

    pub fn first(&self) -> Option<&Scalar> {
        self.first.as_ref()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn last(&self) -> Option<&Scalar> {
        self.last.as_ref()
    }

    /// True when both endpoints are present and of a discrete type.
    pub fn is_enumerable(&self) -> bool {
        matches!((&self.first, &self.last), (Some(a), Some(_)) if a.is_discrete())
    }

    pub fn contains(&self, value: &Scalar) -> bool {
        let endpoint = self.first.as_ref().or(self.last.as_ref());
        if endpoint.map_or(false, |e| !e.same_type(value)) {
            return false;
        }
        Continuum::new(self.first.as_ref(), self.extent, self.last.as_ref()).contains(&value)
    }

    /// Number of members of an enumerable range.
    pub fn size(&self) -> Option<usize> {
        let (first, last) = (self.first.clone()?, self.last.clone()?);
        let extent = self.extent;
        with_discrete!(first, last, |a, b, _wrap, _unwrap| Interval::new(a, extent, b).size())
    }

    /// 1-based position of `value`, or 0 when it is not a member.
    pub fn index_of(&self, value: &Scalar) -> usize {
        let (Some(first), Some(last)) = (self.first.clone(), self.last.clone()) else {
            return 0;
        };
        let extent = self.extent;
        let found = with_discrete!(first, last, |a, b, _wrap, unwrap| {
            unwrap(value).map(|v| Interval::new(a, extent, b).index_of(&v))
        });
        found.unwrap_or(0)
    }

    /// The member at a 1-based `index`.
    pub fn value_at(&self, index: i64) -> Option<Scalar> {
        let (first, last) = (self.first.clone()?, self.last.clone()?);
        let extent = self.extent;
        with_discrete!(first, last, |a, b, wrap, _unwrap| Interval::new(a, extent, b)
            .value_at(index)
            .map(wrap))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = &self.first {
            write!(f, "{}", first)?;
        }
        f.write_str(self.extent.delimiter())?;
        if let Some(last) = &self.last {
            write!(f, "{}", last)?;
        }
        Ok(())
    }
}
