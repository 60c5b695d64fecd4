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

//! Closed sets of literal values.
//!
//! [`Element`] and [`StringLiteral`] are the literal payloads a component can
//! carry. [`Scalar`] is the set of values a range endpoint can hold. Each is
//! a tagged union, so rendering a value never depends on probing which
//! capabilities it has.

use std::fmt::{self, Display};

use super::number::{Angle, Number, Percentage, Probability, Real};
use super::pattern::Pattern;
use super::resource::Resource;
use super::tag::Tag;
use super::temporal::{Duration, Moment};
use super::text::{format_rune, Binary, Moniker, Narrative, Quote, Symbol};
use super::version::Version;

/// A primitive element literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Angle(Angle),
    Boolean(bool),
    Duration(Duration),
    Moment(Moment),
    Number(Number),
    Pattern(Pattern),
    Percentage(Percentage),
    Probability(Probability),
    Resource(Resource),
    Symbol(Symbol),
    Tag(Tag),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Angle(v) => v.fmt(f),
            Element::Boolean(v) => v.fmt(f),
            Element::Duration(v) => v.fmt(f),
            Element::Moment(v) => v.fmt(f),
            Element::Number(v) => v.fmt(f),
            Element::Pattern(v) => v.fmt(f),
            Element::Percentage(v) => v.fmt(f),
            Element::Probability(v) => v.fmt(f),
            Element::Resource(v) => v.fmt(f),
            Element::Symbol(v) => v.fmt(f),
            Element::Tag(v) => v.fmt(f),
        }
    }
}

/// A string-shaped literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StringLiteral {
    Binary(Binary),
    Moniker(Moniker),
    Narrative(Narrative),
    Quote(Quote),
    Version(Version),
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringLiteral::Binary(v) => v.fmt(f),
            StringLiteral::Moniker(v) => v.fmt(f),
            StringLiteral::Narrative(v) => v.fmt(f),
            StringLiteral::Quote(v) => v.fmt(f),
            StringLiteral::Version(v) => v.fmt(f),
        }
    }
}

/// A range endpoint value.
///
/// Two scalars of different variants never compare equal, and the derived
/// ordering only matters between values of the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scalar {
    Angle(Angle),
    Binary(Binary),
    Boolean(bool),
    Duration(Duration),
    Integer(i64),
    Moment(Moment),
    Moniker(Moniker),
    Pattern(Pattern),
    Percentage(Percentage),
    Probability(Probability),
    Quote(Quote),
    Real(Real),
    Resource(Resource),
    Rune(char),
    Symbol(Symbol),
    Tag(Tag),
    Version(Version),
}

impl Scalar {
    /// Name of the concrete type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Angle(_) => "angle",
            Scalar::Binary(_) => "binary",
            Scalar::Boolean(_) => "boolean",
            Scalar::Duration(_) => "duration",
            Scalar::Integer(_) => "integer",
            Scalar::Moment(_) => "moment",
            Scalar::Moniker(_) => "moniker",
            Scalar::Pattern(_) => "pattern",
            Scalar::Percentage(_) => "percentage",
            Scalar::Probability(_) => "probability",
            Scalar::Quote(_) => "quote",
            Scalar::Real(_) => "real",
            Scalar::Resource(_) => "resource",
            Scalar::Rune(_) => "rune",
            Scalar::Symbol(_) => "symbol",
            Scalar::Tag(_) => "tag",
            Scalar::Version(_) => "version",
        }
    }

    pub fn same_type(&self, other: &Scalar) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// True for the types whose values can be enumerated one step at a time.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Scalar::Boolean(_)
                | Scalar::Duration(_)
                | Scalar::Integer(_)
                | Scalar::Moment(_)
                | Scalar::Rune(_)
                | Scalar::Tag(_)
                | Scalar::Version(_)
        )
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Angle(v) => v.fmt(f),
            Scalar::Binary(v) => v.fmt(f),
            Scalar::Boolean(v) => v.fmt(f),
            Scalar::Duration(v) => v.fmt(f),
            Scalar::Integer(v) => v.fmt(f),
            Scalar::Moment(v) => v.fmt(f),
            Scalar::Moniker(v) => v.fmt(f),
            Scalar::Pattern(v) => v.fmt(f),
            Scalar::Percentage(v) => v.fmt(f),
            Scalar::Probability(v) => v.fmt(f),
            Scalar::Quote(v) => v.fmt(f),
            Scalar::Real(v) => v.fmt(f),
            Scalar::Resource(v) => v.fmt(f),
            Scalar::Rune(v) => f.write_str(&format_rune(*v)),
            Scalar::Symbol(v) => v.fmt(f),
            Scalar::Tag(v) => v.fmt(f),
            Scalar::Version(v) => v.fmt(f),
        }
    }
}
