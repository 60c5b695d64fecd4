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

//! The value model: literal element and string types, and ranges over them.

mod number;
mod pattern;
mod range;
mod resource;
mod scalar;
mod tag;
mod temporal;
mod text;
mod version;

pub use number::{format_real, Angle, Number, Percentage, Probability, Real, PHI};
pub use pattern::Pattern;
pub use range::{Continuum, Discrete, Extent, Interval, Range};
pub use resource::Resource;
pub use scalar::{Element, Scalar, StringLiteral};
pub use tag::{base32_encode, Tag, BASE32_DIGITS, DEFAULT_TAG_SIZE};
pub use temporal::{
    Duration, Moment, MILLISECONDS_PER_DAY, MILLISECONDS_PER_HOUR, MILLISECONDS_PER_MINUTE,
    MILLISECONDS_PER_MONTH, MILLISECONDS_PER_SECOND, MILLISECONDS_PER_WEEK,
    MILLISECONDS_PER_YEAR,
};
pub use text::{format_rune, Binary, Moniker, Narrative, Quote, Symbol};
pub use version::Version;

pub(crate) use number::parse_real;
pub(crate) use text::unescape;
