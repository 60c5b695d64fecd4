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

//! Tags: random identifiers written as `#` and base-32 digits.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use crate::error::BaliError;
use crate::lex::{scan_exact, TokenKind};

/// Base-32 digits in ascending order. The letters E, I, O and U are left out.
pub const BASE32_DIGITS: &[u8; 32] = b"0123456789ABCDFGHJKLMNPQRSTVWXYZ";

/// Bytes of randomness in a default tag.
pub const DEFAULT_TAG_SIZE: usize = 20;

fn digit_value(digit: u8) -> Option<u32> {
    BASE32_DIGITS.iter().position(|d| *d == digit).map(|i| i as u32)
}

/// Encode bytes as base-32 digits, five bits per digit, most significant
/// bit first. A trailing partial group is padded with zero bits.
pub fn base32_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8 + 4) / 5);
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for byte in bytes {
        buffer = (buffer << 8) | u32::from(*byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_DIGITS[((buffer >> bits) & 0x1F) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(BASE32_DIGITS[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }
    out
}

/// A tag. Orders by number of digits, then digit by digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// A fresh tag holding `size` random bytes.
    pub fn random(size: usize) -> Self {
        let mut bytes = vec![0u8; size.max(1)];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(base32_encode(&bytes))
    }

    /// The digits without the leading `#`.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The tag one base-32 step above this one, with the same number of
    /// digits. `None` when every digit is already `Z`.
    pub fn successor(&self) -> Option<Tag> {
        self.step(true)
    }

    /// The tag one base-32 step below this one. `None` when every digit is `0`.
    pub fn predecessor(&self) -> Option<Tag> {
        self.step(false)
    }

    fn step(&self, up: bool) -> Option<Tag> {
        let mut digits = self.0.clone().into_bytes();
        for digit in digits.iter_mut().rev() {
            let value = digit_value(*digit)?;
            match (up, value) {
                (true, 31) => *digit = BASE32_DIGITS[0],
                (false, 0) => *digit = BASE32_DIGITS[31],
                (true, v) => {
                    *digit = BASE32_DIGITS[v as usize + 1];
                    return String::from_utf8(digits).ok().map(Tag);
                }
                (false, v) => {
                    *digit = BASE32_DIGITS[v as usize - 1];
                    return String::from_utf8(digits).ok().map(Tag);
                }
            }
        }
        None
    }

    /// Numeric value of the digits, when it fits in an `i64`.
    pub fn value(&self) -> Option<i64> {
        if self.0.len() > 12 {
            return None;
        }
        self.0
            .bytes()
            .try_fold(0i64, |acc, d| Some(acc * 32 + i64::from(digit_value(d)?)))
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for Tag {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Tag) {
            return Err(BaliError::syntax(format!("{:?} is not a valid tag", s), 0));
        }
        Ok(Tag(s[1..].to_string()))
    }
}
