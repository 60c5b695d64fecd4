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

//! Numeric elements: reals, complex numbers, angles, percentages and
//! probabilities.
//!
//! Floating point payloads compare bitwise and order by IEEE total order, so
//! every numeric element is `Eq + Hash + Ord` and can sit in a catalog key
//! or a range endpoint.

use std::f64::consts::{E, PI, TAU};
use std::fmt;
use std::str::FromStr;

use crate::error::BaliError;
use crate::lex::{scan_exact, TokenKind};

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Real values above this magnitude are written in scientific form.
const SCIENTIFIC_ABOVE: f64 = 21.0;
/// Real values below this decimal exponent are written in scientific form.
const SCIENTIFIC_BELOW: f64 = -4.0;

/// Collapse negative zero and NaN payloads.
pub(crate) fn canonical(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else if value.is_nan() {
        f64::NAN
    } else {
        value
    }
}

macro_rules! float_identity {
    ($name:ident) => {
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.to_bits() == other.0.to_bits()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.total_cmp(&other.0)
            }
        }
    };
}

fn invalid(kind: &str, text: &str) -> BaliError {
    BaliError::syntax(format!("{:?} is not a valid {}", text, kind), 0)
}

/// Decode the text of a real literal, named constants included.
pub(crate) fn parse_real(text: &str) -> Option<f64> {
    let (sign, body) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let magnitude = match body {
        "e" => E,
        "π" | "pi" => PI,
        "φ" | "phi" => PHI,
        "τ" | "tau" => TAU,
        "∞" | "infinity" => f64::INFINITY,
        "undefined" => return Some(f64::NAN),
        _ if body.starts_with(|c: char| c.is_ascii_digit()) => body.parse::<f64>().ok()?,
        _ => return None,
    };
    Some(sign * magnitude)
}

/// Canonical text of a real value.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "undefined".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+∞" } else { "-∞" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    for (constant, symbol) in [(E, "e"), (PI, "π"), (PHI, "φ"), (TAU, "τ")] {
        if value == constant {
            return symbol.to_string();
        }
        if value == -constant {
            return format!("-{}", symbol);
        }
    }
    let exponent = value.abs().log10().floor();
    if exponent < SCIENTIFIC_BELOW || exponent >= SCIENTIFIC_ABOVE {
        format!("{:e}", value).replace('e', "E")
    } else {
        format!("{}", value)
    }
}

// ==================== Real ====================

/// A real number used as a continuous range endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Real(f64);

float_identity!(Real);

impl Real {
    pub fn new(value: f64) -> Self {
        Self(canonical(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_real(self.0))
    }
}

impl FromStr for Real {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Number) {
            return Err(invalid("real", s));
        }
        parse_real(s).map(Self::new).ok_or_else(|| invalid("real", s))
    }
}

// ==================== Number ====================

/// A real or complex number in rectangular form.
#[derive(Debug, Clone, Copy)]
pub struct Number {
    re: f64,
    im: f64,
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.re.to_bits() == other.re.to_bits() && self.im.to_bits() == other.im.to_bits()
    }
}

impl Eq for Number {}

impl std::hash::Hash for Number {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.re.to_bits().hash(state);
        self.im.to_bits().hash(state);
    }
}

impl Number {
    pub fn real(value: f64) -> Self {
        Self::complex(value, 0.0)
    }

    pub fn imaginary(value: f64) -> Self {
        Self::complex(0.0, value)
    }

    /// Build a complex number. Any NaN part makes the whole number
    /// undefined and an infinite imaginary part collapses to infinity.
    pub fn complex(re: f64, im: f64) -> Self {
        if re.is_nan() || im.is_nan() {
            return Self::undefined();
        }
        if im.is_infinite() {
            return Self {
                re: f64::INFINITY,
                im: 0.0,
            };
        }
        Self {
            re: canonical(re),
            im: canonical(im),
        }
    }

    /// Build a complex number from polar coordinates.
    pub fn polar(magnitude: f64, phase: f64) -> Self {
        let snap = |v: f64| if v.abs() < magnitude.abs() * 1e-15 { 0.0 } else { v };
        Self::complex(snap(magnitude * phase.cos()), snap(magnitude * phase.sin()))
    }

    pub fn undefined() -> Self {
        Self {
            re: f64::NAN,
            im: f64::NAN,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.re.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite()
    }

    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    pub fn real_part(&self) -> f64 {
        self.re
    }

    pub fn imaginary_part(&self) -> f64 {
        self.im
    }

    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn phase(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// The integer value, when this is a whole real number.
    pub fn as_integer(&self) -> Option<i64> {
        let whole = self.is_real() && self.re.is_finite() && self.re.fract() == 0.0;
        (whole && self.re.abs() < i64::MAX as f64).then_some(self.re as i64)
    }
}

fn format_imaginary(im: f64) -> String {
    if im == 1.0 {
        "i".to_string()
    } else if im == -1.0 {
        "-i".to_string()
    } else {
        format!("{}i", format_real(im))
    }
}

fn parse_imaginary(text: &str) -> Option<f64> {
    match text.strip_suffix('i')? {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        coefficient => parse_real(coefficient),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("undefined")
        } else if self.is_real() {
            f.write_str(&format_real(self.re))
        } else if self.re == 0.0 {
            f.write_str(&format_imaginary(self.im))
        } else {
            write!(f, "({}, {})", format_real(self.re), format_imaginary(self.im))
        }
    }
}

fn decode_number(s: &str) -> Option<Number> {
    if let Some(inner) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        if let Some((re, im)) = inner.split_once(", ") {
            return Some(Number::complex(parse_real(re)?, parse_imaginary(im)?));
        }
        let (magnitude, rest) = inner.split_once("e^~")?;
        let phase = rest.strip_suffix('i')?.trim_end();
        return Some(Number::polar(parse_real(magnitude.trim_end())?, parse_real(phase)?));
    }
    parse_real(s)
        .map(Number::real)
        .or_else(|| parse_imaginary(s).map(Number::imaginary))
}

impl FromStr for Number {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Number) {
            return Err(invalid("number", s));
        }
        decode_number(s).ok_or_else(|| invalid("number", s))
    }
}

// ==================== Angle ====================

/// An angle in radians.
#[derive(Debug, Clone, Copy)]
pub struct Angle(f64);

float_identity!(Angle);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const PI: Angle = Angle(PI);

    pub fn new(radians: f64) -> Self {
        Self(canonical(radians))
    }

    pub fn radians(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", format_real(self.0))
    }
}

impl FromStr for Angle {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Angle) {
            return Err(invalid("angle", s));
        }
        parse_real(&s[1..])
            .map(Self::new)
            .ok_or_else(|| invalid("angle", s))
    }
}

// ==================== Percentage ====================

/// A percentage, stored as the number shown before the `%`.
#[derive(Debug, Clone, Copy)]
pub struct Percentage(f64);

float_identity!(Percentage);

impl Percentage {
    pub fn new(percent: f64) -> Self {
        Self(canonical(percent))
    }

    /// The value as written, e.g. 50 for `50%`.
    pub fn percent(self) -> f64 {
        self.0
    }

    /// The fraction it represents, e.g. 0.5 for `50%`.
    pub fn as_real(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", format_real(self.0))
    }
}

impl FromStr for Percentage {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Percentage) {
            return Err(invalid("percentage", s));
        }
        parse_real(&s[..s.len() - 1])
            .map(Self::new)
            .ok_or_else(|| invalid("percentage", s))
    }
}

// ==================== Probability ====================

/// A probability in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Probability(f64);

float_identity!(Probability);

impl Probability {
    pub const NEVER: Probability = Probability(0.0);
    pub const ALWAYS: Probability = Probability(1.0);

    /// Returns `None` outside `[0, 1]`.
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then(|| Self(canonical(value)))
    }

    /// A uniformly distributed random probability.
    pub fn random() -> Self {
        Self(rand::random::<f64>())
    }

    pub fn as_real(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1.0 {
            return f.write_str("1.");
        }
        let text = format!("{}", self.0);
        match text.strip_prefix('0') {
            Some("") => f.write_str(".0"),
            Some(fraction) => f.write_str(fraction),
            None => f.write_str(&text),
        }
    }
}

impl FromStr for Probability {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Probability) {
            return Err(invalid("probability", s));
        }
        let value = if s == "1." {
            Some(1.0)
        } else {
            format!("0{}", s).parse::<f64>().ok()
        };
        value
            .and_then(Self::new)
            .ok_or_else(|| invalid("probability", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Real formatting tests ====================

    #[test]
    fn test_format_real_specials() {
        assert_eq!(format_real(0.0), "0");
        assert_eq!(format_real(-0.0), "0");
        assert_eq!(format_real(f64::INFINITY), "+∞");
        assert_eq!(format_real(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_real(f64::NAN), "undefined");
    }

    #[test]
    fn test_format_real_constants() {
        assert_eq!(format_real(PI), "π");
        assert_eq!(format_real(-E), "-e");
        assert_eq!(format_real(PHI), "φ");
        assert_eq!(format_real(TAU), "τ");
    }

    #[test]
    fn test_format_real_integers_are_bare() {
        assert_eq!(format_real(5.0), "5");
        assert_eq!(format_real(-42.0), "-42");
        assert_eq!(format_real(1.5), "1.5");
    }

    #[test]
    fn test_format_real_scientific() {
        assert_eq!(format_real(1.23456789e-10), "1.23456789E-10");
        assert_eq!(format_real(1e21), "1E21");
        assert_eq!(format_real(0.0001), "0.0001");
    }

    #[test]
    fn test_parse_real_round_trips_formatting() {
        for value in [0.5, -3.25, 1.23456789e-10, 6.02e23, PI, -TAU] {
            let text = format_real(value);
            assert_eq!(parse_real(&text), Some(value), "{}", text);
        }
    }

    // ==================== Number tests ====================

    #[test]
    fn test_number_rectangular() {
        let number: Number = "(3, 4i)".parse().unwrap();
        assert_eq!(number.real_part(), 3.0);
        assert_eq!(number.imaginary_part(), 4.0);
        assert_eq!(number.magnitude(), 5.0);
        assert_eq!(number.to_string(), "(3, 4i)");
    }

    #[test]
    fn test_number_polar_normalizes() {
        let number: Number = "(2 e^~πi)".parse().unwrap();
        assert_eq!(number, Number::real(-2.0));
        assert_eq!(number.to_string(), "-2");
    }

    #[test]
    fn test_number_imaginary_forms() {
        assert_eq!("i".parse::<Number>().unwrap(), Number::imaginary(1.0));
        assert_eq!("-i".parse::<Number>().unwrap().to_string(), "-i");
        assert_eq!("4i".parse::<Number>().unwrap().to_string(), "4i");
        assert_eq!("πi".parse::<Number>().unwrap().to_string(), "πi");
    }

    #[test]
    fn test_number_specials() {
        assert!("undefined".parse::<Number>().unwrap().is_undefined());
        assert_eq!("undefined".parse::<Number>().unwrap(), Number::undefined());
        assert!("infinity".parse::<Number>().unwrap().is_infinite());
        assert_eq!("-∞".parse::<Number>().unwrap().to_string(), "-∞");
    }

    #[test]
    fn test_number_as_integer() {
        assert_eq!(Number::real(5.0).as_integer(), Some(5));
        assert_eq!(Number::real(5.5).as_integer(), None);
        assert_eq!(Number::complex(5.0, 1.0).as_integer(), None);
    }

    #[test]
    fn test_number_rejects_other_shapes() {
        assert!("~π".parse::<Number>().is_err());
        assert!("5 ".parse::<Number>().is_err());
    }

    // ==================== Angle tests ====================

    #[test]
    fn test_angles() {
        assert_eq!("~0".parse::<Angle>().unwrap(), Angle::ZERO);
        assert_eq!("~π".parse::<Angle>().unwrap(), Angle::PI);
        assert_eq!("~pi".parse::<Angle>().unwrap().to_string(), "~π");
        let tiny: Angle = "~1.23456789E-10".parse().unwrap();
        assert_eq!(tiny.radians(), 1.23456789e-10);
        assert_eq!(tiny.to_string(), "~1.23456789E-10");
    }

    // ==================== Percentage and probability tests ====================

    #[test]
    fn test_percentage() {
        let percentage: Percentage = "50%".parse().unwrap();
        assert_eq!(percentage.as_real(), 0.5);
        assert_eq!(percentage.to_string(), "50%");
    }

    #[test]
    fn test_probability() {
        let probability: Probability = ".75".parse().unwrap();
        assert_eq!(probability.as_real(), 0.75);
        assert_eq!(probability.to_string(), ".75");
        assert_eq!(Probability::ALWAYS.to_string(), "1.");
        assert_eq!(Probability::NEVER.to_string(), ".0");
        assert_eq!("1.".parse::<Probability>().unwrap(), Probability::ALWAYS);
    }

    #[test]
    fn test_probability_bounds() {
        assert!(Probability::new(1.5).is_none());
        assert!(Probability::new(-0.1).is_none());
        let random = Probability::random();
        assert!((0.0..=1.0).contains(&random.as_real()));
    }

    // ==================== Identity tests ====================

    #[test]
    fn test_float_identity_is_total() {
        assert_eq!(Real::new(-0.0), Real::new(0.0));
        assert_eq!(Real::new(f64::NAN), Real::new(f64::NAN));
        assert!(Real::new(1.0) < Real::new(2.0));
        assert!(Real::new(f64::NEG_INFINITY) < Real::new(-1e300));
    }
}
