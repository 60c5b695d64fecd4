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

//! Durations and moments, both counted in milliseconds.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::BaliError;
use crate::lex::{scan_exact, TokenKind};

pub const MILLISECONDS_PER_SECOND: i64 = 1000;
pub const MILLISECONDS_PER_MINUTE: i64 = MILLISECONDS_PER_SECOND * 60;
pub const MILLISECONDS_PER_HOUR: i64 = MILLISECONDS_PER_MINUTE * 60;
pub const MILLISECONDS_PER_DAY: i64 = MILLISECONDS_PER_HOUR * 24;
pub const MILLISECONDS_PER_WEEK: i64 = MILLISECONDS_PER_DAY * 7;
/// Average Gregorian year, 365.2425 days.
pub const MILLISECONDS_PER_YEAR: i64 = 31_556_952_000;
/// Average month, an exact twelfth of the average year.
pub const MILLISECONDS_PER_MONTH: i64 = MILLISECONDS_PER_YEAR / 12;

fn invalid(kind: &str, text: &str) -> BaliError {
    BaliError::syntax(format!("{:?} is not a valid {}", text, kind), 0)
}

// ==================== Duration ====================

/// A signed span of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Duration(i64);

impl Duration {
    pub const fn from_millis(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn as_seconds(self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_SECOND as f64
    }

    pub fn as_minutes(self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_MINUTE as f64
    }

    pub fn as_hours(self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_HOUR as f64
    }

    pub fn as_days(self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_DAY as f64
    }

    pub fn as_weeks(self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_WEEK as f64
    }

    pub fn as_months(self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_MONTH as f64
    }

    pub fn as_years(self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_YEAR as f64
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let mut rest = self.0.unsigned_abs();
        let unit = |ms: i64| ms as u64;
        if rest % unit(MILLISECONDS_PER_WEEK) == 0 {
            return write!(f, "~{}P{}W", sign, rest / unit(MILLISECONDS_PER_WEEK));
        }
        let mut take = |ms: i64| {
            let count = rest / unit(ms);
            rest %= unit(ms);
            count
        };
        let years = take(MILLISECONDS_PER_YEAR);
        let months = take(MILLISECONDS_PER_MONTH);
        let days = take(MILLISECONDS_PER_DAY);
        let hours = take(MILLISECONDS_PER_HOUR);
        let minutes = take(MILLISECONDS_PER_MINUTE);
        let seconds = take(MILLISECONDS_PER_SECOND);
        let millis = rest;

        write!(f, "~{}P", sign)?;
        for (count, designator) in [(years, 'Y'), (months, 'M'), (days, 'D')] {
            if count > 0 {
                write!(f, "{}{}", count, designator)?;
            }
        }
        if hours + minutes + seconds + millis > 0 {
            f.write_str("T")?;
            for (count, designator) in [(hours, 'H'), (minutes, 'M')] {
                if count > 0 {
                    write!(f, "{}{}", count, designator)?;
                }
            }
            if millis > 0 {
                write!(f, "{}.{:03}S", seconds, millis)?;
            } else if seconds > 0 {
                write!(f, "{}S", seconds)?;
            }
        }
        Ok(())
    }
}

/// Milliseconds in `span` units of `unit_ms`, where `span` may carry a
/// decimal fraction.
fn span_millis(span: &str, unit_ms: i64) -> Option<i64> {
    let (whole, fraction) = span.split_once('.').unwrap_or((span, ""));
    let mut total = whole.parse::<i64>().ok()?.checked_mul(unit_ms)?;
    if !fraction.is_empty() {
        let digits = fraction.parse::<i128>().ok()?;
        let scale = 10i128.checked_pow(fraction.len() as u32)?;
        let part = (digits * unit_ms as i128 + scale / 2) / scale;
        total = total.checked_add(i64::try_from(part).ok()?)?;
    }
    Some(total)
}

fn decode_duration(s: &str) -> Option<Duration> {
    let body = s.strip_prefix('~')?;
    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };
    let body = body.strip_prefix('P')?;
    let mut total: i64 = 0;
    let mut in_time = false;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        let unit = match (c, in_time) {
            ('T', _) => {
                in_time = true;
                start = i + 1;
                continue;
            }
            (c, _) if c.is_ascii_digit() || c == '.' => continue,
            ('W', false) => MILLISECONDS_PER_WEEK,
            ('Y', false) => MILLISECONDS_PER_YEAR,
            ('M', false) => MILLISECONDS_PER_MONTH,
            ('D', false) => MILLISECONDS_PER_DAY,
            ('H', true) => MILLISECONDS_PER_HOUR,
            ('M', true) => MILLISECONDS_PER_MINUTE,
            ('S', true) => MILLISECONDS_PER_SECOND,
            _ => return None,
        };
        total = total.checked_add(span_millis(&body[start..i], unit)?)?;
        start = i + 1;
    }
    Some(Duration(if negative { -total } else { total }))
}

impl FromStr for Duration {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Duration) {
            return Err(invalid("duration", s));
        }
        decode_duration(s).ok_or_else(|| invalid("duration", s))
    }
}

// ==================== Moment ====================

/// A point in time, in milliseconds since the UNIX epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Moment(i64);

impl Moment {
    pub const fn from_millis(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    /// The current moment, truncated to milliseconds.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Calendar date and time in UTC, when representable.
    pub fn to_datetime(self) -> Option<NaiveDateTime> {
        chrono::DateTime::from_timestamp_millis(self.0).map(|dt| dt.naive_utc())
    }

    pub fn year(self) -> Option<i32> {
        self.to_datetime().map(|dt| dt.year())
    }

    pub fn month(self) -> Option<u32> {
        self.to_datetime().map(|dt| dt.month())
    }

    pub fn day(self) -> Option<u32> {
        self.to_datetime().map(|dt| dt.day())
    }

    /// Time from `self` to `later`.
    pub fn duration_to(self, later: Moment) -> Duration {
        Duration(later.0 - self.0)
    }

    pub fn later(self, duration: Duration) -> Option<Moment> {
        self.0.checked_add(duration.0).map(Moment)
    }

    pub fn earlier(self, duration: Duration) -> Option<Moment> {
        self.0.checked_sub(duration.0).map(Moment)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.to_datetime().ok_or(fmt::Error)?;
        let millis = dt.nanosecond() / 1_000_000;
        let fields = [dt.month(), dt.day(), dt.hour(), dt.minute(), dt.second(), millis];
        let defaults = [1, 1, 0, 0, 0, 0];
        let precision = fields
            .iter()
            .zip(defaults)
            .rposition(|(field, default)| *field != default)
            .map_or(0, |i| i + 1);

        write!(f, "<{}", dt.year())?;
        for (i, field) in fields.iter().take(precision.min(5)).enumerate() {
            let separator = ["-", "-", "T", ":", ":"][i];
            write!(f, "{}{:02}", separator, field)?;
        }
        if precision == 6 {
            write!(f, ".{:03}", millis)?;
        }
        f.write_str(">")
    }
}

fn decode_moment(s: &str) -> Option<Moment> {
    let body = s.strip_prefix('<')?.strip_suffix('>')?;
    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };
    let year_end = body.find(|c: char| !c.is_ascii_digit()).unwrap_or(body.len());
    let year: i32 = body[..year_end].parse().ok()?;
    let year = if negative { -year } else { year };
    let rest = &body[year_end..];

    // Fields after the year are fixed width: -MM-DDTHH:MM:SS
    let field = |at: usize| -> Option<u32> { rest.get(at + 1..at + 3)?.parse().ok() };
    let count = rest.len().min(15) / 3;
    let mut values = [1u32, 1, 0, 0, 0];
    for (i, value) in values.iter_mut().enumerate().take(count) {
        *value = field(i * 3)?;
    }
    let millis = match rest.get(15..) {
        Some(fraction) if !fraction.is_empty() => {
            let digits = fraction.strip_prefix('.')?;
            let padded = format!("{:0<3}", &digits[..digits.len().min(3)]);
            padded.parse::<u32>().ok()?
        }
        _ => 0,
    };
    let [month, day, hour, minute, second] = values;
    let dt = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, millis)?;
    Some(Moment(dt.and_utc().timestamp_millis()))
}

impl FromStr for Moment {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Moment) {
            return Err(invalid("moment", s));
        }
        decode_moment(s).ok_or_else(|| invalid("moment", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATIONS: &[(&str, i64)] = &[
        ("~P0W", 0),
        ("~-P13W", -7862400000),
        ("~P12Y3M4DT5H6M7.890S", 386936629890),
        ("~-P12Y3M4D", -386918262000),
        ("~P3M4DT5H6M", 8253198000),
        ("~-PT6M7.890S", -367890),
        ("~P12YT6M7.890S", 378683791890),
        ("~-P12Y4DT5H6M7S", -379047391000),
    ];

    const MOMENTS: &[(&str, i64)] = &[
        ("<1776>", -6122044800000),
        ("<1970>", 0),
        ("<2009-04>", 1238544000000),
        ("<1962-04-25>", -242611200000),
        ("<-1-02-03T04:05:06.789>", -62195889293211),
    ];

    // ==================== Duration tests ====================

    #[test]
    fn test_duration_parse() {
        for (text, millis) in DURATIONS {
            let duration: Duration = text.parse().unwrap();
            assert_eq!(duration.as_millis(), *millis, "{}", text);
        }
    }

    #[test]
    fn test_duration_format() {
        for (text, millis) in DURATIONS {
            assert_eq!(Duration::from_millis(*millis).to_string(), *text);
        }
    }

    #[test]
    fn test_duration_fractional_spans() {
        let duration: Duration = "~PT0.5S".parse().unwrap();
        assert_eq!(duration.as_millis(), 500);
        assert_eq!(duration.to_string(), "~PT0.500S");
        let duration: Duration = "~P1.5W".parse().unwrap();
        assert_eq!(duration.as_millis(), MILLISECONDS_PER_WEEK * 3 / 2);
    }

    #[test]
    fn test_duration_conversions() {
        let week = Duration::from_millis(MILLISECONDS_PER_WEEK);
        assert_eq!(week.as_days(), 7.0);
        assert_eq!(week.as_weeks(), 1.0);
        assert_eq!(Duration::from_millis(MILLISECONDS_PER_YEAR).as_months(), 12.0);
    }

    #[test]
    fn test_duration_rejects_garbage() {
        assert!("~P".parse::<Duration>().is_err());
        assert!("P1W".parse::<Duration>().is_err());
    }

    // ==================== Moment tests ====================

    #[test]
    fn test_moment_parse() {
        for (text, millis) in MOMENTS {
            let moment: Moment = text.parse().unwrap();
            assert_eq!(moment.as_millis(), *millis, "{}", text);
        }
    }

    #[test]
    fn test_moment_format() {
        for (text, millis) in MOMENTS {
            assert_eq!(Moment::from_millis(*millis).to_string(), *text);
        }
    }

    #[test]
    fn test_moment_format_keeps_inner_defaults() {
        let moment: Moment = "<2009-04-01T05>".parse().unwrap();
        assert_eq!(moment.to_string(), "<2009-04-01T05>");
        let moment: Moment = "<1009-08-07T06:05:04.321>".parse().unwrap();
        assert_eq!(moment.to_string(), "<1009-08-07T06:05:04.321>");
    }

    #[test]
    fn test_moment_rejects_invalid_dates() {
        assert!("<2009-02-30>".parse::<Moment>().is_err());
        assert!("<2009-13>".parse::<Moment>().is_err());
    }

    #[test]
    fn test_moment_arithmetic() {
        let start = Moment::from_millis(0);
        let day = Duration::from_millis(MILLISECONDS_PER_DAY);
        let next = start.later(day).unwrap();
        assert_eq!(next.to_string(), "<1970-01-02>");
        assert_eq!(start.duration_to(next), day);
        assert_eq!(next.earlier(day), Some(start));
        assert_eq!(next.year(), Some(1970));
        assert_eq!(next.day(), Some(2));
    }
}
