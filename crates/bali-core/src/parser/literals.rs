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

//! Literal productions: elements, strings, range endpoints and
//! annotations. Each is a single token.

use std::str::FromStr;

use crate::ast::Annotation;
use crate::error::{BaliError, BaliResult};
use crate::lex::{Token, TokenKind};
use crate::value::{
    Angle, Binary, Duration, Element, Moment, Moniker, Narrative, Number, Pattern, Percentage,
    Probability, Quote, Real, Resource, Scalar, StringLiteral, Symbol, Tag, Version,
};

use super::Parser;

/// Decode the text of `token` into `T`, tagging failures with its position.
fn decode<T>(token: &Token) -> BaliResult<T>
where
    T: FromStr<Err = BaliError>,
{
    token.text.parse().map_err(|err| Parser::at(token, err))
}

/// A number token spelling a whole number without a fraction or exponent.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Parser<'_> {
    /// `ANGLE | BOOLEAN | DURATION | MOMENT | NUMBER | PATTERN | PERCENTAGE
    /// | PROBABILITY | RESOURCE | SYMBOL | TAG`
    pub(super) fn parse_element(&mut self) -> BaliResult<Option<Element>> {
        let token = self.next_token();
        let element = match token.kind {
            TokenKind::Angle => Element::Angle(decode::<Angle>(&token)?),
            TokenKind::Boolean => Element::Boolean(token.text == "true"),
            TokenKind::Duration => Element::Duration(decode::<Duration>(&token)?),
            TokenKind::Moment => Element::Moment(decode::<Moment>(&token)?),
            TokenKind::Number => Element::Number(decode::<Number>(&token)?),
            TokenKind::Pattern => Element::Pattern(decode::<Pattern>(&token)?),
            TokenKind::Percentage => Element::Percentage(decode::<Percentage>(&token)?),
            TokenKind::Probability => Element::Probability(decode::<Probability>(&token)?),
            TokenKind::Resource => Element::Resource(decode::<Resource>(&token)?),
            TokenKind::Symbol => Element::Symbol(decode::<Symbol>(&token)?),
            TokenKind::Tag => Element::Tag(decode::<Tag>(&token)?),
            _ => {
                self.stream.backup();
                return Ok(None);
            }
        };
        Ok(Some(element))
    }

    /// `BINARY | MONIKER | NARRATIVE | QUOTE | VERSION`
    pub(super) fn parse_string(&mut self) -> BaliResult<Option<StringLiteral>> {
        let token = self.next_token();
        let string = match token.kind {
            TokenKind::Binary => StringLiteral::Binary(decode::<Binary>(&token)?),
            TokenKind::Moniker => StringLiteral::Moniker(decode::<Moniker>(&token)?),
            TokenKind::Narrative => StringLiteral::Narrative(decode::<Narrative>(&token)?),
            TokenKind::Quote => StringLiteral::Quote(decode::<Quote>(&token)?),
            TokenKind::Version => StringLiteral::Version(decode::<Version>(&token)?),
            _ => {
                self.stream.backup();
                return Ok(None);
            }
        };
        Ok(Some(string))
    }

    /// A range endpoint. Number tokens become integers when they spell a
    /// whole number and reals otherwise; complex numbers are not endpoints.
    /// A quote holding exactly one character is a rune.
    pub(super) fn parse_endpoint(&mut self) -> BaliResult<Option<Scalar>> {
        let token = self.next_token();
        let scalar = match token.kind {
            TokenKind::Angle => Scalar::Angle(decode::<Angle>(&token)?),
            TokenKind::Binary => Scalar::Binary(decode::<Binary>(&token)?),
            TokenKind::Boolean => Scalar::Boolean(token.text == "true"),
            TokenKind::Duration => Scalar::Duration(decode::<Duration>(&token)?),
            TokenKind::Moment => Scalar::Moment(decode::<Moment>(&token)?),
            TokenKind::Moniker => Scalar::Moniker(decode::<Moniker>(&token)?),
            TokenKind::Pattern => Scalar::Pattern(decode::<Pattern>(&token)?),
            TokenKind::Percentage => Scalar::Percentage(decode::<Percentage>(&token)?),
            TokenKind::Probability => Scalar::Probability(decode::<Probability>(&token)?),
            TokenKind::Quote => {
                let quote = decode::<Quote>(&token)?;
                match quote.as_rune() {
                    Some(rune) => Scalar::Rune(rune),
                    None => Scalar::Quote(quote),
                }
            }
            TokenKind::Number if is_integer(&token.text) => match token.text.parse::<i64>() {
                Ok(integer) => Scalar::Integer(integer),
                Err(_) => Scalar::Real(decode::<Real>(&token)?),
            },
            TokenKind::Number => match token.text.parse::<Real>() {
                Ok(real) => Scalar::Real(real),
                Err(_) => {
                    self.stream.backup();
                    return Ok(None);
                }
            },
            TokenKind::Resource => Scalar::Resource(decode::<Resource>(&token)?),
            TokenKind::Symbol => Scalar::Symbol(decode::<Symbol>(&token)?),
            TokenKind::Tag => Scalar::Tag(decode::<Tag>(&token)?),
            TokenKind::Version => Scalar::Version(decode::<Version>(&token)?),
            _ => {
                self.stream.backup();
                return Ok(None);
            }
        };
        Ok(Some(scalar))
    }

    /// `NOTE | COMMENT`, kept verbatim.
    pub(super) fn parse_annotation(&mut self) -> Option<Annotation> {
        let token = self.next_token();
        match token.kind {
            TokenKind::Note => Some(Annotation::Note(token.text)),
            TokenKind::Comment => Some(Annotation::Comment(token.text)),
            _ => {
                self.stream.backup();
                None
            }
        }
    }

    /// `NOTE`
    pub(super) fn parse_note(&mut self) -> Option<Annotation> {
        let token = self.next_token();
        if token.kind == TokenKind::Note {
            return Some(Annotation::Note(token.text));
        }
        self.stream.backup();
        None
    }
}
