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

//! Components, contexts and bracketed collections.

use crate::ast::{Collection, Component, Context, Entity};
use crate::collections::{Catalog, List};
use crate::error::BaliResult;
use crate::lex::TokenKind;
use crate::value::{Extent, Range, Symbol};

use super::Parser;

impl Parser<'_> {
    /// `entity [context] [annotation]`
    pub(super) fn parse_component(&mut self) -> BaliResult<Option<Component>> {
        self.nested(|p| {
            p.within("$component", |p| {
                let mut component = match p.parse_literal()? {
                    Some(component) => component,
                    None => return Ok(None),
                };
                component.annotation = p.parse_annotation();
                Ok(Some(component))
            })
        })
    }

    /// `entity [context]`: a component as it appears inside an expression,
    /// where a trailing annotation belongs to the enclosing statement.
    pub(super) fn parse_literal(&mut self) -> BaliResult<Option<Component>> {
        let entity = match self.parse_entity()? {
            Some(entity) => entity,
            None => return Ok(None),
        };
        let mut component = Component::new(entity);
        component.context = self.parse_context()?;
        Ok(Some(component))
    }

    /// `element | string | collection | procedure`
    fn parse_entity(&mut self) -> BaliResult<Option<Entity>> {
        if let Some(element) = self.parse_element()? {
            return Ok(Some(Entity::Element(element)));
        }
        if let Some(string) = self.parse_string()? {
            return Ok(Some(Entity::String(string)));
        }
        if let Some(collection) = self.parse_collection()? {
            return Ok(Some(Entity::Collection(collection)));
        }
        Ok(self.parse_procedure()?.map(Entity::Procedure))
    }

    /// `"(" parameters ")"`
    ///
    /// A parenthesis only opens a context when a `$name:` follows it, so
    /// the check rewinds before committing.
    fn parse_context(&mut self) -> BaliResult<Option<Context>> {
        let mark = self.stream.mark();
        let opens = self.accept_delimiter("(") && {
            self.accept_kind(TokenKind::Eol);
            self.accept_kind(TokenKind::Symbol) && self.accept_delimiter(":")
        };
        self.stream.reset(mark);
        if !opens {
            return Ok(None);
        }
        self.within("$context", |p| {
            p.expect_delimiter("(", "$context")?;
            let parameters = p.within("$parameters", |p| {
                p.parse_entries(")", "$parameter", Self::parse_parameter)
            })?;
            Ok(Some(Context::new(parameters.into_iter().collect())))
        })
    }

    /// `SYMBOL ":" component`
    fn parse_parameter(&mut self) -> BaliResult<Option<(Symbol, Component)>> {
        let token = self.next_token();
        if token.kind != TokenKind::Symbol {
            self.stream.backup();
            return Ok(None);
        }
        let name = token
            .text
            .parse::<Symbol>()
            .map_err(|err| Self::at(&token, err))?;
        self.within("$parameter", |p| {
            p.expect_delimiter(":", "$parameter")?;
            let value = p.parse_component()?;
            let value = p.require(value, "$component")?;
            Ok(Some((name, value)))
        })
    }

    /// `"[" (range | catalog | list) "]"`
    fn parse_collection(&mut self) -> BaliResult<Option<Collection>> {
        if !self.accept_delimiter("[") {
            return Ok(None);
        }
        self.within("$collection", |p| {
            if let Some(range) = p.parse_range()? {
                p.expect_delimiter("]", "$collection")?;
                return Ok(Some(Collection::Range(range)));
            }
            if p.accept_delimiter(":") {
                p.expect_delimiter("]", "$catalog")?;
                return Ok(Some(Collection::Catalog(Catalog::new())));
            }
            if p.starts_catalog()? {
                let associations = p.within("$catalog", |p| {
                    p.parse_entries("]", "$association", Self::parse_association)
                })?;
                return Ok(Some(Collection::Catalog(associations.into_iter().collect())));
            }
            let components = p.within("$list", |p| p.parse_entries("]", "$component", Self::parse_component))?;
            Ok(Some(Collection::List(List::from(components))))
        })
    }

    /// `[endpoint] (".." | "..<" | "<.." | "<..<") [endpoint]`
    ///
    /// Only commits once the range delimiter has been read.
    fn parse_range(&mut self) -> BaliResult<Option<Range>> {
        let mark = self.stream.mark();
        let first = self.parse_endpoint()?;
        let token = self.next_token();
        let extent = match token.kind {
            TokenKind::Delimiter => Extent::from_delimiter(&token.text),
            _ => None,
        };
        let extent = match extent {
            Some(extent) => extent,
            None => {
                self.stream.reset(mark);
                return Ok(None);
            }
        };
        self.within("$range", |p| {
            let last = p.parse_endpoint()?;
            Range::new(first, extent, last)
                .map(Some)
                .map_err(|err| Self::at(&token, err))
        })
    }

    /// True when the collection body opens with `key ":"`.
    fn starts_catalog(&mut self) -> BaliResult<bool> {
        let mark = self.stream.mark();
        self.accept_kind(TokenKind::Eol);
        let key = self.parse_key()?;
        let colon = self.accept_delimiter(":");
        self.stream.reset(mark);
        Ok(key.is_some() && colon)
    }

    /// `element | string`
    fn parse_key(&mut self) -> BaliResult<Option<Component>> {
        if let Some(element) = self.parse_element()? {
            return Ok(Some(Component::new(element)));
        }
        Ok(self.parse_string()?.map(Component::new))
    }

    /// `key ":" component`
    fn parse_association(&mut self) -> BaliResult<Option<(Component, Component)>> {
        let key = match self.parse_key()? {
            Some(key) => key,
            None => return Ok(None),
        };
        self.within("$association", |p| {
            p.expect_delimiter(":", "$association")?;
            let value = p.parse_component()?;
            let value = p.require(value, "$component")?;
            Ok(Some((key, value)))
        })
    }

    /// Entries up to and including `close`, written either inline and
    /// separated by commas, or one per line after an opening end of line.
    fn parse_entries<T>(
        &mut self,
        close: &str,
        production: &'static str,
        mut entry: impl FnMut(&mut Self) -> BaliResult<Option<T>>,
    ) -> BaliResult<Vec<T>> {
        let mut entries = Vec::new();
        if self.accept_kind(TokenKind::Eol) {
            while !self.accept_delimiter(close) {
                let found = entry(self)?;
                entries.push(self.require(found, production)?);
                self.expect_kind(TokenKind::Eol, "$EOL")?;
            }
            return Ok(entries);
        }
        if self.accept_delimiter(close) {
            return Ok(entries);
        }
        loop {
            let found = entry(self)?;
            entries.push(self.require(found, production)?);
            if !self.accept_delimiter(",") {
                break;
            }
        }
        self.expect_delimiter(close, production)?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Annotation, Collection, Entity};
    use crate::error::BaliErrorKind;
    use crate::parser::parse;
    use crate::value::{Element, Extent, Scalar};

    fn collection(source: &str) -> Collection {
        match parse(source).unwrap().entity {
            Entity::Collection(collection) => collection,
            other => panic!("not a collection: {:?}", other),
        }
    }

    // ==================== List tests ====================

    #[test]
    fn test_empty_list() {
        match collection("[ ]") {
            Collection::List(list) => assert!(list.is_empty()),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_inline_and_multiline_lists_agree() {
        assert_eq!(collection("[1, 2, 3]"), collection("[\n    1\n    2\n    3\n]"));
    }

    #[test]
    fn test_list_entry_with_note() {
        let Collection::List(list) = collection("[\n    1  ! first\n    2\n]") else {
            panic!("not a list");
        };
        assert_eq!(
            list.item(1).and_then(|c| c.annotation.clone()),
            Some(Annotation::Note("! first".to_string()))
        );
        assert_eq!(list.item(2).and_then(|c| c.annotation.clone()), None);
    }

    #[test]
    fn test_unclosed_list() {
        let err = parse("[1, 2").unwrap_err();
        assert_eq!(err.kind, BaliErrorKind::Syntax);
        assert_eq!(err.expected[..3], ["$component", "$list", "$collection"]);
    }

    // ==================== Catalog tests ====================

    #[test]
    fn test_empty_catalog() {
        match collection("[:]") {
            Collection::Catalog(catalog) => assert!(catalog.is_empty()),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_catalog_keeps_order_and_last_write() {
        let Collection::Catalog(catalog) = collection("[$b: 1, $a: 2, $b: 3]") else {
            panic!("not a catalog");
        };
        assert_eq!(catalog.len(), 2);
        let keys: Vec<String> = catalog.keys().map(|k| format!("{:?}", k.entity)).collect();
        assert!(keys[0].contains("\"b\""));
        let first = catalog.values().next().map(|c| c.entity.clone());
        assert!(matches!(first, Some(Entity::Element(Element::Number(_)))));
    }

    #[test]
    fn test_multiline_catalog() {
        let Collection::Catalog(catalog) = collection("[\n    \"x\": 1\n    \"y\": [2, 3]\n]") else {
            panic!("not a catalog");
        };
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_missing_value() {
        let err = parse("[$a: ]").unwrap_err();
        assert_eq!(err.expected[..2], ["$component", "$association"]);
    }

    // ==================== Range tests ====================

    #[test]
    fn test_integer_range() {
        let Collection::Range(range) = collection("[1..5]") else {
            panic!("not a range");
        };
        assert_eq!(range.extent(), Extent::Inclusive);
        assert_eq!(range.size(), Some(5));
        assert!(range.contains(&Scalar::Integer(3)));
        assert_eq!(range.index_of(&Scalar::Integer(3)), 3);
    }

    #[test]
    fn test_open_ended_ranges() {
        let Collection::Range(range) = collection("[..<10]") else {
            panic!("not a range");
        };
        assert_eq!(range.first(), None);
        assert_eq!(range.extent(), Extent::RightOpen);
        assert_eq!(range.last(), Some(&Scalar::Integer(10)));

        let Collection::Range(range) = collection("[\"a\"<..]") else {
            panic!("not a range");
        };
        assert_eq!(range.first(), Some(&Scalar::Rune('a')));
        assert_eq!(range.last(), None);
    }

    #[test]
    fn test_mismatched_range_endpoints() {
        let err = parse("[1..~π]").unwrap_err();
        assert_eq!(err.kind, BaliErrorKind::Range);
        assert_eq!(err.line, 1);
    }

    // ==================== Context tests ====================

    #[test]
    fn test_context_parameters() {
        let component = parse("[1, 2]($type: /bali/List/v1, $size: 2)").unwrap();
        assert!(component.parameter("type").is_some());
        assert!(component.parameter("size").is_some());
        assert!(component.parameter("missing").is_none());
    }

    #[test]
    fn test_multiline_context() {
        let component = parse("\"x\" (\n    $a: 1\n    $b: 2\n)\n").unwrap();
        let context = component.context.unwrap();
        assert_eq!(context.parameters.len(), 2);
    }

    #[test]
    fn test_component_note() {
        let component = parse("5  ! five\n").unwrap();
        assert_eq!(component.annotation, Some(Annotation::Note("! five".to_string())));
    }
}
