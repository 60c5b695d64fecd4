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

//! URI-shaped resources written between angle brackets.

use std::fmt;
use std::str::FromStr;

use crate::error::BaliError;
use crate::lex::{scan_exact, TokenKind};

/// A resource such as `<https://bali-nebula.net/types?x=1#top>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resource {
    scheme: String,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Resource {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// The text between the angle brackets.
    pub fn uri(&self) -> String {
        let mut uri = format!("{}:", self.scheme);
        if let Some(authority) = &self.authority {
            uri.push_str("//");
            uri.push_str(authority);
        }
        uri.push_str(&self.path);
        if let Some(query) = &self.query {
            uri.push('?');
            uri.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            uri.push('#');
            uri.push_str(fragment);
        }
        uri
    }
}

fn split_off<'a>(text: &mut &'a str, marker: char) -> Option<&'a str> {
    let (head, tail) = text.split_once(marker)?;
    *text = head;
    Some(tail)
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.uri())
    }
}

impl FromStr for Resource {
    type Err = BaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !scan_exact(s, TokenKind::Resource) {
            return Err(BaliError::syntax(format!("{:?} is not a valid resource", s), 0));
        }
        let uri = &s[1..s.len() - 1];
        let (scheme, mut rest) = uri
            .split_once(':')
            .ok_or_else(|| BaliError::syntax(format!("{:?} has no scheme", s), 0))?;
        let fragment = split_off(&mut rest, '#').map(str::to_string);
        let query = split_off(&mut rest, '?').map(str::to_string);
        let (authority, path) = match rest.strip_prefix("//") {
            Some(tail) => {
                let end = tail.find('/').unwrap_or(tail.len());
                (Some(tail[..end].to_string()), tail[end..].to_string())
            }
            None => (None, rest.to_string()),
        };
        Ok(Resource {
            scheme: scheme.to_string(),
            authority,
            path,
            query,
            fragment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_resource() {
        let text = "<https://bali-nebula.net/types/Number?version=1#top>";
        let resource: Resource = text.parse().unwrap();
        assert_eq!(resource.scheme(), "https");
        assert_eq!(resource.authority(), Some("bali-nebula.net"));
        assert_eq!(resource.path(), "/types/Number");
        assert_eq!(resource.query(), Some("version=1"));
        assert_eq!(resource.fragment(), Some("top"));
        assert_eq!(resource.to_string(), text);
    }

    #[test]
    fn test_resource_without_authority() {
        let resource: Resource = "<mailto:someone>".parse().unwrap();
        assert_eq!(resource.authority(), None);
        assert_eq!(resource.path(), "someone");
        assert_eq!(resource.to_string(), "<mailto:someone>");
    }

    #[test]
    fn test_rejects_moment_shape() {
        assert!("<2009-04>".parse::<Resource>().is_err());
    }
}
