//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// Matches any element name or any key value.
pub const WILDCARD: &str = "*";

// A single element of a gNMI path, optionally qualified by list keys.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub struct PathElem {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub key: BTreeMap<String, String>,
}

// An absolute gNMI path.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub struct Path {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
    pub elem: Vec<PathElem>,
}

// ===== impl PathElem =====

impl PathElem {
    pub fn new(name: impl Into<String>) -> PathElem {
        PathElem {
            name: name.into(),
            key: Default::default(),
        }
    }

    #[must_use]
    pub fn with_key(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> PathElem {
        self.key.insert(key.into(), value.into());
        self
    }

    pub fn has_wildcards(&self) -> bool {
        self.name == WILDCARD || self.key.values().any(|v| v == WILDCARD)
    }

    // Returns whether this (possibly wildcarded) element matches the given
    // concrete element. Keys missing from the pattern match any value.
    pub fn matches(&self, concrete: &PathElem) -> bool {
        if self.name != WILDCARD && self.name != concrete.name {
            return false;
        }
        self.key.iter().all(|(key, value)| {
            value == WILDCARD
                || concrete.key.get(key).is_some_and(|v| v == value)
        })
    }
}

impl std::fmt::Display for PathElem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for (key, value) in &self.key {
            write!(f, "[{}={}]", key, escape_key_value(value))?;
        }
        Ok(())
    }
}

// ===== impl Path =====

impl Path {
    pub fn root() -> Path {
        Path::default()
    }

    pub fn new(elem: Vec<PathElem>) -> Path {
        Path {
            origin: Default::default(),
            elem,
        }
    }

    pub fn len(&self) -> usize {
        self.elem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elem.is_empty()
    }

    // Returns a new path with the given element appended.
    #[must_use]
    pub fn child(&self, elem: PathElem) -> Path {
        let mut path = self.clone();
        path.elem.push(elem);
        path
    }

    // Returns a new path with the given unkeyed elements appended.
    #[must_use]
    pub fn extend(&self, names: &[&str]) -> Path {
        let mut path = self.clone();
        path.elem.extend(names.iter().map(|name| PathElem::new(*name)));
        path
    }

    // Returns the first `len` elements of this path.
    #[must_use]
    pub fn prefix(&self, len: usize) -> Path {
        Path {
            origin: self.origin.clone(),
            elem: self.elem[..len.min(self.elem.len())].to_vec(),
        }
    }

    pub fn has_wildcards(&self) -> bool {
        self.elem.iter().any(PathElem::has_wildcards)
    }

    // Returns whether this query path is a prefix pattern of the given
    // concrete path.
    pub fn matches(&self, concrete: &Path) -> bool {
        if !self.origin.is_empty()
            && !concrete.origin.is_empty()
            && self.origin != concrete.origin
        {
            return false;
        }
        self.elem.len() <= concrete.elem.len()
            && self
                .elem
                .iter()
                .zip(concrete.elem.iter())
                .all(|(pattern, elem)| pattern.matches(elem))
    }

    // Returns the schema path of this data path, i.e. the path with all list
    // keys removed.
    pub fn schema_path(&self) -> String {
        format!("/{}", self.elem.iter().map(|elem| &elem.name).join("/"))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.origin.is_empty() {
            write!(f, "{}:", self.origin)?;
        }
        if self.elem.is_empty() {
            return write!(f, "/");
        }
        for elem in &self.elem {
            write!(f, "/{elem}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Path, Error> {
        let err = |reason| Error::PathParse(s.to_owned(), reason);

        // Split off the origin, if any.
        let (origin, rest) = match s.find(":/") {
            Some(pos) if !s[..pos].contains('/') => {
                (s[..pos].to_owned(), &s[pos + 1..])
            }
            _ => (String::new(), s),
        };
        let Some(rest) = rest.strip_prefix('/') else {
            return Err(err("path must be absolute"));
        };

        let mut elem = vec![];
        let mut chars = rest.chars().peekable();
        while chars.peek().is_some() {
            // Element name.
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '/' || c == '[' {
                    break;
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(err("empty path element"));
            }
            let mut pelem = PathElem::new(name);

            // List keys.
            while chars.peek() == Some(&'[') {
                chars.next();
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('=') => break,
                        Some(']') | None => {
                            return Err(err("missing '=' in list key"));
                        }
                        Some(c) => key.push(c),
                    }
                }
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('\\') => match chars.next() {
                            Some(c) => value.push(c),
                            None => return Err(err("dangling escape")),
                        },
                        Some(']') => break,
                        Some(c) => value.push(c),
                        None => return Err(err("unterminated list key")),
                    }
                }
                if key.is_empty() {
                    return Err(err("empty list key name"));
                }
                pelem.key.insert(key, value);
            }

            match chars.next() {
                Some('/') | None => (),
                Some(_) => return Err(err("unexpected character after key")),
            }
            elem.push(pelem);
        }

        Ok(Path { origin, elem })
    }
}

// ===== helper functions =====

fn escape_key_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == ']' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
