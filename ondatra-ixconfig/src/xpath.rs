//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Unmodelled;

// Absolute IxNetwork XPath, e.g. `/topology[1]/deviceGroup[1]`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
#[serde(transparent)]
pub struct XPath(String);

// Config node whose XPath can be recomputed from its position in the config
// tree. Passing `None` clears the XPaths of the whole subtree.
pub(crate) trait XPathNode {
    fn set_xpaths(&mut self, xpath: Option<XPath>);
}

// ===== impl XPath =====

impl XPath {
    pub fn new(xpath: impl Into<String>) -> XPath {
        XPath(xpath.into())
    }

    pub fn root() -> XPath {
        XPath("/".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // XPath of the element at `index` (0-based) of a child list. IxNetwork
    // list indexes are 1-based.
    pub fn list_elem(&self, name: &str, index: usize) -> XPath {
        XPath(format!("{}/{}[{}]", self.prefix(), name, index + 1))
    }

    // XPath of a child object.
    pub fn child(&self, name: &str) -> XPath {
        XPath(format!("{}/{}", self.prefix(), name))
    }

    // XPath of the multivalue holding the given attribute of the node at this
    // XPath.
    pub fn multivalue(&self, attr: &str) -> XPath {
        XPath(format!("/multivalue[@source = '{} {}']", self.0, attr))
    }

    fn prefix(&self) -> &str {
        self.0.strip_suffix('/').unwrap_or(&self.0)
    }
}

impl std::fmt::Display for XPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== helper functions =====

pub(crate) fn set_list_xpaths<T: XPathNode>(
    list: &mut [T],
    parent: Option<&XPath>,
    name: &str,
) {
    for (index, node) in list.iter_mut().enumerate() {
        node.set_xpaths(parent.map(|parent| parent.list_elem(name, index)));
    }
}

// Clears the XPaths found anywhere in the unmodelled part of a node.
pub(crate) fn clear_unmodelled_xpaths(unmodelled: &mut Unmodelled) {
    unmodelled.values_mut().for_each(clear_value_xpaths);
}

fn clear_value_xpaths(value: &mut Value) {
    match value {
        Value::Object(object) => {
            object.remove("xpath");
            object.values_mut().for_each(clear_value_xpaths);
        }
        Value::Array(values) => values.iter_mut().for_each(clear_value_xpaths),
        _ => (),
    }
}
