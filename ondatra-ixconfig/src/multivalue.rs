//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};

use crate::config::Unmodelled;
use crate::xpath::{XPath, clear_unmodelled_xpaths};

// Attribute value that may vary across the instances of a multiplied node.
#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Multivalue {
    pub xpath: Option<XPath>,
    pub single_value: Option<MultivalueSingleValue>,
    pub counter: Option<MultivalueCounter>,
    pub value_list: Option<MultivalueValueList>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

// Same value for every instance.
#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct MultivalueSingleValue {
    pub xpath: Option<XPath>,
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

// Value incremented by `step` for every instance, starting from `start`.
#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct MultivalueCounter {
    pub xpath: Option<XPath>,
    pub start: Option<String>,
    pub step: Option<String>,
    pub direction: Option<String>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

// Explicit value of every instance.
#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct MultivalueValueList {
    pub xpath: Option<XPath>,
    pub values: Vec<String>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

// ===== impl Multivalue =====

impl Multivalue {
    // Returns the single value, if that is how this multivalue is set.
    pub fn single(&self) -> Option<&str> {
        self.single_value.as_ref()?.value.as_deref()
    }

    fn set_xpaths(&mut self, xpath: Option<XPath>) {
        if let Some(single_value) = &mut self.single_value {
            single_value.xpath =
                xpath.as_ref().map(|xpath| xpath.child("singleValue"));
            if xpath.is_none() {
                clear_unmodelled_xpaths(&mut single_value.extra);
            }
        }
        if let Some(counter) = &mut self.counter {
            counter.xpath = xpath.as_ref().map(|xpath| xpath.child("counter"));
            if xpath.is_none() {
                clear_unmodelled_xpaths(&mut counter.extra);
            }
        }
        if let Some(value_list) = &mut self.value_list {
            value_list.xpath =
                xpath.as_ref().map(|xpath| xpath.child("valueList"));
            if xpath.is_none() {
                clear_unmodelled_xpaths(&mut value_list.extra);
            }
        }
        if xpath.is_none() {
            clear_unmodelled_xpaths(&mut self.extra);
        }
        self.xpath = xpath;
    }
}

// ===== global functions =====

pub fn multivalue_str(value: impl Into<String>) -> Option<Multivalue> {
    Some(Multivalue {
        single_value: Some(MultivalueSingleValue {
            value: Some(value.into()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn multivalue_u32(value: u32) -> Option<Multivalue> {
    multivalue_str(value.to_string())
}

pub fn multivalue_bool(value: bool) -> Option<Multivalue> {
    multivalue_str(value.to_string())
}

pub fn multivalue_true() -> Option<Multivalue> {
    multivalue_bool(true)
}

pub fn multivalue_false() -> Option<Multivalue> {
    multivalue_bool(false)
}

// Multivalue incrementing from `start` by `step`.
pub fn multivalue_str_inc_counter(
    start: impl Into<String>,
    step: impl Into<String>,
) -> Option<Multivalue> {
    Some(Multivalue {
        counter: Some(MultivalueCounter {
            start: Some(start.into()),
            step: Some(step.into()),
            direction: Some("increment".to_owned()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn multivalue_str_list<I>(values: I) -> Option<Multivalue>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Some(Multivalue {
        value_list: Some(MultivalueValueList {
            values: values.into_iter().map(Into::into).collect(),
            ..Default::default()
        }),
        ..Default::default()
    })
}

// Recomputes the XPaths of the multivalue holding attribute `attr` of the
// node at `owner`.
pub(crate) fn set_multivalue_xpaths(
    multivalue: &mut Option<Multivalue>,
    owner: Option<&XPath>,
    attr: &str,
) {
    if let Some(multivalue) = multivalue {
        multivalue.set_xpaths(owner.map(|owner| owner.multivalue(attr)));
    }
}
