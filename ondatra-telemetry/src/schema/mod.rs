//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Typed OpenConfig schema nodes and their decoding from gNMI datapoints.

pub mod device;
pub mod lldp;
pub mod platform;

use std::collections::BTreeMap;
use std::fmt::Debug;

use ondatra_gnmi::{PathElem, TypedValue};

use crate::error::UnmarshalError;

pub use device::Device;
pub use lldp::{
    ChassisIdType, Lldp, LldpCounters, LldpInterface, LldpInterfaceCounters,
    LldpInterfaceNeighbor, PortIdType,
};
pub use platform::{
    AlarmSeverity, Component, ComponentOperStatus, ComponentSubcomponent,
    ComponentTemperature, ComponentTransceiver, ComponentTransceiverChannel,
    ComponentTransceiverChannelPower, TransceiverPresent,
};

// Schema container that can be rebuilt from the datapoints found below it.
pub trait SchemaNode:
    Clone + Debug + Default + PartialEq + Send + Sync + 'static
{
    // Name of the node, used in decoding errors.
    const NAME: &'static str;

    // Applies a single datapoint whose path is relative to this node. A
    // `None` value deletes the addressed subtree.
    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError>;
}

// Schema container that is an entry of a keyed list.
pub trait ListEntry: SchemaNode {
    const KEY: &'static str;

    type Key: Clone + Debug + Ord + Send + Sync;

    fn parse_key(value: &str) -> Result<Self::Key, UnmarshalError>;

    // Populates the key leaf of a freshly created entry.
    fn set_key(&mut self, key: &Self::Key);
}

// Scalar leaf value decodable from a gNMI typed value.
pub trait LeafValue: Clone + Debug + PartialEq + Send + Sync + 'static {
    fn decode(value: &TypedValue) -> Result<Self, UnmarshalError>;
}

// ===== impl LeafValue =====

macro_rules! impl_leaf_uint {
    ($($ty:ty),+) => {
        $(
            impl LeafValue for $ty {
                fn decode(value: &TypedValue) -> Result<Self, UnmarshalError> {
                    let out_of_range = |v: String| {
                        UnmarshalError::OutOfRange(v, stringify!($ty))
                    };
                    match value {
                        TypedValue::Uint(v) => {
                            <$ty>::try_from(*v)
                                .map_err(|_| out_of_range(v.to_string()))
                        }
                        TypedValue::Int(v) => {
                            <$ty>::try_from(*v)
                                .map_err(|_| out_of_range(v.to_string()))
                        }
                        _ => Err(type_mismatch("uint", value)),
                    }
                }
            }
        )+
    };
}

macro_rules! impl_leaf_int {
    ($($ty:ty),+) => {
        $(
            impl LeafValue for $ty {
                fn decode(value: &TypedValue) -> Result<Self, UnmarshalError> {
                    let out_of_range = |v: String| {
                        UnmarshalError::OutOfRange(v, stringify!($ty))
                    };
                    match value {
                        TypedValue::Int(v) => {
                            <$ty>::try_from(*v)
                                .map_err(|_| out_of_range(v.to_string()))
                        }
                        TypedValue::Uint(v) => {
                            <$ty>::try_from(*v)
                                .map_err(|_| out_of_range(v.to_string()))
                        }
                        _ => Err(type_mismatch("int", value)),
                    }
                }
            }
        )+
    };
}

impl_leaf_uint!(u8, u16, u32, u64);
impl_leaf_int!(i8, i16, i32, i64);

impl LeafValue for f64 {
    fn decode(value: &TypedValue) -> Result<Self, UnmarshalError> {
        match value {
            TypedValue::Double(v) => Ok(*v),
            TypedValue::Decimal { digits, precision } => {
                Ok(TypedValue::decimal_to_f64(*digits, *precision))
            }
            TypedValue::Int(v) => Ok(*v as f64),
            TypedValue::Uint(v) => Ok(*v as f64),
            _ => Err(type_mismatch("double", value)),
        }
    }
}

impl LeafValue for bool {
    fn decode(value: &TypedValue) -> Result<Self, UnmarshalError> {
        match value {
            TypedValue::Bool(v) => Ok(*v),
            _ => Err(type_mismatch("bool", value)),
        }
    }
}

impl LeafValue for String {
    fn decode(value: &TypedValue) -> Result<Self, UnmarshalError> {
        match value {
            TypedValue::String(v) | TypedValue::Ascii(v) => Ok(v.clone()),
            _ => Err(type_mismatch("string", value)),
        }
    }
}

impl<T: LeafValue> LeafValue for Vec<T> {
    fn decode(value: &TypedValue) -> Result<Self, UnmarshalError> {
        match value {
            TypedValue::LeafList(values) => {
                values.iter().map(T::decode).collect()
            }
            _ => Err(type_mismatch("leaf-list", value)),
        }
    }
}

// Declares an enumeration backed by YANG enum or identity names.
macro_rules! yang_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $yang:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[derive(serde::Deserialize, serde::Serialize)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn to_yang(&self) -> &'static str {
                match self {
                    $($name::$variant => $yang,)+
                }
            }

            pub fn try_from_yang(value: &str) -> Option<$name> {
                match value {
                    $($yang => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                write!(f, "{}", self.to_yang())
            }
        }

        impl $crate::schema::LeafValue for $name {
            fn decode(
                value: &ondatra_gnmi::TypedValue,
            ) -> Result<Self, $crate::error::UnmarshalError> {
                let name = $crate::schema::identity_name(value)?;
                $name::try_from_yang(name).ok_or_else(|| {
                    $crate::error::UnmarshalError::UnknownIdentity(
                        name.to_owned(),
                        stringify!($name),
                    )
                })
            }
        }
    };
}

pub(crate) use yang_enum;

// ===== helper functions =====

fn type_mismatch(
    expected: &'static str,
    value: &TypedValue,
) -> UnmarshalError {
    UnmarshalError::TypeMismatch {
        expected,
        got: value.kind(),
    }
}

// Returns the name of an enum or identity value, without its module prefix.
pub(crate) fn identity_name(
    value: &TypedValue,
) -> Result<&str, UnmarshalError> {
    match value {
        TypedValue::String(v) | TypedValue::Ascii(v) => {
            Ok(v.rsplit_once(':').map_or(v.as_str(), |(_, name)| name))
        }
        _ => Err(type_mismatch("identity", value)),
    }
}

// Returns whether the path addresses the intended configuration shadow of a
// container, which isn't modelled by the telemetry nodes.
pub(crate) fn is_config(path: &[PathElem]) -> bool {
    path.first().is_some_and(|elem| elem.name == "config")
}

pub(crate) fn unmarshal_leaf<T: LeafValue>(
    leaf: &mut Option<T>,
    path: &[PathElem],
    value: Option<&TypedValue>,
    node: &'static str,
) -> Result<(), UnmarshalError> {
    if let Some(elem) = path.first() {
        return Err(UnmarshalError::UnknownElement(elem.name.clone(), node));
    }
    *leaf = value.map(T::decode).transpose()?;
    Ok(())
}

pub(crate) fn unmarshal_container<T: SchemaNode>(
    container: &mut Option<T>,
    path: &[PathElem],
    value: Option<&TypedValue>,
) -> Result<(), UnmarshalError> {
    if path.is_empty() && value.is_none() {
        *container = None;
        return Ok(());
    }
    if value.is_none() && container.is_none() {
        return Ok(());
    }
    let created = container.is_none();
    let result =
        container.get_or_insert_with(T::default).unmarshal(path, value);
    if result.is_err() && created {
        *container = None;
    }
    result
}

// Applies a datapoint to the list entry addressed by `elem`, creating the
// entry when needed.
pub(crate) fn unmarshal_list<T: ListEntry>(
    list: &mut BTreeMap<T::Key, T>,
    elem: &PathElem,
    path: &[PathElem],
    value: Option<&TypedValue>,
) -> Result<(), UnmarshalError> {
    let key = elem
        .key
        .get(T::KEY)
        .ok_or(UnmarshalError::MissingKey(T::KEY))?;
    let key = T::parse_key(key)?;
    if value.is_none() {
        if path.is_empty() {
            list.remove(&key);
        } else if let Some(entry) = list.get_mut(&key) {
            entry.unmarshal(path, value)?;
        }
        return Ok(());
    }
    let created = !list.contains_key(&key);
    let entry = list.entry(key.clone()).or_insert_with(|| {
        let mut entry = T::default();
        entry.set_key(&key);
        entry
    });
    let result = entry.unmarshal(path, value);
    if result.is_err() && created {
        list.remove(&key);
    }
    result
}

pub(crate) fn parse_uint_key<T: std::str::FromStr>(
    key: &'static str,
    value: &str,
) -> Result<T, UnmarshalError> {
    value
        .parse()
        .map_err(|_| UnmarshalError::InvalidKey(key, value.to_owned()))
}

// Builds the error for a path that doesn't address any element of a node.
pub(crate) fn unknown_element(
    path: &[PathElem],
    value: Option<&TypedValue>,
    node: &'static str,
) -> UnmarshalError {
    match (path.first(), value) {
        (Some(elem), _) => {
            UnmarshalError::UnknownElement(elem.name.clone(), node)
        }
        (None, None) => UnmarshalError::UnsupportedDelete(node),
        (None, Some(value)) => type_mismatch("container", value),
    }
}
