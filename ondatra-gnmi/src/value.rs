//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use itertools::Itertools;
use serde::{Deserialize, Serialize};

// Scalar or structured value carried by a gNMI update.
#[derive(Clone, Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypedValue {
    String(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
    Bytes(Vec<u8>),
    Double(f64),
    Decimal { digits: i64, precision: u32 },
    Ascii(String),
    Json(serde_json::Value),
    LeafList(Vec<TypedValue>),
}

// ===== impl TypedValue =====

impl TypedValue {
    // Returns the name of the value type, used in decoding errors.
    pub fn kind(&self) -> &'static str {
        match self {
            TypedValue::String(..) => "string",
            TypedValue::Int(..) => "int",
            TypedValue::Uint(..) => "uint",
            TypedValue::Bool(..) => "bool",
            TypedValue::Bytes(..) => "bytes",
            TypedValue::Double(..) => "double",
            TypedValue::Decimal { .. } => "decimal64",
            TypedValue::Ascii(..) => "ascii",
            TypedValue::Json(..) => "json",
            TypedValue::LeafList(..) => "leaf-list",
        }
    }

    // Converts a decimal64 value to its floating point representation.
    pub fn decimal_to_f64(digits: i64, precision: u32) -> f64 {
        digits as f64 / 10f64.powi(precision as i32)
    }
}

impl std::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedValue::String(v) | TypedValue::Ascii(v) => write!(f, "{v:?}"),
            TypedValue::Int(v) => write!(f, "{v}"),
            TypedValue::Uint(v) => write!(f, "{v}"),
            TypedValue::Bool(v) => write!(f, "{v}"),
            TypedValue::Bytes(v) => {
                write!(f, "0x{}", v.iter().map(|b| format!("{b:02x}")).join(""))
            }
            TypedValue::Double(v) => write!(f, "{v}"),
            TypedValue::Decimal { digits, precision } => {
                write!(f, "{}", TypedValue::decimal_to_f64(*digits, *precision))
            }
            TypedValue::Json(v) => write!(f, "{v}"),
            TypedValue::LeafList(v) => {
                write!(f, "[{}]", v.iter().map(|v| v.to_string()).join(", "))
            }
        }
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> TypedValue {
        TypedValue::String(value.to_owned())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> TypedValue {
        TypedValue::String(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> TypedValue {
        TypedValue::Bool(value)
    }
}

impl From<u64> for TypedValue {
    fn from(value: u64) -> TypedValue {
        TypedValue::Uint(value)
    }
}

impl From<u32> for TypedValue {
    fn from(value: u32) -> TypedValue {
        TypedValue::Uint(value.into())
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> TypedValue {
        TypedValue::Int(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> TypedValue {
        TypedValue::Double(value)
    }
}
