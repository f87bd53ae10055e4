//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! IxNetwork JSON config model and client.
//!
//! Config objects mirror the IxNetwork REST model. Every node carries its
//! XPath, which the [`Client`] recomputes before pushing a config and uses to
//! track the REST IDs assigned by the session.

pub mod client;
pub mod config;
pub mod error;
pub mod multivalue;
pub mod xpath;

pub use client::{Client, ConfigSession};
pub use config::*;
pub use error::{Error, Result, SessionError};
pub use multivalue::{
    Multivalue, MultivalueCounter, MultivalueSingleValue, MultivalueValueList,
    multivalue_bool, multivalue_false, multivalue_str,
    multivalue_str_inc_counter, multivalue_str_list, multivalue_true,
    multivalue_u32,
};
pub use xpath::XPath;
