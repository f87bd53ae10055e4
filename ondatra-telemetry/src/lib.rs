//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Typed telemetry accessors for a device under test.
//!
//! Every accessor is a [`Query`] (or [`QueryAny`] for paths with list key
//! wildcards) rooted at [`Dut::telemetry`]. Queries issue `ONCE` requests
//! with `lookup`/`get`, or `STREAM` subscriptions with `watch`, `wait_for`
//! and `collect`. Received datapoints are unmarshalled into the typed schema
//! nodes of the [`schema`] module.

#[macro_use]
mod macros;

pub mod batch;
pub mod dut;
pub mod error;
pub mod lldp;
pub mod platform;
pub mod qualified;
pub mod query;
pub mod schema;
pub mod watcher;

pub use batch::Batch;
pub use dut::Dut;
pub use error::{Error, Result, UnmarshalError};
pub use qualified::{Metadata, Qualified};
pub use query::{Query, QueryAny, QueryValue};
pub use watcher::{Collection, WatchOutcome, Watcher};
