//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! gNMI data model shared by the telemetry accessors: schema paths, typed
//! values, datapoints, and the [`Target`] runtime seam used to issue `ONCE`
//! and `STREAM` subscriptions against a device under test.

pub mod datapoint;
pub mod error;
#[cfg(feature = "testing")]
pub mod memory;
pub mod path;
pub mod target;
pub mod value;

pub use datapoint::{DataPoint, bundle_datapoints};
pub use error::{Error, Result};
pub use path::{Path, PathElem};
pub use target::{Subscription, Target};
pub use value::TypedValue;
