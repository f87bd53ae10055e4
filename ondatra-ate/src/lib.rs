//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Translation of ATE topology descriptions into IxNetwork config.

pub mod error;
pub mod ixate;
mod networks;
pub mod topology;

pub use error::{Error, Result};
pub use ixate::{IxAte, RouteTables};
