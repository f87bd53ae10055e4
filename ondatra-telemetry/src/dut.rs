//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::Arc;

use ondatra_gnmi::Target;

use crate::batch::Batch;
use crate::query::Query;
use crate::schema::Device;

// Device under test, as seen through its gNMI target.
#[derive(Clone, Debug)]
pub struct Dut {
    target: Arc<dyn Target>,
}

// ===== impl Dut =====

impl Dut {
    pub fn new(target: Arc<dyn Target>) -> Dut {
        Dut { target }
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    // Root of the telemetry accessors of this device.
    pub fn telemetry(&self) -> Query<Device, Device> {
        Query::root(self.clone())
    }

    // Creates an empty batch of paths of this device.
    pub fn new_batch(&self) -> Batch {
        Batch::new(self.clone())
    }

    pub(crate) fn target(&self) -> &dyn Target {
        self.target.as_ref()
    }

    pub(crate) fn same_device(&self, other: &Dut) -> bool {
        Arc::ptr_eq(&self.target, &other.target)
    }
}
