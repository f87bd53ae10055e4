//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::time::Duration;

use ondatra_gnmi::Path;
use tracing::debug;

use crate::dut::Dut;
use crate::error::{Error, Result};
use crate::qualified::{Metadata, Qualified};
use crate::query::{spawn_watch, unmarshal_node};
use crate::schema::Device;
use crate::watcher::Watcher;

// Group of telemetry paths of one device, queried together and unmarshalled
// into a single device tree.
#[derive(Debug)]
pub struct Batch {
    dut: Dut,
    paths: Vec<Path>,
}

// ===== impl Batch =====

impl Batch {
    pub(crate) fn new(dut: Dut) -> Batch {
        Batch { dut, paths: vec![] }
    }

    pub(crate) fn add(&mut self, dut: &Dut, path: Path) -> Result<()> {
        if !self.dut.same_device(dut) {
            return Err(Error::ForeignDevice(
                dut.name().to_owned(),
                self.dut.name().to_owned(),
            ));
        }
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
        Ok(())
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    // Fetches all paths of the batch at once.
    pub async fn lookup(&self) -> Result<Qualified<Device>> {
        if self.paths.is_empty() {
            return Err(Error::EmptyBatch);
        }
        let target = self.dut.target();
        debug!(dut = %target.name(), paths = self.paths.len(), "lookup");
        let dps = target.get(&self.paths).await?;
        let mut device = Device::default();
        let qv = match unmarshal_node(&mut device, &dps, 0, &Path::root()) {
            Some(md) => Qualified::with_value(md, device),
            None => Qualified::new(Metadata::unset(Path::root())),
        };
        Ok(qv)
    }

    // Subscribes to all paths of the batch, delivering the accumulated device
    // tree to `predicate` after every update.
    pub async fn watch<F>(
        &self,
        timeout: Duration,
        predicate: F,
    ) -> Result<Watcher<Device>>
    where
        F: FnMut(&Qualified<Device>) -> bool + Send + 'static,
    {
        if self.paths.is_empty() {
            return Err(Error::EmptyBatch);
        }
        let target = self.dut.target();
        debug!(dut = %target.name(), paths = self.paths.len(), "subscribe");
        let subscription = target.subscribe(&self.paths).await?;
        let task = spawn_watch::<Device, Device, F>(
            subscription,
            Path::root(),
            0,
            |device| Some(device.clone()),
            timeout,
            predicate,
        );
        Ok(Watcher::new("/".to_owned(), task))
    }
}
